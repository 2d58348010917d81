//! Part-of-speech tagger
//!
//! Loads the bundled lexicon model (word→tag map plus suffix rules) and
//! exposes `text → Vec<TaggedToken>`. The model lives under
//! `resources/en-pos-lexicon/` as a versioned directory carrying a
//! `config.json` marker; a directory without the marker is not a model.

mod tokenize;

pub use tokenize::tokenize;

use serde::Deserialize;
use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ExtractError, Result};

pub const MODEL_DIR_NAME: &str = "en-pos-lexicon";
pub const CONFIG_MARKER: &str = "config.json";

/// Universal POS tagset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PosTag {
    Adj,
    Adp,
    Adv,
    Aux,
    Cconj,
    Det,
    Intj,
    Noun,
    Num,
    Part,
    Pron,
    Propn,
    Punct,
    Sconj,
    Sym,
    Verb,
    X,
}

impl fmt::Display for PosTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PosTag::Adj => "ADJ",
            PosTag::Adp => "ADP",
            PosTag::Adv => "ADV",
            PosTag::Aux => "AUX",
            PosTag::Cconj => "CCONJ",
            PosTag::Det => "DET",
            PosTag::Intj => "INTJ",
            PosTag::Noun => "NOUN",
            PosTag::Num => "NUM",
            PosTag::Part => "PART",
            PosTag::Pron => "PRON",
            PosTag::Propn => "PROPN",
            PosTag::Punct => "PUNCT",
            PosTag::Sconj => "SCONJ",
            PosTag::Sym => "SYM",
            PosTag::Verb => "VERB",
            PosTag::X => "X",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedToken {
    pub text: String,
    pub tag: PosTag,
}

/// `config.json` inside a model directory.
#[derive(Debug, Clone, Deserialize)]
pub struct ModelConfig {
    pub name: String,
    pub version: String,
    pub language: String,
    pub data_file: String,
}

#[derive(Debug, Deserialize)]
struct SuffixRule {
    suffix: String,
    tag: PosTag,
}

#[derive(Debug, Deserialize)]
struct LexiconFile {
    words: HashMap<String, PosTag>,
    suffix_rules: Vec<SuffixRule>,
    default_tag: PosTag,
}

pub struct Tagger {
    config: ModelConfig,
    words: HashMap<String, PosTag>,
    suffix_rules: Vec<SuffixRule>,
    default_tag: PosTag,
}

impl Tagger {
    /// Load the tagging model, either from an explicit directory or from
    /// the bundled resources. The override skips root resolution but not
    /// marker verification.
    pub fn load(model_dir: Option<&Path>) -> Result<Self> {
        let root = match model_dir {
            Some(dir) => dir.to_path_buf(),
            None => resource_root()?,
        };
        let model_dir = resolve_model_dir(&root)?;

        let config_path = model_dir.join(CONFIG_MARKER);
        let config: ModelConfig = read_model_json(&config_path)?;
        let lexicon: LexiconFile = read_model_json(&model_dir.join(&config.data_file))?;

        Ok(Self {
            config,
            words: lexicon.words,
            suffix_rules: lexicon.suffix_rules,
            default_tag: lexicon.default_tag,
        })
    }

    pub fn config(&self) -> &ModelConfig {
        &self.config
    }

    /// Tag a piece of text, preserving token order and original casing.
    pub fn tag(&self, text: &str) -> Vec<TaggedToken> {
        tokenize(text)
            .into_iter()
            .map(|token| {
                let tag = self.tag_token(&token);
                TaggedToken { text: token, tag }
            })
            .collect()
    }

    fn tag_token(&self, token: &str) -> PosTag {
        let lowered = token.to_lowercase();
        if let Some(tag) = self.words.get(&lowered) {
            return *tag;
        }
        if !token.chars().any(|c| c.is_alphanumeric()) {
            return PosTag::Punct;
        }
        if tokenize::NUMBER_RE.is_match(token) {
            return PosTag::Num;
        }
        // longest matching suffix rule wins
        let rule = self
            .suffix_rules
            .iter()
            .filter(|r| lowered.ends_with(&r.suffix) && lowered.len() > r.suffix.len())
            .max_by_key(|r| r.suffix.len());
        if let Some(rule) = rule {
            return rule.tag;
        }
        // unknown capitalized words are treated as proper nouns so names
        // stay out of the noun buckets
        if token.chars().next().is_some_and(|c| c.is_uppercase()) {
            return PosTag::Propn;
        }
        self.default_tag
    }
}

/// Locate the bundled model root: next to the installed executable first,
/// then the source tree.
fn resource_root() -> Result<PathBuf> {
    if let Some(exe_dir) = std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(Path::to_path_buf))
    {
        let root = exe_dir.join("resources").join(MODEL_DIR_NAME);
        if root.is_dir() {
            return Ok(root);
        }
    }

    let root = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("resources")
        .join(MODEL_DIR_NAME);
    if root.is_dir() {
        return Ok(root);
    }

    Err(ExtractError::ModelLoad(format!(
        "model resource directory \"{}\" not found next to the executable or in the source tree",
        MODEL_DIR_NAME
    )))
}

/// Pick the model directory under a resource root: the first immediate
/// subdirectory carrying `config.json`, else the root itself if it carries
/// the marker. A root without a marker anywhere is a hard failure rather
/// than an unverified guess.
pub fn resolve_model_dir(root: &Path) -> Result<PathBuf> {
    let entries = fs::read_dir(root).map_err(|e| {
        ExtractError::ModelLoad(format!("cannot read model directory {}: {}", root.display(), e))
    })?;

    let mut subdirs: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_dir())
        .collect();
    subdirs.sort();

    for subdir in subdirs {
        if subdir.join(CONFIG_MARKER).is_file() {
            return Ok(subdir);
        }
    }
    if root.join(CONFIG_MARKER).is_file() {
        return Ok(root.to_path_buf());
    }

    Err(ExtractError::ModelLoad(format!(
        "no {} marker found under {}",
        CONFIG_MARKER,
        root.display()
    )))
}

fn read_model_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let content = fs::read_to_string(path)
        .map_err(|e| ExtractError::ModelLoad(format!("cannot read {}: {}", path.display(), e)))?;
    serde_json::from_str(&content)
        .map_err(|e| ExtractError::ModelLoad(format!("cannot parse {}: {}", path.display(), e)))
}
