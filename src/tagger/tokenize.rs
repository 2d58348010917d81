//! Tokenization
//!
//! Splits free text into word, number and punctuation tokens. Case is
//! preserved; the tagger decides lookup casing itself. No sentence
//! segmentation happens here.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // words (contractions kept whole), then numbers, then single
    // punctuation marks
    static ref TOKEN_RE: Regex =
        Regex::new(r"[A-Za-z]+(?:'[A-Za-z]+)*|\d+(?:[.,]\d+)*|[^\sA-Za-z\d]").unwrap();
    pub(crate) static ref NUMBER_RE: Regex = Regex::new(r"^\d+(?:[.,]\d+)*$").unwrap();
}

pub fn tokenize(text: &str) -> Vec<String> {
    TOKEN_RE
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}
