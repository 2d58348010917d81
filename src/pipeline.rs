//! Extraction pipeline
//!
//! Sequences validate → resolve columns → load tagger → read columns →
//! extract → export on the calling thread, reporting a short glyph-prefixed
//! status string before each visible phase. No phase is retried and a
//! failure in any phase ends the run.

use std::path::PathBuf;

use crate::columns;
use crate::error::{ExtractError, Result};
use crate::export;
use crate::extractor::{self, WordBuckets};
use crate::reader::SheetData;
use crate::tagger::Tagger;

/// Everything one run needs, picked by the shells up front. Both paths must
/// be chosen before a run starts; the shells enforce that precondition.
#[derive(Debug, Clone)]
pub struct RunRequest {
    pub input_file: PathBuf,
    pub output_dir: PathBuf,
    pub model_dir: Option<PathBuf>,
}

/// Per-column row counts of a completed run. A row counts whether or not
/// its cell held text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub improvement_rows: usize,
    pub strength_rows: usize,
}

impl RunSummary {
    pub fn status_line(&self) -> String {
        format!(
            "✅ Extracted {} improvement rows and {} strength rows.",
            self.improvement_rows, self.strength_rows
        )
    }
}

/// Run the whole pipeline, streaming progress strings through `report`.
pub fn run<F: FnMut(&str)>(request: &RunRequest, mut report: F) -> Result<RunSummary> {
    if !request.input_file.exists() {
        return Err(ExtractError::InputMissing(
            request.input_file.display().to_string(),
        ));
    }
    if !request.output_dir.exists() {
        std::fs::create_dir_all(&request.output_dir)?;
    }

    report("🔄 Identifying the columns.");
    let sheet = SheetData::open(&request.input_file)?;
    let resolved = columns::resolve(&sheet.headers())?;

    report("🔄 Loading the tagging model.");
    let tagger = Tagger::load(request.model_dir.as_deref())?;

    report("🔄 Extracting column contents.");
    let improvement_cells = sheet.column(resolved.improvement.index);
    let strength_cells = sheet.column(resolved.strength.index);

    let buckets = WordBuckets {
        improvement: extractor::extract_words(&tagger, &improvement_cells),
        strength: extractor::extract_words(&tagger, &strength_cells),
    };

    report("🔄 Converting to Excel.");
    export::export_buckets(&request.output_dir, &buckets)?;

    Ok(RunSummary {
        improvement_rows: improvement_cells.len(),
        strength_rows: strength_cells.len(),
    })
}

/// Run the pipeline and fold the outcome into the single terminal status
/// string the shells display.
pub fn run_to_status<F: FnMut(&str)>(request: &RunRequest, report: F) -> String {
    match run(request, report) {
        Ok(summary) => summary.status_line(),
        Err(err) => format!("❌ {err}"),
    }
}
