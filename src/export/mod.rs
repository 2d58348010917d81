//! Spreadsheet export

pub mod excel;

use std::path::Path;

use crate::error::Result;
use crate::extractor::WordBuckets;

pub const IMPROVEMENT_ADJECTIVES_FILE: &str = "Improvement adjectives.xlsx";
pub const STRENGTH_ADJECTIVES_FILE: &str = "Strength adjectives.xlsx";
pub const IMPROVEMENT_NOUNS_FILE: &str = "Improvement nouns.xlsx";
pub const STRENGTH_NOUNS_FILE: &str = "Strength nouns.xlsx";

pub const ADJECTIVES_HEADER: &str = "Adjectives";
pub const NOUNS_HEADER: &str = "Nouns";

/// Write the four bucket files into the output directory. Earlier files are
/// not removed when a later write fails; the caller reports the failure.
pub fn export_buckets(output_dir: &Path, buckets: &WordBuckets) -> Result<()> {
    excel::write_word_list(
        &output_dir.join(IMPROVEMENT_ADJECTIVES_FILE),
        ADJECTIVES_HEADER,
        &buckets.improvement.adjectives,
    )?;
    excel::write_word_list(
        &output_dir.join(STRENGTH_ADJECTIVES_FILE),
        ADJECTIVES_HEADER,
        &buckets.strength.adjectives,
    )?;
    excel::write_word_list(
        &output_dir.join(IMPROVEMENT_NOUNS_FILE),
        NOUNS_HEADER,
        &buckets.improvement.nouns,
    )?;
    excel::write_word_list(
        &output_dir.join(STRENGTH_NOUNS_FILE),
        NOUNS_HEADER,
        &buckets.strength.nouns,
    )?;
    Ok(())
}
