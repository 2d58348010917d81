//! Excel writing via rust_xlsxwriter

use rust_xlsxwriter::{Format, Workbook};
use std::path::Path;

use crate::error::{ExtractError, Result};

/// Write one word list as a single-column workbook: a bold header cell
/// followed by one row per word, no index column.
pub fn write_word_list(output_path: &Path, header: &str, words: &[String]) -> Result<()> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    let header_format = Format::new().set_bold();
    worksheet
        .write_string_with_format(0, 0, header, &header_format)
        .map_err(|e| ExtractError::Export(e.to_string()))?;

    for (row, word) in words.iter().enumerate() {
        worksheet
            .write_string(row as u32 + 1, 0, word)
            .map_err(|e| ExtractError::Export(e.to_string()))?;
    }

    workbook
        .save(output_path)
        .map_err(|e| ExtractError::Export(e.to_string()))?;

    Ok(())
}
