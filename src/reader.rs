//! Spreadsheet reading
//!
//! Thin wrapper over calamine: opens the first worksheet of an `.xlsx`
//! file and exposes the header row plus column-limited views of the data.

use calamine::{open_workbook, Data, Reader, Xlsx};
use std::path::Path;

use crate::error::{ExtractError, Result};

/// The first worksheet of an input workbook, loaded into memory.
pub struct SheetData {
    range: calamine::Range<Data>,
}

impl SheetData {
    pub fn open(path: &Path) -> Result<Self> {
        let mut workbook: Xlsx<_> = open_workbook(path)
            .map_err(|e: calamine::XlsxError| ExtractError::SpreadsheetRead(e.to_string()))?;
        let range = workbook
            .worksheet_range_at(0)
            .ok_or_else(|| ExtractError::SpreadsheetRead("workbook has no worksheets".into()))?
            .map_err(|e| ExtractError::SpreadsheetRead(e.to_string()))?;
        Ok(Self { range })
    }

    /// Header row, every cell stringified regardless of its type.
    pub fn headers(&self) -> Vec<String> {
        match self.range.rows().next() {
            Some(row) => row.iter().map(|cell| cell.to_string()).collect(),
            None => Vec::new(),
        }
    }

    /// Data cells of one column, in row order, header excluded.
    ///
    /// Trailing empty cells are trimmed so each column acts as its own
    /// column-limited table; two columns of the same sheet may therefore
    /// have different row counts.
    pub fn column(&self, index: usize) -> Vec<Data> {
        let mut cells: Vec<Data> = self
            .range
            .rows()
            .skip(1)
            .map(|row| row.get(index).cloned().unwrap_or(Data::Empty))
            .collect();
        while matches!(cells.last(), Some(Data::Empty)) {
            cells.pop();
        }
        cells
    }
}
