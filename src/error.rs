use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("Input file does not exist: {0}")]
    InputMissing(String),

    #[error("Could not read spreadsheet: {0}")]
    SpreadsheetRead(String),

    #[error("Missing improvement keyword, searched all of the following columns: {0:?}")]
    ImprovementColumnMissing(Vec<String>),

    #[error("Missing strength keyword, searched all of the following columns: {0:?}")]
    StrengthColumnMissing(Vec<String>),

    #[error("Failed to load the tagging model due to: {0}")]
    ModelLoad(String),

    #[error("Could not save spreadsheet(s) due to: {0}")]
    Export(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ExtractError>;
