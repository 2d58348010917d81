pub mod cli;
pub mod columns;
pub mod config;
pub mod error;
pub mod export;
pub mod extractor;
pub mod pipeline;
pub mod reader;
pub mod tagger;

pub use error::{ExtractError, Result};
pub use pipeline::{RunRequest, RunSummary};
