use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "survey-words")]
#[command(about = "Extract adjectives and nouns from survey improvement/strength columns", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Print each progress message on its own line instead of a spinner
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the extraction pipeline on one survey spreadsheet
    Extract {
        /// Input .xlsx file with a header row
        #[arg(required = true)]
        input: PathBuf,

        /// Output folder for the four word spreadsheets (created if absent)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Tagging model directory (default: bundled resources)
        #[arg(long)]
        model_dir: Option<PathBuf>,
    },

    /// Show the header row and which columns resolve
    Inspect {
        /// Input .xlsx file with a header row
        #[arg(required = true)]
        input: PathBuf,
    },

    /// Tag a sentence and print token/tag pairs
    Tag {
        /// Text to tag
        #[arg(required = true)]
        text: String,

        /// Tagging model directory (default: bundled resources)
        #[arg(long)]
        model_dir: Option<PathBuf>,
    },

    /// Show or edit the configuration
    Config {
        /// Set the default output folder
        #[arg(long)]
        set_output_dir: Option<PathBuf>,

        /// Set the tagging model directory
        #[arg(long)]
        set_model_dir: Option<PathBuf>,

        /// Show the configuration
        #[arg(long)]
        show: bool,
    },
}
