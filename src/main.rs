use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;
use survey_words::{cli, config, pipeline, tagger};

use cli::{Cli, Commands};
use config::Config;
use survey_words::error::Result;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Commands::Extract {
            input,
            output,
            model_dir,
        } => {
            println!("📋 survey-words - extraction\n");

            let Some(output_dir) = output.or(config.default_output_dir.clone()) else {
                eprintln!("❌ Please choose an output folder (--output) before running extraction.");
                std::process::exit(1);
            };

            let request = pipeline::RunRequest {
                input_file: input,
                output_dir,
                model_dir: model_dir.or(config.model_dir.clone()),
            };

            let status = if cli.verbose {
                pipeline::run_to_status(&request, |message| println!("{message}"))
            } else {
                let spinner = spinner();
                let status = pipeline::run_to_status(&request, |message| {
                    spinner.set_message(message.to_string());
                });
                spinner.finish_and_clear();
                status
            };

            println!("{status}");
            if status.starts_with('❌') {
                std::process::exit(1);
            }
        }

        Commands::Inspect { input } => {
            println!("🔍 survey-words - column inspection\n");

            let sheet = survey_words::reader::SheetData::open(&input)?;
            let headers = sheet.headers();
            println!("Headers:");
            for (index, header) in headers.iter().enumerate() {
                println!("  [{index}] {header}");
            }

            match survey_words::columns::resolve(&headers) {
                Ok(resolved) => {
                    println!("\n✔ improvement column: [{}] {}", resolved.improvement.index, resolved.improvement.header);
                    println!("✔ strength column: [{}] {}", resolved.strength.index, resolved.strength.header);
                }
                Err(err) => {
                    eprintln!("\n❌ {err}");
                    std::process::exit(1);
                }
            }
        }

        Commands::Tag { text, model_dir } => {
            let tagger = tagger::Tagger::load(
                model_dir.or(config.model_dir.clone()).as_deref(),
            )?;
            for token in tagger.tag(&text) {
                println!("{}\t{}", token.text, token.tag);
            }
        }

        Commands::Config {
            set_output_dir,
            set_model_dir,
            show,
        } => {
            let mut config = config;

            if let Some(dir) = set_output_dir {
                config.set_default_output_dir(dir)?;
                println!("✔ default output folder saved");
            }

            if let Some(dir) = set_model_dir {
                config.set_model_dir(dir)?;
                println!("✔ model directory saved");
            }

            if show {
                println!("Configuration:");
                println!(
                    "  default output folder: {}",
                    config
                        .default_output_dir
                        .as_ref()
                        .map(|p| p.display().to_string())
                        .unwrap_or_else(|| "(not set)".into())
                );
                println!(
                    "  model directory: {}",
                    config
                        .model_dir
                        .as_ref()
                        .map(|p| p.display().to_string())
                        .unwrap_or_else(|| "(bundled)".into())
                );
            }
        }
    }

    Ok(())
}

fn spinner() -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}
