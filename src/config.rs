use crate::error::{ExtractError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Optional user defaults, stored under `~/.config/survey-words/`.
/// CLI flags always win over config values.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    pub default_output_dir: Option<PathBuf>,
    pub model_dir: Option<PathBuf>,
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| ExtractError::Config("home directory not found".into()))?;
        Ok(home.join(".config").join("survey-words").join("config.json"))
    }

    pub fn set_default_output_dir(&mut self, dir: PathBuf) -> Result<()> {
        self.default_output_dir = Some(dir);
        self.save()
    }

    pub fn set_model_dir(&mut self, dir: PathBuf) -> Result<()> {
        self.model_dir = Some(dir);
        self.save()
    }
}
