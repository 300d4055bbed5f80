use crate::errors::AppResult;
use crate::export::BOOKLET_FILE_NAME;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Booklet defaults. Every field can be overridden from the command line.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default = "default_project_name")]
    pub project_name: String,
    #[serde(default = "default_author")]
    pub author: String,
    #[serde(default = "default_output_file")]
    pub output_file: String,
    #[serde(default = "default_chart_dpi")]
    pub chart_dpi: u32,
}

fn default_project_name() -> String {
    "Funabashi City – 2025".to_string()
}
fn default_author() -> String {
    "Yuki".to_string()
}
fn default_output_file() -> String {
    BOOKLET_FILE_NAME.to_string()
}
fn default_chart_dpi() -> u32 {
    200
}

impl Default for Config {
    fn default() -> Self {
        Self {
            project_name: default_project_name(),
            author: default_author(),
            output_file: default_output_file(),
            chart_dpi: default_chart_dpi(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory (`~/.liqbook`)
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".liqbook")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("liqbook.conf")
    }

    /// Load configuration from `path` (or the standard location), or return
    /// defaults if the file does not exist. The file is never written.
    pub fn load(path: Option<&Path>) -> AppResult<Self> {
        let path = path
            .map(Path::to_path_buf)
            .unwrap_or_else(Self::config_file);

        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&path)?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> AppResult<Self> {
        if content.trim().is_empty() {
            return Ok(Config::default());
        }
        let cfg: Config = serde_yaml::from_str(content)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    fn validate(&self) -> AppResult<()> {
        if !(50..=600).contains(&self.chart_dpi) {
            return Err(crate::errors::AppError::Config(format!(
                "chart_dpi must be between 50 and 600, got {}",
                self.chart_dpi
            )));
        }
        Ok(())
    }
}
