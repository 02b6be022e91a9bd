//! Configuration management for the Annexure-C generator
//!
//! Config stored at: ~/.config/annexure-c/config.json

use std::path::PathBuf;

use annexure_types::{ConfigError, OutputFormat, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::render::Escaping;

/// Exporter/CHA name printed in the declaration block
pub const DEFAULT_EXPORTER_NAME: &str = "SHRIRAM ENTERPRISES(11/800)";

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Name printed as the declared exporter/CHA
    #[serde(default = "default_exporter_name")]
    pub exporter_name: String,

    /// Escape markup in entered values
    #[serde(default = "default_true")]
    pub escape_html: bool,

    /// Directory for generated documents (current directory if unset)
    #[serde(default)]
    pub output_dir: Option<PathBuf>,

    /// Default output format for summaries (json, table)
    #[serde(default)]
    pub output_format: OutputFormat,

    /// Open the document in the browser after rendering
    #[serde(default)]
    pub open_after_render: bool,
}

fn default_exporter_name() -> String {
    DEFAULT_EXPORTER_NAME.to_string()
}

fn default_true() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            exporter_name: default_exporter_name(),
            escape_html: true,
            output_dir: None,
            output_format: OutputFormat::default(),
            open_after_render: false,
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or(ConfigError::NotFound)?
            .join("annexure-c");
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    /// Directory generated documents are written to
    pub fn output_dir(&self) -> PathBuf {
        self.output_dir.clone().unwrap_or_else(|| PathBuf::from("."))
    }

    pub fn escaping(&self) -> Escaping {
        if self.escape_html {
            Escaping::Html
        } else {
            Escaping::Verbatim
        }
    }

    /// Load config from the default location, or defaults if absent
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Save config to the default location
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn load_from(path: &std::path::Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)
                .map_err(|e| ConfigError::ParseError(e.to_string()))?;
            debug!(path = %path.display(), "loaded config");
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    pub fn save_to(&self, path: &std::path::Path) -> Result<()> {
        // Ensure directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        debug!(path = %path.display(), "saved config");
        Ok(())
    }
}

impl std::fmt::Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Annexure-C Generator Configuration")?;
        writeln!(f, "==================================")?;
        writeln!(f)?;
        writeln!(f, "Exporter name:     {}", self.exporter_name)?;
        writeln!(f, "Escape HTML:       {}", self.escape_html)?;
        writeln!(f, "Output dir:        {}", self.output_dir().display())?;
        writeln!(f, "Output format:     {}", self.output_format)?;
        writeln!(f, "Open after render: {}", self.open_after_render)?;

        if let Ok(path) = Self::config_path() {
            writeln!(f)?;
            writeln!(f, "Config file:       {}", path.display())?;
        }

        Ok(())
    }
}
