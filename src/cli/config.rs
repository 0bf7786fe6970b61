//! Configuration management for HealthBuddy
//!
//! Provides TOML-based configuration with defaults and validation.
//! Location: ~/.healthbuddy/config.toml

use crate::errors::{AdvisorError, Result};
use crate::types::Language;
use crate::view::Theme;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Complete configuration for HealthBuddy
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub ollama: OllamaConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

/// Ollama connection configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OllamaConfig {
    pub host: String,
    pub port: u16,
    pub advice_model: String,
    pub translation_model: String,
    pub timeout_secs: u64,
}

/// Card display configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub default_language: Language,
    pub default_theme: Theme,
    pub color_output: bool,
}

impl Default for OllamaConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 11434,
            advice_model: "qwen2.5:7b-instruct".to_string(),
            translation_model: "qwen2.5:7b-instruct".to_string(),
            timeout_secs: 60,
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            default_language: Language::English,
            default_theme: Theme::Dark,
            color_output: true,
        }
    }
}

impl Config {
    /// Load configuration from file or use defaults
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match Self::source_path(path) {
            Some(config_path) => Self::load_from_file(&config_path),
            None => Ok(Config::default()),
        }
    }

    /// File [`Config::load`] reads: `explicit` when given, otherwise the
    /// standard location if it exists. `None` means built-in defaults.
    pub fn source_path(explicit: Option<&Path>) -> Option<PathBuf> {
        match explicit {
            Some(path) => Some(path.to_path_buf()),
            None => Self::default_path().filter(|path| path.exists()),
        }
    }

    /// Load configuration from specific file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| AdvisorError::ConfigError(format!("Failed to read config: {}", e)))?;

        let config: Config = toml::from_str(&contents)
            .map_err(|e| AdvisorError::ConfigError(format!("Failed to parse config: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Standard config location
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".healthbuddy").join("config.toml"))
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.ollama.host.trim().is_empty() {
            return Err(AdvisorError::ConfigError("host must not be empty".to_string()));
        }

        if self.ollama.port == 0 {
            return Err(AdvisorError::ConfigError(
                "port must be greater than 0".to_string(),
            ));
        }

        if self.ollama.timeout_secs == 0 {
            return Err(AdvisorError::ConfigError(
                "timeout_secs must be greater than 0".to_string(),
            ));
        }

        if self.ollama.advice_model.trim().is_empty()
            || self.ollama.translation_model.trim().is_empty()
        {
            return Err(AdvisorError::ConfigError(
                "advice_model and translation_model must be set".to_string(),
            ));
        }

        Ok(())
    }

    /// Save configuration to file
    pub fn save(&self, path: &Path) -> Result<()> {
        let contents = toml::to_string_pretty(self)
            .map_err(|e| AdvisorError::ConfigError(format!("Failed to serialize config: {}", e)))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| AdvisorError::ConfigError(format!("Failed to create config dir: {}", e)))?;
        }

        std::fs::write(path, contents)
            .map_err(|e| AdvisorError::ConfigError(format!("Failed to write config: {}", e)))?;

        Ok(())
    }

    /// Get Ollama base URL
    pub fn ollama_url(&self) -> String {
        format!("http://{}:{}", self.ollama.host, self.ollama.port)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.ollama.timeout_secs)
    }
}
