//! Configuration, loaded from `.imsq/config.json` when present.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::parser::DEFAULT_CONFIDENCE_THRESHOLD;

/// LLM fallback settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Request timeout for one generation call, seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
        }
    }
}

/// Configuration for imsq.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub llm: LlmConfig,
    /// Rule results below this consult the LLM fallback.
    #[serde(default = "default_threshold")]
    pub confidence_threshold: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            llm: LlmConfig::default(),
            confidence_threshold: default_threshold(),
        }
    }
}

impl Config {
    /// Load configuration from `.imsq/config.json` under the current
    /// directory, falling back to defaults when the file is absent.
    pub fn load() -> Result<Self> {
        let path = std::env::current_dir()?.join(".imsq").join("config.json");
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Invalid config: {}", path.display()))
    }
}

fn default_model() -> String {
    "gemma:2b".to_string()
}

fn default_base_url() -> String {
    "http://localhost:11434".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_temperature() -> f32 {
    0.1
}

fn default_max_tokens() -> u32 {
    50
}

fn default_threshold() -> f32 {
    DEFAULT_CONFIDENCE_THRESHOLD
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_file_absent() {
        let config = Config::load_from(Path::new("/nonexistent/config.json")).unwrap();
        assert_eq!(config.llm.model, "gemma:2b");
        assert_eq!(config.llm.timeout_secs, 10);
        assert_eq!(config.confidence_threshold, DEFAULT_CONFIDENCE_THRESHOLD);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"llm": {"model": "llama3:8b"}}"#).unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.llm.model, "llama3:8b");
        assert_eq!(config.llm.base_url, "http://localhost:11434");
        assert_eq!(config.confidence_threshold, DEFAULT_CONFIDENCE_THRESHOLD);
    }

    #[test]
    fn test_invalid_config_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "not json").unwrap();
        assert!(Config::load_from(&path).is_err());
    }
}
