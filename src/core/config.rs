//! Configuration management

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{info, warn};

use crate::core::errors::{Result, TranslationError};
use crate::core::models::GROQ_MODELS;
use crate::core::providers::gemini::DEFAULT_GEMINI_URL;
use crate::core::providers::groq::DEFAULT_GROQ_URL;

/// Configuration for translator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TranslatorConfig {
    /// Key for the Groq cascade; required before any translation
    pub groq_api_key: Option<String>,
    /// Key for Gemini; without it sentences go straight to Groq
    pub gemini_api_key: Option<String>,
    /// Full Groq chat completions URL
    pub groq_endpoint: String,
    /// Gemini API base; `/models/<id>:generateContent` is appended
    pub gemini_endpoint: String,
    /// Groq models in cascade order
    pub models: Vec<String>,
    /// Per-request HTTP timeout; unset means no timeout
    pub timeout_ms: Option<u64>,
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            groq_api_key: None,
            gemini_api_key: None,
            groq_endpoint: DEFAULT_GROQ_URL.to_string(),
            gemini_endpoint: DEFAULT_GEMINI_URL.to_string(),
            models: GROQ_MODELS.iter().map(|m| m.to_string()).collect(),
            timeout_ms: None,
        }
    }
}

impl TranslatorConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from any key/value source shaped like the environment
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        let models = match var("GROQ_MODELS") {
            Some(list) => {
                let models: Vec<String> = list
                    .split(',')
                    .map(str::trim)
                    .filter(|m| !m.is_empty())
                    .map(str::to_string)
                    .collect();
                info!("Using {} Groq models from GROQ_MODELS", models.len());
                models
            }
            None => defaults.models,
        };

        let timeout_ms = var("REQUEST_TIMEOUT_MS")
            .map(|v| {
                v.trim().parse::<u64>().map_err(|e| {
                    TranslationError::config(format!("REQUEST_TIMEOUT_MS is not a number: {}", e))
                })
            })
            .transpose()?;

        let config = Self {
            groq_api_key: var("GROQ_API_KEY"),
            gemini_api_key: var("GEMINI_API_KEY"),
            groq_endpoint: var("GROQ_API_URL").unwrap_or(defaults.groq_endpoint),
            gemini_endpoint: var("GEMINI_API_URL").unwrap_or(defaults.gemini_endpoint),
            models,
            timeout_ms,
        };
        config.validate()?;
        Ok(config)
    }

    /// Load from JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Override keys given on the command line
    pub fn with_keys(mut self, groq_api_key: Option<String>, gemini_api_key: Option<String>) -> Self {
        if groq_api_key.is_some() {
            self.groq_api_key = groq_api_key;
        }
        if gemini_api_key.is_some() {
            self.gemini_api_key = gemini_api_key;
        }
        self
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.groq_endpoint.trim().is_empty() {
            return Err(TranslationError::config("Groq endpoint is required"));
        }

        if self.gemini_endpoint.trim().is_empty() {
            return Err(TranslationError::config("Gemini endpoint is required"));
        }

        if self.models.iter().any(|m| m.trim().is_empty()) {
            return Err(TranslationError::config("Model ids must not be empty"));
        }

        if self.models.is_empty() {
            warn!("No Groq models configured, every translation will fail");
        }

        if self.groq_api_key.is_none() {
            warn!("GROQ_API_KEY is not set");
        }

        Ok(())
    }

    /// Groq key, or an error naming the missing variable
    pub fn require_groq_key(&self) -> Result<&str> {
        self.groq_api_key
            .as_deref()
            .ok_or_else(|| TranslationError::config("GROQ_API_KEY is not configured"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_keep_cascade_order() {
        let config = TranslatorConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.models, GROQ_MODELS);
        assert_eq!(config.groq_endpoint, DEFAULT_GROQ_URL);
        assert_eq!(config.groq_api_key, None);
        assert_eq!(config.timeout_ms, None);
    }

    #[test]
    fn test_env_overrides() {
        let config = TranslatorConfig::from_lookup(lookup(&[
            ("GROQ_API_KEY", "gsk_test"),
            ("GEMINI_API_KEY", "   "),
            ("GROQ_MODELS", "b-model, a-model ,,"),
            ("REQUEST_TIMEOUT_MS", "15000"),
        ]))
        .unwrap();

        assert_eq!(config.require_groq_key().unwrap(), "gsk_test");
        assert_eq!(config.gemini_api_key, None);
        assert_eq!(config.models, vec!["b-model", "a-model"]);
        assert_eq!(config.timeout_ms, Some(15000));
    }

    #[test]
    fn test_bad_timeout_is_rejected() {
        let result = TranslatorConfig::from_lookup(lookup(&[("REQUEST_TIMEOUT_MS", "soon")]));
        assert!(matches!(result, Err(TranslationError::ConfigError { .. })));
    }

    #[test]
    fn test_config_validation_missing_endpoint() {
        let config = TranslatorConfig {
            groq_endpoint: "".to_string(),
            ..Default::default()
        };

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_missing_groq_key() {
        let config = TranslatorConfig::default();
        assert!(config.validate().is_ok());
        assert!(config.require_groq_key().is_err());
    }

    #[test]
    fn test_cli_keys_override() {
        let config = TranslatorConfig {
            groq_api_key: Some("from-env".to_string()),
            ..Default::default()
        }
        .with_keys(None, Some("gemini".to_string()));

        assert_eq!(config.groq_api_key.as_deref(), Some("from-env"));
        assert_eq!(config.gemini_api_key.as_deref(), Some("gemini"));
    }

    #[test]
    fn test_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("translator.json");

        let config = TranslatorConfig {
            models: vec!["only-model".to_string()],
            timeout_ms: Some(5000),
            ..Default::default()
        };
        config.to_file(&path).unwrap();

        assert_eq!(TranslatorConfig::from_file(&path).unwrap(), config);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("translator.json");
        std::fs::write(&path, r#"{ "groq_api_key": "k" }"#).unwrap();

        let config = TranslatorConfig::from_file(&path).unwrap();
        assert_eq!(config.groq_api_key.as_deref(), Some("k"));
        assert_eq!(config.models, GROQ_MODELS);
    }
}
