// File: src/config.rs
// Purpose: Configuration parsing from crm-forms.toml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::invoice::PayloadPolicy;

/// Form configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FormsConfig {
    #[serde(default)]
    pub task: TaskConfig,

    #[serde(default)]
    pub invoice: InvoiceConfig,
}

/// Task and new-task modal settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskConfig {
    #[serde(default = "default_description_max_length")]
    pub description_max_length: usize,
}

/// Invoice settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvoiceConfig {
    /// What happens to blank required keys on save (default: reject)
    #[serde(default)]
    pub payload_policy: PayloadPolicy,

    #[serde(default = "default_tax_rate")]
    pub tax_rate: f64,

    #[serde(default = "default_currency")]
    pub currency: String,

    #[serde(default = "default_terms")]
    pub terms: String,
}

// Default values
fn default_description_max_length() -> usize {
    500
}

fn default_tax_rate() -> f64 {
    18.0
}

fn default_currency() -> String {
    "INR".to_string()
}

fn default_terms() -> String {
    "Payment due within 30 days".to_string()
}

impl Default for TaskConfig {
    fn default() -> Self {
        Self {
            description_max_length: default_description_max_length(),
        }
    }
}

impl Default for InvoiceConfig {
    fn default() -> Self {
        Self {
            payload_policy: PayloadPolicy::default(),
            tax_rate: default_tax_rate(),
            currency: default_currency(),
            terms: default_terms(),
        }
    }
}

impl FormsConfig {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: FormsConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;

        tracing::debug!(path = ?path, "loaded forms config");
        Ok(config)
    }

    /// Load configuration from default path (./crm-forms.toml)
    pub fn load_default() -> Result<Self> {
        Self::load("crm-forms.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = FormsConfig::default();
        assert_eq!(config.task.description_max_length, 500);
        assert_eq!(config.invoice.payload_policy, PayloadPolicy::Reject);
        assert_eq!(config.invoice.tax_rate, 18.0);
        assert_eq!(config.invoice.currency, "INR");
        assert_eq!(config.invoice.terms, "Payment due within 30 days");
    }

    #[test]
    fn test_partial_config() {
        let toml = r#"
            [invoice]
            payload_policy = "fill"
            currency = "USD"
        "#;
        let config: FormsConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.invoice.payload_policy, PayloadPolicy::Fill);
        assert_eq!(config.invoice.currency, "USD");
        assert_eq!(config.invoice.tax_rate, 18.0);
        assert_eq!(config.task.description_max_length, 500);
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let config = FormsConfig::load("does/not/exist/crm-forms.toml").unwrap();
        assert_eq!(config.task.description_max_length, 500);
    }

    #[test]
    fn test_unknown_policy_is_an_error() {
        let dir = std::env::temp_dir().join(format!("crm-forms-config-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("crm-forms.toml");
        fs::write(&path, "[invoice]\npayload_policy = \"guess\"\n").unwrap();

        let err = FormsConfig::load(&path).unwrap_err();
        assert!(err.to_string().starts_with("Failed to parse config file"));

        fs::remove_dir_all(&dir).unwrap();
    }
}
