//! Counter configuration.
//!
//! Configuration is loaded from environment variables with fallback to defaults.
//! The product catalog is NOT configurable here; it is declared in code.

use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;

/// Default tracing filter when neither `RUST_LOG` nor `TEAHOUSE_LOG` is set.
pub const DEFAULT_LOG_FILTER: &str = "warn,teahouse=info";

/// Default label printed before the total.
pub const DEFAULT_TOTAL_LABEL: &str = "總價";

/// How the session result is written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// `總價: 40`
    #[default]
    Text,
    /// Full order summary as JSON.
    Json,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(ConfigError::InvalidValue("TEAHOUSE_OUTPUT".to_string())),
        }
    }
}

/// Counter configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CounterConfig {
    /// Tracing filter directive (overridden by `RUST_LOG`)
    pub log_filter: String,

    /// Label printed before the total in text output
    pub total_label: String,

    /// Output format
    pub output: OutputFormat,
}

impl Default for CounterConfig {
    fn default() -> Self {
        CounterConfig {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            total_label: DEFAULT_TOTAL_LABEL.to_string(),
            output: OutputFormat::Text,
        }
    }
}

impl CounterConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let config = CounterConfig {
            log_filter: lookup("TEAHOUSE_LOG").unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),

            total_label: lookup("TEAHOUSE_TOTAL_LABEL")
                .unwrap_or_else(|| DEFAULT_TOTAL_LABEL.to_string()),

            output: lookup("TEAHOUSE_OUTPUT")
                .map(|value| value.parse::<OutputFormat>())
                .transpose()?
                .unwrap_or_default(),
        };

        if config.total_label.chars().any(char::is_control) {
            return Err(ConfigError::InvalidValue("TEAHOUSE_TOTAL_LABEL".to_string()));
        }

        Ok(config)
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<CounterConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        CounterConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        assert_eq!(load(&[]).unwrap(), CounterConfig::default());
    }

    #[test]
    fn test_overrides() {
        let config = load(&[
            ("TEAHOUSE_LOG", "debug"),
            ("TEAHOUSE_TOTAL_LABEL", "Total"),
            ("TEAHOUSE_OUTPUT", " JSON "),
        ])
        .unwrap();
        assert_eq!(config.log_filter, "debug");
        assert_eq!(config.total_label, "Total");
        assert_eq!(config.output, OutputFormat::Json);
    }

    #[test]
    fn test_invalid_output() {
        assert_eq!(
            load(&[("TEAHOUSE_OUTPUT", "xml")]).unwrap_err(),
            ConfigError::InvalidValue("TEAHOUSE_OUTPUT".to_string())
        );
    }

    #[test]
    fn test_invalid_label() {
        assert!(load(&[("TEAHOUSE_TOTAL_LABEL", "總\n價")]).is_err());
    }
}
