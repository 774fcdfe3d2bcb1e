//! YAML configuration file support.
//!
//! Every checker option, plus logging, can be set in a single YAML file.
//! Missing sections and fields fall back to their defaults, so an empty
//! document with only `version` is a valid configuration.
//!
//! ## Example YAML Configuration
//!
//! ```yaml
//! version: "1.0"
//!
//! checker:
//!   sensitivity: 9
//!   min_words_in_sentence: 3
//!   max_quote_length: 5
//!   include_final_window: false
//!   use_parallel: false
//!
//! logging:
//!   level: "info"
//!   json: false
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use index::IndexConfig;
use matcher::MatchConfig;

/// Errors that can occur when loading YAML configuration files
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("unsupported config version: {0}")]
    UnsupportedVersion(String),
}

/// Top-level YAML configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct PlagcheckConfig {
    /// Configuration format version
    pub version: String,

    #[serde(default)]
    pub checker: CheckerConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl PlagcheckConfig {
    /// Load a YAML configuration file from the given path
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigLoadError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse YAML configuration from a string
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        let config: PlagcheckConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigLoadError> {
        match self.version.as_str() {
            "1.0" | "1" => Ok(()),
            v => Err(ConfigLoadError::UnsupportedVersion(v.to_string())),
        }?;
        self.checker.validate()?;
        self.logging.validate()
    }
}

impl Default for PlagcheckConfig {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            checker: CheckerConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

/// Options for building the reference index and scoring candidates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckerConfig {
    /// Window size, in words, for word-sequence matching
    #[serde(default = "default_sensitivity")]
    pub sensitivity: usize,

    #[serde(default = "default_min_words_in_sentence")]
    pub min_words_in_sentence: usize,

    #[serde(default = "default_max_quote_length")]
    pub max_quote_length: usize,

    /// Also index and scan the last window of every long sentence
    #[serde(default)]
    pub include_final_window: bool,

    #[serde(default)]
    pub use_parallel: bool,
}

impl CheckerConfig {
    pub fn with_sensitivity(mut self, sensitivity: usize) -> Self {
        self.sensitivity = sensitivity;
        self
    }

    pub fn with_min_words_in_sentence(mut self, min_words: usize) -> Self {
        self.min_words_in_sentence = min_words;
        self
    }

    pub fn with_max_quote_length(mut self, max_quote_length: usize) -> Self {
        self.max_quote_length = max_quote_length;
        self
    }

    pub fn with_final_window(mut self, include: bool) -> Self {
        self.include_final_window = include;
        self
    }

    pub fn with_parallel(mut self, use_parallel: bool) -> Self {
        self.use_parallel = use_parallel;
        self
    }

    fn validate(&self) -> Result<(), ConfigLoadError> {
        self.index_config()
            .validate()
            .map_err(|err| ConfigLoadError::Validation(format!("checker: {err}")))
    }

    pub fn index_config(&self) -> IndexConfig {
        IndexConfig::new()
            .with_sensitivity(self.sensitivity)
            .with_min_words_in_sentence(self.min_words_in_sentence)
            .with_final_window(self.include_final_window)
            .with_parallel(self.use_parallel)
    }

    pub fn match_config(&self) -> MatchConfig {
        MatchConfig::default()
            .with_max_quote_length(self.max_quote_length)
            .with_parallel(self.use_parallel)
    }
}

impl Default for CheckerConfig {
    fn default() -> Self {
        Self {
            sensitivity: default_sensitivity(),
            min_words_in_sentence: default_min_words_in_sentence(),
            max_quote_length: default_max_quote_length(),
            include_final_window: false,
            use_parallel: false,
        }
    }
}

/// Logging options for the command-line binary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default `EnvFilter` directive; `RUST_LOG` takes precedence
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Emit JSON lines instead of human-readable output
    #[serde(default)]
    pub json: bool,
}

impl LoggingConfig {
    fn validate(&self) -> Result<(), ConfigLoadError> {
        if self.level.trim().is_empty() {
            return Err(ConfigLoadError::Validation(
                "logging.level must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

fn default_sensitivity() -> usize {
    9
}
fn default_min_words_in_sentence() -> usize {
    3
}
fn default_max_quote_length() -> usize {
    5
}
fn default_log_level() -> String {
    "warn".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_valid_yaml() {
        let yaml = r#"
version: "1.0"
checker:
  sensitivity: 6
  max_quote_length: 0
logging:
  json: true
"#;

        let config = PlagcheckConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.checker.sensitivity, 6);
        assert_eq!(config.checker.max_quote_length, 0);
        assert_eq!(config.checker.min_words_in_sentence, 3);
        assert!(config.logging.json);
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_load_from_file() {
        let yaml = r#"
version: "1"
checker:
  include_final_window: true
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(yaml.as_bytes()).unwrap();

        let config = PlagcheckConfig::from_file(temp_file.path()).unwrap();
        assert!(config.checker.include_final_window);
        assert!(config.checker.index_config().include_final_window);
    }

    #[test]
    fn test_version_only_is_default() {
        let config = PlagcheckConfig::from_yaml("version: \"1.0\"\n").unwrap();
        assert_eq!(config, PlagcheckConfig::default());
    }

    #[test]
    fn test_unsupported_version() {
        let err = PlagcheckConfig::from_yaml("version: \"2.0\"\n").unwrap_err();
        assert!(matches!(err, ConfigLoadError::UnsupportedVersion(v) if v == "2.0"));
    }

    #[test]
    fn test_zero_sensitivity_rejected() {
        let yaml = r#"
version: "1.0"
checker:
  sensitivity: 0
"#;
        let err = PlagcheckConfig::from_yaml(yaml).unwrap_err();
        assert!(err.to_string().contains("sensitivity"));
    }

    #[test]
    fn test_missing_file() {
        let err = PlagcheckConfig::from_file("/nonexistent/plagcheck.yaml").unwrap_err();
        assert!(matches!(err, ConfigLoadError::FileRead(_)));
    }

    #[test]
    fn test_malformed_yaml() {
        let err = PlagcheckConfig::from_yaml("version: [unclosed").unwrap_err();
        assert!(matches!(err, ConfigLoadError::YamlParse(_)));
    }

    #[test]
    fn test_stage_configs_follow_checker() {
        let checker = CheckerConfig::default()
            .with_sensitivity(4)
            .with_min_words_in_sentence(1)
            .with_max_quote_length(7)
            .with_parallel(true);
        let index = checker.index_config();
        assert_eq!(index.sensitivity, 4);
        assert_eq!(index.min_words_in_sentence, 1);
        assert!(index.use_parallel);
        let matcher = checker.match_config();
        assert_eq!(matcher.max_quote_length, 7);
        assert!(matcher.use_parallel);
    }
}
