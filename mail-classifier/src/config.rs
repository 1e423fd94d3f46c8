use crate::corpus::CorpusSchema;
use crate::error::{ClassifierError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    #[serde(default = "default_phishing")]
    pub phishing: CorpusConfig,
    #[serde(default = "default_spam")]
    pub spam: CorpusConfig,
    #[serde(default)]
    pub scan: ScanConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CorpusConfig {
    pub corpus_path: PathBuf,
    /// Overrides the schema's short-text threshold
    pub min_length: Option<usize>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ScanConfig {
    /// Only the most recent messages are classified
    #[serde(default = "default_max_messages")]
    pub max_messages: usize,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_phishing() -> CorpusConfig {
    CorpusConfig {
        corpus_path: PathBuf::from("Phishing_Email.csv"),
        min_length: None,
    }
}

fn default_spam() -> CorpusConfig {
    CorpusConfig {
        corpus_path: PathBuf::from("mail_data.csv"),
        min_length: None,
    }
}

fn default_max_messages() -> usize {
    25
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            max_messages: default_max_messages(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl CorpusConfig {
    /// Apply overrides to a schema preset
    pub fn schema(&self, base: CorpusSchema) -> CorpusSchema {
        match self.min_length {
            Some(min_length) => base.with_min_length(min_length),
            None => base,
        }
    }
}

impl Config {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ClassifierError::Config(e.to_string()))?;

        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(content).map_err(|e| ClassifierError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.scan.max_messages == 0 {
            return Err(ClassifierError::Config(
                "scan.max_messages must be greater than zero".to_string(),
            ));
        }

        match self.logging.format.as_str() {
            "pretty" | "json" => Ok(()),
            other => Err(ClassifierError::Config(format!(
                "unknown logging format: {}",
                other
            ))),
        }
    }

    pub fn phishing_schema(&self) -> CorpusSchema {
        self.phishing.schema(CorpusSchema::phishing())
    }

    pub fn spam_schema(&self) -> CorpusSchema {
        self.spam.schema(CorpusSchema::spam())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            phishing: default_phishing(),
            spam: default_spam(),
            scan: ScanConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.scan.max_messages, 25);
        assert_eq!(config.phishing_schema().min_length, 10);
        assert_eq!(config.spam_schema().min_length, 0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml() {
        let config = Config::from_toml(
            r#"
            [phishing]
            corpus_path = "data/phishing.csv"
            min_length = 4

            [logging]
            format = "json"
            "#,
        )
        .unwrap();

        assert_eq!(config.phishing.corpus_path, PathBuf::from("data/phishing.csv"));
        assert_eq!(config.phishing_schema().min_length, 4);
        assert_eq!(config.spam.corpus_path, PathBuf::from("mail_data.csv"));
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, "json");
    }

    #[test]
    fn test_invalid_values() {
        let err = Config::from_toml("[scan]\nmax_messages = 0\n").unwrap_err();
        assert!(matches!(err, ClassifierError::Config(_)));

        let err = Config::from_toml("[logging]\nformat = \"xml\"\n").unwrap_err();
        assert!(matches!(err, ClassifierError::Config(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = Config::from_file("/nonexistent/classifier.toml").unwrap_err();
        assert!(matches!(err, ClassifierError::Config(_)));
    }
}
