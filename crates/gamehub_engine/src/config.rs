//! Engine configuration.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Tunables for the computer opponent.
///
/// Every field has a default, so an empty TOML document is a valid config.
/// Deserialization validates, so an out-of-range value is an error in any
/// serde format.
#[derive(Debug, Clone, PartialEq, Getters, Serialize, Deserialize)]
#[serde(try_from = "RawEngineConfig")]
pub struct EngineConfig {
    /// Probability that a medium move is picked at random instead of searched.
    medium_random_rate: f64,

    /// Alpha-beta depth (in plies) for gomoku at medium.
    gomoku_medium_depth: u8,

    /// Alpha-beta depth (in plies) for gomoku at hard.
    gomoku_hard_depth: u8,
}

/// Unvalidated config as it appears on disk.
#[derive(Deserialize)]
struct RawEngineConfig {
    #[serde(default = "default_medium_random_rate")]
    medium_random_rate: f64,
    #[serde(default = "default_gomoku_medium_depth")]
    gomoku_medium_depth: u8,
    #[serde(default = "default_gomoku_hard_depth")]
    gomoku_hard_depth: u8,
}

impl TryFrom<RawEngineConfig> for EngineConfig {
    type Error = ConfigError;

    fn try_from(raw: RawEngineConfig) -> Result<Self, Self::Error> {
        Self::new(
            raw.medium_random_rate,
            raw.gomoku_medium_depth,
            raw.gomoku_hard_depth,
        )
    }
}

fn default_medium_random_rate() -> f64 {
    0.3
}

fn default_gomoku_medium_depth() -> u8 {
    2
}

fn default_gomoku_hard_depth() -> u8 {
    4
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            medium_random_rate: default_medium_random_rate(),
            gomoku_medium_depth: default_gomoku_medium_depth(),
            gomoku_hard_depth: default_gomoku_hard_depth(),
        }
    }
}

impl EngineConfig {
    /// Creates a validated configuration.
    #[instrument]
    pub fn new(
        medium_random_rate: f64,
        gomoku_medium_depth: u8,
        gomoku_hard_depth: u8,
    ) -> Result<Self, ConfigError> {
        let config = Self {
            medium_random_rate,
            gomoku_medium_depth,
            gomoku_hard_depth,
        };
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading engine config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        let config = Self::from_toml_str(&content)?;
        info!(?config, "Engine config loaded");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Checks that every value is in range.
    #[instrument(skip(self))]
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.medium_random_rate) {
            return Err(ConfigError::new(format!(
                "medium_random_rate must be within [0, 1], got {}",
                self.medium_random_rate
            )));
        }
        if self.gomoku_medium_depth == 0 || self.gomoku_hard_depth == 0 {
            return Err(ConfigError::new(
                "search depths must be at least one ply".to_string(),
            ));
        }
        Ok(())
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_empty_document_uses_defaults() {
        let config = EngineConfig::from_toml_str("").unwrap();
        assert_eq!(config, EngineConfig::default());
        assert_eq!(*config.gomoku_hard_depth(), 4);
        assert_eq!(*config.gomoku_medium_depth(), 2);
        assert!((config.medium_random_rate() - 0.3).abs() < f64::EPSILON);
    }

    #[test]
    fn test_partial_override() {
        let config = EngineConfig::from_toml_str("gomoku_hard_depth = 3\n").unwrap();
        assert_eq!(*config.gomoku_hard_depth(), 3);
        assert_eq!(*config.gomoku_medium_depth(), 2);
    }

    #[test]
    fn test_rejects_out_of_range_rate() {
        let err = EngineConfig::from_toml_str("medium_random_rate = 1.5").unwrap_err();
        assert!(err.message.contains("medium_random_rate"));
    }

    #[test]
    fn test_deserialize_validates() {
        let result = serde_json::from_str::<EngineConfig>(r#"{"medium_random_rate": 1.5}"#);
        assert!(result.is_err());
        let result = serde_json::from_str::<EngineConfig>(r#"{"gomoku_hard_depth": 0}"#);
        assert!(result.is_err());

        let config: EngineConfig = serde_json::from_str(r#"{"medium_random_rate": 1.0}"#).unwrap();
        assert_eq!(*config.medium_random_rate(), 1.0);
        assert_eq!(*config.gomoku_hard_depth(), 4);
    }

    #[test]
    fn test_rejects_zero_depth() {
        assert!(EngineConfig::new(0.3, 0, 4).is_err());
        assert!(EngineConfig::new(0.3, 2, 4).is_ok());
    }

    #[test]
    fn test_rejects_malformed_toml() {
        let err = EngineConfig::from_toml_str("this is not toml !!!").unwrap_err();
        assert!(err.to_string().starts_with("Config error: Failed to parse config"));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
        writeln!(file, "medium_random_rate = 0.0\ngomoku_medium_depth = 1").expect("Write failed");
        let config = EngineConfig::from_file(file.path()).unwrap();
        assert_eq!(*config.medium_random_rate(), 0.0);
        assert_eq!(*config.gomoku_medium_depth(), 1);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::TempDir::new().expect("Failed to create temp dir");
        let err = EngineConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
        assert!(err.message.contains("Failed to read config file"));
    }
}
