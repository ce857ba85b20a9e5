//! Simulation tunables. The reference hard-coded these as constants; here
//! they are a plain struct with serde defaults, loadable from TOML.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::ConfigError;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Buffer slot count.
    pub capacity: usize,
    /// Fixed delay after a successful write, in milliseconds.
    pub producer_service_ms: u64,
    /// Fixed delay after a successful read, in milliseconds.
    pub consumer_service_ms: u64,
    /// Upper bound of the random pre-write delay, in milliseconds.
    pub producer_jitter_ms: u64,
    /// Upper bound of the random post-read processing delay, in milliseconds.
    pub consumer_jitter_ms: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            capacity: 10,
            producer_service_ms: 500,
            consumer_service_ms: 500,
            producer_jitter_ms: 1000,
            consumer_jitter_ms: 3000,
        }
    }
}

impl SimConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: SimConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.capacity == 0 {
            return Err(ConfigError::InvalidValue {
                field: "capacity",
                reason: "must be at least 1".into(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_match_reference_constants() {
        let config = SimConfig::default();
        assert_eq!(config.capacity, 10);
        assert_eq!(config.producer_service_ms, 500);
        assert_eq!(config.consumer_service_ms, 500);
        assert_eq!(config.producer_jitter_ms, 1000);
        assert_eq!(config.consumer_jitter_ms, 3000);
    }

    #[test]
    fn test_parse_full_config() {
        let toml = r#"
            capacity = 4
            producer_service_ms = 10
            consumer_service_ms = 20
            producer_jitter_ms = 30
            consumer_jitter_ms = 40
        "#;
        let config = SimConfig::from_toml_str(toml).unwrap();
        assert_eq!(
            config,
            SimConfig {
                capacity: 4,
                producer_service_ms: 10,
                consumer_service_ms: 20,
                producer_jitter_ms: 30,
                consumer_jitter_ms: 40,
            }
        );
    }

    #[test]
    fn test_partial_config_falls_back_to_defaults() {
        let config = SimConfig::from_toml_str("capacity = 2").unwrap();
        assert_eq!(config.capacity, 2);
        assert_eq!(config.producer_service_ms, 500);
        assert_eq!(config.consumer_jitter_ms, 3000);
    }

    #[test]
    fn test_zero_capacity_rejected() {
        let err = SimConfig::from_toml_str("capacity = 0").unwrap_err();
        assert!(err.to_string().contains("capacity"));
    }

    #[test]
    fn test_malformed_toml_rejected() {
        assert!(SimConfig::from_toml_str("capacity = ").is_err());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "capacity = 7").unwrap();
        let config = SimConfig::load(file.path()).unwrap();
        assert_eq!(config.capacity, 7);
    }

    #[test]
    fn test_load_missing_file() {
        let err = SimConfig::load("no/such/prodcons.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
