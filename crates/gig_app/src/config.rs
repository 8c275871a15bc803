//! Host configuration, read from an optional `gig.ron` in the working
//! directory.
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use gig_engine::{EngineConfig, FetchSettings, DEFAULT_ENDPOINT};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::platform::logging::LogDestination;

pub const CONFIG_FILENAME: &str = "gig.ron";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("RON parse error: {0}")]
    Parse(#[from] ron::error::SpannedError),
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// Listing endpoint returning the JSON posting array.
    pub endpoint: String,
    /// Directory holding the persisted snapshot.
    pub state_dir: PathBuf,
    pub connect_timeout_secs: u64,
    pub request_timeout_secs: u64,
    pub max_image_bytes: u64,
    pub log_destination: LogDestination,
}

impl Default for AppConfig {
    fn default() -> Self {
        let fetch = FetchSettings::default();
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            state_dir: PathBuf::from("state"),
            connect_timeout_secs: fetch.connect_timeout.as_secs(),
            request_timeout_secs: fetch.request_timeout.as_secs(),
            max_image_bytes: fetch.max_image_bytes,
            log_destination: LogDestination::File,
        }
    }
}

impl AppConfig {
    /// Reads `path` when it exists, defaults otherwise.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let config = match fs::read_to_string(path) {
            Ok(text) => ron::from_str::<AppConfig>(&text)?,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => AppConfig::default(),
            Err(err) => return Err(err.into()),
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let parsed = url::Url::parse(&self.endpoint)
            .map_err(|err| ConfigError::Invalid(format!("endpoint {:?}: {}", self.endpoint, err)))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ConfigError::Invalid(format!(
                "endpoint scheme must be http or https, got {:?}",
                parsed.scheme()
            )));
        }
        if self.request_timeout_secs == 0 {
            return Err(ConfigError::Invalid("request_timeout_secs must be positive".into()));
        }
        Ok(())
    }

    pub fn engine_config(&self) -> EngineConfig {
        let mut config = EngineConfig::default_with_state_dir(self.state_dir.clone());
        config.endpoint = self.endpoint.clone();
        config.fetch = FetchSettings {
            connect_timeout: Duration::from_secs(self.connect_timeout_secs),
            request_timeout: Duration::from_secs(self.request_timeout_secs),
            max_image_bytes: self.max_image_bytes,
            ..FetchSettings::default()
        };
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_yields_defaults() {
        let temp = TempDir::new().unwrap();
        let config = AppConfig::load(&temp.path().join(CONFIG_FILENAME)).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.engine_config().endpoint, DEFAULT_ENDPOINT);
    }

    #[test]
    fn partial_file_overrides_named_fields() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(CONFIG_FILENAME);
        fs::write(
            &path,
            r#"(endpoint: "https://jobs.example.com/list", request_timeout_secs: 5)"#,
        )
        .unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.endpoint, "https://jobs.example.com/list");
        assert_eq!(config.state_dir, PathBuf::from("state"));

        let engine = config.engine_config();
        assert_eq!(engine.fetch.request_timeout, Duration::from_secs(5));
    }

    #[test]
    fn invalid_endpoint_is_rejected() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(CONFIG_FILENAME);
        fs::write(&path, r#"(endpoint: "ftp://jobs.example.com")"#).unwrap();

        assert!(matches!(
            AppConfig::load(&path),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn malformed_file_is_a_parse_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(CONFIG_FILENAME);
        fs::write(&path, "(endpoint: ").unwrap();

        assert!(matches!(AppConfig::load(&path), Err(ConfigError::Parse(_))));
    }
}
