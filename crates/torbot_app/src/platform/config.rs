//! Resolves the runtime configuration.
//!
//! Precedence, highest first: command line (and `TORBOT_ENDPOINT`), the RON
//! file given with `--config`, built-in defaults.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use client_logging::{LogDestination, LogSettings};
use log::LevelFilter;
use serde::Deserialize;
use thiserror::Error;
use torbot_transport::{TransportError, TransportSettings, DEFAULT_ENDPOINT};

use super::cli::{Cli, LogTarget};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path:?}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config file {path:?}: {source}")]
    Parse {
        path: PathBuf,
        source: ron::error::SpannedError,
    },
    #[error("bad endpoint: {0}")]
    Endpoint(#[from] TransportError),
    #[error("unknown log level {0:?}")]
    LogLevel(String),
}

/// On-disk configuration. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub endpoint: Option<String>,
    pub connect_timeout_ms: Option<u64>,
    pub log_file: Option<PathBuf>,
    pub log_level: Option<String>,
    pub log_to: Option<LogTarget>,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        ron::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub transport: TransportSettings,
    pub log: LogSettings,
}

impl AppConfig {
    pub fn resolve(cli: &Cli) -> Result<Self, ConfigError> {
        let file = match &cli.config {
            Some(path) => FileConfig::load(path)?,
            None => FileConfig::default(),
        };
        Self::merge(cli, file)
    }

    fn merge(cli: &Cli, file: FileConfig) -> Result<Self, ConfigError> {
        let endpoint = cli
            .endpoint
            .as_deref()
            .or(file.endpoint.as_deref())
            .unwrap_or(DEFAULT_ENDPOINT);
        let mut transport = TransportSettings::new(TransportSettings::parse_endpoint(endpoint)?);
        transport.connect_timeout = cli
            .connect_timeout_ms
            .or(file.connect_timeout_ms)
            .map(Duration::from_millis);

        let mut log = LogSettings::default();
        if let Some(level) = cli.log_level.as_ref().or(file.log_level.as_ref()) {
            log.level = level
                .parse::<LevelFilter>()
                .map_err(|_| ConfigError::LogLevel(level.clone()))?;
        }
        if let Some(path) = cli.log_file.clone().or(file.log_file) {
            log.file = path;
        }
        if let Some(target) = cli.log_to.or(file.log_to) {
            log.destination = LogDestination::from(target);
        }

        Ok(Self { transport, log })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn write_config(dir: &tempfile::TempDir, content: &str) -> PathBuf {
        let path = dir.path().join("torbot.ron");
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn defaults_without_file_or_flags() {
        let config = AppConfig::resolve(&Cli::default()).unwrap();

        assert_eq!(config.transport, TransportSettings::default());
        assert_eq!(config.transport.connect_timeout, None);
        assert_eq!(config.log, LogSettings::default());
    }

    #[test]
    fn file_values_apply_and_flags_override_them() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(
            &dir,
            r#"(
                endpoint: Some("http://crawler.local:9000/LIVE"),
                connect_timeout_ms: Some(1500),
                log_level: Some("debug"),
                log_to: Some(both),
            )"#,
        );

        let from_file = AppConfig::resolve(&Cli {
            config: Some(path.clone()),
            ..Cli::default()
        })
        .unwrap();
        assert_eq!(
            from_file.transport.endpoint.as_str(),
            "http://crawler.local:9000/LIVE"
        );
        assert_eq!(
            from_file.transport.connect_timeout,
            Some(Duration::from_millis(1500))
        );
        assert_eq!(from_file.log.level, LevelFilter::Debug);
        assert_eq!(from_file.log.destination, LogDestination::Both);

        let overridden = AppConfig::resolve(&Cli {
            config: Some(path),
            endpoint: Some("https://other.local/LIVE".to_string()),
            log_level: Some("warn".to_string()),
            ..Cli::default()
        })
        .unwrap();
        assert_eq!(overridden.transport.endpoint.as_str(), "https://other.local/LIVE");
        assert_eq!(overridden.log.level, LevelFilter::Warn);
        assert_eq!(overridden.log.destination, LogDestination::Both);
    }

    #[test]
    fn invalid_values_are_startup_errors() {
        let err = AppConfig::resolve(&Cli {
            endpoint: Some("not a url".to_string()),
            ..Cli::default()
        })
        .unwrap_err();
        assert!(matches!(err, ConfigError::Endpoint(_)));

        let err = AppConfig::resolve(&Cli {
            log_level: Some("loud".to_string()),
            ..Cli::default()
        })
        .unwrap_err();
        assert!(matches!(err, ConfigError::LogLevel(level) if level == "loud"));
    }

    #[test]
    fn unreadable_or_unknown_keys_fail() {
        let dir = tempfile::tempdir().unwrap();
        let err = FileConfig::load(&dir.path().join("missing.ron")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));

        let path = write_config(&dir, "(colour: Some(\"red\"))");
        let err = FileConfig::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }
}
