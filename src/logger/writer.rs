//! Log writer module
//!
//! Installs the global `tracing` subscriber: a console layer plus, when a
//! log file is configured, an append-mode file layer.

use std::fs::{File, OpenOptions};
use std::io;
use std::path::Path;
use std::sync::Mutex;

use thiserror::Error;
use tracing::Subscriber;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::LoggingConfig;

#[derive(Debug, Error)]
pub enum LoggerError {
    #[error("failed to open log file {path}: {source}")]
    OpenFile {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("failed to install log subscriber: {0}")]
    Install(#[from] tracing::subscriber::SetGlobalDefaultError),
}

/// Open or create a log file for appending
pub fn open_log_file(path: &str) -> io::Result<File> {
    // Create parent directories if they don't exist
    if let Some(parent) = Path::new(path).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    OpenOptions::new().create(true).append(true).open(path)
}

/// Level filter for the configuration
///
/// Disabled logging silences everything. Otherwise `RUST_LOG` wins over
/// the configured level.
fn build_filter(logging: &LoggingConfig) -> EnvFilter {
    if !logging.enabled {
        return EnvFilter::new("off");
    }
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&logging.level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Build the subscriber without installing it
pub fn build_subscriber(
    logging: &LoggingConfig,
) -> Result<impl Subscriber + Send + Sync + 'static, LoggerError> {
    let file_layer = match logging.file_path().filter(|_| logging.enabled) {
        Some(path) => {
            let file = open_log_file(path).map_err(|source| LoggerError::OpenFile {
                path: path.to_string(),
                source,
            })?;
            Some(
                fmt::layer()
                    .with_ansi(false)
                    .with_target(false)
                    .with_writer(Mutex::new(file)),
            )
        }
        None => None,
    };

    Ok(tracing_subscriber::registry()
        .with(build_filter(logging))
        .with(fmt::layer().with_target(false))
        .with(file_layer))
}

/// Initialize the global log subscriber
///
/// This should be called once at application startup.
/// Returns error if the log file cannot be opened.
pub fn init(logging: &LoggingConfig) -> Result<(), LoggerError> {
    let subscriber = build_subscriber(logging)?;
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn logging_to(path: Option<String>, enabled: bool) -> LoggingConfig {
        LoggingConfig {
            enabled,
            level: "info".to_string(),
            file: path,
        }
    }

    #[test]
    fn test_open_log_file_creates_parent_dirs() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested/logs/wol_server.log");
        open_log_file(path.to_str().unwrap()).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_file_layer_receives_events() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("wol_server.log");
        let logging = logging_to(Some(path.to_string_lossy().into_owned()), true);

        let subscriber = build_subscriber(&logging).unwrap();
        tracing::subscriber::with_default(subscriber, || {
            tracing::info!("Request from 10.0.0.7: /status");
        });

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.contains("INFO"));
        assert!(contents.contains("Request from 10.0.0.7: /status"));
    }

    #[test]
    fn test_disabled_logging_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("wol_server.log");
        let logging = logging_to(Some(path.to_string_lossy().into_owned()), false);

        let subscriber = build_subscriber(&logging).unwrap();
        tracing::subscriber::with_default(subscriber, || {
            tracing::error!("should not be written");
        });

        assert!(!path.exists());
    }
}
