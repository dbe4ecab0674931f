//! Logging setup for the CLI.
//!
//! Human-readable logs go to stderr so stdout stays clean for scores and
//! JSON. When a log file or directory is configured, a second layer writes
//! JSON lines to it through a non-blocking `tracing-appender` writer.

use std::ffi::OsString;
use std::path::PathBuf;

use anyhow::Context;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

/// Explicit log file path; wins over any log directory.
const ENV_LOG_PATH: &str = "TEXTSTAT_LOG_PATH";

/// Log directory; wins over `log_dir` from the config file.
const ENV_LOG_DIR: &str = "TEXTSTAT_LOG_DIR";

/// File name used inside a log directory.
const LOG_FILE_NAME: &str = "textstat.jsonl";

/// Where, if anywhere, to write the JSON log file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObservabilityConfig {
    /// Explicit log file.
    pub log_path: Option<PathBuf>,
    /// Directory for `textstat.jsonl`.
    pub log_dir: Option<PathBuf>,
}

impl ObservabilityConfig {
    /// Read the log environment variables, falling back to the config's `log_dir`.
    pub fn from_env_with_overrides(config_log_dir: Option<PathBuf>) -> Self {
        Self {
            log_path: std::env::var_os(ENV_LOG_PATH).map(PathBuf::from),
            log_dir: std::env::var_os(ENV_LOG_DIR)
                .map(PathBuf::from)
                .or(config_log_dir),
        }
    }

    /// Directory and file name of the log file, if file logging is enabled.
    fn log_target(&self) -> Option<(PathBuf, OsString)> {
        if let Some(ref path) = self.log_path {
            let dir = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .map_or_else(|| PathBuf::from("."), PathBuf::from);
            let name = path
                .file_name()
                .map_or_else(|| OsString::from(LOG_FILE_NAME), OsString::from);
            return Some((dir, name));
        }
        self.log_dir
            .as_ref()
            .map(|dir| (dir.clone(), OsString::from(LOG_FILE_NAME)))
    }
}

/// Build the log filter.
///
/// `RUST_LOG` wins when set. Otherwise `--quiet` means errors only, each
/// `-v` raises the level one step, and the config's level is the baseline.
pub fn env_filter(quiet: bool, verbose: u8, config_level: &str) -> EnvFilter {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }
    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => config_level,
            1 => "debug",
            _ => "trace",
        }
    };
    EnvFilter::new(level)
}

/// Keeps the file writer flushing until dropped.
#[must_use = "dropping the guard stops file logging"]
pub struct ObservabilityGuard {
    _file: Option<WorkerGuard>,
}

/// Install the global subscriber.
pub fn init_observability(
    config: &ObservabilityConfig,
    env_filter: EnvFilter,
) -> anyhow::Result<ObservabilityGuard> {
    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    let (file_layer, file_guard) = match config.log_target() {
        Some((dir, name)) => {
            std::fs::create_dir_all(&dir)
                .with_context(|| format!("failed to create log directory {}", dir.display()))?;
            let appender = tracing_appender::rolling::never(&dir, &name);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer().json().with_ansi(false).with_writer(writer);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .context("failed to install tracing subscriber")?;

    Ok(ObservabilityGuard { _file: file_guard })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_path_wins_over_directory() {
        let config = ObservabilityConfig {
            log_path: Some(PathBuf::from("/var/log/custom.log")),
            log_dir: Some(PathBuf::from("/tmp/ignored")),
        };
        assert_eq!(
            config.log_target(),
            Some((PathBuf::from("/var/log"), OsString::from("custom.log")))
        );
    }

    #[test]
    fn directory_uses_default_file_name() {
        let config = ObservabilityConfig {
            log_path: None,
            log_dir: Some(PathBuf::from("/tmp/textstat")),
        };
        assert_eq!(
            config.log_target(),
            Some((PathBuf::from("/tmp/textstat"), OsString::from(LOG_FILE_NAME)))
        );
    }

    #[test]
    fn bare_file_name_logs_to_current_dir() {
        let config = ObservabilityConfig {
            log_path: Some(PathBuf::from("run.jsonl")),
            log_dir: None,
        };
        assert_eq!(
            config.log_target(),
            Some((PathBuf::from("."), OsString::from("run.jsonl")))
        );
    }

    #[test]
    fn no_target_without_path_or_dir() {
        assert!(ObservabilityConfig::default().log_target().is_none());
    }
}
