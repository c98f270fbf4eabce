//! tracing subscriber setup
//!
//! Filter precedence: `RUST_LOG`, then `-v` flags, then the configured
//! `log_filter`. When a log file is configured every line goes there;
//! otherwise lines go to stderr, except in the terminal UI where stderr
//! would corrupt the screen and logging stays off.

use std::fs::File;
use std::sync::Mutex;

use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::EnvFilter;

use crate::config::{AppConfig, LogFormat};
use crate::error::{AppError, AppResult};

/// Where log lines may go when no log file is configured
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogSink {
    /// Standard error
    Stderr,
    /// Nowhere; the terminal owns the screen
    Silent,
}

/// Resolves the filter directive from the environment, verbosity and config
#[must_use]
pub fn resolve_filter(env: Option<&str>, verbose: u8, config: &AppConfig) -> String {
    if let Some(env) = env.filter(|value| !value.trim().is_empty()) {
        return env.to_string();
    }
    match verbose {
        0 => config.log_filter.clone(),
        1 => "info".to_string(),
        2 => "debug".to_string(),
        _ => "trace".to_string(),
    }
}

/// Installs the global subscriber
///
/// # Errors
///
/// Returns an error if the filter does not parse, the log file cannot be
/// opened or a global subscriber is already installed.
pub fn init(config: &AppConfig, verbose: u8, sink: LogSink) -> AppResult<()> {
    let (writer, ansi) = match (&config.log_file, sink) {
        (Some(path), _) => {
            let file = File::options()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|e| AppError::logging(format!("{}: {e}", path.display())))?;
            (BoxMakeWriter::new(Mutex::new(file)), false)
        }
        (None, LogSink::Stderr) => (BoxMakeWriter::new(std::io::stderr), true),
        (None, LogSink::Silent) => return Ok(()),
    };

    let env = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let directive = resolve_filter(env.as_deref(), verbose, config);
    let filter = EnvFilter::try_new(&directive)
        .map_err(|e| AppError::logging(format!("invalid filter {directive:?}: {e}")))?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(ansi)
        .with_target(false);
    let installed = match config.log_format {
        LogFormat::Text => builder.try_init(),
        LogFormat::Json => builder.json().try_init(),
    };
    installed.map_err(|e| AppError::logging(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_wins() {
        let config = AppConfig::new().with_log_filter("error");
        assert_eq!(resolve_filter(Some("keypad=trace"), 2, &config), "keypad=trace");
    }

    #[test]
    fn test_blank_env_is_ignored() {
        let config = AppConfig::new();
        assert_eq!(resolve_filter(Some("  "), 0, &config), "warn");
    }

    #[test]
    fn test_verbosity_levels() {
        let config = AppConfig::new();
        assert_eq!(resolve_filter(None, 1, &config), "info");
        assert_eq!(resolve_filter(None, 2, &config), "debug");
        assert_eq!(resolve_filter(None, 3, &config), "trace");
        assert_eq!(resolve_filter(None, 9, &config), "trace");
    }

    #[test]
    fn test_config_filter_is_fallback() {
        let config = AppConfig::new().with_log_filter("keypad_calculator=debug");
        assert_eq!(resolve_filter(None, 0, &config), "keypad_calculator=debug");
    }

    #[test]
    fn test_silent_sink_without_file_is_noop() {
        assert!(init(&AppConfig::new(), 0, LogSink::Silent).is_ok());
    }

    #[test]
    fn test_unopenable_log_file() {
        let config = AppConfig::new().with_log_file("/nonexistent/dir/calc.log");
        let err = init(&config, 0, LogSink::Silent).unwrap_err();
        assert!(matches!(err, AppError::Logging { .. }));
    }
}
