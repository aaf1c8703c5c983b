//! Logging and tracing configuration
//!
//! Diagnostic logs go to stderr (and optionally a daily rolling file) so that
//! the roster output on stdout stays clean.

use std::io::{self, IsTerminal};
use tracing::{info, Level};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::{non_blocking, rolling};
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter, Layer, Registry,
};

use crate::types::CliArgs;

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level for the application
    pub level: Level,
    /// Whether to enable JSON formatting on the console
    pub json_format: bool,
    /// Log file directory; file logging is enabled when set
    pub log_directory: Option<String>,
    /// Log file prefix (if logging to file)
    pub log_file_prefix: String,
    /// Whether to enable span events
    pub enable_span_events: bool,
    /// Whether to enable ansi colors in console output
    pub enable_ansi: bool,
    /// Custom environment filter
    pub env_filter: Option<String>,
}

/// Keeps the background file writer alive; drop it to flush file logs
#[derive(Debug)]
pub struct LoggingGuard {
    _file_guard: Option<WorkerGuard>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: Level::INFO,
            json_format: false,
            log_directory: None,
            log_file_prefix: "access-roster".to_string(),
            enable_span_events: false,
            enable_ansi: true,
            env_filter: None,
        }
    }
}

impl LoggingConfig {
    /// Create a new logging configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the log level
    pub fn with_level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// Enable JSON formatting
    pub fn with_json_format(mut self) -> Self {
        self.json_format = true;
        self
    }

    /// Enable file logging
    pub fn with_file_logging(mut self, directory: impl Into<String>) -> Self {
        self.log_directory = Some(directory.into());
        self
    }

    /// Enable span events
    pub fn with_span_events(mut self) -> Self {
        self.enable_span_events = true;
        self
    }

    /// Disable ANSI colors
    pub fn without_ansi(mut self) -> Self {
        self.enable_ansi = false;
        self
    }

    /// Set custom environment filter
    pub fn with_env_filter(mut self, filter: impl Into<String>) -> Self {
        self.env_filter = Some(filter.into());
        self
    }

    /// Build the environment filter for this configuration
    ///
    /// `RUST_LOG` wins over the configured level when no explicit filter is set.
    pub fn env_filter(&self) -> Result<EnvFilter, Box<dyn std::error::Error + Send + Sync>> {
        if let Some(filter) = &self.env_filter {
            return Ok(EnvFilter::try_new(filter)?);
        }
        Ok(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME").replace('-', "_"), self.level))
        }))
    }

    fn span_events(&self) -> FmtSpan {
        if self.enable_span_events {
            FmtSpan::CLOSE
        } else {
            FmtSpan::NONE
        }
    }

    /// Initialize the global tracing subscriber
    pub fn init(self) -> Result<LoggingGuard, Box<dyn std::error::Error + Send + Sync>> {
        let registry = Registry::default().with(self.env_filter()?);

        let console_layer = if self.json_format {
            fmt::layer()
                .json()
                .with_writer(io::stderr)
                .with_span_events(self.span_events())
                .boxed()
        } else {
            fmt::layer()
                .compact()
                .with_writer(io::stderr)
                .with_ansi(self.enable_ansi)
                .with_span_events(self.span_events())
                .boxed()
        };

        let file_guard = match &self.log_directory {
            Some(log_dir) => {
                let file_appender = rolling::daily(log_dir, &self.log_file_prefix);
                let (file_writer, guard) = non_blocking(file_appender);
                // Files always get JSON so they can be post-processed
                let file_layer = fmt::layer()
                    .json()
                    .with_writer(file_writer)
                    .with_span_events(self.span_events());

                registry.with(console_layer).with(file_layer).try_init()?;
                Some(guard)
            }
            None => {
                registry.with(console_layer).try_init()?;
                None
            }
        };

        info!(level = %self.level, file_logging = self.log_directory.is_some(), "Logging initialized");
        Ok(LoggingGuard { _file_guard: file_guard })
    }

    /// Preset for verbose runs (INFO level)
    pub fn verbose() -> Self {
        Self::new().with_level(Level::INFO)
    }

    /// Preset for debug runs (DEBUG level with span events)
    pub fn debug() -> Self {
        Self::new().with_level(Level::DEBUG).with_span_events()
    }

    /// Logging configuration selected by the command line
    ///
    /// Without `--verbose` or `--debug` only warnings and errors are logged.
    pub fn from_cli_args(args: &CliArgs) -> Self {
        let mut config = if args.debug {
            Self::debug()
        } else if args.verbose {
            Self::verbose()
        } else {
            Self::new().with_level(Level::WARN)
        };

        if args.log_json {
            config = config.with_json_format();
        }
        if let Some(dir) = &args.log_dir {
            config = config.with_file_logging(dir.clone());
        }
        if let Some(filter) = &args.log_filter {
            config = config.with_env_filter(filter.clone());
        }
        if !io::stderr().is_terminal() {
            config = config.without_ansi();
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use tracing::Level;

    #[test]
    fn test_logging_config_creation() {
        let config = LoggingConfig::new();
        assert_eq!(config.level, Level::INFO);
        assert!(!config.json_format);
        assert!(config.log_directory.is_none());
        assert_eq!(config.log_file_prefix, "access-roster");
        assert!(!config.enable_span_events);
        assert!(config.enable_ansi);
        assert!(config.env_filter.is_none());
    }

    #[test]
    fn test_logging_config_builder_pattern() {
        let config = LoggingConfig::new()
            .with_level(Level::DEBUG)
            .with_json_format()
            .with_file_logging("test_logs")
            .with_span_events()
            .without_ansi()
            .with_env_filter("debug");

        assert_eq!(config.level, Level::DEBUG);
        assert!(config.json_format);
        assert_eq!(config.log_directory, Some("test_logs".to_string()));
        assert!(config.enable_span_events);
        assert!(!config.enable_ansi);
        assert_eq!(config.env_filter, Some("debug".to_string()));
    }

    #[test]
    fn test_from_cli_args_quiet_by_default() {
        let args = CliArgs::try_parse_from(["access-roster"]).unwrap();
        let config = LoggingConfig::from_cli_args(&args);
        assert_eq!(config.level, Level::WARN);
        assert!(!config.json_format);
        assert!(config.log_directory.is_none());
        assert!(config.env_filter.is_none());
    }

    #[test]
    fn test_from_cli_args_logging_flags() {
        let args = CliArgs::try_parse_from([
            "access-roster",
            "--debug",
            "--verbose",
            "--log-json",
            "--log-dir",
            "logs",
            "--log-filter",
            "access_roster=trace",
        ])
        .unwrap();
        let config = LoggingConfig::from_cli_args(&args);

        // Debug wins over verbose
        assert_eq!(config.level, Level::DEBUG);
        assert!(config.enable_span_events);
        assert!(config.json_format);
        assert_eq!(config.log_directory.as_deref(), Some("logs"));
        assert_eq!(config.env_filter.as_deref(), Some("access_roster=trace"));
        assert!(config.env_filter().is_ok());
    }

    #[test]
    fn test_explicit_env_filter_is_parsed() {
        let config = LoggingConfig::new().with_env_filter("access_roster=trace");
        assert!(config.env_filter().is_ok());
    }
}
