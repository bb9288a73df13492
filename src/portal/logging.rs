//! Logging and tracing configuration
//!
//! This module provides centralized logging configuration for the portal binary.

use crate::types::config::CliArgs;
use std::io;
use tracing::{info, Level};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::{non_blocking, rolling};
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter, Layer, Registry,
};

/// Boxed formatting layer over the base registry
type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level for the application
    pub level: Level,
    /// Whether to enable JSON formatting
    pub json_format: bool,
    /// Whether to log to file
    pub log_to_file: bool,
    /// Log file directory (if logging to file)
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

/// Keeps background log writers flushing; drop it last
#[derive(Debug, Default)]
pub struct LoggingGuard {
    _guards: Vec<WorkerGuard>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: Level::INFO,
            json_format: false,
            log_to_file: false,
            log_directory: None,
            log_file_prefix: "nextu-portal".to_string(),
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

    /// Logging settings selected by the binary's global flags.
    ///
    /// Quiet (WARN) unless `--verbose` or `--debug` is given. `--log-dir` adds
    /// daily JSON files next to the console output.
    pub fn from_cli_args(args: &CliArgs) -> Self {
        let mut config = if args.debug {
            Self::new().with_level(Level::DEBUG).with_span_events()
        } else if args.verbose {
            Self::new().with_level(Level::INFO)
        } else {
            Self::new().with_level(Level::WARN)
        };

        if args.json_logs {
            config = config.with_json_format().without_ansi();
        }
        if let Some(dir) = &args.log_dir {
            config = config.with_file_logging(dir.as_str());
        }

        config
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
        self.log_to_file = true;
        self.log_directory = Some(directory.into());
        self
    }

    /// Set log file prefix
    pub fn with_file_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.log_file_prefix = prefix.into();
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

    /// Filter directive used when neither a custom filter nor `RUST_LOG` is set.
    ///
    /// Covers both the library and the `nextu-portal` binary targets.
    pub fn default_directive(&self) -> String {
        let library = env!("CARGO_PKG_NAME").replace('-', "_");
        format!("{}={level},nextu_portal={level}", library, level = self.level)
    }

    fn span_events(&self) -> FmtSpan {
        if self.enable_span_events {
            FmtSpan::FULL
        } else {
            FmtSpan::NONE
        }
    }

    /// Initialize the global tracing subscriber.
    ///
    /// Console output goes to stderr so command output on stdout stays clean.
    /// The returned guard must be held for as long as logs should be written.
    pub fn init(self) -> Result<LoggingGuard, Box<dyn std::error::Error + Send + Sync>> {
        let env_filter = match &self.env_filter {
            Some(filter) => EnvFilter::try_new(filter)?,
            None => EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(self.default_directive())),
        };

        let mut guards = Vec::new();
        let mut layers: Vec<BoxedLayer> = Vec::new();

        let console_layer: BoxedLayer = if self.json_format {
            fmt::layer().json().with_writer(io::stderr).with_span_events(self.span_events()).boxed()
        } else {
            fmt::layer()
                .pretty()
                .with_writer(io::stderr)
                .with_ansi(self.enable_ansi)
                .with_span_events(self.span_events())
                .boxed()
        };
        layers.push(console_layer);

        if self.log_to_file {
            let log_dir = self.log_directory.as_deref().unwrap_or("logs");
            let file_appender = rolling::daily(log_dir, &self.log_file_prefix);
            let (file_writer, guard) = non_blocking(file_appender);
            guards.push(guard);

            // Files are always JSON
            layers.push(
                fmt::layer()
                    .json()
                    .with_writer(file_writer)
                    .with_span_events(self.span_events())
                    .boxed(),
            );
        }

        Registry::default().with(layers).with(env_filter).try_init()?;

        info!(level = %self.level, json = self.json_format, "Logging initialized");
        Ok(LoggingGuard { _guards: guards })
    }
}
