//! Configuration structures for the portal core
//!
//! This module contains the portal configuration, the partial configuration
//! file format, the command line surface of the `nextu-portal` binary and the
//! validation rules applied before any decision is evaluated.

use super::Role;
use crate::access::RouteTable;
use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Pricing constants
pub mod billing {
    /// Nights billed per month of accommodation. A fixed approximation,
    /// not calendar-accurate.
    pub const NIGHTS_PER_MONTH: u32 = 30;
}

/// Path anonymous visitors are sent to
pub const DEFAULT_LOGIN_PATH: &str = "/login";

/// Command line arguments structure
#[derive(Debug, Clone, Parser)]
#[command(
    name = "nextu-portal",
    version = "0.1.0",
    about = "Next U portal core - evaluates dashboard access and package prices",
    long_about = "Evaluates the role-based dashboard routing and the package price calculation used by the Next U back-office portal.

EXAMPLES:
    # Check whether a stored session may open a path
    nextu-portal access --path /admin/locations --session '{\"role\":\"Admin\"}'

    # Price a basic package
    nextu-portal quote --request quote.json

    # Price a combo package
    nextu-portal combo --request combo.json

    # Generate configuration template
    nextu-portal --print-config > portal.json

CONFIGURATION:
    Configuration can be provided via:
    1. Command line arguments (highest priority)
    2. Configuration file (--config flag)
    3. Default values (lowest priority)

    Supported configuration file formats: JSON (.json)"
)]
pub struct CliArgs {
    /// Configuration file path (JSON format)
    #[arg(
        short,
        long,
        global = true,
        help = "Configuration file path (JSON format)",
        long_help = "Path to a JSON configuration file. CLI arguments will override file settings."
    )]
    pub config: Option<String>,

    /// Path anonymous visitors are redirected to
    #[arg(long, global = true, help = "Login path for anonymous visitors")]
    pub login_path: Option<String>,

    /// Nights billed per month of accommodation
    #[arg(
        long,
        global = true,
        help = "Nights billed per month of accommodation",
        long_help = "Number of nights one month of accommodation is billed as. Must be greater than 0. Default: 30"
    )]
    pub nights_per_month: Option<u32>,

    /// Enable verbose logging
    #[arg(short, long, global = true, help = "Enable verbose logging")]
    pub verbose: bool,

    /// Enable debug logging
    #[arg(short, long, global = true, help = "Enable debug logging")]
    pub debug: bool,

    /// Emit logs as JSON
    #[arg(long, global = true, help = "Emit logs as JSON lines")]
    pub json_logs: bool,

    /// Directory for daily-rolling JSON log files
    #[arg(
        long,
        global = true,
        help = "Also write JSON logs to daily files in this directory",
        long_help = "Directory receiving daily-rolling JSON log files (nextu-portal.YYYY-MM-DD). Console logging stays on stderr."
    )]
    pub log_dir: Option<String>,

    /// Print default configuration and exit
    #[arg(long, help = "Print default configuration in JSON format and exit")]
    pub print_config: bool,

    /// Operation to run
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Operations exposed by the binary
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Decide whether a session may open a path
    Access {
        /// Requested path
        #[arg(long)]
        path: String,

        /// Stored session blob (JSON, or cookie value with --cookie)
        #[arg(long, conflicts_with = "session_file")]
        session: Option<String>,

        /// File holding the stored session blob
        #[arg(long)]
        session_file: Option<String>,

        /// Treat the session as a percent-encoded cookie value
        #[arg(long)]
        cookie: bool,
    },

    /// Price one catalog item over one duration
    Quote {
        /// JSON file holding a pricing request
        #[arg(long)]
        request: String,
    },

    /// Price a combo package from its basic packages
    Combo {
        /// JSON file holding a combo request
        #[arg(long)]
        request: String,
    },
}

/// Configuration file structure (allows partial configuration)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ConfigFile {
    /// Path anonymous visitors are redirected to
    pub login_path: Option<String>,

    /// Nights billed per month of accommodation
    pub nights_per_month: Option<u32>,

    /// Dashboard prefix per role. Replaces the whole default table; roles left
    /// out become routeless.
    pub role_routes: Option<BTreeMap<Role, String>>,
}

/// Configuration for the portal core
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PortalConfig {
    /// Path anonymous visitors are redirected to
    pub login_path: String,

    /// Nights billed per month of accommodation
    pub nights_per_month: u32,

    /// Dashboard prefix per role
    pub role_routes: BTreeMap<Role, String>,
}

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Configuration file not found
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    /// Configuration file read error
    #[error("Failed to read configuration file: {0}")]
    ReadError(#[from] std::io::Error),

    /// JSON parsing error
    #[error("Failed to parse JSON configuration: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Unsupported configuration file format
    #[error("Unsupported configuration file format: {0} (supported: .json)")]
    UnsupportedFormat(String),
}

/// Validation errors for portal configuration
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigValidationError {
    /// Login path is not an absolute path
    #[error("Login path must start with '/', got {0:?}")]
    InvalidLoginPath(String),

    /// Nights per month is invalid
    #[error("Nights per month must be greater than 0, got {0}")]
    InvalidNightsPerMonth(u32),

    /// A dashboard prefix is not an absolute path
    #[error("Route prefix for {role} must be a non-empty path starting with '/', got {prefix:?}")]
    InvalidRoutePrefix {
        /// Role owning the prefix
        role: Role,
        /// The rejected prefix
        prefix: String,
    },

    /// Two dashboard prefixes overlap
    #[error("Route prefix {inner:?} ({inner_role}) is a prefix of {outer:?} ({outer_role})")]
    OverlappingRoutes {
        /// Role owning the shorter prefix
        inner_role: Role,
        /// The shorter prefix
        inner: String,
        /// Role owning the longer prefix
        outer_role: Role,
        /// The longer prefix
        outer: String,
    },
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            login_path: DEFAULT_LOGIN_PATH.to_string(),
            nights_per_month: billing::NIGHTS_PER_MONTH,
            role_routes: RouteTable::default().into_map(),
        }
    }
}

impl PortalConfig {
    /// Create configuration from parsed CLI arguments
    pub fn from_cli_args(args: &CliArgs) -> Result<Self, ConfigError> {
        let mut config = match &args.config {
            Some(config_path) => Self::from_file(config_path)?,
            None => Self::default(),
        };

        // CLI takes precedence over the file
        Self::apply_cli_overrides(&mut config, args);

        Ok(config)
    }

    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.display().to_string()));
        }

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => {
                let content = fs::read_to_string(path)?;
                let config_file: ConfigFile = serde_json::from_str(&content)?;
                Ok(Self::from_config_file(config_file))
            }
            Some(ext) => Err(ConfigError::UnsupportedFormat(ext.to_string())),
            None => Err(ConfigError::UnsupportedFormat("no extension".to_string())),
        }
    }

    /// Create configuration from a config file, merging with defaults
    fn from_config_file(config_file: ConfigFile) -> Self {
        let defaults = Self::default();

        Self {
            login_path: config_file.login_path.unwrap_or(defaults.login_path),
            nights_per_month: config_file.nights_per_month.unwrap_or(defaults.nights_per_month),
            role_routes: config_file.role_routes.unwrap_or(defaults.role_routes),
        }
    }

    /// Apply CLI argument overrides to configuration
    fn apply_cli_overrides(config: &mut Self, args: &CliArgs) {
        if let Some(value) = &args.login_path {
            config.login_path = value.clone();
        }
        if let Some(value) = args.nights_per_month {
            config.nights_per_month = value;
        }
    }

    /// Save configuration to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Print configuration as JSON
    pub fn print_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validate the configuration parameters
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if !self.login_path.starts_with('/') {
            return Err(ConfigValidationError::InvalidLoginPath(self.login_path.clone()));
        }

        if self.nights_per_month == 0 {
            return Err(ConfigValidationError::InvalidNightsPerMonth(self.nights_per_month));
        }

        self.route_table().validate()
    }

    /// Route table described by this configuration
    pub fn route_table(&self) -> RouteTable {
        RouteTable::from_map(self.role_routes.clone())
    }
}
