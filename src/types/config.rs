//! Configuration structures for the access roster
//!
//! This module contains the command line arguments, the roster configuration
//! (seed users and resources plus persistence options) and its validation.

use clap::Parser;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::resource::Resource;
use crate::system::{AccessControlSystem, RosterResult};
use crate::user::{User, UserRole};

/// Command line arguments structure
#[derive(Debug, Clone, Parser)]
#[command(
    name = "access-roster",
    version = "0.1.0",
    about = "Access Roster - role-based access control demonstration",
    long_about = "Registers users and resources, checks every user against every resource, sorts users by access level and optionally persists the roster.

EXAMPLES:
    # Run the built-in demonstration
    access-roster

    # Use a configuration file
    access-roster --config roster.json

    # Save the roster after the run
    access-roster --save roster.txt

    # Add users from a roster file before checking access
    access-roster --load roster.txt

    # JSON logs to stderr and to daily files under ./logs
    access-roster --verbose --log-json --log-dir logs

    # Generate configuration template
    access-roster --print-config > roster.json

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
        help = "Configuration file path (JSON format)",
        long_help = "Path to a JSON configuration file. CLI arguments will override file settings."
    )]
    pub config: Option<String>,

    /// Roster file to write after the run
    #[arg(long, help = "Save the roster to this file (name,id,access_level per line)")]
    pub save: Option<String>,

    /// Roster file to read before the run
    #[arg(
        long,
        help = "Load additional users from this roster file",
        long_help = "Load users from a roster file before checking access. Loaded users are plain users: roles are not stored in roster files."
    )]
    pub load: Option<String>,

    /// Skip sorting users by access level
    #[arg(long, help = "Do not sort users by access level")]
    pub no_sort: bool,

    /// Output path for user profiles (JSONL)
    #[arg(long, help = "Output path for user profiles JSONL file")]
    pub profiles_output: Option<String>,

    /// Enable verbose logging
    #[arg(short, long, help = "Enable verbose logging")]
    pub verbose: bool,

    /// Enable debug logging
    #[arg(short, long, help = "Enable debug logging")]
    pub debug: bool,

    /// Emit console logs as JSON
    #[arg(long, help = "Emit console logs as JSON")]
    pub log_json: bool,

    /// Directory for daily rolling JSON log files
    #[arg(long, value_name = "DIR", help = "Also write JSON logs to a daily rolling file in DIR")]
    pub log_dir: Option<String>,

    /// Explicit tracing filter directive
    #[arg(
        long,
        value_name = "FILTER",
        help = "Tracing filter directive, e.g. access_roster=trace",
        long_help = "Tracing filter directive. Overrides --verbose, --debug and RUST_LOG."
    )]
    pub log_filter: Option<String>,

    /// Dry run mode - validate configuration without running
    #[arg(long, help = "Validate configuration without running")]
    pub dry_run: bool,

    /// Print default configuration and exit
    #[arg(long, help = "Print default configuration in JSON format and exit")]
    pub print_config: bool,
}

/// User entry in a roster configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSeed {
    /// User name
    pub name: String,
    /// User identifier
    pub id: i64,
    /// Access level
    pub access_level: i32,
    /// Role and its detail; plain user when omitted
    #[serde(default)]
    pub role: UserRole,
}

impl UserSeed {
    /// Construct the user this entry describes
    pub fn build(&self) -> RosterResult<User> {
        User::with_role(self.name.clone(), self.id, self.access_level, self.role.clone())
    }
}

/// Resource entry in a roster configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceSeed {
    /// Resource name
    pub name: String,
    /// Minimum access level required
    pub required_access_level: i32,
}

impl ResourceSeed {
    /// Construct the resource this entry describes
    pub fn build(&self) -> RosterResult<Resource> {
        Resource::new(self.name.clone(), self.required_access_level)
    }
}

/// Configuration file structure (allows partial configuration)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ConfigFile {
    /// Users to register
    pub users: Option<Vec<UserSeed>>,

    /// Resources to register
    pub resources: Option<Vec<ResourceSeed>>,

    /// Roster file to read before the run
    pub load_path: Option<String>,

    /// Roster file to write after the run
    pub save_path: Option<String>,

    /// Whether to sort users by access level
    pub sort_users: Option<bool>,

    /// Output path for user profiles (JSONL)
    pub profiles_output: Option<String>,
}

/// Configuration for an access roster run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RosterConfig {
    /// Users to register, in order
    pub users: Vec<UserSeed>,

    /// Resources to register, in order
    pub resources: Vec<ResourceSeed>,

    /// Roster file to read before the run
    pub load_path: Option<String>,

    /// Roster file to write after the run
    pub save_path: Option<String>,

    /// Whether to sort users by access level
    pub sort_users: bool,

    /// Output path for user profiles (JSONL)
    pub profiles_output: Option<String>,
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

/// Validation errors for roster configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigValidationError {
    /// A configured user would be rejected at construction
    #[error("Invalid user #{index} ({name:?}): {reason}")]
    InvalidUser {
        /// Position of the user in the configuration
        index: usize,
        /// Configured name
        name: String,
        /// Why construction fails
        reason: String,
    },

    /// A configured resource would be rejected at construction
    #[error("Invalid resource #{index} ({name:?}): {reason}")]
    InvalidResource {
        /// Position of the resource in the configuration
        index: usize,
        /// Configured name
        name: String,
        /// Why construction fails
        reason: String,
    },

    /// Load and save point at the same file
    #[error("Load and save paths must differ, both are {0}")]
    SamePersistencePath(String),
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            users: vec![
                UserSeed {
                    name: "Igor".to_string(),
                    id: 1,
                    access_level: 2,
                    role: UserRole::Student { group: "02".to_string() },
                },
                UserSeed {
                    name: "Viktor".to_string(),
                    id: 3,
                    access_level: 5,
                    role: UserRole::Administrator { role: "System administrator".to_string() },
                },
                UserSeed {
                    name: "Natalya".to_string(),
                    id: 2,
                    access_level: 3,
                    role: UserRole::Teacher { department: "Computer Science".to_string() },
                },
            ],
            resources: vec![
                ResourceSeed { name: "Library".to_string(), required_access_level: 1 },
                ResourceSeed { name: "Laboratory".to_string(), required_access_level: 3 },
                ResourceSeed { name: "Server room".to_string(), required_access_level: 5 },
            ],
            load_path: None,
            save_path: None,
            sort_users: true,
            profiles_output: None,
        }
    }
}

impl RosterConfig {
    /// Create configuration from parsed CLI arguments
    pub fn from_cli_args(args: CliArgs) -> Result<Self, ConfigError> {
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
            users: config_file.users.unwrap_or(defaults.users),
            resources: config_file.resources.unwrap_or(defaults.resources),
            load_path: config_file.load_path.or(defaults.load_path),
            save_path: config_file.save_path.or(defaults.save_path),
            sort_users: config_file.sort_users.unwrap_or(defaults.sort_users),
            profiles_output: config_file.profiles_output.or(defaults.profiles_output),
        }
    }

    /// Apply CLI argument overrides to configuration
    fn apply_cli_overrides(config: &mut Self, args: CliArgs) {
        if let Some(value) = args.load {
            config.load_path = Some(value);
        }
        if let Some(value) = args.save {
            config.save_path = Some(value);
        }
        if let Some(value) = args.profiles_output {
            config.profiles_output = Some(value);
        }
        if args.no_sort {
            config.sort_users = false;
        }
    }

    /// Print configuration as JSON
    pub fn print_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validate the configuration parameters, seeds included
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        for (index, seed) in self.users.iter().enumerate() {
            if let Err(e) = seed.build() {
                return Err(ConfigValidationError::InvalidUser {
                    index,
                    name: seed.name.clone(),
                    reason: e.to_string(),
                });
            }
        }

        for (index, seed) in self.resources.iter().enumerate() {
            if let Err(e) = seed.build() {
                return Err(ConfigValidationError::InvalidResource {
                    index,
                    name: seed.name.clone(),
                    reason: e.to_string(),
                });
            }
        }

        self.validate_persistence()
    }

    /// Validate only the persistence options
    ///
    /// Seeds are left to [`RosterConfig::build_system`], which reports the
    /// same construction errors when the roster is built.
    pub fn validate_persistence(&self) -> Result<(), ConfigValidationError> {
        if let (Some(load), Some(save)) = (&self.load_path, &self.save_path) {
            if load == save {
                return Err(ConfigValidationError::SamePersistencePath(load.clone()));
            }
        }

        Ok(())
    }

    /// Build an access control system holding the configured users and resources
    pub fn build_system(&self) -> RosterResult<AccessControlSystem> {
        let mut system = AccessControlSystem::new();

        for seed in &self.users {
            system.add_user(seed.build()?);
        }
        for seed in &self.resources {
            system.add_resource(seed.build()?);
        }

        Ok(system)
    }
}
