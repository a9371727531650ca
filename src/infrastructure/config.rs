//! Configuration infrastructure
//!
//! Settings are layered: built-in defaults, then a config file, then
//! `DOMINO__*` environment variables (e.g. `DOMINO__PARSING__MODE=fragment`).

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::infrastructure::parsing_error::{DominoError, DominoResult};

/// Default configuration values
pub mod defaults {
    pub const LOG_LEVEL: &str = "info";
    pub const LOG_JSON_FORMAT: bool = false;
    pub const LOG_CONSOLE_OUTPUT: bool = true;
    pub const LOG_FILE_OUTPUT: bool = false;
    pub const LOG_FILE_NAME: &str = "domino.log";
    pub const LOG_UTC_OFFSET_HOURS: i32 = 0;

    pub const CONFIG_DIR_NAME: &str = "domino";
    pub const CONFIG_FILE_NAME: &str = "domino.toml";
    pub const ENV_PREFIX: &str = "DOMINO";

    pub const LOG_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];
}

/// Complete crate configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DominoConfig {
    pub parsing: ParsingConfig,
    pub files: FileConfig,
    pub logging: LoggingConfig,
}

/// How markup is handed to the HTML tree builder
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParseMode {
    /// Full document parsing, with implied `<html>/<head>/<body>`
    #[default]
    Document,
    /// Fragment parsing in a `<body>` context
    Fragment,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParsingConfig {
    pub mode: ParseMode,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Files larger than this are reported as unreadable. `None` disables the cap.
    pub max_file_bytes: Option<u64>,
}

/// Logging configuration settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level: "error", "warn", "info", "debug", "trace"
    pub level: String,

    /// Enable JSON formatted logs
    pub json_format: bool,

    /// Enable console output
    pub console_output: bool,

    /// Enable file output
    pub file_output: bool,

    /// Log file name inside the log directory
    pub file_name: String,

    /// Offset applied to log timestamps
    pub utc_offset_hours: i32,

    /// Module-specific log level filters (e.g., "html5ever": "warn")
    pub module_filters: HashMap<String, String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: defaults::LOG_LEVEL.to_string(),
            json_format: defaults::LOG_JSON_FORMAT,
            console_output: defaults::LOG_CONSOLE_OUTPUT,
            file_output: defaults::LOG_FILE_OUTPUT,
            file_name: defaults::LOG_FILE_NAME.to_string(),
            utc_offset_hours: defaults::LOG_UTC_OFFSET_HOURS,
            module_filters: {
                let mut filters = HashMap::new();
                filters.insert("html5ever".to_string(), "warn".to_string());
                filters.insert("selectors".to_string(), "warn".to_string());
                filters
            },
        }
    }
}

impl DominoConfig {
    /// Get the user configuration directory for this crate
    pub fn config_dir() -> DominoResult<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join(defaults::CONFIG_DIR_NAME))
            .ok_or_else(|| DominoError::config("Failed to get user config directory"))
    }

    /// Default location of the configuration file
    pub fn default_path() -> DominoResult<PathBuf> {
        Ok(Self::config_dir()?.join(defaults::CONFIG_FILE_NAME))
    }

    /// Load configuration from a file, layered with environment overrides
    pub fn from_file(path: impl AsRef<Path>) -> DominoResult<Self> {
        let path = path.as_ref();
        let settings = config::Config::builder()
            .add_source(config::File::from(path))
            .add_source(Self::environment())
            .build()?;

        let config: Self = settings.try_deserialize()?;
        config.validate()?;
        info!("Loaded configuration from {:?}", path);
        Ok(config)
    }

    /// Load configuration from the default path if it exists, otherwise defaults.
    /// Environment overrides apply in both cases.
    pub fn load() -> DominoResult<Self> {
        let mut builder = config::Config::builder();
        if let Ok(path) = Self::default_path() {
            builder = builder.add_source(config::File::from(path).required(false));
        }

        let settings = builder.add_source(Self::environment()).build()?;
        let config: Self = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    fn environment() -> config::Environment {
        config::Environment::with_prefix(defaults::ENV_PREFIX)
            .prefix_separator("__")
            .separator("__")
    }

    pub fn validate(&self) -> DominoResult<()> {
        let level = self.logging.level.to_lowercase();
        if !defaults::LOG_LEVELS.contains(&level.as_str()) {
            return Err(DominoError::config(format!(
                "Unknown log level '{}'",
                self.logging.level
            )));
        }

        if self.files.max_file_bytes == Some(0) {
            return Err(DominoError::config(
                "max_file_bytes must be greater than 0",
            ));
        }

        if !(-12..=14).contains(&self.logging.utc_offset_hours) {
            return Err(DominoError::config(format!(
                "utc_offset_hours out of range: {}",
                self.logging.utc_offset_hours
            )));
        }

        Ok(())
    }
}
