//! # Configuration Management
//!
//! Contract constants of the share-code format and the tunable codec
//! configuration.
//!
//! The constants below are part of the token contract and must not change
//! without bumping [`PAYLOAD_VERSION`] and [`SHARE_PREFIX`]. [`CodecConfig`]
//! only tunes the local side: how hard to compress, how much hostile input to
//! tolerate, and how to log.
//!
//! ## Configuration Sources
//! - TOML files via `from_file()`
//! - Direct instantiation with defaults
//! - Environment-specific overrides via `from_env()`
//!
//! ## Security Considerations
//! - The raw token ceiling is checked before any decompression work
//! - The decompressed ceiling bounds memory use against gzip bombs

use crate::error::{Result, ShareError};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::Level;

/// Fixed, human-readable prefix identifying the token family
pub const SHARE_PREFIX: &str = "CCX1-";

/// Current payload version; any other value is rejected on import
pub const PAYLOAD_VERSION: i64 = 1;

/// Ceiling on decoded (still compressed) token bytes
pub const MAX_TOKEN_BYTES: usize = 8 * 1024;

/// Ceiling on decompressed payload bytes
pub const MAX_DECOMPRESSED_SIZE: usize = 64 * 1024;

/// Upper bound accepted by validation for the decompressed ceiling (16 MiB)
pub const MAX_DECOMPRESSED_CEILING: usize = 16 * 1024 * 1024;

/// Maximum profile name length in characters
pub const MAX_NAME_CHARS: usize = 64;

/// Default gzip level: smallest output
pub const DEFAULT_COMPRESSION_LEVEL: u32 = 9;

/// Top-level codec configuration
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
pub struct CodecConfig {
    /// Input size ceilings
    #[serde(default)]
    pub limits: LimitsConfig,

    /// Compression tuning
    #[serde(default)]
    pub compression: CompressionConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl CodecConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut file = File::open(path)
            .map_err(|e| ShareError::ConfigError(format!("Failed to open config file: {e}")))?;

        let mut contents = String::new();
        file.read_to_string(&mut contents)
            .map_err(|e| ShareError::ConfigError(format!("Failed to read config file: {e}")))?;

        Self::from_toml(&contents)
    }

    /// Load configuration from TOML string
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str::<Self>(content)
            .map_err(|e| ShareError::ConfigError(format!("Failed to parse TOML: {e}")))
    }

    /// Load configuration from environment variables, starting from defaults
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(raw) = std::env::var("CROSSHAIR_SHARE_MAX_TOKEN_BYTES") {
            config.limits.max_token_bytes = raw.parse::<usize>().map_err(|e| {
                ShareError::ConfigError(format!("Invalid CROSSHAIR_SHARE_MAX_TOKEN_BYTES: {e}"))
            })?;
        }

        if let Ok(raw) = std::env::var("CROSSHAIR_SHARE_MAX_DECOMPRESSED_BYTES") {
            config.limits.max_decompressed_bytes = raw.parse::<usize>().map_err(|e| {
                ShareError::ConfigError(format!(
                    "Invalid CROSSHAIR_SHARE_MAX_DECOMPRESSED_BYTES: {e}"
                ))
            })?;
        }

        if let Ok(raw) = std::env::var("CROSSHAIR_SHARE_COMPRESSION_LEVEL") {
            config.compression.level = raw.parse::<u32>().map_err(|e| {
                ShareError::ConfigError(format!("Invalid CROSSHAIR_SHARE_COMPRESSION_LEVEL: {e}"))
            })?;
        }

        if let Ok(raw) = std::env::var("CROSSHAIR_SHARE_LOG_LEVEL") {
            config.logging.log_level = raw.parse::<Level>().map_err(|_| {
                ShareError::ConfigError(format!("Invalid CROSSHAIR_SHARE_LOG_LEVEL: {raw}"))
            })?;
        }

        Ok(config)
    }

    /// Apply overrides to the default configuration
    pub fn default_with_overrides<F>(mutator: F) -> Self
    where
        F: FnOnce(&mut Self),
    {
        let mut config = Self::default();
        mutator(&mut config);
        config
    }

    /// Generate example configuration file content
    pub fn example_config() -> String {
        toml::to_string_pretty(&Self::default())
            .unwrap_or_else(|_| String::from("# Failed to generate example config"))
    }

    /// Save configuration to a file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| ShareError::ConfigError(format!("Failed to serialize config: {e}")))?;

        std::fs::write(path, content)
            .map_err(|e| ShareError::ConfigError(format!("Failed to write config file: {e}")))?;

        Ok(())
    }

    /// Validate the configuration for common misconfigurations
    ///
    /// Returns a list of validation errors. Empty list means configuration is valid.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        errors.extend(self.limits.validate());
        errors.extend(self.compression.validate());
        errors.extend(self.logging.validate());
        errors
    }

    /// Validate and return Result - convenience method
    pub fn validate_strict(&self) -> Result<()> {
        let errors = self.validate();
        if errors.is_empty() {
            Ok(())
        } else {
            Err(ShareError::ConfigError(format!(
                "Configuration validation failed:\n  - {}",
                errors.join("\n  - ")
            )))
        }
    }
}

/// Size ceilings applied on import
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct LimitsConfig {
    /// Maximum decoded token size, checked before decompression
    pub max_token_bytes: usize,

    /// Maximum decompressed payload size, checked incrementally
    pub max_decompressed_bytes: usize,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_token_bytes: MAX_TOKEN_BYTES,
            max_decompressed_bytes: MAX_DECOMPRESSED_SIZE,
        }
    }
}

impl LimitsConfig {
    /// Validate size ceilings
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.max_token_bytes == 0 {
            errors.push("Max token bytes must be greater than 0".to_string());
        }

        if self.max_decompressed_bytes == 0 {
            errors.push("Max decompressed bytes must be greater than 0".to_string());
        } else if self.max_decompressed_bytes > MAX_DECOMPRESSED_CEILING {
            errors.push(format!(
                "Max decompressed bytes too large: {} (maximum: {})",
                self.max_decompressed_bytes, MAX_DECOMPRESSED_CEILING
            ));
        }

        if self.max_token_bytes > self.max_decompressed_bytes {
            errors.push(
                "Max token bytes cannot be larger than max decompressed bytes".to_string(),
            );
        }

        errors
    }
}

/// Compression tuning
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct CompressionConfig {
    /// gzip level, 0 (store) to 9 (smallest)
    pub level: u32,
}

impl Default for CompressionConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_COMPRESSION_LEVEL,
        }
    }
}

impl CompressionConfig {
    /// Validate compression settings
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        if self.level > 9 {
            errors.push(format!(
                "Invalid compression level: {} (valid range: 0-9)",
                self.level
            ));
        }
        errors
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    /// Application name for logs
    pub app_name: String,

    /// Log level
    #[serde(with = "log_level_serde")]
    pub log_level: Level,

    /// Whether to log to console
    pub log_to_console: bool,

    /// Whether to log to file
    pub log_to_file: bool,

    /// Path to log file (if log_to_file is true)
    pub log_file_path: Option<String>,

    /// Whether to use JSON formatting for logs
    pub json_format: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            app_name: String::from("crosshair-share"),
            log_level: Level::INFO,
            log_to_console: true,
            log_to_file: false,
            log_file_path: None,
            json_format: false,
        }
    }
}

impl LoggingConfig {
    /// Validate logging configuration
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.app_name.is_empty() {
            errors.push("Application name cannot be empty".to_string());
        } else if self.app_name.chars().count() > 64 {
            errors.push(format!(
                "Application name too long: {} characters (maximum: 64)",
                self.app_name.chars().count()
            ));
        }

        if self.log_to_file {
            if let Some(ref path) = self.log_file_path {
                if let Some(parent) = Path::new(path).parent() {
                    if !parent.as_os_str().is_empty() && !parent.exists() {
                        errors.push(format!(
                            "Log file directory does not exist: {}",
                            parent.display()
                        ));
                    }
                }
            } else {
                errors.push("log_file_path must be specified when log_to_file is true".to_string());
            }
        }

        if !self.log_to_console && !self.log_to_file {
            errors
                .push("At least one logging output (console or file) must be enabled".to_string());
        }

        errors
    }
}

/// Helper module for tracing::Level serialization/deserialization
mod log_level_serde {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::str::FromStr;
    use tracing::Level;

    pub fn serialize<S>(level: &Level, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let level_str = match *level {
            Level::TRACE => "trace",
            Level::DEBUG => "debug",
            Level::INFO => "info",
            Level::WARN => "warn",
            Level::ERROR => "error",
        };
        level_str.serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Level, D::Error>
    where
        D: Deserializer<'de>,
    {
        let level_str = String::deserialize(deserializer)?;
        Level::from_str(&level_str)
            .map_err(|_| serde::de::Error::custom(format!("Invalid log level: {level_str}")))
    }
}
