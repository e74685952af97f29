//! Structured logging setup.
//!
//! Installs a global `tracing-subscriber` fmt subscriber according to
//! [`LoggingConfig`]. Library code only emits `tracing` events; installing a
//! subscriber is left to the embedding application.

use std::fs::OpenOptions;
use std::sync::Mutex;

use tracing::info;
use tracing_subscriber::fmt;

use crate::config::LoggingConfig;
use crate::error::{constants, Result, ShareError};

/// Install the global subscriber described by `config`.
///
/// When `log_to_file` is set the file output wins over the console.
///
/// # Errors
/// Returns `ShareError::ConfigError` if the configuration is invalid or a
/// global subscriber is already installed, and `ShareError::Io` if the log
/// file cannot be opened.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let errors = config.validate();
    if !errors.is_empty() {
        return Err(ShareError::ConfigError(errors.join("; ")));
    }

    let builder = fmt()
        .with_max_level(config.log_level)
        .with_target(true);

    let installed = match (config.log_to_file, config.log_file_path.as_deref()) {
        (true, Some(path)) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            let builder = builder.with_ansi(false).with_writer(Mutex::new(file));
            if config.json_format {
                builder.json().try_init()
            } else {
                builder.try_init()
            }
        }
        _ => {
            if config.json_format {
                builder.json().try_init()
            } else {
                builder.try_init()
            }
        }
    };

    installed.map_err(|_| ShareError::ConfigError(constants::ERR_LOGGER_INSTALLED.to_string()))?;

    info!(app = %config.app_name, level = %config.log_level, "Logging initialized");
    Ok(())
}
