//! # Error Types
//!
//! Error handling for the share-code codec.
//!
//! Every failure on the import path is reported as a [`ShareError`] carrying a
//! short human-readable message. Callers that only need to branch on the
//! category use [`ShareError::kind`], which returns a fieldless [`ErrorKind`].
//!
//! ## Error Categories
//! - **Input Errors**: empty tokens, bad alphabet or padding remainder
//! - **Size Errors**: raw token or decompressed payload above its ceiling
//! - **Stream Errors**: corrupt gzip data, invalid UTF-8
//! - **Structure Errors**: unparseable JSON, unsupported payload version
//! - **Configuration Errors**: invalid or unreadable codec configuration
//!
//! Export never fails for a well-formed profile, so none of these variants
//! are produced on the export path.
//!
//! ## Example Usage
//! ```rust
//! use crosshair_share::error::ErrorKind;
//! use crosshair_share::ShareCodec;
//!
//! let codec = ShareCodec::default();
//! let err = codec.import("   ").unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::EmptyInput);
//! ```

use serde::{Deserialize, Serialize};
use std::io;
use thiserror::Error;

/// Error message constants to reduce allocations in error paths.
pub mod constants {
    /// Token errors
    pub const ERR_EMPTY_INPUT: &str = "Share code is empty";
    pub const ERR_BAD_REMAINDER: &str = "Share code length is not a valid base64url length";
    pub const ERR_BAD_ALPHABET: &str = "Share code contains characters outside the base64url alphabet";

    /// Stream errors
    pub const ERR_INVALID_UTF8: &str = "Decompressed payload is not valid UTF-8";
    pub const ERR_NOT_AN_OBJECT: &str = "Payload is not a JSON object";

    /// Configuration errors
    pub const ERR_LOGGER_INSTALLED: &str = "A global tracing subscriber is already installed";
}

/// Category of a [`ShareError`], without its message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    EmptyInput,
    InvalidEncoding,
    PayloadTooLarge,
    CorruptStream,
    MalformedStructure,
    UnsupportedVersion,
    Config,
    Io,
}

// ShareError is the primary error type for all codec operations
#[derive(Error, Debug)]
pub enum ShareError {
    #[error("Share code is empty")]
    EmptyInput,

    #[error("Invalid encoding: {0}")]
    InvalidEncoding(String),

    #[error("Payload too large: {size} bytes (limit {limit})")]
    PayloadTooLarge { size: usize, limit: usize },

    #[error("Corrupt stream: {0}")]
    CorruptStream(String),

    #[error("Malformed payload: {0}")]
    MalformedStructure(String),

    /// Carries the `version` value as JSON text, or `None` when absent
    #[error("Unsupported payload version: {}", display_version(.0))]
    UnsupportedVersion(Option<String>),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

fn display_version(version: &Option<String>) -> &str {
    version.as_deref().unwrap_or("missing")
}

impl ShareError {
    /// The category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ShareError::EmptyInput => ErrorKind::EmptyInput,
            ShareError::InvalidEncoding(_) => ErrorKind::InvalidEncoding,
            ShareError::PayloadTooLarge { .. } => ErrorKind::PayloadTooLarge,
            ShareError::CorruptStream(_) => ErrorKind::CorruptStream,
            ShareError::MalformedStructure(_) => ErrorKind::MalformedStructure,
            ShareError::UnsupportedVersion(_) => ErrorKind::UnsupportedVersion,
            ShareError::ConfigError(_) => ErrorKind::Config,
            ShareError::Io(_) => ErrorKind::Io,
        }
    }
}

/// Type alias for Results using ShareError
pub type Result<T> = std::result::Result<T, ShareError>;
