//! # Utility Modules
//!
//! Byte-level stages of the share-code pipeline and logging setup.
//!
//! ## Components
//! - **Compression**: gzip with an incremental output cap
//! - **Base64url**: URL-safe, padding-free text transport
//! - **Logging**: tracing-subscriber initialisation
//!
//! ## Security
//! - Decompression bomb protection (64 KiB default limit, checked per chunk)
//! - Strict alphabet and length-remainder checks on token text

pub mod base64url;
pub mod compression;
pub mod logging;
