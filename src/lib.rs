//! # Crosshair Share
//!
//! Portable share codes for crosshair overlay profiles.
//!
//! A profile is turned into a short, copy-pasteable token and back, without a
//! network service or file exchange. Import tolerates hostile input: every
//! stage is size-bounded and the decoded data passes through a sanitizer
//! before it becomes a trusted [`Profile`].
//!
//! ## Pipeline
//! ```text
//! export: Profile -> CodecPayload -> JSON -> gzip -> base64url -> "CCX1-..."
//! import: "CCX1-..." -> base64url -> (8 KiB cap) -> gunzip (64 KiB cap)
//!         -> UTF-8 -> JSON -> version check -> sanitize -> Profile
//! ```
//!
//! ## Example
//! ```rust
//! use crosshair_share::{Profile, ShareCodec};
//!
//! let codec = ShareCodec::new();
//! let token = codec.export(&Profile::cs_classic());
//! assert!(token.starts_with("CCX1-"));
//!
//! let imported = codec.import(&token).unwrap();
//! assert_eq!(imported, Profile::cs_classic());
//! ```
//!
//! ## Modules
//! - [`core`]: profile schema, wire payload, JSON serialization
//! - [`utils`]: gzip, base64url, logging setup
//! - [`protocol`]: share-code pipeline and sanitizer
//! - [`service`]: profile collection with name de-duplication
//! - [`config`]: contract constants and tunable limits
//! - [`error`]: error kinds

#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![forbid(unsafe_code)]

pub mod config;
pub mod core;
pub mod error;
pub mod protocol;
pub mod service;
pub mod utils;

pub use crate::config::CodecConfig;
pub use crate::core::payload::CodecPayload;
pub use crate::core::profile::{presets, Profile};
pub use crate::error::{ErrorKind, Result, ShareError};
pub use crate::protocol::sanitize::sanitize;
pub use crate::protocol::share::{export_profile, import_profile, ShareCodec};
pub use crate::service::collection::{CollectionEvent, ProfileCollection, SubscriptionId};
