//! # Share-Code Protocol
//!
//! Token export/import orchestration and the sanitization trust boundary.
//!
//! ## Components
//! - **Share**: `ShareCodec`, the export and import pipelines
//! - **Sanitize**: clamp-or-default conversion of payloads into profiles

pub mod sanitize;
pub mod share;
