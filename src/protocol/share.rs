//! # Share Codes
//!
//! Export and import of profiles as copy-pasteable tokens.
//!
//! ## Token Format
//! ```text
//! "CCX1-" + base64url_nopad( gzip( utf8( json(payload) ) ) )
//! ```
//!
//! ## Import Pipeline
//! 1. reject empty input
//! 2. strip the `CCX1-` prefix (case-insensitive, optional)
//! 3. base64url decode
//! 4. reject decoded bytes above the raw ceiling (8 KiB)
//! 5. gzip inflate with a 64 KiB output cap
//! 6. UTF-8 decode
//! 7. lenient JSON parse
//! 8. require `version == 1`
//! 9. sanitize into a trusted [`Profile`]
//!
//! A [`ShareCodec`] holds no mutable state; one instance can be shared across
//! threads freely.

use tracing::{debug, instrument, warn};

use crate::config::{CodecConfig, PAYLOAD_VERSION, SHARE_PREFIX};
use crate::core::payload::CodecPayload;
use crate::core::profile::Profile;
use crate::core::serialization;
use crate::error::{constants, Result, ShareError};
use crate::protocol::sanitize::sanitize;
use crate::utils::{base64url, compression};

/// Converts profiles to share tokens and back.
#[derive(Debug, Clone, Default)]
pub struct ShareCodec {
    config: CodecConfig,
}

impl ShareCodec {
    /// Codec with the contract limits.
    pub fn new() -> Self {
        Self::default()
    }

    /// Codec with custom limits and compression level.
    ///
    /// # Errors
    /// Returns `ShareError::ConfigError` if the configuration fails validation.
    pub fn with_config(config: CodecConfig) -> Result<Self> {
        config.validate_strict()?;
        Ok(Self { config })
    }

    /// The active configuration.
    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    /// Encode a profile as a share token. Never fails.
    #[instrument(level = "debug", skip_all)]
    pub fn export(&self, profile: &Profile) -> String {
        let payload = CodecPayload::from_profile(profile);
        let json = serialization::to_json(&payload);
        let compressed = compression::compress_with_level(json.as_bytes(), self.config.compression.level);
        let body = base64url::encode(&compressed);

        debug!(
            json_bytes = json.len(),
            compressed_bytes = compressed.len(),
            token_chars = SHARE_PREFIX.len() + body.len(),
            "Exported share code"
        );

        let mut token = String::with_capacity(SHARE_PREFIX.len() + body.len());
        token.push_str(SHARE_PREFIX);
        token.push_str(&body);
        token
    }

    /// Decode a share token into a sanitized profile.
    ///
    /// # Errors
    /// - `EmptyInput` for empty or whitespace-only tokens
    /// - `InvalidEncoding` for bad base64url text
    /// - `PayloadTooLarge` when either size ceiling is exceeded
    /// - `CorruptStream` for invalid gzip data or non-UTF-8 payloads
    /// - `MalformedStructure` when the payload is not a JSON object
    /// - `UnsupportedVersion` when `version` is missing or not 1
    #[instrument(level = "debug", skip_all)]
    pub fn import(&self, token: &str) -> Result<Profile> {
        let result = self.decode_payload(token).map(|payload| sanitize(&payload));
        if let Err(ref e) = result {
            warn!(kind = ?e.kind(), error = %e, "Rejected share code");
        }
        result
    }

    /// Run the import pipeline up to, but not including, sanitization.
    ///
    /// The returned payload is untrusted; pass it through
    /// [`sanitize`](crate::protocol::sanitize::sanitize) before use.
    pub fn decode_payload(&self, token: &str) -> Result<CodecPayload> {
        let raw = token.trim();
        if raw.is_empty() {
            return Err(ShareError::EmptyInput);
        }

        let body = strip_prefix(raw);
        let compressed = base64url::decode(body)?;

        let limits = &self.config.limits;
        if compressed.len() > limits.max_token_bytes {
            return Err(ShareError::PayloadTooLarge {
                size: compressed.len(),
                limit: limits.max_token_bytes,
            });
        }

        let json_bytes = compression::decompress_bounded(&compressed, limits.max_decompressed_bytes)?;
        let json = String::from_utf8(json_bytes)
            .map_err(|_| ShareError::CorruptStream(constants::ERR_INVALID_UTF8.to_string()))?;

        let decoded = serialization::decode(&json)?;
        let payload = decoded.payload;
        if payload.version != Some(PAYLOAD_VERSION) {
            return Err(ShareError::UnsupportedVersion(
                decoded.raw_version.map(|v| v.to_string()),
            ));
        }

        debug!(
            compressed_bytes = compressed.len(),
            json_bytes = json.len(),
            "Decoded share payload"
        );
        Ok(payload)
    }
}

/// Remove a leading `CCX1-` in any letter case, if present.
fn strip_prefix(raw: &str) -> &str {
    match raw.get(..SHARE_PREFIX.len()) {
        Some(head) if head.eq_ignore_ascii_case(SHARE_PREFIX) => &raw[SHARE_PREFIX.len()..],
        _ => raw,
    }
}

/// Export with the default codec.
pub fn export_profile(profile: &Profile) -> String {
    ShareCodec::default().export(profile)
}

/// Import with the default codec.
///
/// # Errors
/// See [`ShareCodec::import`].
pub fn import_profile(token: &str) -> Result<Profile> {
    ShareCodec::default().import(token)
}
