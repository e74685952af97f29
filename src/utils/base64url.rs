//! URL-safe, padding-free base64 text transport.
//!
//! Encoding uses the RFC 4648 URL-safe alphabet without `=` padding. Decoding
//! reverses the `-`/`_` substitution, restores padding from the length
//! remainder and decodes with the standard alphabet, so tokens that were
//! re-padded or mangled back to `+`/`/` by other tools still import.

use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig, URL_SAFE_NO_PAD};
use base64::engine::DecodePaddingMode;
use base64::Engine;

use crate::error::{constants, Result, ShareError};

/// Standard alphabet, canonical padding, lenient about unused trailing bits.
const PADDED_STANDARD: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_allow_trailing_bits(true)
        .with_decode_padding_mode(DecodePaddingMode::RequireCanonical),
);

/// Encode bytes as URL-safe base64 without padding.
pub fn encode(bytes: &[u8]) -> String {
    URL_SAFE_NO_PAD.encode(bytes)
}

/// Decode URL-safe base64, with or without padding.
///
/// # Errors
/// Returns `ShareError::InvalidEncoding` when the input is empty, its length
/// leaves a remainder of 1 modulo 4, or it contains characters outside the
/// alphabet.
pub fn decode(text: &str) -> Result<Vec<u8>> {
    if text.is_empty() {
        return Err(ShareError::InvalidEncoding(
            constants::ERR_BAD_ALPHABET.to_string(),
        ));
    }

    let mut padded: String = text
        .chars()
        .map(|c| match c {
            '-' => '+',
            '_' => '/',
            other => other,
        })
        .collect();

    // Length is taken in bytes; any non-ASCII input fails the alphabet check below.
    match padded.len() % 4 {
        0 => {}
        2 => padded.push_str("=="),
        3 => padded.push('='),
        _ => {
            return Err(ShareError::InvalidEncoding(
                constants::ERR_BAD_REMAINDER.to_string(),
            ))
        }
    }

    PADDED_STANDARD
        .decode(padded.as_bytes())
        .map_err(|e| ShareError::InvalidEncoding(format!("{}: {e}", constants::ERR_BAD_ALPHABET)))
}
