//! # Payload Serialization
//!
//! JSON encoding of [`CodecPayload`].
//!
//! Encoding is total. Decoding is lenient by design of the wire contract:
//! - field names match case-insensitively (`LINELENGTH` == `lineLength`)
//! - unknown fields are ignored
//! - missing fields, and fields whose JSON type does not match, fall back to
//!   the payload defaults
//!
//! Only text that is not a JSON object at all is rejected, with
//! [`ShareError::MalformedStructure`].

use serde_json::{Map, Value};
use tracing::{debug, error};

use crate::core::payload::{CodecPayload, FieldKind, FIELDS};
use crate::error::{constants, Result, ShareError};

/// Serialize a payload to compact JSON text.
pub fn to_json(payload: &CodecPayload) -> String {
    match serde_json::to_string(payload) {
        Ok(json) => json,
        Err(e) => {
            // Plain struct of scalars; unreachable in practice.
            error!(error = %e, "Failed to serialize share payload");
            String::from("{}")
        }
    }
}

/// Parse JSON text into a payload.
///
/// # Errors
/// Returns `ShareError::MalformedStructure` if the text is not valid JSON or
/// the top-level value is not an object.
pub fn from_json(text: &str) -> Result<CodecPayload> {
    decode(text).map(|decoded| decoded.payload)
}

/// A parsed payload together with the `version` value exactly as it appeared.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedPayload {
    pub payload: CodecPayload,
    /// Last `version` value in the document, even when it is not an integer
    pub raw_version: Option<Value>,
}

/// Like [`from_json`], but keeps the raw `version` value for error reporting.
///
/// # Errors
/// Same as [`from_json`].
pub fn decode(text: &str) -> Result<DecodedPayload> {
    let value: Value =
        serde_json::from_str(text).map_err(|e| ShareError::MalformedStructure(e.to_string()))?;

    let Value::Object(raw) = value else {
        return Err(ShareError::MalformedStructure(
            constants::ERR_NOT_AN_OBJECT.to_string(),
        ));
    };

    let raw_version = raw
        .iter()
        .rev()
        .find(|(key, _)| key.eq_ignore_ascii_case("version"))
        .map(|(_, value)| value.clone());

    let fields = canonicalize_fields(raw);
    let payload = serde_json::from_value(Value::Object(fields))
        .map_err(|e| ShareError::MalformedStructure(e.to_string()))?;

    Ok(DecodedPayload {
        payload,
        raw_version,
    })
}

/// Rename known keys to their canonical spelling and drop everything the
/// payload cannot take as-is: unknown keys and values of the wrong type.
///
/// Keys are visited in document order, so when one field appears under
/// several spellings the last occurrence wins, including a wrong-typed one.
fn canonicalize_fields(raw: Map<String, Value>) -> Map<String, Value> {
    let mut out = Map::new();

    for (key, value) in raw {
        let Some((name, kind)) = FIELDS
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(&key))
        else {
            debug!(field = %key, "Ignoring unknown payload field");
            continue;
        };

        if !matches_kind(&value, *kind) {
            debug!(field = *name, "Payload field has wrong type, using default");
            out.remove(*name);
            continue;
        }

        out.insert((*name).to_string(), value);
    }

    out
}

fn matches_kind(value: &Value, kind: FieldKind) -> bool {
    match kind {
        FieldKind::Integer => value.is_i64(),
        FieldKind::Number => value.is_number(),
        FieldKind::Bool => value.is_boolean(),
        FieldKind::Text => value.is_string(),
    }
}
