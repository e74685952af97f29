//! # Payload Sanitization
//!
//! The trust boundary between decoded tokens and live profiles.
//!
//! [`sanitize`] is the only way untrusted data becomes a [`Profile`]. It never
//! fails: out-of-range numbers are clamped to the nearest bound, bad colors
//! and empty names are replaced by fallbacks. Hard failures belong to the
//! earlier import stages.
//!
//! ## Policy
//! - **name**: trimmed, empty becomes `"Imported Profile"`, cut to 64 chars
//! - **numbers**: clamped into the inclusive ranges in [`crate::core::profile`];
//!   NaN takes the field default first
//! - **colors**: `#` added if missing, must be 6 hex digits, uppercased;
//!   otherwise `#00FF66` (main) or `#000000` (outline)
//! - **booleans**: unchanged

use tracing::debug;

use crate::config::MAX_NAME_CHARS;
use crate::core::payload::{CodecPayload, DEFAULT_IMPORTED_NAME};
use crate::core::profile::{
    Profile, DEFAULT_COLOR_HEX, DEFAULT_OUTLINE_COLOR_HEX, DOT_SIZE_RANGE, DYNAMIC_SPREAD_RANGE,
    GAP_RANGE, KEY_PRESS_SPREAD_RANGE, LINE_LENGTH_RANGE, LINE_THICKNESS_RANGE, OFFSET_RANGE,
    OPACITY_RANGE, OUTLINE_THICKNESS_RANGE,
};

/// Build a trusted profile from an untrusted payload.
pub fn sanitize(payload: &CodecPayload) -> Profile {
    let defaults = CodecPayload::default();

    Profile {
        name: sanitize_name(&payload.name),
        show_lines: payload.show_lines,
        show_center_dot: payload.show_center_dot,
        t_style: payload.t_style,
        show_outline: payload.show_outline,
        line_length: clamp_field(
            "lineLength",
            payload.line_length,
            defaults.line_length,
            LINE_LENGTH_RANGE,
        ),
        line_thickness: clamp_field(
            "lineThickness",
            payload.line_thickness,
            defaults.line_thickness,
            LINE_THICKNESS_RANGE,
        ),
        gap: clamp_field("gap", payload.gap, defaults.gap, GAP_RANGE),
        dot_size: clamp_field("dotSize", payload.dot_size, defaults.dot_size, DOT_SIZE_RANGE),
        outline_thickness: clamp_field(
            "outlineThickness",
            payload.outline_thickness,
            defaults.outline_thickness,
            OUTLINE_THICKNESS_RANGE,
        ),
        color_hex: normalize_hex_color(&payload.color_hex, DEFAULT_COLOR_HEX),
        outline_color_hex: normalize_hex_color(
            &payload.outline_color_hex,
            DEFAULT_OUTLINE_COLOR_HEX,
        ),
        opacity: clamp_field("opacity", payload.opacity, defaults.opacity, OPACITY_RANGE),
        offset_x: clamp_field("offsetX", payload.offset_x, defaults.offset_x, OFFSET_RANGE),
        offset_y: clamp_field("offsetY", payload.offset_y, defaults.offset_y, OFFSET_RANGE),
        dynamic_spread: clamp_field(
            "dynamicSpread",
            payload.dynamic_spread,
            defaults.dynamic_spread,
            DYNAMIC_SPREAD_RANGE,
        ),
        key_press_spread_enabled: payload.key_press_spread_enabled,
        key_press_spread_amount: clamp_field(
            "keyPressSpreadAmount",
            payload.key_press_spread_amount,
            defaults.key_press_spread_amount,
            KEY_PRESS_SPREAD_RANGE,
        ),
    }
}

/// Trim, substitute the placeholder when empty, and cut to 64 characters.
pub fn sanitize_name(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        debug!("Empty profile name, using placeholder");
        return String::from(DEFAULT_IMPORTED_NAME);
    }

    if trimmed.chars().count() <= MAX_NAME_CHARS {
        return trimmed.to_string();
    }

    let cut: String = trimmed.chars().take(MAX_NAME_CHARS).collect();
    // The cut may expose inner whitespace; trim again so a second pass is a no-op.
    cut.trim_end().to_string()
}

/// Clamp `value` into `range`; NaN is replaced by `default` first.
pub fn clamp_field(field: &str, value: f64, default: f64, range: (f64, f64)) -> f64 {
    let (min, max) = range;
    if value.is_nan() {
        debug!(field, "NaN field, using default");
        return default.clamp(min, max);
    }

    let clamped = value.clamp(min, max);
    if clamped != value {
        debug!(field, value, clamped, "Clamped out-of-range field");
    }
    clamped
}

/// Normalize a `#RRGGBB` color to uppercase, or return `fallback`.
///
/// Surrounding whitespace is ignored and a missing `#` is added.
pub fn normalize_hex_color(raw: &str, fallback: &str) -> String {
    let trimmed = raw.trim();
    let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);

    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        if !trimmed.is_empty() {
            debug!(fallback, "Invalid color, using fallback");
        }
        return String::from(fallback);
    }

    format!("#{}", digits.to_ascii_uppercase())
}
