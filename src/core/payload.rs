//! Versioned wire projection of [`Profile`].
//!
//! [`CodecPayload`] is what actually gets serialized into a token. It is kept
//! separate from the live [`Profile`] so the two shapes can evolve
//! independently; the only bridges are [`CodecPayload::from_profile`] and the
//! sanitizer.
//!
//! The payload is deliberately permissive: every field has a documented
//! default, used whenever the field is missing from the decoded JSON.

use serde::{Deserialize, Serialize};

use crate::config::PAYLOAD_VERSION;
use crate::core::profile::{Profile, DEFAULT_COLOR_HEX, DEFAULT_OUTLINE_COLOR_HEX};

/// Placeholder name for imported profiles without a usable name
pub const DEFAULT_IMPORTED_NAME: &str = "Imported Profile";

/// JSON kind expected for a payload field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Integer,
    Number,
    Bool,
    Text,
}

/// Canonical wire names of every payload field with its expected kind.
pub const FIELDS: &[(&str, FieldKind)] = &[
    ("version", FieldKind::Integer),
    ("name", FieldKind::Text),
    ("showLines", FieldKind::Bool),
    ("showCenterDot", FieldKind::Bool),
    ("tStyle", FieldKind::Bool),
    ("showOutline", FieldKind::Bool),
    ("lineLength", FieldKind::Number),
    ("lineThickness", FieldKind::Number),
    ("gap", FieldKind::Number),
    ("dotSize", FieldKind::Number),
    ("outlineThickness", FieldKind::Number),
    ("colorHex", FieldKind::Text),
    ("outlineColorHex", FieldKind::Text),
    ("opacity", FieldKind::Number),
    ("offsetX", FieldKind::Number),
    ("offsetY", FieldKind::Number),
    ("dynamicSpread", FieldKind::Number),
    ("keyPressSpreadEnabled", FieldKind::Bool),
    ("keyPressSpreadAmount", FieldKind::Number),
];

/// Flat, versioned payload carried inside a share token.
///
/// `version` is optional on the wire so that a missing version can be told
/// apart from an explicit one; it is always written on export. Unlike the
/// other fields, a missing `version` decodes as `None` rather than the
/// `Default` value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CodecPayload {
    #[serde(default)]
    pub version: Option<i64>,
    pub name: String,
    pub show_lines: bool,
    pub show_center_dot: bool,
    pub t_style: bool,
    pub show_outline: bool,
    pub line_length: f64,
    pub line_thickness: f64,
    pub gap: f64,
    pub dot_size: f64,
    pub outline_thickness: f64,
    pub color_hex: String,
    pub outline_color_hex: String,
    pub opacity: f64,
    pub offset_x: f64,
    pub offset_y: f64,
    pub dynamic_spread: f64,
    pub key_press_spread_enabled: bool,
    pub key_press_spread_amount: f64,
}

impl Default for CodecPayload {
    fn default() -> Self {
        Self {
            version: Some(PAYLOAD_VERSION),
            name: String::from(DEFAULT_IMPORTED_NAME),
            show_lines: true,
            show_center_dot: false,
            t_style: false,
            show_outline: true,
            line_length: 8.0,
            line_thickness: 2.0,
            gap: 4.0,
            dot_size: 2.0,
            outline_thickness: 1.0,
            color_hex: String::from(DEFAULT_COLOR_HEX),
            outline_color_hex: String::from(DEFAULT_OUTLINE_COLOR_HEX),
            opacity: 1.0,
            offset_x: 0.0,
            offset_y: 0.0,
            dynamic_spread: 0.0,
            key_press_spread_enabled: false,
            key_press_spread_amount: 3.0,
        }
    }
}

impl CodecPayload {
    /// Project a live profile onto the current payload version.
    pub fn from_profile(profile: &Profile) -> Self {
        Self {
            version: Some(PAYLOAD_VERSION),
            name: profile.name.clone(),
            show_lines: profile.show_lines,
            show_center_dot: profile.show_center_dot,
            t_style: profile.t_style,
            show_outline: profile.show_outline,
            line_length: profile.line_length,
            line_thickness: profile.line_thickness,
            gap: profile.gap,
            dot_size: profile.dot_size,
            outline_thickness: profile.outline_thickness,
            color_hex: profile.color_hex.clone(),
            outline_color_hex: profile.outline_color_hex.clone(),
            opacity: profile.opacity,
            offset_x: profile.offset_x,
            offset_y: profile.offset_y,
            dynamic_spread: profile.dynamic_spread,
            key_press_spread_enabled: profile.key_press_spread_enabled,
            key_press_spread_amount: profile.key_press_spread_amount,
        }
    }
}

impl From<&Profile> for CodecPayload {
    fn from(profile: &Profile) -> Self {
        Self::from_profile(profile)
    }
}
