//! Crosshair profile schema and preset factory.
//!
//! A [`Profile`] is the trusted, live configuration handed to the renderer.
//! Profiles built from untrusted data must come out of
//! [`crate::protocol::sanitize::sanitize`]; the struct itself performs no
//! validation.

use serde::{Deserialize, Serialize};

/// Legal range of `line_length`
pub const LINE_LENGTH_RANGE: (f64, f64) = (0.0, 30.0);
/// Legal range of `line_thickness`
pub const LINE_THICKNESS_RANGE: (f64, f64) = (0.5, 8.0);
/// Legal range of `gap`; negative values let the lines overlap the center
pub const GAP_RANGE: (f64, f64) = (-10.0, 25.0);
/// Legal range of `dot_size`
pub const DOT_SIZE_RANGE: (f64, f64) = (0.0, 12.0);
/// Legal range of `outline_thickness`
pub const OUTLINE_THICKNESS_RANGE: (f64, f64) = (0.0, 5.0);
/// Legal range of `opacity`
pub const OPACITY_RANGE: (f64, f64) = (0.1, 1.0);
/// Legal range of `offset_x` and `offset_y`
pub const OFFSET_RANGE: (f64, f64) = (-120.0, 120.0);
/// Legal range of `dynamic_spread`
pub const DYNAMIC_SPREAD_RANGE: (f64, f64) = (0.0, 20.0);
/// Legal range of `key_press_spread_amount`
pub const KEY_PRESS_SPREAD_RANGE: (f64, f64) = (0.0, 20.0);

/// Default main color
pub const DEFAULT_COLOR_HEX: &str = "#00FF66";
/// Default outline color
pub const DEFAULT_OUTLINE_COLOR_HEX: &str = "#000000";

/// A complete crosshair configuration. Geometry is in logical pixels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,

    pub show_lines: bool,
    pub show_center_dot: bool,
    /// T-shaped crosshair: the top line is not drawn
    pub t_style: bool,
    pub show_outline: bool,

    pub line_length: f64,
    pub line_thickness: f64,
    pub gap: f64,
    pub dot_size: f64,
    pub outline_thickness: f64,

    /// `#RRGGBB`, uppercase once sanitized
    pub color_hex: String,
    pub outline_color_hex: String,
    pub opacity: f64,

    pub offset_x: f64,
    pub offset_y: f64,
    pub dynamic_spread: f64,

    pub key_press_spread_enabled: bool,
    pub key_press_spread_amount: f64,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            name: String::from("Default"),
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

impl Profile {
    /// Classic green four-line crosshair.
    pub fn cs_classic() -> Self {
        Self {
            name: String::from("CS Classic Green"),
            outline_thickness: 1.1,
            ..Self::default()
        }
    }

    /// Cyan crosshair with a center dot.
    pub fn valorant_cyan() -> Self {
        Self {
            name: String::from("Valorant Cyan"),
            show_center_dot: true,
            line_length: 7.0,
            gap: 3.0,
            color_hex: String::from("#00FFFF"),
            opacity: 0.95,
            ..Self::default()
        }
    }

    /// White center dot only.
    pub fn minimal_dot() -> Self {
        Self {
            name: String::from("Minimal Dot"),
            show_lines: false,
            show_center_dot: true,
            line_length: 5.0,
            gap: 3.0,
            dot_size: 3.0,
            color_hex: String::from("#FFFFFF"),
            ..Self::default()
        }
    }

    /// Distance from the center to the inner end of each line, given a
    /// transient extra spread. Negative extra spread is ignored.
    pub fn effective_gap(&self, extra_spread: f64) -> f64 {
        self.gap + self.dynamic_spread + extra_spread.max(0.0)
    }

    /// Extra spread to apply while a key is held, or zero when disabled.
    pub fn key_press_spread(&self) -> f64 {
        if self.key_press_spread_enabled {
            self.key_press_spread_amount
        } else {
            0.0
        }
    }
}

/// The built-in preset pack, in display order.
pub fn presets() -> Vec<Profile> {
    vec![
        Profile::cs_classic(),
        Profile::valorant_cyan(),
        Profile::minimal_dot(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn in_range(value: f64, range: (f64, f64)) -> bool {
        value >= range.0 && value <= range.1
    }

    #[test]
    fn test_presets_are_within_legal_ranges() {
        for p in presets() {
            assert!(in_range(p.line_length, LINE_LENGTH_RANGE), "{}", p.name);
            assert!(in_range(p.line_thickness, LINE_THICKNESS_RANGE), "{}", p.name);
            assert!(in_range(p.gap, GAP_RANGE), "{}", p.name);
            assert!(in_range(p.dot_size, DOT_SIZE_RANGE), "{}", p.name);
            assert!(in_range(p.outline_thickness, OUTLINE_THICKNESS_RANGE), "{}", p.name);
            assert!(in_range(p.opacity, OPACITY_RANGE), "{}", p.name);
            assert!(in_range(p.offset_x, OFFSET_RANGE), "{}", p.name);
            assert!(in_range(p.offset_y, OFFSET_RANGE), "{}", p.name);
            assert!(in_range(p.dynamic_spread, DYNAMIC_SPREAD_RANGE), "{}", p.name);
            assert!(in_range(p.key_press_spread_amount, KEY_PRESS_SPREAD_RANGE), "{}", p.name);
        }
    }

    #[test]
    fn test_cs_classic_values() {
        let p = Profile::cs_classic();
        assert_eq!(p.name, "CS Classic Green");
        assert_eq!(p.color_hex, "#00FF66");
        assert_eq!(p.line_length, 8.0);
        assert_eq!(p.gap, 4.0);
        assert_eq!(p.opacity, 1.0);
        assert!(p.show_lines);
        assert!(!p.show_center_dot);
    }

    #[test]
    fn test_effective_gap_ignores_negative_spread() {
        let mut p = Profile::default();
        p.dynamic_spread = 2.0;
        assert_eq!(p.effective_gap(-5.0), 6.0);
        assert_eq!(p.effective_gap(1.5), 7.5);
    }

    #[test]
    fn test_key_press_spread_toggle() {
        let mut p = Profile::default();
        assert_eq!(p.key_press_spread(), 0.0);
        p.key_press_spread_enabled = true;
        assert_eq!(p.key_press_spread(), 3.0);
    }
}
