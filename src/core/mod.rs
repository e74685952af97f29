//! # Core Schema
//!
//! Profile data model and its wire projection.
//!
//! ## Components
//! - **Profile**: live, trusted crosshair configuration and preset factory
//! - **Payload**: flat, versioned wire record with documented defaults
//! - **Serialization**: JSON encode and lenient, case-insensitive decode
//!
//! ## Wire Shape
//! ```text
//! {version, name, showLines, showCenterDot, tStyle, showOutline,
//!  lineLength, lineThickness, gap, dotSize, outlineThickness,
//!  colorHex, outlineColorHex, opacity, offsetX, offsetY,
//!  dynamicSpread, keyPressSpreadEnabled, keyPressSpreadAmount}
//! ```

pub mod payload;
pub mod profile;
pub mod serialization;
