//! Configuration enum types.

use crate::draw::Color;
use log::warn;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Color specification - a palette name, a hex string, or RGB values.
///
/// # Examples
/// ```toml
/// # Palette name
/// default_background = "brown"
///
/// # Hex notation
/// default_pattern = "#c62828"
///
/// # RGB values (0-255 per component)
/// color = [249, 168, 37]
/// ```
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, JsonSchema)]
#[serde(untagged)]
pub enum ColorSpec {
    /// Palette name (brown, indigo, forest, charcoal, cream, red, saffron, sky, emerald)
    /// or `#rrggbb` / `#rgb` hex notation
    Name(String),
    /// RGB color as [red, green, blue] where each component is 0-255
    Rgb([u8; 3]),
}

impl ColorSpec {
    /// Converts the specification to a [`Color`], if it is valid.
    pub fn try_to_color(&self) -> Option<Color> {
        match self {
            ColorSpec::Name(name) => name.parse().ok(),
            ColorSpec::Rgb([r, g, b]) => Some(Color::from_rgb8(*r, *g, *b)),
        }
    }

    /// Converts the specification to a [`Color`], warning and using `fallback`
    /// when a name or hex string cannot be understood.
    pub fn to_color_or(&self, fallback: Color) -> Color {
        self.try_to_color().unwrap_or_else(|| {
            warn!("Unknown color {:?}, using {}", self, fallback);
            fallback
        })
    }
}

impl From<Color> for ColorSpec {
    fn from(color: Color) -> Self {
        ColorSpec::Name(color.to_hex())
    }
}
