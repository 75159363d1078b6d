//! RGBA color type, hex parsing, and the felt palette.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Represents an RGBA color with floating-point components.
///
/// All components are in the range 0.0 (minimum) to 1.0 (maximum).
///
/// # Examples
///
/// ```
/// use shyrdak::draw::Color;
/// let red: Color = "#c62828".parse().unwrap();
/// assert_eq!(red.to_hex(), "#c62828");
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    /// Red component (0.0 = no red, 1.0 = full red)
    pub r: f64,
    /// Green component (0.0 = no green, 1.0 = full green)
    pub g: f64,
    /// Blue component (0.0 = no blue, 1.0 = full blue)
    pub b: f64,
    /// Alpha/transparency (0.0 = fully transparent, 1.0 = fully opaque)
    pub a: f64,
}

/// Errors produced when a color string cannot be understood.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ColorParseError {
    #[error("color '{0}' must start with '#'")]
    MissingHash(String),
    #[error("color '{0}' must have 3 or 6 hex digits")]
    BadLength(String),
    #[error("color '{0}' contains a non-hex digit")]
    BadDigit(String),
    #[error("unknown color name '{0}'")]
    UnknownName(String),
}

impl Color {
    /// Creates a new color from RGBA components.
    pub const fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Creates an opaque color from 8-bit channels.
    pub const fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f64 / 255.0,
            g: g as f64 / 255.0,
            b: b as f64 / 255.0,
            a: 1.0,
        }
    }

    /// Parses `#rrggbb` or `#rgb` notation.
    pub fn from_hex(input: &str) -> Result<Self, ColorParseError> {
        let trimmed = input.trim();
        let digits = trimmed
            .strip_prefix('#')
            .ok_or_else(|| ColorParseError::MissingHash(input.to_string()))?;

        let channel = |s: &str| {
            u8::from_str_radix(s, 16).map_err(|_| ColorParseError::BadDigit(input.to_string()))
        };

        // from_str_radix tolerates a leading '+', so vet every digit first.
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorParseError::BadDigit(input.to_string()));
        }

        match digits.len() {
            6 => Ok(Self::from_rgb8(
                channel(&digits[0..2])?,
                channel(&digits[2..4])?,
                channel(&digits[4..6])?,
            )),
            3 => {
                // #abc expands to #aabbcc
                let r = channel(&digits[0..1])?;
                let g = channel(&digits[1..2])?;
                let b = channel(&digits[2..3])?;
                Ok(Self::from_rgb8(r * 17, g * 17, b * 17))
            }
            _ => Err(ColorParseError::BadLength(input.to_string())),
        }
    }

    /// Formats the color as `#rrggbb` (alpha is dropped).
    pub fn to_hex(&self) -> String {
        let to_byte = |v: f64| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        format!(
            "#{:02x}{:02x}{:02x}",
            to_byte(self.r),
            to_byte(self.g),
            to_byte(self.b)
        )
    }

    /// Returns true when both colors agree to 8-bit precision.
    pub fn approx_eq(&self, other: &Color) -> bool {
        let close = |a: f64, b: f64| (a - b).abs() < 0.5 / 255.0;
        close(self.r, other.r)
            && close(self.g, other.g)
            && close(self.b, other.b)
            && close(self.a, other.a)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match palette_name(self) {
            Some(name) => write!(f, "{name}"),
            None => write!(f, "{}", self.to_hex()),
        }
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    /// Accepts hex notation or one of the palette names below.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim_start().starts_with('#') {
            return Self::from_hex(s);
        }
        name_to_color(s).ok_or_else(|| ColorParseError::UnknownName(s.to_string()))
    }
}

// ============================================================================
// Felt palette
// ============================================================================

/// Dark walnut felt, the traditional ground color.
pub const FELT_BROWN: Color = Color::from_rgb8(0x3e, 0x27, 0x23);
/// Deep indigo ground.
pub const FELT_INDIGO: Color = Color::from_rgb8(0x1a, 0x23, 0x7e);
/// Forest green ground.
pub const FELT_FOREST: Color = Color::from_rgb8(0x1b, 0x5e, 0x20);
/// Charcoal ground.
pub const FELT_CHARCOAL: Color = Color::from_rgb8(0x21, 0x21, 0x21);
/// Undyed wool.
pub const FELT_CREAM: Color = Color::from_rgb8(0xf5, 0xf0, 0xe1);
/// Madder red, the default pattern color.
pub const FELT_RED: Color = Color::from_rgb8(0xc6, 0x28, 0x28);
/// Saffron yellow.
pub const FELT_SAFFRON: Color = Color::from_rgb8(0xf9, 0xa8, 0x25);
/// Sky blue.
pub const FELT_SKY: Color = Color::from_rgb8(0x15, 0x65, 0xc0);
/// Emerald green.
pub const FELT_EMERALD: Color = Color::from_rgb8(0x2e, 0x7d, 0x32);

const NAMED: [(&str, Color); 9] = [
    ("brown", FELT_BROWN),
    ("indigo", FELT_INDIGO),
    ("forest", FELT_FOREST),
    ("charcoal", FELT_CHARCOAL),
    ("cream", FELT_CREAM),
    ("red", FELT_RED),
    ("saffron", FELT_SAFFRON),
    ("sky", FELT_SKY),
    ("emerald", FELT_EMERALD),
];

/// Default background swatches, in toolbar order.
pub const BACKGROUND_SWATCHES: [Color; 5] =
    [FELT_BROWN, FELT_INDIGO, FELT_FOREST, FELT_CHARCOAL, FELT_CREAM];

/// Default pattern swatches, in toolbar order.
pub const PATTERN_SWATCHES: [Color; 5] =
    [FELT_RED, FELT_SAFFRON, FELT_CREAM, FELT_SKY, FELT_EMERALD];

/// Maps palette names (case-insensitive) to colors.
pub fn name_to_color(name: &str) -> Option<Color> {
    let wanted = name.trim().to_lowercase();
    NAMED
        .iter()
        .find(|(candidate, _)| *candidate == wanted)
        .map(|(_, color)| *color)
}

/// Maps a color back to its palette name, if it is one of the named felts.
pub fn palette_name(color: &Color) -> Option<&'static str> {
    NAMED
        .iter()
        .find(|(_, candidate)| candidate.approx_eq(color))
        .map(|(name, _)| *name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_long_and_short_hex() {
        assert_eq!(Color::from_hex("#3e2723").unwrap(), FELT_BROWN);
        let short = Color::from_hex("#fff").unwrap();
        assert_eq!(short, Color::new(1.0, 1.0, 1.0, 1.0));
    }

    #[test]
    fn rejects_malformed_hex() {
        assert_eq!(
            Color::from_hex("3e2723"),
            Err(ColorParseError::MissingHash("3e2723".into()))
        );
        assert_eq!(
            Color::from_hex("#3e27"),
            Err(ColorParseError::BadLength("#3e27".into()))
        );
        assert_eq!(
            Color::from_hex("#3g2723"),
            Err(ColorParseError::BadDigit("#3g2723".into()))
        );
        assert_eq!(
            Color::from_hex("#+f+f+f"),
            Err(ColorParseError::BadDigit("#+f+f+f".into()))
        );
        assert_eq!(
            Color::from_hex("#+ff"),
            Err(ColorParseError::BadDigit("#+ff".into()))
        );
    }

    #[test]
    fn from_str_accepts_names_and_hex() {
        assert_eq!("Saffron".parse::<Color>().unwrap(), FELT_SAFFRON);
        assert_eq!("#c62828".parse::<Color>().unwrap(), FELT_RED);
        assert!(matches!(
            "chartreuse".parse::<Color>(),
            Err(ColorParseError::UnknownName(_))
        ));
    }

    #[test]
    fn display_prefers_palette_name() {
        assert_eq!(FELT_INDIGO.to_string(), "indigo");
        assert_eq!(Color::from_rgb8(1, 2, 3).to_string(), "#010203");
    }
}
