//! 24-bit RGB colors.

use std::fmt;
use std::str::FromStr;

use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// Error returned when a hex color string cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseColorError {
    /// The string is not 3 or 6 hex digits (after an optional `#`).
    #[error("expected #rgb or #rrggbb, got {0:?}")]
    InvalidLength(String),
    /// A character is not a hex digit.
    #[error("invalid hex digit in {0:?}")]
    InvalidDigit(String),
}

/// A 24-bit RGB color.
///
/// Serialized as a `#rrggbb` string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Create a color from its channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a color from a packed `0xRRGGBB` value.
    pub const fn from_u32(packed: u32) -> Self {
        Self {
            r: ((packed >> 16) & 0xff) as u8,
            g: ((packed >> 8) & 0xff) as u8,
            b: (packed & 0xff) as u8,
        }
    }

    /// Component-wise linear interpolation from `self` to `other`.
    ///
    /// `t` is clamped to `0.0..=1.0` (NaN counts as 0) and each channel is
    /// rounded to the nearest integer.
    pub fn lerp(self, other: Rgb, t: f32) -> Rgb {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        let mix = |a: u8, b: u8| -> u8 {
            let a = a as f32;
            let b = b as f32;
            (a + (b - a) * t).round() as u8
        };
        Rgb {
            r: mix(self.r, other.r),
            g: mix(self.g, other.g),
            b: mix(self.b, other.b),
        }
    }

    /// Format as a lowercase `#rrggbb` string.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.trim().trim_start_matches('#');
        if digits.len() != 3 && digits.len() != 6 {
            return Err(ParseColorError::InvalidLength(s.to_string()));
        }
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ParseColorError::InvalidDigit(s.to_string()));
        }

        let value = u32::from_str_radix(digits, 16)
            .map_err(|_| ParseColorError::InvalidDigit(s.to_string()))?;

        let packed = if digits.len() == 3 {
            // #rgb shorthand: each nibble is doubled
            let r = (value >> 8) & 0xf;
            let g = (value >> 4) & 0xf;
            let b = value & 0xf;
            ((r * 0x11) << 16) | ((g * 0x11) << 8) | (b * 0x11)
        } else {
            value
        };

        Ok(Rgb::from_u32(packed))
    }
}

impl TryFrom<String> for Rgb {
    type Error = ParseColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Rgb> for String {
    fn from(color: Rgb) -> Self {
        color.to_hex()
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl From<Rgb> for Color {
    fn from(color: Rgb) -> Self {
        Color::Rgb(color.r, color.g, color.b)
    }
}
