//! `ColorSpec`: a 24-bit color as it crosses the API boundary.

use crate::error::RenderError;
use std::str::FromStr;

/// True-color RGB value, written by callers as `#RRGGBB`.
///
/// Two specs are the same color only if every channel matches; the registry
/// never merges "close" colors.
#[derive(Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct ColorSpec {
    /// Red channel (0-255)
    pub r: u8,
    /// Green channel (0-255)
    pub g: u8,
    /// Blue channel (0-255)
    pub b: u8,
}

impl ColorSpec {
    /// Create a new color.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Black (`#000000`)
    pub const BLACK: Self = Self::new(0, 0, 0);
    /// Red (`#FF0000`)
    pub const RED: Self = Self::new(255, 0, 0);
    /// Green (`#00FF00`)
    pub const GREEN: Self = Self::new(0, 255, 0);
    /// Yellow (`#FFFF00`)
    pub const YELLOW: Self = Self::new(255, 255, 0);
    /// Blue (`#0000FF`)
    pub const BLUE: Self = Self::new(0, 0, 255);
    /// Magenta (`#FF00FF`)
    pub const MAGENTA: Self = Self::new(255, 0, 255);
    /// Cyan (`#00FFFF`)
    pub const CYAN: Self = Self::new(0, 255, 255);
    /// White (`#FFFFFF`)
    pub const WHITE: Self = Self::new(255, 255, 255);

    /// Create from a 24-bit hex value (e.g., 0xFF5500).
    #[inline]
    pub const fn from_u32(hex: u32) -> Self {
        Self::new(
            ((hex >> 16) & 0xFF) as u8,
            ((hex >> 8) & 0xFF) as u8,
            (hex & 0xFF) as u8,
        )
    }

    /// Parse the `#RRGGBB` encoding.
    ///
    /// The string must be exactly seven characters: a `#` and six hex digits
    /// in either case. Anything else is rejected whole.
    pub fn parse(s: &str) -> Result<Self, RenderError> {
        let malformed = || RenderError::MalformedColor(s.to_string());

        let bytes = s.as_bytes();
        if bytes.len() != 7 || bytes[0] != b'#' {
            return Err(malformed());
        }

        let channel = |i: usize| -> Result<u8, RenderError> {
            let hi = hex_digit(bytes[i]).ok_or_else(malformed)?;
            let lo = hex_digit(bytes[i + 1]).ok_or_else(malformed)?;
            Ok((hi << 4) | lo)
        };

        Ok(Self::new(channel(1)?, channel(3)?, channel(5)?))
    }

    /// Channels rescaled to the 0-1000 range used by palette hardware.
    #[inline]
    pub const fn scaled(self) -> ScaledColor {
        ScaledColor {
            r: scale_channel(self.r),
            g: scale_channel(self.g),
            b: scale_channel(self.b),
        }
    }
}

/// A color in the 0-1000 per-channel range of terminal palette slots.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Hash)]
pub struct ScaledColor {
    /// Red channel (0-1000)
    pub r: u16,
    /// Green channel (0-1000)
    pub g: u16,
    /// Blue channel (0-1000)
    pub b: u16,
}

/// `round(value / 255 * 1000)` in integer arithmetic.
#[inline]
const fn scale_channel(value: u8) -> u16 {
    ((value as u32 * 1000 + 127) / 255) as u16
}

#[inline]
const fn hex_digit(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

impl std::fmt::Debug for ColorSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl std::fmt::Display for ColorSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Debug::fmt(self, f)
    }
}

impl FromStr for ColorSpec {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for ColorSpec {
    type Error = RenderError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

impl From<(u8, u8, u8)> for ColorSpec {
    #[inline]
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}

impl From<u32> for ColorSpec {
    /// Convert from a 24-bit hex value (e.g., 0xFF5500)
    #[inline]
    fn from(hex: u32) -> Self {
        Self::from_u32(hex)
    }
}
