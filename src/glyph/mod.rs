//! Glyph module: what goes into a cell.
//!
//! This module contains:
//! - [`Glyph`]: index into the glyph set (a CP437 code)
//! - [`cp437`]: glyph names and the CP437 to Unicode table
//! - [`BorderStyle`]: glyph sets for window frames
//! - [`GlyphAtlas`]: tile rectangles of a glyph sheet (tile backend)

mod atlas;
mod border;
pub mod cp437;

pub use atlas::{GlyphAtlas, GlyphSheet, TileInfo};
pub use border::{BorderGlyphs, BorderStyle};

/// Index of a glyph in the glyph set.
///
/// On the tile backend this is the tile number in the sheet; on the
/// terminal backend it is a CP437 code printed as its Unicode equivalent.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
pub struct Glyph(pub u16);

impl Glyph {
    /// The blank glyph.
    pub const SPACE: Self = Self(b' ' as u16);
    /// Substitute for characters outside the glyph set.
    pub const REPLACEMENT: Self = Self(b'?' as u16);

    /// Glyph for a character, falling back to `?` when CP437 has no match.
    #[inline]
    pub fn from_char(c: char) -> Self {
        cp437::from_char(c).unwrap_or(Self::REPLACEMENT)
    }
}

impl From<char> for Glyph {
    #[inline]
    fn from(c: char) -> Self {
        Self::from_char(c)
    }
}

impl From<u8> for Glyph {
    #[inline]
    fn from(code: u8) -> Self {
        Self(u16::from(code))
    }
}

impl From<u16> for Glyph {
    #[inline]
    fn from(index: u16) -> Self {
        Self(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glyph_from_char() {
        assert_eq!(Glyph::from('A'), Glyph(65));
        assert_eq!(Glyph::from('═'), cp437::HBAR_2);
        assert_eq!(Glyph::from('日'), Glyph::REPLACEMENT);
    }

    #[test]
    fn test_glyph_from_code() {
        assert_eq!(Glyph::from(219u8), cp437::BLOCK);
        assert_eq!(Glyph::from(300u16), Glyph(300));
    }
}
