//! Cell: The atomic unit of the logical framebuffer.
//!
//! # Memory Layout
//!
//! A cell is two `u16`s, so a full 80x24 grid fits in under 8 KB:
//!
//! ```text
//! ┌──────────────┬──────────────┐
//! │    glyph     │     attr     │
//! │  u16 index   │  u16 pair id │
//! └──────────────┴──────────────┘
//! ```

use crate::color::PairId;
use crate::glyph::Glyph;

/// A single framebuffer cell: which glyph, in which color pair.
#[repr(C)]
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    /// Glyph to draw.
    pub glyph: Glyph,
    /// Attribute handle (color pair) to draw it with.
    pub attr: PairId,
}

// Compile-time assertion: Cell must stay 4 bytes
const _: () = assert!(
    std::mem::size_of::<Cell>() == 4,
    "Cell must be exactly 4 bytes"
);

impl Default for Cell {
    fn default() -> Self {
        Self::BLANK
    }
}

impl Cell {
    /// A blank cell: space in the terminal's default colors.
    pub const BLANK: Self = Self {
        glyph: Glyph::SPACE,
        attr: PairId::DEFAULT,
    };

    /// Create a cell.
    #[inline]
    pub const fn new(glyph: Glyph, attr: PairId) -> Self {
        Self { glyph, attr }
    }

    /// Whether the cell is still at the cleared state.
    #[inline]
    pub fn is_blank(&self) -> bool {
        *self == Self::BLANK
    }

    /// Reset the cell to blank.
    #[inline]
    pub const fn reset(&mut self) {
        *self = Self::BLANK;
    }
}

impl std::fmt::Debug for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let shown = crate::glyph::cp437::to_char(self.glyph).unwrap_or('\u{fffd}');
        f.debug_struct("Cell")
            .field("glyph", &self.glyph.0)
            .field("char", &shown)
            .field("attr", &self.attr.0)
            .finish()
    }
}
