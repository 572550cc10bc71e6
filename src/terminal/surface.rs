//! `CellSurface`: what the cell backend needs from a character terminal.

use crate::color::{PairId, Palette};
use crate::error::Result;
use crate::glyph::Glyph;

/// A character-cell presentation surface with a programmable palette.
///
/// Nothing written through `put` may become visible before `present`.
pub trait CellSurface: Palette {
    /// Size in cells as `(columns, rows)`.
    fn size(&self) -> (u16, u16);

    /// Start a frame: the pending image becomes entirely blank.
    fn begin_frame(&mut self) -> Result<()>;

    /// Write one cell of the pending image.
    fn put(&mut self, x: u16, y: u16, glyph: Glyph, pair: PairId) -> Result<()>;

    /// Make the pending image visible in one step.
    fn present(&mut self) -> Result<()>;
}
