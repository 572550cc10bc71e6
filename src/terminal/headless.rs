//! `HeadlessSurface`: an in-memory terminal.
//!
//! Keeps a pending and a visible grid plus the palette and pair tables, so
//! the whole output of the cell backend can be inspected without a tty.

use super::surface::CellSurface;
use crate::buffer::Cell;
use crate::color::{PairId, Palette, ScaledColor, SlotId};
use crate::error::{RenderError, Result};
use crate::glyph::{cp437, Glyph};
use std::collections::BTreeMap;

/// In-memory character terminal.
#[derive(Debug, Clone)]
pub struct HeadlessSurface {
    width: u16,
    height: u16,
    pending: Vec<Cell>,
    visible: Vec<Cell>,
    colors: BTreeMap<SlotId, ScaledColor>,
    pairs: BTreeMap<PairId, (SlotId, SlotId)>,
    presents: u64,
    puts: usize,
}

impl HeadlessSurface {
    /// Create a blank `width` x `height` terminal.
    pub fn new(width: u16, height: u16) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(RenderError::Config(format!(
                "terminal size {width}x{height} has no cells"
            )));
        }
        let size = usize::from(width) * usize::from(height);
        Ok(Self {
            width,
            height,
            pending: vec![Cell::BLANK; size],
            visible: vec![Cell::BLANK; size],
            colors: BTreeMap::new(),
            pairs: BTreeMap::new(),
            presents: 0,
            puts: 0,
        })
    }

    fn index_of(&self, x: u16, y: u16) -> Option<usize> {
        (x < self.width && y < self.height)
            .then(|| usize::from(y) * usize::from(self.width) + usize::from(x))
    }

    /// Visible cell at (x, y).
    pub fn visible(&self, x: u16, y: u16) -> Option<Cell> {
        self.index_of(x, y).map(|i| self.visible[i])
    }

    /// Visible row `y` as text, glyphs rendered through CP437.
    pub fn row_text(&self, y: u16) -> String {
        (0..self.width)
            .filter_map(|x| self.visible(x, y))
            .map(|cell| cp437::to_char(cell.glyph).unwrap_or('?'))
            .collect()
    }

    /// Whether every visible cell is blank.
    pub fn is_blank(&self) -> bool {
        self.visible.iter().all(Cell::is_blank)
    }

    /// Color programmed into `slot`.
    pub fn color(&self, slot: SlotId) -> Option<ScaledColor> {
        self.colors.get(&slot).copied()
    }

    /// Slots programmed for `pair`.
    pub fn pair(&self, pair: PairId) -> Option<(SlotId, SlotId)> {
        self.pairs.get(&pair).copied()
    }

    /// Number of color slots programmed so far.
    pub fn color_count(&self) -> usize {
        self.colors.len()
    }

    /// Number of frames presented.
    pub const fn present_count(&self) -> u64 {
        self.presents
    }

    /// Number of `put` calls in the last frame.
    pub const fn last_frame_puts(&self) -> usize {
        self.puts
    }
}

impl Palette for HeadlessSurface {
    fn define_color(&mut self, slot: SlotId, color: ScaledColor) -> Result<()> {
        self.colors.insert(slot, color);
        Ok(())
    }

    fn define_pair(&mut self, pair: PairId, fg: SlotId, bg: SlotId) -> Result<()> {
        self.pairs.insert(pair, (fg, bg));
        Ok(())
    }
}

impl CellSurface for HeadlessSurface {
    fn size(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    fn begin_frame(&mut self) -> Result<()> {
        self.pending.fill(Cell::BLANK);
        self.puts = 0;
        Ok(())
    }

    fn put(&mut self, x: u16, y: u16, glyph: Glyph, pair: PairId) -> Result<()> {
        if let Some(i) = self.index_of(x, y) {
            self.pending[i] = Cell::new(glyph, pair);
            self.puts += 1;
        }
        Ok(())
    }

    fn present(&mut self) -> Result<()> {
        self.visible.copy_from_slice(&self.pending);
        self.presents += 1;
        Ok(())
    }
}
