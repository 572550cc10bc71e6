//! Framebuffer: A grid of cells accumulating one frame.
//!
//! One contiguous allocation, sized once at construction.
//! Cells are stored in row-major order.

use super::cell::Cell;
use crate::glyph::Glyph;

/// A grid of cells representing the logical screen.
///
/// Stores cells in a contiguous `Vec`, row-major: `index = y * width + x`.
/// Dimensions are fixed at construction.
///
/// Coordinates are signed so callers can draw partly off-grid shapes
/// without clamping; anything outside `[0, width) x [0, height)` is dropped.
#[derive(Clone, PartialEq, Eq)]
pub struct Framebuffer {
    /// Contiguous cell storage (row-major order).
    cells: Vec<Cell>,
    /// Width in columns.
    width: u16,
    /// Height in rows.
    height: u16,
}

impl Framebuffer {
    /// Create a new framebuffer with the given dimensions.
    ///
    /// All cells are initialized to blank.
    ///
    /// # Panics
    /// Panics if width or height is 0.
    pub fn new(width: u16, height: u16) -> Self {
        assert!(width > 0 && height > 0, "Framebuffer dimensions must be non-zero");
        let size = (width as usize) * (height as usize);
        Self {
            cells: vec![Cell::BLANK; size],
            width,
            height,
        }
    }

    /// Width in cells.
    #[inline]
    pub const fn width(&self) -> u16 {
        self.width
    }

    /// Height in cells.
    #[inline]
    pub const fn height(&self) -> u16 {
        self.height
    }

    /// Number of cells in the grid.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Check if the buffer is empty (never true after construction).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// All cells, row-major.
    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Convert (x, y) coordinates to a linear index.
    ///
    /// Returns `None` if coordinates are out of bounds.
    #[inline]
    pub fn index_of(&self, x: i32, y: i32) -> Option<usize> {
        let x = u16::try_from(x).ok()?;
        let y = u16::try_from(y).ok()?;
        if x < self.width && y < self.height {
            Some((y as usize) * (self.width as usize) + (x as usize))
        } else {
            None
        }
    }

    /// Convert a linear index to (x, y) coordinates.
    #[inline]
    pub fn coords_of(&self, index: usize) -> Option<(u16, u16)> {
        if index < self.cells.len() {
            let x = (index % (self.width as usize)) as u16;
            let y = (index / (self.width as usize)) as u16;
            Some((x, y))
        } else {
            None
        }
    }

    /// Get a reference to a cell at (x, y).
    ///
    /// Returns `None` if coordinates are out of bounds.
    #[inline]
    pub fn get(&self, x: i32, y: i32) -> Option<&Cell> {
        self.index_of(x, y).map(|i| &self.cells[i])
    }

    /// Glyph at (x, y), if in bounds.
    #[inline]
    pub fn glyph_at(&self, x: i32, y: i32) -> Option<Glyph> {
        self.get(x, y).map(|cell| cell.glyph)
    }

    /// Write a cell at (x, y).
    ///
    /// Out-of-bounds writes are dropped and return `false`; no other cell
    /// is touched.
    #[inline]
    pub fn write(&mut self, x: i32, y: i32, cell: Cell) -> bool {
        if let Some(idx) = self.index_of(x, y) {
            self.cells[idx] = cell;
            true
        } else {
            false
        }
    }

    /// Clear the entire buffer (fill with blank cells).
    pub fn clear(&mut self) {
        self.fill(Cell::BLANK);
    }

    /// Set every cell to `cell`.
    pub fn fill(&mut self, cell: Cell) {
        self.cells.fill(cell);
    }

    /// Whether every cell is blank.
    pub fn is_blank(&self) -> bool {
        self.cells.iter().all(Cell::is_blank)
    }

    /// Rows top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.width as usize)
    }

    /// Every cell with its coordinates, in row-major order.
    pub fn positioned(&self) -> impl Iterator<Item = (u16, u16, Cell)> + '_ {
        self.rows().enumerate().flat_map(|(y, row)| {
            row.iter()
                .enumerate()
                .map(move |(x, cell)| (x as u16, y as u16, *cell))
        })
    }

    /// Approximate heap plus inline size in bytes.
    pub fn memory_usage(&self) -> usize {
        self.cells.len() * std::mem::size_of::<Cell>() + std::mem::size_of::<Self>()
    }
}

impl std::fmt::Debug for Framebuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Framebuffer")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("memory_bytes", &self.memory_usage())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::PairId;

    fn x_cell() -> Cell {
        Cell::new(Glyph::from('X'), PairId(1))
    }

    #[test]
    fn test_buffer_new() {
        let buffer = Framebuffer::new(80, 24);
        assert_eq!(buffer.width(), 80);
        assert_eq!(buffer.height(), 24);
        assert_eq!(buffer.len(), 80 * 24);
        assert!(buffer.is_blank());
    }

    #[test]
    #[should_panic]
    fn test_buffer_zero_width() {
        Framebuffer::new(0, 24);
    }

    #[test]
    fn test_buffer_get_write() {
        let mut buffer = Framebuffer::new(80, 24);
        assert!(buffer.write(5, 10, x_cell()));
        assert_eq!(buffer.glyph_at(5, 10), Some(Glyph::from('X')));
        assert_eq!(buffer.get(5, 10).unwrap().attr, PairId(1));
    }

    #[test]
    fn test_buffer_bounds() {
        let buffer = Framebuffer::new(80, 24);
        assert!(buffer.get(79, 23).is_some());
        assert!(buffer.get(80, 23).is_none());
        assert!(buffer.get(79, 24).is_none());
        assert!(buffer.get(-1, 0).is_none());
        assert!(buffer.get(0, -1).is_none());
    }

    #[test]
    fn test_out_of_bounds_writes_change_nothing() {
        let mut buffer = Framebuffer::new(10, 5);
        buffer.write(3, 3, x_cell());
        let before = buffer.clone();

        for (x, y) in [(-1, 0), (0, -1), (10, 0), (0, 5), (i32::MAX, 2), (i32::MIN, i32::MIN), (70_000, 1)] {
            assert!(!buffer.write(x, y, Cell::new(Glyph::from('!'), PairId(9))));
        }

        assert_eq!(buffer, before);
    }

    #[test]
    fn test_buffer_index_coords() {
        let buffer = Framebuffer::new(80, 24);
        assert_eq!(buffer.index_of(5, 10), Some(10 * 80 + 5));
        assert_eq!(buffer.coords_of(10 * 80 + 5), Some((5, 10)));
        assert_eq!(buffer.coords_of(80 * 24), None);
    }

    #[test]
    fn test_buffer_clear() {
        let mut buffer = Framebuffer::new(80, 24);
        buffer.write(5, 5, x_cell());
        buffer.clear();
        assert_eq!(buffer.get(5, 5), Some(&Cell::BLANK));
        assert!(buffer.is_blank());
    }

    #[test]
    fn test_positioned_cells_row_major() {
        let mut buffer = Framebuffer::new(3, 2);
        buffer.write(2, 0, x_cell());
        buffer.write(0, 1, x_cell());

        let cells: Vec<(u16, u16, Cell)> = buffer.positioned().collect();
        assert_eq!(cells.len(), 6);
        assert_eq!(cells[2], (2, 0, x_cell()));
        assert_eq!(cells[3], (0, 1, x_cell()));
        assert_eq!(cells[4], (1, 1, Cell::BLANK));
    }

    #[test]
    fn test_buffer_fill() {
        let mut buffer = Framebuffer::new(4, 2);
        buffer.fill(x_cell());
        assert!(buffer.cells().iter().all(|cell| *cell == x_cell()));
        assert!(!buffer.is_blank());
    }

    #[test]
    fn test_buffer_memory_usage() {
        let buffer = Framebuffer::new(200, 50);
        let usage = buffer.memory_usage();
        assert!(usage >= 40_000);
        assert!(usage < 41_000);
    }
}
