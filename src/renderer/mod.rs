//! Renderer module: the drawing API and its two backends.
//!
//! Every draw call goes into an off-screen frame; nothing is visible until
//! [`Renderer::render`]. One frame is `clear`, any number of draws, `render`.
//!
//! This module contains:
//! - [`Renderer`]: the drawing contract
//! - [`CellRenderer`]: character cells through a [`CellSurface`](crate::terminal::CellSurface)
//! - [`TileRenderer`]: glyph tiles through a [`TileCanvas`](crate::tile::TileCanvas)
//! - [`Window`]: framed rectangle description

mod cell;
mod tile;
mod window;

pub use cell::{CellConfig, CellRenderer};
pub use tile::{TileConfig, TileRenderer};
pub use window::Window;

use crate::color::ColorSpec;
use crate::error::Result;
use crate::geometry::{align_origin, Align};
use crate::glyph::Glyph;

/// Drawing operations shared by both backends.
///
/// Coordinates are in cells. Draws outside the grid are dropped without an
/// error. `bg = None` draws with a transparent background.
pub trait Renderer {
    /// Grid size in cells.
    fn grid_size(&self) -> (u16, u16);

    /// Blank the off-screen frame.
    fn clear(&mut self) -> Result<()>;

    /// Draw one glyph at cell (x, y).
    fn draw_glyph(&mut self, x: i32, y: i32, glyph: Glyph, fg: ColorSpec, bg: Option<ColorSpec>) -> Result<()>;

    /// Draw `text` on row `y`, aligned relative to column `x`.
    fn draw_text(
        &mut self,
        x: i32,
        y: i32,
        text: &str,
        align: Align,
        fg: ColorSpec,
        bg: Option<ColorSpec>,
    ) -> Result<()> {
        let start = align_origin(x, align, text.chars().count());
        for (column, c) in positions(start, 1, text) {
            self.draw_glyph(column, y, Glyph::from_char(c), fg, bg)?;
        }
        Ok(())
    }

    /// Draw a framed, filled window with an optional header.
    fn draw_window(&mut self, window: &Window<'_>) -> Result<()>;

    /// Show the off-screen frame.
    fn render(&mut self) -> Result<()>;
}

/// Each char of `text` with its coordinate, `step` apart from `start`.
///
/// Stops at the first coordinate past the `i32` range; nothing there can be
/// on a grid.
pub(crate) fn positions(start: i32, step: i32, text: &str) -> impl Iterator<Item = (i32, char)> + '_ {
    (0..=i32::MAX)
        .zip(text.chars())
        .map_while(move |(i, c)| i.checked_mul(step).and_then(|offset| start.checked_add(offset)).map(|at| (at, c)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positions_step_from_start() {
        let placed: Vec<(i32, char)> = positions(3, 8, "abc").collect();
        assert_eq!(placed, vec![(3, 'a'), (11, 'b'), (19, 'c')]);
    }

    #[test]
    fn test_positions_stop_at_range_end() {
        let placed: Vec<(i32, char)> = positions(i32::MAX - 1, 1, "abcd").collect();
        assert_eq!(placed, vec![(i32::MAX - 1, 'a'), (i32::MAX, 'b')]);
        assert_eq!(positions(i32::MAX, 4, "xy").count(), 1);
    }
}
