//! Window: a framed, filled rectangle with an optional centered header.

use super::Renderer;
use crate::color::ColorSpec;
use crate::error::Result;
use crate::geometry::{perimeter, Position};
use crate::glyph::{BorderStyle, Glyph};

/// Description of a window to draw.
///
/// `size` is the offset from `origin` to the opposite corner, so the frame
/// covers columns `origin.x ..= origin.x + size.x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window<'a> {
    /// Top-left corner.
    pub origin: Position,
    /// Offset to the bottom-right corner.
    pub size: Position,
    /// Header text; empty for none.
    pub header: &'a str,
    /// Header foreground.
    pub header_fg: ColorSpec,
    /// Header background.
    pub header_bg: ColorSpec,
    /// Border foreground.
    pub border_fg: ColorSpec,
    /// Border background.
    pub border_bg: ColorSpec,
    /// Interior fill.
    pub background: ColorSpec,
    /// Frame glyph set.
    pub style: BorderStyle,
}

impl<'a> Window<'a> {
    /// White-on-black window with a double frame.
    pub const fn new(origin: Position, size: Position, header: &'a str) -> Self {
        Self {
            origin,
            size,
            header,
            header_fg: ColorSpec::WHITE,
            header_bg: ColorSpec::BLACK,
            border_fg: ColorSpec::WHITE,
            border_bg: ColorSpec::BLACK,
            background: ColorSpec::BLACK,
            style: BorderStyle::Double,
        }
    }

    /// Set header colors.
    #[must_use]
    pub const fn header_colors(mut self, fg: ColorSpec, bg: ColorSpec) -> Self {
        self.header_fg = fg;
        self.header_bg = bg;
        self
    }

    /// Set border colors.
    #[must_use]
    pub const fn border_colors(mut self, fg: ColorSpec, bg: ColorSpec) -> Self {
        self.border_fg = fg;
        self.border_bg = bg;
        self
    }

    /// Set the interior fill.
    #[must_use]
    pub const fn background(mut self, color: ColorSpec) -> Self {
        self.background = color;
        self
    }

    /// Set the frame glyph set.
    #[must_use]
    pub const fn style(mut self, style: BorderStyle) -> Self {
        self.style = style;
        self
    }

    /// Header as drawn, padded with one space each side. `None` when empty.
    pub fn padded_header(&self) -> Option<String> {
        (!self.header.is_empty()).then(|| format!(" {} ", self.header))
    }

    /// Column of the right edge.
    const fn right(&self) -> i32 {
        self.origin.x.saturating_add(self.size.x)
    }

    /// Row of the bottom edge.
    const fn bottom(&self) -> i32 {
        self.origin.y.saturating_add(self.size.y)
    }
}

/// Interior fill plus frame, everything but the header.
///
/// Only the part of the window that can reach the grid is visited, so a
/// window far larger than the grid costs no more than one that fits.
pub(super) fn draw_frame<R: Renderer + ?Sized>(renderer: &mut R, window: &Window<'_>) -> Result<()> {
    let (columns, rows) = renderer.grid_size();
    let (left, right) = ordered(window.origin.x, window.right());
    let (top, bottom) = ordered(window.origin.y, window.bottom());

    let fill = Some(window.background);
    for y in top.saturating_add(1).max(0)..bottom.min(i32::from(rows)) {
        for x in left.saturating_add(1).max(0)..right.min(i32::from(columns)) {
            renderer.draw_glyph(x, y, Glyph::SPACE, ColorSpec::BLACK, fill)?;
        }
    }

    let glyphs = window.style.glyphs();
    let fg = window.border_fg;
    let bg = Some(window.border_bg);

    // Clip to one cell past the grid on each side: a clipped edge then lies
    // off-grid and draws nothing, while real edges keep their glyphs.
    let (clip_left, clip_right) = (left.max(-1), right.min(i32::from(columns)));
    let (clip_top, clip_bottom) = (top.max(-1), bottom.min(i32::from(rows)));
    if clip_left <= clip_right && clip_top <= clip_bottom {
        let origin = Position::new(clip_left, clip_top);
        let size = Position::new(clip_right - clip_left, clip_bottom - clip_top);
        for cell in perimeter(origin, size, false) {
            let glyph = if cell.y == top {
                glyphs.top
            } else if cell.y == bottom {
                glyphs.bottom
            } else if cell.x == left {
                glyphs.left
            } else {
                glyphs.right
            };
            renderer.draw_glyph(cell.x, cell.y, glyph, fg, bg)?;
        }
    }

    renderer.draw_glyph(left, top, glyphs.top_left, fg, bg)?;
    renderer.draw_glyph(right, top, glyphs.top_right, fg, bg)?;
    renderer.draw_glyph(left, bottom, glyphs.bottom_left, fg, bg)?;
    renderer.draw_glyph(right, bottom, glyphs.bottom_right, fg, bg)
}

#[inline]
const fn ordered(a: i32, b: i32) -> (i32, i32) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}
