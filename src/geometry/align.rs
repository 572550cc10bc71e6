//! Text alignment and header centering.

/// Horizontal text alignment relative to the anchor column.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum Align {
    /// Text starts at the anchor.
    #[default]
    Left,
    /// Text is centered on the anchor.
    Center,
    /// Text ends at the anchor.
    Right,
}

/// Start column for `len` glyphs anchored at `x` with `align`.
///
/// Right alignment ends the text *on* the anchor column: right-aligning
/// `"Bees"` at column 79 of an 80-column grid starts at 76 and ends at 79.
///
/// Saturates at the ends of the `i32` range.
#[inline]
pub const fn align_origin(x: i32, align: Align, len: usize) -> i32 {
    let len = clamp_len(len);
    match align {
        Align::Left => x,
        Align::Center => x.saturating_sub(len / 2),
        Align::Right if len == 0 => x.saturating_add(1),
        Align::Right => x.saturating_sub(len - 1),
    }
}

#[inline]
const fn clamp_len(len: usize) -> i32 {
    if len > i32::MAX as usize {
        i32::MAX
    } else {
        len as i32
    }
}

/// Start coordinate of a window header so it centers over the top border.
///
/// A window of `width` spans `width + 1` cells from `x` to `x + width`
/// inclusive. `cell_px` is the cell size in output units: the scaled tile
/// width on the tile backend, `1` on the cell backend. The result is in the
/// same units.
///
/// The two parities need different rounding:
/// - odd `width` (even span): the border midpoint falls on a cell boundary at
///   `x + (width + 1) / 2`, so the header is centered on that boundary.
/// - even `width` (odd span): the midpoint is the center of cell
///   `x + width / 2`, half a cell past its left edge. Offsetting by
///   `cell_px / 2` keeps the header from sitting half a cell to the left.
///
/// Saturates at the ends of the `i32` range.
#[inline]
pub const fn header_origin(x: i32, width: i32, header_len: usize, cell_px: i32) -> i32 {
    let header_px = clamp_len(header_len).saturating_mul(cell_px);
    let start = x.saturating_mul(cell_px);

    if width % 2 != 0 {
        let half = (width.saturating_add(1) / 2).saturating_mul(cell_px);
        start.saturating_add(half).saturating_sub(header_px / 2)
    } else {
        let half = (width / 2).saturating_mul(cell_px);
        start
            .saturating_add(half)
            .saturating_sub(header_px / 2)
            .saturating_add(cell_px / 2)
    }
}
