//! Glyph atlas: tile rectangles cut from a glyph sheet.
//!
//! The sheet is decoded by the caller (image loading is not this crate's
//! job) and handed over as RGBA pixels. Glyphs are drawn white on a
//! transparent background so color modulation can tint them.
//!
//! ```text
//!   sheet (128 x 256 px, 8 x 16 tiles)
//!   ┌────┬────┬────┬ ─ ─ ┬────┐
//!   │  0 │  1 │  2 │     │ 15 │   row 0
//!   ├────┼────┼────┼ ─ ─ ┼────┤
//!   │ 16 │ 17 │ 18 │     │ 31 │   row 1
//!   └────┴────┴────┴ ─ ─ ┴────┘
//!   tile index = row * columns + column
//! ```

use super::Glyph;
use crate::error::{RenderError, Result};

/// Decoded glyph sheet pixels, RGBA8 in row-major order.
#[derive(Clone, PartialEq, Eq)]
pub struct GlyphSheet {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl GlyphSheet {
    /// Wrap decoded RGBA8 pixels.
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(RenderError::GlyphSheet(format!("empty sheet {width}x{height}")));
        }
        let expected = width as usize * height as usize * 4;
        if pixels.len() != expected {
            return Err(RenderError::GlyphSheet(format!(
                "{width}x{height} sheet needs {expected} RGBA bytes, got {}",
                pixels.len()
            )));
        }
        Ok(Self { width, height, pixels })
    }

    /// Build a white sheet from one coverage byte per pixel (used as alpha).
    pub fn from_mask(width: u32, height: u32, coverage: &[u8]) -> Result<Self> {
        let pixels = coverage.iter().flat_map(|&a| [255, 255, 255, a]).collect();
        Self::from_rgba(width, height, pixels)
    }

    /// Sheet width in pixels.
    #[inline]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Sheet height in pixels.
    #[inline]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// RGBA8 pixel bytes.
    #[inline]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }
}

impl std::fmt::Debug for GlyphSheet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GlyphSheet")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish_non_exhaustive()
    }
}

/// Source rectangle of one glyph in the sheet.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct TileInfo {
    /// Left edge in sheet pixels.
    pub x: u32,
    /// Top edge in sheet pixels.
    pub y: u32,
}

/// Ordered tile rectangles, one per glyph index. Immutable once built.
#[derive(Clone, Debug)]
pub struct GlyphAtlas {
    tiles: Vec<TileInfo>,
    tile_width: u32,
    tile_height: u32,
}

impl GlyphAtlas {
    /// Scan a `sheet_width` x `sheet_height` sheet in tile-sized steps, row by row.
    ///
    /// Only whole tiles are kept; a ragged right or bottom edge is ignored.
    pub fn scan(sheet_width: u32, sheet_height: u32, tile_width: u32, tile_height: u32) -> Result<Self> {
        if tile_width == 0 || tile_height == 0 {
            return Err(RenderError::Config(format!(
                "tile size {tile_width}x{tile_height} must be non-zero"
            )));
        }
        if sheet_width < tile_width || sheet_height < tile_height {
            return Err(RenderError::GlyphSheet(format!(
                "{sheet_width}x{sheet_height} sheet is smaller than one {tile_width}x{tile_height} tile"
            )));
        }
        if sheet_width % tile_width != 0 || sheet_height % tile_height != 0 {
            log::warn!(
                "{sheet_width}x{sheet_height} sheet is not a whole number of {tile_width}x{tile_height} tiles"
            );
        }

        let columns = sheet_width / tile_width;
        let rows = sheet_height / tile_height;
        let tiles = (0..rows)
            .flat_map(|row| {
                (0..columns).map(move |col| TileInfo {
                    x: col * tile_width,
                    y: row * tile_height,
                })
            })
            .collect();

        Ok(Self {
            tiles,
            tile_width,
            tile_height,
        })
    }

    /// Number of glyphs in the atlas.
    #[inline]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Whether the atlas holds no glyphs (never true after `scan`).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Unscaled tile width in pixels.
    #[inline]
    pub const fn tile_width(&self) -> u32 {
        self.tile_width
    }

    /// Unscaled tile height in pixels.
    #[inline]
    pub const fn tile_height(&self) -> u32 {
        self.tile_height
    }

    /// Source rectangle for `glyph`, if the sheet has it.
    #[inline]
    pub fn tile(&self, glyph: Glyph) -> Option<TileInfo> {
        self.tiles.get(usize::from(glyph.0)).copied()
    }

    /// All tiles in glyph order.
    #[inline]
    pub fn tiles(&self) -> &[TileInfo] {
        &self.tiles
    }
}
