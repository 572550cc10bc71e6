//! `TileCanvas`: what the tile backend needs from a pixel renderer.

use crate::color::ColorSpec;
use crate::error::Result;
use crate::glyph::GlyphSheet;

/// Handle to a texture owned by a canvas.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct TextureId(pub usize);

/// A rectangle in pixels. May extend past the texture it addresses; the
/// canvas clips.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct PixelRect {
    /// Left edge.
    pub x: i32,
    /// Top edge.
    pub y: i32,
    /// Width in pixels.
    pub w: u32,
    /// Height in pixels.
    pub h: u32,
}

impl PixelRect {
    /// Create a new rectangle.
    #[inline]
    pub const fn new(x: i32, y: i32, w: u32, h: u32) -> Self {
        Self { x, y, w, h }
    }

    /// Right edge (exclusive).
    #[inline]
    pub const fn right(&self) -> i64 {
        self.x as i64 + self.w as i64
    }

    /// Bottom edge (exclusive).
    #[inline]
    pub const fn bottom(&self) -> i64 {
        self.y as i64 + self.h as i64
    }
}

/// A hardware-style 2D renderer: textures, one current render target, and a
/// visible output that only changes on `present`.
pub trait TileCanvas {
    /// Size of the visible output in pixels.
    fn output_size(&self) -> (u32, u32);

    /// Upload a decoded glyph sheet as a texture.
    fn upload_sheet(&mut self, sheet: &GlyphSheet) -> Result<TextureId>;

    /// Create a texture that can be rendered into.
    fn create_target(&mut self, width: u32, height: u32) -> Result<TextureId>;

    /// Size of a texture in pixels.
    fn texture_size(&self, texture: TextureId) -> Result<(u32, u32)>;

    /// Direct drawing into `target`, or into the visible output's back
    /// buffer with `None`.
    fn set_target(&mut self, target: Option<TextureId>) -> Result<()>;

    /// Color used by `clear` and `fill_rect`.
    fn set_draw_color(&mut self, color: ColorSpec);

    /// Fill the current target with the draw color.
    fn clear(&mut self) -> Result<()>;

    /// Fill a rectangle of the current target with the draw color.
    fn fill_rect(&mut self, rect: PixelRect) -> Result<()>;

    /// Tint applied to a texture's pixels when it is copied.
    fn set_color_mod(&mut self, texture: TextureId, color: ColorSpec) -> Result<()>;

    /// Copy `src` of `texture` into `dst` of the current target, scaling to
    /// fit. `None` means the whole texture or the whole target.
    fn copy(&mut self, texture: TextureId, src: Option<PixelRect>, dst: Option<PixelRect>) -> Result<()>;

    /// Make the back buffer visible.
    fn present(&mut self) -> Result<()>;
}
