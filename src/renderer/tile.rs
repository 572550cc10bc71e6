//! `TileRenderer`: the glyph-sheet backend.
//!
//! Glyphs are tiles cut from a sheet, tinted with the foreground color and
//! copied into an off-screen target the size of the window. `render` copies
//! that target to the visible output in one step.

use super::window::{draw_frame, Window};
use super::{positions, Renderer};
use crate::color::ColorSpec;
use crate::error::{RenderError, Result};
use crate::geometry::header_origin;
use crate::glyph::{Glyph, GlyphAtlas, GlyphSheet};
use crate::tile::{PixelRect, TextureId, TileCanvas};

/// Configuration for the tile backend.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TileConfig {
    /// Width of one tile in the sheet, in pixels.
    pub tile_width: u32,
    /// Height of one tile in the sheet, in pixels.
    pub tile_height: u32,
    /// Factor applied to tiles on screen.
    pub scale: f32,
    /// Color the frame is cleared to.
    pub clear_color: ColorSpec,
}

impl Default for TileConfig {
    fn default() -> Self {
        Self {
            tile_width: 8,
            tile_height: 16,
            scale: 1.0,
            clear_color: ColorSpec::BLACK,
        }
    }
}

impl TileConfig {
    /// On-screen cell size in pixels.
    fn cell_size(&self) -> Result<(u32, u32)> {
        if !self.scale.is_finite() || self.scale <= 0.0 {
            return Err(RenderError::Config(format!("scale {} must be positive", self.scale)));
        }
        let width = (self.tile_width as f32 * self.scale) as u32;
        let height = (self.tile_height as f32 * self.scale) as u32;
        if width == 0 || height == 0 {
            return Err(RenderError::Config(format!(
                "{}x{} tiles at scale {} are smaller than a pixel",
                self.tile_width, self.tile_height, self.scale
            )));
        }
        Ok((width, height))
    }
}

/// Renderer drawing glyph tiles through a [`TileCanvas`].
#[derive(Debug)]
pub struct TileRenderer<C: TileCanvas> {
    canvas: C,
    atlas: GlyphAtlas,
    sheet: TextureId,
    /// Off-screen frame, the size of the window.
    target: TextureId,
    /// On-screen cell size.
    cell_width: u32,
    cell_height: u32,
    columns: u16,
    rows: u16,
    config: TileConfig,
}

impl<C: TileCanvas> TileRenderer<C> {
    /// Build a renderer over `canvas`, cutting glyphs from `sheet`.
    ///
    /// The grid is the canvas output size divided by the scaled tile size,
    /// truncated.
    ///
    /// # Errors
    ///
    /// [`RenderError::Config`] for a zero tile size, a non-positive scale or a
    /// window smaller than one cell; [`RenderError::GlyphSheet`] if the sheet
    /// holds no whole tile; anything the canvas reports while allocating.
    pub fn new(mut canvas: C, sheet: &GlyphSheet, config: TileConfig) -> Result<Self> {
        let atlas = GlyphAtlas::scan(sheet.width(), sheet.height(), config.tile_width, config.tile_height)?;
        let (cell_width, cell_height) = config.cell_size()?;

        let (window_width, window_height) = canvas.output_size();
        let columns = u16::try_from(window_width / cell_width).unwrap_or(u16::MAX);
        let rows = u16::try_from(window_height / cell_height).unwrap_or(u16::MAX);
        if columns == 0 || rows == 0 {
            return Err(RenderError::Config(format!(
                "{window_width}x{window_height} window cannot hold one {cell_width}x{cell_height} cell"
            )));
        }

        let sheet = canvas.upload_sheet(sheet)?;
        let target = canvas.create_target(window_width, window_height)?;
        canvas.set_target(Some(target))?;
        canvas.set_draw_color(config.clear_color);
        canvas.clear()?;

        log::debug!(
            "tile renderer initialized: {columns}x{rows} cells of {cell_width}x{cell_height} px, {} glyphs",
            atlas.len()
        );
        Ok(Self {
            canvas,
            atlas,
            sheet,
            target,
            cell_width,
            cell_height,
            columns,
            rows,
            config,
        })
    }

    /// The pixel canvas.
    pub const fn canvas(&self) -> &C {
        &self.canvas
    }

    /// The pixel canvas, for uploading textures to pass to [`draw_image`](Self::draw_image).
    pub fn canvas_mut(&mut self) -> &mut C {
        &mut self.canvas
    }

    /// The off-screen frame texture.
    pub const fn frame_texture(&self) -> TextureId {
        self.target
    }

    /// On-screen cell size in pixels.
    pub const fn cell_size(&self) -> (u32, u32) {
        (self.cell_width, self.cell_height)
    }

    /// Copy `texture` into the frame with its top-left corner at pixel
    /// (x, y), stretched to `size` or at its own size.
    pub fn draw_image(&mut self, x: i32, y: i32, texture: TextureId, size: Option<(u32, u32)>) -> Result<()> {
        let (w, h) = match size {
            Some(size) => size,
            None => self.canvas.texture_size(texture)?,
        };
        self.canvas.copy(texture, None, Some(PixelRect::new(x, y, w, h)))
    }

    /// Whether a cell-sized rectangle at pixel (x, y) lies on the grid.
    fn on_grid(&self, x: i32, y: i32) -> bool {
        let grid_width = i64::from(self.columns) * i64::from(self.cell_width);
        let grid_height = i64::from(self.rows) * i64::from(self.cell_height);
        x >= 0
            && y >= 0
            && i64::from(x) + i64::from(self.cell_width) <= grid_width
            && i64::from(y) + i64::from(self.cell_height) <= grid_height
    }

    /// Draw a glyph with its top-left corner at pixel (x, y).
    fn draw_tile(&mut self, x: i32, y: i32, glyph: Glyph, fg: ColorSpec, bg: Option<ColorSpec>) -> Result<()> {
        if !self.on_grid(x, y) {
            return Ok(());
        }
        let dst = PixelRect::new(x, y, self.cell_width, self.cell_height);

        if let Some(bg) = bg {
            self.canvas.set_draw_color(bg);
            self.canvas.fill_rect(dst)?;
        }

        let Some(tile) = self.atlas.tile(glyph) else {
            log::warn!("glyph {} is outside the {}-tile sheet", glyph.0, self.atlas.len());
            return Ok(());
        };
        let src = PixelRect::new(
            tile.x as i32,
            tile.y as i32,
            self.atlas.tile_width(),
            self.atlas.tile_height(),
        );
        self.canvas.set_color_mod(self.sheet, fg)?;
        self.canvas.copy(self.sheet, Some(src), Some(dst))
    }

    fn present_frame(&mut self) -> Result<()> {
        self.canvas.set_target(None)?;
        self.canvas.set_draw_color(self.config.clear_color);
        self.canvas.clear()?;
        self.canvas.copy(self.target, None, None)?;
        self.canvas.present()
    }
}

impl<C: TileCanvas> Renderer for TileRenderer<C> {
    fn grid_size(&self) -> (u16, u16) {
        (self.columns, self.rows)
    }

    fn clear(&mut self) -> Result<()> {
        self.canvas.set_draw_color(self.config.clear_color);
        self.canvas.clear()
    }

    fn draw_glyph(&mut self, x: i32, y: i32, glyph: Glyph, fg: ColorSpec, bg: Option<ColorSpec>) -> Result<()> {
        if x < 0 || y < 0 || x >= i32::from(self.columns) || y >= i32::from(self.rows) {
            return Ok(());
        }
        let (Some(px), Some(py)) = (
            x.checked_mul(self.cell_width as i32),
            y.checked_mul(self.cell_height as i32),
        ) else {
            return Ok(());
        };
        self.draw_tile(px, py, glyph, fg, bg)
    }

    fn draw_window(&mut self, window: &Window<'_>) -> Result<()> {
        draw_frame(self, window)?;

        let Some(header) = window.padded_header() else {
            return Ok(());
        };
        let step = self.cell_width as i32;
        let start = header_origin(window.origin.x, window.size.x, header.chars().count(), step);
        let y = window.origin.y.saturating_mul(self.cell_height as i32);
        for (x, c) in positions(start, step, &header) {
            self.draw_tile(x, y, Glyph::from_char(c), window.header_fg, Some(window.header_bg))?;
        }
        Ok(())
    }

    fn render(&mut self) -> Result<()> {
        let shown = self.present_frame();
        // Draw calls always target the off-screen frame, even after a failure.
        let restored = self.canvas.set_target(Some(self.target));
        shown.and(restored)?;
        log::trace!("tile frame presented");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Align, Position};
    use crate::glyph::BorderStyle;
    use crate::tile::SoftwareCanvas;

    const TILE: u32 = 2;

    /// 16x16 sheet of 2x2 tiles where only `solid` glyphs have coverage.
    fn sheet(solid: &[Glyph]) -> GlyphSheet {
        let side = 16 * TILE;
        let mut mask = vec![0u8; (side * side) as usize];
        for glyph in solid {
            let (col, row) = (u32::from(glyph.0) % 16, u32::from(glyph.0) / 16);
            for dy in 0..TILE {
                for dx in 0..TILE {
                    let (x, y) = (col * TILE + dx, row * TILE + dy);
                    mask[(y * side + x) as usize] = 255;
                }
            }
        }
        GlyphSheet::from_mask(side, side, &mask).unwrap()
    }

    fn config(scale: f32) -> TileConfig {
        TileConfig {
            tile_width: TILE,
            tile_height: TILE,
            scale,
            ..TileConfig::default()
        }
    }

    fn renderer(width: u32, height: u32) -> TileRenderer<SoftwareCanvas> {
        let canvas = SoftwareCanvas::new(width, height).unwrap();
        TileRenderer::new(canvas, &sheet(&[Glyph::from('A')]), config(1.0)).unwrap()
    }

    fn region_is(canvas: &SoftwareCanvas, x: u32, y: u32, w: u32, h: u32, color: ColorSpec) -> bool {
        (y..y + h).all(|py| (x..x + w).all(|px| canvas.pixel(px, py) == Some(color)))
    }

    #[test]
    fn test_grid_from_window_and_scale() {
        let canvas = SoftwareCanvas::new(20, 10).unwrap();
        let r = TileRenderer::new(canvas, &sheet(&[]), config(2.0)).unwrap();
        assert_eq!(r.grid_size(), (5, 2));
        assert_eq!(r.cell_size(), (4, 4));

        let canvas = SoftwareCanvas::new(21, 11).unwrap();
        let r = TileRenderer::new(canvas, &sheet(&[]), config(1.5)).unwrap();
        assert_eq!(r.grid_size(), (7, 3));
    }

    #[test_log::test]
    fn test_glyph_tinted_into_cell() {
        let mut r = renderer(20, 10);
        r.draw_glyph(1, 1, Glyph::from('A'), ColorSpec::RED, None).unwrap();
        assert!(region_is(r.canvas(), 0, 0, 20, 10, ColorSpec::BLACK), "nothing visible before render");

        r.render().unwrap();
        let canvas = r.canvas();
        assert!(region_is(canvas, 2, 2, 2, 2, ColorSpec::RED));
        assert!(region_is(canvas, 0, 0, 2, 2, ColorSpec::BLACK));
        assert!(region_is(canvas, 4, 2, 2, 2, ColorSpec::BLACK));
        assert_eq!(canvas.target(), Some(r.frame_texture()));
    }

    #[test]
    fn test_background_fill() {
        let mut r = renderer(20, 10);
        r.draw_text(0, 0, " A", Align::Left, ColorSpec::WHITE, Some(ColorSpec::BLUE)).unwrap();
        r.render().unwrap();
        assert!(region_is(r.canvas(), 0, 0, 2, 2, ColorSpec::BLUE));
        assert!(region_is(r.canvas(), 2, 0, 2, 2, ColorSpec::WHITE));
        assert!(region_is(r.canvas(), 4, 0, 2, 2, ColorSpec::BLACK));
    }

    #[test]
    fn test_clear_then_render_is_blank() {
        let mut r = renderer(20, 10);
        r.draw_text(0, 0, "AAAA", Align::Left, ColorSpec::GREEN, Some(ColorSpec::RED)).unwrap();
        r.render().unwrap();
        r.clear().unwrap();
        r.render().unwrap();
        assert!(region_is(r.canvas(), 0, 0, 20, 10, ColorSpec::BLACK));
        assert_eq!(r.canvas().present_count(), 2);
    }

    #[test]
    fn test_out_of_grid_draws_dropped() {
        // 21 px wide: ten whole cells and one spare pixel column.
        let mut r = renderer(21, 10);
        for (x, y) in [(-1, 0), (0, -1), (10, 0), (0, 5)] {
            r.draw_glyph(x, y, Glyph::from('A'), ColorSpec::WHITE, Some(ColorSpec::RED)).unwrap();
        }
        r.render().unwrap();
        assert!(region_is(r.canvas(), 0, 0, 21, 10, ColorSpec::BLACK));
    }

    #[test]
    fn test_header_uses_half_cell_offset() {
        let mut r = renderer(20, 10);
        let window = Window::new(Position::ORIGIN, Position::new(3, 2), "A");
        r.draw_window(&window).unwrap();
        r.render().unwrap();

        // " A " starts at pixel 1, so the A covers pixels 3..5.
        let canvas = r.canvas();
        assert!(region_is(canvas, 3, 0, 2, 2, ColorSpec::WHITE));
        assert_eq!(canvas.pixel(2, 0), Some(ColorSpec::BLACK));
        assert_eq!(canvas.pixel(5, 0), Some(ColorSpec::BLACK));
    }

    #[test]
    fn test_window_interior_filled() {
        let mut r = renderer(20, 10);
        let window = Window::new(Position::ORIGIN, Position::new(4, 3), "").background(ColorSpec::BLUE);
        r.draw_window(&window).unwrap();
        r.render().unwrap();

        let canvas = r.canvas();
        assert!(region_is(canvas, 2, 2, 6, 4, ColorSpec::BLUE));
        assert!(region_is(canvas, 0, 0, 10, 2, ColorSpec::BLACK));
        assert!(region_is(canvas, 8, 2, 2, 4, ColorSpec::BLACK));
    }

    /// Sheet where glyph `g` is a solid tile of color `(g, 255 - g, 7)`,
    /// except the space, which is transparent.
    fn coded_sheet() -> GlyphSheet {
        let side = 16 * TILE;
        let mut pixels = Vec::with_capacity((side * side * 4) as usize);
        for y in 0..side {
            for x in 0..side {
                let g = ((y / TILE) * 16 + x / TILE) as u8;
                let alpha = if u16::from(g) == Glyph::SPACE.0 { 0 } else { 255 };
                pixels.extend_from_slice(&[g, 255 - g, 7, alpha]);
            }
        }
        GlyphSheet::from_rgba(side, side, pixels).unwrap()
    }

    fn shows(canvas: &SoftwareCanvas, x: u32, y: u32, glyph: Glyph) -> bool {
        let g = glyph.0 as u8;
        region_is(canvas, x * TILE, y * TILE, TILE, TILE, ColorSpec::new(g, 255 - g, 7))
    }

    #[test]
    fn test_window_glyphs_per_style() {
        for style in [BorderStyle::Ascii, BorderStyle::Single, BorderStyle::Double, BorderStyle::Block] {
            let canvas = SoftwareCanvas::new(20, 10).unwrap();
            let mut r = TileRenderer::new(canvas, &coded_sheet(), config(1.0)).unwrap();
            let window = Window::new(Position::new(1, 1), Position::new(4, 3), "")
                .style(style)
                .background(ColorSpec::BLUE);
            r.draw_window(&window).unwrap();
            r.render().unwrap();

            let g = style.glyphs();
            let canvas = r.canvas();
            assert!(shows(canvas, 1, 1, g.top_left), "{style:?}");
            assert!(shows(canvas, 5, 1, g.top_right), "{style:?}");
            assert!(shows(canvas, 1, 4, g.bottom_left), "{style:?}");
            assert!(shows(canvas, 5, 4, g.bottom_right), "{style:?}");
            assert!(shows(canvas, 3, 1, g.top), "{style:?}");
            assert!(shows(canvas, 3, 4, g.bottom), "{style:?}");
            assert!(shows(canvas, 1, 2, g.left), "{style:?}");
            assert!(shows(canvas, 5, 3, g.right), "{style:?}");
            assert!(region_is(canvas, 4, 4, 6, 4, ColorSpec::BLUE), "{style:?}");
            assert!(region_is(canvas, 0, 0, 2, 10, ColorSpec::BLACK), "{style:?}");
        }
    }

    #[test]
    fn test_extreme_coordinates_are_clipped() {
        let mut r = renderer(20, 10);
        for (x, align) in [(i32::MAX, Align::Left), (i32::MIN, Align::Right), (i32::MAX, Align::Center)] {
            r.draw_text(x, 0, "AA", align, ColorSpec::WHITE, Some(ColorSpec::RED)).unwrap();
        }
        r.draw_text(0, i32::MAX, "AA", Align::Left, ColorSpec::WHITE, Some(ColorSpec::RED)).unwrap();
        r.draw_window(&Window::new(Position::new(i32::MAX - 2, 0), Position::new(5, 3), "Header")).unwrap();
        r.draw_window(&Window::new(Position::new(0, i32::MAX - 1), Position::new(4, 4), "A")).unwrap();
        r.draw_window(&Window::new(Position::new(i32::MIN, i32::MIN), Position::new(i32::MAX, i32::MAX), "A"))
            .unwrap();
        r.render().unwrap();
        assert!(region_is(r.canvas(), 0, 0, 20, 10, ColorSpec::BLACK));

        let huge = Window::new(Position::new(-1_000_000_000, -1_000_000_000), Position::new(i32::MAX, i32::MAX), "A")
            .background(ColorSpec::BLUE);
        r.draw_window(&huge).unwrap();
        r.render().unwrap();
        assert!(region_is(r.canvas(), 0, 0, 20, 10, ColorSpec::BLUE));
    }

    #[test]
    fn test_draw_image_pixel_position() {
        let mut r = renderer(20, 10);
        let image = GlyphSheet::from_rgba(1, 1, vec![0, 0, 255, 255]).unwrap();
        let texture = r.canvas_mut().upload_sheet(&image).unwrap();

        r.draw_image(5, 3, texture, Some((3, 2))).unwrap();
        r.draw_image(0, 0, texture, None).unwrap();
        r.render().unwrap();

        let canvas = r.canvas();
        assert!(region_is(canvas, 5, 3, 3, 2, ColorSpec::BLUE));
        assert_eq!(canvas.pixel(0, 0), Some(ColorSpec::BLUE));
        assert_eq!(canvas.pixel(1, 0), Some(ColorSpec::BLACK));
        assert_eq!(canvas.pixel(8, 3), Some(ColorSpec::BLACK));
    }

    #[test]
    fn test_glyph_outside_sheet_keeps_background() {
        let mut r = renderer(20, 10);
        r.draw_glyph(0, 0, Glyph(300), ColorSpec::WHITE, Some(ColorSpec::GREEN)).unwrap();
        r.render().unwrap();
        assert!(region_is(r.canvas(), 0, 0, 2, 2, ColorSpec::GREEN));
    }

    #[test]
    fn test_configuration_errors() {
        let canvas = || SoftwareCanvas::new(20, 10).unwrap();
        let glyphs = sheet(&[]);

        for scale in [0.0, -1.0, f32::NAN, 0.1] {
            let result = TileRenderer::new(canvas(), &glyphs, config(scale));
            assert!(matches!(result, Err(RenderError::Config(_))), "scale {scale}");
        }

        let result = TileRenderer::new(SoftwareCanvas::new(1, 1).unwrap(), &glyphs, config(1.0));
        assert!(matches!(result, Err(RenderError::Config(_))));

        let tiny = GlyphSheet::from_mask(1, 1, &[0]).unwrap();
        let result = TileRenderer::new(canvas(), &tiny, config(1.0));
        assert!(matches!(result, Err(RenderError::GlyphSheet(_))));
    }
}
