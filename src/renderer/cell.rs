//! `CellRenderer`: the character-cell backend.
//!
//! Draw calls resolve their colors through the [`ColorRegistry`] and land in
//! a [`Framebuffer`]. `render` replays every cell onto the surface and
//! presents them as one frame.
//!
//! Blank cells carry the `(default_bg, default_bg)` pair rather than the
//! terminal's own default colors, so a cleared cell and a transparent draw
//! over it show the same background.

use super::window::{draw_frame, Window};
use super::{positions, Renderer};
use crate::buffer::{Cell, Framebuffer};
use crate::color::{ColorRegistry, ColorSpec, RegistryLimits};
use crate::error::{RenderError, Result};
use crate::geometry::header_origin;
use crate::glyph::Glyph;
use crate::terminal::CellSurface;

/// Configuration for the cell backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellConfig {
    /// Slot numbering and ceilings of the color registry.
    pub limits: RegistryLimits,
    /// Reprogram the base palette slots to their nominal colors at startup.
    pub redefine_base_colors: bool,
    /// Background of a blank cell.
    pub default_bg: ColorSpec,
}

impl Default for CellConfig {
    fn default() -> Self {
        Self {
            limits: RegistryLimits::default(),
            redefine_base_colors: true,
            default_bg: ColorSpec::BLACK,
        }
    }
}

/// Renderer drawing character cells through a [`CellSurface`].
#[derive(Debug)]
pub struct CellRenderer<S: CellSurface> {
    surface: S,
    buffer: Framebuffer,
    registry: ColorRegistry,
    /// What `clear` writes: a space in the default background pair.
    blank: Cell,
    config: CellConfig,
}

impl<S: CellSurface> CellRenderer<S> {
    /// Build a renderer sized to `surface`.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::Config`] if the surface has no cells or the
    /// registry limits are unusable, or any error the surface reports while
    /// the base colors are programmed.
    pub fn new(mut surface: S, config: CellConfig) -> Result<Self> {
        let (width, height) = surface.size();
        if width == 0 || height == 0 {
            return Err(RenderError::Config(format!("surface size {width}x{height} has no cells")));
        }

        let mut registry = ColorRegistry::new(config.limits)?;
        if config.redefine_base_colors {
            registry.install_base_colors(&mut surface)?;
        }
        let blank_pair = registry.resolve(config.default_bg, config.default_bg, &mut surface)?;
        let blank = Cell::new(Glyph::SPACE, blank_pair);

        let mut buffer = Framebuffer::new(width, height);
        buffer.fill(blank);

        log::debug!("cell renderer initialized at {width}x{height}, blank pair {}", blank_pair.0);
        Ok(Self {
            surface,
            buffer,
            registry,
            blank,
            config,
        })
    }

    /// The presentation surface.
    pub const fn surface(&self) -> &S {
        &self.surface
    }

    /// The off-screen frame.
    pub const fn framebuffer(&self) -> &Framebuffer {
        &self.buffer
    }

    /// The color cache.
    pub const fn registry(&self) -> &ColorRegistry {
        &self.registry
    }

    /// The cell `clear` fills the frame with.
    pub const fn blank_cell(&self) -> Cell {
        self.blank
    }

    /// Give the surface back.
    pub fn into_surface(self) -> S {
        self.surface
    }

    /// Background currently under `cell`.
    fn background_of(&self, cell: Cell) -> ColorSpec {
        self.registry
            .pair_colors(cell.attr)
            .map_or(self.config.default_bg, |(_, bg)| bg)
    }
}

impl<S: CellSurface> Renderer for CellRenderer<S> {
    fn grid_size(&self) -> (u16, u16) {
        (self.buffer.width(), self.buffer.height())
    }

    fn clear(&mut self) -> Result<()> {
        self.buffer.fill(self.blank);
        Ok(())
    }

    fn draw_glyph(&mut self, x: i32, y: i32, glyph: Glyph, fg: ColorSpec, bg: Option<ColorSpec>) -> Result<()> {
        // Clipped draws must not allocate colors.
        let Some(&existing) = self.buffer.get(x, y) else {
            return Ok(());
        };
        let bg = bg.unwrap_or_else(|| self.background_of(existing));

        let attr = self.registry.resolve(fg, bg, &mut self.surface)?;
        self.buffer.write(x, y, Cell::new(glyph, attr));
        Ok(())
    }

    fn draw_window(&mut self, window: &Window<'_>) -> Result<()> {
        draw_frame(self, window)?;

        let Some(header) = window.padded_header() else {
            return Ok(());
        };
        let start = header_origin(window.origin.x, window.size.x, header.chars().count(), 1);
        for (x, c) in positions(start, 1, &header) {
            self.draw_glyph(x, window.origin.y, Glyph::from_char(c), window.header_fg, Some(window.header_bg))?;
        }
        Ok(())
    }

    fn render(&mut self) -> Result<()> {
        self.surface.begin_frame()?;
        for (x, y, cell) in self.buffer.positioned() {
            self.surface.put(x, y, cell.glyph, cell.attr)?;
        }
        self.surface.present()?;
        log::trace!("cell frame presented");
        Ok(())
    }
}
