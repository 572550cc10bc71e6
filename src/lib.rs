//! # Cellprint
//!
//! A character-cell renderer with two interchangeable backends.
//!
//! Callers draw glyphs, text and framed windows on a grid of cells, then
//! present the whole frame at once. The same calls work against a tile sheet
//! drawn onto a pixel canvas or against a terminal with a limited,
//! reprogrammable color palette.
//!
//! ## Core Concepts
//!
//! - **Deferred presentation**: draws land off-screen; `render` shows them
//! - **Bounded color registry**: arbitrary RGB mapped onto finite palette slots and pairs
//! - **CP437 glyphs**: one glyph set for both backends, with box-drawing borders
//! - **Silent clipping**: draws outside the grid are dropped, never errors
//!
//! ## Example
//!
//! ```rust,ignore
//! use cellprint::{Align, CellConfig, CellRenderer, ColorSpec, Renderer, TerminalConfig, TerminalSurface};
//!
//! let surface = TerminalSurface::open(&TerminalConfig::default())?;
//! let mut renderer = CellRenderer::new(surface, CellConfig::default())?;
//!
//! renderer.clear()?;
//! renderer.draw_text(40, 0, "Hello World!", Align::Center, ColorSpec::WHITE, None)?;
//! renderer.render()?;
//! ```

#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod buffer;
pub mod color;
pub mod error;
pub mod geometry;
pub mod glyph;
pub mod renderer;
pub mod terminal;
pub mod tile;

// Re-exports for convenience
pub use buffer::{Cell, Framebuffer};
pub use color::{ColorRegistry, ColorSpec, PairId, Palette, RegistryLimits, ScaledColor, SlotId};
pub use error::{RenderError, Result};
pub use geometry::{Align, Position};
pub use glyph::{BorderStyle, Glyph, GlyphSheet};
pub use renderer::{CellConfig, CellRenderer, Renderer, TileConfig, TileRenderer, Window};
pub use terminal::{CellSurface, HeadlessSurface, TerminalConfig, TerminalSurface};
pub use tile::{SoftwareCanvas, TextureId, TileCanvas};
