//! Tile module: pixel canvases for the tile backend.
//!
//! This module contains:
//! - [`TileCanvas`]: textures, render targets and scaled copies
//! - [`SoftwareCanvas`]: CPU implementation with inspectable pixels

mod canvas;
mod software;

pub use canvas::{PixelRect, TextureId, TileCanvas};
pub use software::SoftwareCanvas;
