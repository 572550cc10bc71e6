//! Buffer module: the logical framebuffer of the cell backend.
//!
//! This module contains:
//! - [`Cell`]: glyph plus color pair, the atomic unit of display
//! - [`Framebuffer`]: a fixed-size grid of cells

mod cell;
#[allow(clippy::module_inception)]
mod buffer;

pub use cell::Cell;
pub use buffer::Framebuffer;
