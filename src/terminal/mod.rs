//! Terminal module: character-cell presentation surfaces.
//!
//! This module contains:
//! - [`CellSurface`]: the interface the cell backend draws through
//! - [`TerminalSurface`]: ANSI output with a reprogrammable 256-color palette
//! - [`HeadlessSurface`]: in-memory surface for inspection and tests
//! - [`OutputBuffer`]: single-write escape sequence buffer

mod ansi;
mod headless;
mod output;
mod surface;

pub use ansi::{TerminalConfig, TerminalSurface};
pub use headless::HeadlessSurface;
pub use output::OutputBuffer;
pub use surface::CellSurface;
