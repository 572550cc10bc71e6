//! Color module: color values and the bounded palette cache.
//!
//! This module contains:
//! - [`ColorSpec`]: 24-bit color parsed from `#RRGGBB`
//! - [`ScaledColor`]: the 0-1000 form programmed into palette slots
//! - [`ColorRegistry`]: cache of color slots and color pairs for the cell backend
//! - [`Palette`]: the hardware calls the registry makes

mod registry;
mod spec;

pub use registry::{ColorRegistry, Palette, PairId, RegistryLimits, SlotId, BASE_COLORS};
pub use spec::{ColorSpec, ScaledColor};
