//! Geometry module: pure cell-coordinate math shared by every backend.
//!
//! Nothing here knows about colors or surfaces.

mod align;
mod perimeter;
mod position;

pub use align::{align_origin, header_origin, Align};
pub use perimeter::perimeter;
pub use position::Position;
