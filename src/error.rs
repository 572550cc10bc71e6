//! Typed error types for cellprint.
//!
//! Bounds violations never show up here: writes outside the grid are dropped
//! silently. Everything else that can go wrong in a draw call or during
//! initialization is one of these variants.

use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, RenderError>;

/// Top-level error type for the rendering engine.
#[derive(Debug, Error)]
pub enum RenderError {
    // -----------------------------------------------------------------------
    // Initialization
    // -----------------------------------------------------------------------
    /// The renderer or surface configuration cannot produce a usable grid.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// The glyph sheet handed to the tile backend is unusable.
    #[error("invalid glyph sheet: {0}")]
    GlyphSheet(String),

    // -----------------------------------------------------------------------
    // Per-call failures
    // -----------------------------------------------------------------------
    /// A color string was not of the form `#RRGGBB`.
    #[error("malformed color {0:?}: expected '#' followed by 6 hex digits")]
    MalformedColor(String),

    /// Every hardware color slot is already allocated.
    #[error("color slots exhausted: all {limit} hardware colors are in use")]
    ColorSlotsExhausted {
        /// Hardware ceiling that was hit.
        limit: u16,
    },

    /// Every hardware color-pair slot is already allocated.
    #[error("color pairs exhausted: all {limit} attribute pairs are in use")]
    PairSlotsExhausted {
        /// Hardware ceiling that was hit.
        limit: u16,
    },

    /// A texture id did not name a texture owned by the canvas.
    #[error("unknown texture id {0}")]
    UnknownTexture(usize),

    // -----------------------------------------------------------------------
    // Presentation
    // -----------------------------------------------------------------------
    /// Writing to the presentation surface failed.
    #[error("surface I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = RenderError::MalformedColor("#12".to_string());
        assert!(err.to_string().contains("\"#12\""));

        let err = RenderError::PairSlotsExhausted { limit: 64 };
        assert_eq!(
            err.to_string(),
            "color pairs exhausted: all 64 attribute pairs are in use"
        );
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "gone");
        let err: RenderError = io.into();
        assert!(matches!(err, RenderError::Io(_)));
    }
}
