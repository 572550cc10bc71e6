//! Border glyph sets for window frames.

use super::{cp437, Glyph};

/// Which glyphs frame a window.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum BorderStyle {
    /// `+`, `-` and `|`; renders on any terminal font.
    Ascii,
    /// Single-line box drawing.
    Single,
    /// Double-line box drawing.
    #[default]
    Double,
    /// Half blocks; top and bottom runs differ, as do left and right.
    Block,
}

/// The eight glyphs a frame is drawn with.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct BorderGlyphs {
    /// Upper-left corner.
    pub top_left: Glyph,
    /// Upper-right corner.
    pub top_right: Glyph,
    /// Lower-left corner.
    pub bottom_left: Glyph,
    /// Lower-right corner.
    pub bottom_right: Glyph,
    /// Top run.
    pub top: Glyph,
    /// Bottom run.
    pub bottom: Glyph,
    /// Left run.
    pub left: Glyph,
    /// Right run.
    pub right: Glyph,
}

impl BorderStyle {
    /// Glyph set for this style.
    pub const fn glyphs(self) -> BorderGlyphs {
        match self {
            Self::Ascii => BorderGlyphs {
                top_left: Glyph(b'+' as u16),
                top_right: Glyph(b'+' as u16),
                bottom_left: Glyph(b'+' as u16),
                bottom_right: Glyph(b'+' as u16),
                top: Glyph(b'-' as u16),
                bottom: Glyph(b'-' as u16),
                left: Glyph(b'|' as u16),
                right: Glyph(b'|' as u16),
            },
            Self::Single => BorderGlyphs {
                top_left: cp437::ULCORNER_1,
                top_right: cp437::URCORNER_1,
                bottom_left: cp437::DLCORNER_1,
                bottom_right: cp437::DRCORNER_1,
                top: cp437::HBAR_1,
                bottom: cp437::HBAR_1,
                left: cp437::VBAR_1,
                right: cp437::VBAR_1,
            },
            Self::Double => BorderGlyphs {
                top_left: cp437::ULCORNER_2,
                top_right: cp437::URCORNER_2,
                bottom_left: cp437::DLCORNER_2,
                bottom_right: cp437::DRCORNER_2,
                top: cp437::HBAR_2,
                bottom: cp437::HBAR_2,
                left: cp437::VBAR_2,
                right: cp437::VBAR_2,
            },
            Self::Block => BorderGlyphs {
                top_left: cp437::ULCORNER_3,
                top_right: cp437::URCORNER_3,
                bottom_left: cp437::DLCORNER_3,
                bottom_right: cp437::DRCORNER_3,
                top: cp437::HBAR_3U,
                bottom: cp437::HBAR_3D,
                left: cp437::VBAR_3L,
                right: cp437::VBAR_3R,
            },
        }
    }
}
