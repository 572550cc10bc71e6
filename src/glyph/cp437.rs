//! Code page 437: glyph names and the Unicode rendering of each index.
//!
//! Tile sheets are laid out in CP437 order (16 columns by 16 rows), so a tile
//! index and a CP437 code are the same number. The terminal backend prints
//! the Unicode equivalent of the code.

use super::Glyph;

/// White smiling face `☺`
pub const FACE_1: Glyph = Glyph(1);
/// Black smiling face `☻`
pub const FACE_2: Glyph = Glyph(2);
/// `♥`
pub const HEART: Glyph = Glyph(3);
/// `♦`
pub const DIAMOND: Glyph = Glyph(4);
/// `♣`
pub const CLUB: Glyph = Glyph(5);
/// `♠`
pub const SPADE: Glyph = Glyph(6);
/// `•`
pub const DOT_1: Glyph = Glyph(7);
/// `◘`
pub const DOT_2: Glyph = Glyph(8);
/// `○`
pub const SQUARE_1: Glyph = Glyph(9);
/// `◙`
pub const SQUARE_2: Glyph = Glyph(10);
/// `♂`
pub const SIGN_M: Glyph = Glyph(11);
/// `♀`
pub const SIGN_F: Glyph = Glyph(12);
/// `♪`
pub const NOTE_1: Glyph = Glyph(13);
/// `♫`
pub const NOTE_2: Glyph = Glyph(14);
/// `☼`
pub const LAMP: Glyph = Glyph(15);
/// `►`
pub const RARROW_2: Glyph = Glyph(16);
/// `◄`
pub const LARROW_2: Glyph = Glyph(17);
/// `↕`
pub const UDARROW_1: Glyph = Glyph(18);
/// `‼`
pub const EXCLAIM_DBL: Glyph = Glyph(19);
/// `¶`
pub const PI: Glyph = Glyph(20);
/// `§`
pub const DOLLAR_1: Glyph = Glyph(21);
/// `▬`
pub const DASH_1: Glyph = Glyph(22);
/// `↨`
pub const UDARROW_2: Glyph = Glyph(23);
/// `↑`
pub const UARROW_1: Glyph = Glyph(24);
/// `↓`
pub const DARROW_1: Glyph = Glyph(25);
/// `→`
pub const RARROW_1: Glyph = Glyph(26);
/// `←`
pub const LARROW_1: Glyph = Glyph(27);
/// `∟`
pub const CORNER_SMALL: Glyph = Glyph(28);
/// `↔`
pub const LRARROW: Glyph = Glyph(29);
/// `▲`
pub const UARROW_2: Glyph = Glyph(30);
/// `▼`
pub const DARROW_2: Glyph = Glyph(31);

/// `┌`
pub const ULCORNER_1: Glyph = Glyph(218);
/// `└`
pub const DLCORNER_1: Glyph = Glyph(192);
/// `┐`
pub const URCORNER_1: Glyph = Glyph(191);
/// `┘`
pub const DRCORNER_1: Glyph = Glyph(217);
/// `─`
pub const HBAR_1: Glyph = Glyph(196);
/// `│`
pub const VBAR_1: Glyph = Glyph(179);

/// `╔`
pub const ULCORNER_2: Glyph = Glyph(201);
/// `╚`
pub const DLCORNER_2: Glyph = Glyph(200);
/// `╗`
pub const URCORNER_2: Glyph = Glyph(187);
/// `╝`
pub const DRCORNER_2: Glyph = Glyph(188);
/// `═`
pub const HBAR_2: Glyph = Glyph(205);
/// `║`
pub const VBAR_2: Glyph = Glyph(186);

/// `▐`
pub const ULCORNER_3: Glyph = Glyph(222);
/// `▐`
pub const DLCORNER_3: Glyph = Glyph(222);
/// `▌`
pub const URCORNER_3: Glyph = Glyph(221);
/// `▌`
pub const DRCORNER_3: Glyph = Glyph(221);
/// `▀`
pub const HBAR_3U: Glyph = Glyph(223);
/// `▄`
pub const HBAR_3D: Glyph = Glyph(220);
/// `▐`
pub const VBAR_3L: Glyph = Glyph(222);
/// `▌`
pub const VBAR_3R: Glyph = Glyph(221);

/// `█`
pub const BLOCK: Glyph = Glyph(219);
/// `≈`
pub const WAVES: Glyph = Glyph(247);

/// Unicode rendering of every CP437 code. Code 0 renders as a space.
#[rustfmt::skip]
const TABLE: [char; 256] = [
    ' ', '☺', '☻', '♥', '♦', '♣', '♠', '•', '◘', '○', '◙', '♂', '♀', '♪', '♫', '☼',
    '►', '◄', '↕', '‼', '¶', '§', '▬', '↨', '↑', '↓', '→', '←', '∟', '↔', '▲', '▼',
    ' ', '!', '"', '#', '$', '%', '&', '\'', '(', ')', '*', '+', ',', '-', '.', '/',
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', ':', ';', '<', '=', '>', '?',
    '@', 'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O',
    'P', 'Q', 'R', 'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z', '[', '\\', ']', '^', '_',
    '`', 'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o',
    'p', 'q', 'r', 's', 't', 'u', 'v', 'w', 'x', 'y', 'z', '{', '|', '}', '~', '⌂',
    'Ç', 'ü', 'é', 'â', 'ä', 'à', 'å', 'ç', 'ê', 'ë', 'è', 'ï', 'î', 'ì', 'Ä', 'Å',
    'É', 'æ', 'Æ', 'ô', 'ö', 'ò', 'û', 'ù', 'ÿ', 'Ö', 'Ü', '¢', '£', '¥', '₧', 'ƒ',
    'á', 'í', 'ó', 'ú', 'ñ', 'Ñ', 'ª', 'º', '¿', '⌐', '¬', '½', '¼', '¡', '«', '»',
    '░', '▒', '▓', '│', '┤', '╡', '╢', '╖', '╕', '╣', '║', '╗', '╝', '╜', '╛', '┐',
    '└', '┴', '┬', '├', '─', '┼', '╞', '╟', '╚', '╔', '╩', '╦', '╠', '═', '╬', '╧',
    '╨', '╤', '╥', '╙', '╘', '╒', '╓', '╫', '╪', '┘', '┌', '█', '▄', '▌', '▐', '▀',
    'α', 'ß', 'Γ', 'π', 'Σ', 'σ', 'µ', 'τ', 'Φ', 'Θ', 'Ω', 'δ', '∞', 'φ', 'ε', '∩',
    '≡', '±', '≥', '≤', '⌠', '⌡', '÷', '≈', '°', '∙', '·', '√', 'ⁿ', '²', '■', '\u{a0}',
];

/// Unicode character for a glyph index, or `None` past the CP437 range.
#[inline]
pub fn to_char(glyph: Glyph) -> Option<char> {
    TABLE.get(usize::from(glyph.0)).copied()
}

/// CP437 code for a character.
///
/// ASCII maps to itself (space included, so code 0 is never produced for
/// `' '`); everything else is looked up in the table.
pub fn from_char(c: char) -> Option<Glyph> {
    if c.is_ascii() && !c.is_ascii_control() {
        return Some(Glyph(c as u16));
    }
    TABLE
        .iter()
        .skip(1)
        .position(|&t| t == c)
        .map(|i| Glyph(i as u16 + 1))
}
