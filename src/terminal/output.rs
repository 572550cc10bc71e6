//! `OutputBuffer`: Single-syscall output buffer for ANSI sequences.

use crate::color::ScaledColor;
use std::io::Write;

/// Pre-allocated buffer for building ANSI escape sequences.
///
/// All output is accumulated here, then flushed in a single `write()` syscall
/// to prevent terminal flickering.
pub struct OutputBuffer {
    data: Vec<u8>,
}

impl OutputBuffer {
    /// Create a new output buffer with the given capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
        }
    }

    /// Create a buffer sized for a typical terminal (4KB).
    pub fn new() -> Self {
        Self::with_capacity(4096)
    }

    /// Clear the buffer for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Get the buffer contents.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Get the buffer length.
    #[inline]
    pub const fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if buffer is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Write raw bytes.
    #[inline]
    pub fn write_raw(&mut self, bytes: &[u8]) {
        self.data.extend_from_slice(bytes);
    }

    /// Write a single character, UTF-8 encoded.
    #[inline]
    pub fn write_char(&mut self, c: char) {
        let mut utf8 = [0u8; 4];
        self.data.extend_from_slice(c.encode_utf8(&mut utf8).as_bytes());
    }

    /// Move cursor to (x, y) position (1-indexed for ANSI).
    ///
    /// Uses `\x1b[H` for home and `\x1b[{row}H` for column 1.
    #[inline]
    pub fn cursor_move(&mut self, x: u16, y: u16) {
        let row = u32::from(y) + 1;
        let col = u32::from(x) + 1;

        if row == 1 && col == 1 {
            self.data.extend_from_slice(b"\x1b[H");
        } else if col == 1 {
            let _ = write!(self.data, "\x1b[{row}H");
        } else {
            let _ = write!(self.data, "\x1b[{row};{col}H");
        }
    }

    /// Hide cursor.
    #[inline]
    pub fn cursor_hide(&mut self) {
        self.data.extend_from_slice(b"\x1b[?25l");
    }

    /// Set foreground to a palette index.
    #[inline]
    pub fn set_fg_indexed(&mut self, index: u16) {
        let _ = write!(self.data, "\x1b[38;5;{index}m");
    }

    /// Set background to a palette index.
    #[inline]
    pub fn set_bg_indexed(&mut self, index: u16) {
        let _ = write!(self.data, "\x1b[48;5;{index}m");
    }

    /// Switch to the terminal's default foreground and background.
    #[inline]
    pub fn default_colors(&mut self) {
        self.data.extend_from_slice(b"\x1b[39;49m");
    }

    /// Reset all attributes.
    #[inline]
    pub fn reset_attrs(&mut self) {
        self.data.extend_from_slice(b"\x1b[0m");
    }

    /// Clear the entire screen.
    #[inline]
    pub fn clear_screen(&mut self) {
        self.data.extend_from_slice(b"\x1b[2J");
    }

    /// Reprogram palette entry `index` (OSC 4).
    ///
    /// Channels are given in the 0-1000 palette range and sent as 16-bit
    /// hex, e.g. `\x1b]4;8;rgb:ffff/0000/3333\x1b\\`.
    pub fn define_palette_color(&mut self, index: u16, color: ScaledColor) {
        let _ = write!(
            self.data,
            "\x1b]4;{index};rgb:{:04x}/{:04x}/{:04x}\x1b\\",
            to_16bit(color.r),
            to_16bit(color.g),
            to_16bit(color.b)
        );
    }

    /// Restore every palette entry to the terminal's defaults (OSC 104).
    #[inline]
    pub fn reset_palette(&mut self) {
        self.data.extend_from_slice(b"\x1b]104\x1b\\");
    }

    /// Flush to a writer in a single syscall.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying writer fails.
    pub fn flush_to<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        writer.write_all(&self.data)?;
        writer.flush()
    }
}

impl Default for OutputBuffer {
    fn default() -> Self {
        Self::new()
    }
}

/// 0-1000 to 0-65535, rounded.
#[inline]
fn to_16bit(channel: u16) -> u16 {
    let channel = u32::from(channel.min(1000));
    ((channel * 65_535 + 500) / 1000) as u16
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_move_optimization() {
        let mut out = OutputBuffer::new();

        // Home position uses short sequence
        out.cursor_move(0, 0);
        assert_eq!(out.as_bytes(), b"\x1b[H");

        out.clear();

        // Column 1 uses shorter sequence
        out.cursor_move(0, 5);
        assert_eq!(out.as_bytes(), b"\x1b[6H");

        out.clear();

        // General position, 1-indexed
        out.cursor_move(10, 5);
        assert_eq!(out.as_bytes(), b"\x1b[6;11H");
    }

    #[test]
    fn test_indexed_colors() {
        let mut out = OutputBuffer::new();
        out.set_fg_indexed(8);
        out.set_bg_indexed(255);
        assert_eq!(out.as_bytes(), b"\x1b[38;5;8m\x1b[48;5;255m");
    }

    #[test]
    fn test_define_palette_color() {
        let mut out = OutputBuffer::new();
        out.define_palette_color(8, ScaledColor { r: 1000, g: 0, b: 200 });
        assert_eq!(out.as_bytes(), b"\x1b]4;8;rgb:ffff/0000/3333\x1b\\");
    }

    #[test]
    fn test_write_char_utf8() {
        let mut out = OutputBuffer::new();
        out.write_char('═');
        out.write_char('A');
        assert_eq!(out.as_bytes(), "═A".as_bytes());
    }

    #[test]
    fn test_flush_single_write() {
        let mut out = OutputBuffer::new();
        out.clear_screen();
        out.write_char('x');
        let mut sink = Vec::new();
        out.flush_to(&mut sink).unwrap();
        assert_eq!(sink, b"\x1b[2Jx");
    }
}
