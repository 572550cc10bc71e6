//! `TerminalSurface`: a limited-palette ANSI terminal.
//!
//! Palette slots are reprogrammed with OSC 4, so the surface behaves like a
//! curses color terminal: 256 indexed colors whose RGB values the registry
//! chooses. Pairs are a client-side table mapping a pair id to foreground and
//! background indices; pair 0 is the terminal's own default colors.
//!
//! A frame is built in an [`OutputBuffer`] and written with a single
//! `write_all`, so the terminal never shows a half-drawn frame.

use super::output::OutputBuffer;
use super::surface::CellSurface;
use crate::color::{PairId, Palette, ScaledColor, SlotId};
use crate::error::{RenderError, Result};
use crate::glyph::{cp437, Glyph};
use crossterm::{
    cursor, execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io::{self, Stdout, Write};

/// Configuration for taking over the process's terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalConfig {
    /// Whether to use alternate screen buffer.
    pub alternate_screen: bool,
    /// Whether to hide the hardware cursor while the surface is open.
    pub hide_cursor: bool,
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            alternate_screen: true,
            hide_cursor: true,
        }
    }
}

/// Tracks what the terminal currently has selected, to skip redundant SGR
/// and cursor sequences within a frame.
#[derive(Debug, Clone, Copy, Default)]
struct FrameState {
    /// Where the next character would land without a cursor move.
    cursor: Option<(u16, u16)>,
    /// Last emitted pair.
    pair: Option<PairId>,
}

/// ANSI terminal surface writing to `W`.
pub struct TerminalSurface<W: Write> {
    writer: W,
    width: u16,
    height: u16,
    /// Palette changes waiting for the next presented frame.
    pending_palette: OutputBuffer,
    /// The frame being built.
    frame: OutputBuffer,
    /// `pairs[id]` = (fg slot, bg slot); entry 0 is unused.
    pairs: Vec<Option<(SlotId, SlotId)>>,
    state: FrameState,
    /// Set when this surface put the terminal into raw mode.
    restore: Option<TerminalConfig>,
}

impl TerminalSurface<Stdout> {
    /// Take over stdout: raw mode, optional alternate screen, hidden cursor.
    ///
    /// The terminal is restored when the surface is dropped.
    pub fn open(config: &TerminalConfig) -> Result<Self> {
        let (width, height) = terminal::size()?;
        let mut surface = Self::with_writer(io::stdout(), width, height)?;
        terminal::enable_raw_mode()?;

        // From here on, Drop undoes whatever setup succeeded.
        surface.restore = Some(*config);

        if config.alternate_screen {
            execute!(surface.writer, EnterAlternateScreen)?;
        }
        if config.hide_cursor {
            execute!(surface.writer, cursor::Hide)?;
        }

        log::debug!("terminal surface opened at {width}x{height}");
        Ok(surface)
    }
}

impl<W: Write> TerminalSurface<W> {
    /// Surface of `width` x `height` cells writing to an arbitrary writer.
    ///
    /// The terminal mode is left alone; this is what `open` builds on and
    /// what tests feed into a terminal emulator.
    pub fn with_writer(writer: W, width: u16, height: u16) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(RenderError::Config(format!(
                "terminal size {width}x{height} has no cells"
            )));
        }

        let capacity = usize::from(width) * usize::from(height) * 8;
        Ok(Self {
            writer,
            width,
            height,
            pending_palette: OutputBuffer::new(),
            frame: OutputBuffer::with_capacity(capacity),
            pairs: Vec::new(),
            state: FrameState::default(),
            restore: None,
        })
    }

    /// The underlying writer.
    pub const fn writer(&self) -> &W {
        &self.writer
    }

    /// Fg/bg slots programmed for `pair`.
    pub fn pair(&self, pair: PairId) -> Option<(SlotId, SlotId)> {
        self.pairs.get(usize::from(pair.0)).copied().flatten()
    }

    fn select_pair(&mut self, pair: PairId) {
        if self.state.pair == Some(pair) {
            return;
        }
        match self.pair(pair) {
            Some((fg, bg)) => {
                self.frame.set_fg_indexed(fg.0);
                self.frame.set_bg_indexed(bg.0);
            }
            None => {
                if pair != PairId::DEFAULT {
                    log::warn!("pair {} was never defined; drawing in default colors", pair.0);
                }
                self.frame.default_colors();
            }
        }
        self.state.pair = Some(pair);
    }
}

impl<W: Write> Palette for TerminalSurface<W> {
    fn define_color(&mut self, slot: SlotId, color: ScaledColor) -> Result<()> {
        self.pending_palette.define_palette_color(slot.0, color);
        Ok(())
    }

    fn define_pair(&mut self, pair: PairId, fg: SlotId, bg: SlotId) -> Result<()> {
        let index = usize::from(pair.0);
        if self.pairs.len() <= index {
            self.pairs.resize(index + 1, None);
        }
        self.pairs[index] = Some((fg, bg));
        Ok(())
    }
}

impl<W: Write> CellSurface for TerminalSurface<W> {
    fn size(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    fn begin_frame(&mut self) -> Result<()> {
        self.frame.clear();
        self.frame.write_raw(self.pending_palette.as_bytes());
        self.frame.cursor_hide();
        self.frame.reset_attrs();
        self.frame.clear_screen();
        self.state = FrameState::default();
        Ok(())
    }

    fn put(&mut self, x: u16, y: u16, glyph: Glyph, pair: PairId) -> Result<()> {
        if x >= self.width || y >= self.height {
            return Ok(());
        }

        if self.state.cursor != Some((x, y)) {
            self.frame.cursor_move(x, y);
        }
        self.select_pair(pair);
        self.frame.write_char(cp437::to_char(glyph).unwrap_or('?'));

        // Past the last column the cursor position depends on the terminal's
        // wrap mode, so force an explicit move next time.
        self.state.cursor = (x + 1 < self.width).then_some((x + 1, y));
        Ok(())
    }

    fn present(&mut self) -> Result<()> {
        self.frame.reset_attrs();
        self.frame.flush_to(&mut self.writer)?;
        self.pending_palette.clear();
        log::trace!("presented {} bytes", self.frame.len());
        Ok(())
    }
}

impl<W: Write> Drop for TerminalSurface<W> {
    fn drop(&mut self) {
        let Some(config) = self.restore else {
            return;
        };

        let mut out = OutputBuffer::with_capacity(32);
        out.reset_attrs();
        out.reset_palette();
        let _ = out.flush_to(&mut self.writer);

        if config.hide_cursor {
            let _ = execute!(self.writer, cursor::Show);
        }
        if config.alternate_screen {
            let _ = execute!(self.writer, LeaveAlternateScreen);
        }
        let _ = terminal::disable_raw_mode();
    }
}

impl<W: Write> std::fmt::Debug for TerminalSurface<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TerminalSurface")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("pairs", &self.pairs.iter().flatten().count())
            .field("owns_terminal", &self.restore.is_some())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn screen(bytes: &[u8], width: u16, height: u16) -> vt100::Parser {
        let mut parser = vt100::Parser::new(height, width, 0);
        parser.process(bytes);
        parser
    }

    #[test]
    fn test_frame_is_single_write() {
        let mut surface = TerminalSurface::with_writer(Vec::new(), 10, 3).unwrap();
        surface.begin_frame().unwrap();
        surface.put(0, 0, Glyph::from('A'), PairId::DEFAULT).unwrap();
        assert!(surface.writer().is_empty(), "nothing may be written before present");

        surface.present().unwrap();
        assert!(!surface.writer().is_empty());
    }

    #[test]
    fn test_cells_land_on_screen() {
        let mut surface = TerminalSurface::with_writer(Vec::new(), 10, 3).unwrap();
        surface.begin_frame().unwrap();
        for (i, c) in "Hi".chars().enumerate() {
            surface.put(4 + i as u16, 1, Glyph::from(c), PairId::DEFAULT).unwrap();
        }
        surface.put(9, 2, cp437::ULCORNER_2, PairId::DEFAULT).unwrap();
        surface.present().unwrap();

        let parser = screen(surface.writer(), 10, 3);
        let screen = parser.screen();
        assert_eq!(screen.cell(1, 4).unwrap().contents(), "H");
        assert_eq!(screen.cell(1, 5).unwrap().contents(), "i");
        assert_eq!(screen.cell(2, 9).unwrap().contents(), "╔");
        assert_eq!(screen.cell(0, 0).unwrap().contents(), "");
    }

    #[test]
    fn test_pairs_select_indexed_colors() {
        let mut surface = TerminalSurface::with_writer(Vec::new(), 4, 1).unwrap();
        surface.define_color(SlotId(8), ScaledColor { r: 1000, g: 1000, b: 1000 }).unwrap();
        surface.define_color(SlotId(9), ScaledColor::default()).unwrap();
        surface.define_pair(PairId(1), SlotId(8), SlotId(9)).unwrap();

        surface.begin_frame().unwrap();
        surface.put(0, 0, Glyph::from('x'), PairId(1)).unwrap();
        surface.put(1, 0, Glyph::from('y'), PairId::DEFAULT).unwrap();
        surface.present().unwrap();

        let parser = screen(surface.writer(), 4, 1);
        let colored = parser.screen().cell(0, 0).unwrap();
        assert_eq!(colored.fgcolor(), vt100::Color::Idx(8));
        assert_eq!(colored.bgcolor(), vt100::Color::Idx(9));
        let plain = parser.screen().cell(0, 1).unwrap();
        assert_eq!(plain.fgcolor(), vt100::Color::Default);

        let output = String::from_utf8_lossy(surface.writer()).into_owned();
        assert!(output.contains("\x1b]4;8;rgb:ffff/ffff/ffff\x1b\\"));
    }

    #[test]
    fn test_palette_sent_once() {
        let mut surface = TerminalSurface::with_writer(Vec::new(), 4, 1).unwrap();
        surface.define_color(SlotId(8), ScaledColor::default()).unwrap();

        surface.begin_frame().unwrap();
        surface.present().unwrap();
        let first = surface.writer().len();
        surface.begin_frame().unwrap();
        surface.present().unwrap();
        let second = surface.writer().len() - first;

        assert!(second < first, "second frame must not repeat the palette");
    }

    #[test]
    fn test_adjacent_cells_skip_cursor_moves() {
        let mut surface = TerminalSurface::with_writer(Vec::new(), 10, 2).unwrap();
        surface.begin_frame().unwrap();
        let start = surface.frame.len();
        surface.put(2, 0, Glyph::from('a'), PairId::DEFAULT).unwrap();
        surface.put(3, 0, Glyph::from('b'), PairId::DEFAULT).unwrap();
        surface.put(4, 0, Glyph::from('c'), PairId::DEFAULT).unwrap();

        let body = &surface.frame.as_bytes()[start..];
        let moves = body.windows(2).filter(|w| w == b"\x1b[").count();
        // One cursor move and one color selection.
        assert_eq!(moves, 2);
    }

    #[test]
    fn test_out_of_range_put_ignored() {
        let mut surface = TerminalSurface::with_writer(Vec::new(), 2, 2).unwrap();
        surface.begin_frame().unwrap();
        let before = surface.frame.len();
        surface.put(2, 0, Glyph::from('a'), PairId::DEFAULT).unwrap();
        surface.put(0, 2, Glyph::from('a'), PairId::DEFAULT).unwrap();
        assert_eq!(surface.frame.len(), before);
    }

    #[test]
    fn test_zero_size_rejected() {
        assert!(TerminalSurface::with_writer(Vec::new(), 0, 5).is_err());
    }
}
