//! ANSI escape code conversion utilities.
//!
//! Converts snapshot cells to 24-bit truecolor escape sequences.

use crate::snapshot::Cell;

/// Resets all attributes after a rendered span.
pub const ANSI_RESET: &str = "\x1b[0m";

/// Split a packed `0xRRGGBB` value into its channels.
///
/// Bits above the low 24 are ignored.
pub fn extract_channels(value: u32) -> (u8, u8, u8) {
    (
        ((value >> 16) & 0xFF) as u8,
        ((value >> 8) & 0xFF) as u8,
        (value & 0xFF) as u8,
    )
}

/// Append the combined foreground/background truecolor sequence for a cell.
///
/// Emits `ESC[38;2;R;G;B;48;2;R;G;Bm` as a single sequence.
pub fn cell_colors_to_ansi(cell: &Cell, buf: &mut String) {
    let (fr, fg, fb) = extract_channels(cell.fg);
    let (br, bg, bb) = extract_channels(cell.bg);
    buf.push_str("\x1b[38;2;");
    buf.push_str(&fr.to_string());
    buf.push(';');
    buf.push_str(&fg.to_string());
    buf.push(';');
    buf.push_str(&fb.to_string());
    buf.push_str(";48;2;");
    buf.push_str(&br.to_string());
    buf.push(';');
    buf.push_str(&bg.to_string());
    buf.push(';');
    buf.push_str(&bb.to_string());
    buf.push('m');
}

/// Whether rendered output carries escape sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    /// Truecolor escapes around every cell
    Truecolor,
    /// Bare characters, no escapes at all
    Plain,
}

/// Renders cells and spans of cells for terminal output.
#[derive(Debug, Clone, Copy)]
pub struct Painter {
    mode: ColorMode,
}

impl Painter {
    pub fn new(mode: ColorMode) -> Self {
        Self { mode }
    }

    pub fn truecolor() -> Self {
        Self::new(ColorMode::Truecolor)
    }

    pub fn plain() -> Self {
        Self::new(ColorMode::Plain)
    }

    pub fn mode(&self) -> ColorMode {
        self.mode
    }

    /// Append one cell: its color sequence (if enabled) and its character.
    pub fn push_cell(&self, cell: &Cell, buf: &mut String) {
        if self.mode == ColorMode::Truecolor {
            cell_colors_to_ansi(cell, buf);
        }
        buf.push(cell.ch);
    }

    /// Render one cell without a trailing reset.
    pub fn cell(&self, cell: &Cell) -> String {
        let mut buf = String::new();
        self.push_cell(cell, &mut buf);
        buf
    }

    /// Render consecutive cells without a trailing reset.
    pub fn cells<'a>(&self, cells: impl IntoIterator<Item = &'a Cell>) -> String {
        let mut buf = String::new();
        for cell in cells {
            self.push_cell(cell, &mut buf);
        }
        buf
    }

    /// The reset sequence, or nothing in plain mode.
    pub fn reset(&self) -> &'static str {
        match self.mode {
            ColorMode::Truecolor => ANSI_RESET,
            ColorMode::Plain => "",
        }
    }
}

impl Default for Painter {
    fn default() -> Self {
        Self::truecolor()
    }
}
