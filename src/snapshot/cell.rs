//! A single styled terminal cell.

/// One character position of a captured screen.
///
/// Colors are packed `0xRRGGBB` values exactly as they were stored in the
/// snapshot file; `style` is the raw attribute byte. Two cells are equal only
/// when all four fields match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    /// Foreground color, packed 24-bit RGB
    pub fg: u32,
    /// Background color, packed 24-bit RGB
    pub bg: u32,
    /// Style flags (7 bits, meaning opaque to this tool)
    pub style: u8,
    /// Displayed character
    pub ch: char,
}

impl Cell {
    pub fn new(fg: u32, bg: u32, style: u8, ch: char) -> Self {
        Self { fg, bg, style, ch }
    }
}

impl Default for Cell {
    /// A blank cell: black on black, no style, a space.
    fn default() -> Self {
        Self::new(0, 0, 0, ' ')
    }
}
