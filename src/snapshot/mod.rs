//! Binary screen snapshots.
//!
//! A snapshot is a rectangular grid of styled cells captured from the
//! editor's front or back screen buffer. The on-disk format is a 16-byte
//! header followed by one fixed-size record per cell:
//!
//! ```text
//! header: magic:u32  rows:i32  cols:i32  area:i32      (16 bytes)
//! record: fg:i32  bg:i32  style:u8  ch:u8  pad:[u8; 2]  (12 bytes, `area` times)
//! ```
//!
//! All integers are little-endian.
//!
//! # Module Structure
//!
//! - `cell` - The `Cell` value type
//! - `decoder` - Byte buffer to validated `Snapshot`
//! - `encoder` - `Snapshot` back to the on-disk layout
//! - `error` - `SnapshotError`

mod cell;
mod decoder;
mod encoder;
mod error;

pub use cell::Cell;
pub use decoder::{decode, read_snapshot};
pub use encoder::{encode, write_snapshot};
pub use error::SnapshotError;

/// Magic constant at the start of every snapshot file.
pub const MAGIC: u32 = 0xDECA_FC0F;

/// Size of the file header in bytes.
pub const HEADER_SIZE: usize = 16;

/// Size of a single cell record in bytes.
pub const CELL_RECORD_SIZE: usize = 12;

/// A decoded grid of cells, stored row-major.
///
/// `cells.len() == rows * cols` holds for every constructed value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Snapshot {
    /// Build a snapshot from row-major cells.
    ///
    /// Fails with `InvalidSnapshot` if the cell count does not match the
    /// dimensions.
    pub fn new(rows: usize, cols: usize, cells: Vec<Cell>) -> Result<Self, SnapshotError> {
        let area = rows
            .checked_mul(cols)
            .ok_or_else(|| SnapshotError::invalid("rows * cols overflows"))?;
        if cells.len() != area {
            return Err(SnapshotError::invalid("rows * cols != area"));
        }
        Ok(Self { rows, cols, cells })
    }

    /// Build a snapshot from text lines, one cell per character.
    ///
    /// Every cell gets the given colors and style. Lines must all have the
    /// same number of characters.
    pub fn from_lines(lines: &[&str], fg: u32, bg: u32) -> Result<Self, SnapshotError> {
        let cols = lines.first().map_or(0, |line| line.chars().count());
        let mut cells = Vec::with_capacity(lines.len() * cols);
        for line in lines {
            if line.chars().count() != cols {
                return Err(SnapshotError::invalid("lines differ in length"));
            }
            cells.extend(line.chars().map(|ch| Cell::new(fg, bg, 0, ch)));
        }
        Self::new(lines.len(), cols, cells)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of cells (`rows * cols`).
    pub fn area(&self) -> usize {
        self.cells.len()
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// `(rows, cols)` pair, used for dimension checks and messages.
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Look up a cell by row-major position.
    pub fn cell_at_linear(&self, position: usize) -> Result<&Cell, SnapshotError> {
        self.cells.get(position).ok_or_else(|| {
            let (y, x) = self.coordinates(position);
            SnapshotError::OutOfBounds { y, x, position }
        })
    }

    /// Look up a cell by row and column.
    ///
    /// A column past the end of the row is out of bounds even when the
    /// linear position would still fall inside the grid.
    pub fn cell_at(&self, y: usize, x: usize) -> Result<&Cell, SnapshotError> {
        let position = y.saturating_mul(self.cols).saturating_add(x);
        if y >= self.rows || x >= self.cols {
            return Err(SnapshotError::OutOfBounds { y, x, position });
        }
        self.cell_at_linear(position)
    }

    /// Cells `start..start + length`, bounds-checked.
    pub fn span(&self, start: usize, length: usize) -> Result<&[Cell], SnapshotError> {
        let end = start.saturating_add(length);
        if end > self.cells.len() {
            let position = end.saturating_sub(1);
            let (y, x) = self.coordinates(position);
            return Err(SnapshotError::OutOfBounds { y, x, position });
        }
        Ok(&self.cells[start..end])
    }

    /// Iterate `(cell, y, x)` in row-major order.
    ///
    /// Each call starts a fresh traversal; the snapshot itself holds no cursor.
    pub fn iter(&self) -> impl Iterator<Item = (&Cell, usize, usize)> + '_ {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, cell)| (cell, i / cols, i % cols))
    }

    fn coordinates(&self, position: usize) -> (usize, usize) {
        match self.cols {
            0 => (0, position),
            cols => (position / cols, position % cols),
        }
    }
}
