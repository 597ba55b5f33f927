//! Snapshot encoder.
//!
//! Produces the same layout the editor writes when it dumps its screen
//! buffers: the header followed by one record per cell, padding zeroed.

use std::fs;
use std::path::Path;

use super::{Cell, Snapshot, SnapshotError, CELL_RECORD_SIZE, HEADER_SIZE, MAGIC};

/// Serialize a snapshot to its on-disk bytes.
///
/// Fails if the grid is too large for the 32-bit header fields, or if a
/// cell holds a character that does not fit in the single stored byte.
pub fn encode(snapshot: &Snapshot) -> Result<Vec<u8>, SnapshotError> {
    let rows = header_field(snapshot.rows())?;
    let cols = header_field(snapshot.cols())?;
    let area = header_field(snapshot.area())?;

    let mut bytes = Vec::with_capacity(HEADER_SIZE + snapshot.area() * CELL_RECORD_SIZE);
    bytes.extend_from_slice(&MAGIC.to_le_bytes());
    bytes.extend_from_slice(&rows.to_le_bytes());
    bytes.extend_from_slice(&cols.to_le_bytes());
    bytes.extend_from_slice(&area.to_le_bytes());

    for cell in snapshot.cells() {
        encode_cell(cell, &mut bytes)?;
    }

    Ok(bytes)
}

/// Encode a snapshot and write it to `path`.
pub fn write_snapshot<P: AsRef<Path>>(path: P, snapshot: &Snapshot) -> Result<(), SnapshotError> {
    let bytes = encode(snapshot)?;
    fs::write(path, bytes)?;
    Ok(())
}

fn encode_cell(cell: &Cell, buf: &mut Vec<u8>) -> Result<(), SnapshotError> {
    let ch = u8::try_from(u32::from(cell.ch)).map_err(|_| {
        SnapshotError::invalid(format!(
            "character U+{:04X} cannot be stored",
            u32::from(cell.ch)
        ))
    })?;
    buf.extend_from_slice(&cell.fg.to_le_bytes());
    buf.extend_from_slice(&cell.bg.to_le_bytes());
    buf.extend_from_slice(&[cell.style, ch, 0, 0]);
    Ok(())
}

fn header_field(value: usize) -> Result<i32, SnapshotError> {
    i32::try_from(value).map_err(|_| SnapshotError::invalid("grid too large for header"))
}
