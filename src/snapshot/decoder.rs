//! Snapshot decoder.
//!
//! Fails closed: either the whole buffer describes a valid grid or an error
//! is returned. There is no best-effort recovery.

use std::fs;
use std::path::Path;

use tracing::debug;

use super::{Cell, Snapshot, SnapshotError, CELL_RECORD_SIZE, HEADER_SIZE, MAGIC};

/// Read a whole snapshot file into memory and decode it.
pub fn read_snapshot<P: AsRef<Path>>(path: P) -> Result<Snapshot, SnapshotError> {
    let path = path.as_ref();
    let bytes = fs::read(path)?;
    debug!(path = %path.display(), bytes = bytes.len(), "read snapshot file");
    decode(&bytes)
}

/// Decode a snapshot from its on-disk bytes.
pub fn decode(bytes: &[u8]) -> Result<Snapshot, SnapshotError> {
    if bytes.len() < HEADER_SIZE {
        return Err(SnapshotError::NotASnapshot);
    }
    if read_u32(bytes, 0) != MAGIC {
        return Err(SnapshotError::NotASnapshot);
    }

    let rows = read_i32(bytes, 4);
    let cols = read_i32(bytes, 8);
    let area = read_i32(bytes, 12);

    if i64::from(rows) * i64::from(cols) != i64::from(area) {
        return Err(SnapshotError::invalid("rows * cols != area"));
    }
    if rows < 0 || cols < 0 {
        return Err(SnapshotError::invalid("negative dimensions"));
    }

    // Non-negative i32 always fits in usize on supported targets
    let (rows, cols, area) = (rows as usize, cols as usize, area as usize);
    let payload = &bytes[HEADER_SIZE..];
    let size = area
        .checked_mul(CELL_RECORD_SIZE)
        .ok_or_else(|| SnapshotError::invalid("area too large"))?;
    if payload.len() < size {
        return Err(SnapshotError::invalid(
            "screen does not contain amount of cells as the area",
        ));
    }
    if payload.len() > size {
        debug!(
            trailing = payload.len() - size,
            "ignoring bytes after the last cell record"
        );
    }

    let cells = payload[..size]
        .chunks_exact(CELL_RECORD_SIZE)
        .map(decode_cell)
        .collect();

    debug!(rows, cols, "decoded snapshot");
    Snapshot::new(rows, cols, cells)
}

/// Decode one 12-byte record. Only the low byte of the character is stored,
/// so it maps straight to a code point in 0..=255.
fn decode_cell(record: &[u8]) -> Cell {
    Cell {
        fg: read_u32(record, 0),
        bg: read_u32(record, 4),
        style: record[8],
        ch: char::from(record[9]),
    }
}

fn read_u32(bytes: &[u8], offset: usize) -> u32 {
    u32::from_le_bytes([
        bytes[offset],
        bytes[offset + 1],
        bytes[offset + 2],
        bytes[offset + 3],
    ])
}

fn read_i32(bytes: &[u8], offset: usize) -> i32 {
    read_u32(bytes, offset) as i32
}
