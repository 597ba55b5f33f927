//! Integration tests for loading snapshot files

use tempfile::TempDir;

use snapdiff::snapshot::{encode, read_snapshot, Cell, Snapshot, SnapshotError, MAGIC};

use crate::helpers::{grid, header, write_bytes, write_fixture};

#[test]
fn written_snapshot_reads_back_identically() {
    let dir = TempDir::new().unwrap();
    let cells = vec![
        Cell::new(0xff0000, 0x000000, 0b0000001, 'r'),
        Cell::new(0x00ff00, 0x101010, 0b0000010, 'g'),
        Cell::new(0x0000ff, 0x202020, 0b0000100, 'b'),
        Cell::new(0xffffff, 0x303030, 0, ' '),
        Cell::new(0x808080, 0x404040, 0b1000000, '\u{b7}'),
        Cell::new(0x000000, 0xffffff, 0, '|'),
    ];
    let snapshot = Snapshot::new(2, 3, cells).unwrap();
    let path = write_fixture(dir.path(), "screen.bin", &snapshot);

    assert_eq!(read_snapshot(&path).unwrap(), snapshot);
}

#[test]
fn file_size_matches_header_plus_records() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(dir.path(), "screen.bin", &grid(&["abcd", "efgh", "ijkl"]));
    let len = std::fs::metadata(&path).unwrap().len();
    assert_eq!(len, 16 + 12 * 12);
}

#[test]
fn empty_file_is_not_a_snapshot() {
    let dir = TempDir::new().unwrap();
    let path = write_bytes(dir.path(), "empty.bin", &[]);
    assert!(matches!(
        read_snapshot(&path),
        Err(SnapshotError::NotASnapshot)
    ));
}

#[test]
fn text_file_is_not_a_snapshot() {
    let dir = TempDir::new().unwrap();
    let path = write_bytes(dir.path(), "notes.txt", b"this is definitely not a screen dump\n");
    assert!(matches!(
        read_snapshot(&path),
        Err(SnapshotError::NotASnapshot)
    ));
}

#[test]
fn area_mismatch_is_invalid_regardless_of_payload() {
    let dir = TempDir::new().unwrap();
    let mut bytes = header(MAGIC, 2, 3, 5);
    bytes.extend(vec![0u8; 12 * 6]);
    let path = write_bytes(dir.path(), "bad_area.bin", &bytes);

    let err = read_snapshot(&path).unwrap_err();
    assert!(matches!(err, SnapshotError::InvalidSnapshot(_)));
    assert!(err.to_string().contains("rows * cols != area"));
}

#[test]
fn truncated_file_is_invalid() {
    let dir = TempDir::new().unwrap();
    let full = encode(&grid(&["ab", "cd"])).unwrap();
    let path = write_bytes(dir.path(), "truncated.bin", &full[..full.len() - 1]);

    assert!(matches!(
        read_snapshot(&path),
        Err(SnapshotError::InvalidSnapshot(_))
    ));
}

#[test]
fn header_only_zero_area_snapshot_is_valid() {
    let dir = TempDir::new().unwrap();
    let path = write_bytes(dir.path(), "empty_grid.bin", &header(MAGIC, 0, 80, 0));
    let snapshot = read_snapshot(&path).unwrap();
    assert_eq!(snapshot.dimensions(), (0, 80));
    assert_eq!(snapshot.area(), 0);
}
