//! Snapshot decoding and lookup errors.

/// Errors that can occur while loading or indexing a snapshot.
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    /// Too short to hold a header, or the magic constant does not match.
    #[error("not a snapshot file")]
    NotASnapshot,

    /// The header was recognized but the contents are inconsistent.
    #[error("invalid snapshot: {0}")]
    InvalidSnapshot(String),

    #[error("index {y}, {x} (position {position}) is out of bounds")]
    OutOfBounds { y: usize, x: usize, position: usize },

    #[error(
        "snapshot dimensions differ: front is {}x{}, back is {}x{}",
        front.0,
        front.1,
        back.0,
        back.1
    )]
    DimensionMismatch {
        front: (usize, usize),
        back: (usize, usize),
    },

    #[error("failed to read snapshot: {0}")]
    Io(#[from] std::io::Error),
}

impl SnapshotError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidSnapshot(reason.into())
    }
}
