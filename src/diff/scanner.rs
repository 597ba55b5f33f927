//! Cell-by-cell comparison of two snapshots.
//!
//! The scan walks `back` in row-major order and compares each cell with the
//! cell at the same coordinates in `front`. In run mode, contiguous
//! mismatches (by linear position, so a run may wrap onto the next row) are
//! grouped by a two-state machine.

use tracing::debug;

use crate::snapshot::{Snapshot, SnapshotError};

/// How differences are reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DiffMode {
    /// Group contiguous mismatches into runs
    #[default]
    Runs,
    /// One entry per mismatching cell
    Verbose,
}

/// A span of contiguous differing cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Run {
    /// Linear index of the first differing cell
    pub start: usize,
    /// Number of differing cells
    pub length: usize,
}

/// Something the scan found, in scan order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiffEvent {
    /// Verbose mode: a single differing cell
    Mismatch { y: usize, x: usize, position: usize },
    /// Run mode: a run starts at this cell
    RunOpened { y: usize, x: usize, position: usize },
    /// Run mode: a matching cell ended the run
    RunClosed(Run),
    /// Run mode: the grid ended while a run was still open
    Unterminated(Run),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    Idle,
    InRun(Run),
}

/// Run-grouping state machine.
///
/// Feed it one comparison result per cell in row-major order, then call
/// [`RunTracker::finish`].
#[derive(Debug)]
pub struct RunTracker {
    state: ScanState,
}

impl RunTracker {
    pub fn new() -> Self {
        Self {
            state: ScanState::Idle,
        }
    }

    pub fn in_run(&self) -> bool {
        matches!(self.state, ScanState::InRun(_))
    }

    /// Record a mismatch at `(y, x)`; returns `RunOpened` when this starts a run.
    pub fn mismatch(&mut self, y: usize, x: usize, position: usize) -> Option<DiffEvent> {
        if let ScanState::InRun(run) = &mut self.state {
            run.length += 1;
            return None;
        }
        self.state = ScanState::InRun(Run {
            start: position,
            length: 1,
        });
        Some(DiffEvent::RunOpened { y, x, position })
    }

    /// Record a matching cell; returns `RunClosed` when this ends a run.
    pub fn matched(&mut self) -> Option<DiffEvent> {
        match std::mem::replace(&mut self.state, ScanState::Idle) {
            ScanState::InRun(run) => Some(DiffEvent::RunClosed(run)),
            ScanState::Idle => None,
        }
    }

    /// End of grid; returns `Unterminated` if a run is still open.
    pub fn finish(self) -> Option<DiffEvent> {
        match self.state {
            ScanState::InRun(run) => Some(DiffEvent::Unterminated(run)),
            ScanState::Idle => None,
        }
    }
}

impl Default for RunTracker {
    fn default() -> Self {
        Self::new()
    }
}

/// Compare `front` and `back` cell by cell.
///
/// Both snapshots must have the same dimensions.
pub fn scan(
    front: &Snapshot,
    back: &Snapshot,
    mode: DiffMode,
) -> Result<Vec<DiffEvent>, SnapshotError> {
    if front.dimensions() != back.dimensions() {
        return Err(SnapshotError::DimensionMismatch {
            front: front.dimensions(),
            back: back.dimensions(),
        });
    }

    let cols = back.cols();
    let mut events = Vec::new();
    let mut tracker = RunTracker::new();

    for (cell, y, x) in back.iter() {
        let position = y * cols + x;
        let differs = cell != front.cell_at(y, x)?;

        let event = match (mode, differs) {
            (DiffMode::Verbose, true) => Some(DiffEvent::Mismatch { y, x, position }),
            (DiffMode::Verbose, false) => None,
            (DiffMode::Runs, true) => tracker.mismatch(y, x, position),
            (DiffMode::Runs, false) => tracker.matched(),
        };
        events.extend(event);
    }

    events.extend(tracker.finish());

    debug!(
        ?mode,
        cells = back.area(),
        events = events.len(),
        "scan complete"
    );
    Ok(events)
}
