//! Writes scan results as terminal output.

use std::io::{self, Write};

use crate::render::{CellRepr, Painter};
use crate::snapshot::{Snapshot, SnapshotError};

use super::scanner::{scan, DiffEvent, DiffMode, Run};

/// Totals for a finished diff, logged once the report is written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DiffSummary {
    /// Number of differing cells
    pub cells: usize,
    /// Number of runs (always zero in verbose mode)
    pub runs: usize,
    /// Whether the last run reached the end of the grid
    pub unterminated: bool,
}

impl DiffSummary {
    /// True when the snapshots are identical.
    pub fn is_empty(&self) -> bool {
        self.cells == 0
    }
}

/// Errors from writing a diff report.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error(transparent)]
    Snapshot(#[from] SnapshotError),

    #[error("failed to write diff output: {0}")]
    Write(#[from] io::Error),
}

/// Compare two snapshots and write the report to `out`.
pub fn write_diff<W: Write>(
    front: &Snapshot,
    back: &Snapshot,
    mode: DiffMode,
    painter: &Painter,
    out: &mut W,
) -> Result<DiffSummary, ReportError> {
    let events = scan(front, back, mode)?;
    let mut summary = DiffSummary::default();

    for event in &events {
        match *event {
            DiffEvent::Mismatch { y, x, .. } => {
                summary.cells += 1;
                write_mismatch(front, back, y, x, painter, out)?;
            }
            DiffEvent::RunOpened { y, x, position } => {
                summary.runs += 1;
                writeln!(out, "diff at {}, {}, position {}:", y, x, position)?;
            }
            DiffEvent::RunClosed(run) => {
                summary.cells += run.length;
                write_run(front, back, run, painter, out)?;
            }
            DiffEvent::Unterminated(run) => {
                summary.cells += run.length;
                summary.unterminated = true;
                write_fallback(front, painter, out)?;
            }
        }
    }

    out.flush()?;
    Ok(summary)
}

/// Verbose line: colored front cell, arrow, colored back cell, then both reprs.
fn write_mismatch<W: Write>(
    front: &Snapshot,
    back: &Snapshot,
    y: usize,
    x: usize,
    painter: &Painter,
    out: &mut W,
) -> Result<(), ReportError> {
    let before = front.cell_at(y, x)?;
    let after = back.cell_at(y, x)?;
    writeln!(
        out,
        "{}{} -> {}{}\t{} -> {}",
        painter.cell(before),
        painter.reset(),
        painter.cell(after),
        painter.reset(),
        CellRepr(before),
        CellRepr(after)
    )?;
    Ok(())
}

/// The run's span from `front` on one line, then the same span from `back`.
fn write_run<W: Write>(
    front: &Snapshot,
    back: &Snapshot,
    run: Run,
    painter: &Painter,
    out: &mut W,
) -> Result<(), ReportError> {
    for snapshot in [front, back] {
        let span = snapshot.span(run.start, run.length)?;
        writeln!(out, "{}{}", painter.cells(span), painter.reset())?;
    }
    Ok(())
}

/// A run reached the end of the grid: show the whole front grid instead.
fn write_fallback<W: Write>(
    front: &Snapshot,
    painter: &Painter,
    out: &mut W,
) -> Result<(), ReportError> {
    writeln!(out)?;
    writeln!(out, "{}{}", painter.cells(front.cells()), painter.reset())?;
    Ok(())
}
