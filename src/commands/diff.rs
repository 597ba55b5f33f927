//! Diff command handler

use anyhow::{Context, Result};
use std::io::{self, BufRead, Write};
use std::path::Path;

use snapdiff::render::Painter;
use snapdiff::{read_snapshot, write_diff, DiffMode};

/// Load both snapshots and write the report to stdout.
#[cfg(not(tarpaulin_include))]
pub fn handle_diff(front: &Path, back: &Path, mode: DiffMode, painter: &Painter) -> Result<()> {
    let front_snapshot = read_snapshot(front)
        .with_context(|| format!("Failed to load front snapshot: {}", front.display()))?;
    let back_snapshot = read_snapshot(back)
        .with_context(|| format!("Failed to load back snapshot: {}", back.display()))?;

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    let summary = write_diff(&front_snapshot, &back_snapshot, mode, painter, &mut out)?;

    if summary.is_empty() {
        tracing::debug!("snapshots are identical");
        return Ok(());
    }
    tracing::debug!(
        cells = summary.cells,
        runs = summary.runs,
        unterminated = summary.unterminated,
        "diff written"
    );
    Ok(())
}

/// Block until a line (or EOF) arrives on stdin.
#[cfg(not(tarpaulin_include))]
pub fn wait_for_enter() -> Result<()> {
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(())
}
