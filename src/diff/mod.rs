//! Snapshot comparison.
//!
//! - [`scanner`] - Row-major comparison and run detection
//! - [`report`] - Rendering scan results to an output stream
//!
//! # Usage
//!
//! ```
//! use snapdiff::diff::{write_diff, DiffMode};
//! use snapdiff::render::Painter;
//! use snapdiff::snapshot::Snapshot;
//!
//! let front = Snapshot::from_lines(&["hello"], 0xffffff, 0).unwrap();
//! let back = Snapshot::from_lines(&["hallo"], 0xffffff, 0).unwrap();
//!
//! let mut out = Vec::new();
//! write_diff(&front, &back, DiffMode::Runs, &Painter::plain(), &mut out).unwrap();
//! assert_eq!(String::from_utf8(out).unwrap(), "diff at 0, 1, position 1:\ne\na\n");
//! ```

mod report;
mod scanner;

pub use report::{write_diff, DiffSummary, ReportError};
pub use scanner::{scan, DiffEvent, DiffMode, Run, RunTracker};
