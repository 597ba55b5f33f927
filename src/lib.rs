//! snapdiff - compare binary terminal screen snapshots
//!
//! Decodes the front/back screen buffer dumps written by the editor's debug
//! build and reports the cells that differ between them.
//!
//! - [`snapshot`] - Snapshot model, decoder and encoder
//! - [`diff`] - Cell comparison, run detection and report output
//! - [`render`] - Truecolor rendering of cells
//! - [`config`] - Optional TOML configuration
//! - [`cli`] - Command-line definition

pub mod cli;
pub mod config;
pub mod diff;
pub mod render;
pub mod snapshot;

pub use config::Config;
pub use diff::{write_diff, DiffMode};
pub use snapshot::{decode, read_snapshot, Cell, Snapshot, SnapshotError};
