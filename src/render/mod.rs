//! Rendering of snapshot cells for the terminal.
//!
//! This module turns cells into truecolor escape sequences for the colored
//! diff spans, and into a readable text form for verbose listings.

mod ansi;
mod repr;

pub use ansi::{cell_colors_to_ansi, extract_channels, ColorMode, Painter, ANSI_RESET};
pub use repr::CellRepr;
