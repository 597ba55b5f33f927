//! Machine-readable cell representation for verbose output.

use std::fmt;

use crate::snapshot::Cell;

/// Displays a cell as `Cell(fg=#rrggbb, bg=#rrggbb, style=0000000, ch='x')`.
pub struct CellRepr<'a>(pub &'a Cell);

impl fmt::Display for CellRepr<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cell = self.0;
        write!(
            f,
            "Cell(fg=#{:06x}, bg=#{:06x}, style={:07b}, ch='{}')",
            cell.fg,
            cell.bg,
            cell.style,
            cell.ch.escape_debug()
        )
    }
}
