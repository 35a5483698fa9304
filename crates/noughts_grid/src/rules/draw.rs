//! Full-board detection.

use crate::{Cell, Grid};

/// Checks if every square is occupied.
///
/// A full grid with no winner is a draw.
pub(crate) fn is_full(grid: &Grid) -> bool {
    grid.cells().iter().all(|c| *c != Cell::Empty)
}
