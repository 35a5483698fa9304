//! The 3x3 grid and its single mutating operation.

use crate::position::Position;
use crate::rules;
use crate::types::{Cell, Mark};
use derive_more::{Display, Error};
use tracing::{debug, instrument};

/// Errors returned when placing through a raw board index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum PlaceError {
    /// Index outside `0..9`.
    #[display("Position {index} is out of range (must be 0-8)")]
    OutOfRange {
        /// The rejected index.
        index: usize,
    },
    /// Square already holds a mark.
    #[display("Square {position} is already occupied")]
    Occupied {
        /// The occupied square.
        position: Position,
    },
}

/// 3x3 grid of cells in row-major order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Grid {
    cells: [Cell; 9],
}

impl Grid {
    /// Creates an empty grid.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cell at `position`.
    pub fn get(&self, position: Position) -> Cell {
        self.cells[position.index()]
    }

    /// Checks if the square at `position` is empty.
    pub fn is_empty(&self, position: Position) -> bool {
        self.get(position) == Cell::Empty
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Places `mark` at `position` if the square is empty.
    ///
    /// Returns `false` and leaves the grid untouched when the square is
    /// already occupied.
    #[instrument(skip_all, fields(index = position.index(), mark = %mark))]
    pub fn place(&mut self, position: Position, mark: Mark) -> bool {
        if !self.is_empty(position) {
            debug!("Square occupied, placement rejected");
            return false;
        }
        self.cells[position.index()] = Cell::Occupied(mark);
        true
    }

    /// Places `mark` at a raw board index.
    ///
    /// # Errors
    ///
    /// Returns [`PlaceError::OutOfRange`] for an index outside `0..9` and
    /// [`PlaceError::Occupied`] when the square already holds a mark.
    #[instrument(skip(self))]
    pub fn place_index(&mut self, index: usize, mark: Mark) -> Result<Position, PlaceError> {
        let position = Position::try_from(index)?;
        if self.place(position, mark) {
            Ok(position)
        } else {
            Err(PlaceError::Occupied { position })
        }
    }

    /// Every empty square, ascending by index.
    pub fn available_moves(&self) -> Vec<Position> {
        Position::ALL
            .iter()
            .copied()
            .filter(|&pos| self.is_empty(pos))
            .collect()
    }

    /// Number of squares holding a mark.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| **c != Cell::Empty).count()
    }

    /// True once no empty square remains.
    pub fn is_full(&self) -> bool {
        rules::is_full(self)
    }

    /// True if `mark` fills any of the eight winning lines.
    pub fn has_line(&self, mark: Mark) -> bool {
        rules::has_line(self, mark)
    }

    /// The mark owning a completed line, if any.
    pub fn winner(&self) -> Option<Mark> {
        rules::check_winner(self)
    }
}

impl std::fmt::Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (row, cells) in self.cells.chunks(3).enumerate() {
            if row > 0 {
                writeln!(f)?;
                writeln!(f, "---------")?;
            }
            write!(
                f,
                "{} | {} | {}",
                cells[0].symbol(),
                cells[1].symbol(),
                cells[2].symbol()
            )?;
        }
        Ok(())
    }
}
