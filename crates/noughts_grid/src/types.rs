//! Core domain types: marks and cells.

use derive_more::Display;

/// One of the two symbols a player places on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, strum::EnumIter)]
pub enum Mark {
    /// Crosses, always moves first.
    #[display("X")]
    X,
    /// Noughts.
    #[display("O")]
    O,
}

impl Mark {
    /// Returns the other mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// A single slot on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    /// Nothing placed yet.
    #[default]
    Empty,
    /// Holds a mark. Never reverts to empty.
    Occupied(Mark),
}

impl Cell {
    /// Character used when rendering the grid.
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => ' ',
            Cell::Occupied(Mark::X) => 'X',
            Cell::Occupied(Mark::O) => 'O',
        }
    }
}
