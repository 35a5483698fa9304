//! Pure game engine for 3x3 noughts and crosses.
//!
//! The crate has no I/O. It owns the grid, the two marks, validated board
//! positions and the fixed set of winning lines.
//!
//! # Example
//!
//! ```
//! use noughts_grid::{Grid, Mark, Position};
//!
//! let mut grid = Grid::new();
//! assert!(grid.place(Position::TopLeft, Mark::X));
//! assert!(!grid.place(Position::TopLeft, Mark::O));
//! assert_eq!(grid.available_moves().len(), 8);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod grid;
mod position;
mod rules;
mod types;

pub use grid::{Grid, PlaceError};
pub use position::Position;
pub use rules::LINES;
pub use types::{Cell, Mark};
