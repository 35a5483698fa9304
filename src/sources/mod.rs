//! Move sources and their shared contract.

mod interactive;
mod random;
mod scripted;

pub use interactive::InteractiveSource;
pub use random::RandomSource;
pub use scripted::{ScriptError, ScriptedSource, parse_script};

use derive_more::{Display, Error};
use noughts_grid::{Grid, Mark, Position};

/// Why a move source could not produce a move.
///
/// Every variant is fatal to the current match. Retryable problems (bad
/// input, illegal squares) are handled inside the source.
#[derive(Debug, Display, Error)]
pub enum MoveSourceError {
    /// Scripted list ran out without a legal candidate.
    #[display("No more predefined moves provided ({consumed} consumed)")]
    Exhausted {
        /// Candidates consumed in total.
        consumed: usize,
    },
    /// Interactive input reached end of file.
    #[display("Input closed before a legal move was entered")]
    InputClosed,
    /// Reading or prompting failed.
    #[display("Move input failed: {source}")]
    Io {
        /// Underlying I/O error.
        source: std::io::Error,
    },
    /// The grid has no empty square.
    #[display("No legal moves available")]
    NoLegalMoves,
}

impl From<std::io::Error> for MoveSourceError {
    fn from(source: std::io::Error) -> Self {
        MoveSourceError::Io { source }
    }
}

/// Something that produces the next move for one mark.
///
/// The returned position must be empty on `grid`; implementations validate
/// and re-query internally rather than handing back an illegal square.
pub trait MoveSource {
    /// Produces the next legal move against `grid`.
    ///
    /// # Errors
    ///
    /// Returns [`MoveSourceError`] when no legal move can be produced.
    fn next_move(&mut self, grid: &Grid) -> Result<Position, MoveSourceError>;

    /// The mark this source plays.
    fn mark(&self) -> Mark;

    /// Display name for this player.
    fn name(&self) -> &str;
}
