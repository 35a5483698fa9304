//! Computer opponent that picks uniformly among empty squares.

use super::{MoveSource, MoveSourceError};
use noughts_grid::{Grid, Mark, Position};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use tracing::{debug, instrument};

/// Random-choice opponent over an injected generator.
#[derive(Debug, Clone)]
pub struct RandomSource<R = StdRng> {
    name: String,
    mark: Mark,
    rng: R,
}

impl<R: Rng> RandomSource<R> {
    /// Creates an opponent drawing from `rng`.
    pub fn new(name: impl Into<String>, mark: Mark, rng: R) -> Self {
        Self {
            name: name.into(),
            mark,
            rng,
        }
    }
}

impl RandomSource<StdRng> {
    /// Reproducible opponent.
    pub fn seeded(name: impl Into<String>, mark: Mark, seed: u64) -> Self {
        Self::new(name, mark, StdRng::seed_from_u64(seed))
    }

    /// Opponent seeded from the operating system.
    pub fn from_os_rng(name: impl Into<String>, mark: Mark) -> Self {
        Self::new(name, mark, StdRng::from_os_rng())
    }
}

impl<R: Rng> MoveSource for RandomSource<R> {
    #[instrument(skip_all, fields(player = %self.name))]
    fn next_move(&mut self, grid: &Grid) -> Result<Position, MoveSourceError> {
        let pos = grid
            .available_moves()
            .choose(&mut self.rng)
            .copied()
            .ok_or(MoveSourceError::NoLegalMoves)?;
        debug!(position = pos.index(), "Opponent chose position");
        Ok(pos)
    }

    fn mark(&self) -> Mark {
        self.mark
    }

    fn name(&self) -> &str {
        &self.name
    }
}
