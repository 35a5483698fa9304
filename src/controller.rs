//! Turn loop between two move sources.

use crate::outcome::Outcome;
use crate::sources::MoveSource;
use derive_more::{Display, Error};
use noughts_grid::{Grid, Mark, Position};
use tracing::{debug, info, instrument, warn};

/// Lifecycle of a match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchState {
    /// Created, no move requested yet.
    NotStarted,
    /// Waiting on the active player.
    InProgress,
    /// A mark completed a line.
    Won(Mark),
    /// Full grid, no line.
    Drawn,
    /// A move source failed.
    Aborted(String),
}

impl MatchState {
    /// True for `Won`, `Drawn` and `Aborted`.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            MatchState::Won(_) | MatchState::Drawn | MatchState::Aborted(_)
        )
    }

    /// The outcome of a terminal state.
    pub fn outcome(&self) -> Option<Outcome> {
        match self {
            MatchState::Won(mark) => Some(Outcome::Winner(*mark)),
            MatchState::Drawn => Some(Outcome::Draw),
            MatchState::Aborted(reason) => Some(Outcome::Aborted(reason.clone())),
            MatchState::NotStarted | MatchState::InProgress => None,
        }
    }
}

/// Progress notifications emitted while a match runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchEvent {
    /// The match began on an empty grid.
    Started {
        /// Grid before the first move.
        grid: Grid,
    },
    /// A player was asked for a move.
    TurnStarted {
        /// Mark to move.
        mark: Mark,
        /// Player name.
        player: String,
    },
    /// A move was applied.
    MoveMade {
        /// Mark placed.
        mark: Mark,
        /// Square played.
        position: Position,
        /// Grid after the move.
        grid: Grid,
    },
    /// The match reached a terminal state.
    GameOver {
        /// Final outcome.
        outcome: Outcome,
        /// Final grid.
        grid: Grid,
    },
}

/// Errors building a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum MatchError {
    /// A source was placed in the slot of the other mark.
    #[display("Source for {slot} plays {found}")]
    MarkMismatch {
        /// Slot being filled.
        slot: Mark,
        /// Mark the source reports.
        found: Mark,
    },
}

/// Owns the grid and both players and alternates turns until the end.
pub struct Match {
    grid: Grid,
    player_x: Box<dyn MoveSource>,
    player_o: Box<dyn MoveSource>,
    active: Mark,
    state: MatchState,
    moves_played: usize,
}

impl Match {
    /// Creates a match. X moves first.
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::MarkMismatch`] if a source plays the wrong mark.
    pub fn new(
        player_x: Box<dyn MoveSource>,
        player_o: Box<dyn MoveSource>,
    ) -> Result<Self, MatchError> {
        for (slot, source) in [(Mark::X, &player_x), (Mark::O, &player_o)] {
            if source.mark() != slot {
                return Err(MatchError::MarkMismatch {
                    slot,
                    found: source.mark(),
                });
            }
        }

        Ok(Self {
            grid: Grid::new(),
            player_x,
            player_o,
            active: Mark::X,
            state: MatchState::NotStarted,
            moves_played: 0,
        })
    }

    /// Current state.
    pub fn state(&self) -> &MatchState {
        &self.state
    }

    /// Current grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Mark whose turn it is (or whose move ended the match).
    pub fn active(&self) -> Mark {
        self.active
    }

    /// Moves applied so far.
    pub fn moves_played(&self) -> usize {
        self.moves_played
    }

    /// Runs turns until a terminal state and returns the outcome.
    ///
    /// A finished match returns its stored outcome without emitting events.
    #[instrument(skip_all)]
    pub fn run<F>(&mut self, mut observer: F) -> Outcome
    where
        F: FnMut(&MatchEvent),
    {
        if let Some(outcome) = self.state.outcome() {
            return outcome;
        }

        info!(
            x = %self.player_x.name(),
            o = %self.player_o.name(),
            "Match started"
        );
        self.state = MatchState::InProgress;
        observer(&MatchEvent::Started {
            grid: self.grid.clone(),
        });

        loop {
            if let Some(outcome) = self.play_turn(&mut observer) {
                info!(outcome = %outcome.token(), moves = self.moves_played, "Match finished");
                observer(&MatchEvent::GameOver {
                    outcome: outcome.clone(),
                    grid: self.grid.clone(),
                });
                return outcome;
            }
        }
    }

    /// Plays one turn, returning the outcome if it ended the match.
    fn play_turn<F>(&mut self, observer: &mut F) -> Option<Outcome>
    where
        F: FnMut(&MatchEvent),
    {
        let mark = self.active;
        let source = match mark {
            Mark::X => &mut self.player_x,
            Mark::O => &mut self.player_o,
        };
        let player = source.name().to_string();

        observer(&MatchEvent::TurnStarted {
            mark,
            player: player.clone(),
        });

        let position = match source.next_move(&self.grid) {
            Ok(position) => position,
            Err(e) => {
                warn!(player = %player, error = %e, "Move source failed, aborting match");
                return Some(self.finish(MatchState::Aborted(e.to_string())));
            }
        };

        if !self.grid.place(position, mark) {
            warn!(player = %player, position = position.index(), "Move source returned an occupied square");
            return Some(self.finish(MatchState::Aborted(format!(
                "{player} played occupied square {position}"
            ))));
        }
        self.moves_played += 1;
        debug!(player = %player, position = position.index(), "Move applied");

        observer(&MatchEvent::MoveMade {
            mark,
            position,
            grid: self.grid.clone(),
        });

        if self.grid.has_line(mark) {
            return Some(self.finish(MatchState::Won(mark)));
        }
        if self.grid.is_full() {
            return Some(self.finish(MatchState::Drawn));
        }

        self.active = mark.opponent();
        None
    }

    fn finish(&mut self, state: MatchState) -> Outcome {
        self.state = state;
        // Only called with terminal states.
        self.state
            .outcome()
            .unwrap_or_else(|| Outcome::Aborted("match ended in a non-terminal state".into()))
    }
}
