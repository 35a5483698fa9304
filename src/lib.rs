//! Noughts - terminal noughts and crosses against a random opponent.
//!
//! # Architecture
//!
//! - **Grid**: pure engine from the `noughts_grid` crate
//! - **Sources**: where moves come from (keyboard, script, random opponent)
//! - **Controller**: alternating-turn loop producing one [`Outcome`] per match
//! - **Results**: append-only CSV log of outcomes with lazy history read-back
//! - **Session**: play, history and self-test flows rendered to a writer
//!
//! # Example
//!
//! ```no_run
//! use noughts::{GameConfig, Mark, ScriptedSource, Session};
//!
//! # fn example() -> std::io::Result<()> {
//! let session = Session::new(GameConfig::default().with_opponent_seed(7));
//! let player_x = Box::new(ScriptedSource::new("Script", Mark::X, vec![4, 0, 8, 2, 6]));
//! let outcome = session.play(player_x, session.opponent(), &mut std::io::stdout())?;
//! println!("{}", outcome.token());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod controller;
mod outcome;
mod results;
mod session;
mod sources;

pub mod menu;
pub mod self_test;

// Crate-level exports - Configuration
pub use config::{ConfigError, GameConfig, LOG_PATH_ENV};

// Crate-level exports - Match control
pub use controller::{Match, MatchError, MatchEvent, MatchState};

// Crate-level exports - Outcomes
pub use outcome::{Outcome, OutcomeToken};

// Crate-level exports - Result log
pub use results::{History, HistorySummary, ResultLog, ResultLogError};

// Crate-level exports - Session flows
pub use session::Session;

// Crate-level exports - Move sources
pub use sources::{
    InteractiveSource, MoveSource, MoveSourceError, RandomSource, ScriptError, ScriptedSource,
    parse_script,
};

// Crate-level exports - Grid types
pub use noughts_grid::{Cell, Grid, LINES, Mark, PlaceError, Position};
