//! Play, history and self-test flows rendered to a text writer.

use crate::config::GameConfig;
use crate::controller::{Match, MatchEvent};
use crate::outcome::Outcome;
use crate::results::ResultLog;
use crate::self_test::{self, SelfTestReport};
use crate::sources::{MoveSource, RandomSource};
use noughts_grid::Mark;
use std::io::{self, Write};
use tracing::{info, instrument, warn};

/// A configured session: knows where results go and how to build the opponent.
#[derive(Debug, Clone)]
pub struct Session {
    config: GameConfig,
    log: ResultLog,
}

impl Session {
    /// Creates a session from configuration.
    #[instrument(skip(config), fields(log_path = %config.log_path().display()))]
    pub fn new(config: GameConfig) -> Self {
        let log = ResultLog::new(config.log_path());
        Self { config, log }
    }

    /// Session configuration.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The result log.
    pub fn log(&self) -> &ResultLog {
        &self.log
    }

    /// Random O player per configuration.
    pub fn opponent(&self) -> Box<dyn MoveSource> {
        let name = self.config.opponent_name().clone();
        match self.config.opponent_seed() {
            Some(seed) => Box::new(RandomSource::seeded(name, Mark::O, *seed)),
            None => Box::new(RandomSource::from_os_rng(name, Mark::O)),
        }
    }

    /// Plays one match, renders it to `out` and records the outcome.
    ///
    /// A failed log write is reported on `out`; the outcome is still
    /// returned.
    ///
    /// # Errors
    ///
    /// Returns an I/O error only if writing to `out` fails.
    #[instrument(skip_all)]
    pub fn play<W: Write>(
        &self,
        player_x: Box<dyn MoveSource>,
        player_o: Box<dyn MoveSource>,
        out: &mut W,
    ) -> io::Result<Outcome> {
        let mut game = Match::new(player_x, player_o)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;

        let mut write_error = None;
        let outcome = game.run(|event| {
            if write_error.is_some() {
                return;
            }
            if let Err(e) = render_event(out, event) {
                write_error = Some(e);
            }
        });
        if let Some(e) = write_error {
            return Err(e);
        }

        let token = outcome.token();
        match self.log.append(&token) {
            Ok(()) => writeln!(out, "Game result saved: {token}")?,
            Err(e) => {
                warn!(error = %e, "Could not save game result");
                writeln!(out, "Could not save game result to file: {e}")?;
                writeln!(out, "Displaying result instead: {token}")?;
            }
        }
        Ok(outcome)
    }

    /// Prints every recorded outcome followed by a summary.
    ///
    /// # Errors
    ///
    /// Returns an I/O error only if writing to `out` fails. Log read
    /// failures are reported on `out`.
    #[instrument(skip_all)]
    pub fn show_history<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let history = match self.log.read_all() {
            Ok(history) => history,
            Err(e) => {
                warn!(error = %e, "Could not open game results");
                writeln!(out, "Could not read game results: {e}")?;
                return Ok(());
            }
        };

        if history.is_missing() {
            writeln!(out, "No game results found.")?;
            return Ok(());
        }

        writeln!(out, "Previous Game Results:")?;
        let mut summary = crate::results::HistorySummary::default();
        for entry in history {
            match entry {
                Ok(token) => {
                    writeln!(out, "- {token}")?;
                    summary.record(&token);
                }
                Err(e) => {
                    writeln!(out, "Could not read game results: {e}")?;
                    break;
                }
            }
        }
        writeln!(out, "{summary}")?;
        info!(total = summary.total(), "History shown");
        Ok(())
    }

    /// Runs the built-in checks and prints one line per check.
    ///
    /// # Errors
    ///
    /// Returns an I/O error only if writing to `out` fails.
    #[instrument(skip_all)]
    pub fn run_self_test<W: Write>(&self, out: &mut W) -> io::Result<SelfTestReport> {
        writeln!(out, "Running Tests")?;
        let report = self_test::run();
        for check in report.results() {
            match check.failure() {
                None => writeln!(out, "{} ... ok", check.name())?,
                Some(why) => writeln!(out, "{} ... FAIL: {why}", check.name())?,
            }
        }
        writeln!(
            out,
            "{} passed, {} failed",
            report.passed(),
            report.failed()
        )?;
        Ok(report)
    }
}

fn render_event<W: Write>(out: &mut W, event: &MatchEvent) -> io::Result<()> {
    match event {
        MatchEvent::Started { grid } => writeln!(out, "{grid}\n"),
        MatchEvent::TurnStarted { .. } => Ok(()),
        MatchEvent::MoveMade {
            mark,
            position,
            grid,
        } => writeln!(out, "Player '{mark}' plays {position}\n{grid}\n"),
        MatchEvent::GameOver { outcome, .. } => writeln!(out, "{outcome}"),
    }
}
