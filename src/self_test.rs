//! Built-in engine checks behind the "Run Tests" menu entry.

use crate::controller::Match;
use crate::outcome::Outcome;
use crate::results::ResultLog;
use crate::sources::{MoveSource, MoveSourceError, ScriptedSource};
use derive_getters::Getters;
use derive_new::new;
use noughts_grid::{Cell, Grid, LINES, Mark, Position};
use strum::IntoEnumIterator;
use tracing::{info, instrument, warn};

type Check = fn() -> Result<(), String>;

const CHECKS: &[(&str, Check)] = &[
    ("test_board_update", check_board_update),
    ("test_available_moves", check_available_moves),
    ("test_check_winner", check_winner_lines),
    ("test_draw", check_draw),
    ("test_scripted_match_terminates", check_scripted_match),
    ("test_missing_history_is_empty", check_missing_history),
];

/// Result of one named check.
#[derive(Debug, Clone, PartialEq, Eq, Getters, new)]
pub struct CheckResult {
    #[getter(skip)]
    name: &'static str,
    failure: Option<String>,
}

impl CheckResult {
    /// Name of the check.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// True when the check passed.
    pub fn passed(&self) -> bool {
        self.failure.is_none()
    }
}

/// All check results in execution order.
#[derive(Debug, Clone, Getters)]
pub struct SelfTestReport {
    results: Vec<CheckResult>,
}

impl SelfTestReport {
    /// Number of passing checks.
    pub fn passed(&self) -> usize {
        self.results.iter().filter(|r| r.passed()).count()
    }

    /// Number of failing checks.
    pub fn failed(&self) -> usize {
        self.results.len() - self.passed()
    }

    /// True if nothing failed.
    pub fn all_passed(&self) -> bool {
        self.failed() == 0
    }
}

/// Runs every check.
#[instrument]
pub fn run() -> SelfTestReport {
    let results: Vec<CheckResult> = CHECKS
        .iter()
        .map(|&(name, check)| {
            let failure = check().err();
            if let Some(why) = &failure {
                warn!(check = name, reason = %why, "Self-test failed");
            }
            CheckResult::new(name, failure)
        })
        .collect();

    let report = SelfTestReport { results };
    info!(passed = report.passed(), failed = report.failed(), "Self-test complete");
    report
}

fn ensure(condition: bool, message: impl Into<String>) -> Result<(), String> {
    if condition {
        Ok(())
    } else {
        Err(message.into())
    }
}

fn check_board_update() -> Result<(), String> {
    for pos in Position::ALL {
        let mut grid = Grid::new();
        ensure(grid.place(pos, Mark::X), format!("first placement at {pos} rejected"))?;
        ensure(!grid.place(pos, Mark::O), format!("second placement at {pos} accepted"))?;
        ensure(
            grid.get(pos) == Cell::Occupied(Mark::X),
            format!("mark at {pos} overwritten"),
        )?;
    }
    Ok(())
}

fn check_available_moves() -> Result<(), String> {
    let mut grid = Grid::new();
    grid.place(Position::TopLeft, Mark::X);
    grid.place(Position::Center, Mark::O);
    let available = grid.available_moves();
    ensure(available.len() == 7, format!("expected 7 moves, got {}", available.len()))?;
    ensure(
        !available.contains(&Position::TopLeft) && !available.contains(&Position::Center),
        "occupied squares listed as available",
    )
}

fn check_winner_lines() -> Result<(), String> {
    for line in LINES {
        for mark in Mark::iter() {
            let mut grid = Grid::new();
            for pos in line {
                grid.place(pos, mark);
            }
            ensure(grid.has_line(mark), format!("{mark} line {line:?} not detected"))?;
            ensure(
                !grid.has_line(mark.opponent()),
                format!("{} credited with {mark}'s line", mark.opponent()),
            )?;
        }
    }
    Ok(())
}

fn check_draw() -> Result<(), String> {
    use Mark::{O, X};
    let mut grid = Grid::new();
    for (pos, mark) in Position::ALL.into_iter().zip([X, O, X, X, O, O, O, X, X]) {
        grid.place(pos, mark);
    }
    ensure(grid.is_full(), "drawn board not full")?;
    ensure(
        !grid.has_line(X) && !grid.has_line(O),
        "drawn board reports a line",
    )
}

fn check_scripted_match() -> Result<(), String> {
    let mut game = Match::new(
        Box::new(ScriptedSource::new("Script", Mark::X, vec![0, 4, 1, 3, 2])),
        Box::new(HighestFree),
    )
    .map_err(|e| e.to_string())?;
    let outcome = game.run(|_| {});
    ensure(game.moves_played() <= 9, "more than nine moves applied")?;
    ensure(
        matches!(outcome, Outcome::Winner(_) | Outcome::Draw),
        format!("expected a win or draw, got {outcome}"),
    )
}

/// Always-legal O player: takes the highest-numbered empty square.
struct HighestFree;

impl MoveSource for HighestFree {
    fn next_move(&mut self, grid: &Grid) -> Result<Position, MoveSourceError> {
        grid.available_moves()
            .last()
            .copied()
            .ok_or(MoveSourceError::NoLegalMoves)
    }

    fn mark(&self) -> Mark {
        Mark::O
    }

    fn name(&self) -> &str {
        "Highest free"
    }
}

fn check_missing_history() -> Result<(), String> {
    let path = unused_log_path(&std::env::temp_dir())?;
    let history = ResultLog::new(&path)
        .read_all()
        .map_err(|e| e.to_string())?;
    ensure(history.is_missing(), "missing log not flagged")?;
    ensure(history.count() == 0, "missing log yielded records")
}

/// First nonexistent `noughts-self-test-<pid>-<n>.csv` in `dir`.
fn unused_log_path(dir: &std::path::Path) -> Result<std::path::PathBuf, String> {
    (0..1_000u32)
        .map(|n| dir.join(format!("noughts-self-test-{}-{n}.csv", std::process::id())))
        .find(|path| !path.exists())
        .ok_or_else(|| format!("no unused log path in {}", dir.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_checks_pass() {
        let report = run();
        assert_eq!(report.results().len(), CHECKS.len());
        let failures: Vec<_> = report
            .results()
            .iter()
            .filter(|r| !r.passed())
            .collect();
        assert!(failures.is_empty(), "failures: {failures:?}");
        assert!(report.all_passed());
    }

    #[test]
    fn log_path_skips_existing_files() {
        let dir = tempfile::tempdir().unwrap();
        let first = unused_log_path(dir.path()).unwrap();
        std::fs::write(&first, "X\n").unwrap();

        let second = unused_log_path(dir.path()).unwrap();
        assert_ne!(first, second);
        assert!(!second.exists());
        assert!(first.exists());
    }

    #[test]
    fn check_names_outlive_the_report() {
        let names: Vec<&'static str> = run().results().iter().map(|r| r.name()).collect();
        assert_eq!(names.first(), Some(&"test_board_update"));
    }
}
