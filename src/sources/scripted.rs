//! Pre-scripted move lists, typically loaded from a file.

use super::{MoveSource, MoveSourceError};
use derive_more::{Display, Error};
use noughts_grid::{Grid, Mark, Position};
use std::path::Path;
use tracing::{debug, info, instrument, warn};

/// Plays moves from a fixed list, skipping candidates that are illegal.
///
/// The cursor only moves forward. Once the list is used up without a legal
/// candidate, [`MoveSourceError::Exhausted`] is returned and the match is
/// aborted; there is no fallback to keyboard input.
#[derive(Debug, Clone)]
pub struct ScriptedSource {
    name: String,
    mark: Mark,
    moves: Vec<usize>,
    cursor: usize,
}

impl ScriptedSource {
    /// Creates a source from candidate board indices.
    pub fn new(name: impl Into<String>, mark: Mark, moves: Vec<usize>) -> Self {
        Self {
            name: name.into(),
            mark,
            moves,
            cursor: 0,
        }
    }

    /// Loads candidates from a text file, one integer per line.
    ///
    /// # Errors
    ///
    /// Returns [`ScriptError`] if the file cannot be read.
    #[instrument(skip(name, path), fields(path = %path.as_ref().display()))]
    pub fn from_file(
        name: impl Into<String>,
        mark: Mark,
        path: impl AsRef<Path>,
    ) -> Result<Self, ScriptError> {
        let text = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            ScriptError::new(format!(
                "Failed to read move script '{}': {}",
                path.as_ref().display(),
                e
            ))
        })?;
        let moves = parse_script(&text);
        info!(count = moves.len(), "Move script loaded");
        Ok(Self::new(name, mark, moves))
    }

    /// Candidates not yet consumed.
    pub fn remaining(&self) -> &[usize] {
        &self.moves[self.cursor..]
    }
}

/// Extracts one integer per line. Lines that are not plain digits are ignored.
pub fn parse_script(text: &str) -> Vec<usize> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && line.bytes().all(|b| b.is_ascii_digit()))
        .filter_map(|line| line.parse().ok())
        .collect()
}

impl MoveSource for ScriptedSource {
    #[instrument(skip_all, fields(player = %self.name, cursor = self.cursor))]
    fn next_move(&mut self, grid: &Grid) -> Result<Position, MoveSourceError> {
        while let Some(&candidate) = self.moves.get(self.cursor) {
            self.cursor += 1;
            match Position::from_index(candidate) {
                Some(pos) if grid.is_empty(pos) => {
                    debug!(position = candidate, "Scripted move");
                    return Ok(pos);
                }
                Some(_) => warn!(candidate, "Scripted move targets an occupied square, skipping"),
                None => warn!(candidate, "Scripted move out of range, skipping"),
            }
        }

        Err(MoveSourceError::Exhausted {
            consumed: self.cursor,
        })
    }

    fn mark(&self) -> Mark {
        self.mark
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Move script loading error.
#[derive(Debug, Clone, Display, Error)]
#[display("Script error: {} at {}:{}", message, file, line)]
pub struct ScriptError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ScriptError {
    /// Creates a new script error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
