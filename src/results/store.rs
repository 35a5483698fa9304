//! CSV-backed result log: one single-field record per finished match.

use crate::outcome::OutcomeToken;
use crate::results::ResultLogError;
use derive_getters::Getters;
use std::fs::{File, OpenOptions};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument, warn};

/// Append-only log of match outcomes.
#[derive(Debug, Clone)]
pub struct ResultLog {
    path: PathBuf,
}

impl ResultLog {
    /// Creates a log backed by the file at `path`. Nothing is opened yet.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn new(path: impl AsRef<Path>) -> Self {
        debug!("Creating ResultLog");
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends one outcome record, creating the file if needed.
    ///
    /// # Errors
    ///
    /// Returns [`ResultLogError`] if the file cannot be opened or written.
    #[instrument(skip_all, fields(path = %self.path.display(), token = %token))]
    pub fn append(&self, token: &OutcomeToken) -> Result<(), ResultLogError> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| {
                ResultLogError::new(format!(
                    "Failed to open '{}' for append: {}",
                    self.path.display(),
                    e
                ))
            })?;

        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);
        writer.write_record([token.to_string()])?;
        writer.flush()?;

        info!("Game result recorded");
        Ok(())
    }

    /// Opens the log for lazy read-back.
    ///
    /// A missing file is an empty history, see [`History::is_missing`].
    ///
    /// # Errors
    ///
    /// Returns [`ResultLogError`] if the file exists but cannot be opened.
    #[instrument(skip(self), fields(path = %self.path.display()))]
    pub fn read_all(&self) -> Result<History, ResultLogError> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!("No result log yet");
                return Ok(History::missing());
            }
            Err(e) => {
                return Err(ResultLogError::new(format!(
                    "Failed to open '{}': {}",
                    self.path.display(),
                    e
                )));
            }
        };

        let reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(file);
        Ok(History {
            records: Some(reader.into_records()),
            missing: false,
        })
    }

    /// Tallies the whole log.
    ///
    /// # Errors
    ///
    /// Returns the first [`ResultLogError`] met while reading.
    #[instrument(skip(self))]
    pub fn summary(&self) -> Result<HistorySummary, ResultLogError> {
        let mut summary = HistorySummary::default();
        for token in self.read_all()? {
            summary.record(&token?);
        }
        info!(total = summary.total(), "History summarized");
        Ok(summary)
    }
}

/// Lazy sequence of recorded outcomes.
///
/// Owns the open file until dropped. After a read failure the error is
/// yielded once and iteration ends.
pub struct History {
    records: Option<csv::StringRecordsIntoIter<File>>,
    missing: bool,
}

impl History {
    fn missing() -> Self {
        Self {
            records: None,
            missing: true,
        }
    }

    /// True when the log file did not exist.
    pub fn is_missing(&self) -> bool {
        self.missing
    }
}

impl Iterator for History {
    type Item = Result<OutcomeToken, ResultLogError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let record = self.records.as_mut()?.next()?;
            match record {
                Ok(record) => match record.get(0).map(str::trim) {
                    Some(field) if !field.is_empty() => {
                        return Some(Ok(OutcomeToken::parse(field)));
                    }
                    _ => continue,
                },
                Err(e) => {
                    warn!(error = %e, "Result log read failed");
                    self.records = None;
                    return Some(Err(e.into()));
                }
            }
        }
    }
}

impl std::iter::FusedIterator for History {}

/// Outcome counts across the log.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Getters)]
pub struct HistorySummary {
    x_wins: usize,
    o_wins: usize,
    draws: usize,
    errors: usize,
    unrecognized: usize,
}

impl HistorySummary {
    /// Counts one token.
    pub fn record(&mut self, token: &OutcomeToken) {
        match token {
            OutcomeToken::X => self.x_wins += 1,
            OutcomeToken::O => self.o_wins += 1,
            OutcomeToken::Draw => self.draws += 1,
            OutcomeToken::Error => self.errors += 1,
            OutcomeToken::Unrecognized(_) => self.unrecognized += 1,
        }
    }

    /// Records counted, including unrecognized ones.
    pub fn total(&self) -> usize {
        self.x_wins + self.o_wins + self.draws + self.errors + self.unrecognized
    }
}

impl std::fmt::Display for HistorySummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} games: X won {}, O won {}, {} drawn, {} aborted",
            self.total(),
            self.x_wins,
            self.o_wins,
            self.draws,
            self.errors
        )?;
        if self.unrecognized > 0 {
            write!(f, ", {} unreadable", self.unrecognized)?;
        }
        Ok(())
    }
}
