//! Single-character text menu shown when no subcommand is given.

use derive_more::Display;
use std::io::{self, BufRead, Write};
use strum::IntoEnumIterator;
use tracing::{debug, instrument};

/// Menu entries in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, strum::EnumIter)]
pub enum MenuChoice {
    /// Play one match.
    #[display("Play Game")]
    Play,
    /// Run the built-in checks.
    #[display("Run Tests")]
    SelfTest,
    /// List recorded outcomes.
    #[display("View Game History")]
    History,
}

impl MenuChoice {
    /// Key the user types to select this entry.
    pub fn key(self) -> char {
        match self {
            MenuChoice::Play => '1',
            MenuChoice::SelfTest => '2',
            MenuChoice::History => '3',
        }
    }

    /// Parses a trimmed single-character selection.
    pub fn from_key(input: &str) -> Option<Self> {
        let mut chars = input.trim().chars();
        let key = chars.next()?;
        if chars.next().is_some() {
            return None;
        }
        Self::iter().find(|choice| choice.key() == key)
    }
}

/// Prints the menu and reads one selection.
///
/// Returns `Ok(None)` for anything that is not a menu key, including end of
/// input.
///
/// # Errors
///
/// Returns an I/O error if reading or writing fails.
#[instrument(skip_all)]
pub fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> io::Result<Option<MenuChoice>> {
    writeln!(out, "What do you want to do?")?;
    for choice in MenuChoice::iter() {
        writeln!(out, "{}. {}", choice.key(), choice)?;
    }
    write!(out, "Enter 1, 2 or 3: ")?;
    out.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    let choice = MenuChoice::from_key(&line);
    debug!(input = %line.trim(), ?choice, "Menu selection");
    Ok(choice)
}
