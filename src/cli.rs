//! Command-line interface for noughts.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Noughts - play noughts and crosses against a random opponent
#[derive(Parser, Debug)]
#[command(name = "noughts")]
#[command(about = "Noughts and crosses against a random opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML configuration file (defaults apply if missing)
    #[arg(short, long, default_value = "noughts.toml")]
    pub config: PathBuf,

    /// Override the result log path
    #[arg(long)]
    pub log_path: Option<PathBuf>,

    /// Subcommand to run; shows the menu when omitted
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play one match as X
    Play {
        /// Read X's moves from a file (one integer per line) instead of the keyboard
        #[arg(short, long)]
        moves: Option<PathBuf>,

        /// Seed for the random opponent
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Run the built-in engine checks
    SelfTest,

    /// Show recorded match outcomes
    History,
}

impl From<noughts::menu::MenuChoice> for Command {
    fn from(choice: noughts::menu::MenuChoice) -> Self {
        use noughts::menu::MenuChoice;
        match choice {
            MenuChoice::Play => Command::Play {
                moves: None,
                seed: None,
            },
            MenuChoice::SelfTest => Command::SelfTest,
            MenuChoice::History => Command::History,
        }
    }
}
