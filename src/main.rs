//! Noughts - terminal entry point.
//!
//! Shows the text menu, or runs a subcommand directly.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use noughts::{GameConfig, InteractiveSource, Mark, MoveSource, ScriptedSource, Session, menu};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    initialize_tracing();

    let cli = Cli::parse();
    let session = Session::new(load_config(&cli)?);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let command = match cli.command {
        Some(command) => command,
        None => match menu::prompt(&mut io::stdin().lock(), &mut out)? {
            Some(choice) => choice.into(),
            None => {
                writeln!(out, "Invalid choice.")?;
                return Ok(());
            }
        },
    };

    match command {
        Command::Play { moves, seed } => run_play(session, moves, seed, &mut out),
        Command::SelfTest => run_self_test(&session, &mut out),
        Command::History => Ok(session.show_history(&mut out)?),
    }
}

/// Installs the stderr subscriber so game output on stdout stays clean.
fn initialize_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();
}

/// Resolves configuration: defaults, TOML file, environment, then flags.
#[instrument(skip(cli), fields(config_path = %cli.config.display()))]
fn load_config(cli: &Cli) -> Result<GameConfig> {
    let mut config = GameConfig::load(&cli.config)?.with_env_overrides();
    if let Some(path) = &cli.log_path {
        info!(path = %path.display(), "Overriding log path");
        config = config.with_log_path(path);
    }
    Ok(config)
}

#[instrument(skip(session, out))]
fn run_play(
    session: Session,
    moves: Option<PathBuf>,
    seed: Option<u64>,
    out: &mut impl Write,
) -> Result<()> {
    let session = match seed {
        Some(seed) => Session::new(session.config().clone().with_opponent_seed(seed)),
        None => session,
    };
    let name = session.config().human_name().clone();

    let player_x: Box<dyn MoveSource> = match moves {
        Some(path) => Box::new(
            ScriptedSource::from_file(name, Mark::X, &path)
                .with_context(|| format!("loading moves from {}", path.display()))?,
        ),
        None => Box::new(InteractiveSource::stdio(name, Mark::X)),
    };

    let outcome = session.play(player_x, session.opponent(), out)?;
    info!(outcome = %outcome.token(), "Match complete");
    Ok(())
}

fn run_self_test(session: &Session, out: &mut impl Write) -> Result<()> {
    let report = session.run_self_test(out)?;
    if !report.all_passed() {
        anyhow::bail!("{} self-test check(s) failed", report.failed());
    }
    Ok(())
}
