//! Keyboard player reading moves line by line.

use super::{MoveSource, MoveSourceError};
use noughts_grid::{Grid, Mark, Position};
use std::io::{self, BufRead, StdinLock, Stdout, Write};
use tracing::{debug, instrument};

/// Prompts for a move and re-prompts until a legal square is entered.
pub struct InteractiveSource<R, W> {
    name: String,
    mark: Mark,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> InteractiveSource<R, W> {
    /// Creates a source reading from `input` and prompting on `output`.
    pub fn new(name: impl Into<String>, mark: Mark, input: R, output: W) -> Self {
        Self {
            name: name.into(),
            mark,
            input,
            output,
        }
    }

    /// Consumes the source, returning the prompt writer.
    pub fn into_output(self) -> W {
        self.output
    }
}

impl InteractiveSource<StdinLock<'static>, Stdout> {
    /// Source bound to the process's stdin and stdout.
    pub fn stdio(name: impl Into<String>, mark: Mark) -> Self {
        Self::new(name, mark, io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> MoveSource for InteractiveSource<R, W> {
    #[instrument(skip_all, fields(player = %self.name, mark = %self.mark))]
    fn next_move(&mut self, grid: &Grid) -> Result<Position, MoveSourceError> {
        loop {
            write!(
                self.output,
                "Player '{}', enter your move (0-8): ",
                self.mark
            )?;
            self.output.flush()?;

            let mut buf = Vec::new();
            if self.input.read_until(b'\n', &mut buf)? == 0 {
                return Err(MoveSourceError::InputClosed);
            }

            let line = String::from_utf8_lossy(&buf);
            let Ok(index) = line.trim().parse::<usize>() else {
                debug!(input = %line.trim(), "Not a number");
                writeln!(self.output, "Please enter a number between 0 and 8.")?;
                continue;
            };

            match Position::from_index(index).filter(|&pos| grid.is_empty(pos)) {
                Some(pos) => {
                    debug!(position = pos.index(), "Move accepted");
                    return Ok(pos);
                }
                None => {
                    debug!(index, "Illegal square");
                    writeln!(self.output, "Invalid move. Try again.")?;
                }
            }
        }
    }

    fn mark(&self) -> Mark {
        self.mark
    }

    fn name(&self) -> &str {
        &self.name
    }
}
