//! Match outcomes and their serialized tokens.

use derive_more::Display;
use noughts_grid::Mark;

/// How a match ended. Produced exactly once per match.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum Outcome {
    /// A mark completed a line.
    #[display("Player '{_0}' wins!")]
    Winner(Mark),
    /// Full grid, no line.
    #[display("It's a draw!")]
    Draw,
    /// A move source failed before the match could finish.
    #[display("Match aborted: {_0}")]
    Aborted(String),
}

impl Outcome {
    /// Token recorded in the result log.
    pub fn token(&self) -> OutcomeToken {
        OutcomeToken::from(self)
    }
}

/// Single-field value stored per line of the result log.
///
/// `Unrecognized` holds whatever a malformed line contained so that one bad
/// record never spoils the rest of the history.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display, strum::EnumString)]
pub enum OutcomeToken {
    /// X won.
    #[display("X")]
    X,
    /// O won.
    #[display("O")]
    O,
    /// Drawn match.
    #[display("Draw")]
    Draw,
    /// Aborted match.
    #[display("Error")]
    Error,
    /// Anything else found in the log.
    #[display("{_0}")]
    #[strum(default)]
    Unrecognized(String),
}

impl OutcomeToken {
    /// Parses a log field. Surrounding whitespace is ignored.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        trimmed
            .parse()
            .unwrap_or_else(|_| OutcomeToken::Unrecognized(trimmed.to_string()))
    }

    /// False for [`OutcomeToken::Unrecognized`].
    pub fn is_recognized(&self) -> bool {
        !matches!(self, OutcomeToken::Unrecognized(_))
    }
}

impl From<&Outcome> for OutcomeToken {
    fn from(outcome: &Outcome) -> Self {
        match outcome {
            Outcome::Winner(Mark::X) => OutcomeToken::X,
            Outcome::Winner(Mark::O) => OutcomeToken::O,
            Outcome::Draw => OutcomeToken::Draw,
            Outcome::Aborted(_) => OutcomeToken::Error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_for_each_outcome() {
        assert_eq!(Outcome::Winner(Mark::X).token().to_string(), "X");
        assert_eq!(Outcome::Winner(Mark::O).token().to_string(), "O");
        assert_eq!(Outcome::Draw.token().to_string(), "Draw");
        assert_eq!(
            Outcome::Aborted("no moves".into()).token().to_string(),
            "Error"
        );
    }

    #[test]
    fn parse_known_and_unknown_tokens() {
        assert_eq!(OutcomeToken::parse(" Draw "), OutcomeToken::Draw);
        assert_eq!(OutcomeToken::parse("O"), OutcomeToken::O);
        let odd = OutcomeToken::parse("draw?");
        assert_eq!(odd, OutcomeToken::Unrecognized("draw?".into()));
        assert!(!odd.is_recognized());
        assert_eq!(odd.to_string(), "draw?");
    }

    #[test]
    fn announcements() {
        assert_eq!(Outcome::Winner(Mark::O).to_string(), "Player 'O' wins!");
        assert_eq!(Outcome::Draw.to_string(), "It's a draw!");
    }
}
