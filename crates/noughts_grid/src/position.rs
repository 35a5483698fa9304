//! Validated board positions.

use crate::grid::PlaceError;
use tracing::instrument;

/// A square on the 3x3 grid, numbered 0-8 in row-major order.
///
/// Raw integers become positions only through [`Position::from_index`] or
/// `TryFrom<usize>`, both of which reject anything outside `0..9`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, strum::EnumIter)]
pub enum Position {
    /// Top-left (position 0)
    TopLeft = 0,
    /// Top-center (position 1)
    TopCenter = 1,
    /// Top-right (position 2)
    TopRight = 2,
    /// Middle-left (position 3)
    MiddleLeft = 3,
    /// Center (position 4)
    Center = 4,
    /// Middle-right (position 5)
    MiddleRight = 5,
    /// Bottom-left (position 6)
    BottomLeft = 6,
    /// Bottom-center (position 7)
    BottomCenter = 7,
    /// Bottom-right (position 8)
    BottomRight = 8,
}

impl Position {
    /// All 9 positions in ascending index order.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Board index (0-8).
    pub fn index(self) -> usize {
        self as usize
    }

    /// Creates a position from a board index, `None` if out of range.
    #[instrument]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Human-readable name of the square.
    pub fn label(self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }
}

impl TryFrom<usize> for Position {
    type Error = PlaceError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Self::from_index(index).ok_or(PlaceError::OutOfRange { index })
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.index(), self.label())
    }
}
