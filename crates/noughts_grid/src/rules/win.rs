//! Win detection.

use crate::{Cell, Grid, Mark, Position};

/// The eight winning triples: three rows, three columns, two diagonals.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// True if every square of some line holds `mark`.
pub(crate) fn has_line(grid: &Grid, mark: Mark) -> bool {
    LINES
        .iter()
        .any(|line| line.iter().all(|&pos| grid.get(pos) == Cell::Occupied(mark)))
}

/// Returns the mark that completed a line, if any.
pub(crate) fn check_winner(grid: &Grid) -> Option<Mark> {
    for [a, b, c] in LINES {
        let cell = grid.get(a);
        if cell != Cell::Empty && cell == grid.get(b) && cell == grid.get(c) {
            return match cell {
                Cell::Occupied(mark) => Some(mark),
                Cell::Empty => None,
            };
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_winner_empty_board() {
        let grid = Grid::new();
        assert_eq!(check_winner(&grid), None);
        assert!(!has_line(&grid, Mark::X));
        assert!(!has_line(&grid, Mark::O));
    }

    #[test]
    fn test_winner_top_row() {
        let mut grid = Grid::new();
        grid.place(Position::TopLeft, Mark::X);
        grid.place(Position::TopCenter, Mark::X);
        assert!(!has_line(&grid, Mark::X));
        grid.place(Position::TopRight, Mark::X);
        assert!(has_line(&grid, Mark::X));
        assert_eq!(check_winner(&grid), Some(Mark::X));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let mut grid = Grid::new();
        grid.place(Position::TopRight, Mark::O);
        grid.place(Position::Center, Mark::O);
        grid.place(Position::BottomLeft, Mark::O);
        assert!(has_line(&grid, Mark::O));
        assert!(!has_line(&grid, Mark::X));
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let mut grid = Grid::new();
        grid.place(Position::TopLeft, Mark::X);
        grid.place(Position::TopCenter, Mark::O);
        grid.place(Position::TopRight, Mark::X);
        assert_eq!(check_winner(&grid), None);
    }

    #[test]
    fn test_lines_match_index_triples() {
        let expected = [
            [0, 1, 2],
            [3, 4, 5],
            [6, 7, 8],
            [0, 3, 6],
            [1, 4, 7],
            [2, 5, 8],
            [0, 4, 8],
            [2, 4, 6],
        ];
        for (line, indices) in LINES.iter().zip(expected) {
            let actual = line.map(Position::index);
            assert_eq!(actual, indices);
        }
    }
}
