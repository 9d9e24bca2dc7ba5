//! Core types shared across the application
//! This module contains pure data types with no external dependencies

/// Board side length in cells
pub const BOARD_SIDE: usize = 3;

/// Total number of cells on the board
pub const CELL_COUNT: usize = BOARD_SIDE * BOARD_SIDE;

/// The eight winning triples, as row-major cell indices.
///
/// Scan order is fixed: the 3 rows, then the 3 columns, then the 2
/// diagonals. The first fully matched triple decides the winner.
pub const WIN_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// Player marks (X always moves first in a fresh round)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    /// The mark that moves after this one
    pub fn opponent(&self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    /// Display letter
    pub fn as_str(&self) -> &'static str {
        match self {
            Mark::X => "X",
            Mark::O => "O",
        }
    }
}

/// A board cell: empty or holding a mark
pub type Cell = Option<Mark>;

/// Round outcome, derived from the board after each accepted move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    InProgress,
    Won(Mark),
    Draw,
}

impl Outcome {
    /// Won and Draw both end the round; no move is accepted until restart
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }
}

/// The first fully matched winning triple on a board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinLine {
    pub mark: Mark,
    /// Cell indices of the matched triple, in `WIN_LINES` order
    pub cells: [usize; 3],
}

impl WinLine {
    /// Whether the triple runs through the given cell
    pub fn contains(&self, index: usize) -> bool {
        self.cells.contains(&index)
    }
}

/// Game actions
///
/// The only operations the engine accepts: place a mark, restart the
/// round keeping the tally, or reset the whole session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Place the current mark at a cell index (0-8, row-major)
    Place(usize),
    /// Fresh board, X to move; score tally untouched
    NewRound,
    /// Fresh board plus a zeroed score tally
    ResetGame,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent_alternates() {
        assert_eq!(Mark::X.opponent(), Mark::O);
        assert_eq!(Mark::O.opponent(), Mark::X);
        assert_eq!(Mark::X.opponent().opponent(), Mark::X);
    }

    #[test]
    fn test_outcome_terminality() {
        assert!(!Outcome::InProgress.is_terminal());
        assert!(Outcome::Won(Mark::X).is_terminal());
        assert!(Outcome::Won(Mark::O).is_terminal());
        assert!(Outcome::Draw.is_terminal());
    }

    #[test]
    fn test_win_lines_cover_rows_columns_diagonals() {
        assert_eq!(WIN_LINES.len(), 8);

        // Rows first, then columns, then diagonals.
        assert_eq!(WIN_LINES[0], [0, 1, 2]);
        assert_eq!(WIN_LINES[2], [6, 7, 8]);
        assert_eq!(WIN_LINES[3], [0, 3, 6]);
        assert_eq!(WIN_LINES[5], [2, 5, 8]);
        assert_eq!(WIN_LINES[6], [0, 4, 8]);
        assert_eq!(WIN_LINES[7], [2, 4, 6]);

        for line in WIN_LINES {
            for index in line {
                assert!(index < CELL_COUNT);
            }
        }
    }

    #[test]
    fn test_win_line_contains() {
        let line = WinLine {
            mark: Mark::X,
            cells: [0, 4, 8],
        };
        assert!(line.contains(4));
        assert!(!line.contains(1));
    }
}
