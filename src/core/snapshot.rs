//! Immutable view of the game state for the presentation layer

use crate::core::score::ScoreBoard;
use crate::types::{Cell, Mark, Outcome, WinLine, CELL_COUNT};

/// Everything the view needs to draw one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameSnapshot {
    /// Board cells, row-major
    pub board: [Cell; CELL_COUNT],
    /// Mark that moves next
    pub turn: Mark,
    pub outcome: Outcome,
    /// Matched triple behind a `Won` outcome, for highlighting
    pub win_line: Option<WinLine>,
    pub scores: ScoreBoard,
    /// Round counter, starting at 0 for the first round of a session
    pub round: u32,
    /// Cell of the most recent accepted move this round
    pub last_placed: Option<usize>,
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [None; CELL_COUNT],
            turn: Mark::X,
            outcome: Outcome::InProgress,
            win_line: None,
            scores: ScoreBoard::new(),
            round: 0,
            last_placed: None,
        }
    }
}
