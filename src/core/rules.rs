//! Outcome rules - win and draw detection
//!
//! The eight winning triples are scanned in the fixed `WIN_LINES` order
//! (rows, then columns, then diagonals); the first fully matched triple
//! decides the winner. A full board with no matched triple is a draw.

use crate::core::board::Board;
use crate::types::{Outcome, WinLine, WIN_LINES};

/// Find the first fully matched winning triple, if any
pub fn winning_line(board: &Board) -> Option<WinLine> {
    for cells in WIN_LINES {
        let [a, b, c] = cells;
        if let Some(Some(mark)) = board.get(a) {
            if board.get(b) == Some(Some(mark)) && board.get(c) == Some(Some(mark)) {
                return Some(WinLine { mark, cells });
            }
        }
    }
    None
}

/// Compute the round outcome for a board
///
/// Win takes precedence over draw; a board that is both full and matched
/// reports the win.
pub fn calculate_outcome(board: &Board) -> Outcome {
    if let Some(line) = winning_line(board) {
        return Outcome::Won(line.mark);
    }
    if board.is_full() {
        return Outcome::Draw;
    }
    Outcome::InProgress
}
