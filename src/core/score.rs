//! Score tally - cumulative per-session counters
//!
//! Wins are tracked per mark alongside a draw counter. The tally lives for
//! the whole session and survives round restarts; only a full game reset
//! zeroes it.

use crate::types::{Mark, Outcome};

/// Win and draw counts accumulated across rounds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScoreBoard {
    pub wins_x: u32,
    pub wins_o: u32,
    pub draws: u32,
}

impl ScoreBoard {
    /// Create a zeroed tally
    pub fn new() -> Self {
        Self::default()
    }

    /// Count a finished round; `InProgress` records nothing
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Won(Mark::X) => self.wins_x += 1,
            Outcome::Won(Mark::O) => self.wins_o += 1,
            Outcome::Draw => self.draws += 1,
            Outcome::InProgress => {}
        }
    }

    /// Wins recorded for one mark
    pub fn wins(&self, mark: Mark) -> u32 {
        match mark {
            Mark::X => self.wins_x,
            Mark::O => self.wins_o,
        }
    }

    /// Zero every counter
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_tally_is_zeroed() {
        let scores = ScoreBoard::new();
        assert_eq!(scores.wins_x, 0);
        assert_eq!(scores.wins_o, 0);
        assert_eq!(scores.draws, 0);
    }

    #[test]
    fn test_record_counts_by_outcome() {
        let mut scores = ScoreBoard::new();

        scores.record(Outcome::Won(Mark::X));
        scores.record(Outcome::Won(Mark::X));
        scores.record(Outcome::Won(Mark::O));
        scores.record(Outcome::Draw);

        assert_eq!(scores.wins_x, 2);
        assert_eq!(scores.wins_o, 1);
        assert_eq!(scores.draws, 1);
        assert_eq!(scores.wins(Mark::X), 2);
        assert_eq!(scores.wins(Mark::O), 1);
    }

    #[test]
    fn test_record_in_progress_is_a_no_op() {
        let mut scores = ScoreBoard::new();
        scores.record(Outcome::InProgress);
        assert_eq!(scores, ScoreBoard::new());
    }

    #[test]
    fn test_reset_zeroes_counters() {
        let mut scores = ScoreBoard::new();
        scores.record(Outcome::Won(Mark::O));
        scores.record(Outcome::Draw);

        scores.reset();

        assert_eq!(scores, ScoreBoard::new());
    }
}
