//! Game state module - manages the complete game state
//!
//! This module ties together the core components: board, outcome rules, and
//! the score tally. All mutation goes through [`GameState::apply_action`];
//! rejected moves leave every field untouched.

use crate::core::rules::{calculate_outcome, winning_line};
use crate::core::snapshot::GameSnapshot;
use crate::core::{Board, ScoreBoard};
use crate::types::{GameAction, Mark, Outcome, WinLine};

/// Complete game state for one session
#[derive(Debug, Clone, Copy)]
pub struct GameState {
    board: Board,
    /// Mark that moves next; flips on every accepted placement
    turn: Mark,
    outcome: Outcome,
    win_line: Option<WinLine>,
    scores: ScoreBoard,
    /// Monotonic round id (increments on round restart, back to 0 on reset)
    round_id: u32,
    /// Cell index of the most recent accepted move this round
    last_placed: Option<usize>,
}

impl GameState {
    /// Create a new session: empty board, X to move, zeroed tally
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            turn: Mark::X,
            outcome: Outcome::InProgress,
            win_line: None,
            scores: ScoreBoard::new(),
            round_id: 0,
            last_placed: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn turn(&self) -> Mark {
        self.turn
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn win_line(&self) -> Option<WinLine> {
        self.win_line
    }

    pub fn scores(&self) -> ScoreBoard {
        self.scores
    }

    pub fn round_id(&self) -> u32 {
        self.round_id
    }

    pub fn last_placed(&self) -> Option<usize> {
        self.last_placed
    }

    /// Apply a game action
    /// Returns true if the action changed the game state
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Place(index) => self.place(index),
            GameAction::NewRound => {
                self.start_round(self.round_id.wrapping_add(1));
                true
            }
            GameAction::ResetGame => {
                self.scores.reset();
                self.start_round(0);
                true
            }
        }
    }

    /// Place the current mark; silently rejected once the round is over or
    /// when the cell is taken or out of bounds
    fn place(&mut self, index: usize) -> bool {
        if self.outcome.is_terminal() {
            return false;
        }
        if !self.board.place(index, self.turn) {
            return false;
        }

        self.last_placed = Some(index);
        self.turn = self.turn.opponent();
        self.outcome = calculate_outcome(&self.board);
        self.win_line = winning_line(&self.board);

        // Placements only run while the round is in progress, so a terminal
        // outcome here is always a fresh transition: count it exactly once.
        if self.outcome.is_terminal() {
            self.scores.record(self.outcome);
        }

        true
    }

    /// Wipe the round state; the score tally is left alone
    fn start_round(&mut self, round_id: u32) {
        self.board = Board::new();
        self.turn = Mark::X;
        self.outcome = Outcome::InProgress;
        self.win_line = None;
        self.round_id = round_id;
        self.last_placed = None;
    }

    /// Export the current state for rendering
    pub fn snapshot(&self) -> GameSnapshot {
        let mut snapshot = GameSnapshot::default();
        self.snapshot_into(&mut snapshot);
        snapshot
    }

    /// Fill an existing snapshot in place
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.board = *self.board.cells();
        out.turn = self.turn;
        out.outcome = self.outcome;
        out.win_line = self.win_line;
        out.scores = self.scores;
        out.round = self.round_id;
        out.last_placed = self.last_placed;
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
