//! Core module - pure game logic with no external dependencies
//!
//! This module contains the game rules, state management, and score tally.
//! It has zero dependencies on UI or I/O.

pub mod board;
pub mod game_state;
pub mod rules;
pub mod score;
pub mod snapshot;

// Re-export commonly used types
pub use board::Board;
pub use game_state::GameState;
pub use rules::{calculate_outcome, winning_line};
pub use score::ScoreBoard;
pub use snapshot::GameSnapshot;
