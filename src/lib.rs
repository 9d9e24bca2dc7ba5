//! Terminal Tic-Tac-Toe.
//!
//! The crate splits into a pure, deterministic game core and a terminal
//! presentation layer:
//!
//! - [`core`]: board, outcome rules, score tally, and the game state engine
//! - [`input`]: key-event mapping and the cell cursor
//! - [`term`]: framebuffer, game view, and the crossterm-backed renderer
//! - [`types`]: plain data types shared by all of the above

pub mod core;
pub mod input;
pub mod term;
pub mod types;
