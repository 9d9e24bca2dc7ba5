//! Cell cursor for keyboard-driven placement
//!
//! The cursor is presentation-side state; the engine never sees it. Moves
//! wrap around the grid edges.

use crate::types::{BOARD_SIDE, CELL_COUNT};

/// Currently selected cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    row: usize,
    col: usize,
}

impl Cursor {
    /// Start on the center cell
    pub fn new() -> Self {
        Self {
            row: BOARD_SIDE / 2,
            col: BOARD_SIDE / 2,
        }
    }

    /// Flat cell index under the cursor (row-major)
    pub fn index(&self) -> usize {
        self.row * BOARD_SIDE + self.col
    }

    pub fn move_left(&mut self) {
        self.col = (self.col + BOARD_SIDE - 1) % BOARD_SIDE;
    }

    pub fn move_right(&mut self) {
        self.col = (self.col + 1) % BOARD_SIDE;
    }

    pub fn move_up(&mut self) {
        self.row = (self.row + BOARD_SIDE - 1) % BOARD_SIDE;
    }

    pub fn move_down(&mut self) {
        self.row = (self.row + 1) % BOARD_SIDE;
    }

    /// Jump straight to a cell index; out-of-range indices are ignored
    ///
    /// Digit-key selection goes through here so the cursor stays on the
    /// cell that was just played.
    pub fn set_index(&mut self, index: usize) {
        if index < CELL_COUNT {
            self.row = index / BOARD_SIDE;
            self.col = index % BOARD_SIDE;
        }
    }
}

impl Default for Cursor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_starts_on_center_cell() {
        assert_eq!(Cursor::new().index(), 4);
    }

    #[test]
    fn test_moves_follow_the_grid() {
        let mut cursor = Cursor::new();
        cursor.move_up();
        assert_eq!(cursor.index(), 1);
        cursor.move_left();
        assert_eq!(cursor.index(), 0);
        cursor.move_down();
        assert_eq!(cursor.index(), 3);
        cursor.move_right();
        assert_eq!(cursor.index(), 4);
    }

    #[test]
    fn test_moves_wrap_at_edges() {
        let mut cursor = Cursor::new();
        cursor.set_index(0);

        cursor.move_left();
        assert_eq!(cursor.index(), 2);
        cursor.move_right();
        assert_eq!(cursor.index(), 0);

        cursor.move_up();
        assert_eq!(cursor.index(), 6);
        cursor.move_down();
        assert_eq!(cursor.index(), 0);
    }

    #[test]
    fn test_set_index_jumps_and_ignores_out_of_range() {
        let mut cursor = Cursor::new();

        cursor.set_index(7);
        assert_eq!(cursor.index(), 7);

        cursor.set_index(CELL_COUNT);
        assert_eq!(cursor.index(), 7);
    }
}
