//! Board module - manages the 3x3 game grid
//!
//! Cells are stored in a flat array in row-major order (index = row * 3 + col),
//! indices 0..=8 reading left to right, top to bottom. Cells only ever go from
//! empty to marked; nothing un-marks a cell short of starting a new round.

use crate::types::{Cell, Mark, CELL_COUNT};

/// The game board - 3x3 grid using flat array storage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    /// Flat array of cells, row-major order
    cells: [Cell; CELL_COUNT],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; CELL_COUNT],
        }
    }

    /// Get cell at `index`
    /// Returns None if out of bounds
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Check if a cell is within bounds and still empty
    pub fn is_empty(&self, index: usize) -> bool {
        matches!(self.get(index), Some(None))
    }

    /// Place a mark at `index`
    /// Returns false if out of bounds or already occupied; the board is
    /// untouched in that case
    pub fn place(&mut self, index: usize, mark: Mark) -> bool {
        match self.cells.get_mut(index) {
            Some(slot) if slot.is_none() => {
                *slot = Some(mark);
                true
            }
            _ => false,
        }
    }

    /// Check if every cell holds a mark
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_some())
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    /// Create from a flat array for testing
    #[cfg(test)]
    pub fn from_cells(cells: [Cell; CELL_COUNT]) -> Self {
        Self { cells }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Mark::{O, X};

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        for index in 0..CELL_COUNT {
            assert_eq!(board.get(index), Some(None));
            assert!(board.is_empty(index));
        }
        assert!(!board.is_full());
    }

    #[test]
    fn test_place_and_get() {
        let mut board = Board::new();

        assert!(board.place(0, X));
        assert!(board.place(4, O));

        assert_eq!(board.get(0), Some(Some(X)));
        assert_eq!(board.get(4), Some(Some(O)));
        assert_eq!(board.get(8), Some(None));
    }

    #[test]
    fn test_place_rejects_occupied_cell() {
        let mut board = Board::new();

        assert!(board.place(4, X));
        assert!(!board.place(4, O));

        // The first mark stays.
        assert_eq!(board.get(4), Some(Some(X)));
    }

    #[test]
    fn test_out_of_bounds_access() {
        let mut board = Board::new();

        assert_eq!(board.get(CELL_COUNT), None);
        assert!(!board.is_empty(CELL_COUNT));
        assert!(!board.place(CELL_COUNT, X));
        assert!(!board.place(usize::MAX, O));
    }

    #[test]
    fn test_is_full() {
        let mut board = Board::new();
        for index in 0..CELL_COUNT {
            assert!(!board.is_full());
            let mark = if index % 2 == 0 { X } else { O };
            assert!(board.place(index, mark));
        }
        assert!(board.is_full());
    }

    #[test]
    fn test_from_cells() {
        let board = Board::from_cells([Some(X), None, None, None, Some(O), None, None, None, None]);
        assert_eq!(board.get(0), Some(Some(X)));
        assert_eq!(board.get(4), Some(Some(O)));
        assert!(board.is_empty(1));
    }
}
