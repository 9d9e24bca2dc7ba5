//! Board tests - grid behavior through the public API

use tui_tictactoe::core::Board;
use tui_tictactoe::types::Mark::{O, X};
use tui_tictactoe::types::CELL_COUNT;

#[test]
fn test_board_new_empty() {
    let board = Board::new();

    assert_eq!(board.cells().len(), CELL_COUNT);
    for index in 0..CELL_COUNT {
        assert!(board.is_empty(index), "Cell {} should be empty", index);
        assert_eq!(board.get(index), Some(None));
    }
    assert!(!board.is_full());
}

#[test]
fn test_board_get_out_of_bounds() {
    let board = Board::new();

    assert_eq!(board.get(CELL_COUNT), None);
    assert_eq!(board.get(100), None);
}

#[test]
fn test_board_place_and_get() {
    let mut board = Board::new();

    assert!(board.place(4, X));
    assert_eq!(board.get(4), Some(Some(X)));
    assert!(!board.is_empty(4));

    assert!(board.place(0, O));
    assert_eq!(board.get(0), Some(Some(O)));

    // Untouched cells stay empty.
    assert_eq!(board.get(8), Some(None));
}

#[test]
fn test_board_place_occupied_rejected() {
    let mut board = Board::new();

    assert!(board.place(4, X));
    assert!(!board.place(4, O));
    assert!(!board.place(4, X));

    assert_eq!(board.get(4), Some(Some(X)));
}

#[test]
fn test_board_place_out_of_bounds_rejected() {
    let mut board = Board::new();

    assert!(!board.place(CELL_COUNT, X));
    assert!(!board.place(usize::MAX, X));

    for index in 0..CELL_COUNT {
        assert!(board.is_empty(index));
    }
}

#[test]
fn test_board_is_full_progression() {
    let mut board = Board::new();

    for index in 0..CELL_COUNT {
        assert!(!board.is_full());
        let mark = if index % 2 == 0 { X } else { O };
        board.place(index, mark);
    }

    assert!(board.is_full());
}

#[test]
fn test_board_cells_reflect_placements() {
    let mut board = Board::new();
    board.place(2, X);
    board.place(6, O);

    let cells = board.cells();
    assert_eq!(cells[2], Some(X));
    assert_eq!(cells[6], Some(O));
    assert_eq!(cells.iter().filter(|c| c.is_some()).count(), 2);
}
