use anchor_lang::prelude::*;

use crate::constants::BOARD_CELLS;

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Default, PartialEq, Eq, Debug)]
pub enum Cell {
    #[default]
    Empty,
    Player1,
    Player2,
}

pub type Board = [Cell; BOARD_CELLS];

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum BoardStatus {
    Winner(Cell),
    Draw,
    Ongoing,
}

const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// Rows, columns, then diagonals; the first complete line decides.
pub fn evaluate(board: &Board) -> BoardStatus {
    for [a, b, c] in LINES {
        let mark = board[a];
        if mark != Cell::Empty && mark == board[b] && mark == board[c] {
            return BoardStatus::Winner(mark);
        }
    }

    if board.iter().all(|cell| *cell != Cell::Empty) {
        BoardStatus::Draw
    } else {
        BoardStatus::Ongoing
    }
}
