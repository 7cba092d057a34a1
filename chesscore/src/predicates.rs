/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::{Board, Color, Square};

/// Returns `true` if (`row`, `col`) is on the board and holds no piece.
#[inline(always)]
pub fn is_empty(board: &Board, row: i8, col: i8) -> bool {
    Square::from_row_col(row, col).is_some_and(|square| !board.has(square))
}

/// Returns `true` if (`row`, `col`) is on the board and holds a piece of `color`.
///
/// # Example
/// ```
/// # use chesscore::*;
/// let board = Board::default();
/// assert!(is_piece_of(&board, Color::White, 0, 4));
/// assert!(!is_piece_of(&board, Color::White, 7, 4));
/// assert!(!is_piece_of(&board, Color::White, -1, 4));
/// ```
#[inline(always)]
pub fn is_piece_of(board: &Board, color: Color, row: i8, col: i8) -> bool {
    Square::from_row_col(row, col)
        .and_then(|square| board.color_at(square))
        .is_some_and(|occupant| occupant == color)
}

/// Returns `true` if (`row`, `col`) is on the board and is either empty or holds a piece that is an enemy of `color`.
///
/// This is the admission rule for every non-Pawn destination.
///
/// # Example
/// ```
/// # use chesscore::*;
/// let board = Board::default();
/// assert!(is_empty_or_enemy_of(&board, Color::White, 3, 3));
/// assert!(is_empty_or_enemy_of(&board, Color::White, 6, 3));
/// assert!(!is_empty_or_enemy_of(&board, Color::White, 1, 3));
/// assert!(!is_empty_or_enemy_of(&board, Color::White, 8, 3));
/// ```
#[inline(always)]
pub fn is_empty_or_enemy_of(board: &Board, color: Color, row: i8, col: i8) -> bool {
    Square::from_row_col(row, col).is_some_and(|square| board.color_at(square) != Some(color))
}

/// Returns `true` if (`row`, `col`) is on the board and is either empty or holds a Black piece.
#[inline(always)]
pub fn is_empty_or_enemy_of_white(board: &Board, row: i8, col: i8) -> bool {
    is_empty_or_enemy_of(board, Color::White, row, col)
}

/// Returns `true` if (`row`, `col`) is on the board and holds a White piece.
#[inline(always)]
pub fn is_white_piece(board: &Board, row: i8, col: i8) -> bool {
    is_piece_of(board, Color::White, row, col)
}

/// Returns `true` if (`row`, `col`) is on the board and is either empty or holds a White piece.
#[inline(always)]
pub fn is_empty_or_enemy_of_black(board: &Board, row: i8, col: i8) -> bool {
    is_empty_or_enemy_of(board, Color::Black, row, col)
}

/// Returns `true` if (`row`, `col`) is on the board and holds a Black piece.
#[inline(always)]
pub fn is_black_piece(board: &Board, row: i8, col: i8) -> bool {
    is_piece_of(board, Color::Black, row, col)
}
