/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use anyhow::{bail, Result};

use super::{generate_moves, Board, Move, Square, NO_SQUARE};

/// Moves the piece on `from` to `to`, if `to` is one of its destinations according to [`generate_moves`].
///
/// Returns `true` if the board was changed. If either square is `None`, or `to` is not reachable,
/// returns `false` and leaves the board exactly as it was.
///
/// # Example
/// ```
/// # use chesscore::*;
/// let mut board = Board::default();
/// assert!(apply_move(&mut board, Some(Square::E2), Some(Square::E4)));
/// assert_eq!(board.to_fen(), "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR");
///
/// assert!(!apply_move(&mut board, Some(Square::E4), Some(Square::E6)));
/// assert!(!apply_move(&mut board, None, Some(Square::E5)));
/// ```
pub fn apply_move(board: &mut Board, from: Option<Square>, to: Option<Square>) -> bool {
    let (Some(from), Some(to)) = (from, to) else {
        return false;
    };

    if !generate_moves(board, from).contains(to) {
        return false;
    }

    board.make_move_unchecked(Move::new(from, to));
    true
}

/// Like [`apply_move`], but takes raw indices as supplied by an external caller.
///
/// [`NO_SQUARE`] for either endpoint means no move was requested, and yields `false`.
///
/// # Panics
/// If either index is neither [`NO_SQUARE`] nor in `0..64`. Callers must only pass indices of real squares.
///
/// # Example
/// ```
/// # use chesscore::*;
/// let mut board = Board::default();
/// assert!(!apply_move_at_index(&mut board, NO_SQUARE, 5));
/// assert!(apply_move_at_index(&mut board, 1, 18));
/// assert_eq!(board.piece_at(Square::C3).unwrap().kind(), PieceKind::Knight);
/// ```
pub fn apply_move_at_index(board: &mut Board, from: i32, to: i32) -> bool {
    if from == NO_SQUARE || to == NO_SQUARE {
        return false;
    }

    let from = Square::from_raw(from);
    let to = Square::from_raw(to);
    assert!(from.is_some(), "source square must be in 0..64");
    assert!(to.is_some(), "destination square must be in 0..64");

    apply_move(board, from, to)
}

/// Applies `mv` if it is one of the moves [`generate_moves`] allows, otherwise returns an `Err` explaining why not.
///
/// The board is only modified on `Ok`.
///
/// # Example
/// ```
/// # use chesscore::*;
/// let mut board = Board::default();
/// assert!(try_apply_move(&mut board, Move::from_uci("g1f3").unwrap()).is_ok());
/// assert!(try_apply_move(&mut board, Move::from_uci("a1a3").unwrap()).is_err());
/// assert!(try_apply_move(&mut board, Move::from_uci("e4e5").unwrap()).is_err());
/// ```
pub fn try_apply_move(board: &mut Board, mv: Move) -> Result<()> {
    let (from, to) = mv.parts();

    let Some(piece) = board.piece_at(from) else {
        bail!("No piece on {from} to move");
    };

    if !generate_moves(board, from).contains(to) {
        bail!("{piece:?} on {from} cannot move to {to}");
    }

    board.make_move_unchecked(mv);
    Ok(())
}
