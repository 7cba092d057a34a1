/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::{
    is_empty, is_empty_or_enemy_of, is_piece_of, Board, Color, Move, MoveList, PieceKind, Square,
    SquareSet,
};

/// A `(row, column)` displacement on the board.
pub type Offset = (i8, i8);

/// The eight L-shaped jumps of a Knight.
pub const KNIGHT_OFFSETS: [Offset; 8] = [
    (-1, 2),
    (1, 2),
    (-2, 1),
    (2, 1),
    (-2, -1),
    (2, -1),
    (-1, -2),
    (1, -2),
];

/// The eight single steps of a King.
pub const KING_OFFSETS: [Offset; 8] = [
    (-1, 1),
    (0, 1),
    (1, 1),
    (-1, 0),
    (1, 0),
    (-1, -1),
    (0, -1),
    (1, -1),
];

/// The four orthogonal rays of a Rook.
pub const ROOK_DIRECTIONS: [Offset; 4] = [(0, 1), (-1, 0), (1, 0), (0, -1)];

/// The four diagonal rays of a Bishop.
pub const BISHOP_DIRECTIONS: [Offset; 4] = [(-1, 1), (1, 1), (-1, -1), (1, -1)];

/// All eight rays of a Queen.
pub const QUEEN_DIRECTIONS: [Offset; 8] = [
    (-1, 1),
    (0, 1),
    (1, 1),
    (-1, 0),
    (1, 0),
    (-1, -1),
    (0, -1),
    (1, -1),
];

/// How a [`PieceKind`] travels across the board.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Movement {
    /// Forward pushes and diagonal captures, depending on color.
    Pawn,

    /// A single hop to each offset.
    Step(&'static [Offset]),

    /// Repeated steps along each direction until blocked.
    Slide(&'static [Offset]),
}

impl Movement {
    /// Fetch the [`Movement`] rule for the provided [`PieceKind`].
    ///
    /// # Example
    /// ```
    /// # use chesscore::*;
    /// assert_eq!(Movement::of(PieceKind::Rook), Movement::Slide(&ROOK_DIRECTIONS));
    /// assert_eq!(Movement::of(PieceKind::Knight), Movement::Step(&KNIGHT_OFFSETS));
    /// ```
    #[inline(always)]
    pub const fn of(kind: PieceKind) -> Self {
        match kind {
            PieceKind::Pawn => Self::Pawn,
            PieceKind::Knight => Self::Step(&KNIGHT_OFFSETS),
            PieceKind::King => Self::Step(&KING_OFFSETS),
            PieceKind::Bishop => Self::Slide(&BISHOP_DIRECTIONS),
            PieceKind::Rook => Self::Slide(&ROOK_DIRECTIONS),
            PieceKind::Queen => Self::Slide(&QUEEN_DIRECTIONS),
        }
    }
}

/// Computes every square the piece on `from` may move to under basic movement rules.
///
/// Returns an empty set if `from` holds no piece.
///
/// Only the shape of each piece's movement is considered: checks, castling, en passant,
/// promotion and whose turn it is are left to the caller.
///
/// # Example
/// ```
/// # use chesscore::*;
/// let board = Board::default();
/// let knight_moves = generate_moves(&board, Square::B1);
/// assert_eq!(knight_moves.iter().collect::<Vec<_>>(), [Square::A3, Square::C3]);
/// assert!(generate_moves(&board, Square::E4).is_empty());
/// ```
pub fn generate_moves(board: &Board, from: Square) -> SquareSet {
    let Some(piece) = board.piece_at(from) else {
        return SquareSet::EMPTY;
    };

    let color = piece.color();
    let row = from.row() as i8;
    let col = from.col() as i8;

    match Movement::of(piece.kind()) {
        Movement::Pawn => pawn_moves(board, color, row, col),
        Movement::Step(offsets) => step_moves(board, color, row, col, offsets),
        Movement::Slide(directions) => slide_moves(board, color, row, col, directions),
    }
}

/// Like [`generate_moves`], but takes a raw index as supplied by an external caller.
///
/// Any index outside `0..64` (including [`NO_SQUARE`](crate::NO_SQUARE)) yields an empty set.
///
/// # Example
/// ```
/// # use chesscore::*;
/// let board = Board::default();
/// assert_eq!(generate_moves_at_index(&board, 12).len(), 2);
/// assert!(generate_moves_at_index(&board, NO_SQUARE).is_empty());
/// assert!(generate_moves_at_index(&board, 64).is_empty());
/// ```
#[inline(always)]
pub fn generate_moves_at_index(board: &Board, index: i32) -> SquareSet {
    Square::from_raw(index)
        .map(|from| generate_moves(board, from))
        .unwrap_or_default()
}

/// Generates every [`Move`] available to the pieces of `color`, ordered by source square.
///
/// # Example
/// ```
/// # use chesscore::*;
/// let board = Board::default();
/// assert_eq!(generate_moves_for(&board, Color::White).len(), 20);
/// assert_eq!(generate_moves_for(&board, Color::Black).len(), 20);
/// ```
pub fn generate_moves_for(board: &Board, color: Color) -> MoveList {
    let mut moves = MoveList::new();

    for (from, piece) in board.iter() {
        if piece.color() != color {
            continue;
        }

        for to in generate_moves(board, from) {
            moves.push(Move::new(from, to));
        }
    }

    moves
}

/// Adds (`row`, `col`) to `moves`. Callers have already established that it is on the board.
#[inline(always)]
fn insert(moves: &mut SquareSet, row: i8, col: i8) {
    if let Some(square) = Square::from_row_col(row, col) {
        moves.insert(square);
    }
}

/// Pushes and captures for a Pawn of `color` on (`row`, `col`).
///
/// The double push only looks at its landing square, and the diagonal captures are
/// considered whether or not the square straight ahead is blocked.
fn pawn_moves(board: &Board, color: Color, row: i8, col: i8) -> SquareSet {
    let mut moves = SquareSet::EMPTY;
    let forward = color.pawn_direction();
    let ahead = row + forward;

    if row == color.pawn_start_row() as i8 && is_empty(board, row + 2 * forward, col) {
        insert(&mut moves, row + 2 * forward, col);
    }

    if is_empty(board, ahead, col) {
        insert(&mut moves, ahead, col);
    }

    // No en passant and no promotion
    for target in [col - 1, col + 1] {
        if is_piece_of(board, color.opponent(), ahead, target) {
            insert(&mut moves, ahead, target);
        }
    }

    moves
}

/// Single hops for Knights and Kings. No castling.
fn step_moves(board: &Board, color: Color, row: i8, col: i8, offsets: &[Offset]) -> SquareSet {
    let mut moves = SquareSet::EMPTY;

    for &(drow, dcol) in offsets {
        let (r, c) = (row + drow, col + dcol);
        if is_empty_or_enemy_of(board, color, r, c) {
            insert(&mut moves, r, c);
        }
    }

    moves
}

/// Rays for Bishops, Rooks and Queens.
///
/// Each ray covers every empty square up to the first blocker; the blocker itself is included only if it is an enemy.
fn slide_moves(
    board: &Board,
    color: Color,
    row: i8,
    col: i8,
    directions: &[Offset],
) -> SquareSet {
    let mut moves = SquareSet::EMPTY;

    for &(drow, dcol) in directions {
        let (mut r, mut c) = (row + drow, col + dcol);

        while is_empty(board, r, c) {
            insert(&mut moves, r, c);
            r += drow;
            c += dcol;
        }

        if is_piece_of(board, color.opponent(), r, c) {
            insert(&mut moves, r, c);
        }
    }

    moves
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Piece, FEN_KIWIPETE, FEN_STARTPOS};

    /// Checks if `moves` and `expected` contain all the same elements, ignoring order
    fn sets_match(moves: SquareSet, expected: &[Square]) {
        assert_eq!(
            moves.len(),
            expected.len(),
            "\nMoves: {moves:?}\nExpected: {expected:?}"
        );

        for mv in moves {
            assert!(expected.contains(&mv), "{mv} not found in {expected:?}");
        }
    }

    fn board_with(pieces: &[(char, Square)]) -> Board {
        let mut board = Board::new();
        for &(c, square) in pieces {
            board.place(Piece::from_uci(c).unwrap(), square);
        }
        board
    }

    fn indices(moves: SquareSet) -> Vec<usize> {
        moves.iter().map(|square| square.index()).collect()
    }

    #[test]
    fn empty_squares_have_no_moves() {
        let board = Board::default();
        for square in Square::iter().filter(|&sq| !board.has(sq)) {
            assert!(generate_moves(&board, square).is_empty(), "{square}");
        }
    }

    #[test]
    fn raw_index_out_of_range_has_no_moves() {
        let board = Board::default();
        for index in [-1, -64, 64, 1000] {
            assert!(generate_moves_at_index(&board, index).is_empty());
        }
    }

    #[test]
    fn rook_stops_at_and_includes_capture() {
        let board = board_with(&[('R', Square::new(0, 0)), ('p', Square::new(0, 5))]);
        let moves = generate_moves(&board, Square::A1);

        // Row 0 up to the capture, then the whole of column 0
        let mut expected: Vec<usize> = vec![1, 2, 3, 4, 5];
        expected.extend((1..8).map(|row| row * 8));
        expected.sort();
        assert_eq!(indices(moves), expected);
    }

    #[test]
    fn rook_along_row_zero_only() {
        // Friendly Pawn on a2 shuts the column, enemy Pawn on f1 ends the row
        let board = board_with(&[
            ('R', Square::A1),
            ('P', Square::A2),
            ('p', Square::F1),
        ]);
        assert_eq!(indices(generate_moves(&board, Square::A1)), [1, 2, 3, 4, 5]);
    }

    #[test]
    fn rook_blockers() {
        // . . . . . . . .
        // . . . . . . . .
        // . . . p . . . .
        // . . . . . . . .
        // . . N R . . . .
        // . . . . . . . .
        // . . . . . . . .
        // . . . . . . . .
        let board = board_with(&[
            ('R', Square::D4),
            ('N', Square::C4),
            ('p', Square::D6),
        ]);

        let legal = [
            Square::D5,
            Square::D6,
            Square::D3,
            Square::D2,
            Square::D1,
            Square::E4,
            Square::F4,
            Square::G4,
            Square::H4,
        ];

        sets_match(generate_moves(&board, Square::D4), &legal);
    }

    #[test]
    fn bishop_rays() {
        let board = board_with(&[
            ('b', Square::C1),
            ('p', Square::B2),
            ('Q', Square::F4),
        ]);

        sets_match(
            generate_moves(&board, Square::C1),
            &[Square::D2, Square::E3, Square::F4],
        );
    }

    #[test]
    fn queen_on_empty_board_reaches_27_squares() {
        let board = board_with(&[('Q', Square::D4)]);
        let moves = generate_moves(&board, Square::D4);
        assert_eq!(moves.len(), 27);
        assert!(!moves.contains(Square::D4));
        assert!(moves.contains(Square::A1));
        assert!(moves.contains(Square::H8));
        assert!(moves.contains(Square::A7));
        assert!(moves.contains(Square::G1));
    }

    #[test]
    fn sliders_never_pass_the_first_blocker() {
        let board = Board::from_fen(FEN_KIWIPETE).unwrap();

        for (from, piece) in board.iter().filter(|(_, p)| p.kind().is_slider()) {
            let Movement::Slide(directions) = Movement::of(piece.kind()) else {
                unreachable!();
            };
            let moves = generate_moves(&board, from);

            for &(drow, dcol) in directions {
                let mut square = from.offset(drow, dcol);
                while let Some(sq) = square {
                    match board.piece_at(sq) {
                        None => assert!(moves.contains(sq)),
                        Some(blocker) => {
                            assert_eq!(moves.contains(sq), blocker.color() != piece.color());
                            break;
                        }
                    }
                    square = sq.offset(drow, dcol);
                }

                // Nothing beyond the first blocker on this ray
                if let Some(mut sq) = square {
                    while let Some(next) = sq.offset(drow, dcol) {
                        assert!(!moves.contains(next), "{piece:?} on {from} passed {sq}");
                        sq = next;
                    }
                }
            }
        }
    }

    #[test]
    fn knight_and_king_use_fixed_offsets() {
        let board = Board::from_fen(FEN_KIWIPETE).unwrap();

        for (from, piece) in board.iter() {
            let Movement::Step(offsets) = Movement::of(piece.kind()) else {
                continue;
            };

            let expected = offsets
                .iter()
                .filter_map(|&(dr, dc)| from.offset(dr, dc))
                .filter(|&sq| board.color_at(sq) != Some(piece.color()))
                .collect::<SquareSet>();

            assert_eq!(generate_moves(&board, from), expected, "{piece:?} on {from}");
        }
    }

    #[test]
    fn knight_in_corner() {
        let board = board_with(&[('n', Square::H8), ('n', Square::F7), ('P', Square::G6)]);
        sets_match(generate_moves(&board, Square::H8), &[Square::G6]);
    }

    #[test]
    fn king_captures_but_does_not_castle() {
        let board = Board::from_fen("8/8/8/8/8/8/3p4/R3K2R").unwrap();
        sets_match(
            generate_moves(&board, Square::E1),
            &[Square::D1, Square::F1, Square::D2, Square::E2, Square::F2],
        );
    }

    #[test]
    fn white_pawn_double_step_from_start() {
        let board = Board::default();
        sets_match(generate_moves(&board, Square::E2), &[Square::E3, Square::E4]);
    }

    #[test]
    fn black_pawn_double_step_from_start() {
        let board = Board::default();
        sets_match(generate_moves(&board, Square::D7), &[Square::D6, Square::D5]);
    }

    #[test]
    fn pawn_off_start_row_steps_once() {
        let board = board_with(&[('P', Square::E3), ('p', Square::C6)]);
        sets_match(generate_moves(&board, Square::E3), &[Square::E4]);
        sets_match(generate_moves(&board, Square::C6), &[Square::C5]);
    }

    #[test]
    fn pawn_diagonals_need_an_enemy() {
        let board = board_with(&[
            ('P', Square::E4),
            ('p', Square::D5),
            ('P', Square::F5),
        ]);
        sets_match(generate_moves(&board, Square::E4), &[Square::E5, Square::D5]);
    }

    #[test]
    fn blocked_pawn_still_captures_diagonally() {
        let board = board_with(&[
            ('P', Square::E4),
            ('P', Square::E5),
            ('p', Square::F5),
        ]);
        sets_match(generate_moves(&board, Square::E4), &[Square::F5]);

        let board = board_with(&[
            ('p', Square::D5),
            ('n', Square::D4),
            ('Q', Square::C4),
            ('R', Square::E4),
        ]);
        sets_match(generate_moves(&board, Square::D5), &[Square::C4, Square::E4]);
    }

    #[test]
    fn double_step_only_checks_its_landing_square() {
        // The square in between is occupied, but the landing square is free
        let board = board_with(&[('P', Square::A2), ('n', Square::A3)]);
        sets_match(generate_moves(&board, Square::A2), &[Square::A4]);

        let board = board_with(&[('P', Square::A2), ('n', Square::A4)]);
        sets_match(generate_moves(&board, Square::A2), &[Square::A3]);
    }

    #[test]
    fn pawn_on_last_row_has_no_moves() {
        let board = board_with(&[('P', Square::C8), ('p', Square::F1)]);
        assert!(generate_moves(&board, Square::C8).is_empty());
        assert!(generate_moves(&board, Square::F1).is_empty());
    }

    #[test]
    fn pawns_on_the_edge_only_look_inward() {
        let board = board_with(&[('P', Square::A3), ('p', Square::B4), ('p', Square::H5)]);
        sets_match(generate_moves(&board, Square::A3), &[Square::A4, Square::B4]);
    }

    #[test]
    fn destinations_never_hold_friendly_pieces() {
        for fen in [FEN_STARTPOS, FEN_KIWIPETE] {
            let board = Board::from_fen(fen).unwrap();
            for (from, piece) in board.iter() {
                for to in generate_moves(&board, from) {
                    assert_ne!(to, from);
                    assert_ne!(board.color_at(to), Some(piece.color()), "{from}{to}");
                }
            }
        }
    }

    #[test]
    fn moves_for_a_side_match_per_square_generation() {
        let board = Board::from_fen(FEN_KIWIPETE).unwrap();

        for color in Color::all() {
            let moves = generate_moves_for(&board, color);
            let expected = board
                .iter()
                .filter(|(_, piece)| piece.color() == color)
                .map(|(from, _)| generate_moves(&board, from).len())
                .sum::<usize>();

            assert_eq!(moves.len(), expected);
            assert!(moves
                .iter()
                .all(|mv| board.color_at(mv.from()) == Some(color)));
        }
    }
}
