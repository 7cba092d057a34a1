/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::{fmt, ops::Index, str::FromStr};

use anyhow::{bail, Result};

use super::{Color, Move, Piece, PieceKind, Square, FEN_STARTPOS};

/// Represents all pieces and their locations on a chess board.
///
/// Has no knowledge of turns, castling rights, en passant, or move counters; those belong to whoever owns the board.
///
/// Internally this is a flat mailbox of exactly 64 cells, indexed row-major by [`Square`].
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    mailbox: [Option<Piece>; Square::COUNT],
}

impl Board {
    /// Creates a new, empty [`Board`] containing no pieces.
    ///
    /// # Example
    /// ```
    /// # use chesscore::Board;
    /// let board = Board::new();
    /// assert_eq!(board.to_fen(), "8/8/8/8/8/8/8/8");
    /// ```
    #[inline(always)]
    pub const fn new() -> Self {
        Self {
            mailbox: [None; Square::COUNT],
        }
    }

    /// Constructs a [`Board`] from the piece placements of a FEN string.
    ///
    /// Anything after the first space (side to move, castling, etc.) is ignored.
    /// Uppercase letters are White pieces and the first rank listed is row 7.
    pub fn from_fen(fen: &str) -> Result<Self> {
        let mut board = Self::new();

        let placements = fen.split_whitespace().next().unwrap_or_default();

        if placements.matches('/').count() != 7 {
            bail!("Missing placements for all 8 ranks.");
        }

        // Reversed so that White's back rank ends up on row 0
        for (row, placements) in placements.split('/').rev().enumerate() {
            let mut col = 0;

            for piece_char in placements.chars() {
                if col >= Square::SIDE {
                    bail!("Too many squares on rank {} of FEN {fen:?}", row + 1);
                }

                if let Ok(piece) = Piece::from_uci(piece_char) {
                    board.place(piece, Square::new(row as u8, col));
                    col += 1;
                } else {
                    let Some(empty) = piece_char.to_digit(10) else {
                        bail!("Found non-piece, non-numeric char {piece_char:?} when parsing FEN.");
                    };
                    col += empty as u8;
                }
            }

            if col != Square::SIDE {
                bail!(
                    "Rank {} of FEN {fen:?} describes {col} squares instead of 8",
                    row + 1
                );
            }
        }

        Ok(board)
    }

    /// Generates the FEN piece placements of this [`Board`].
    ///
    /// # Example
    /// ```
    /// # use chesscore::{Board, FEN_STARTPOS};
    /// assert_eq!(Board::default().to_fen(), FEN_STARTPOS);
    /// ```
    pub fn to_fen(&self) -> String {
        let mut ranks = Vec::with_capacity(Square::SIDE as usize);

        for row in (0..Square::SIDE).rev() {
            let mut rank = String::with_capacity(Square::SIDE as usize);
            let mut empty_spaces = 0;

            for col in 0..Square::SIDE {
                if let Some(piece) = self.piece_at(Square::new(row, col)) {
                    if empty_spaces != 0 {
                        rank += &empty_spaces.to_string();
                        empty_spaces = 0;
                    }
                    rank.push(piece.char());
                } else {
                    empty_spaces += 1;
                }
            }

            if empty_spaces != 0 {
                rank += &empty_spaces.to_string();
            }
            ranks.push(rank);
        }

        ranks.join("/")
    }

    /// Returns `true` if there is a piece at the given [`Square`], else `false`.
    ///
    /// # Example
    /// ```
    /// # use chesscore::{Board, Square};
    /// let board = Board::default();
    /// assert_eq!(board.has(Square::B1), true);
    /// assert_eq!(board.has(Square::E4), false);
    /// ```
    #[inline(always)]
    pub const fn has(&self, square: Square) -> bool {
        self.mailbox[square.index()].is_some()
    }

    /// Places the provided [`Piece`] on the supplied [`Square`], replacing anything already there.
    ///
    /// # Example
    /// ```
    /// # use chesscore::{Board, Piece, PieceKind, Color, Square};
    /// let white_knight = Piece::new(Color::White, PieceKind::Knight);
    /// let mut board = Board::new();
    /// board.place(white_knight, Square::C4);
    /// assert_eq!(board.to_fen(), "8/8/8/8/2N5/8/8/8");
    /// ```
    #[inline(always)]
    pub fn place(&mut self, piece: Piece, square: Square) {
        self.mailbox[square] = Some(piece);
    }

    /// Clears the supplied [`Square`] of any pieces.
    #[inline(always)]
    pub fn clear(&mut self, square: Square) {
        self.mailbox[square] = None;
    }

    /// Takes the [`Piece`] from a given [`Square`], if there is one present.
    ///
    /// # Example
    /// ```
    /// # use chesscore::{Board, Piece, PieceKind, Color, Square};
    /// let mut board = Board::from_fen("k7/8/8/8/2N5/8/8/7K").unwrap();
    /// let taken = board.take(Square::C4);
    /// assert_eq!(board.to_fen(), "k7/8/8/8/8/8/8/7K");
    /// assert_eq!(taken, Some(Piece::new(Color::White, PieceKind::Knight)));
    /// ```
    #[inline(always)]
    pub fn take(&mut self, square: Square) -> Option<Piece> {
        self.mailbox[square].take()
    }

    /// Clears the entire board, removing all pieces.
    #[inline(always)]
    pub fn clear_all(&mut self) {
        *self = Self::new();
    }

    /// Fetches the [`Piece`] at the provided [`Square`], if there is one.
    ///
    /// # Example
    /// ```
    /// # use chesscore::{Board, PieceKind, Color, Square};
    /// let board = Board::default();
    /// assert_eq!(board.piece_at(Square::A2).unwrap().kind(), PieceKind::Pawn);
    /// assert_eq!(board.piece_at(Square::A2).unwrap().color(), Color::White);
    /// assert!(board.piece_at(Square::E4).is_none());
    /// ```
    #[inline(always)]
    pub const fn piece_at(&self, square: Square) -> Option<Piece> {
        self.mailbox[square.index()]
    }

    /// Fetches the [`Color`] of the piece at the provided [`Square`], if there is one.
    #[inline(always)]
    pub fn color_at(&self, square: Square) -> Option<Color> {
        self.mailbox[square].map(|piece| piece.color())
    }

    /// Fetches the [`PieceKind`] of the piece at the provided [`Square`], if there is one.
    #[inline(always)]
    pub fn kind_at(&self, square: Square) -> Option<PieceKind> {
        self.mailbox[square].map(|piece| piece.kind())
    }

    /// Moves whatever occupies `mv.from()` onto `mv.to()`, leaving `mv.from()` empty.
    ///
    /// No enforcement of legality: anything on `mv.to()` is overwritten.
    /// If `mv.from()` is empty, the board is left untouched.
    #[inline(always)]
    pub fn make_move_unchecked(&mut self, mv: Move) {
        let Some(piece) = self.take(mv.from()) else {
            return;
        };

        self.place(piece, mv.to());
    }

    /// Returns an iterator over every occupied [`Square`] and its [`Piece`], in ascending index order.
    #[inline(always)]
    pub fn iter(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::iter().filter_map(|square| self.piece_at(square).map(|piece| (square, piece)))
    }

    /// Returns the raw 64-cell mailbox backing this board.
    #[inline(always)]
    pub const fn cells(&self) -> &[Option<Piece>; Square::COUNT] {
        &self.mailbox
    }
}

impl Default for Board {
    #[inline(always)]
    fn default() -> Self {
        // Safe unwrap because the FEN for startpos is always valid
        Self::from_fen(FEN_STARTPOS).unwrap()
    }
}

impl FromStr for Board {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::from_fen(s)
    }
}

impl From<[Option<Piece>; Square::COUNT]> for Board {
    #[inline(always)]
    fn from(mailbox: [Option<Piece>; Square::COUNT]) -> Self {
        Self { mailbox }
    }
}

impl Index<Square> for Board {
    type Output = Option<Piece>;
    #[inline(always)]
    fn index(&self, index: Square) -> &Self::Output {
        &self.mailbox[index]
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..Square::SIDE).rev() {
            write!(f, "{}| ", row + 1)?;

            for col in 0..Square::SIDE {
                let occupant = self
                    .piece_at(Square::new(row, col))
                    .map(|piece| piece.char())
                    .unwrap_or('.');

                write!(f, "{occupant} ")?;
            }

            writeln!(f)?;
        }
        write!(f, " +")?;
        for _ in 0..Square::SIDE {
            write!(f, "--")?;
        }
        write!(f, "\n   ")?;
        for col in 0..Square::SIDE {
            write!(f, "{} ", (b'a' + col) as char)?;
        }

        Ok(())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self}\n\nFEN: {}", self.to_fen())
    }
}
