/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::{fmt, str::FromStr};

use anyhow::{anyhow, bail, Result};

/// Raw index used by callers to say "no square", e.g. when no move has been requested.
pub const NO_SQUARE: i32 = -1;

/// Represents a single square on an `8x8` chess board.
///
/// Squares are indexed row-major: index `i` lives on row `i / 8` and column `i % 8`.
/// Row 0 is White's back rank (rank 1) and column 0 is the A-file, so [`Square::A1`] is index 0 and [`Square::H8`] is index 63.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Square(u8);

impl Square {
    pub const A1: Self = Self(0);
    pub const B1: Self = Self(1);
    pub const C1: Self = Self(2);
    pub const D1: Self = Self(3);
    pub const E1: Self = Self(4);
    pub const F1: Self = Self(5);
    pub const G1: Self = Self(6);
    pub const H1: Self = Self(7);
    pub const A2: Self = Self(8);
    pub const B2: Self = Self(9);
    pub const C2: Self = Self(10);
    pub const D2: Self = Self(11);
    pub const E2: Self = Self(12);
    pub const F2: Self = Self(13);
    pub const G2: Self = Self(14);
    pub const H2: Self = Self(15);
    pub const A3: Self = Self(16);
    pub const B3: Self = Self(17);
    pub const C3: Self = Self(18);
    pub const D3: Self = Self(19);
    pub const E3: Self = Self(20);
    pub const F3: Self = Self(21);
    pub const G3: Self = Self(22);
    pub const H3: Self = Self(23);
    pub const A4: Self = Self(24);
    pub const B4: Self = Self(25);
    pub const C4: Self = Self(26);
    pub const D4: Self = Self(27);
    pub const E4: Self = Self(28);
    pub const F4: Self = Self(29);
    pub const G4: Self = Self(30);
    pub const H4: Self = Self(31);
    pub const A5: Self = Self(32);
    pub const B5: Self = Self(33);
    pub const C5: Self = Self(34);
    pub const D5: Self = Self(35);
    pub const E5: Self = Self(36);
    pub const F5: Self = Self(37);
    pub const G5: Self = Self(38);
    pub const H5: Self = Self(39);
    pub const A6: Self = Self(40);
    pub const B6: Self = Self(41);
    pub const C6: Self = Self(42);
    pub const D6: Self = Self(43);
    pub const E6: Self = Self(44);
    pub const F6: Self = Self(45);
    pub const G6: Self = Self(46);
    pub const H6: Self = Self(47);
    pub const A7: Self = Self(48);
    pub const B7: Self = Self(49);
    pub const C7: Self = Self(50);
    pub const D7: Self = Self(51);
    pub const E7: Self = Self(52);
    pub const F7: Self = Self(53);
    pub const G7: Self = Self(54);
    pub const H7: Self = Self(55);
    pub const A8: Self = Self(56);
    pub const B8: Self = Self(57);
    pub const C8: Self = Self(58);
    pub const D8: Self = Self(59);
    pub const E8: Self = Self(60);
    pub const F8: Self = Self(61);
    pub const G8: Self = Self(62);
    pub const H8: Self = Self(63);

    /// Number of squares on the board.
    pub const COUNT: usize = 64;

    /// Number of rows (and columns) on the board.
    pub const SIDE: u8 = 8;

    /// Creates a new [`Square`] from a row and a column.
    ///
    /// # Panics
    /// If either `row` or `col` is not in `0..8`.
    ///
    /// # Example
    /// ```
    /// # use chesscore_types::Square;
    /// assert_eq!(Square::new(0, 5), Square::F1);
    /// assert_eq!(Square::new(7, 0), Square::A8);
    /// ```
    #[inline(always)]
    pub const fn new(row: u8, col: u8) -> Self {
        assert!(row < Self::SIDE && col < Self::SIDE, "row and column must be in 0..8");
        Self(row * Self::SIDE + col)
    }

    /// Creates a [`Square`] from a signed row and column, returning `None` if either lies off the board.
    ///
    /// # Example
    /// ```
    /// # use chesscore_types::Square;
    /// assert_eq!(Square::from_row_col(3, 4), Some(Square::E4));
    /// assert_eq!(Square::from_row_col(-1, 4), None);
    /// assert_eq!(Square::from_row_col(3, 8), None);
    /// ```
    #[inline(always)]
    pub const fn from_row_col(row: i8, col: i8) -> Option<Self> {
        if is_on_board(row, col) {
            Some(Self(row as u8 * Self::SIDE + col as u8))
        } else {
            None
        }
    }

    /// Creates a [`Square`] from an index in `0..64`.
    ///
    /// # Example
    /// ```
    /// # use chesscore_types::Square;
    /// assert_eq!(Square::from_index(12).unwrap(), Square::E2);
    /// assert!(Square::from_index(64).is_err());
    /// ```
    #[inline(always)]
    pub fn from_index(index: usize) -> Result<Self> {
        if index < Self::COUNT {
            Ok(Self(index as u8))
        } else {
            bail!("Invalid index for Square: Expected 0..64. Got {index}")
        }
    }

    /// Creates a [`Square`] from a raw, possibly-negative index, as supplied by an external caller.
    ///
    /// Returns `None` for [`NO_SQUARE`] and for anything else outside `0..64`.
    ///
    /// # Example
    /// ```
    /// # use chesscore_types::{Square, NO_SQUARE};
    /// assert_eq!(Square::from_raw(0), Some(Square::A1));
    /// assert_eq!(Square::from_raw(NO_SQUARE), None);
    /// assert_eq!(Square::from_raw(64), None);
    /// ```
    #[inline(always)]
    pub const fn from_raw(index: i32) -> Option<Self> {
        if index >= 0 && index < Self::COUNT as i32 {
            Some(Self(index as u8))
        } else {
            None
        }
    }

    /// Returns an iterator over all squares, from [`Square::A1`] to [`Square::H8`].
    #[inline(always)]
    pub fn iter() -> impl DoubleEndedIterator<Item = Self> + ExactSizeIterator {
        (0..Self::COUNT as u8).map(Self)
    }

    #[inline(always)]
    pub const fn index(&self) -> usize {
        self.0 as usize
    }

    #[inline(always)]
    pub const fn inner(&self) -> u8 {
        self.0
    }

    /// The row (rank index) of this square, in `0..8`.
    #[inline(always)]
    pub const fn row(&self) -> u8 {
        self.0 / Self::SIDE
    }

    /// The column (file index) of this square, in `0..8`.
    #[inline(always)]
    pub const fn col(&self) -> u8 {
        self.0 % Self::SIDE
    }

    /// The [`Square`] reached by moving `drow` rows and `dcol` columns away, if it is on the board.
    ///
    /// # Example
    /// ```
    /// # use chesscore_types::Square;
    /// assert_eq!(Square::B1.offset(2, 1), Some(Square::C3));
    /// assert_eq!(Square::A1.offset(0, -1), None);
    /// ```
    #[inline(always)]
    pub const fn offset(&self, drow: i8, dcol: i8) -> Option<Self> {
        Self::from_row_col(self.row() as i8 + drow, self.col() as i8 + dcol)
    }

    /// The single bit representing this square in a 64-bit mask.
    #[inline(always)]
    pub const fn bit(&self) -> u64 {
        1 << self.0
    }

    /// Parses a [`Square`] from algebraic notation such as `"e4"`.
    ///
    /// # Example
    /// ```
    /// # use chesscore_types::Square;
    /// assert_eq!(Square::from_uci("e4").unwrap(), Square::E4);
    /// assert_eq!(Square::from_uci("H8").unwrap(), Square::H8);
    /// assert!(Square::from_uci("i9").is_err());
    /// ```
    pub fn from_uci(s: &str) -> Result<Self> {
        let mut chars = s.chars();
        let (Some(file), Some(rank), None) = (chars.next(), chars.next(), chars.next()) else {
            bail!("Invalid square {s:?}: Squares must be two chars, like \"e4\"");
        };

        let col = match file.to_ascii_lowercase() {
            f @ 'a'..='h' => f as u8 - b'a',
            _ => bail!("Invalid file {file:?} in square {s:?}: Expected a-h"),
        };
        let rank = rank
            .to_digit(10)
            .filter(|r| (1..=8).contains(r))
            .ok_or(anyhow!("Invalid rank {rank:?} in square {s:?}: Expected 1-8"))?;

        Ok(Self::new(rank as u8 - 1, col))
    }

    /// Converts this [`Square`] to algebraic notation, such as `"e4"`.
    pub fn to_uci(&self) -> String {
        let file = (b'a' + self.col()) as char;
        let rank = (b'1' + self.row()) as char;
        format!("{file}{rank}")
    }
}

/// Returns `true` if `row` and `col` both lie in `0..8`.
#[inline(always)]
pub const fn is_on_board(row: i8, col: i8) -> bool {
    row >= 0 && row < Square::SIDE as i8 && col >= 0 && col < Square::SIDE as i8
}

impl FromStr for Square {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::from_uci(s)
    }
}

impl TryFrom<usize> for Square {
    type Error = anyhow::Error;
    fn try_from(value: usize) -> std::result::Result<Self, Self::Error> {
        Self::from_index(value)
    }
}

impl From<Square> for usize {
    #[inline(always)]
    fn from(value: Square) -> Self {
        value.index()
    }
}

impl<T> std::ops::Index<Square> for [T; Square::COUNT] {
    type Output = T;
    #[inline(always)]
    fn index(&self, index: Square) -> &Self::Output {
        &self[index.index()]
    }
}

impl<T> std::ops::IndexMut<Square> for [T; Square::COUNT] {
    #[inline(always)]
    fn index_mut(&mut self, index: Square) -> &mut Self::Output {
        &mut self[index.index()]
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_uci())
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.to_uci(), self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_maps_row_major() {
        for square in Square::iter() {
            assert_eq!(square.index(), (square.row() * 8 + square.col()) as usize);
        }
        assert_eq!(Square::new(0, 5).index(), 5);
        assert_eq!(Square::E2.row(), 1);
        assert_eq!(Square::E2.col(), 4);
    }

    #[test]
    fn off_board_coordinates_have_no_square() {
        for (row, col) in [(-1, 0), (0, -1), (8, 0), (0, 8), (-3, 9)] {
            assert!(!is_on_board(row, col));
            assert!(Square::from_row_col(row, col).is_none());
        }
    }

    #[test]
    fn raw_indices() {
        assert_eq!(Square::from_raw(NO_SQUARE), None);
        assert_eq!(Square::from_raw(-20), None);
        assert_eq!(Square::from_raw(63), Some(Square::H8));
        assert_eq!(Square::from_raw(64), None);
    }

    #[test]
    fn uci_round_trip() {
        for square in Square::iter() {
            assert_eq!(Square::from_uci(&square.to_uci()).unwrap(), square);
        }
        assert!(Square::from_uci("e").is_err());
        assert!(Square::from_uci("e44").is_err());
        assert!(Square::from_uci("e0").is_err());
    }
}
