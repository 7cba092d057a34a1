/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::{
    fmt,
    ops::{BitAnd, BitOr, BitOrAssign},
};

use super::Square;

/// A set of unique [`Square`]s, stored as a 64-bit mask where bit `i` is the square with index `i`.
///
/// Iteration always yields squares in ascending index order.
///
/// # Example
/// ```
/// # use chesscore_types::{Square, SquareSet};
/// let mut set = SquareSet::EMPTY;
/// set.insert(Square::E4);
/// set.insert(Square::E4);
/// set.insert(Square::A1);
/// assert_eq!(set.len(), 2);
/// assert_eq!(set.iter().collect::<Vec<_>>(), [Square::A1, Square::E4]);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SquareSet(u64);

impl SquareSet {
    /// A set containing no squares.
    pub const EMPTY: Self = Self(0);

    /// A set containing every square.
    pub const FULL: Self = Self(u64::MAX);

    #[inline(always)]
    pub const fn new(bits: u64) -> Self {
        Self(bits)
    }

    #[inline(always)]
    pub const fn inner(&self) -> u64 {
        self.0
    }

    /// Adds `square` to the set. Inserting a square that is already present has no effect.
    #[inline(always)]
    pub fn insert(&mut self, square: Square) {
        self.0 |= square.bit();
    }

    /// Removes `square` from the set, if present.
    #[inline(always)]
    pub fn remove(&mut self, square: Square) {
        self.0 &= !square.bit();
    }

    #[inline(always)]
    pub const fn contains(&self, square: Square) -> bool {
        self.0 & square.bit() != 0
    }

    #[inline(always)]
    pub const fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline(always)]
    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Removes and returns the lowest-indexed square in the set, if any.
    #[inline(always)]
    pub fn pop_first(&mut self) -> Option<Square> {
        if self.is_empty() {
            return None;
        }

        let index = self.0.trailing_zeros() as i32;
        self.0 &= self.0 - 1;
        Square::from_raw(index)
    }

    /// Returns an iterator over the squares in this set, in ascending index order.
    #[inline(always)]
    pub const fn iter(&self) -> SquareSetIter {
        SquareSetIter { bits: *self }
    }
}

impl From<Square> for SquareSet {
    #[inline(always)]
    fn from(value: Square) -> Self {
        Self(value.bit())
    }
}

impl FromIterator<Square> for SquareSet {
    fn from_iter<T: IntoIterator<Item = Square>>(iter: T) -> Self {
        let mut set = Self::EMPTY;
        set.extend(iter);
        set
    }
}

impl Extend<Square> for SquareSet {
    fn extend<T: IntoIterator<Item = Square>>(&mut self, iter: T) {
        for square in iter {
            self.insert(square);
        }
    }
}

impl BitOr for SquareSet {
    type Output = Self;
    #[inline(always)]
    fn bitor(self, rhs: Self) -> Self::Output {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for SquareSet {
    #[inline(always)]
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for SquareSet {
    type Output = Self;
    #[inline(always)]
    fn bitand(self, rhs: Self) -> Self::Output {
        Self(self.0 & rhs.0)
    }
}

impl IntoIterator for SquareSet {
    type Item = Square;
    type IntoIter = SquareSetIter;
    #[inline(always)]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a> IntoIterator for &'a SquareSet {
    type Item = Square;
    type IntoIter = SquareSetIter;
    #[inline(always)]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An iterator over the [`Square`]s of a [`SquareSet`], lowest index first.
pub struct SquareSetIter {
    bits: SquareSet,
}

impl Iterator for SquareSetIter {
    type Item = Square;

    #[inline(always)]
    fn next(&mut self) -> Option<Self::Item> {
        self.bits.pop_first()
    }

    #[inline(always)]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let size = self.bits.len();
        (size, Some(size))
    }
}

impl ExactSizeIterator for SquareSetIter {}

impl fmt::Display for SquareSet {
    /// Draws the set as an 8x8 grid, row 7 at the top, with `X` for members and `.` otherwise.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..Square::SIDE).rev() {
            for col in 0..Square::SIDE {
                let mark = if self.contains(Square::new(row, col)) {
                    'X'
                } else {
                    '.'
                };
                write!(f, "{mark}")?;
                if col + 1 < Square::SIDE {
                    write!(f, " ")?;
                }
            }
            if row > 0 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for SquareSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_is_idempotent() {
        let mut set = SquareSet::EMPTY;
        set.insert(Square::D4);
        set.insert(Square::D4);
        assert_eq!(set.len(), 1);
        assert!(set.contains(Square::D4));

        set.remove(Square::D4);
        assert!(set.is_empty());
    }

    #[test]
    fn iterates_in_ascending_order() {
        let set: SquareSet = [Square::H8, Square::A1, Square::E4].into_iter().collect();
        assert_eq!(
            set.iter().collect::<Vec<_>>(),
            [Square::A1, Square::E4, Square::H8]
        );
        assert_eq!(set.iter().len(), 3);
    }

    #[test]
    fn full_set_covers_the_board() {
        assert_eq!(SquareSet::FULL.len(), Square::COUNT);
        assert_eq!(SquareSet::FULL.iter().count(), Square::COUNT);
    }

    #[test]
    fn display_puts_row_seven_first() {
        let set = SquareSet::from(Square::A8) | SquareSet::from(Square::H1);
        let drawn = set.to_string();
        let lines = drawn.lines().collect::<Vec<_>>();
        assert_eq!(lines.len(), 8);
        assert_eq!(lines[0], "X . . . . . . .");
        assert_eq!(lines[7], ". . . . . . . X");
    }
}
