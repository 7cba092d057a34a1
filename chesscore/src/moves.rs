/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::{fmt, str::FromStr};

use anyhow::{bail, Context, Result};

use super::{Square, MAX_PIECE_MOBILITY};

/// Upper bound on the number of moves one side can have: every square holding a piece with the widest possible reach.
pub const MAX_NUM_MOVES: usize = Square::COUNT * MAX_PIECE_MOBILITY;

/// An alias for an [`arrayvec::ArrayVec`] containing at most [`MAX_NUM_MOVES`] moves.
pub type MoveList = arrayvec::ArrayVec<Move, MAX_NUM_MOVES>;

/// Represents a move made on a chess board: the square a piece leaves and the square it lands on.
///
/// A [`Move`] carries no legality information; it is only a pair of squares.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Move {
    from: Square,
    to: Square,
}

impl Move {
    #[inline(always)]
    pub const fn new(from: Square, to: Square) -> Self {
        Self { from, to }
    }

    #[inline(always)]
    pub const fn from(&self) -> Square {
        self.from
    }

    #[inline(always)]
    pub const fn to(&self) -> Square {
        self.to
    }

    /// Splits this move into its `from` and `to` squares.
    #[inline(always)]
    pub const fn parts(&self) -> (Square, Square) {
        (self.from, self.to)
    }

    /// Parses a [`Move`] from coordinate notation, such as `"e2e4"`.
    ///
    /// # Example
    /// ```
    /// # use chesscore::{Move, Square};
    /// let mv = Move::from_uci("e2e4").unwrap();
    /// assert_eq!(mv.parts(), (Square::E2, Square::E4));
    /// assert!(Move::from_uci("e2").is_err());
    /// ```
    pub fn from_uci(uci: &str) -> Result<Self> {
        let uci = uci.trim();
        if uci.len() != 4 || !uci.is_ascii() {
            bail!("Move {uci:?} must be four chars, like \"e2e4\"");
        }

        let from = Square::from_uci(&uci[0..2]).context(format!("Invalid source in {uci:?}"))?;
        let to = Square::from_uci(&uci[2..4]).context(format!("Invalid destination in {uci:?}"))?;

        Ok(Self::new(from, to))
    }

    /// Converts this [`Move`] to coordinate notation, such as `"e2e4"`.
    pub fn to_uci(&self) -> String {
        format!("{}{}", self.from, self.to)
    }
}

impl FromStr for Move {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::from_uci(s)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_uci())
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} -> {})", self.to_uci(), self.from.index(), self.to.index())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uci_round_trip() {
        for uci in ["a1h8", "e2e4", "g8f6", "h1a1"] {
            assert_eq!(Move::from_uci(uci).unwrap().to_uci(), uci);
        }
    }

    #[test]
    fn rejects_malformed_moves() {
        for uci in ["", "e2", "e2e4q", "z9e4", "e2e9", "é2e4"] {
            assert!(Move::from_uci(uci).is_err(), "{uci:?} should not parse");
        }
    }
}
