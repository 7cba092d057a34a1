/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

#![doc = include_str!("../README.md")]

/// Enums for piece kinds, colors, and a struct for a chess piece.
mod piece;
/// Squares on a chessboard, addressed by index or by row and column.
mod square;
/// A set of squares, used to report move destinations.
mod square_set;
/// Misc constants.
mod utils;

pub use piece::*;
pub use square::*;
pub use square_set::*;
pub use utils::*;

/// Re-exports all the things you'll need.
pub mod prelude {
    pub use crate::piece::*;
    pub use crate::square::*;
    pub use crate::square_set::*;
    pub use crate::utils::*;
}
