/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

#![doc = include_str!("../README.md")]

pub use chesscore_types::*;

/// A 64-cell mailbox board of pieces.
mod board;
/// Applying moves to a board, only when the move generator allows them.
mod execute;
/// Computing the destinations of a piece under basic movement rules.
mod movegen;
/// Enums and structs for modeling the movement of a piece on a chessboard.
mod moves;
/// Row/column occupancy queries that treat off-board squares as neither empty nor occupied.
mod predicates;

pub use board::*;
pub use execute::*;
pub use movegen::*;
pub use moves::*;
pub use predicates::*;

/// Re-exports all the things you'll need.
pub mod prelude {
    pub use crate::board::*;
    pub use crate::execute::*;
    pub use crate::movegen::*;
    pub use crate::moves::*;
    pub use crate::predicates::*;
    pub use chesscore_types::*;
}
