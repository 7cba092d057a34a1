/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

/// FEN placements for the standard starting position.
pub const FEN_STARTPOS: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

/// FEN placements for a board with no pieces on it.
pub const FEN_EMPTY: &str = "8/8/8/8/8/8/8/8";

/// A busy middlegame position with every piece kind able to move and capture.
pub const FEN_KIWIPETE: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R";

/// Widest reach of any single piece: a Queen in the middle of an empty board.
pub const MAX_PIECE_MOBILITY: usize = 27;
