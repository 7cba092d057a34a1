/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use anyhow::{bail, Context};
use clap::Parser;
use colored::Colorize;

use chesscore::{generate_moves, generate_moves_for, try_apply_move, Board, Color, Move, Square};

/// Show where pieces can move, optionally after applying some moves first.
#[derive(Debug, Parser)]
struct Cli {
    /// FEN piece placements of the board to start from.
    #[arg(short, long)]
    fen: Option<String>,

    /// Square whose destinations should be highlighted, like "e2".
    #[arg(short, long)]
    square: Option<String>,

    /// List every move available to this side ("w" or "b").
    #[arg(short, long)]
    list: Option<Color>,

    /// Moves to apply before inspecting the board, like "e2e4 e7e5".
    #[arg(required = false)]
    moves: Vec<String>,
}

/// Draws `board` with `highlight` marked in green and `origin` in yellow.
fn draw(board: &Board, origin: Option<Square>, highlight: &[Square]) {
    for row in (0..Square::SIDE).rev() {
        print!("{}| ", row + 1);

        for col in 0..Square::SIDE {
            let square = Square::new(row, col);
            let glyph = board
                .piece_at(square)
                .map(|piece| piece.char().to_string())
                .unwrap_or(String::from("."));
            let glyph = glyph.as_str();

            let glyph = if Some(square) == origin {
                glyph.black().on_yellow()
            } else if highlight.contains(&square) {
                glyph.black().on_green()
            } else {
                glyph.normal()
            };

            print!("{glyph} ");
        }
        println!();
    }
    println!(" +----------------");
    println!("   a b c d e f g h");
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    let mut board = match &args.fen {
        Some(fen) => Board::from_fen(fen).context("Failed to parse --fen")?,
        None => Board::default(),
    };

    for mv_str in &args.moves {
        let mv = Move::from_uci(mv_str)?;
        try_apply_move(&mut board, mv).context(format!("Could not play {mv_str:?}"))?;
        println!("{} {mv}", "played".green());
    }

    let origin = args.square.as_deref().map(Square::from_uci).transpose()?;
    let destinations = match origin {
        Some(square) => {
            if !board.has(square) {
                bail!("There is no piece on {square}");
            }
            generate_moves(&board, square).iter().collect::<Vec<_>>()
        }
        None => Vec::new(),
    };

    draw(&board, origin, &destinations);
    println!("\nFEN: {}", board.to_fen());

    if let Some(square) = origin {
        let listed = destinations
            .iter()
            .map(Square::to_string)
            .collect::<Vec<_>>()
            .join(" ");
        println!("{} {square}: {listed}", "Destinations from".bold());
    }

    if let Some(color) = args.list {
        let moves = generate_moves_for(&board, color);
        println!("\n{} moves for {}:", moves.len(), color.name().bold());
        for mv in &moves {
            println!("  {mv}");
        }
    }

    Ok(())
}
