use criterion::{black_box, criterion_group, criterion_main, Criterion};

use chesscore::*;

fn all_squares(board: &Board) -> usize {
    Square::iter()
        .map(|square| generate_moves(board, square).len())
        .sum()
}

fn movegen_benchmark(c: &mut Criterion) {
    let kiwipete = Board::from_fen(FEN_KIWIPETE).unwrap();

    c.bench_function("Kiwipete every square", |b| {
        b.iter(|| black_box(all_squares(black_box(&kiwipete))));
    });

    c.bench_function("Kiwipete moves for White", |b| {
        b.iter(|| black_box(generate_moves_for(black_box(&kiwipete), Color::White)));
    });

    let open_queen = Board::from_fen("8/8/8/8/3Q4/8/8/8").unwrap();
    c.bench_function("Lone Queen", |b| {
        b.iter(|| black_box(generate_moves(black_box(&open_queen), Square::D4)));
    });
}

fn apply_benchmark(c: &mut Criterion) {
    let startpos = Board::default();

    c.bench_function("Apply e2e4", |b| {
        b.iter(|| {
            let mut board = black_box(startpos);
            black_box(apply_move(&mut board, Some(Square::E2), Some(Square::E4)))
        });
    });
}

criterion_group!(benches, movegen_benchmark, apply_benchmark);
criterion_main!(benches);
