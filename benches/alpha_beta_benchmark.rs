use std::time::Duration;

use four_in_a_row::alpha_beta_searcher::AlphaBetaSearcher;
use four_in_a_row::board::{Board, Mark};
use four_in_a_row::four_position;

use criterion::{criterion_group, criterion_main, Criterion};

fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("alpha beta empty board depth 3", |b| {
        b.iter(|| search(&mut Board::new(), 3))
    });

    c.bench_function("alpha beta midgame depth 3", |b| {
        let mut board = midgame_position();
        b.iter(|| search(&mut board, 3))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);

fn search(board: &mut Board, depth: u8) {
    let mut searcher = AlphaBetaSearcher::new(Mark::X);
    searcher
        .get_best_move(board, depth, Duration::from_secs(60))
        .unwrap();
}

fn midgame_position() -> Board {
    four_position! {
        ........
        ..O.....
        ..XX.O..
        ...OX...
        ..XO....
        ....O...
        ...X....
        ........
    }
}
