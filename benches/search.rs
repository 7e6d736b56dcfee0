//! Search benchmarks.
//!
//! Run with: `cargo bench`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use gomoku::board::{Board, Pos, Side};
use gomoku::eval::evaluate;
use gomoku::search::{CandidateOrder, Searcher};
use gomoku::{AIEngine, EngineConfig};

/// A quiet middle-game position on a 15x15 board: no fours for either side.
fn midgame() -> Board {
    let stones = [
        (7, 7, Side::Black),
        (7, 8, Side::White),
        (8, 8, Side::Black),
        (6, 6, Side::White),
        (8, 6, Side::Black),
        (9, 9, Side::White),
        (6, 8, Side::Black),
        (8, 7, Side::White),
    ];
    let mut board = Board::new(15, 15);
    for (r, c, side) in stones {
        board.place_stone(Pos::new(r, c), side);
    }
    board
}

fn bench_evaluate(c: &mut Criterion) {
    let board = midgame();
    c.bench_function("evaluate_midgame", |b| {
        b.iter(|| evaluate(black_box(&board), Side::Black))
    });
}

fn bench_search_depth(c: &mut Criterion) {
    let board = midgame();
    let mut group = c.benchmark_group("alpha_beta");
    group.sample_size(10);

    for order in [CandidateOrder::Ascending, CandidateOrder::Descending] {
        for depth in [1u32, 2, 3] {
            group.bench_with_input(
                BenchmarkId::new(format!("{order:?}"), depth),
                &depth,
                |b, &depth| {
                    b.iter(|| {
                        let mut searcher = Searcher::new(depth, order);
                        searcher.search(black_box(&board), Side::Black)
                    })
                },
            );
        }
    }
    group.finish();
}

fn bench_next_move(c: &mut Criterion) {
    let board = midgame();
    let engine = AIEngine::new(EngineConfig::new(15, 15, 3)).unwrap();
    let mut group = c.benchmark_group("engine");
    group.sample_size(10);
    group.bench_function("next_move_midgame", |b| {
        b.iter(|| engine.next_move(black_box(&board), Side::Black).unwrap())
    });
    group.finish();
}

criterion_group!(benches, bench_evaluate, bench_search_depth, bench_next_move);
criterion_main!(benches);
