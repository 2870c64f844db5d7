use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use free_chess::board_state::board_state::BoardState;

const MOVE_COUNTS: &[usize] = &[64, 512];

fn random_move_sequence(count: usize, seed: u64) -> Vec<(usize, usize, usize, usize)> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            (
                rng.random_range(0..8),
                rng.random_range(0..8),
                rng.random_range(0..8),
                rng.random_range(0..8),
            )
        })
        .collect()
}

fn bench_free_moves(c: &mut Criterion) {
    let mut group = c.benchmark_group("free_moves");

    for &count in MOVE_COUNTS {
        let sequence = random_move_sequence(count, 1234);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &sequence, |b, sequence| {
            b.iter(|| {
                let mut state = BoardState::new();
                for &(from_row, from_col, to_row, to_col) in sequence {
                    let _ = black_box(state.move_piece(from_row, from_col, to_row, to_col));
                }
                state.history().len()
            });
        });
    }

    group.finish();
}

fn bench_reset(c: &mut Criterion) {
    c.bench_function("reset_after_move", |b| {
        let mut state = BoardState::new();
        b.iter(|| {
            let _ = state.move_piece(6, 0, 4, 0);
            state.reset();
            black_box(state.history().len())
        });
    });
}

criterion_group!(benches, bench_free_moves, bench_reset);
criterion_main!(benches);
