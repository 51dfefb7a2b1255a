use std::time::Duration;

use criterion::{criterion_group, criterion_main, Criterion, SamplingMode};
use snake_engine::{GameRng, GameState};

// Runs a round with no input until the snake hits the right wall, eating
// whatever food happens to land in its row.
fn run_straight_line_round(rows: usize, columns: usize) -> u32 {
    let mut rng = GameRng::new(42);
    let mut state = GameState::new(rows, columns, &mut rng);
    while !state.game_over() {
        state.move_snake(&mut rng);
    }
    state.score()
}

fn tick_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("ticks");

    group
        .sampling_mode(SamplingMode::Flat)
        .sample_size(50)
        .measurement_time(Duration::from_secs(10));

    group.bench_function("straight_line_15x15", |b| {
        b.iter(|| run_straight_line_round(15, 15))
    });

    group.bench_function("straight_line_100x100", |b| {
        b.iter(|| run_straight_line_round(100, 100))
    });

    group.finish();
}

criterion_group!(benches, tick_bench);
criterion_main!(benches);
