use criterion::{black_box, criterion_group, criterion_main, Criterion};
use gamma::GammaGame;

/// A 64x64 board with four players in interleaved stripes, every area cap
/// loose enough that all placements succeed.
fn populated() -> GammaGame {
    let size = 64;
    let mut game = GammaGame::new(size, size, 4, size * size).unwrap();
    for y in 0..size {
        for x in 0..size {
            if (x + y) % 5 != 0 {
                game.place(1 + (x / 4 + y) % 4, x, y);
            }
        }
    }
    game
}

fn bench_capture_feasible(c: &mut Criterion) {
    let game = populated();
    c.bench_function("capture_feasible_cold", |b| {
        b.iter_batched(
            || game.clone(),
            |mut g| black_box(g.capture_feasible(1)),
            criterion::BatchSize::SmallInput,
        )
    });

    let mut warm = populated();
    warm.capture_feasible(1);
    c.bench_function("capture_feasible_warm", |b| {
        b.iter(|| black_box(warm.capture_feasible(2)))
    });
}

fn bench_fill_board(c: &mut Criterion) {
    c.bench_function("fill_64x64", |b| b.iter(|| black_box(populated())));
}

criterion_group!(benches, bench_capture_feasible, bench_fill_board);
criterion_main!(benches);
