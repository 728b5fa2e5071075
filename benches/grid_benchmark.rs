use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::{rngs::StdRng, SeedableRng};
use sapper::{reveal::reveal, Button, Game, GameConfig, Grid, Position};

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");
    for &(side, mines) in &[(15u32, 15u32), (100, 1_500), (500, 40_000)] {
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{side}x{side}/{mines}")),
            &(side, mines),
            |b, &(side, mines)| {
                let mut rng = StdRng::seed_from_u64(1);
                b.iter(|| Grid::generate(black_box(side), side, mines, &mut rng).unwrap());
            },
        );
    }
    group.finish();
}

fn bench_flood(c: &mut Criterion) {
    let mut group = c.benchmark_group("flood");
    for &side in &[15u32, 200, 1_000] {
        let grid = Grid::with_mines(side, side, [Position::new(0, 0)]).unwrap();
        let origin = Position::new(side as i32 - 1, side as i32 - 1);
        group.bench_with_input(BenchmarkId::from_parameter(side), &grid, |b, grid| {
            b.iter_batched(
                || grid.clone(),
                |mut grid| reveal(&mut grid, black_box(origin)),
                criterion::BatchSize::LargeInput,
            );
        });
    }
    group.finish();
}

fn bench_default_game(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(7);
    c.bench_function("default game, click every cell", |b| {
        b.iter(|| {
            let mut game = Game::new(GameConfig::default(), &mut rng).unwrap();
            for pos in game.grid().positions().collect::<Vec<_>>() {
                game.handle_click(Button::Primary, pos);
            }
            game.state()
        });
    });
}

criterion_group!(benches, bench_generate, bench_flood, bench_default_game);
criterion_main!(benches);
