// step.rs - Generation step throughput on the size presets

use conway::{engine, patterns, Grid, SizePreset};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn seeded(preset: SizePreset) -> Grid {
    let (rows, cols) = preset.dimensions();
    let mut grid = Grid::new(rows, cols).expect("preset dimensions are positive");
    // Tile r-pentominoes so the grid stays busy for the whole run
    if let Some(pattern) = patterns::find("r-pentomino") {
        for row in (0..rows).step_by(8) {
            for col in (0..cols).step_by(8) {
                pattern.place(&mut grid, row, col);
            }
        }
    }
    grid
}

fn benchmark_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("step");

    for preset in SizePreset::ALL {
        let grid = seeded(preset);
        group.bench_with_input(BenchmarkId::new("preset", preset.name()), &grid, |b, grid| {
            b.iter(|| engine::step(black_box(grid)));
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_step);
criterion_main!(benches);
