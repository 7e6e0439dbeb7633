use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use sweeper_core::{Board, GameConfig, RandomMinePlacer, RevealedMask, reveal};

const TIERS: [(&str, u32, u32, u32); 3] = [
    ("9x9_10", 9, 9, 10),
    ("16x16_40", 16, 16, 40),
    ("dense_64x64_4000", 64, 64, 4000),
];

fn bench_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");
    for (name, rows, cols, mines) in TIERS {
        let config = GameConfig::new(rows, cols, mines).unwrap();
        let mut seed = 0u64;
        group.bench_function(name, |b| {
            b.iter(|| {
                seed = seed.wrapping_add(1);
                black_box(Board::build(config, RandomMinePlacer::seeded(seed)).unwrap())
            })
        });
    }
    group.finish();
}

fn bench_flood_reveal(c: &mut Criterion) {
    let board = Board::from_mine_coords((64, 64), &[(63, 63)]).unwrap();
    c.bench_function("reveal/flood_64x64", |b| {
        b.iter(|| {
            let mut mask = RevealedMask::new(board.size());
            black_box(reveal(&board, &mut mask, (0, 0)).unwrap())
        })
    });
}

criterion_group!(benches, bench_generation, bench_flood_reveal);
criterion_main!(benches);
