use battlefield_core::{Canvas, ColumnTerrain, Drawable, RidgeTerrain, TerrainSprite};
use criterion::{Criterion, criterion_group, criterion_main};
use image::Rgb;
use rand::SeedableRng;
use rand::rngs::StdRng;

const SEED: u64 = 2025;

fn bench_column_profile(c: &mut Criterion) {
    c.bench_function("ColumnTerrain 11 columns", |b| {
        let terrain = ColumnTerrain::default();
        let mut rng = StdRng::seed_from_u64(SEED);
        b.iter(|| terrain.generate_profile(&mut rng).unwrap())
    });
}

fn bench_ridge_profile(c: &mut Criterion) {
    c.bench_function("RidgeTerrain 1280 columns", |b| {
        let terrain = RidgeTerrain::default();
        let mut rng = StdRng::seed_from_u64(SEED);
        b.iter(|| terrain.generate_ridges(&mut rng).unwrap())
    });
}

fn bench_ridge_with_craters(c: &mut Criterion) {
    c.bench_function("RidgeTerrain + 10 craters", |b| {
        let terrain = RidgeTerrain::default();
        let mut rng = StdRng::seed_from_u64(SEED);
        b.iter(|| {
            let mut profile = terrain.generate_ridges(&mut rng).unwrap();
            for i in 0..10 {
                profile.carve_crater(64.0 + i as f32 * 120.0, 30);
            }
            profile
        })
    });
}

fn bench_ridge_draw(c: &mut Criterion) {
    c.bench_function("RidgeTerrain draw + erase 1280x720", |b| {
        let profile = RidgeTerrain::default()
            .generate_ridges(&mut StdRng::seed_from_u64(SEED))
            .unwrap();
        let sprite = TerrainSprite::new(&profile);
        let mut canvas = Canvas::new(1280, 720, Rgb([80, 134, 193]));
        b.iter(|| {
            sprite.draw(&mut canvas);
            sprite.erase(&mut canvas);
        })
    });
}

criterion_group!(
    terrain_benchmarks,
    bench_column_profile,
    bench_ridge_profile,
    bench_ridge_with_craters,
    bench_ridge_draw
);
criterion_main!(terrain_benchmarks);
