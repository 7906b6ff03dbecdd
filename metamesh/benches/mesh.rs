use criterion::{
    BenchmarkId, Criterion, black_box, criterion_group, criterion_main,
};
use metamesh::{
    field::{Frozen, Metaballs},
    mesh::{Mesher, Settings, ThreadPool},
};

const BALLS: usize = 8;
const SEED: u64 = 0x5eed;

fn settings(cube_size: f64) -> Settings {
    Settings {
        cube_size,
        ..Settings::default()
    }
}

pub fn metaball_thread_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("speed vs threads (metaballs, 60³)");
    for threads in [1, 2, 4, 8] {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build()
            .unwrap();
        let mut mesher =
            Mesher::new(Metaballs::random(BALLS, SEED), settings(0.1))
                .unwrap()
                .with_threads(ThreadPool::Custom(pool));
        group.bench_function(BenchmarkId::new("tick", threads), |b| {
            b.iter(|| black_box(mesher.tick().unwrap().triangle_count()))
        });
    }
    let mut mesher =
        Mesher::new(Metaballs::random(BALLS, SEED), settings(0.1)).unwrap();
    group.bench_function(BenchmarkId::new("tick", "serial"), |b| {
        b.iter(|| black_box(mesher.tick().unwrap().triangle_count()))
    });
}

pub fn metaball_resolution(c: &mut Criterion) {
    let mut group = c.benchmark_group("speed vs resolution (metaballs)");
    for cube_size in [0.2, 0.1, 0.05] {
        let field = Frozen(Metaballs::random(BALLS, SEED));
        let mut mesher = Mesher::new(field, settings(cube_size))
            .unwrap()
            .with_threads(ThreadPool::Global);
        group.bench_function(BenchmarkId::new("sweep", cube_size), |b| {
            b.iter(|| black_box(mesher.sweep().unwrap().triangle_count()))
        });
    }
}

criterion_group!(benches, metaball_thread_sweep, metaball_resolution);
criterion_main!(benches);
