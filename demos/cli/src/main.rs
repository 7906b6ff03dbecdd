use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::Result;
use clap::Parser;
use env_logger::Env;
use log::info;

use metamesh::{
    field::Metaballs,
    mesh::{Mesher, Settings, ThreadPool},
};

/// Meshes an animated metaball scene
#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Start of the sampling window on each axis, relative to the centroid
    #[clap(long, default_value_t = -3.0, allow_negative_numbers = true)]
    begin: f64,

    /// End of the sampling window on each axis, relative to the centroid
    #[clap(long, default_value_t = 3.0, allow_negative_numbers = true)]
    end: f64,

    /// Side length of each cube
    #[clap(long, default_value_t = 0.1)]
    cube_size: f64,

    /// Step used when estimating normals
    #[clap(long, default_value_t = 0.1)]
    normal_step: f64,

    /// Number of metaballs in the scene
    #[clap(short, long, default_value_t = 6)]
    balls: usize,

    /// Seed for ball placement and motion
    #[clap(long, default_value_t = 0)]
    seed: u64,

    /// Number of ticks to run
    #[clap(short = 'N', long, default_value_t = 1)]
    ticks: usize,

    /// Number of threads to use (1 for a single-threaded sweep)
    #[clap(short, long)]
    threads: Option<NonZeroUsize>,

    /// Name of a `.stl` file to write the final mesh to
    #[clap(short, long)]
    out: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .init();
    let args = Args::parse();

    let settings = Settings {
        begin: args.begin,
        end: args.end,
        cube_size: args.cube_size,
        normal_step: args.normal_step,
    };
    let field = Metaballs::random(args.balls, args.seed);
    let pool = match args.threads {
        Some(n) if n.get() == 1 => None,
        Some(n) => Some(ThreadPool::Custom(
            rayon::ThreadPoolBuilder::new()
                .num_threads(n.get())
                .build()?,
        )),
        None => Some(ThreadPool::Global),
    };
    let threads = pool.as_ref().map_or(1, ThreadPool::thread_count);

    let mut mesher = Mesher::new(field, settings)?;
    if let Some(pool) = pool {
        mesher = mesher.with_threads(pool);
    }

    let n = settings.cubes_per_axis();
    info!(
        "Meshing {} balls on a {n}×{n}×{n} grid with {threads} thread(s)",
        args.balls
    );

    let start = Instant::now();
    for _ in 0..args.ticks {
        mesher.tick()?;
    }
    info!(
        "Ran {}x at {:?} ms/tick",
        args.ticks,
        start.elapsed().as_micros() as f64 / 1000.0 / (args.ticks.max(1) as f64)
    );

    let stats = mesher.stats();
    info!(
        "Final mesh has {} triangles ({} dropped, {} default normals)",
        stats.triangles, stats.dropped_triangles, stats.default_normals
    );

    if let Some(out) = args.out {
        info!("Writing STL to {out:?}");
        mesher.mesh().write_stl(&mut std::fs::File::create(out)?)?;
    }

    Ok(())
}
