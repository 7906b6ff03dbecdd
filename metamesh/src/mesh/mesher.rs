//! Grid sweep driver
use super::{Cube, Mesh, Settings, ThreadPool};
use crate::{
    Error,
    field::{Sampler, ScalarField},
};
use log::{debug, warn};
use nalgebra::Vector3;

/// Counters collected while sweeping the grid
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Stats {
    /// Number of cubes sampled
    pub cubes: usize,
    /// Number of triangles emitted
    pub triangles: usize,
    /// Triangles skipped because an edge had no well-defined crossing
    pub dropped_triangles: usize,
    /// Vertices which fell back to [`DEFAULT_NORMAL`](super::DEFAULT_NORMAL)
    pub default_normals: usize,
}

impl std::ops::AddAssign for Stats {
    fn add_assign(&mut self, rhs: Self) {
        self.cubes += rhs.cubes;
        self.triangles += rhs.triangles;
        self.dropped_triangles += rhs.dropped_triangles;
        self.default_normals += rhs.default_normals;
    }
}

/// Owns a field and rebuilds its mesh once per tick
///
/// Each tick advances the field, then samples a grid of cubes centered on the
/// field's centroid.  The resulting [`Mesh`] stays valid until the next tick.
///
/// If a tick fails, the mesh is left empty; partial results are never
/// visible.
pub struct Mesher<F> {
    field: F,
    settings: Settings,
    threads: Option<ThreadPool>,
    mesh: Mesh,
    stats: Stats,
}

impl<F: ScalarField> Mesher<F> {
    /// Builds a new mesher, taking ownership of the field
    ///
    /// # Errors
    /// If the settings are invalid
    pub fn new(field: F, settings: Settings) -> Result<Self, Error> {
        settings.validate()?;
        Ok(Self {
            field,
            settings,
            threads: None,
            mesh: Mesh::new(),
            stats: Stats::default(),
        })
    }

    /// Sweeps the grid in parallel using the given pool
    ///
    /// The output is identical to a single-threaded sweep.
    pub fn with_threads(mut self, pool: ThreadPool) -> Self {
        self.threads = Some(pool);
        self
    }

    /// Returns the mesh built by the most recent tick
    pub fn mesh(&self) -> &Mesh {
        &self.mesh
    }

    /// Takes ownership of the mesh built by the most recent tick
    ///
    /// The mesher's own mesh is left empty.
    pub fn take_mesh(&mut self) -> Mesh {
        std::mem::take(&mut self.mesh)
    }

    /// Returns counters from the most recent tick
    pub fn stats(&self) -> Stats {
        self.stats
    }

    /// Returns the grid settings
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Borrows the field
    pub fn field(&self) -> &F {
        &self.field
    }

    /// Mutably borrows the field (e.g. to add or move balls between ticks)
    pub fn field_mut(&mut self) -> &mut F {
        &mut self.field
    }

    /// Unwraps the mesher, returning the field
    pub fn into_field(self) -> F {
        self.field
    }
}

impl<F: ScalarField + Sync> Mesher<F> {
    /// Advances the field by one step, then rebuilds the mesh
    ///
    /// # Errors
    /// If the field returns a non-finite value or the mesh runs out of `u32`
    /// indices.  The mesh is left empty in either case.
    pub fn tick(&mut self) -> Result<&Mesh, Error> {
        self.mesh.clear();
        self.field.advance();
        self.sweep()
    }

    /// Rebuilds the mesh without advancing the field
    ///
    /// Sweeping the same field twice produces identical buffers.
    ///
    /// # Errors
    /// Same as [`tick`](Self::tick)
    pub fn sweep(&mut self) -> Result<&Mesh, Error> {
        self.mesh.clear();
        self.stats = Stats::default();

        let origin = self.field.centroid();
        let sampler = Sampler::new(&self.field);
        let grid = Grid::new(&self.settings, origin);

        let r = match &self.threads {
            None => {
                let mut stats = Stats::default();
                (0..grid.n)
                    .try_for_each(|i| {
                        grid.slab(&sampler, i, &mut self.mesh, &mut stats)
                    })
                    .map(|()| stats)
            }
            Some(pool) => {
                Self::sweep_parallel(pool, &grid, &sampler, &mut self.mesh)
            }
        };

        match r {
            Ok(stats) => {
                debug!(
                    "swept {} cubes around {origin:?}: {} triangles, {} vertices",
                    stats.cubes,
                    stats.triangles,
                    self.mesh.vertices.len()
                );
                if stats.dropped_triangles > 0 || stats.default_normals > 0 {
                    warn!(
                        "dropped {} degenerate triangles; \
                         {} vertices used the default normal",
                        stats.dropped_triangles, stats.default_normals
                    );
                }
                self.stats = stats;
                Ok(&self.mesh)
            }
            Err(e) => {
                self.mesh.clear();
                Err(e)
            }
        }
    }

    /// Meshes each X slab into its own buffer, then concatenates them in order
    fn sweep_parallel(
        pool: &ThreadPool,
        grid: &Grid,
        sampler: &Sampler<F>,
        out: &mut Mesh,
    ) -> Result<Stats, Error> {
        use rayon::prelude::*;

        let slabs = pool.run(|| {
            (0..grid.n)
                .into_par_iter()
                .map(|i| {
                    let mut mesh = Mesh::new();
                    let mut stats = Stats::default();
                    grid.slab(sampler, i, &mut mesh, &mut stats)?;
                    Ok((mesh, stats))
                })
                .collect::<Result<Vec<_>, Error>>()
        })?;

        let mut stats = Stats::default();
        for (mesh, s) in &slabs {
            out.append(mesh)?;
            stats += *s;
        }
        Ok(stats)
    }
}

/// Absolute grid positions for a single sweep
struct Grid {
    /// Minimum corner of the first cube
    start: Vector3<f64>,
    /// Cubes per axis
    n: usize,
    cube_size: f64,
    normal_step: f64,
}

impl Grid {
    fn new(settings: &Settings, origin: Vector3<f64>) -> Self {
        Self {
            start: origin.add_scalar(settings.begin),
            n: settings.cubes_per_axis(),
            cube_size: settings.cube_size,
            normal_step: settings.normal_step,
        }
    }

    /// Meshes every cube with X index `i`, in `(y, z)` order
    fn slab<F: ScalarField + ?Sized>(
        &self,
        sampler: &Sampler<F>,
        i: usize,
        out: &mut Mesh,
        stats: &mut Stats,
    ) -> Result<(), Error> {
        let x = self.start.x + i as f64 * self.cube_size;
        for j in 0..self.n {
            let y = self.start.y + j as f64 * self.cube_size;
            for k in 0..self.n {
                let z = self.start.z + k as f64 * self.cube_size;
                let cube =
                    Cube::sample(Vector3::new(x, y, z), self.cube_size, sampler)?;
                cube.extract(sampler, self.normal_step, out, stats)?;
                stats.cubes += 1;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::field::{Ball, Frozen, Metaballs};

    fn small_settings() -> Settings {
        Settings {
            begin: -1.5,
            end: 1.5,
            cube_size: 0.2,
            normal_step: 0.05,
        }
    }

    fn ball(x: f64, radius: f64) -> Ball {
        Ball {
            center: Vector3::new(x, 0.0, 0.0),
            radius,
        }
    }

    /// Field that counts how often it has been advanced
    struct Counter {
        ticks: usize,
        inner: Metaballs,
    }
    impl ScalarField for Counter {
        fn eval(&self, p: Vector3<f64>) -> f64 {
            self.inner.eval(p)
        }
        fn advance(&mut self) {
            self.ticks += 1;
        }
        fn centroid(&self) -> Vector3<f64> {
            self.inner.centroid()
        }
    }

    #[test]
    fn test_bad_settings() {
        let settings = Settings {
            cube_size: -1.0,
            ..Settings::default()
        };
        assert!(Mesher::new(Metaballs::default(), settings).is_err());
    }

    #[test]
    fn test_tick_advances_once() {
        let field = Counter {
            ticks: 0,
            inner: Metaballs::new(vec![ball(0.0, 0.5)]),
        };
        let mut m = Mesher::new(field, small_settings()).unwrap();
        m.tick().unwrap();
        m.tick().unwrap();
        m.sweep().unwrap();
        assert_eq!(m.field().ticks, 2);
        assert_eq!(m.stats().cubes, 15 * 15 * 15);
    }

    #[test]
    fn test_sweep_is_idempotent() {
        let field = Frozen(Metaballs::random(4, 7));
        let mut m = Mesher::new(field, small_settings()).unwrap();
        let a = m.tick().unwrap().clone();
        let b = m.tick().unwrap().clone();
        assert!(!a.is_empty());
        assert_eq!(a, b);
    }

    #[test]
    fn test_buffers_are_rebuilt() {
        let mut m = Mesher::new(
            Metaballs::new(vec![ball(0.0, 0.6)]),
            small_settings(),
        )
        .unwrap();
        let n = m.tick().unwrap().triangle_count();
        assert!(n > 0);
        for _ in 0..3 {
            assert_eq!(m.sweep().unwrap().triangle_count(), n);
        }
        assert_eq!(m.stats().triangles, n);

        // A second ball adds more surface
        m.field_mut().push(ball(1.1, 0.25), crate::field::Orbit::STILL);
        let bigger = m.sweep().unwrap().triangle_count();
        assert!(bigger > n);

        let mesh = m.take_mesh();
        assert_eq!(mesh.triangle_count(), bigger);
        assert!(m.mesh().is_empty());
    }

    #[test]
    fn test_window_follows_centroid() {
        let settings = small_settings();
        let near = Metaballs::new(vec![ball(0.0, 0.5)]);
        let far = Metaballs::new(vec![ball(100.0, 0.5)]);

        let mut a = Mesher::new(near, settings).unwrap();
        let mut b = Mesher::new(far, settings).unwrap();
        let ma = a.sweep().unwrap().clone();
        let mb = b.sweep().unwrap().clone();
        assert_eq!(ma.triangle_count(), mb.triangle_count());
        for (va, vb) in ma.vertices.iter().zip(&mb.vertices) {
            approx::assert_relative_eq!(
                va + Vector3::new(100.0, 0.0, 0.0),
                *vb,
                epsilon = 1e-9
            );
        }
    }

    #[test]
    fn test_parallel_matches_serial() {
        let field = Metaballs::random(6, 99);
        let mut serial = Mesher::new(field.clone(), small_settings()).unwrap();
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(4)
            .build()
            .unwrap();
        let mut parallel = Mesher::new(field, small_settings())
            .unwrap()
            .with_threads(ThreadPool::Custom(pool));
        for _ in 0..3 {
            let a = serial.tick().unwrap().clone();
            let b = parallel.tick().unwrap().clone();
            assert_eq!(a, b);
            assert_eq!(serial.stats(), parallel.stats());
        }

        let mut global = Mesher::new(Metaballs::random(6, 99), small_settings())
            .unwrap()
            .with_threads(ThreadPool::Global);
        for _ in 0..3 {
            global.tick().unwrap();
        }
        assert_eq!(global.mesh(), serial.mesh());
    }

    /// Sphere that returns NaN in the `x > 0.3` half-space once broken
    struct Fragile {
        broken: bool,
        inner: Metaballs,
    }
    impl ScalarField for Fragile {
        fn eval(&self, p: Vector3<f64>) -> f64 {
            if self.broken && p.x > 0.3 {
                f64::NAN
            } else {
                self.inner.eval(p)
            }
        }
        fn advance(&mut self) {}
        fn centroid(&self) -> Vector3<f64> {
            self.inner.centroid()
        }
    }

    fn fragile() -> Fragile {
        Fragile {
            broken: false,
            inner: Metaballs::new(vec![ball(0.0, 0.5)]),
        }
    }

    #[test]
    fn test_failed_tick_clears_mesh() {
        let mut m = Mesher::new(fragile(), small_settings()).unwrap();
        assert!(!m.tick().unwrap().is_empty());

        m.field_mut().broken = true;
        assert!(matches!(m.tick(), Err(Error::NonFiniteSample { .. })));
        assert!(m.mesh().is_empty());
        assert_eq!(m.stats(), Stats::default());
    }

    #[test]
    fn test_failed_parallel_tick_clears_mesh() {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(4)
            .build()
            .unwrap();
        let mut m = Mesher::new(fragile(), small_settings())
            .unwrap()
            .with_threads(ThreadPool::Custom(pool));
        assert!(!m.tick().unwrap().is_empty());
        assert!(m.stats().triangles > 0);

        m.field_mut().broken = true;
        match m.tick() {
            Err(Error::NonFiniteSample { x, value, .. }) => {
                assert!(x > 0.3);
                assert!(value.is_nan());
            }
            r => panic!("unexpected result {r:?}"),
        }
        assert!(m.mesh().is_empty());
        assert_eq!(m.stats(), Stats::default());

        // The mesher recovers once the field is fixed
        m.field_mut().broken = false;
        assert!(!m.tick().unwrap().is_empty());
    }
}
