//! Types used in configuration structures
use crate::Error;
use serde::{Deserialize, Serialize};

/// Thread pool to use for multithreaded meshing
///
/// Most users will use the global Rayon pool, but it's possible to provide your
/// own as well.
pub enum ThreadPool {
    /// User-provided pool
    Custom(rayon::ThreadPool),
    /// Global Rayon pool
    Global,
}

impl ThreadPool {
    /// Runs a function across the thread pool
    pub fn run<F: FnOnce() -> V + Send, V: Send>(&self, f: F) -> V {
        match self {
            ThreadPool::Custom(p) => p.install(f),
            ThreadPool::Global => f(),
        }
    }

    /// Returns the number of threads in the pool
    pub fn thread_count(&self) -> usize {
        match self {
            ThreadPool::Custom(p) => p.current_num_threads(),
            ThreadPool::Global => rayon::current_num_threads(),
        }
    }
}

/// Settings for the sampling grid
///
/// The grid spans `[begin, end)` on each axis, relative to the field's
/// centroid, and is divided into cubes of side `cube_size`.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Start of the sampling window on each axis, relative to the centroid
    pub begin: f64,
    /// End of the sampling window on each axis, relative to the centroid
    pub end: f64,
    /// Side length of each cube
    pub cube_size: f64,
    /// Step used for central-difference normal estimation
    pub normal_step: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            begin: -3.0,
            end: 3.0,
            cube_size: 0.1,
            normal_step: 0.1,
        }
    }
}

impl Settings {
    /// Slack when dividing the window into cubes, so that e.g. a 6.0-wide
    /// window with 0.1 cubes gives 60 cubes (rather than 61)
    const ROUNDING_SLACK: f64 = 1e-9;

    /// Checks that the settings describe a usable grid
    pub fn validate(&self) -> Result<(), Error> {
        if !self.begin.is_finite() || !self.end.is_finite() {
            return Err(Error::BadSettings("window bounds must be finite"));
        }
        if self.begin >= self.end {
            return Err(Error::BadSettings("`begin` must be less than `end`"));
        }
        if !(self.cube_size.is_finite() && self.cube_size > 0.0) {
            return Err(Error::BadSettings("`cube_size` must be positive"));
        }
        if !(self.normal_step.is_finite() && self.normal_step > 0.0) {
            return Err(Error::BadSettings("`normal_step` must be positive"));
        }
        Ok(())
    }

    /// Returns the number of cubes along each axis
    ///
    /// Cube `i` begins at `begin + i * cube_size`; the last cube is the final
    /// one which begins before `end`.
    pub fn cubes_per_axis(&self) -> usize {
        let n = (self.end - self.begin) / self.cube_size;
        (n - Self::ROUNDING_SLACK).ceil().max(0.0) as usize
    }
}
