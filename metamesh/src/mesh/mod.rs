//! Isosurface extraction with marching cubes
//!
//! The [`Mesher`] samples a [`ScalarField`](crate::field::ScalarField) on a
//! regular grid of cubes centered on the field's centroid, and turns each cube
//! into up to five triangles using a precomputed [case table](table).  The
//! result is a [`Mesh`], which is rebuilt from scratch on every tick.
//!
//! ```
//! use metamesh::{
//!     field::{Ball, Metaballs},
//!     mesh::{Mesher, Settings},
//! };
//! use nalgebra::Vector3;
//!
//! let field = Metaballs::new(vec![Ball {
//!     center: Vector3::zeros(),
//!     radius: 1.0,
//! }]);
//! let settings = Settings {
//!     begin: -1.5,
//!     end: 1.5,
//!     cube_size: 0.25,
//!     ..Settings::default()
//! };
//! let mut mesher = Mesher::new(field, settings)?;
//! let mesh = mesher.tick()?;
//! assert!(mesh.triangle_count() > 0);
//! # Ok::<(), metamesh::Error>(())
//! ```
use crate::Error;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

mod config;
mod cube;
mod interp;
mod mesher;
mod normal;
mod output;

pub mod table;
pub mod types;

pub use config::{Settings, ThreadPool};
pub use cube::Cube;
pub use interp::interpolate;
pub use mesher::{Mesher, Stats};
pub use normal::{DEFAULT_NORMAL, estimate_normal};

/// A triangle soup with per-vertex normals
///
/// Every triangle owns its three vertices; vertices on an edge shared between
/// two cubes are stored once per triangle, and may differ slightly in their
/// normals.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Mesh {
    /// Vertex positions
    pub vertices: Vec<Vector3<f64>>,
    /// Vertex normals, index-aligned with `vertices`
    pub normals: Vec<Vector3<f64>>,
    /// Triangle indices into `vertices`, three per triangle
    pub indices: Vec<u32>,
}

impl Mesh {
    /// Builds a new empty mesh
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes all data, keeping allocations for reuse
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.normals.clear();
        self.indices.clear();
    }

    /// Checks whether the mesh has no triangles
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Returns the number of triangles
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Iterates over triangles, as triples of vertex indices
    pub fn triangles(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
        self.indices.chunks_exact(3).map(|t| [t[0], t[1], t[2]])
    }

    /// Appends a triangle with three fresh vertices
    ///
    /// # Errors
    /// If the new vertices can't be addressed with `u32` indices
    pub(crate) fn push_triangle(
        &mut self,
        positions: [Vector3<f64>; 3],
        normals: [Vector3<f64>; 3],
    ) -> Result<(), Error> {
        let start = self.next_index(3)?;
        self.vertices.extend(positions);
        self.normals.extend(normals);
        self.indices.extend([start, start + 1, start + 2]);
        Ok(())
    }

    /// Appends another mesh, rebasing its indices
    ///
    /// # Errors
    /// If the combined mesh can't be addressed with `u32` indices
    pub fn append(&mut self, other: &Mesh) -> Result<(), Error> {
        let offset = self.next_index(other.vertices.len())?;
        self.vertices.extend_from_slice(&other.vertices);
        self.normals.extend_from_slice(&other.normals);
        self.indices.extend(other.indices.iter().map(|i| i + offset));
        Ok(())
    }

    /// Returns the index of the next vertex, checking that `n` more vertices
    /// will still fit within `u32` indices
    fn next_index(&self, n: usize) -> Result<u32, Error> {
        let start = self.vertices.len();
        let end = start + n;
        u32::try_from(end).map_err(|_| Error::IndexOverflow(end))?;
        Ok(start as u32)
    }
}
