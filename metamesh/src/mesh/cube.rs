//! Single-cube marching cubes extraction
use super::{
    Mesh, Stats,
    normal::{DEFAULT_NORMAL, estimate_normal},
    table,
    types::{CellMask, Corner, Edge},
};
use crate::{
    Error,
    field::{Sampler, ScalarField},
};
use arrayvec::ArrayVec;
use log::trace;
use nalgebra::Vector3;

/// One grid cell, with the field sampled at its corners
///
/// Cubes are built fresh for every cell on every tick; they hold no reference
/// to the field or the output buffers.
#[derive(Copy, Clone, Debug)]
pub struct Cube {
    origin: Vector3<f64>,
    size: f64,
    values: [f64; 8],
}

impl Cube {
    /// Samples the field at the 8 corners of the cube
    ///
    /// Corner `i` is located at `origin + CORNER_OFFSETS[i] * size`.
    ///
    /// # Errors
    /// If any corner sample is not finite
    pub fn sample<F: ScalarField + ?Sized>(
        origin: Vector3<f64>,
        size: f64,
        field: &Sampler<F>,
    ) -> Result<Self, Error> {
        let mut values = [0.0; 8];
        for c in Corner::iter() {
            values[c.index()] = field.eval(origin + c.offset() * size)?;
        }
        Ok(Self {
            origin,
            size,
            values,
        })
    }

    /// Returns the position of the given corner
    pub fn corner(&self, c: Corner) -> Vector3<f64> {
        self.origin + c.offset() * self.size
    }

    /// Returns the field value at the given corner
    pub fn value(&self, c: Corner) -> f64 {
        self.values[c.index()]
    }

    /// Returns the mask of corners with a positive value
    pub fn mask(&self) -> CellMask {
        CellMask::from_values(&self.values)
    }

    /// Finds the zero crossing along an edge
    fn crossing(&self, e: Edge) -> Option<Vector3<f64>> {
        let (a, b) = e.corners();
        super::interpolate(
            self.corner(a),
            self.value(a),
            self.corner(b),
            self.value(b),
        )
    }

    /// Appends this cube's triangles to the output mesh
    ///
    /// Each triangle corner gets its own vertex and normal; nothing is shared
    /// with other triangles (even within this cube).  If any of a triangle's
    /// edges has no well-defined crossing, the whole triangle is dropped.
    ///
    /// Returns the number of triangles emitted.
    ///
    /// # Errors
    /// If a sample taken during normal estimation is not finite, or if the
    /// mesh runs out of `u32` indices.
    pub fn extract<F: ScalarField + ?Sized>(
        &self,
        field: &Sampler<F>,
        normal_step: f64,
        out: &mut Mesh,
        stats: &mut Stats,
    ) -> Result<usize, Error> {
        let mask = self.mask();
        let mut emitted = 0;
        for tri in table::triangles(mask) {
            let crossings: ArrayVec<Vector3<f64>, 3> =
                tri.iter().filter_map(|e| self.crossing(*e)).collect();
            let Ok(positions) = crossings.into_inner() else {
                trace!(
                    "dropping triangle {tri:?} in cube at {:?} (mask {:#04x})",
                    self.origin,
                    mask.bits()
                );
                stats.dropped_triangles += 1;
                continue;
            };

            let mut normals = [DEFAULT_NORMAL; 3];
            for (n, p) in normals.iter_mut().zip(&positions) {
                match estimate_normal(field, *p, normal_step)? {
                    Some(v) => *n = v,
                    None => {
                        trace!("zero gradient at {p:?}; using default normal");
                        stats.default_normals += 1;
                    }
                }
            }
            out.push_triangle(positions, normals)?;
            emitted += 1;
        }
        stats.triangles += emitted;
        Ok(emitted)
    }
}
