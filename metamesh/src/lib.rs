//! Metamesh turns animated metaballs into triangle meshes.
//!
//! A **scalar field** is a function `f(x, y, z)` which is evaluated at
//! positions in 3D space.  In this crate, the surface of interest is the set of
//! points where `f(x, y, z) = 0`: positions with `f > 0` are **inside** the
//! shape, and positions with `f <= 0` are **outside**.
//!
//! # Fields
//! Fields implement the [`ScalarField`](crate::field::ScalarField) trait, which
//! combines pointwise evaluation with a notion of time: calling
//! [`advance`](crate::field::ScalarField::advance) moves the field forward by
//! one step, and [`centroid`](crate::field::ScalarField::centroid) reports
//! where the interesting part of the field currently lives.
//!
//! The built-in field is [`Metaballs`](crate::field::Metaballs), a sum of
//! inverse-square potentials whose centers drift along periodic orbits:
//!
//! ```
//! use metamesh::field::{Ball, Metaballs, ScalarField};
//! use nalgebra::Vector3;
//!
//! let field = Metaballs::new(vec![Ball {
//!     center: Vector3::zeros(),
//!     radius: 1.0,
//! }]);
//! assert!(field.eval(Vector3::new(0.5, 0.0, 0.0)) > 0.0); // inside
//! assert!(field.eval(Vector3::new(2.0, 0.0, 0.0)) < 0.0); // outside
//! ```
//!
//! # Meshing
//! The [`mesh`] module implements marching cubes.  A
//! [`Mesher`](crate::mesh::Mesher) owns a field; each call to
//! [`tick`](crate::mesh::Mesher::tick) advances the field, samples it on a grid
//! of cubes centered on the field's centroid, and rebuilds a
//! [`Mesh`](crate::mesh::Mesh) of triangles with per-vertex normals.
//!
//! ```
//! use metamesh::{
//!     field::Metaballs,
//!     mesh::{Mesher, Settings, ThreadPool},
//! };
//!
//! let field = Metaballs::random(4, 1234);
//! let mut mesher = Mesher::new(field, Settings::default())?
//!     .with_threads(ThreadPool::Global);
//! for _ in 0..3 {
//!     let mesh = mesher.tick()?;
//!     assert_eq!(mesh.vertices.len(), mesh.normals.len());
//! }
//!
//! let mut stl = vec![];
//! mesher.mesh().write_stl(&mut stl)?;
//! # Ok::<(), metamesh::Error>(())
//! ```
#![warn(missing_docs)]

mod error;
pub use error::Error;

pub mod field;
pub mod mesh;
