//! Scalar fields which can be meshed
//!
//! The mesher only talks to a field through the [`ScalarField`] trait.  By
//! convention, a positive value means that a point is **inside** the shape and
//! a negative value means that it's **outside**; the mesh approximates the set
//! of points where the field is zero.
//!
//! [`Metaballs`] is the reference implementation, a sum of point-source
//! potentials that drift over time.
use crate::Error;
use nalgebra::Vector3;

mod metaball;
pub use metaball::{Ball, Metaballs, Orbit};

/// A time-varying scalar field
pub trait ScalarField {
    /// Evaluates the field at the given position
    ///
    /// Implementations must return a finite value; the mesher treats anything
    /// else as a fatal error for the current tick.
    fn eval(&self, p: Vector3<f64>) -> f64;

    /// Steps the field forward by one tick
    fn advance(&mut self);

    /// Returns an approximate center of the field's influence
    ///
    /// This is only used to position the sampling window.
    fn centroid(&self) -> Vector3<f64>;
}

impl<F: ScalarField + ?Sized> ScalarField for Box<F> {
    fn eval(&self, p: Vector3<f64>) -> f64 {
        (**self).eval(p)
    }
    fn advance(&mut self) {
        (**self).advance()
    }
    fn centroid(&self) -> Vector3<f64> {
        (**self).centroid()
    }
}

/// Wrapper which freezes a field in time
///
/// Evaluation and centroid are forwarded to the inner field, but
/// [`advance`](ScalarField::advance) does nothing.
#[derive(Clone, Debug)]
pub struct Frozen<F>(pub F);

impl<F: ScalarField> ScalarField for Frozen<F> {
    fn eval(&self, p: Vector3<f64>) -> f64 {
        self.0.eval(p)
    }
    fn advance(&mut self) {
        // Nothing to do here
    }
    fn centroid(&self) -> Vector3<f64> {
        self.0.centroid()
    }
}

/// Read-only handle to a field, used while sweeping the grid
///
/// Every sample is checked for finiteness, so that components downstream of
/// the sampler only ever see well-formed values.
pub struct Sampler<'a, F: ?Sized> {
    field: &'a F,
}

// Manual impls, since `derive` would require `F: Clone`
impl<F: ?Sized> Clone for Sampler<'_, F> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<F: ?Sized> Copy for Sampler<'_, F> {}

impl<'a, F: ScalarField + ?Sized> Sampler<'a, F> {
    /// Builds a new sampler borrowing the given field
    pub fn new(field: &'a F) -> Self {
        Self { field }
    }

    /// Evaluates the field at a single point
    ///
    /// # Errors
    /// Returns [`Error::NonFiniteSample`] if the field produces NaN or an
    /// infinite value.
    pub fn eval(&self, p: Vector3<f64>) -> Result<f64, Error> {
        let value = self.field.eval(p);
        if value.is_finite() {
            Ok(value)
        } else {
            Err(Error::NonFiniteSample {
                x: p.x,
                y: p.y,
                z: p.z,
                value,
            })
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    /// Field which is NaN in the `x > 0` half-space
    struct Broken;
    impl ScalarField for Broken {
        fn eval(&self, p: Vector3<f64>) -> f64 {
            if p.x > 0.0 { f64::NAN } else { -1.0 }
        }
        fn advance(&mut self) {}
        fn centroid(&self) -> Vector3<f64> {
            Vector3::zeros()
        }
    }

    #[test]
    fn test_sampler_rejects_nan() {
        let s = Sampler::new(&Broken);
        assert_eq!(s.eval(Vector3::new(-1.0, 0.0, 0.0)).unwrap(), -1.0);
        match s.eval(Vector3::new(1.0, 2.0, 3.0)) {
            Err(Error::NonFiniteSample { x, y, z, value }) => {
                assert_eq!((x, y, z), (1.0, 2.0, 3.0));
                assert!(value.is_nan());
            }
            r => panic!("unexpected result {r:?}"),
        }
    }

    #[test]
    fn test_frozen() {
        let mut balls = Metaballs::new(vec![Ball {
            center: Vector3::new(1.0, 0.0, 0.0),
            radius: 0.5,
        }]);
        balls.set_orbit(
            0,
            metaball::Orbit {
                amplitude: Vector3::new(1.0, 1.0, 1.0),
                frequency: Vector3::new(1.0, 2.0, 3.0),
                phase: Vector3::zeros(),
            },
        );

        let mut frozen = Frozen(balls.clone());
        frozen.advance();
        assert_eq!(frozen.centroid(), balls.centroid());

        balls.advance();
        assert_ne!(frozen.centroid(), balls.centroid());
    }

    #[test]
    fn test_boxed_field() {
        let mut f: Box<dyn ScalarField> = Box::new(Metaballs::default());
        f.advance();
        assert_eq!(f.eval(Vector3::zeros()), -1.0);
    }
}
