//! Normal estimation from the field gradient
use crate::{
    Error,
    field::{ScalarField, Sampler},
};
use nalgebra::Vector3;

/// Normal used when the gradient vanishes
pub const DEFAULT_NORMAL: Vector3<f64> = Vector3::new(0.0, 0.0, 1.0);

/// Estimates the surface normal at `p` by central differences
///
/// The gradient is sampled with step `h` along each axis (six evaluations in
/// total), then negated and normalized, so the result points from positive
/// (inside) toward negative (outside) field values.
///
/// Returns `Ok(None)` if the gradient is zero, in which case the caller should
/// pick a fallback normal.
///
/// # Errors
/// If any sample is not finite
pub fn estimate_normal<F: ScalarField + ?Sized>(
    field: &Sampler<F>,
    p: Vector3<f64>,
    h: f64,
) -> Result<Option<Vector3<f64>>, Error> {
    let mut grad = Vector3::zeros();
    for i in 0..3 {
        let mut d = Vector3::zeros();
        d[i] = h;
        grad[i] = field.eval(p + d)? - field.eval(p - d)?;
    }
    Ok((-grad)
        .try_normalize(0.0)
        .filter(|n| n.iter().all(|v| v.is_finite())))
}

#[cfg(test)]
mod test {
    use super::*;
    use approx::assert_relative_eq;

    /// Linear field `F(p) = p · dir`
    struct Linear(Vector3<f64>);
    impl ScalarField for Linear {
        fn eval(&self, p: Vector3<f64>) -> f64 {
            p.dot(&self.0)
        }
        fn advance(&mut self) {}
        fn centroid(&self) -> Vector3<f64> {
            Vector3::zeros()
        }
    }

    #[test]
    fn test_linear_x() {
        let f = Linear(Vector3::x());
        let s = Sampler::new(&f);
        for p in [
            Vector3::zeros(),
            Vector3::new(3.0, -2.0, 0.5),
            Vector3::new(-100.0, 7.0, 1e3),
        ] {
            let n = estimate_normal(&s, p, 0.1).unwrap().unwrap();
            assert_relative_eq!(n, Vector3::new(-1.0, 0.0, 0.0), epsilon = 1e-9);
        }
    }

    #[test]
    fn test_linear_diagonal() {
        let f = Linear(Vector3::new(1.0, 2.0, -2.0));
        let s = Sampler::new(&f);
        let n = estimate_normal(&s, Vector3::new(0.2, 0.3, 0.4), 0.01)
            .unwrap()
            .unwrap();
        assert_relative_eq!(
            n,
            Vector3::new(-1.0, -2.0, 2.0) / 3.0,
            epsilon = 1e-9
        );
        assert_relative_eq!(n.norm(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_flat_field() {
        let f = Linear(Vector3::zeros());
        let s = Sampler::new(&f);
        assert_eq!(estimate_normal(&s, Vector3::zeros(), 0.1).unwrap(), None);
    }

    #[test]
    fn test_nan_field() {
        struct Nan;
        impl ScalarField for Nan {
            fn eval(&self, _p: Vector3<f64>) -> f64 {
                f64::NAN
            }
            fn advance(&mut self) {}
            fn centroid(&self) -> Vector3<f64> {
                Vector3::zeros()
            }
        }
        let s = Sampler::new(&Nan);
        assert!(matches!(
            estimate_normal(&s, Vector3::zeros(), 0.1),
            Err(Error::NonFiniteSample { .. })
        ));
    }
}
