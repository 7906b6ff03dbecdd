//! Edge zero-crossing interpolation
use nalgebra::Vector3;

/// Finds where the field crosses zero along the segment `p0-p1`
///
/// `f0` and `f1` are the field values at `p0` and `p1`; they're expected to
/// have opposite signs.  The crossing is found by linear interpolation:
///
/// ```text
/// p = (p0 * f1 - p1 * f0) / (f1 - f0)
/// ```
///
/// Returns `None` if the samples are equal (so the segment has no well-defined
/// crossing) or if the result is not finite.
///
/// ```
/// # use metamesh::mesh::interpolate;
/// # use nalgebra::Vector3;
/// let p = interpolate(
///     Vector3::new(0.0, 0.0, 0.0), -1.0,
///     Vector3::new(1.0, 0.0, 0.0), 3.0,
/// ).unwrap();
/// assert_eq!(p, Vector3::new(0.25, 0.0, 0.0));
/// ```
pub fn interpolate(
    p0: Vector3<f64>,
    f0: f64,
    p1: Vector3<f64>,
    f1: f64,
) -> Option<Vector3<f64>> {
    if f1 == f0 {
        return None;
    }
    let p = (p0 * f1 - p1 * f0) / (f1 - f0);
    if p.iter().all(|v| v.is_finite()) {
        Some(p)
    } else {
        None
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_linear_field_is_exact() {
        // With F(p) = p.x, the crossing is always at the origin
        for (x0, x1) in [(-1.0, 1.0), (-0.001, 7.5), (-30.0, 0.25), (-2.0, 2e-9)]
        {
            let p0 = Vector3::new(x0, 0.0, 0.0);
            let p1 = Vector3::new(x1, 0.0, 0.0);
            let p = interpolate(p0, x0, p1, x1).unwrap();
            assert_relative_eq!(p, Vector3::zeros(), epsilon = 1e-12);

            // Direction doesn't matter
            let p = interpolate(p1, x1, p0, x0).unwrap();
            assert_relative_eq!(p, Vector3::zeros(), epsilon = 1e-12);
        }
    }

    #[test]
    fn test_crossing_is_on_segment() {
        let p0 = Vector3::new(1.0, 2.0, 3.0);
        let p1 = Vector3::new(1.0, 2.0, 3.5);
        let p = interpolate(p0, 0.3, p1, -0.1).unwrap();
        assert_relative_eq!(p, Vector3::new(1.0, 2.0, 3.375), epsilon = 1e-12);

        // A zero sample puts the crossing exactly on that endpoint
        let p = interpolate(p0, 0.0, p1, 1.0).unwrap();
        assert_eq!(p, p0);
    }

    #[test]
    fn test_degenerate() {
        let p0 = Vector3::new(0.0, 0.0, 0.0);
        let p1 = Vector3::new(0.0, 1.0, 0.0);
        assert_eq!(interpolate(p0, 0.0, p1, 0.0), None);
        assert_eq!(interpolate(p0, 2.0, p1, 2.0), None);

        // Overflow produces NaN, which is also rejected
        let p2 = Vector3::new(0.0, 2.0, 0.0);
        assert_eq!(interpolate(p0, -f64::MAX, p2, f64::MAX), None);
    }
}
