//! Animated metaball field
use super::ScalarField;
use nalgebra::Vector3;
use rand::{Rng, SeedableRng, rngs::StdRng};
use serde::{Deserialize, Serialize};

/// Minimum squared distance used when evaluating a ball's potential
///
/// Keeps samples which land exactly on a ball's center finite.
const MIN_DIST_SQUARED: f64 = 1e-12;

/// A single point-source potential
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    /// Center of the ball
    pub center: Vector3<f64>,
    /// Radius at which an isolated ball's potential crosses zero
    pub radius: f64,
}

impl Ball {
    /// Potential contributed by this ball at the given point
    pub fn potential(&self, p: Vector3<f64>) -> f64 {
        let d2 = (p - self.center).norm_squared().max(MIN_DIST_SQUARED);
        self.radius * self.radius / d2
    }
}

/// Per-axis sinusoidal motion of a ball around its anchor
///
/// At time `t`, the ball's center is `anchor + amplitude * sin(frequency * t +
/// phase)`, evaluated component-wise.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Orbit {
    /// Peak offset from the anchor on each axis
    pub amplitude: Vector3<f64>,
    /// Angular frequency on each axis, in radians per unit time
    pub frequency: Vector3<f64>,
    /// Phase offset on each axis, in radians
    pub phase: Vector3<f64>,
}

impl Orbit {
    /// An orbit which doesn't move
    pub const STILL: Self = Self {
        amplitude: Vector3::new(0.0, 0.0, 0.0),
        frequency: Vector3::new(0.0, 0.0, 0.0),
        phase: Vector3::new(0.0, 0.0, 0.0),
    };

    fn offset(&self, t: f64) -> Vector3<f64> {
        let angle = self.frequency * t + self.phase;
        self.amplitude.component_mul(&angle.map(f64::sin))
    }
}

/// One ball, along with the orbit that moves it
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
struct Source {
    /// Ball at the current time
    ball: Ball,
    /// Center of the orbit
    anchor: Vector3<f64>,
    orbit: Orbit,
}

impl Source {
    fn update(&mut self, t: f64) {
        self.ball.center = self.anchor + self.orbit.offset(t);
    }
}

/// Sum of metaball potentials, minus one
///
/// The field is `Σ rᵢ² / |p - cᵢ|² - 1`, so an isolated ball's surface is a
/// sphere of radius `rᵢ`, and nearby balls blend smoothly into each other.
/// An empty field is `-1` everywhere.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Metaballs {
    sources: Vec<Source>,
    time: f64,
    dt: f64,
}

impl Default for Metaballs {
    fn default() -> Self {
        Self::new(vec![])
    }
}

impl Metaballs {
    /// Default time step for [`advance`](ScalarField::advance)
    pub const DEFAULT_TIMESTEP: f64 = 1.0 / 60.0;

    /// Builds a field from a set of stationary balls
    pub fn new(balls: Vec<Ball>) -> Self {
        let sources = balls
            .into_iter()
            .map(|ball| Source {
                ball,
                anchor: ball.center,
                orbit: Orbit::STILL,
            })
            .collect();
        Self {
            sources,
            time: 0.0,
            dt: Self::DEFAULT_TIMESTEP,
        }
    }

    /// Builds a random animated scene
    ///
    /// The result is fully determined by `count` and `seed`.
    pub fn random(count: usize, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut out = Self::new(vec![]);
        for _ in 0..count {
            let center = Vector3::from_fn(|_, _| rng.gen_range(-1.0..1.0));
            let radius = rng.gen_range(0.4..0.8);
            let orbit = Orbit {
                amplitude: Vector3::from_fn(|_, _| rng.gen_range(0.2..0.8)),
                frequency: Vector3::from_fn(|_, _| rng.gen_range(0.5..2.0)),
                phase: Vector3::from_fn(|_, _| {
                    rng.gen_range(0.0..std::f64::consts::TAU)
                }),
            };
            out.push(Ball { center, radius }, orbit);
        }
        out
    }

    /// Adds a ball to the field, anchoring its orbit at its current center
    pub fn push(&mut self, ball: Ball, orbit: Orbit) {
        let mut s = Source {
            ball,
            anchor: ball.center,
            orbit,
        };
        s.update(self.time);
        self.sources.push(s);
    }

    /// Replaces the orbit of the given ball
    ///
    /// # Panics
    /// If `index` is out of range
    pub fn set_orbit(&mut self, index: usize, orbit: Orbit) {
        let s = &mut self.sources[index];
        s.orbit = orbit;
        s.update(self.time);
    }

    /// Sets the time step used by [`advance`](ScalarField::advance)
    pub fn with_timestep(mut self, dt: f64) -> Self {
        self.dt = dt;
        self
    }

    /// Returns the number of balls
    pub fn len(&self) -> usize {
        self.sources.len()
    }

    /// Checks whether the field has no balls
    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    /// Iterates over the balls at their current positions
    pub fn balls(&self) -> impl ExactSizeIterator<Item = &Ball> + '_ {
        self.sources.iter().map(|s| &s.ball)
    }

    /// Returns the current time
    pub fn time(&self) -> f64 {
        self.time
    }
}

impl ScalarField for Metaballs {
    fn eval(&self, p: Vector3<f64>) -> f64 {
        self.balls().map(|b| b.potential(p)).sum::<f64>() - 1.0
    }

    fn advance(&mut self) {
        self.time += self.dt;
        for s in &mut self.sources {
            s.update(self.time);
        }
    }

    fn centroid(&self) -> Vector3<f64> {
        if self.is_empty() {
            return Vector3::zeros();
        }
        let sum: Vector3<f64> = self.balls().map(|b| b.center).sum();
        sum / self.len() as f64
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_single_ball_surface() {
        let f = Metaballs::new(vec![Ball {
            center: Vector3::new(1.0, 2.0, 3.0),
            radius: 0.5,
        }]);
        assert_relative_eq!(f.eval(Vector3::new(1.5, 2.0, 3.0)), 0.0);
        assert_relative_eq!(f.eval(Vector3::new(1.0, 1.5, 3.0)), 0.0);
        assert!(f.eval(Vector3::new(1.0, 2.0, 3.1)) > 0.0);
        assert!(f.eval(Vector3::new(2.0, 2.0, 3.0)) < 0.0);
        assert!(f.eval(Vector3::new(1.0, 2.0, 3.0)).is_finite());
    }

    #[test]
    fn test_empty() {
        let mut f = Metaballs::default();
        f.advance();
        assert_eq!(f.eval(Vector3::new(0.3, 0.1, -0.4)), -1.0);
        assert_eq!(f.centroid(), Vector3::zeros());
    }

    #[test]
    fn test_centroid() {
        let f = Metaballs::new(vec![
            Ball {
                center: Vector3::new(1.0, 0.0, 0.0),
                radius: 1.0,
            },
            Ball {
                center: Vector3::new(0.0, 3.0, 1.0),
                radius: 0.1,
            },
        ]);
        assert_relative_eq!(f.centroid(), Vector3::new(0.5, 1.5, 0.5));
    }

    #[test]
    fn test_orbit() {
        let mut f = Metaballs::new(vec![Ball {
            center: Vector3::zeros(),
            radius: 1.0,
        }])
        .with_timestep(0.5);
        f.set_orbit(
            0,
            Orbit {
                amplitude: Vector3::new(1.0, 0.0, 2.0),
                frequency: Vector3::new(1.0, 1.0, 2.0),
                phase: Vector3::zeros(),
            },
        );
        assert_eq!(f.balls().next().unwrap().center, Vector3::zeros());
        f.advance();
        f.advance();
        assert_relative_eq!(f.time(), 1.0);
        assert_relative_eq!(
            f.balls().next().unwrap().center,
            Vector3::new(1f64.sin(), 0.0, 2.0 * 2f64.sin())
        );
    }

    #[test]
    fn test_random_is_deterministic() {
        let mut a = Metaballs::random(5, 1234);
        let mut b = Metaballs::random(5, 1234);
        assert_eq!(a, b);
        a.advance();
        b.advance();
        assert_eq!(a, b);
        assert_eq!(a.len(), 5);
        for ball in a.balls() {
            assert!((0.4..0.8).contains(&ball.radius));
        }
    }

    #[test]
    fn test_serde_round_trip() {
        let mut a = Metaballs::random(3, 99).with_timestep(0.25);
        a.advance();
        let bytes = bincode::serialize(&a).unwrap();
        let mut b: Metaballs = bincode::deserialize(&bytes).unwrap();
        assert_eq!(a, b);

        // Every ball keeps its orbit, so all of them keep moving
        let before: Vec<Ball> = b.balls().copied().collect();
        b.advance();
        assert_eq!(b.balls().len(), 3);
        for (old, new) in before.iter().zip(b.balls()) {
            assert_ne!(old.center, new.center);
            assert_eq!(old.radius, new.radius);
        }
        a.advance();
        assert_eq!(a, b);

        // The last ball has an orbit to replace
        let last = b.len() - 1;
        b.set_orbit(last, Orbit::STILL);
        b.advance();
        let centers: Vec<_> = b.balls().map(|b| b.center).collect();
        b.advance();
        assert_eq!(b.balls().last().unwrap().center, centers[last]);
    }
}
