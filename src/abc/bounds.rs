//! Box constraints of the search space.

use crate::error::{AbcError, Result};
use rand::Rng;

/// Per-dimension `[lower, upper]` intervals.
///
/// Every position the colony produces lies inside these intervals;
/// out-of-range steps are clipped, never rejected.
///
/// # Examples
///
/// ```
/// use u_beecolony::abc::Bounds;
///
/// let bounds = Bounds::new(&[(-5.0, 5.0), (0.0, 1.0)]).unwrap();
/// assert_eq!(bounds.dim(), 2);
/// assert_eq!(bounds.clip(0, 7.5), 5.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    lower: Vec<f64>,
    upper: Vec<f64>,
}

impl Bounds {
    /// Builds bounds from `(lower, upper)` pairs.
    ///
    /// Fails if no pair is given, a bound is not finite, `lower > upper`, or
    /// the width `upper - lower` overflows.
    pub fn new(pairs: &[(f64, f64)]) -> Result<Self> {
        if pairs.is_empty() {
            return Err(AbcError::EmptyBounds);
        }
        for (index, &(lower, upper)) in pairs.iter().enumerate() {
            if !lower.is_finite()
                || !upper.is_finite()
                || lower > upper
                || !(upper - lower).is_finite()
            {
                return Err(AbcError::InvalidBounds {
                    index,
                    lower,
                    upper,
                });
            }
        }
        Ok(Self {
            lower: pairs.iter().map(|p| p.0).collect(),
            upper: pairs.iter().map(|p| p.1).collect(),
        })
    }

    /// Number of dimensions.
    pub fn dim(&self) -> usize {
        self.lower.len()
    }

    /// Lower bound of dimension `d`.
    pub fn lower(&self, d: usize) -> f64 {
        self.lower[d]
    }

    /// Upper bound of dimension `d`.
    pub fn upper(&self, d: usize) -> f64 {
        self.upper[d]
    }

    /// Width of the widest interval.
    pub fn max_width(&self) -> f64 {
        self.lower
            .iter()
            .zip(&self.upper)
            .map(|(lo, hi)| hi - lo)
            .fold(0.0, f64::max)
    }

    /// Clips `x` into the interval of dimension `d`. NaN maps to the lower bound.
    pub fn clip(&self, d: usize, x: f64) -> f64 {
        if x.is_nan() {
            return self.lower[d];
        }
        x.clamp(self.lower[d], self.upper[d])
    }

    /// Returns `true` if every component of `position` lies inside its interval.
    pub fn contains(&self, position: &[f64]) -> bool {
        position.len() == self.dim()
            && position
                .iter()
                .enumerate()
                .all(|(d, &x)| self.lower[d] <= x && x <= self.upper[d])
    }

    /// Draws a uniform random position, one dimension after another.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> Vec<f64> {
        (0..self.dim())
            .map(|d| {
                let u: f64 = rng.random::<f64>();
                self.lower[d] + u * (self.upper[d] - self.lower[d])
            })
            .collect()
    }

    /// Maps a point of the unit hypercube affinely into the box.
    pub fn scale_unit(&self, unit: &[f64]) -> Vec<f64> {
        unit.iter()
            .enumerate()
            .map(|(d, &u)| self.lower[d] + (self.upper[d] - self.lower[d]) * u)
            .collect()
    }

    /// Reflects `position` through the centre of the box: `lower + upper - x`.
    pub fn opposite(&self, position: &[f64]) -> Vec<f64> {
        position
            .iter()
            .enumerate()
            .map(|(d, &x)| self.lower[d] + self.upper[d] - x)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    #[test]
    fn test_rejects_empty() {
        assert_eq!(Bounds::new(&[]), Err(AbcError::EmptyBounds));
    }

    #[test]
    fn test_rejects_inverted() {
        let err = Bounds::new(&[(0.0, 1.0), (3.0, -3.0)]).unwrap_err();
        assert!(matches!(err, AbcError::InvalidBounds { index: 1, .. }));
    }

    #[test]
    fn test_rejects_infinite() {
        assert!(Bounds::new(&[(f64::NEG_INFINITY, 0.0)]).is_err());
        assert!(Bounds::new(&[(0.0, f64::NAN)]).is_err());
    }

    #[test]
    fn test_degenerate_interval_allowed() {
        let bounds = Bounds::new(&[(2.0, 2.0)]).unwrap();
        let mut rng = create_rng(1);
        assert_eq!(bounds.sample(&mut rng), vec![2.0]);
    }

    #[test]
    fn test_sample_inside() {
        let bounds = Bounds::new(&[(-3.0, 1.0), (10.0, 20.0), (-1e-3, 1e-3)]).unwrap();
        let mut rng = create_rng(42);
        for _ in 0..500 {
            assert!(bounds.contains(&bounds.sample(&mut rng)));
        }
    }

    #[test]
    fn test_opposite_and_scale() {
        let bounds = Bounds::new(&[(-10.0, 10.0), (0.0, 4.0)]).unwrap();
        assert_eq!(bounds.opposite(&[3.0, 1.0]), vec![-3.0, 3.0]);
        assert_eq!(bounds.scale_unit(&[0.5, 0.25]), vec![0.0, 1.0]);
    }

    #[test]
    fn test_clip() {
        let bounds = Bounds::new(&[(-1.0, 1.0)]).unwrap();
        assert_eq!(bounds.clip(0, -4.0), -1.0);
        assert_eq!(bounds.clip(0, 0.3), 0.3);
        assert_eq!(bounds.clip(0, 9.0), 1.0);
        assert_eq!(bounds.clip(0, f64::INFINITY), 1.0);
        assert_eq!(bounds.clip(0, f64::NAN), -1.0);
    }

    #[test]
    fn test_rejects_overflowing_width() {
        let err = Bounds::new(&[(0.0, 1.0), (-1e308, 1e308)]).unwrap_err();
        assert!(matches!(err, AbcError::InvalidBounds { index: 1, .. }));
        assert!(Bounds::new(&[(-8e307, 8e307)]).is_ok());
    }

    #[test]
    fn test_wide_bounds_sample_inside() {
        let bounds = Bounds::new(&[(-8e307, 8e307)]).unwrap();
        let mut rng = create_rng(5);
        for _ in 0..200 {
            assert!(bounds.contains(&bounds.sample(&mut rng)));
        }
    }

    #[test]
    fn test_max_width() {
        let bounds = Bounds::new(&[(-1.0, 1.0), (0.0, 10.0), (3.0, 3.0)]).unwrap();
        assert_eq!(bounds.max_width(), 10.0);
    }
}
