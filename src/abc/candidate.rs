//! Candidate solutions ("bees").

use super::bounds::Bounds;
use super::types::{fitness_from_value, Objective};
use crate::error::{AbcError, Result};
use rand::Rng;

/// A position in the search space together with its objective value.
///
/// Candidates are value objects: the position never changes after
/// construction. Mutation operators build a new candidate from a copy of the
/// parent's position, so the stored value always belongs to the stored
/// position. Only the trial counter changes over a candidate's lifetime.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Candidate {
    position: Vec<f64>,
    value: f64,
    trial: usize,
}

impl Candidate {
    /// Creates a candidate at `position`, or at a uniform random point of
    /// `bounds` when `position` is `None`.
    ///
    /// # Errors
    ///
    /// [`AbcError::DimensionMismatch`] if an explicit position's length
    /// differs from `bounds.dim()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_beecolony::abc::{Bounds, Candidate};
    /// use rand::SeedableRng;
    ///
    /// let bounds = Bounds::new(&[(-1.0, 1.0), (-1.0, 1.0)]).unwrap();
    /// let sphere = |x: &[f64]| x.iter().map(|v| v * v).sum::<f64>();
    /// let mut rng = rand::rngs::StdRng::seed_from_u64(0);
    ///
    /// let bee = Candidate::new(Some(vec![0.0, 0.0]), &bounds, &sphere, &mut rng).unwrap();
    /// assert_eq!(bee.fitness(), 1.0);
    /// assert!(Candidate::new(Some(vec![0.0]), &bounds, &sphere, &mut rng).is_err());
    /// ```
    pub fn new<O: Objective + ?Sized, R: Rng>(
        position: Option<Vec<f64>>,
        bounds: &Bounds,
        objective: &O,
        rng: &mut R,
    ) -> Result<Self> {
        match position {
            Some(position) => {
                if position.len() != bounds.dim() {
                    return Err(AbcError::DimensionMismatch {
                        expected: bounds.dim(),
                        got: position.len(),
                    });
                }
                Ok(Self::evaluated(position, objective))
            }
            None => Ok(Self::random(bounds, objective, rng)),
        }
    }

    /// Evaluates `position` without a dimension check.
    pub(crate) fn evaluated<O: Objective + ?Sized>(position: Vec<f64>, objective: &O) -> Self {
        let value = objective.evaluate(&position);
        Self {
            position,
            value,
            trial: 0,
        }
    }

    /// Samples a uniform random candidate inside `bounds`.
    pub(crate) fn random<O: Objective + ?Sized, R: Rng>(
        bounds: &Bounds,
        objective: &O,
        rng: &mut R,
    ) -> Self {
        Self::evaluated(bounds.sample(rng), objective)
    }

    /// A fresh copy of this position with the trial counter at zero.
    pub(crate) fn recruit(&self) -> Self {
        Self {
            position: self.position.clone(),
            value: self.value,
            trial: 0,
        }
    }

    /// The position vector.
    pub fn position(&self) -> &[f64] {
        &self.position
    }

    /// Objective value at the position.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Larger-is-better transform of [`value`](Self::value).
    pub fn fitness(&self) -> f64 {
        fitness_from_value(self.value)
    }

    /// Consecutive unsuccessful improvement attempts.
    pub fn trial(&self) -> usize {
        self.trial
    }

    pub(crate) fn record_failure(&mut self) {
        self.trial += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;
    use std::cell::Cell;

    fn sphere(x: &[f64]) -> f64 {
        x.iter().map(|v| v * v).sum()
    }

    #[test]
    fn test_explicit_position() {
        let bounds = Bounds::new(&[(-5.0, 5.0); 2]).unwrap();
        let mut rng = create_rng(0);
        let bee = Candidate::new(Some(vec![1.0, 1.0]), &bounds, &sphere, &mut rng).unwrap();
        assert_eq!(bee.position(), &[1.0, 1.0]);
        assert!((bee.value() - 2.0).abs() < 1e-15);
        assert!((bee.fitness() - 1.0 / 3.0).abs() < 1e-15);
        assert_eq!(bee.trial(), 0);
    }

    #[test]
    fn test_dimension_mismatch() {
        let bounds = Bounds::new(&[(-5.0, 5.0); 3]).unwrap();
        let mut rng = create_rng(0);
        let err = Candidate::new(Some(vec![0.0; 2]), &bounds, &sphere, &mut rng).unwrap_err();
        assert_eq!(
            err,
            AbcError::DimensionMismatch {
                expected: 3,
                got: 2
            }
        );
    }

    #[test]
    fn test_random_position_in_bounds() {
        let bounds = Bounds::new(&[(-5.0, -4.0), (100.0, 101.0)]).unwrap();
        let mut rng = create_rng(3);
        for _ in 0..100 {
            let bee = Candidate::new(None, &bounds, &sphere, &mut rng).unwrap();
            assert!(bounds.contains(bee.position()));
        }
    }

    #[test]
    fn test_negative_value_fitness() {
        let bounds = Bounds::new(&[(-5.0, 5.0)]).unwrap();
        let mut rng = create_rng(0);
        let f = |x: &[f64]| x[0];
        let bee = Candidate::new(Some(vec![-2.0]), &bounds, &f, &mut rng).unwrap();
        assert!((bee.fitness() - 3.0).abs() < 1e-15);
    }

    #[test]
    fn test_reading_fitness_does_not_reevaluate() {
        let calls = Cell::new(0usize);
        let counted = |x: &[f64]| {
            calls.set(calls.get() + 1);
            x[0]
        };
        let bounds = Bounds::new(&[(0.0, 1.0)]).unwrap();
        let mut rng = create_rng(0);
        let bee = Candidate::new(Some(vec![0.5]), &bounds, &counted, &mut rng).unwrap();
        let _ = (bee.value(), bee.fitness(), bee.fitness());
        assert_eq!(calls.get(), 1);
        assert_eq!(bee.trial(), 0);
    }

    #[test]
    fn test_recruit_resets_trial() {
        let bounds = Bounds::new(&[(0.0, 1.0)]).unwrap();
        let mut rng = create_rng(0);
        let mut bee = Candidate::new(Some(vec![0.5]), &bounds, &sphere, &mut rng).unwrap();
        bee.record_failure();
        bee.record_failure();
        assert_eq!(bee.trial(), 2);
        let copy = bee.recruit();
        assert_eq!(copy.trial(), 0);
        assert_eq!(copy.position(), bee.position());
    }
}
