//! Core trait and fitness transform for the ABC framework.

/// A scalar objective to be minimized over a bounded box.
///
/// Any `Fn(&[f64]) -> f64` closure implements this trait, so most callers
/// never implement it by hand. The colony assumes evaluation is pure: the
/// same position always yields the same value and nothing else observes the
/// call.
///
/// # Examples
///
/// ```
/// use u_beecolony::abc::Objective;
///
/// let sphere = |x: &[f64]| x.iter().map(|v| v * v).sum::<f64>();
/// assert_eq!(sphere.evaluate(&[1.0, 2.0]), 5.0);
/// ```
pub trait Objective {
    /// Evaluates the objective at `position`. Lower is better.
    fn evaluate(&self, position: &[f64]) -> f64;
}

impl<F> Objective for F
where
    F: Fn(&[f64]) -> f64,
{
    fn evaluate(&self, position: &[f64]) -> f64 {
        self(position)
    }
}

/// Maps an objective value to a positive, larger-is-better fitness.
///
/// `1 / (1 + value)` for non-negative values, `1 + |value|` otherwise.
/// The result is strictly positive for every finite `value`; NaN propagates.
pub fn fitness_from_value(value: f64) -> f64 {
    if value >= 0.0 {
        1.0 / (1.0 + value)
    } else if value < 0.0 {
        1.0 + value.abs()
    } else {
        f64::NAN
    }
}

/// Total ordering key for fitness where NaN ranks below every number.
pub(crate) fn rank_key(fitness: f64) -> f64 {
    if fitness.is_nan() {
        f64::NEG_INFINITY
    } else {
        fitness
    }
}

/// Greedy replacement rule: the challenger wins ties, never wins with NaN
/// fitness, and always beats a NaN incumbent.
pub(crate) fn accepts(challenger: f64, incumbent: f64) -> bool {
    !challenger.is_nan() && rank_key(challenger) >= rank_key(incumbent)
}
