//! Self-adaptive step size ("one-fifth success rule").
//!
//! # References
//!
//! - Rechenberg (1973), *Evolutionsstrategie*
//! - Akay & Karaboga (2012), "A modified Artificial Bee Colony algorithm for
//!   real-parameter optimization"

/// Target success ratio.
pub const TARGET_SUCCESS_RATIO: f64 = 0.2;

/// Multiplicative adjustment applied on each update.
pub const ADJUSTMENT: f64 = 0.85;

/// Largest scaling factor for unit-width bounds.
///
/// Keeps `2 · sf · width` finite so `sf` always parameterizes a uniform
/// draw and every difference step stays finite.
pub const MAX_SCALING_FACTOR: f64 = f64::MAX / 4.0;

/// Tracks the scaling factor `sf` shared by the employed and onlooker phases.
///
/// When adaptive, each [`record`](Self::record) widens the step (`sf / 0.85`)
/// if more than one fifth of the phase's mutations succeeded, narrows it
/// (`sf * 0.85`) if fewer did, and leaves it unchanged at exactly one fifth.
///
/// # Examples
///
/// ```
/// use u_beecolony::abc::ScalingController;
///
/// let mut sf = ScalingController::new(1.0, true);
/// sf.record(5, 10);
/// assert!(sf.current() > 1.0);
/// sf.reset();
/// assert_eq!(sf.current(), 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScalingController {
    initial: f64,
    current: f64,
    adaptive: bool,
    ceiling: f64,
}

impl ScalingController {
    /// Creates a controller starting at `initial`, capped at
    /// [`MAX_SCALING_FACTOR`].
    pub fn new(initial: f64, adaptive: bool) -> Self {
        Self {
            initial,
            current: initial.min(MAX_SCALING_FACTOR),
            adaptive,
            ceiling: MAX_SCALING_FACTOR,
        }
    }

    /// Caps the factor so that steps over intervals of width `max_width`
    /// stay finite: `sf <= MAX_SCALING_FACTOR / max(max_width, 1)`.
    pub fn with_max_width(mut self, max_width: f64) -> Self {
        self.ceiling = MAX_SCALING_FACTOR / max_width.max(1.0);
        self.current = self.current.min(self.ceiling);
        self
    }

    /// Upper limit of the factor.
    pub fn ceiling(&self) -> f64 {
        self.ceiling
    }

    /// The scaling factor to use for the next mutation.
    pub fn current(&self) -> f64 {
        self.current
    }

    /// The value [`reset`](Self::reset) restores.
    pub fn initial(&self) -> f64 {
        self.initial
    }

    /// Whether [`record`](Self::record) adjusts the factor.
    pub fn is_adaptive(&self) -> bool {
        self.adaptive
    }

    /// Feeds the outcome of one phase: `successes` out of `attempts`.
    ///
    /// The factor stays within `[f64::MIN_POSITIVE, ceiling]`.
    pub fn record(&mut self, successes: usize, attempts: usize) {
        if !self.adaptive || attempts == 0 {
            return;
        }
        let ratio = successes as f64 / attempts as f64;
        let next = if ratio > TARGET_SUCCESS_RATIO {
            self.current / ADJUSTMENT
        } else if ratio < TARGET_SUCCESS_RATIO {
            self.current * ADJUSTMENT
        } else {
            self.current
        };
        self.current = next.clamp(f64::MIN_POSITIVE, self.ceiling);
    }

    /// Restores the initial factor.
    pub fn reset(&mut self) {
        self.current = self.initial.min(self.ceiling);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_widens_on_success() {
        let mut sf = ScalingController::new(1.0, true);
        let mut last = sf.current();
        for _ in 0..10 {
            sf.record(3, 10);
            assert!(sf.current() > last);
            last = sf.current();
        }
        assert!((sf.current() - 1.0 / ADJUSTMENT.powi(10)).abs() < 1e-9);
    }

    #[test]
    fn test_narrows_on_failure() {
        let mut sf = ScalingController::new(2.0, true);
        let mut last = sf.current();
        for _ in 0..10 {
            sf.record(1, 10);
            assert!(sf.current() < last);
            last = sf.current();
        }
    }

    #[test]
    fn test_exact_one_fifth_is_neutral() {
        let mut sf = ScalingController::new(1.5, true);
        sf.record(1, 5);
        sf.record(2, 10);
        assert_eq!(sf.current(), 1.5);
    }

    #[test]
    fn test_disabled_never_changes() {
        let mut sf = ScalingController::new(1.0, false);
        sf.record(10, 10);
        sf.record(0, 10);
        assert_eq!(sf.current(), 1.0);
        assert!(!sf.is_adaptive());
    }

    #[test]
    fn test_reset_restores_initial() {
        let mut sf = ScalingController::new(0.5, true);
        sf.record(0, 5);
        assert!(sf.current() < 0.5);
        sf.reset();
        assert_eq!(sf.current(), 0.5);
        assert_eq!(sf.initial(), 0.5);
    }

    #[test]
    fn test_stays_positive_and_finite() {
        let mut sf = ScalingController::new(1.0, true);
        for _ in 0..10_000 {
            sf.record(0, 5);
        }
        assert!(sf.current() > 0.0);

        let mut sf = ScalingController::new(1.0, true);
        for _ in 0..10_000 {
            sf.record(5, 5);
        }
        assert_eq!(sf.current(), MAX_SCALING_FACTOR);
        assert!((2.0 * sf.current()).is_finite());
    }

    #[test]
    fn test_ceiling_follows_width() {
        let mut sf = ScalingController::new(1.0, true).with_max_width(1e10);
        for _ in 0..10_000 {
            sf.record(5, 5);
        }
        assert_eq!(sf.current(), sf.ceiling());
        assert!((2.0 * sf.current() * 1e10).is_finite());

        // Narrow boxes keep the unit-width ceiling.
        let sf = ScalingController::new(1.0, true).with_max_width(0.0);
        assert_eq!(sf.ceiling(), MAX_SCALING_FACTOR);
    }

    #[test]
    fn test_initial_above_ceiling_is_capped() {
        let mut sf = ScalingController::new(f64::MAX, false).with_max_width(100.0);
        assert_eq!(sf.current(), MAX_SCALING_FACTOR / 100.0);
        sf.reset();
        assert_eq!(sf.current(), MAX_SCALING_FACTOR / 100.0);
        assert_eq!(sf.initial(), f64::MAX);
    }
}
