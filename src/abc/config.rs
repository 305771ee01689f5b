//! ABC run configuration.
//!
//! [`AbcConfig`] holds every parameter of one [`Colony::optimize`] call.
//! Colony size and the scout cap belong to the colony itself.
//!
//! [`Colony::optimize`]: super::Colony::optimize

use super::init::Initialization;
use super::mutation::Mutation;
use super::selection::Selection;
use crate::error::{AbcError, Result};

/// Abandonment limit: trials a food source may fail before a scout replaces it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Limit {
    /// `round(0.6 · n_employed · dim)`.
    #[default]
    Auto,
    /// A fixed number of trials.
    Trials(usize),
}

impl Limit {
    /// Resolves the limit for a colony of `n_employed` food sources in `dim`
    /// dimensions.
    pub fn resolve(&self, n_employed: usize, dim: usize) -> usize {
        match *self {
            Limit::Auto => (0.6 * n_employed as f64 * dim as f64).round() as usize,
            Limit::Trials(n) => n,
        }
    }
}

/// Configuration for one ABC optimization run.
///
/// # Defaults
///
/// ```
/// use u_beecolony::abc::{AbcConfig, Mutation, Selection};
///
/// let config = AbcConfig::default();
/// assert_eq!(config.max_iterations, 100);
/// assert_eq!(config.selection, Selection::RouletteWheel);
/// assert_eq!(config.mutation, Mutation::Standard);
/// assert_eq!(config.scaling_factor, 1.0);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_beecolony::abc::{AbcConfig, Initialization, Mutation, Selection};
///
/// let config = AbcConfig::default()
///     .with_max_iterations(500)
///     .with_selection(Selection::Tournament { size: 3 })
///     .with_mutation(Mutation::BestOne)
///     .with_initialization(Initialization::Chaotic)
///     .with_self_adaptive(true)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AbcConfig {
    /// Maximum number of employed → onlooker → scout iterations.
    pub max_iterations: usize,

    /// Abandonment limit for the scout phase.
    pub limit: Limit,

    /// Onlooker selection strategy.
    pub selection: Selection,

    /// Neighbor-generation operator.
    pub mutation: Mutation,

    /// Placement of initial and scout food sources.
    pub initialization: Initialization,

    /// Stop once the population standard deviation of employed fitness drops
    /// below this value.
    ///
    /// `f64::NEG_INFINITY` (the default) disables early termination.
    pub stagnation_tolerance: f64,

    /// Initial step-size multiplier `sf`.
    pub scaling_factor: f64,

    /// Adapt `sf` with the one-fifth success rule after every phase.
    pub self_adaptive: bool,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,

    /// Whether to keep a population snapshot per iteration.
    ///
    /// The best-per-iteration history is always kept. Disable for long runs
    /// on large colonies.
    pub record_history: bool,
}

impl Default for AbcConfig {
    fn default() -> Self {
        Self {
            max_iterations: 100,
            limit: Limit::Auto,
            selection: Selection::RouletteWheel,
            mutation: Mutation::Standard,
            initialization: Initialization::Random,
            stagnation_tolerance: f64::NEG_INFINITY,
            scaling_factor: 1.0,
            self_adaptive: false,
            seed: None,
            record_history: true,
        }
    }
}

impl AbcConfig {
    /// Sets the maximum number of iterations.
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    /// Sets the abandonment limit.
    pub fn with_limit(mut self, limit: Limit) -> Self {
        self.limit = limit;
        self
    }

    /// Sets the onlooker selection strategy.
    pub fn with_selection(mut self, selection: Selection) -> Self {
        self.selection = selection;
        self
    }

    /// Sets the mutation operator.
    pub fn with_mutation(mut self, mutation: Mutation) -> Self {
        self.mutation = mutation;
        self
    }

    /// Sets the initialization strategy.
    pub fn with_initialization(mut self, initialization: Initialization) -> Self {
        self.initialization = initialization;
        self
    }

    /// Sets the stagnation tolerance.
    pub fn with_stagnation_tolerance(mut self, tol: f64) -> Self {
        self.stagnation_tolerance = tol;
        self
    }

    /// Sets the initial scaling factor.
    pub fn with_scaling_factor(mut self, sf: f64) -> Self {
        self.scaling_factor = sf;
        self
    }

    /// Enables or disables the one-fifth rule.
    pub fn with_self_adaptive(mut self, adaptive: bool) -> Self {
        self.self_adaptive = adaptive;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Enables or disables per-iteration population snapshots.
    pub fn with_record_history(mut self, record: bool) -> Self {
        self.record_history = record;
        self
    }

    /// Preset for quick runs: 100 iterations, adaptive step size, early stop
    /// once fitness spread falls below `1e-12`.
    pub fn fast() -> Self {
        Self {
            max_iterations: 100,
            self_adaptive: true,
            stagnation_tolerance: 1e-12,
            ..Self::default()
        }
    }

    /// Preset balancing quality and time: 500 iterations, `ABC/best/1`,
    /// adaptive step size.
    pub fn balanced() -> Self {
        Self {
            max_iterations: 500,
            mutation: Mutation::BestOne,
            self_adaptive: true,
            ..Self::default()
        }
    }

    /// Preset for solution quality: 2000 iterations, chaotic initialization,
    /// `ABC/best/1`, no early stop.
    pub fn quality() -> Self {
        Self {
            max_iterations: 2000,
            mutation: Mutation::BestOne,
            initialization: Initialization::Chaotic,
            ..Self::default()
        }
    }

    /// Validates the parameters that do not depend on the colony.
    ///
    /// [`Colony::optimize`](super::Colony::optimize) additionally checks the
    /// tournament size and the resolved limit against the colony.
    pub fn validate(&self) -> Result<()> {
        if self.max_iterations == 0 {
            return Err(AbcError::ZeroIterations);
        }
        if let Limit::Trials(0) = self.limit {
            return Err(AbcError::InvalidLimit { limit: 0 });
        }
        if !self.scaling_factor.is_finite() || self.scaling_factor <= 0.0 {
            return Err(AbcError::InvalidScalingFactor {
                sf: self.scaling_factor,
            });
        }
        if self.stagnation_tolerance.is_nan() {
            return Err(AbcError::InvalidStagnationTolerance);
        }
        self.mutation.validate()
    }
}
