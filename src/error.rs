//! Error types for the bee colony optimizer.
//!
//! Every validation failure is raised eagerly, before any random number is
//! drawn or any colony state is touched.

use thiserror::Error;

/// Errors that can occur while building or running a colony.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AbcError {
    /// No bounds were supplied.
    #[error("bounds must contain at least one dimension")]
    EmptyBounds,

    /// A lower bound exceeds its upper bound, a bound is not finite, or the
    /// interval width overflows.
    #[error("invalid bounds at index {index}: lower ({lower}) > upper ({upper}), not finite, or too wide")]
    InvalidBounds {
        /// Index of the offending dimension
        index: usize,
        /// The lower bound value
        lower: f64,
        /// The upper bound value
        upper: f64,
    },

    /// The colony cannot host every mutation operator.
    ///
    /// At least 10 bees are required, with at least 5 employed and 5 onlookers.
    #[error("colony too small: {n_bees} bees split into {n_employed} employed and {n_onlooker} onlookers (need >= 5 of each)")]
    ColonyTooSmall {
        /// Total number of bees
        n_bees: usize,
        /// Number of employed bees
        n_employed: usize,
        /// Number of onlooker bees
        n_onlooker: usize,
    },

    /// The employed count leaves no onlookers.
    #[error("n_employed ({n_employed}) must be less than n_bees ({n_bees})")]
    TooManyEmployed {
        /// Requested employed count
        n_employed: usize,
        /// Total number of bees
        n_bees: usize,
    },

    /// `max_iterations` is zero.
    #[error("max_iterations must be at least 1")]
    ZeroIterations,

    /// The resolved abandonment limit is not positive.
    #[error("abandonment limit must be positive, got {limit}")]
    InvalidLimit {
        /// The resolved limit
        limit: usize,
    },

    /// Mutation rate is outside [0, 1].
    #[error("invalid mutation rate: {rate} (must be in [0, 1])")]
    InvalidMutationRate {
        /// The invalid rate
        rate: f64,
    },

    /// Scaling factor is not a positive finite number.
    #[error("invalid scaling factor: {sf} (must be positive and finite)")]
    InvalidScalingFactor {
        /// The invalid scaling factor
        sf: f64,
    },

    /// Stagnation tolerance is NaN.
    #[error("stagnation tolerance must not be NaN")]
    InvalidStagnationTolerance,

    /// Tournament size is outside `[1, n_employed]`.
    #[error("invalid tournament size: {size} (must be in [1, {n_employed}])")]
    InvalidTournamentSize {
        /// The requested tournament size
        size: usize,
        /// Number of employed bees
        n_employed: usize,
    },

    /// A tournament size was given for a strategy that does not use one,
    /// or was missing for tournament selection.
    #[error("tournament size {} with selection `{selection}`", describe_size(.size))]
    TournamentSizeMismatch {
        /// Selection strategy name
        selection: String,
        /// The tournament size given, if any
        size: Option<usize>,
    },

    /// A strategy name was not recognized.
    #[error("unknown {family} strategy: `{name}`")]
    UnknownStrategy {
        /// Strategy family (selection, mutation, initialization)
        family: &'static str,
        /// The unrecognized name
        name: String,
    },

    /// A position's length does not match the number of bounds.
    #[error("dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch {
        /// Number of bounds
        expected: usize,
        /// Position length provided
        got: usize,
    },
}

fn describe_size(size: &Option<usize>) -> String {
    match size {
        Some(k) => format!("{k} is not allowed"),
        None => "is required".to_string(),
    }
}

/// A specialized `Result` type for colony operations.
pub type Result<T> = std::result::Result<T, AbcError>;

impl AbcError {
    /// Returns `true` for invalid construction or optimization parameters.
    pub fn is_config_error(&self) -> bool {
        !self.is_dimension_error()
    }

    /// Returns `true` if a position and the bounds disagree in length.
    pub fn is_dimension_error(&self) -> bool {
        matches!(self, AbcError::DimensionMismatch { .. })
    }
}
