//! Waggle-dance selection of food sources for the onlooker phase.
//!
//! Both strategies work on the employed fitness vector (larger is better)
//! and return the employed slot index for every onlooker.
//!
//! # References
//!
//! - Karaboga (2005), "An Idea Based on Honey Bee Swarm for Numerical
//!   Optimization"
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"

use super::types::rank_key;
use crate::error::{AbcError, Result};
use rand::seq::index;
use rand::Rng;

/// Selection strategy for the onlooker phase.
///
/// # Examples
///
/// ```
/// use u_beecolony::abc::Selection;
///
/// let sel = Selection::from_name("Tournament", Some(3)).unwrap();
/// assert_eq!(sel, Selection::Tournament { size: 3 });
///
/// // A size makes no sense for roulette selection.
/// assert!(Selection::from_name("RouletteWheel", Some(3)).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Selection {
    /// Fitness-proportionate selection with replacement.
    ///
    /// `P(i) = fitness_i / Σ fitness`.
    #[default]
    RouletteWheel,

    /// Pick `size` distinct employed slots uniformly, keep the fittest.
    ///
    /// `size` must lie in `[1, n_employed]`.
    Tournament {
        /// Number of contestants per draw.
        size: usize,
    },
}

impl Selection {
    /// Builds a strategy from its name and an optional tournament size.
    ///
    /// The size is required for `"Tournament"` and forbidden otherwise.
    pub fn from_name(name: &str, tournament_size: Option<usize>) -> Result<Self> {
        match (name.to_lowercase().as_str(), tournament_size) {
            ("roulettewheel" | "roulette", None) => Ok(Selection::RouletteWheel),
            ("tournament", Some(size)) => Ok(Selection::Tournament { size }),
            ("roulettewheel" | "roulette" | "tournament", size) => {
                Err(AbcError::TournamentSizeMismatch {
                    selection: name.to_string(),
                    size,
                })
            }
            _ => Err(AbcError::UnknownStrategy {
                family: "selection",
                name: name.to_string(),
            }),
        }
    }

    /// Checks strategy parameters against the employed population size.
    pub fn validate(&self, n_employed: usize) -> Result<()> {
        match *self {
            Selection::RouletteWheel => Ok(()),
            Selection::Tournament { size } => {
                if size == 0 || size > n_employed {
                    Err(AbcError::InvalidTournamentSize { size, n_employed })
                } else {
                    Ok(())
                }
            }
        }
    }

    /// Draws `n_draws` employed slot indices ("dance winners").
    ///
    /// # Panics
    /// Panics if `fitness` is empty.
    pub fn dance<R: Rng>(&self, fitness: &[f64], n_draws: usize, rng: &mut R) -> Vec<usize> {
        assert!(!fitness.is_empty(), "cannot select from empty population");

        match *self {
            Selection::RouletteWheel => {
                let weights = roulette_weights(fitness);
                let total: f64 = weights.iter().sum();
                (0..n_draws)
                    .map(|_| roulette(&weights, total, rng))
                    .collect()
            }
            Selection::Tournament { size } => (0..n_draws)
                .map(|_| tournament(fitness, size, rng))
                .collect(),
        }
    }
}

/// Roulette selection probabilities `fitness_i / Σ fitness`.
///
/// Non-finite fitness gets zero weight. If no weight is positive the
/// distribution is uniform.
pub fn roulette_probabilities(fitness: &[f64]) -> Vec<f64> {
    let weights = roulette_weights(fitness);
    let total: f64 = weights.iter().sum();
    if total > 0.0 {
        weights.iter().map(|w| w / total).collect()
    } else {
        vec![1.0 / fitness.len() as f64; fitness.len()]
    }
}

fn roulette_weights(fitness: &[f64]) -> Vec<f64> {
    fitness
        .iter()
        .map(|&f| if f.is_finite() && f > 0.0 { f } else { 0.0 })
        .collect()
}

/// One spin of the wheel.
fn roulette<R: Rng>(weights: &[f64], total: f64, rng: &mut R) -> usize {
    let n = weights.len();
    if total <= 0.0 || !total.is_finite() {
        return rng.random_range(0..n);
    }

    let threshold = rng.random_range(0.0..total);
    let mut cumulative = 0.0;
    for (i, &w) in weights.iter().enumerate() {
        cumulative += w;
        if cumulative > threshold {
            return i;
        }
    }

    // Rounding can leave the threshold just past the last partial sum.
    weights.iter().rposition(|&w| w > 0.0).unwrap_or(n - 1)
}

/// Tournament without replacement; the first fittest contestant wins ties.
fn tournament<R: Rng>(fitness: &[f64], size: usize, rng: &mut R) -> usize {
    let n = fitness.len();
    let k = size.clamp(1, n);

    let contestants = index::sample(rng, n, k);
    let mut winner = contestants.index(0);
    for idx in contestants.iter().skip(1) {
        if rank_key(fitness[idx]) > rank_key(fitness[winner]) {
            winner = idx;
        }
    }
    winner
}
