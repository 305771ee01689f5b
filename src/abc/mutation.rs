//! Neighbor-generation operators.
//!
//! Every operator copies the parent's position, perturbs a subset of its
//! components using donors drawn from the current population, and clips each
//! perturbed component back into its interval. The parent itself is never
//! modified.
//!
//! # Random draw order
//!
//! The colony is sequence-sensitive, so each operator consumes random numbers
//! in a fixed order:
//!
//! | Operator | Order |
//! |----------|-------|
//! | `Standard`, `BestOne`, `BestTwo` | φ, donors, dimension |
//! | `Modified` | donor, φ per dimension, mask per dimension |
//! | `Directed` | donor, dimension, step |
//!
//! # References
//!
//! - Karaboga & Basturk (2007), "A powerful and efficient algorithm for
//!   numerical function optimization: artificial bee colony (ABC) algorithm"
//! - Akay & Karaboga (2012), "A modified Artificial Bee Colony algorithm for
//!   real-parameter optimization"
//! - Gao & Liu (2011), "A novel artificial bee colony algorithm based on
//!   modified search equation and orthogonal learning" (ABC/best)
//! - Kiran & Findik (2015), "A directed artificial bee colony algorithm"

use super::bounds::Bounds;
use super::candidate::Candidate;
use super::types::Objective;
use crate::error::{AbcError, Result};
use rand::seq::index;
use rand::Rng;

/// Neighbor-generation operator.
///
/// # Examples
///
/// ```
/// use u_beecolony::abc::Mutation;
///
/// let m = Mutation::from_name("ModifiedABC", 0.8).unwrap();
/// assert_eq!(m, Mutation::Modified { mutation_rate: 0.8 });
/// assert_eq!(Mutation::from_name("ABC/best/2", 0.8).unwrap(), Mutation::BestTwo);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Mutation {
    /// `x_j + φ(x_j − d_j)` on one random dimension.
    #[default]
    Standard,

    /// `x_j + φ_j(x_j − d_j)` on every dimension selected with probability
    /// `mutation_rate`, with an independent φ per dimension.
    Modified {
        /// Per-dimension perturbation probability in `[0, 1]`.
        mutation_rate: f64,
    },

    /// `best_j + φ(d1_j − d2_j)` on one random dimension.
    BestOne,

    /// `best_j + φ(d1_j − d2_j) + φ(d3_j − d4_j)` on one random dimension,
    /// reusing the same φ for both differences.
    BestTwo,

    /// `x_j + r|x_j − d_j|` where the sign range of `r` follows the last
    /// successful move of this food source along dimension `j`.
    Directed,
}

impl Mutation {
    /// Builds an operator from its name.
    ///
    /// `mutation_rate` is only stored by `"ModifiedABC"` but is validated for
    /// every name.
    pub fn from_name(name: &str, mutation_rate: f64) -> Result<Self> {
        if !(0.0..=1.0).contains(&mutation_rate) {
            return Err(AbcError::InvalidMutationRate {
                rate: mutation_rate,
            });
        }
        match name.to_lowercase().as_str() {
            "standardabc" | "standard" => Ok(Mutation::Standard),
            "modifiedabc" | "modified" => Ok(Mutation::Modified { mutation_rate }),
            "abc/best/1" | "best1" => Ok(Mutation::BestOne),
            "abc/best/2" | "best2" => Ok(Mutation::BestTwo),
            "directedabc" | "directed" => Ok(Mutation::Directed),
            _ => Err(AbcError::UnknownStrategy {
                family: "mutation",
                name: name.to_string(),
            }),
        }
    }

    /// Checks operator parameters.
    pub fn validate(&self) -> Result<()> {
        match *self {
            Mutation::Modified { mutation_rate } if !(0.0..=1.0).contains(&mutation_rate) => {
                Err(AbcError::InvalidMutationRate {
                    rate: mutation_rate,
                })
            }
            _ => Ok(()),
        }
    }

    /// Number of distinct donors one call draws.
    pub fn donors_required(&self) -> usize {
        match self {
            Mutation::BestOne => 2,
            Mutation::BestTwo => 4,
            _ => 1,
        }
    }

    /// Generates one neighbor of `ctx.population[bee_idx]`.
    ///
    /// `heading` is the direction memory row of the food source being
    /// exploited; only [`Mutation::Directed`] reads it.
    ///
    /// # Panics
    /// Panics if the population holds fewer than
    /// `donors_required() + 1` candidates.
    pub fn propose<O: Objective + ?Sized, R: Rng>(
        &self,
        ctx: &MutationContext<'_, O>,
        bee_idx: usize,
        heading: &[Direction],
        rng: &mut R,
    ) -> Proposal {
        let parent = ctx.population[bee_idx].position();
        let dim = ctx.bounds.dim();
        let sf = ctx.scaling_factor;
        let mut position = parent.to_vec();

        let dimension = match *self {
            Mutation::Standard => {
                let phi = rng.random_range(-sf..=sf);
                let donor = ctx.donor(donor_indices(rng, ctx.population.len(), bee_idx, 1)[0]);
                let j = rng.random_range(0..dim);
                position[j] = ctx.bounds.clip(j, parent[j] + phi * (parent[j] - donor[j]));
                Some(j)
            }
            Mutation::Modified { mutation_rate } => {
                let donor = ctx.donor(donor_indices(rng, ctx.population.len(), bee_idx, 1)[0]);
                let phi: Vec<f64> = (0..dim).map(|_| rng.random_range(-sf..=sf)).collect();
                let mask: Vec<bool> = (0..dim)
                    .map(|_| rng.random::<f64>() <= mutation_rate)
                    .collect();
                for j in (0..dim).filter(|&j| mask[j]) {
                    position[j] = ctx
                        .bounds
                        .clip(j, parent[j] + phi[j] * (parent[j] - donor[j]));
                }
                None
            }
            Mutation::BestOne => {
                let phi = rng.random_range(-sf..=sf);
                let donors = donor_indices(rng, ctx.population.len(), bee_idx, 2);
                let (d1, d2) = (ctx.donor(donors[0]), ctx.donor(donors[1]));
                let j = rng.random_range(0..dim);
                let best = ctx.best.position();
                position[j] = ctx.bounds.clip(j, best[j] + phi * (d1[j] - d2[j]));
                Some(j)
            }
            Mutation::BestTwo => {
                let phi = rng.random_range(-sf..=sf);
                let donors = donor_indices(rng, ctx.population.len(), bee_idx, 4);
                let d: Vec<&[f64]> = donors.iter().map(|&k| ctx.donor(k)).collect();
                let j = rng.random_range(0..dim);
                let best = ctx.best.position();
                let step = phi * (d[0][j] - d[1][j]) + phi * (d[2][j] - d[3][j]);
                position[j] = ctx.bounds.clip(j, best[j] + step);
                Some(j)
            }
            Mutation::Directed => {
                let donor = ctx.donor(donor_indices(rng, ctx.population.len(), bee_idx, 1)[0]);
                let j = rng.random_range(0..dim);
                let r = match heading.get(j).copied().unwrap_or_default() {
                    Direction::Positive => rng.random_range(0.0..=sf),
                    Direction::Negative => rng.random_range(-sf..=0.0),
                    Direction::Neutral => rng.random_range(-sf..=sf),
                };
                position[j] = ctx
                    .bounds
                    .clip(j, parent[j] + r * (parent[j] - donor[j]).abs());
                Some(j)
            }
        };

        Proposal {
            candidate: Candidate::evaluated(position, ctx.objective),
            dimension,
        }
    }
}

/// Everything an operator reads besides the random stream.
#[derive(Debug)]
pub struct MutationContext<'a, O: ?Sized> {
    /// Donor pool; also holds the parent at the index passed to `propose`.
    pub population: &'a [Candidate],
    /// Best-so-far candidate, read by the `BestOne`/`BestTwo` operators.
    pub best: &'a Candidate,
    /// Search-space bounds used for clipping.
    pub bounds: &'a Bounds,
    /// Objective used to evaluate the neighbor.
    pub objective: &'a O,
    /// Current step-size multiplier `sf`.
    pub scaling_factor: f64,
}

impl<O: ?Sized> MutationContext<'_, O> {
    fn donor(&self, k: usize) -> &[f64] {
        self.population[k].position()
    }
}

/// A neighbor together with the single dimension it perturbed, if any.
#[derive(Debug, Clone)]
pub struct Proposal {
    /// The evaluated neighbor.
    pub candidate: Candidate,
    /// The perturbed dimension for single-dimension operators.
    pub dimension: Option<usize>,
}

/// Samples `count` distinct indices of `0..pool_size` other than `exclude`.
pub(crate) fn donor_indices<R: Rng>(
    rng: &mut R,
    pool_size: usize,
    exclude: usize,
    count: usize,
) -> Vec<usize> {
    assert!(
        count < pool_size,
        "need {count} donors besides the parent, population has {pool_size}"
    );
    index::sample(rng, pool_size - 1, count)
        .into_iter()
        .map(|k| if k >= exclude { k + 1 } else { k })
        .collect()
}

/// Last successful move direction of a food source along one dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    /// The last successful move decreased the coordinate.
    Negative,
    /// No information.
    #[default]
    Neutral,
    /// The last successful move increased the coordinate.
    Positive,
}

impl Direction {
    /// Direction of the move `from → to`.
    pub fn of_move(from: f64, to: f64) -> Self {
        if to > from {
            Direction::Positive
        } else if to < from {
            Direction::Negative
        } else {
            Direction::Neutral
        }
    }
}

/// Per food source, per dimension direction memory for [`Mutation::Directed`].
#[derive(Debug, Clone, PartialEq)]
pub struct DirectionMemory {
    rows: Vec<Vec<Direction>>,
}

impl DirectionMemory {
    /// All-neutral memory for `slots` food sources in `dim` dimensions.
    pub fn new(slots: usize, dim: usize) -> Self {
        Self {
            rows: vec![vec![Direction::Neutral; dim]; slots],
        }
    }

    /// The memory row of food source `slot`.
    pub fn row(&self, slot: usize) -> &[Direction] {
        &self.rows[slot]
    }

    /// Updates dimension `dimension` of `slot` after a greedy comparison.
    ///
    /// A success stores the sign of the move, a failure clears it.
    pub fn record(
        &mut self,
        slot: usize,
        dimension: usize,
        parent: &[f64],
        neighbor: &[f64],
        success: bool,
    ) {
        self.rows[slot][dimension] = if success {
            Direction::of_move(parent[dimension], neighbor[dimension])
        } else {
            Direction::Neutral
        };
    }

    /// Forgets everything about `slot` (its food source was replaced).
    pub fn clear(&mut self, slot: usize) {
        self.rows[slot].fill(Direction::Neutral);
    }
}
