//! Population initialization strategies.
//!
//! Used both to seed the colony and to re-seed abandoned food sources in the
//! scout phase.
//!
//! # References
//!
//! - Alatas (2010), "Chaotic bee colony algorithms for global numerical
//!   optimization"
//! - Tizhoosh (2005), "Opposition-Based Learning: A New Scheme for Machine
//!   Intelligence"

use super::bounds::Bounds;
use super::candidate::Candidate;
use super::types::{rank_key, Objective};
use crate::error::AbcError;
use rand::Rng;
use std::f64::consts::PI;
use std::str::FromStr;

/// Number of `x ← sin(πx)` iterations applied to the chaotic seeds.
pub const CHAOTIC_MAP_ITERATIONS: usize = 300;

/// How new food sources are placed in the search space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Initialization {
    /// Independent uniform sampling per dimension.
    #[default]
    Random,

    /// Chaotic map seeding combined with opposition-based learning.
    ///
    /// Builds `n` chaotic points and their `n` reflections through the box
    /// centre, then keeps the `n` fittest of the `2n`. Each call runs a fresh
    /// chaotic map.
    Chaotic,
}

impl FromStr for Initialization {
    type Err = AbcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "random" => Ok(Initialization::Random),
            "cahotic" | "chaotic" => Ok(Initialization::Chaotic),
            _ => Err(AbcError::UnknownStrategy {
                family: "initialization",
                name: s.to_string(),
            }),
        }
    }
}

impl Initialization {
    /// Creates `n` candidates inside `bounds`.
    pub fn populate<O: Objective + ?Sized, R: Rng>(
        &self,
        n: usize,
        bounds: &Bounds,
        objective: &O,
        rng: &mut R,
    ) -> Vec<Candidate> {
        match self {
            Initialization::Random => (0..n)
                .map(|_| Candidate::random(bounds, objective, rng))
                .collect(),
            Initialization::Chaotic => chaotic_opposition(n, bounds, objective, rng),
        }
    }

    /// Creates a single replacement for an abandoned food source.
    ///
    /// `Chaotic` still generates a full population of `population_size`
    /// candidates (plus opposites) and returns its best member.
    pub fn scout<O: Objective + ?Sized, R: Rng>(
        &self,
        population_size: usize,
        bounds: &Bounds,
        objective: &O,
        rng: &mut R,
    ) -> Candidate {
        match self {
            Initialization::Random => Candidate::random(bounds, objective, rng),
            Initialization::Chaotic => {
                let mut pool = chaotic_opposition(population_size.max(1), bounds, objective, rng);
                pool.swap_remove(0)
            }
        }
    }
}

/// Iterates `x ← sin(πx)` on fresh uniform seeds, one row per candidate.
fn chaotic_map<R: Rng>(rows: usize, dim: usize, rng: &mut R) -> Vec<Vec<f64>> {
    let mut map: Vec<Vec<f64>> = (0..rows)
        .map(|_| (0..dim).map(|_| rng.random::<f64>()).collect())
        .collect();
    for _ in 0..CHAOTIC_MAP_ITERATIONS {
        for x in map.iter_mut().flatten() {
            *x = (PI * *x).sin();
        }
    }
    map
}

fn chaotic_opposition<O: Objective + ?Sized, R: Rng>(
    n: usize,
    bounds: &Bounds,
    objective: &O,
    rng: &mut R,
) -> Vec<Candidate> {
    let map = chaotic_map(n, bounds.dim(), rng);

    let chaotic: Vec<Candidate> = map
        .iter()
        .map(|row| Candidate::evaluated(bounds.scale_unit(row), objective))
        .collect();
    let opposite: Vec<Candidate> = chaotic
        .iter()
        .map(|bee| Candidate::evaluated(bounds.opposite(bee.position()), objective))
        .collect();

    let mut pool = chaotic;
    pool.extend(opposite);

    // Stable: ties keep chaotic members ahead of their opposites.
    pool.sort_by(|a, b| {
        rank_key(b.fitness())
            .partial_cmp(&rank_key(a.fitness()))
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    pool.truncate(n);
    pool
}
