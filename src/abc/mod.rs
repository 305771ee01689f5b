//! Artificial Bee Colony (ABC) framework.
//!
//! Minimizes a black-box objective over a box by simulating a foraging
//! colony. Employed bees each own a food source (a candidate position),
//! onlookers reinforce the sources chosen by a waggle-dance selection, and
//! scouts replace sources that stopped improving.
//!
//! # Key Types
//!
//! - [`Colony`]: Owns the population and runs the employed → onlooker → scout loop
//! - [`AbcConfig`]: Run parameters (iterations, limit, strategies, presets)
//! - [`AbcResult`]: Final best candidate, status and per-iteration best values
//! - [`Candidate`]: Position, objective value and trial counter
//! - [`Objective`]: The function being minimized (any `Fn(&[f64]) -> f64`)
//!
//! # Strategies
//!
//! - [`Mutation`]: `StandardABC`, `ModifiedABC`, `ABC/best/1`, `ABC/best/2`, `DirectedABC`
//! - [`Selection`]: roulette wheel or tournament
//! - [`Initialization`]: uniform random or chaotic map with opposition-based learning
//! - [`ScalingController`]: one-fifth success rule for the step size
//!
//! # Submodules
//!
//! - [`stats`]: Population fitness spread and positional diversity
//!
//! # References
//!
//! - Karaboga (2005), "An Idea Based on Honey Bee Swarm for Numerical
//!   Optimization", Technical Report TR06, Erciyes University
//! - Karaboga & Basturk (2007), "A powerful and efficient algorithm for
//!   numerical function optimization: artificial bee colony (ABC) algorithm"
//! - Akay & Karaboga (2012), "A modified Artificial Bee Colony algorithm for
//!   real-parameter optimization"

mod bounds;
mod candidate;
mod colony;
mod config;
mod init;
mod mutation;
mod scaling;
mod selection;
pub mod stats;
mod types;

pub use bounds::Bounds;
pub use candidate::Candidate;
pub use colony::{AbcResult, Colony, ColonyStatus, MIN_BEES, MIN_SUBPOPULATION};
pub use config::{AbcConfig, Limit};
pub use init::{Initialization, CHAOTIC_MAP_ITERATIONS};
pub use mutation::{Direction, DirectionMemory, Mutation, MutationContext, Proposal};
pub use scaling::{ScalingController, ADJUSTMENT, MAX_SCALING_FACTOR, TARGET_SUCCESS_RATIO};
pub use selection::{roulette_probabilities, Selection};
pub use types::{fitness_from_value, Objective};
