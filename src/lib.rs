//! Artificial Bee Colony optimization for bounded continuous minimization.
//!
//! Provides a configurable ABC engine:
//!
//! - **Mutation operators**: the classic single-dimension move, the
//!   multi-dimension modified variant, two best-guided variants and a
//!   direction-memory variant.
//! - **Onlooker selection**: fitness-proportionate roulette or tournament.
//! - **Initialization**: uniform sampling or a chaotic map combined with
//!   opposition-based learning.
//! - **Self-adaptive step size** following the one-fifth success rule.
//! - **Early termination** once the population's fitness spread stagnates.
//!
//! Every run is reproducible from its seed, and the colony keeps the best
//! candidate and a population snapshot for every iteration.
//!
//! # Example
//!
//! ```
//! use u_beecolony::abc::{AbcConfig, Colony, Mutation};
//!
//! let rastrigin = |x: &[f64]| {
//!     10.0 * x.len() as f64
//!         + x.iter()
//!             .map(|v| v * v - 10.0 * (2.0 * std::f64::consts::PI * v).cos())
//!             .sum::<f64>()
//! };
//!
//! let mut colony = Colony::new(40, rastrigin, &[(-5.12, 5.12); 3], None, None)?;
//! let config = AbcConfig::balanced()
//!     .with_max_iterations(300)
//!     .with_mutation(Mutation::BestOne)
//!     .with_seed(7);
//!
//! let result = colony.optimize(&config)?;
//! assert_eq!(result.value_history.len(), result.iterations + 1);
//! # Ok::<(), u_beecolony::error::AbcError>(())
//! ```

pub mod abc;
pub mod error;
mod random;
