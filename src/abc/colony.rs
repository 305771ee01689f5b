//! Colony state and the employed → onlooker → scout loop.
//!
//! [`Colony`] owns the employed food sources, the scaling factor, the
//! direction memory and the per-iteration history. A run draws every random
//! number from one generator created at the start of
//! [`optimize`](Colony::optimize), in a fixed order, so a seeded run is
//! reproducible bit for bit.

use super::bounds::Bounds;
use super::candidate::Candidate;
use super::config::AbcConfig;
use super::init::Initialization;
use super::mutation::{DirectionMemory, Mutation, MutationContext};
use super::scaling::ScalingController;
use super::selection::Selection;
use super::stats::{self, fitness_std};
use super::types::{accepts, rank_key, Objective};
use crate::error::{AbcError, Result};
use crate::random::create_rng;
use rand::Rng;
use std::fmt;

/// Minimum employed and onlooker counts: `ABC/best/2` needs four donors
/// besides the parent.
pub const MIN_SUBPOPULATION: usize = 5;

/// Minimum colony size.
pub const MIN_BEES: usize = 2 * MIN_SUBPOPULATION;

/// Where the colony stands in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ColonyStatus {
    /// Constructed or reset; no run has finished.
    Idle,
    /// Stopped early: fitness spread fell below the stagnation tolerance.
    Converged,
    /// Ran the full iteration budget.
    Completed,
}

/// Summary of one [`Colony::optimize`] call.
///
/// The full per-iteration history stays on the colony; see
/// [`Colony::best_history`] and [`Colony::colony_history`].
#[derive(Debug, Clone)]
pub struct AbcResult {
    /// Fittest employed candidate after the last iteration.
    pub best: Candidate,

    /// Number of iterations executed (at most `max_iterations`).
    pub iterations: usize,

    /// How the run ended.
    pub status: ColonyStatus,

    /// Scaling factor after the last phase.
    pub scaling_factor: f64,

    /// Best objective value after initialization and after each iteration.
    pub value_history: Vec<f64>,
}

impl AbcResult {
    /// Whether the run stopped on the stagnation criterion.
    pub fn converged(&self) -> bool {
        self.status == ColonyStatus::Converged
    }
}

/// An artificial bee colony minimizing an [`Objective`] over a box.
///
/// # Usage
///
/// ```
/// use u_beecolony::abc::{AbcConfig, Colony, ColonyStatus};
///
/// let sphere = |x: &[f64]| x.iter().map(|v| v * v).sum::<f64>();
/// let mut colony = Colony::new(20, sphere, &[(-5.0, 5.0); 2], None, None).unwrap();
///
/// let result = colony
///     .optimize(&AbcConfig::default().with_max_iterations(200).with_seed(42))
///     .unwrap();
///
/// assert_eq!(result.status, ColonyStatus::Completed);
/// assert_eq!(colony.best_history().len(), result.iterations + 1);
/// assert!(result.best.value() < 1e-3);
/// ```
#[derive(Clone)]
pub struct Colony<O: Objective> {
    objective: O,
    bounds: Bounds,
    n_bees: usize,
    n_employed: usize,
    n_onlooker: usize,
    max_scouts: usize,

    employed: Vec<Candidate>,
    directions: DirectionMemory,
    scaling: ScalingController,
    best: Option<Candidate>,
    best_history: Vec<Candidate>,
    colony_history: Vec<Vec<Candidate>>,
    iterations: usize,
    status: ColonyStatus,
}

impl<O: Objective> fmt::Debug for Colony<O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Colony")
            .field("bounds", &self.bounds)
            .field("n_bees", &self.n_bees)
            .field("n_employed", &self.n_employed)
            .field("n_onlooker", &self.n_onlooker)
            .field("max_scouts", &self.max_scouts)
            .field("scaling", &self.scaling)
            .field("iterations", &self.iterations)
            .field("status", &self.status)
            .field("best", &self.best)
            .finish_non_exhaustive()
    }
}

impl<O: Objective> Colony<O> {
    /// Creates a colony of `n_bees` bees.
    ///
    /// `n_employed` defaults to `n_bees / 2`; the rest are onlookers.
    /// `max_scouts` caps abandoned-source replacements per iteration and
    /// defaults to `n_employed`.
    ///
    /// # Errors
    ///
    /// - [`AbcError::TooManyEmployed`] if `n_employed >= n_bees`
    /// - [`AbcError::ColonyTooSmall`] if `n_bees < 10` or either group has
    ///   fewer than 5 bees
    /// - [`AbcError::EmptyBounds`] / [`AbcError::InvalidBounds`] for bad bounds
    pub fn new(
        n_bees: usize,
        objective: O,
        bounds: &[(f64, f64)],
        n_employed: Option<usize>,
        max_scouts: Option<usize>,
    ) -> Result<Self> {
        let n_employed = n_employed.unwrap_or(n_bees / 2);
        if n_employed >= n_bees {
            return Err(AbcError::TooManyEmployed { n_employed, n_bees });
        }
        let n_onlooker = n_bees - n_employed;
        if n_bees < MIN_BEES || n_employed < MIN_SUBPOPULATION || n_onlooker < MIN_SUBPOPULATION
        {
            return Err(AbcError::ColonyTooSmall {
                n_bees,
                n_employed,
                n_onlooker,
            });
        }
        let bounds = Bounds::new(bounds)?;

        let scaling = ScalingController::new(1.0, false).with_max_width(bounds.max_width());
        Ok(Self {
            objective,
            directions: DirectionMemory::new(n_employed, bounds.dim()),
            bounds,
            n_bees,
            n_employed,
            n_onlooker,
            max_scouts: max_scouts.unwrap_or(n_employed),
            employed: Vec::new(),
            scaling,
            best: None,
            best_history: Vec::new(),
            colony_history: Vec::new(),
            iterations: 0,
            status: ColonyStatus::Idle,
        })
    }

    /// Runs one optimization from a fresh population.
    ///
    /// Any state from a previous run is discarded first. Parameters are
    /// validated before anything else happens, so an `Err` leaves the colony
    /// exactly as it was.
    pub fn optimize(&mut self, config: &AbcConfig) -> Result<AbcResult> {
        config.validate()?;
        config.selection.validate(self.n_employed)?;
        let limit = config.limit.resolve(self.n_employed, self.bounds.dim());
        if limit == 0 {
            return Err(AbcError::InvalidLimit { limit });
        }

        self.reset();
        self.scaling = ScalingController::new(config.scaling_factor, config.self_adaptive)
            .with_max_width(self.bounds.max_width());

        let seed = config.seed.unwrap_or_else(rand::random);
        let mut rng = create_rng(seed);

        log::debug!(
            "abc: {} employed, {} onlookers, dim {}, limit {}, {:?}/{:?}/{:?}, seed {}",
            self.n_employed,
            self.n_onlooker,
            self.bounds.dim(),
            limit,
            config.selection,
            config.mutation,
            config.initialization,
            seed
        );

        self.employed = config.initialization.populate(
            self.n_employed,
            &self.bounds,
            &self.objective,
            &mut rng,
        );
        let mut best = self.record_iteration(config.record_history);

        let mut status = ColonyStatus::Completed;
        for iter in 1..=config.max_iterations {
            self.employed_phase(config.mutation, &best, &mut rng);
            self.onlooker_phase(config.selection, config.mutation, &best, &mut rng);
            self.scout_phase(config.initialization, limit, &mut rng);

            self.iterations = iter;
            best = self.record_iteration(config.record_history);

            log::trace!(
                "abc iteration {}: best value {:.6e}, sf {:.4}",
                iter,
                best.value(),
                self.scaling.current()
            );

            if fitness_std(&self.employed) < config.stagnation_tolerance {
                status = ColonyStatus::Converged;
                break;
            }
        }
        self.status = status;

        log::info!(
            "abc {:?} after {}/{} iterations: best value {:.6e}",
            status,
            self.iterations,
            config.max_iterations,
            best.value()
        );

        Ok(AbcResult {
            value_history: self.best_history.iter().map(Candidate::value).collect(),
            best,
            iterations: self.iterations,
            status,
            scaling_factor: self.scaling.current(),
        })
    }

    /// Returns the colony to its pre-optimization state.
    ///
    /// Clears the population and history and restores the scaling factor;
    /// colony size, bounds and objective are kept.
    pub fn reset(&mut self) {
        self.employed.clear();
        self.directions = DirectionMemory::new(self.n_employed, self.bounds.dim());
        self.scaling.reset();
        self.best = None;
        self.best_history.clear();
        self.colony_history.clear();
        self.iterations = 0;
        self.status = ColonyStatus::Idle;
    }

    /// Snapshots the population and its best member.
    fn record_iteration(&mut self, record_population: bool) -> Candidate {
        let best = find_best(&self.employed).clone();
        if record_population {
            self.colony_history.push(self.employed.clone());
        }
        self.best_history.push(best.clone());
        self.best = Some(best.clone());
        best
    }

    /// One neighbor per employed food source, greedy replacement.
    ///
    /// Returns the number of successful replacements.
    fn employed_phase<R: Rng>(&mut self, mutation: Mutation, best: &Candidate, rng: &mut R) -> usize {
        let mut successes = 0;
        for i in 0..self.employed.len() {
            let ctx = MutationContext {
                population: &self.employed,
                best,
                bounds: &self.bounds,
                objective: &self.objective,
                scaling_factor: self.scaling.current(),
            };
            let proposal = mutation.propose(&ctx, i, self.directions.row(i), rng);

            let success = accepts(proposal.candidate.fitness(), self.employed[i].fitness());
            if let (Mutation::Directed, Some(j)) = (mutation, proposal.dimension) {
                self.directions.record(
                    i,
                    j,
                    self.employed[i].position(),
                    proposal.candidate.position(),
                    success,
                );
            }

            if success {
                self.employed[i] = proposal.candidate;
                successes += 1;
            } else {
                self.employed[i].record_failure();
            }
        }
        self.scaling.record(successes, self.n_employed);
        successes
    }

    /// Onlookers exploit dance winners; improvements overwrite the winner's
    /// employed slot.
    ///
    /// Donors come from the onlooker copies made at the start of the phase.
    /// Returns the number of successful replacements.
    fn onlooker_phase<R: Rng>(
        &mut self,
        selection: Selection,
        mutation: Mutation,
        best: &Candidate,
        rng: &mut R,
    ) -> usize {
        let fitness: Vec<f64> = self.employed.iter().map(Candidate::fitness).collect();
        let winners = selection.dance(&fitness, self.n_onlooker, rng);
        let onlookers: Vec<Candidate> = winners
            .iter()
            .map(|&w| self.employed[w].recruit())
            .collect();

        let mut successes = 0;
        for (k, &w) in winners.iter().enumerate() {
            let ctx = MutationContext {
                population: &onlookers,
                best,
                bounds: &self.bounds,
                objective: &self.objective,
                scaling_factor: self.scaling.current(),
            };
            let proposal = mutation.propose(&ctx, k, self.directions.row(w), rng);

            let success = accepts(proposal.candidate.fitness(), onlookers[k].fitness());
            if let (Mutation::Directed, Some(j)) = (mutation, proposal.dimension) {
                self.directions.record(
                    w,
                    j,
                    onlookers[k].position(),
                    proposal.candidate.position(),
                    success,
                );
            }

            if success {
                self.employed[w] = proposal.candidate;
                successes += 1;
            }
        }
        self.scaling.record(successes, self.n_onlooker);
        successes
    }

    /// Replaces food sources whose trial counter exceeds `limit`, scanning
    /// in slot order and stopping once `max_scouts` replacements were made.
    ///
    /// Returns the number of replacements.
    fn scout_phase<R: Rng>(&mut self, initialization: Initialization, limit: usize, rng: &mut R) -> usize {
        let mut scouts = 0;
        for i in 0..self.employed.len() {
            if scouts >= self.max_scouts {
                break;
            }
            if self.employed[i].trial() > limit {
                log::debug!(
                    "abc scout: food source {} abandoned after {} trials",
                    i,
                    self.employed[i].trial()
                );
                self.employed[i] =
                    initialization.scout(self.n_employed, &self.bounds, &self.objective, rng);
                self.directions.clear(i);
                scouts += 1;
            }
        }
        scouts
    }

    /// Best candidate after the last iteration, if a run has happened.
    pub fn best(&self) -> Option<&Candidate> {
        self.best.as_ref()
    }

    /// Best candidate after initialization and after each iteration.
    pub fn best_history(&self) -> &[Candidate] {
        &self.best_history
    }

    /// Employed population after initialization and after each iteration.
    ///
    /// Empty when the last run disabled `record_history`.
    pub fn colony_history(&self) -> &[Vec<Candidate>] {
        &self.colony_history
    }

    /// Current employed population.
    pub fn employed(&self) -> &[Candidate] {
        &self.employed
    }

    /// Iterations executed by the last run.
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Lifecycle status.
    pub fn status(&self) -> ColonyStatus {
        self.status
    }

    /// Current scaling factor `sf`.
    pub fn scaling_factor(&self) -> f64 {
        self.scaling.current()
    }

    /// Positional diversity of the current employed population.
    ///
    /// See [`stats::diversity`].
    pub fn diversity(&self) -> f64 {
        stats::diversity(&self.employed)
    }

    /// Search-space bounds.
    pub fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    /// Total number of bees.
    pub fn n_bees(&self) -> usize {
        self.n_bees
    }

    /// Number of employed bees (food sources).
    pub fn n_employed(&self) -> usize {
        self.n_employed
    }

    /// Number of onlooker bees.
    pub fn n_onlooker(&self) -> usize {
        self.n_onlooker
    }

    /// Scout replacements allowed per iteration.
    pub fn max_scouts(&self) -> usize {
        self.max_scouts
    }
}

/// The fittest candidate; the first one wins ties.
fn find_best(population: &[Candidate]) -> &Candidate {
    population
        .iter()
        .reduce(|best, c| {
            if rank_key(c.fitness()) > rank_key(best.fitness()) {
                c
            } else {
                best
            }
        })
        .expect("population must not be empty")
}

// ============================================================================
// Tests
// ============================================================================
