//! Annealing engine.
//!
//! # Algorithm
//!
//! Each call to [`AnnealEngine::iteration`]:
//!
//! 1. Reads the live parameters from the solution
//! 2. Perturbs every component (see [`randomize`])
//! 3. Writes the candidate back and evaluates its error
//! 4. Keeps the candidate if the acceptance rule allows it, otherwise
//!    restores the previous parameters
//! 5. Decays the temperature toward `stop_temperature`
//!
//! The engine is single-threaded and non-reentrant. The number of calls
//! is decided by the caller.

use rand::rngs::StdRng;
use tracing::{trace, warn};

use super::acceptance::Decision;
use super::config::AnnealConfig;
use super::perturb::randomize;
use super::types::Optimizable;
use crate::error::Result;
use crate::random::{rng_from_seed, UniformSource};

/// Simulated annealing over an [`Optimizable`] solution.
#[derive(Debug)]
pub struct AnnealEngine<O, R = StdRng> {
    solution: O,
    rng: R,
    config: AnnealConfig,
    cooling_ratio: Option<f64>,
    temperature: f64,

    current_vector: Vec<f64>,
    current_error: f64,
    best_vector: Vec<f64>,
    best_error: f64,
    last_candidate_error: Option<f64>,

    iterations: usize,
    accepted_moves: usize,
    improving_moves: usize,
}

impl<O: Optimizable> AnnealEngine<O, StdRng> {
    /// Creates an engine seeded from `config.seed` (OS entropy if unset).
    ///
    /// # Errors
    ///
    /// Propagates [`AnnealConfig::validate`] failures.
    pub fn new(solution: O, config: AnnealConfig) -> Result<Self> {
        let rng = rng_from_seed(config.seed);
        Self::with_rng(solution, config, rng)
    }
}

impl<O: Optimizable, R: UniformSource> AnnealEngine<O, R> {
    /// Creates an engine driven by an explicit random source.
    ///
    /// The best solution starts as the solution's current state.
    pub fn with_rng(solution: O, config: AnnealConfig, rng: R) -> Result<Self> {
        config.validate()?;
        let best_vector = solution.to_vector();
        let best_error = solution.error();
        Ok(Self {
            cooling_ratio: config.cooling_ratio(),
            temperature: config.start_temperature,
            current_vector: best_vector.clone(),
            current_error: best_error,
            best_vector,
            best_error,
            last_candidate_error: None,
            iterations: 0,
            accepted_moves: 0,
            improving_moves: 0,
            solution,
            rng,
            config,
        })
    }

    /// Performs one perturb-evaluate-accept step.
    ///
    /// A zero-length parameter vector makes this a no-op.
    ///
    /// # Errors
    ///
    /// - [`AnnealError::InvalidTemperature`](crate::AnnealError::InvalidTemperature)
    ///   if the start temperature is zero or non-finite
    /// - [`AnnealError::DimensionMismatch`](crate::AnnealError::DimensionMismatch)
    ///   if the solution rejects a vector
    pub fn iteration(&mut self) -> Result<()> {
        let current = self.solution.to_vector();
        if current.is_empty() {
            return Ok(());
        }

        let candidate = randomize(
            &current,
            self.config.start_temperature,
            self.config.stop_temperature,
            &mut self.rng,
        )?;
        self.solution.from_vector(&candidate)?;
        let candidate_error = self.solution.error();
        self.last_candidate_error = Some(candidate_error);

        if candidate_error.is_nan() {
            warn!(iteration = self.iterations, "candidate error is NaN, rejecting");
        }

        let decision = Decision {
            candidate_error,
            current_error: self.current_error,
            best_error: self.best_error,
            temperature: self.temperature,
        };
        let acceptance = self.config.acceptance;
        if acceptance.accept(&decision, &mut self.rng) {
            self.accepted_moves += 1;
            if candidate_error < self.current_error {
                self.improving_moves += 1;
            }
            self.current_vector = candidate;
            self.current_error = candidate_error;
            if candidate_error < self.best_error {
                self.best_vector.clone_from(&self.current_vector);
                self.best_error = candidate_error;
            }
            trace!(candidate_error, best_error = self.best_error, "accepted");
        } else {
            self.solution.from_vector(&self.current_vector)?;
            trace!(candidate_error, best_error = self.best_error, "rejected");
        }

        self.iterations += 1;
        self.cool();
        Ok(())
    }

    fn cool(&mut self) {
        let stop = self.config.stop_temperature;
        self.temperature = match self.cooling_ratio {
            Some(ratio) if ratio <= 1.0 => (self.temperature * ratio).max(stop),
            Some(ratio) => (self.temperature * ratio).min(stop),
            None => stop,
        };
    }

    /// Error of the live model state after the last iteration.
    pub fn determine_error(&self) -> f64 {
        self.current_error
    }

    pub fn best_error(&self) -> f64 {
        self.best_error
    }

    pub fn best_vector(&self) -> &[f64] {
        &self.best_vector
    }

    /// Error of the most recent candidate, accepted or not.
    pub fn last_candidate_error(&self) -> Option<f64> {
        self.last_candidate_error
    }

    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    pub fn config(&self) -> &AnnealConfig {
        &self.config
    }

    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Accepted candidates, including improving ones.
    pub fn accepted_moves(&self) -> usize {
        self.accepted_moves
    }

    pub fn improving_moves(&self) -> usize {
        self.improving_moves
    }

    pub fn solution(&self) -> &O {
        &self.solution
    }

    /// Mutable access to the live solution.
    ///
    /// Call [`reset_best`](Self::reset_best) after changing parameters
    /// through this handle.
    pub fn solution_mut(&mut self) -> &mut O {
        &mut self.solution
    }

    /// Writes the best vector back into the solution.
    ///
    /// Only needed with acceptance rules that may keep a worse candidate;
    /// under greedy acceptance the live state already is the best.
    pub fn restore_best(&mut self) -> Result<()> {
        self.solution.from_vector(&self.best_vector)?;
        self.current_vector.clone_from(&self.best_vector);
        self.current_error = self.best_error;
        Ok(())
    }

    /// Re-reads the solution and makes its state the new best.
    pub fn reset_best(&mut self) {
        self.current_vector = self.solution.to_vector();
        self.current_error = self.solution.error();
        self.best_vector.clone_from(&self.current_vector);
        self.best_error = self.current_error;
    }

    pub fn into_solution(self) -> O {
        self.solution
    }
}
