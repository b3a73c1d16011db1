//! Training loop.

use tracing::info;

use super::config::StopCriteria;
use super::types::Trainable;
use crate::error::Result;

/// Why the training loop ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    MaxIterations,
    TargetError,
    /// An attached strategy asked to stop.
    Strategy,
}

/// Result of a training run.
#[derive(Debug, Clone)]
pub struct TrainResult {
    /// Error after [`Trainable::finish_training`].
    pub final_error: f64,

    /// Iterations run by this call.
    pub iterations: usize,

    pub stop_reason: StopReason,

    /// Error after every iteration, starting with the error before the
    /// first one. Empty unless history recording is enabled.
    pub error_history: Vec<f64>,
}

/// Drives any [`Trainable`] until a [`StopCriteria`] is met.
pub struct TrainRunner;

impl TrainRunner {
    /// Runs the loop.
    ///
    /// # Errors
    ///
    /// Invalid criteria, or the first error returned by an iteration.
    pub fn run<T: Trainable + ?Sized>(
        trainer: &mut T,
        criteria: &StopCriteria,
    ) -> Result<TrainResult> {
        criteria.validate()?;

        let mut error_history = Vec::new();
        if criteria.record_history {
            error_history.push(trainer.error());
        }

        let mut iterations = 0usize;
        let stop_reason = loop {
            if Self::target_reached(trainer.error(), criteria) {
                break StopReason::TargetError;
            }
            if trainer.training_done() {
                break StopReason::Strategy;
            }
            if criteria.max_iterations > 0 && iterations >= criteria.max_iterations {
                break StopReason::MaxIterations;
            }

            trainer.iteration()?;
            iterations += 1;

            if criteria.record_history {
                error_history.push(trainer.error());
            }
        };

        trainer.finish_training()?;
        let final_error = trainer.error();
        info!(iterations, final_error, ?stop_reason, "training finished");

        Ok(TrainResult {
            final_error,
            iterations,
            stop_reason,
            error_history,
        })
    }

    fn target_reached(error: f64, criteria: &StopCriteria) -> bool {
        criteria.target_error.is_some_and(|target| error <= target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::anneal::{AnnealConfig, VectorModel};
    use crate::train::{AnnealTrainer, StopTrainingStrategy};

    fn sum_sq(p: &[f64]) -> f64 {
        p.iter().map(|x| x * x).sum()
    }

    #[test]
    fn test_max_iterations() {
        let config = AnnealConfig::new(2.0, 1.0, 50).with_seed(42);
        let mut trainer =
            AnnealTrainer::from_config(VectorModel::new(vec![2.0, -2.0]), sum_sq, config).unwrap();
        let criteria = StopCriteria::default().with_max_iterations(30);
        let result = TrainRunner::run(&mut trainer, &criteria).unwrap();

        assert_eq!(result.iterations, 30);
        assert_eq!(result.stop_reason, StopReason::MaxIterations);
        assert_eq!(result.error_history.len(), 31);
        for w in result.error_history.windows(2) {
            assert!(w[1] <= w[0], "history should be non-increasing: {} > {}", w[1], w[0]);
        }
    }

    #[test]
    fn test_target_error() {
        let config = AnnealConfig::new(2.0, 1.0, 50).with_seed(42);
        let mut trainer =
            AnnealTrainer::from_config(VectorModel::new(vec![1.0, 1.0]), sum_sq, config).unwrap();
        let criteria = StopCriteria::default()
            .with_max_iterations(100_000)
            .with_target_error(0.5);
        let result = TrainRunner::run(&mut trainer, &criteria).unwrap();

        assert_eq!(result.stop_reason, StopReason::TargetError);
        assert!(result.final_error <= 0.5);
    }

    #[test]
    fn test_target_already_met() {
        let mut trainer =
            AnnealTrainer::new(VectorModel::new(vec![0.0]), sum_sq, 10.0, 1.0, 5).unwrap();
        let criteria = StopCriteria::default().with_target_error(0.0);
        let result = TrainRunner::run(&mut trainer, &criteria).unwrap();
        assert_eq!(result.iterations, 0);
        assert_eq!(result.stop_reason, StopReason::TargetError);
    }

    #[test]
    fn test_strategy_stop() {
        // Already at the optimum: nothing can improve.
        let config = AnnealConfig::new(10.0, 1.0, 5).with_seed(1);
        let mut trainer =
            AnnealTrainer::from_config(VectorModel::new(vec![0.0, 0.0]), sum_sq, config).unwrap();
        trainer.add_strategy(Box::new(StopTrainingStrategy::new(1e-9, 5)));
        let criteria = StopCriteria::default()
            .with_max_iterations(1000)
            .with_record_history(false);
        let result = TrainRunner::run(&mut trainer, &criteria).unwrap();

        assert_eq!(result.stop_reason, StopReason::Strategy);
        assert_eq!(result.iterations, 6);
        assert!(result.error_history.is_empty());
    }

    #[test]
    fn test_iteration_error_propagates() {
        let mut trainer =
            AnnealTrainer::new(VectorModel::new(vec![1.0]), sum_sq, 0.0, 1.0, 5).unwrap();
        let criteria = StopCriteria::default().with_max_iterations(10);
        assert!(TrainRunner::run(&mut trainer, &criteria).is_err());
    }
}
