//! Training host contract and strategy hooks.

use crate::error::Result;

/// Snapshot handed to strategies around each iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrainingProgress {
    /// Iterations completed so far.
    pub iteration: usize,
    /// Error reported after the last iteration.
    pub error: f64,
}

/// Something a training loop can step.
///
/// The host owns the stopping decision; the trainer only reports its
/// error and whether any attached strategy asked to stop.
pub trait Trainable {
    /// Runs one training iteration.
    fn iteration(&mut self) -> Result<()>;

    /// Error after the last iteration.
    fn error(&self) -> f64;

    /// Iterations completed so far.
    fn iteration_count(&self) -> usize;

    /// `true` once a strategy has asked training to stop.
    fn training_done(&self) -> bool {
        false
    }

    /// Called once by the host after the last iteration.
    fn finish_training(&mut self) -> Result<()> {
        Ok(())
    }
}

/// Hook run before and after every iteration of a trainer.
pub trait TrainStrategy {
    /// Called once when the strategy is attached.
    fn init(&mut self, _progress: &TrainingProgress) {}

    fn pre_iteration(&mut self, _progress: &TrainingProgress) {}

    fn post_iteration(&mut self, _progress: &TrainingProgress) {}

    /// `true` to ask the host to stop.
    fn should_stop(&self) -> bool {
        false
    }
}
