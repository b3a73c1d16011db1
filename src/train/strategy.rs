//! Built-in training strategies.

use super::types::{TrainStrategy, TrainingProgress};

/// Stops training once the error stalls.
///
/// After `tolerated_cycles` consecutive iterations in which the error
/// improved on the best seen by less than `min_improvement`, the strategy
/// asks the host to stop.
#[derive(Debug, Clone)]
pub struct StopTrainingStrategy {
    min_improvement: f64,
    tolerated_cycles: usize,
    best_error: f64,
    bad_cycles: usize,
    ready: bool,
    stop: bool,
}

impl Default for StopTrainingStrategy {
    fn default() -> Self {
        Self::new(1e-7, 100)
    }
}

impl StopTrainingStrategy {
    pub fn new(min_improvement: f64, tolerated_cycles: usize) -> Self {
        Self {
            min_improvement,
            tolerated_cycles,
            best_error: f64::INFINITY,
            bad_cycles: 0,
            ready: false,
            stop: false,
        }
    }

    pub fn bad_cycles(&self) -> usize {
        self.bad_cycles
    }
}

impl TrainStrategy for StopTrainingStrategy {
    fn init(&mut self, _progress: &TrainingProgress) {
        self.best_error = f64::INFINITY;
        self.bad_cycles = 0;
        self.ready = false;
        self.stop = false;
    }

    fn post_iteration(&mut self, progress: &TrainingProgress) {
        if self.ready {
            // NaN never counts as an improvement.
            let improvement = self.best_error - progress.error;
            if improvement.is_nan() || improvement < self.min_improvement {
                self.bad_cycles += 1;
                if self.bad_cycles >= self.tolerated_cycles {
                    self.stop = true;
                }
            } else {
                self.bad_cycles = 0;
            }
        } else {
            self.ready = true;
        }
        if progress.error < self.best_error {
            self.best_error = progress.error;
        }
    }

    fn should_stop(&self) -> bool {
        self.stop
    }
}
