//! Trainer facade.
//!
//! [`AnnealTrainer`] exposes the annealing engine through the generic
//! [`Trainable`] contract: the host calls `iteration()` until it decides
//! to stop and reads `error()` in between. [`TrainRunner`] is a ready-made
//! host loop driven by [`StopCriteria`].

mod config;
mod runner;
mod strategy;
mod trainer;
mod types;

pub use config::StopCriteria;
pub use runner::{StopReason, TrainResult, TrainRunner};
pub use strategy::StopTrainingStrategy;
pub use trainer::AnnealTrainer;
pub use types::{TrainStrategy, Trainable, TrainingProgress};
