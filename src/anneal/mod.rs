//! Simulated annealing over flat parameter vectors.
//!
//! The engine perturbs every parameter of a model by a temperature-scaled
//! uniform step, keeps the candidate when the acceptance rule allows it,
//! and always remembers the lowest-error vector seen. Models plug in
//! through [`Optimizable`], either directly or via [`ModelSolution`]
//! which binds a [`FlatParams`] model to its evaluation data.
//!
//! The default acceptance rule is greedy: a candidate that does not beat
//! the best error is never kept, and temperature controls only the step
//! size. [`Acceptance::Metropolis`] is available for the textbook rule.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Masters (1993), "Practical Neural Network Recipes in C++", ch. 7

mod acceptance;
mod adapter;
mod config;
mod engine;
mod perturb;
mod types;

pub use acceptance::{Acceptance, Decision};
pub use adapter::{ErrorMeasure, FlatParams, ModelSolution, VectorModel};
pub use config::AnnealConfig;
pub use engine::AnnealEngine;
pub use perturb::{randomize, randomize_in_place, CUT};
pub use types::Optimizable;
