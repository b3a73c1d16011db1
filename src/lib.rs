//! Model-agnostic simulated annealing trainer.
//!
//! Anneals any parameterized model that can be flattened into a vector
//! of `f64` and scored by a scalar error:
//!
//! - **Anneal**: the engine, its perturbation policy, acceptance rules,
//!   and the adapter traits a model implements to be annealed.
//! - **Train**: a trainer facade exposing the engine as a single-step
//!   `iteration()` for a generic training host, with stop strategies
//!   and a ready-made training loop.
//! - **Window**: sliding window of fixed-length vectors for building
//!   time-slice inputs.
//! - **Cluster**: k-means grouping of observation vectors.
//!
//! # Architecture
//!
//! The engine owns its random source and never touches global state, so
//! a fixed seed makes every run reproducible. Models stay in the
//! caller's domain: the crate only sees flat parameter copies handed
//! across the [`anneal::Optimizable`] boundary.

pub mod anneal;
pub mod cluster;
pub mod error;
pub mod random;
pub mod train;
pub mod window;

pub use error::{AnnealError, Result};
