//! Error type shared by every module in the crate.

use thiserror::Error;

/// Errors raised by the annealing engine and its collaborators.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnnealError {
    /// A parameter vector does not match the model's parameter count.
    #[error("dimension mismatch: expected {expected} parameters, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// The start temperature is zero or non-finite.
    #[error("invalid start temperature: {0}")]
    InvalidTemperature(f64),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("can't produce a time slice of size {required}, there are only {loaded} vectors loaded")]
    WindowNotReady { required: usize, loaded: usize },

    #[error("output buffer too small: need {required} values, {available} available")]
    OutputTooSmall { required: usize, available: usize },

    #[error("empty input: {0}")]
    EmptyInput(String),
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, AnnealError>;
