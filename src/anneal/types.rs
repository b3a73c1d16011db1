//! Core trait for annealing a parameterized model.

use crate::error::Result;

/// A solution the annealing engine can search over.
///
/// The implementor owns the live model state. The engine only ever sees
/// flat copies of the parameters: it reads them with [`to_vector`],
/// writes candidates back with [`from_vector`], and asks for the error of
/// whatever state is currently live.
///
/// # Minimization
///
/// The engine minimizes [`error`]. For maximization, negate the score.
///
/// # Examples
///
/// ```
/// use u_anneal::anneal::Optimizable;
/// use u_anneal::AnnealError;
///
/// struct Parabola { x: Vec<f64> }
///
/// impl Optimizable for Parabola {
///     fn error(&self) -> f64 {
///         self.x.iter().map(|v| v * v).sum()
///     }
///
///     fn to_vector(&self) -> Vec<f64> {
///         self.x.clone()
///     }
///
///     fn from_vector(&mut self, values: &[f64]) -> Result<(), AnnealError> {
///         if values.len() != self.x.len() {
///             return Err(AnnealError::DimensionMismatch {
///                 expected: self.x.len(),
///                 actual: values.len(),
///             });
///         }
///         self.x.copy_from_slice(values);
///         Ok(())
///     }
/// }
/// ```
///
/// [`to_vector`]: Optimizable::to_vector
/// [`from_vector`]: Optimizable::from_vector
/// [`error`]: Optimizable::error
pub trait Optimizable {
    /// Error of the current model state against the fixed evaluation data.
    fn error(&self) -> f64;

    /// A fresh copy of the current parameters.
    ///
    /// The returned vector must not alias any internal buffer.
    fn to_vector(&self) -> Vec<f64>;

    /// Overwrites the live parameters.
    ///
    /// # Errors
    ///
    /// [`AnnealError::DimensionMismatch`](crate::AnnealError::DimensionMismatch)
    /// if `values.len()` differs from [`param_count`](Optimizable::param_count).
    fn from_vector(&mut self, values: &[f64]) -> Result<()>;

    /// Number of tunable parameters.
    fn param_count(&self) -> usize {
        self.to_vector().len()
    }
}
