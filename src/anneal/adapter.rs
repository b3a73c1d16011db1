//! Model adapters.
//!
//! A model usually knows how to flatten itself and how to score itself
//! against a dataset, but it does not own that dataset. [`ModelSolution`]
//! pairs the two so the engine sees a single [`Optimizable`].

use super::types::Optimizable;
use crate::error::{AnnealError, Result};

/// Converts a model to and from a flat parameter vector.
pub trait FlatParams {
    /// Number of tunable parameters.
    fn param_count(&self) -> usize;

    /// Copies the parameters out, in a stable order.
    fn to_params(&self) -> Vec<f64>;

    /// Writes `values` into the model in the order produced by
    /// [`to_params`](FlatParams::to_params).
    ///
    /// Implementations may assume `values.len() == self.param_count()`;
    /// the length is checked before this is called.
    fn write_params(&mut self, values: &[f64]);
}

/// Scores a model against a dataset of type `D`. Lower is better.
pub trait ErrorMeasure<D: ?Sized> {
    fn calculate_error(&self, data: &D) -> f64;
}

/// A model bound to the dataset it is evaluated on.
#[derive(Debug, Clone)]
pub struct ModelSolution<M, D> {
    model: M,
    data: D,
}

impl<M, D> ModelSolution<M, D> {
    pub fn new(model: M, data: D) -> Self {
        Self { model, data }
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    pub fn model_mut(&mut self) -> &mut M {
        &mut self.model
    }

    pub fn data(&self) -> &D {
        &self.data
    }

    /// Splits the pair back into model and dataset.
    pub fn into_parts(self) -> (M, D) {
        (self.model, self.data)
    }
}

impl<M, D> Optimizable for ModelSolution<M, D>
where
    M: FlatParams + ErrorMeasure<D>,
{
    fn error(&self) -> f64 {
        self.model.calculate_error(&self.data)
    }

    fn to_vector(&self) -> Vec<f64> {
        self.model.to_params()
    }

    fn from_vector(&mut self, values: &[f64]) -> Result<()> {
        let expected = self.model.param_count();
        if values.len() != expected {
            return Err(AnnealError::DimensionMismatch {
                expected,
                actual: values.len(),
            });
        }
        self.model.write_params(values);
        Ok(())
    }

    fn param_count(&self) -> usize {
        self.model.param_count()
    }
}

/// A model whose state is nothing but its parameter vector.
///
/// Scored by any objective closure `Fn(&[f64]) -> f64`.
///
/// # Examples
///
/// ```
/// use u_anneal::anneal::{ErrorMeasure, VectorModel};
///
/// let model = VectorModel::new(vec![3.0, 4.0]);
/// let sum_sq = |p: &[f64]| p.iter().map(|x| x * x).sum::<f64>();
/// assert_eq!(model.calculate_error(&sum_sq), 25.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VectorModel {
    params: Vec<f64>,
}

impl VectorModel {
    pub fn new(params: Vec<f64>) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &[f64] {
        &self.params
    }
}

impl FlatParams for VectorModel {
    fn param_count(&self) -> usize {
        self.params.len()
    }

    fn to_params(&self) -> Vec<f64> {
        self.params.clone()
    }

    fn write_params(&mut self, values: &[f64]) {
        self.params.copy_from_slice(values);
    }
}

impl<F> ErrorMeasure<F> for VectorModel
where
    F: Fn(&[f64]) -> f64,
{
    fn calculate_error(&self, objective: &F) -> f64 {
        objective(&self.params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sum_sq(p: &[f64]) -> f64 {
        p.iter().map(|x| x * x).sum()
    }

    #[test]
    fn test_model_solution_error() {
        let sol = ModelSolution::new(VectorModel::new(vec![1.0, 2.0]), sum_sq);
        assert!((sol.error() - 5.0).abs() < 1e-12);
        assert_eq!(sol.param_count(), 2);
    }

    #[test]
    fn test_from_vector_dimension_mismatch() {
        let mut sol = ModelSolution::new(VectorModel::new(vec![1.0, 2.0]), sum_sq);
        let err = sol.from_vector(&[1.0]).unwrap_err();
        assert_eq!(
            err,
            AnnealError::DimensionMismatch {
                expected: 2,
                actual: 1
            }
        );
        // State untouched on failure
        assert_eq!(sol.model().params(), &[1.0, 2.0]);
    }

    #[test]
    fn test_round_trip_preserves_error() {
        let mut sol = ModelSolution::new(VectorModel::new(vec![0.3, -1.7, 2.2]), sum_sq);
        let before = sol.error();
        let v = sol.to_vector();
        sol.from_vector(&v).unwrap();
        assert_eq!(sol.error().to_bits(), before.to_bits());
    }

    #[test]
    fn test_to_vector_is_a_copy() {
        let sol = ModelSolution::new(VectorModel::new(vec![1.0, 1.0]), sum_sq);
        let mut v = sol.to_vector();
        v[0] = 99.0;
        assert_eq!(sol.model().params(), &[1.0, 1.0]);
    }
}
