//! Stopping criteria for the training loop.

use crate::error::{AnnealError, Result};

/// When [`TrainRunner`](super::TrainRunner) should stop calling
/// `iteration()`.
///
/// # Examples
///
/// ```
/// use u_anneal::train::StopCriteria;
///
/// let criteria = StopCriteria::default()
///     .with_max_iterations(500)
///     .with_target_error(0.01);
/// assert!(criteria.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StopCriteria {
    /// Maximum iterations. 0 = no limit.
    pub max_iterations: usize,

    /// Stop as soon as the error drops to or below this value.
    pub target_error: Option<f64>,

    /// Record the error after every iteration.
    pub record_history: bool,
}

impl Default for StopCriteria {
    fn default() -> Self {
        Self {
            max_iterations: 1000,
            target_error: None,
            record_history: true,
        }
    }
}

impl StopCriteria {
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    pub fn with_target_error(mut self, e: f64) -> Self {
        self.target_error = Some(e);
        self
    }

    pub fn with_record_history(mut self, record: bool) -> Self {
        self.record_history = record;
        self
    }

    /// Rejects criteria that could never end the loop on their own.
    pub fn validate(&self) -> Result<()> {
        if self.max_iterations == 0 && self.target_error.is_none() {
            return Err(AnnealError::InvalidConfig(
                "either max_iterations or target_error must be set".into(),
            ));
        }
        if let Some(e) = self.target_error {
            if e.is_nan() {
                return Err(AnnealError::InvalidConfig("target_error is NaN".into()));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_valid() {
        assert!(StopCriteria::default().validate().is_ok());
    }

    #[test]
    fn test_unbounded_rejected() {
        let c = StopCriteria::default().with_max_iterations(0);
        assert!(c.validate().is_err());
        assert!(c.with_target_error(0.1).validate().is_ok());
    }

    #[test]
    fn test_nan_target_rejected() {
        let c = StopCriteria::default().with_target_error(f64::NAN);
        assert!(c.validate().is_err());
    }
}
