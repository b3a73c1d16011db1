//! Annealing configuration.

use super::acceptance::Acceptance;
use crate::error::{AnnealError, Result};

/// Configuration for the annealing engine.
///
/// `start_temperature` and `stop_temperature` are consumed verbatim by
/// the perturbation step as scale terms: each component moves by at most
/// `0.5 / start_temperature * stop_temperature`.
///
/// # Examples
///
/// ```
/// use u_anneal::anneal::{Acceptance, AnnealConfig};
///
/// let config = AnnealConfig::default()
///     .with_start_temperature(10.0)
///     .with_stop_temperature(2.0)
///     .with_cycles(100)
///     .with_acceptance(Acceptance::Greedy)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnnealConfig {
    /// Initial temperature. Must be finite and non-zero when iterating.
    pub start_temperature: f64,

    /// Final temperature.
    pub stop_temperature: f64,

    /// Number of iterations the temperature takes to decay from start to
    /// stop. Must be at least 1.
    pub cycles: usize,

    /// Rule deciding whether a candidate replaces the current solution.
    pub acceptance: Acceptance,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,
}

impl Default for AnnealConfig {
    fn default() -> Self {
        Self {
            start_temperature: 10.0,
            stop_temperature: 2.0,
            cycles: 100,
            acceptance: Acceptance::default(),
            seed: None,
        }
    }
}

impl AnnealConfig {
    /// Creates a configuration from the classic trainer triple.
    pub fn new(start_temperature: f64, stop_temperature: f64, cycles: usize) -> Self {
        Self {
            start_temperature,
            stop_temperature,
            cycles,
            ..Self::default()
        }
    }

    pub fn with_start_temperature(mut self, t: f64) -> Self {
        self.start_temperature = t;
        self
    }

    pub fn with_stop_temperature(mut self, t: f64) -> Self {
        self.stop_temperature = t;
        self
    }

    pub fn with_cycles(mut self, n: usize) -> Self {
        self.cycles = n;
        self
    }

    pub fn with_acceptance(mut self, acceptance: Acceptance) -> Self {
        self.acceptance = acceptance;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    ///
    /// A zero start temperature passes here and is reported as
    /// [`AnnealError::InvalidTemperature`] when the engine perturbs.
    pub fn validate(&self) -> Result<()> {
        if self.cycles == 0 {
            return Err(AnnealError::InvalidConfig("cycles must be at least 1".into()));
        }
        if !self.stop_temperature.is_finite() {
            return Err(AnnealError::InvalidConfig(format!(
                "stop_temperature must be finite, got {}",
                self.stop_temperature
            )));
        }
        Ok(())
    }

    /// Per-iteration multiplicative temperature decay.
    ///
    /// `None` when the schedule is degenerate (one cycle, or bounds that
    /// are not both positive); the temperature then drops straight to
    /// `stop_temperature`.
    pub fn cooling_ratio(&self) -> Option<f64> {
        let (start, stop) = (self.start_temperature, self.stop_temperature);
        if self.cycles < 2 || start <= 0.0 || stop <= 0.0 || !start.is_finite() {
            return None;
        }
        Some(((stop / start).ln() / (self.cycles - 1) as f64).exp())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AnnealConfig::default();
        assert!((config.start_temperature - 10.0).abs() < 1e-12);
        assert!((config.stop_temperature - 2.0).abs() < 1e-12);
        assert_eq!(config.cycles, 100);
        assert_eq!(config.acceptance, Acceptance::Greedy);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_zero_cycles() {
        let config = AnnealConfig::default().with_cycles(0);
        assert!(matches!(
            config.validate(),
            Err(AnnealError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_validate_nan_stop() {
        let config = AnnealConfig::default().with_stop_temperature(f64::NAN);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_start_passes_validation() {
        let config = AnnealConfig::default().with_start_temperature(0.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_cooling_ratio_reaches_stop() {
        let config = AnnealConfig::new(10.0, 1.0, 11);
        let ratio = config.cooling_ratio().unwrap();
        let t = 10.0 * ratio.powi(10);
        assert!((t - 1.0).abs() < 1e-9, "got {t}");
    }

    #[test]
    fn test_cooling_ratio_degenerate() {
        assert!(AnnealConfig::new(10.0, 1.0, 1).cooling_ratio().is_none());
        assert!(AnnealConfig::new(10.0, 0.0, 5).cooling_ratio().is_none());
        assert!(AnnealConfig::new(0.0, 1.0, 5).cooling_ratio().is_none());
    }
}
