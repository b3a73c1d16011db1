//! Acceptance rules.

use crate::random::UniformSource;

/// Decides whether a candidate replaces the current solution.
///
/// `Greedy` is the default and keeps a candidate only when it strictly
/// beats the best error seen so far; temperature then controls only the
/// perturbation magnitude. `Metropolis` is the textbook rule and may
/// keep a worse candidate with probability `exp(-delta / T)`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Acceptance {
    #[default]
    Greedy,
    Metropolis,
}

/// Inputs to one acceptance decision.
#[derive(Debug, Clone, Copy)]
pub struct Decision {
    pub candidate_error: f64,
    pub current_error: f64,
    pub best_error: f64,
    pub temperature: f64,
}

impl Acceptance {
    /// Returns `true` if the candidate should be kept.
    ///
    /// A NaN candidate error is always rejected.
    pub fn accept<U: UniformSource + ?Sized>(&self, d: &Decision, rng: &mut U) -> bool {
        if d.candidate_error.is_nan() {
            return false;
        }
        match self {
            Acceptance::Greedy => d.candidate_error < d.best_error,
            Acceptance::Metropolis => {
                let delta = d.candidate_error - d.current_error;
                if delta < 0.0 || d.candidate_error < d.best_error {
                    true
                } else if d.temperature > 0.0 && d.temperature.is_finite() {
                    rng.next_uniform() < (-delta / d.temperature).exp()
                } else {
                    false
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(f64);

    impl UniformSource for Fixed {
        fn next_uniform(&mut self) -> f64 {
            self.0
        }
    }

    fn decision(candidate: f64, current: f64, best: f64, t: f64) -> Decision {
        Decision {
            candidate_error: candidate,
            current_error: current,
            best_error: best,
            temperature: t,
        }
    }

    #[test]
    fn test_greedy_strict_improvement() {
        let mut rng = Fixed(0.0);
        assert!(Acceptance::Greedy.accept(&decision(1.0, 2.0, 2.0, 10.0), &mut rng));
        assert!(!Acceptance::Greedy.accept(&decision(2.0, 2.0, 2.0, 10.0), &mut rng));
        assert!(!Acceptance::Greedy.accept(&decision(3.0, 2.0, 2.0, 1e9), &mut rng));
    }

    #[test]
    fn test_nan_rejected() {
        let mut rng = Fixed(0.0);
        let d = decision(f64::NAN, 2.0, 2.0, 10.0);
        assert!(!Acceptance::Greedy.accept(&d, &mut rng));
        assert!(!Acceptance::Metropolis.accept(&d, &mut rng));
    }

    #[test]
    fn test_metropolis_uphill() {
        // exp(-1 / 1) ~ 0.368
        let d = decision(3.0, 2.0, 2.0, 1.0);
        assert!(Acceptance::Metropolis.accept(&d, &mut Fixed(0.1)));
        assert!(!Acceptance::Metropolis.accept(&d, &mut Fixed(0.9)));
    }

    #[test]
    fn test_metropolis_zero_temperature_is_greedy() {
        let d = decision(3.0, 2.0, 2.0, 0.0);
        assert!(!Acceptance::Metropolis.accept(&d, &mut Fixed(0.0)));
    }
}
