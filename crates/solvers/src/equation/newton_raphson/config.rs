use crate::equation::tolerance::{self, ConfigError, DEFAULT_MAX_ITERS, DEFAULT_TOL};

use super::Step;

/// How the Newton-Raphson solver decides that it has converged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Criterion {
    /// Converged when the step size `|x - next|` is within tolerance.
    #[default]
    StepSize,

    /// Converged when the residual `|f(next)|` is within tolerance.
    ///
    /// This matches the bisection criterion, so results from both solvers
    /// satisfy the same bound.
    Residual,
}

impl Criterion {
    /// Returns true if the step satisfies this criterion.
    pub(super) fn is_met(self, step: &Step, tol: f64) -> bool {
        match self {
            Self::StepSize => (step.x - step.next).abs() <= tol,
            Self::Residual => step.next_residual.abs() <= tol,
        }
    }
}

/// Configuration for the Newton-Raphson solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    max_iters: usize,
    tol: f64,
    criterion: Criterion,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_iters: DEFAULT_MAX_ITERS,
            tol: DEFAULT_TOL,
            criterion: Criterion::StepSize,
        }
    }
}

impl Config {
    /// Creates a new config using the step size criterion.
    ///
    /// # Errors
    ///
    /// Returns an error if `tol` is not finite and positive.
    pub fn new(max_iters: usize, tol: f64) -> Result<Self, ConfigError> {
        Ok(Self {
            max_iters,
            tol: tolerance::validate(tol)?,
            criterion: Criterion::StepSize,
        })
    }

    /// Returns a copy of this config using the given convergence criterion.
    #[must_use]
    pub fn with_criterion(self, criterion: Criterion) -> Self {
        Self { criterion, ..self }
    }

    /// Returns the iteration cap.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    /// Returns the convergence tolerance.
    #[must_use]
    pub fn tol(&self) -> f64 {
        self.tol
    }

    /// Returns the convergence criterion.
    #[must_use]
    pub fn criterion(&self) -> Criterion {
        self.criterion
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn step(x: f64, next: f64, next_residual: f64) -> Step {
        Step {
            x,
            residual: 1.0,
            derivative: 1.0,
            next,
            next_residual,
        }
    }

    #[test]
    fn default_matches_documented_values() {
        let config = Config::default();
        assert_eq!(config.max_iters(), 20);
        assert!((config.tol() - 1e-5).abs() < f64::EPSILON);
        assert_eq!(config.criterion(), Criterion::StepSize);
    }

    #[test]
    fn new_rejects_bad_tolerance() {
        assert_eq!(Config::new(10, 0.0), Err(ConfigError::Tolerance));
        assert_eq!(Config::new(10, f64::NAN), Err(ConfigError::Tolerance));
    }

    #[test]
    fn with_criterion_keeps_other_fields() {
        let config = Config::new(7, 1e-3)
            .expect("valid config")
            .with_criterion(Criterion::Residual);

        assert_eq!(config.max_iters(), 7);
        assert_eq!(config.criterion(), Criterion::Residual);
    }

    #[test]
    fn step_size_ignores_residual() {
        let small_step = step(1.0, 1.0 + 1e-6, 10.0);
        assert!(Criterion::StepSize.is_met(&small_step, 1e-5));
        assert!(!Criterion::Residual.is_met(&small_step, 1e-5));
    }

    #[test]
    fn residual_ignores_step_size() {
        let big_step = step(1.0, 5.0, 1e-7);
        assert!(!Criterion::StepSize.is_met(&big_step, 1e-5));
        assert!(Criterion::Residual.is_met(&big_step, 1e-5));
    }
}
