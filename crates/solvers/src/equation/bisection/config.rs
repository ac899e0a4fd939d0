use crate::equation::tolerance::{self, ConfigError, DEFAULT_MAX_ITERS, DEFAULT_TOL};

/// Configuration for the bisection solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    max_iters: usize,
    residual_tol: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_iters: DEFAULT_MAX_ITERS,
            residual_tol: DEFAULT_TOL,
        }
    }
}

impl Config {
    /// Creates a new config with a validated residual tolerance.
    ///
    /// # Errors
    ///
    /// Returns an error if `residual_tol` is not finite and positive.
    pub fn new(max_iters: usize, residual_tol: f64) -> Result<Self, ConfigError> {
        Ok(Self {
            max_iters,
            residual_tol: tolerance::validate(residual_tol)?,
        })
    }

    /// Returns the iteration cap.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    /// Returns the tolerance on `|f(x)|`.
    #[must_use]
    pub fn residual_tol(&self) -> f64 {
        self.residual_tol
    }
}
