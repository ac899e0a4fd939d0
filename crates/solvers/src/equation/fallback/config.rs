use crate::equation::{ConfigError, DEFAULT_MAX_ITERS, bisection, newton_raphson};

/// Configuration for the fallback solver.
///
/// Holds one config per stage. Built with [`Config::new`], both stages share
/// the tolerance and keep their own iteration caps.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Config {
    newton_raphson: newton_raphson::Config,
    bisection: bisection::Config,
}

impl Config {
    /// Creates a config with a shared tolerance and per-stage iteration caps.
    ///
    /// # Errors
    ///
    /// Returns an error if `tol` is not finite and positive.
    pub fn new(
        tol: f64,
        newton_max_iters: usize,
        bisection_max_iters: usize,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            newton_raphson: newton_raphson::Config::new(newton_max_iters, tol)?,
            bisection: bisection::Config::new(bisection_max_iters, tol)?,
        })
    }

    /// Creates a config with the given tolerance and the default iteration caps.
    ///
    /// # Errors
    ///
    /// Returns an error if `tol` is not finite and positive.
    pub fn with_tol(tol: f64) -> Result<Self, ConfigError> {
        Self::new(tol, DEFAULT_MAX_ITERS, DEFAULT_MAX_ITERS)
    }

    /// Creates a config from separately built stage configs.
    #[must_use]
    pub fn from_stages(
        newton_raphson: newton_raphson::Config,
        bisection: bisection::Config,
    ) -> Self {
        Self {
            newton_raphson,
            bisection,
        }
    }

    /// Returns the Newton-Raphson stage config.
    #[must_use]
    pub fn newton_raphson(&self) -> &newton_raphson::Config {
        &self.newton_raphson
    }

    /// Returns the bisection stage config.
    #[must_use]
    pub fn bisection(&self) -> &bisection::Config {
        &self.bisection
    }
}
