use thiserror::Error;

use crate::equation::{ConfigError, bisection, fallback, newton_raphson};

/// Errors returned by the free functions at the crate root.
///
/// Wraps the per-solver errors so callers can handle all three entry points
/// uniformly and still match on the specific failure.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Error {
    #[error("invalid config: {0}")]
    InvalidConfig(#[from] ConfigError),

    #[error(transparent)]
    NewtonRaphson(#[from] newton_raphson::Error),

    #[error(transparent)]
    Bisection(#[from] bisection::Error),
}

impl From<fallback::Error> for Error {
    fn from(err: fallback::Error) -> Self {
        match err {
            fallback::Error::NewtonRaphson(e) => Self::NewtonRaphson(e),
            fallback::Error::Bisection(e) => Self::Bisection(e),
        }
    }
}

impl Error {
    /// Returns true if a solver ran out of iterations.
    #[must_use]
    pub fn is_convergence_failure(&self) -> bool {
        match self {
            Self::NewtonRaphson(e) => e.is_convergence_failure(),
            Self::Bisection(e) => e.is_convergence_failure(),
            Self::InvalidConfig(_) => false,
        }
    }

    /// Returns true if bisection was given a bracket without a sign change.
    #[must_use]
    pub fn is_invalid_bracket(&self) -> bool {
        matches!(self, Self::Bisection(bisection::Error::InvalidBracket { .. }))
    }
}
