use thiserror::Error;

use crate::equation::{bisection, newton_raphson};

/// Errors that can occur during a fallback solve.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Error {
    /// Newton-Raphson failed for a reason other than running out of iterations.
    #[error("newton-raphson failed: {0}")]
    NewtonRaphson(newton_raphson::Error),

    /// The bisection fallback failed.
    #[error("bisection fallback failed: {0}")]
    Bisection(#[from] bisection::Error),
}
