use thiserror::Error;

/// Errors that can occur during bisection solving.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Error {
    #[error("bracket contains non-finite value: {value}")]
    NonFiniteBracket { value: f64 },

    #[error("no root in bracket: f({left})={left_residual}, f({right})={right_residual}")]
    InvalidBracket {
        left: f64,
        right: f64,
        left_residual: f64,
        right_residual: f64,
    },

    #[error("did not converge within {max_iters} iterations (bracket {bracket:?})")]
    ConvergenceFailure { max_iters: usize, bracket: [f64; 2] },

    #[error("non-finite residual {residual} at x = {x}")]
    NonFiniteResidual { x: f64, residual: f64 },
}

impl Error {
    /// Returns true if the solver ran out of iterations.
    #[must_use]
    pub fn is_convergence_failure(&self) -> bool {
        matches!(self, Self::ConvergenceFailure { .. })
    }
}
