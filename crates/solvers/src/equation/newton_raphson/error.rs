use thiserror::Error;

/// Errors that can occur during Newton-Raphson solving.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Error {
    #[error("initial guess is not finite: {x0}")]
    NonFiniteInitialGuess { x0: f64 },

    #[error("did not converge within {max_iters} iterations (last estimate {x})")]
    ConvergenceFailure { max_iters: usize, x: f64 },

    #[error("derivative is zero at x = {x}")]
    ZeroDerivative { x: f64 },

    #[error("non-finite residual {residual} at x = {x}")]
    NonFiniteResidual { x: f64, residual: f64 },

    #[error("derivative is NaN at x = {x}")]
    NonFiniteDerivative { x: f64, derivative: f64 },

    #[error("step from x = {x} produced non-finite estimate {next}")]
    NonFiniteStep { x: f64, next: f64 },
}

impl Error {
    /// Returns true if the solver ran out of iterations.
    ///
    /// All other variants are arithmetic or input failures.
    #[must_use]
    pub fn is_convergence_failure(&self) -> bool {
        matches!(self, Self::ConvergenceFailure { .. })
    }
}
