/// Indicates how the solver finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Converged according to the configured criterion.
    Converged,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of a Newton-Raphson solve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solution {
    /// Final solver status.
    pub status: Status,

    /// The latest estimate of the root.
    pub x: f64,

    /// Residual at `x`.
    ///
    /// May be non-finite if the step size criterion accepted `x` without
    /// needing its residual.
    pub residual: f64,

    /// Number of Newton steps taken.
    pub iters: usize,
}
