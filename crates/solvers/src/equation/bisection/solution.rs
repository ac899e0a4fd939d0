use super::Bracket;

/// Indicates how the solver finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Converged according to the residual tolerance.
    Converged,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of a bisection solve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solution {
    /// Final solver status.
    pub status: Status,

    /// The latest midpoint, or the left bound if it was already a root.
    pub x: f64,

    /// Residual at `x`.
    pub residual: f64,

    /// Bracket when the solver finished.
    ///
    /// `None` when the left bound converged before the right bound was needed.
    pub bracket: Option<Bracket>,

    /// Number of midpoints evaluated.
    pub iters: usize,
}
