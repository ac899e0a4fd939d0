use crate::equation::{bisection, newton_raphson};

/// The method that produced the reported root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// Newton-Raphson produced the root.
    NewtonRaphson,

    /// Newton-Raphson ran out of iterations and bisection produced the root.
    Bisection,
}

/// Indicates how the solve finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The reporting method converged.
    Converged,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of a fallback solve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solution {
    /// Which method produced `x`.
    pub method: Method,

    /// Final solver status.
    pub status: Status,

    /// Best estimate of the root.
    pub x: f64,

    /// Residual at `x`.
    pub residual: f64,

    /// Iterations taken by the reporting method.
    pub iters: usize,

    /// Why Newton-Raphson was abandoned, if the fallback ran.
    pub newton_failure: Option<newton_raphson::Error>,
}

impl From<newton_raphson::Solution> for Solution {
    fn from(solution: newton_raphson::Solution) -> Self {
        Self {
            method: Method::NewtonRaphson,
            status: match solution.status {
                newton_raphson::Status::Converged => Status::Converged,
                newton_raphson::Status::StoppedByObserver => Status::StoppedByObserver,
            },
            x: solution.x,
            residual: solution.residual,
            iters: solution.iters,
            newton_failure: None,
        }
    }
}

impl Solution {
    /// Builds a solution from a bisection result and the Newton failure that led to it.
    pub(super) fn from_bisection(
        solution: bisection::Solution,
        newton_failure: newton_raphson::Error,
    ) -> Self {
        Self {
            method: Method::Bisection,
            status: match solution.status {
                bisection::Status::Converged => Status::Converged,
                bisection::Status::StoppedByObserver => Status::StoppedByObserver,
            },
            x: solution.x,
            residual: solution.residual,
            iters: solution.iters,
            newton_failure: Some(newton_failure),
        }
    }
}
