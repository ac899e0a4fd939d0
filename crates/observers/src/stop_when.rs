use nlsolve_core::Observer;

use crate::traits::{CanStopEarly, HasResidual};

/// Stops a solve as soon as an iterate's residual magnitude is at most `tol`.
///
/// Useful to give Newton-Raphson a residual target on top of its step size
/// criterion, or to cut bisection short once the residual is good enough.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StopWhen {
    tol: f64,
}

impl StopWhen {
    /// Creates an observer that stops once `|residual| <= tol`.
    #[must_use]
    pub fn residual_below(tol: f64) -> Self {
        Self { tol }
    }
}

impl<E, A> Observer<E, A> for StopWhen
where
    E: HasResidual,
    A: CanStopEarly,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        (event.residual().abs() <= self.tol).then(A::stop_early)
    }
}
