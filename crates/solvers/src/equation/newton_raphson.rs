//! Newton-Raphson iteration for scalar equations.
//!
//! # Algorithm
//!
//! Starting from a guess `x0`, each step moves to
//!
//! ```text
//! next = x - f(x) / f'(x)
//! ```
//!
//! The first step is always taken before any convergence check. After that
//! the solver keeps stepping until the configured [`Criterion`] is met. The
//! default criterion is the step size `|x - next| <= tol`. The step counter
//! starts at one for the first step, and the solve fails with
//! [`Error::ConvergenceFailure`] once a further step is taken while the
//! counter already exceeds `max_iters`.
//!
//! # Failures
//!
//! A zero or NaN derivative, a non-finite residual at a point the solver
//! steps from, or a non-finite step ends the solve with an arithmetic error
//! rather than a convergence failure. The residual at the returned estimate
//! is only required to be finite when [`Criterion::Residual`] is used; under
//! the step size criterion a converged estimate is returned as computed. An
//! infinite derivative gives a zero step. Only
//! [`Error::ConvergenceFailure`] is treated as recoverable by the
//! [`fallback`](super::fallback) solver.
//!
//! # Observer Events
//!
//! The solver emits one [`Event`] per step. Observers can return
//! [`Action::StopEarly`] to halt with the latest estimate.

mod action;
mod config;
mod error;
mod event;
mod solution;

#[cfg(test)]
mod tests;

pub use action::Action;
pub use config::{Config, Criterion};
pub use error::Error;
pub use event::Event;
pub use solution::{Solution, Status};

use nlsolve_core::Observer;

/// Finds a root of `f` using Newton-Raphson iteration.
///
/// The observer receives an [`Event`] after every step and may return
/// [`Action::StopEarly`] to finish with [`Status::StoppedByObserver`].
///
/// # Errors
///
/// Returns [`Error::ConvergenceFailure`] if the iteration cap is exceeded,
/// or an arithmetic error if a residual, derivative, or step is unusable.
pub fn solve<F, D, Obs>(
    f: F,
    df: D,
    x0: f64,
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    F: Fn(f64) -> f64,
    D: Fn(f64) -> f64,
    Obs: Observer<Event, Action>,
{
    if !x0.is_finite() {
        return Err(Error::NonFiniteInitialGuess { x0 });
    }

    let mut step = Step::take(&f, &df, x0, f(x0))?;
    let mut iters = 1;

    if let Some(solution) = observe(&mut observer, &step, iters) {
        return Ok(solution);
    }

    while !config.criterion().is_met(&step, config.tol()) {
        step = Step::take(&f, &df, step.next, step.next_residual)?;
        if iters > config.max_iters() {
            return Err(Error::ConvergenceFailure {
                max_iters: config.max_iters(),
                x: step.next,
            });
        }
        iters += 1;

        if let Some(solution) = observe(&mut observer, &step, iters) {
            return Ok(solution);
        }
    }

    Ok(step.finish(Status::Converged, iters))
}

/// Runs Newton-Raphson without observation.
///
/// # Errors
///
/// Returns [`Error::ConvergenceFailure`] if the iteration cap is exceeded,
/// or an arithmetic error if a residual, derivative, or step is unusable.
pub fn solve_unobserved<F, D>(f: F, df: D, x0: f64, config: &Config) -> Result<Solution, Error>
where
    F: Fn(f64) -> f64,
    D: Fn(f64) -> f64,
{
    solve(f, df, x0, config, ())
}

/// A single Newton step and the residuals on either side of it.
#[derive(Debug, Clone, Copy)]
struct Step {
    x: f64,
    residual: f64,
    derivative: f64,
    next: f64,
    next_residual: f64,
}

impl Step {
    /// Steps from `x`, whose residual is already known.
    ///
    /// The residual at `x` must be finite. The residual at `next` is stored
    /// unchecked and validated by the next step if the solve continues.
    fn take<F, D>(f: &F, df: &D, x: f64, residual: f64) -> Result<Self, Error>
    where
        F: Fn(f64) -> f64,
        D: Fn(f64) -> f64,
    {
        if !residual.is_finite() {
            return Err(Error::NonFiniteResidual { x, residual });
        }

        let derivative = df(x);
        #[allow(clippy::float_cmp)]
        if derivative == 0.0 {
            return Err(Error::ZeroDerivative { x });
        }
        if derivative.is_nan() {
            return Err(Error::NonFiniteDerivative { x, derivative });
        }

        let next = x - residual / derivative;
        if !next.is_finite() {
            return Err(Error::NonFiniteStep { x, next });
        }

        Ok(Self {
            x,
            residual,
            derivative,
            next,
            next_residual: f(next),
        })
    }

    fn event(&self, iter: usize) -> Event {
        Event {
            iter,
            x: self.x,
            residual: self.residual,
            derivative: self.derivative,
            next: self.next,
            next_residual: self.next_residual,
        }
    }

    fn finish(&self, status: Status, iters: usize) -> Solution {
        Solution {
            status,
            x: self.next,
            residual: self.next_residual,
            iters,
        }
    }
}

/// Emits a step event and builds the early-stop solution if requested.
fn observe<Obs>(observer: &mut Obs, step: &Step, iters: usize) -> Option<Solution>
where
    Obs: Observer<Event, Action>,
{
    match observer.observe(&step.event(iters))? {
        Action::StopEarly => Some(step.finish(Status::StoppedByObserver, iters)),
    }
}
