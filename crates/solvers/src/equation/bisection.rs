//! Bisection for scalar equations on a bracketed interval.
//!
//! # Algorithm
//!
//! The solver starts with `x = x0`. If `|f(x0)|` is already within
//! tolerance, `x0` is returned without any splitting. Otherwise, while
//! `|f(x)| > tol`, each iteration:
//!
//! 1. Checks that the bracket still holds a sign change (or a zero),
//!    failing with [`Error::InvalidBracket`] if it does not.
//! 2. Evaluates the midpoint and replaces the bound whose residual has the
//!    same strict sign, or the right bound if the midpoint residual is zero.
//!    Replacing `right` on a zero residual is intentional; the loop ends on
//!    that residual either way, so the returned root does not depend on it.
//! 3. Fails with [`Error::ConvergenceFailure`] if the counter, which starts
//!    at zero and counts previous midpoints, already exceeds `max_iters`.
//!
//! The endpoints may be given in either order.
//!
//! # Observer Events
//!
//! The solver emits one [`Event`] per midpoint. Observers can return
//! [`Action::StopEarly`] to halt with the latest midpoint.

mod action;
mod bracket;
mod config;
mod error;
mod event;
mod solution;


pub use action::Action;
pub use bracket::Bracket;
pub use config::Config;
pub use error::Error;
pub use event::Event;
pub use solution::{Solution, Status};

use nlsolve_core::Observer;

/// Finds a root of `f` in the bracket `[x0, x1]` using bisection.
///
/// The observer receives an [`Event`] after every midpoint and may return
/// [`Action::StopEarly`] to finish with [`Status::StoppedByObserver`].
///
/// # Errors
///
/// Returns an error if a bound is non-finite, the bracket has no sign
/// change, a residual is non-finite, or the iteration cap is exceeded.
pub fn solve<F, Obs>(
    f: F,
    bracket: [f64; 2],
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    F: Fn(f64) -> f64,
    Obs: Observer<Event, Action>,
{
    let [left, right] = validate_bracket(bracket)?;

    let left_residual = eval_residual(&f, left)?;
    if left_residual.abs() <= config.residual_tol() {
        return Ok(Solution {
            status: Status::Converged,
            x: left,
            residual: left_residual,
            bracket: None,
            iters: 0,
        });
    }

    let right_residual = eval_residual(&f, right)?;
    let mut bracket = Bracket::new(left, right, left_residual, right_residual);

    let mut x = left;
    let mut residual = left_residual;
    let mut iters = 0;

    while residual.abs() > config.residual_tol() {
        if !bracket.has_sign_change() {
            let [left, right] = bracket.as_array();
            let [left_residual, right_residual] = bracket.residuals();
            return Err(Error::InvalidBracket {
                left,
                right,
                left_residual,
                right_residual,
            });
        }

        x = bracket.midpoint();
        residual = eval_residual(&f, x)?;
        bracket.shrink(x, residual);

        if iters > config.max_iters() {
            return Err(Error::ConvergenceFailure {
                max_iters: config.max_iters(),
                bracket: bracket.as_array(),
            });
        }
        iters += 1;

        let event = Event {
            iter: iters,
            bracket,
            x,
            residual,
        };
        if let Some(action) = observer.observe(&event) {
            match action {
                Action::StopEarly => {
                    return Ok(Solution {
                        status: Status::StoppedByObserver,
                        x,
                        residual,
                        bracket: Some(bracket),
                        iters,
                    });
                }
            }
        }
    }

    Ok(Solution {
        status: Status::Converged,
        x,
        residual,
        bracket: Some(bracket),
        iters,
    })
}

/// Runs bisection without observation.
///
/// # Errors
///
/// Returns an error if a bound is non-finite, the bracket has no sign
/// change, a residual is non-finite, or the iteration cap is exceeded.
pub fn solve_unobserved<F>(f: F, bracket: [f64; 2], config: &Config) -> Result<Solution, Error>
where
    F: Fn(f64) -> f64,
{
    solve(f, bracket, config, ())
}

fn validate_bracket(bracket: [f64; 2]) -> Result<[f64; 2], Error> {
    if let Some(&value) = bracket.iter().find(|value| !value.is_finite()) {
        return Err(Error::NonFiniteBracket { value });
    }
    Ok(bracket)
}

fn eval_residual<F>(f: &F, x: f64) -> Result<f64, Error>
where
    F: Fn(f64) -> f64,
{
    let residual = f(x);
    if residual.is_finite() {
        Ok(residual)
    } else {
        Err(Error::NonFiniteResidual { x, residual })
    }
}
