//! Newton-Raphson with a bisection fallback.
//!
//! The solver first runs [`newton_raphson`] from `x0`. If that converges,
//! its root is returned. If it fails with a convergence failure, and only
//! then, [`bisection`] runs on `[x0, x1]` and its result is returned instead.
//! Arithmetic failures from Newton-Raphson and every bisection failure are
//! passed to the caller.
//!
//! The bisection bracket always starts at `x0`, the Newton-Raphson guess,
//! regardless of where the Newton iterates wandered. If `x0` and `x1` do not
//! bracket a root, the caller sees [`bisection::Error::InvalidBracket`]
//! wrapped in [`Error::Bisection`].
//!
//! # Observer Events
//!
//! Each Newton step is reported as [`Event::NewtonRaphson`] and each
//! bisection midpoint as [`Event::Bisection`].

mod action;
mod config;
mod error;
mod event;
mod solution;

pub use action::Action;
pub use config::Config;
pub use error::Error;
pub use event::Event;
pub use solution::{Method, Solution, Status};

use nlsolve_core::Observer;

use crate::equation::{bisection, newton_raphson};

/// Finds a root of `f`, trying Newton-Raphson before bisection.
///
/// # Errors
///
/// Returns [`Error::NewtonRaphson`] if Newton-Raphson fails with anything
/// other than a convergence failure, or [`Error::Bisection`] if the fallback
/// fails.
pub fn solve<F, D, Obs>(
    f: F,
    df: D,
    x0: f64,
    x1: f64,
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    F: Fn(f64) -> f64,
    D: Fn(f64) -> f64,
    Obs: Observer<Event, Action>,
{
    let newton = newton_raphson::solve(
        &f,
        df,
        x0,
        config.newton_raphson(),
        |event: &newton_raphson::Event| {
            observer
                .observe(&Event::NewtonRaphson(*event))
                .map(newton_raphson::Action::from)
        },
    );

    let newton_failure = match newton {
        Ok(solution) => return Ok(Solution::from(solution)),
        Err(error) if error.is_convergence_failure() => error,
        Err(error) => return Err(Error::NewtonRaphson(error)),
    };

    let solution = bisection::solve(
        &f,
        [x0, x1],
        config.bisection(),
        |event: &bisection::Event| {
            observer
                .observe(&Event::Bisection(*event))
                .map(bisection::Action::from)
        },
    )?;

    Ok(Solution::from_bisection(solution, newton_failure))
}

/// Runs the fallback solver without observation.
///
/// # Errors
///
/// Returns [`Error::NewtonRaphson`] if Newton-Raphson fails with anything
/// other than a convergence failure, or [`Error::Bisection`] if the fallback
/// fails.
pub fn solve_unobserved<F, D>(
    f: F,
    df: D,
    x0: f64,
    x1: f64,
    config: &Config,
) -> Result<Solution, Error>
where
    F: Fn(f64) -> f64,
    D: Fn(f64) -> f64,
{
    solve(f, df, x0, x1, config, ())
}
