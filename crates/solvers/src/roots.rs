//! One-call entry points with plain tolerance and iteration-cap arguments.
//!
//! These build the solver configs, run without an observer, and return only
//! the root. Use the [`equation`](crate::equation) modules directly for
//! iteration counts, residuals, or observation.

use crate::{Error, equation};

/// Finds a root of `f` by Newton-Raphson iteration from `x0`.
///
/// Converges when the step size is at most `tol`. A `tol` of
/// [`DEFAULT_TOL`](crate::equation::DEFAULT_TOL) and `max_iters` of
/// [`DEFAULT_MAX_ITERS`](crate::equation::DEFAULT_MAX_ITERS) match the
/// config defaults.
///
/// # Errors
///
/// Returns an error if `tol` is invalid or the solve fails.
pub fn newton_raphson(
    f: impl Fn(f64) -> f64,
    df: impl Fn(f64) -> f64,
    x0: f64,
    tol: f64,
    max_iters: usize,
) -> Result<f64, Error> {
    let config = equation::newton_raphson::Config::new(max_iters, tol)?;
    let solution = equation::newton_raphson::solve_unobserved(f, df, x0, &config)?;
    Ok(solution.x)
}

/// Finds a root of `f` in `[x0, x1]` by bisection.
///
/// Converges when `|f(x)|` is at most `tol`.
///
/// # Errors
///
/// Returns an error if `tol` is invalid or the solve fails.
pub fn bisection(
    f: impl Fn(f64) -> f64,
    x0: f64,
    x1: f64,
    tol: f64,
    max_iters: usize,
) -> Result<f64, Error> {
    let config = equation::bisection::Config::new(max_iters, tol)?;
    let solution = equation::bisection::solve_unobserved(f, [x0, x1], &config)?;
    Ok(solution.x)
}

/// Finds a root of `f` by Newton-Raphson from `x0`, falling back to
/// bisection on `[x0, x1]` if Newton-Raphson runs out of iterations.
///
/// # Errors
///
/// Returns an error if `tol` is invalid, Newton-Raphson fails with an
/// arithmetic error, or the bisection fallback fails.
pub fn solve(
    f: impl Fn(f64) -> f64,
    df: impl Fn(f64) -> f64,
    x0: f64,
    x1: f64,
    tol: f64,
    newton_max_iters: usize,
    bisection_max_iters: usize,
) -> Result<f64, Error> {
    let config = equation::fallback::Config::new(tol, newton_max_iters, bisection_max_iters)?;
    let solution = equation::fallback::solve_unobserved(f, df, x0, x1, &config)?;
    Ok(solution.x)
}
