//! Solvers for scalar equations — finding `x` such that `f(x) = 0`.
//!
//! Every solver takes the function as a plain `Fn(f64) -> f64`, a validated
//! config, and an [`Observer`] that sees one event per iteration. The
//! `solve_unobserved` variants pass the no-op `()` observer.
//!
//! # Solvers
//!
//! - [`newton_raphson`] — fast local convergence, needs the derivative
//! - [`bisection`] — guaranteed convergence on a bracketed sign change
//! - [`fallback`] — Newton-Raphson with bisection as the recovery path
//!
//! [`Observer`]: nlsolve_core::Observer

mod tolerance;

pub use tolerance::{ConfigError, DEFAULT_MAX_ITERS, DEFAULT_TOL};

pub mod bisection;
pub mod fallback;
pub mod newton_raphson;
