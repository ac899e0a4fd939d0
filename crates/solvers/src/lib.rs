//! Scalar root finders for nonlinear equations `f(x) = 0`.
//!
//! The [`equation`] module holds the solvers, each with its own config,
//! error, solution, and observer event types:
//!
//! - [`equation::newton_raphson`] — iterates `x - f(x) / f'(x)` from a guess
//! - [`equation::bisection`] — halves a bracket around a sign change
//! - [`equation::fallback`] — Newton-Raphson first, bisection if it stalls
//!
//! For one-off calls the crate root also provides [`newton_raphson`],
//! [`bisection`], and [`solve`], which take plain tolerances and iteration
//! caps and return the root directly.
//!
//! ```
//! let root = nlsolve_solvers::newton_raphson(|x| x * x - 2.0, |x| 2.0 * x, 1.0, 1e-10, 20)?;
//! assert!((root - 2.0_f64.sqrt()).abs() < 1e-10);
//! # Ok::<(), nlsolve_solvers::Error>(())
//! ```

pub mod equation;

mod error;
mod roots;

pub use error::Error;
pub use roots::{bisection, newton_raphson, solve};
