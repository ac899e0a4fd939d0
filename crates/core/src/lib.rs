//! Core traits shared by the nlsolve crates.
//!
//! Solvers report progress by emitting events to an [`Observer`], which may
//! answer with a solver-specific control action. The solvers themselves live
//! in `nlsolve-solvers`, and reusable observers in `nlsolve-observers`.

mod observer;

pub use observer::Observer;
