//! Capability traits for cross-solver observers.
//!
//! These traits abstract over solver-specific event and action types, enabling
//! observers to work generically across different solvers.
//!
//! # Event traits
//!
//! - [`HasEstimate`] — events that carry the solver's latest root estimate
//! - [`HasResidual`] — events that carry the residual at that estimate
//!
//! # Action traits
//!
//! - [`CanStopEarly`] — actions that can signal early termination
//!
//! # Example
//!
//! ```rust
//! use nlsolve_core::Observer;
//! use nlsolve_observers::traits::{CanStopEarly, HasResidual};
//!
//! struct GoodEnough {
//!     tolerance: f64,
//!     min_iters: usize,
//!     iter: usize,
//! }
//!
//! impl<E: HasResidual, A: CanStopEarly> Observer<E, A> for GoodEnough {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         self.iter += 1;
//!         if self.iter >= self.min_iters && event.residual().abs() < self.tolerance {
//!             return Some(A::stop_early());
//!         }
//!         None
//!     }
//! }
//! ```

use nlsolve_solvers::equation::{bisection, fallback, newton_raphson};

/// An event that carries the solver's latest root estimate.
pub trait HasEstimate {
    /// Returns the estimate produced by this iteration.
    fn estimate(&self) -> f64;
}

/// An event that carries a residual value.
pub trait HasResidual {
    /// Returns the residual at [`HasEstimate::estimate`] for the same event.
    fn residual(&self) -> f64;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the solver early.
    fn stop_early() -> Self;
}

// --- newton_raphson::Event ---

impl HasEstimate for newton_raphson::Event {
    fn estimate(&self) -> f64 {
        self.next
    }
}

impl HasResidual for newton_raphson::Event {
    fn residual(&self) -> f64 {
        self.next_residual
    }
}

// --- bisection::Event ---

impl HasEstimate for bisection::Event {
    fn estimate(&self) -> f64 {
        self.x
    }
}

impl HasResidual for bisection::Event {
    fn residual(&self) -> f64 {
        self.residual
    }
}

// --- fallback::Event ---

impl HasEstimate for fallback::Event {
    fn estimate(&self) -> f64 {
        match self {
            fallback::Event::NewtonRaphson(event) => event.estimate(),
            fallback::Event::Bisection(event) => event.estimate(),
        }
    }
}

impl HasResidual for fallback::Event {
    fn residual(&self) -> f64 {
        match self {
            fallback::Event::NewtonRaphson(event) => event.residual(),
            fallback::Event::Bisection(event) => event.residual(),
        }
    }
}

// --- CanStopEarly impls ---

impl CanStopEarly for newton_raphson::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}

impl CanStopEarly for bisection::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}

impl CanStopEarly for fallback::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}
