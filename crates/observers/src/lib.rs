//! Reusable observers for the nlsolve root finders.
//!
//! This crate provides [`Observer`] implementations and capability traits that
//! work across every solver in `nlsolve-solvers`.
//!
//! # Modules
//!
//! - [`traits`] — Capability traits for cross-solver observers
//!   ([`HasEstimate`], [`HasResidual`], [`CanStopEarly`])
//!
//! # Observers
//!
//! - [`History`] — records each iterate for later inspection or printing
//! - [`StopWhen`] — stops a solve once the residual is small enough
//!
//! [`Observer`]: nlsolve_core::Observer
//! [`HasEstimate`]: traits::HasEstimate
//! [`HasResidual`]: traits::HasResidual
//! [`CanStopEarly`]: traits::CanStopEarly

pub mod traits;

mod history;
mod stop_when;

pub use history::{History, Iterate};
pub use stop_when::StopWhen;
