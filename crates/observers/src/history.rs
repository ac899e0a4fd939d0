use std::fmt;

use nlsolve_core::Observer;

use crate::traits::{HasEstimate, HasResidual};

/// A single recorded iterate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Iterate {
    pub x: f64,
    pub residual: f64,
}

/// Records the estimate and residual of every event it observes.
///
/// Never requests an action, so a solve behaves exactly as it would
/// unobserved. Pass it by mutable reference to keep the record afterwards:
///
/// ```rust
/// use nlsolve_observers::History;
/// use nlsolve_solvers::equation::bisection;
///
/// let mut history = History::new();
/// bisection::solve(|x| x * x - 2.0, [0.0, 2.0], &bisection::Config::default(), &mut history)?;
///
/// assert_eq!(history.len(), 16);
/// println!("{history}");
/// # Ok::<(), bisection::Error>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct History {
    iterates: Vec<Iterate>,
}

impl History {
    /// Creates an empty history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded iterates in order.
    #[must_use]
    pub fn iterates(&self) -> &[Iterate] {
        &self.iterates
    }

    /// Returns the number of recorded iterates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.iterates.len()
    }

    /// Returns true if nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.iterates.is_empty()
    }

    /// Returns the most recent iterate.
    #[must_use]
    pub fn last(&self) -> Option<&Iterate> {
        self.iterates.last()
    }
}

impl<E, A> Observer<E, A> for History
where
    E: HasEstimate + HasResidual,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self.iterates.push(Iterate {
            x: event.estimate(),
            residual: event.residual(),
        });
        None
    }
}

impl<E, A> Observer<E, A> for &mut History
where
    E: HasEstimate + HasResidual,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        Observer::<E, A>::observe(&mut **self, event)
    }
}

/// Formats one line per iterate: index, estimate, and residual.
impl fmt::Display for History {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, iterate) in self.iterates.iter().enumerate() {
            writeln!(f, "{:>4}  x = {:<24e}  f(x) = {:e}", i + 1, iterate.x, iterate.residual)?;
        }
        Ok(())
    }
}
