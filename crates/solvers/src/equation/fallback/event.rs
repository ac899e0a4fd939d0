use crate::equation::{bisection, newton_raphson};

/// Event emitted by the fallback solver, tagged with the stage that produced it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    /// A Newton-Raphson step.
    NewtonRaphson(newton_raphson::Event),

    /// A bisection midpoint, emitted only after Newton-Raphson gave up.
    Bisection(bisection::Event),
}

impl Event {
    /// Returns the stage iteration counter.
    #[must_use]
    pub fn iter(&self) -> usize {
        match self {
            Self::NewtonRaphson(event) => event.iter,
            Self::Bisection(event) => event.iter,
        }
    }
}
