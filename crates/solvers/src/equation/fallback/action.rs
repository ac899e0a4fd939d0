use crate::equation::{bisection, newton_raphson};

/// Control actions supported by the fallback solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop whichever solver is running and return its latest estimate.
    ///
    /// Stopping Newton-Raphson early does not start the bisection fallback.
    StopEarly,
}

impl From<Action> for newton_raphson::Action {
    fn from(action: Action) -> Self {
        match action {
            Action::StopEarly => Self::StopEarly,
        }
    }
}

impl From<Action> for bisection::Action {
    fn from(action: Action) -> Self {
        match action {
            Action::StopEarly => Self::StopEarly,
        }
    }
}
