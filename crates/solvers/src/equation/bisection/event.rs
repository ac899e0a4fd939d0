use super::Bracket;

/// Event emitted by the bisection solver after each midpoint evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// Iteration counter (1-based).
    pub iter: usize,

    /// Bracket after narrowing around the midpoint.
    pub bracket: Bracket,

    /// The midpoint that was evaluated.
    pub x: f64,

    /// Residual at the midpoint.
    pub residual: f64,
}
