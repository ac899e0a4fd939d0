/// Event emitted by the Newton-Raphson solver after each step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// Step counter (1-based).
    pub iter: usize,

    /// The point the step was taken from.
    pub x: f64,

    /// Residual `f(x)`.
    pub residual: f64,

    /// Derivative `f'(x)`.
    pub derivative: f64,

    /// The new estimate `x - f(x) / f'(x)`.
    pub next: f64,

    /// Residual at the new estimate.
    pub next_residual: f64,
}

impl Event {
    /// Returns the size of this step.
    #[must_use]
    pub fn step_size(&self) -> f64 {
        (self.x - self.next).abs()
    }
}
