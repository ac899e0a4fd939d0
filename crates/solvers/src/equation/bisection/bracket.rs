/// Current bracket bounds and the residuals at each bound.
///
/// The bounds keep the order they were given in, so `left` may be greater
/// than `right`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bracket {
    left: f64,
    right: f64,
    left_residual: f64,
    right_residual: f64,
}

impl Bracket {
    /// Creates a bracket from evaluated bounds.
    pub(super) fn new(left: f64, right: f64, left_residual: f64, right_residual: f64) -> Self {
        Self {
            left,
            right,
            left_residual,
            right_residual,
        }
    }

    /// Returns the bracket bounds as an array.
    #[must_use]
    pub fn as_array(&self) -> [f64; 2] {
        [self.left, self.right]
    }

    /// Returns the residuals at the left and right bounds.
    #[must_use]
    pub fn residuals(&self) -> [f64; 2] {
        [self.left_residual, self.right_residual]
    }

    /// Returns the midpoint of the bracket.
    #[must_use]
    pub fn midpoint(&self) -> f64 {
        0.5 * (self.left + self.right)
    }

    /// Returns the absolute bracket width.
    #[must_use]
    pub fn width(&self) -> f64 {
        (self.right - self.left).abs()
    }

    /// Returns true if the bound residuals have opposite signs or one is zero.
    #[must_use]
    pub fn has_sign_change(&self) -> bool {
        !Sign::of(self.left_residual).matches(Sign::of(self.right_residual))
    }

    /// Replaces the bound whose residual shares the sign of `residual`.
    ///
    /// A zero residual matches neither sign, so it replaces `right`.
    pub(super) fn shrink(&mut self, x: f64, residual: f64) {
        if Sign::of(residual).matches(Sign::of(self.left_residual)) {
            self.left = x;
            self.left_residual = residual;
        } else {
            self.right = x;
            self.right_residual = residual;
        }
    }
}

/// The sign of a residual for bracket logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Sign {
    Negative,
    Zero,
    Positive,
}

impl Sign {
    fn of(value: f64) -> Self {
        if value > 0.0 {
            Sign::Positive
        } else if value < 0.0 {
            Sign::Negative
        } else {
            Sign::Zero
        }
    }

    /// Returns true if both signs are the same and nonzero.
    ///
    /// Equivalent to `a * b > 0` without the risk of underflow or overflow.
    fn matches(self, other: Self) -> bool {
        self == other && self != Sign::Zero
    }
}
