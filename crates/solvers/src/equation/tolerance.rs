use thiserror::Error;

/// Default convergence tolerance shared by all solvers.
pub const DEFAULT_TOL: f64 = 1e-5;

/// Default iteration cap shared by all solvers.
pub const DEFAULT_MAX_ITERS: usize = 20;

/// Errors that can occur when validating a solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("tol must be finite and positive")]
    Tolerance,
}

/// Checks that a convergence tolerance is finite and strictly positive.
pub(crate) fn validate(tol: f64) -> Result<f64, ConfigError> {
    if tol.is_finite() && tol > 0.0 {
        Ok(tol)
    } else {
        Err(ConfigError::Tolerance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_positive_tolerance() {
        assert_eq!(validate(1e-8), Ok(1e-8));
        assert_eq!(validate(DEFAULT_TOL), Ok(DEFAULT_TOL));
    }

    #[test]
    fn rejects_zero_negative_and_non_finite() {
        for tol in [0.0, -1e-5, f64::NAN, f64::INFINITY] {
            assert_eq!(validate(tol), Err(ConfigError::Tolerance));
        }
    }
}
