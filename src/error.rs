//! Root finding error conditions.
//!
//! Failures are plain values rather than panics so the composite solver can
//! match on exactly one variant and callers can match on the rest. To help
//! with diagnostics, each variant carries the last relevant `x` position
//! and the function values that drove the failure.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RootError {
    /// Iteration budget was exhausted with the residual still above the
    /// tolerance. The composite solver treats this from its Newton-Raphson
    /// stage as the signal to fall back to bisection; everywhere else it
    /// is terminal.
    #[error("no convergence after {iterations} iterations: |f({last_x})| = {residual} still exceeds the tolerance")]
    IterationLimit {
        /// Final iterate when the budget ran out.
        last_x: f64,
        /// Residual |f(x)| re-evaluated at the final iterate.
        residual: f64,
        /// Update steps performed, always the full budget.
        iterations: usize,
    },

    /// Bracket endpoints do not straddle a sign change, so bisection has
    /// no root guarantee. Raised before any midpoint is evaluated.
    #[error("invalid bracket [{a}, {b}]: f(a) = {f_a} and f(b) = {f_b} have the same sign")]
    InvalidBracket { a: f64, b: f64, f_a: f64, f_b: f64 },

    /// Derivative went to zero for a method that depends on it to
    /// determine the next step.
    #[error("zero derivative at x = {x}: the Newton-Raphson update is undefined")]
    ZeroDerivative { x: f64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iteration_limit_display_names_the_budget() {
        let err = RootError::IterationLimit {
            last_x: 1.5,
            residual: 0.25,
            iterations: 8,
        };
        assert_eq!(
            err.to_string(),
            "no convergence after 8 iterations: |f(1.5)| = 0.25 still exceeds the tolerance"
        );
    }

    #[test]
    fn test_invalid_bracket_display_names_the_sign_clash() {
        let err = RootError::InvalidBracket {
            a: -1.0,
            b: 1.0,
            f_a: 2.0,
            f_b: 2.0,
        };
        assert_eq!(
            err.to_string(),
            "invalid bracket [-1, 1]: f(a) = 2 and f(b) = 2 have the same sign"
        );
    }

    #[test]
    fn test_zero_derivative_display_names_the_position() {
        let err = RootError::ZeroDerivative { x: 4.5 };
        assert_eq!(
            err.to_string(),
            "zero derivative at x = 4.5: the Newton-Raphson update is undefined"
        );
    }

    #[test]
    fn test_errors_compare_as_values() {
        let err = RootError::ZeroDerivative { x: 4.5 };
        assert_eq!(err.clone(), err);
        assert_ne!(err, RootError::ZeroDerivative { x: 4.6 });
    }
}
