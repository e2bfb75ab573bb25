//! Convergence contract shared by every solver in this crate.
//!
//! A solver declares success exactly when the residual |f(x)| at its
//! current iterate no longer exceeds the tolerance. Both the Newton-Raphson
//! and bisection loops apply this one test, which is what lets the
//! composite solver swap one for the other mid-solve.

/// Residual tolerance on |f(x)|.
///
/// A tolerance of zero demands an exact root; a negative tolerance can
/// never be met and exhausts whatever budget the solver was given.
#[derive(Debug, Clone, Copy)]
pub struct ResidualTolerance {
    eps: f64,
}

impl ResidualTolerance {
    pub fn new(eps: f64) -> ResidualTolerance {
        ResidualTolerance { eps }
    }

    /// Whether the residual at `f_x` is still above the tolerance.
    ///
    /// Phrased in the "exceeds" direction so that a NaN function value
    /// compares false and the solvers' loop and failure checks agree on it.
    pub fn exceeds(&self, f_x: f64) -> bool {
        f_x.abs() > self.eps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_residual_above_tolerance() {
        let tol = ResidualTolerance::new(1e-6);
        assert!(tol.exceeds(1e-3));
        assert!(tol.exceeds(-1e-3));
    }

    #[test]
    fn test_residual_at_tolerance_counts_as_converged() {
        // the comparison is strict, so landing exactly on eps succeeds
        let tol = ResidualTolerance::new(1e-6);
        assert!(!tol.exceeds(1e-6));
        assert!(!tol.exceeds(-1e-6));
        assert!(!tol.exceeds(0.5e-6));
    }

    #[test]
    fn test_zero_tolerance_demands_exact_zero() {
        let tol = ResidualTolerance::new(0.0);
        assert!(tol.exceeds(5e-324));
        assert!(!tol.exceeds(0.0));
        assert!(!tol.exceeds(-0.0));
    }

    #[test]
    fn test_nan_residual_never_exceeds() {
        let tol = ResidualTolerance::new(1e-6);
        assert!(!tol.exceeds(f64::NAN));
    }
}
