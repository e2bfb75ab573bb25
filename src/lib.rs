//! Scalar root finding with a Newton-to-bisection fallback.
//!
//! The crate solves one nonlinear equation f(x) = 0 three ways, all
//! sharing the same convergence contract (success when the residual |f(x)|
//! drops to the tolerance or below) and the same error taxonomy:
//!
//! * [`solver::newton_raphson`] - derivative iteration, quadratic near a
//!   simple root but with no convergence guarantee from a poor guess.
//! * [`solver::bisection`] - interval halving on a sign-change bracket,
//!   certain but linear.
//! * [`solver::solve`] - Newton-Raphson first; if its budget runs out, the
//!   same equation goes to bisection. Only that convergence failure is
//!   intercepted. Arithmetic failures such as a zero derivative propagate
//!   to the caller untouched.
//!
//! # Examples
//!
//! ```
//! use rootsolve::solver::solve;
//!
//! // f(x) = x^2 - 2, root at sqrt(2)
//! let f = |x: f64| x * x - 2.0;
//! let df = |x: f64| 2.0 * x;
//!
//! let root = solve(&f, &df, 1.0, 2.0, 1e-6, 50, 100).expect("root");
//! assert!((root - 1.41421356).abs() < 1e-6);
//! ```
//!
//! Failures are plain values, so callers can match on exactly what went
//! wrong:
//!
//! ```
//! use rootsolve::error::RootError;
//! use rootsolve::solver::bisection;
//!
//! // no real root: every bracket has the same sign at both ends
//! let f = |x: f64| x * x + 1.0;
//!
//! match bisection(&f, -1.0, 1.0, 1e-6, 50) {
//!     Err(RootError::InvalidBracket { .. }) => {}
//!     other => panic!("expected an invalid bracket, got {:?}", other),
//! }
//! ```

pub mod convergence;
pub mod error;
pub mod solver;
