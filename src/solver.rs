//! Root finding algorithms.
//!
//! Two leaf solvers with the same convergence and failure contract,
//! [`newton_raphson`] and [`bisection`], plus the composite [`solve`] which
//! runs Newton-Raphson first and falls back to bisection when the iteration
//! budget runs out.
//!
//! Convergence for every solver means the residual |f(x)| has dropped to
//! the tolerance `eps` or below; see the `convergence` module. Budgets
//! count update steps, and a solver that spends its whole budget without
//! converging reports exactly that count.
//!
//! # Examples
//! Using Newton-Raphson:
//!
//! ```
//! use rootsolve::solver::newton_raphson;
//!
//! // function and its derivative
//! let f = |x: f64| x * x - 2.0;
//! let df = |x: f64| 2.0 * x;
//!
//! let root = newton_raphson(&f, &df, 1.0, 1e-6, 50).expect("root");
//! assert!((root - 2f64.sqrt()).abs() < 1e-6);
//! ```
//!
//! Using bisection:
//!
//! ```
//! use rootsolve::solver::bisection;
//!
//! // function... no derivative needed!
//! let f = |x: f64| x.cos() - x;
//!
//! let root = bisection(&f, 0.0, 1.0, 1e-5, 100).expect("root");
//! assert!((root - 0.7390851332).abs() < 1e-5);
//! ```
//!
//! Letting the composite pick:
//!
//! ```
//! use rootsolve::solver::{solve, DEFAULT_EPS, DEFAULT_MAX_ITS};
//!
//! let f = |x: f64| x.cos() - x;
//! let df = |x: f64| -x.sin() - 1.0;
//!
//! let root = solve(&f, &df, 0.0, 1.0, DEFAULT_EPS, DEFAULT_MAX_ITS, DEFAULT_MAX_ITS)
//!     .expect("root");
//! assert!((root - 0.7390851332).abs() < 1e-5);
//! ```

use tracing::debug;

use crate::convergence::ResidualTolerance;
use crate::error::RootError;

/// Residual tolerance used when the caller has no stronger requirement.
pub const DEFAULT_EPS: f64 = 1.0e-5;

/// Iteration budget used when the caller has no stronger requirement.
pub const DEFAULT_MAX_ITS: usize = 20;

/// Root finding using Newton-Raphson.
///
/// `x0` is the initial guess. For guesses sufficiently close to a simple
/// root the iteration converges quadratically; far from one it may wander
/// or cycle until the budget runs out, which is why [`solve`] backs it with
/// bisection.
///
/// The residual is tested on loop entry, so a guess already within
/// tolerance comes straight back and the derivative is never evaluated.
/// On failure, exactly `max_its` update steps have been taken and the
/// reported residual is re-evaluated at the final iterate.
///
/// # Errors
///
/// * [`RootError::IterationLimit`] when `max_its` updates leave the
///   residual above `eps`.
/// * [`RootError::ZeroDerivative`] when an update step would divide by
///   `df(x) == 0`. This is an arithmetic failure, not a convergence
///   failure, and [`solve`] does not fall back on it.
///
/// # Examples
///
/// ```
/// use rootsolve::solver::newton_raphson;
///
/// let f = |x: f64| (x - 5.0) * (x - 4.0);
/// let df = |x: f64| 2.0 * x - 9.0;
///
/// let root = newton_raphson(&f, &df, 5.8, 1e-9, 100).expect("root");
/// assert!((root - 5.0).abs() < 1e-8);
/// ```
pub fn newton_raphson<F, D>(
    f: &F,
    df: &D,
    x0: f64,
    eps: f64,
    max_its: usize,
) -> Result<f64, RootError>
where
    F: Fn(f64) -> f64,
    D: Fn(f64) -> f64,
{
    let tol = ResidualTolerance::new(eps);

    let mut x = x0;
    let mut k = 1;
    while tol.exceeds(f(x)) && k <= max_its {
        x = nr_iteration(f, df, x)?;
        k += 1;
    }

    // the failure check wants a fresh residual at the final iterate, not
    // a value cached from the loop
    let f_x = f(x);
    if k > max_its && tol.exceeds(f_x) {
        return Err(RootError::IterationLimit {
            last_x: x,
            residual: f_x.abs(),
            iterations: max_its,
        });
    }
    Ok(x)
}

/// Evaluate a single Newton-Raphson update. Returns an error if the
/// derivative evaluates to zero.
fn nr_iteration<F, D>(f: &F, df: &D, x: f64) -> Result<f64, RootError>
where
    F: Fn(f64) -> f64,
    D: Fn(f64) -> f64,
{
    let denom = df(x);
    if denom == 0.0 {
        return Err(RootError::ZeroDerivative { x });
    }
    Ok(x - f(x) / denom)
}

/// Root finding via the bisection method.
///
/// `x0` and `x1` are the bracket endpoints, in either order; the bracket
/// is used exactly as given. The endpoint function values must differ in
/// sign, where an endpoint sitting exactly on a root counts, otherwise no
/// root is guaranteed inside and the call fails before any midpoint is
/// evaluated.
///
/// The bracket halves every iteration regardless of which half is kept,
/// so convergence is certain on a valid bracket. The price is linear
/// convergence speed.
///
/// # Errors
///
/// * [`RootError::InvalidBracket`] when `f(x0)` and `f(x1)` are both
///   strictly positive or both strictly negative.
/// * [`RootError::IterationLimit`] when `max_its` halvings leave the
///   midpoint residual above `eps`.
///
/// # Examples
///
/// ```
/// use rootsolve::solver::bisection;
///
/// let f = |x: f64| x * x - 612.0;
///
/// let root = bisection(&f, 10.0, 30.0, 1e-6, 100).expect("root");
/// assert!((root - 24.7386337537).abs() < 1e-6);
/// ```
pub fn bisection<F>(f: &F, x0: f64, x1: f64, eps: f64, max_its: usize) -> Result<f64, RootError>
where
    F: Fn(f64) -> f64,
{
    let tol = ResidualTolerance::new(eps);

    let mut a = x0;
    let mut b = x1;
    let mut f_a = f(a);
    let f_b = f(b);
    if same_sign(f_a, f_b) {
        return Err(RootError::InvalidBracket { a, b, f_a, f_b });
    }

    let mut c = (a + b) / 2.0;
    let mut f_c = f(c);
    let mut k = 1;
    while tol.exceeds(f_c) && k <= max_its {
        if same_sign(f_a, f_c) {
            a = c;
            f_a = f_c;
        } else {
            b = c;
        }
        k += 1;
        c = (a + b) / 2.0;
        f_c = f(c);
    }

    // same exit shape as Newton-Raphson: a fresh residual at the final
    // midpoint decides
    let f_c = f(c);
    if k > max_its && tol.exceeds(f_c) {
        return Err(RootError::IterationLimit {
            last_x: c,
            residual: f_c.abs(),
            iterations: max_its,
        });
    }
    Ok(c)
}

/// Whether two values share a strict sign. Exact zeroes match nothing, so
/// a root sitting on an endpoint keeps its bracket valid. Comparing signs
/// directly avoids the underflow that can zero out the product f(a)*f(b).
fn same_sign(lhs: f64, rhs: f64) -> bool {
    (lhs > 0.0 && rhs > 0.0) || (lhs < 0.0 && rhs < 0.0)
}

/// Root finding with Newton-Raphson, falling back to bisection.
///
/// Runs [`newton_raphson`] from `x0` with the `max_its_n` budget. A
/// converged result is returned as-is and bisection never runs. If, and
/// only if, Newton-Raphson exhausts its budget, the same equation goes to
/// [`bisection`] on the bracket `(x0, x1)` with the same `eps` and a fresh
/// `max_its_b` budget, and that outcome is the caller's answer. Nothing
/// from the abandoned Newton-Raphson attempt carries over.
///
/// # Errors
///
/// * [`RootError::ZeroDerivative`] from the Newton-Raphson stage
///   propagates immediately and does not trigger the fallback.
/// * [`RootError::InvalidBracket`] when the fallback runs and `(x0, x1)`
///   does not straddle a sign change.
/// * [`RootError::IterationLimit`] when the fallback runs and also
///   exhausts its own budget.
///
/// # Examples
///
/// A budget too small for Newton-Raphson switches strategy instead of
/// failing:
///
/// ```
/// use rootsolve::solver::solve;
///
/// let f = |x: f64| x.cos() - x;
/// let df = |x: f64| -x.sin() - 1.0;
///
/// // three Newton-Raphson updates cannot reach eps = 1e-12 from here
/// let root = solve(&f, &df, 0.0, 1.0, 1e-12, 3, 200).expect("root");
/// assert!((root - 0.739085133215).abs() < 1e-11);
/// ```
pub fn solve<F, D>(
    f: &F,
    df: &D,
    x0: f64,
    x1: f64,
    eps: f64,
    max_its_n: usize,
    max_its_b: usize,
) -> Result<f64, RootError>
where
    F: Fn(f64) -> f64,
    D: Fn(f64) -> f64,
{
    debug!(x0, eps, budget = max_its_n, "attempting Newton-Raphson");
    match newton_raphson(f, df, x0, eps, max_its_n) {
        Err(RootError::IterationLimit {
            last_x,
            residual,
            iterations,
        }) => {
            debug!(
                last_x,
                residual,
                iterations,
                "Newton-Raphson budget exhausted, attempting bisection"
            );
            bisection(f, x0, x1, eps, max_its_b)
        }
        other => other,
    }
}
