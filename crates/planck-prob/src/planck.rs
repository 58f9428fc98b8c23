//! Planck (discrete exponential) distribution utilities.
//!
//! PMF: `P(X = x) = (1 - e^{-lambda}) * e^{-lambda*x}` for `x in {0, 1, 2, ...}`,
//! with shape parameter `lambda > 0`.
//!
//! There is no error channel. The result encodes the domain outcome:
//! - NaN: unusable parameterization (`lambda` NaN or <= 0) or NaN input.
//! - `-inf`: zero probability (`x` outside the non-negative integer support).

use crate::math::{is_nonnegative_integer, log1mexp};

/// Shape parameter check: finite positive values and `+inf` are usable.
///
/// NaN fails the comparison, so no separate NaN test is needed.
#[inline]
fn is_valid_shape(lambda: f64) -> bool {
    lambda > 0.0
}

/// x-branch of the evaluation, with `lambda` already known to be usable.
#[inline]
fn logpmf_unchecked(x: f64, lambda: f64) -> f64 {
    if x.is_nan() {
        return f64::NAN;
    }
    if is_nonnegative_integer(x) {
        return log1mexp(lambda) - lambda * x;
    }
    f64::NEG_INFINITY
}

/// Log-PMF of a Planck distribution at `x` with shape `lambda`.
///
/// `log P(x) = ln(1 - e^{-lambda}) - lambda*x` on the support; `-inf` for any
/// other real `x` (negative, fractional, or `+inf`); NaN when `lambda` is NaN
/// or <= 0, or when `x` is NaN.
///
/// ```
/// let lp = planck_prob::planck::logpmf(3.0, 0.5);
/// assert!((lp + 2.4328).abs() < 1e-4);
/// ```
pub fn logpmf(x: f64, lambda: f64) -> f64 {
    if !is_valid_shape(lambda) {
        return f64::NAN;
    }
    logpmf_unchecked(x, lambda)
}

/// Negative log-likelihood of a Planck distribution at `x`.
///
/// Zero-probability points map to `+inf`; NaN stays NaN.
pub fn nll(x: f64, lambda: f64) -> f64 {
    -logpmf(x, lambda)
}

/// Planck log-PMF evaluator with the shape parameter bound at construction.
///
/// Validation of `lambda` happens exactly once, in [`LogPmf::new`]; repeated
/// evaluation against a fixed shape skips the per-call parameter check that
/// [`logpmf`] performs. An unusable `lambda` produces a degenerate evaluator
/// that returns NaN for every `x`, mirroring the direct evaluator's answer.
///
/// ```
/// let lp = planck_prob::planck::LogPmf::new(0.5);
/// assert!((lp.evaluate(1.0) + 1.4328).abs() < 1e-4);
/// assert!(planck_prob::planck::LogPmf::new(-1.5).evaluate(2.0).is_nan());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct LogPmf {
    /// `None` marks an unusable shape; evaluation then always returns NaN.
    lambda: Option<f64>,
}

impl LogPmf {
    /// Binds `lambda`, resolving the valid/degenerate state once.
    pub fn new(lambda: f64) -> Self {
        Self {
            lambda: is_valid_shape(lambda).then_some(lambda),
        }
    }

    /// Evaluates the log-PMF at `x`.
    ///
    /// Agrees bit-for-bit with [`logpmf`] at the bound shape for every `x`.
    pub fn evaluate(&self, x: f64) -> f64 {
        match self.lambda {
            Some(lambda) => logpmf_unchecked(x, lambda),
            None => f64::NAN,
        }
    }
}
