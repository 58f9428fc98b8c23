//! Planck (discrete exponential) distribution primitives.
//!
//! This crate hosts the scalar log-PMF of the Planck distribution:
//! - a direct evaluator (`planck::logpmf`)
//! - a bound evaluator that fixes the shape parameter once (`planck::LogPmf`)
//! - small numeric helpers (stable log/exp primitives, support predicate)
//!
//! Domain violations are encoded in the result itself rather than through an
//! error channel: an unusable shape parameter yields NaN, a point outside the
//! integer support yields `-inf`. Every function is pure and total over `f64`.

pub mod math;
pub mod planck;
