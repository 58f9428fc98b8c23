//! Small numerically-stable math utilities used by the distribution code.

/// True iff `x` is finite, non-negative, and has zero fractional part.
///
/// `+inf` does not count as an integer here: `fract()` of an infinity is NaN,
/// so the zero-fraction test rejects it along with NaN itself.
#[inline]
pub fn is_nonnegative_integer(x: f64) -> bool {
    x >= 0.0 && x.is_finite() && x.fract() == 0.0
}

/// Stable `ln(1 - e^{-x})` for `x > 0`.
///
/// Computed as `ln(-expm1(-x))`. For small `x`, forming `1 - e^{-x}` directly
/// loses all significant digits to cancellation; `exp_m1` keeps them, so the
/// result tracks `ln(x)` accurately as `x -> 0` and tends to `0` as `x -> inf`.
#[inline]
pub fn log1mexp(x: f64) -> f64 {
    (-(-x).exp_m1()).ln()
}
