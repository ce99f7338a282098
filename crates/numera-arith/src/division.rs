//! Checked division helpers.

use crate::ArithError;

/// Euclidean quotient and remainder of `a / b`; the remainder is always
/// non-negative.
///
/// # Errors
///
/// [`ArithError::DivisionByZero`] when `b` is zero.
pub fn div_rem(a: i64, b: i64) -> Result<(i64, i64), ArithError> {
    if b == 0 {
        return Err(ArithError::DivisionByZero);
    }
    Ok((a.div_euclid(b), a.rem_euclid(b)))
}

/// Evaluates (x² + 2x + 1)/(x + 1).
///
/// The quotient collapses to x + 1 everywhere except at the removable
/// singularity, which is still reported as an error because the
/// denominator vanishes there.
///
/// # Errors
///
/// [`ArithError::DivisionByZero`] at x = −1.
pub fn binomial_square_quotient(x: f64) -> Result<f64, ArithError> {
    if x == -1.0 {
        return Err(ArithError::DivisionByZero);
    }
    Ok((x * x + 2.0 * x + 1.0) / (x + 1.0))
}
