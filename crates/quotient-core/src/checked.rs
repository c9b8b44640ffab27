//! Overflow-checked `i64` helpers.
//!
//! Every step that could leave the `i64` range goes through one of these
//! functions, which report [`FractionError::ArithmeticOverflow`] instead of
//! wrapping.

use tracing::trace;

use crate::FractionError;

fn overflowed(operation: &'static str, lhs: i64, rhs: i64) -> FractionError {
    trace!(operation, lhs, rhs, "i64 overflow");
    FractionError::overflow(operation)
}

/// Greatest common divisor of two magnitudes (Euclidean algorithm).
///
/// `gcd_u64(a, 0) == a` and `gcd_u64(0, 0) == 0`.
#[must_use]
pub fn gcd_u64(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}

/// Greatest common divisor of `|a|` and `|b|`.
///
/// # Errors
///
/// Returns `ArithmeticOverflow` when the result is `2^63`, which only
/// happens for `gcd(i64::MIN, 0)`, `gcd(0, i64::MIN)` and
/// `gcd(i64::MIN, i64::MIN)`.
pub fn gcd(a: i64, b: i64) -> Result<i64, FractionError> {
    let g = gcd_u64(a.unsigned_abs(), b.unsigned_abs());
    i64::try_from(g).map_err(|_| overflowed("gcd", a, b))
}

/// Least common multiple of `|a|` and `|b|`, computed as `(a / gcd) * b`.
///
/// `lcm(x, 0) == 0`.
///
/// # Errors
///
/// Returns `ArithmeticOverflow` if the result does not fit in an `i64`.
pub fn lcm(a: i64, b: i64) -> Result<i64, FractionError> {
    if a == 0 || b == 0 {
        return Ok(0);
    }
    let g = gcd_u64(a.unsigned_abs(), b.unsigned_abs());
    // g divides |a| exactly, so the quotient is exact.
    let reduced = a.unsigned_abs() / g;
    reduced
        .checked_mul(b.unsigned_abs())
        .and_then(|m| i64::try_from(m).ok())
        .ok_or_else(|| overflowed("lcm", a, b))
}

/// Checked `a + b`.
///
/// # Errors
///
/// Returns `ArithmeticOverflow` if the sum does not fit in an `i64`.
pub fn checked_add(a: i64, b: i64) -> Result<i64, FractionError> {
    a.checked_add(b).ok_or_else(|| overflowed("addition", a, b))
}

/// Checked `a - b`.
///
/// # Errors
///
/// Returns `ArithmeticOverflow` if the difference does not fit in an `i64`.
pub fn checked_sub(a: i64, b: i64) -> Result<i64, FractionError> {
    a.checked_sub(b).ok_or_else(|| overflowed("subtraction", a, b))
}

/// Checked `a * b`.
///
/// # Errors
///
/// Returns `ArithmeticOverflow` if the product does not fit in an `i64`.
pub fn checked_mul(a: i64, b: i64) -> Result<i64, FractionError> {
    a.checked_mul(b)
        .ok_or_else(|| overflowed("multiplication", a, b))
}

/// Division that is known to be exact, e.g. by a common divisor.
///
/// # Errors
///
/// Returns `DivisionByZero` for `b == 0` and `ArithmeticOverflow` for
/// `i64::MIN / -1`.
pub fn exact_div(a: i64, b: i64) -> Result<i64, FractionError> {
    if b == 0 {
        return Err(FractionError::DivisionByZero);
    }
    debug_assert_eq!(a.wrapping_rem(b), 0, "exact_div called with a non-divisor");
    a.checked_div(b).ok_or_else(|| overflowed("division", a, b))
}

/// Checked `-a`.
///
/// # Errors
///
/// Returns `ArithmeticOverflow` for `i64::MIN`.
pub fn checked_neg(a: i64) -> Result<i64, FractionError> {
    a.checked_neg().ok_or_else(|| overflowed("negation", a, 0))
}

/// Checked `|a|`.
///
/// # Errors
///
/// Returns `ArithmeticOverflow` for `i64::MIN`.
pub fn checked_abs(a: i64) -> Result<i64, FractionError> {
    a.checked_abs().ok_or_else(|| overflowed("absolute value", a, 0))
}
