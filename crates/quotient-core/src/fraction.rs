//! The `Fraction` value type.
//!
//! A `Fraction` is an exact rational number stored as a pair of `i64`s in
//! canonical form: the denominator is positive, numerator and denominator
//! are coprime, and zero is `0/1`. Every constructor normalizes, and every
//! operation returns a new value.

use num_traits::{CheckedAdd, CheckedDiv, CheckedMul, CheckedSub, Inv, One, Zero};
use std::cmp::Ordering;
use std::num::TryFromIntError;
use std::ops::{Add, Div, Mul, Neg, Sub};
use tracing::debug;

use crate::checked::{self, gcd_u64};
use crate::FractionError;

/// An exact rational number with `i64` numerator and denominator.
///
/// Structural equality is value equality because the representation is
/// canonical.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Fraction {
    numerator: i64,
    denominator: i64,
}

impl Fraction {
    /// The fraction `0/1`.
    pub const ZERO: Self = Self {
        numerator: 0,
        denominator: 1,
    };

    /// The fraction `1/1`.
    pub const ONE: Self = Self {
        numerator: 1,
        denominator: 1,
    };

    /// Creates a fraction in lowest terms with a positive denominator.
    ///
    /// # Errors
    ///
    /// Returns `DivisionByZero` if `denominator` is zero, and
    /// `ArithmeticOverflow` if moving the sign into the numerator leaves the
    /// `i64` range (e.g. `i64::MIN / -1`).
    pub fn new(numerator: i64, denominator: i64) -> Result<Self, FractionError> {
        if denominator == 0 {
            debug!(numerator, "rejected zero denominator");
            return Err(FractionError::DivisionByZero);
        }

        // g >= 1 here, and may be 2^63, so normalize in i128.
        let g = i128::from(gcd_u64(numerator.unsigned_abs(), denominator.unsigned_abs()));
        let mut n = i128::from(numerator) / g;
        let mut d = i128::from(denominator) / g;
        if d < 0 {
            n = -n;
            d = -d;
        }

        let overflow = |_: TryFromIntError| FractionError::overflow("normalization");
        Ok(Self {
            numerator: i64::try_from(n).map_err(overflow)?,
            denominator: i64::try_from(d).map_err(overflow)?,
        })
    }

    /// Creates the fraction `n/1`.
    #[must_use]
    pub const fn from_integer(n: i64) -> Self {
        Self {
            numerator: n,
            denominator: 1,
        }
    }

    /// Returns the numerator, which carries the sign.
    #[must_use]
    pub const fn numerator(self) -> i64 {
        self.numerator
    }

    /// Returns the denominator, which is always positive.
    #[must_use]
    pub const fn denominator(self) -> i64 {
        self.denominator
    }

    /// Returns true if this fraction is zero.
    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.numerator == 0
    }

    /// Returns true if the denominator is 1.
    #[must_use]
    pub const fn is_integer(self) -> bool {
        self.denominator == 1
    }

    /// Returns true if negative.
    #[must_use]
    pub const fn is_negative(self) -> bool {
        self.numerator < 0
    }

    /// Returns the sign: -1, 0, or 1.
    #[must_use]
    pub const fn signum(self) -> i8 {
        if self.numerator == 0 {
            0
        } else if self.numerator > 0 {
            1
        } else {
            -1
        }
    }

    /// Converts to an integer if the denominator is 1.
    #[must_use]
    pub const fn to_integer(self) -> Option<i64> {
        if self.is_integer() {
            Some(self.numerator)
        } else {
            None
        }
    }

    /// Computes `self + rhs` over the least common denominator.
    ///
    /// # Errors
    ///
    /// Returns `ArithmeticOverflow` if any intermediate value leaves the
    /// `i64` range.
    pub fn checked_add(self, rhs: impl Into<Self>) -> Result<Self, FractionError> {
        let rhs = rhs.into();
        let (lhs_num, rhs_num, den) = self.align(rhs)?;
        Self::new(checked::checked_add(lhs_num, rhs_num)?, den)
    }

    /// Computes `self - rhs` over the least common denominator.
    ///
    /// # Errors
    ///
    /// Returns `ArithmeticOverflow` if any intermediate value leaves the
    /// `i64` range.
    pub fn checked_sub(self, rhs: impl Into<Self>) -> Result<Self, FractionError> {
        let rhs = rhs.into();
        let (lhs_num, rhs_num, den) = self.align(rhs)?;
        Self::new(checked::checked_sub(lhs_num, rhs_num)?, den)
    }

    /// Computes `self * rhs`.
    ///
    /// Each numerator is first reduced against the other denominator, so
    /// the products are already in lowest terms and overflow only when the
    /// result itself is unrepresentable.
    ///
    /// # Errors
    ///
    /// Returns `ArithmeticOverflow` if the product leaves the `i64` range.
    pub fn checked_mul(self, rhs: impl Into<Self>) -> Result<Self, FractionError> {
        let rhs = rhs.into();
        let g1 = checked::gcd(self.numerator, rhs.denominator)?;
        let g2 = checked::gcd(rhs.numerator, self.denominator)?;

        let n = checked::checked_mul(
            checked::exact_div(self.numerator, g1)?,
            checked::exact_div(rhs.numerator, g2)?,
        )?;
        let d = checked::checked_mul(
            checked::exact_div(self.denominator, g2)?,
            checked::exact_div(rhs.denominator, g1)?,
        )?;
        Self::new(n, d)
    }

    /// Computes `self / rhs` as `self * rhs.recip()`.
    ///
    /// # Errors
    ///
    /// Returns `DivisionByZero` if `rhs` is zero and `ArithmeticOverflow`
    /// if the quotient leaves the `i64` range.
    pub fn checked_div(self, rhs: impl Into<Self>) -> Result<Self, FractionError> {
        self.checked_mul(rhs.into().recip()?)
    }

    /// Returns `-self`.
    ///
    /// # Errors
    ///
    /// Returns `ArithmeticOverflow` when the numerator is `i64::MIN`.
    pub fn checked_neg(self) -> Result<Self, FractionError> {
        Ok(Self {
            numerator: checked::checked_neg(self.numerator)?,
            ..self
        })
    }

    /// Returns the reciprocal `1/self`.
    ///
    /// # Errors
    ///
    /// Returns `DivisionByZero` if `self` is zero, and `ArithmeticOverflow`
    /// for `i64::MIN` numerators whose sign cannot be moved.
    pub fn recip(self) -> Result<Self, FractionError> {
        if self.numerator == 0 {
            debug!("reciprocal of zero");
            return Err(FractionError::DivisionByZero);
        }
        Self::new(self.denominator, self.numerator)
    }

    /// Returns `|self|`.
    ///
    /// # Errors
    ///
    /// Returns `ArithmeticOverflow` when the numerator is `i64::MIN`.
    pub fn abs(self) -> Result<Self, FractionError> {
        Ok(Self {
            numerator: checked::checked_abs(self.numerator)?,
            ..self
        })
    }

    /// Raises `self` to an integer power by square-and-multiply.
    ///
    /// `x^0` is `1` for every `x`, including zero. Negative exponents
    /// invert first.
    ///
    /// # Errors
    ///
    /// Returns `DivisionByZero` for a negative power of zero, and
    /// `ArithmeticOverflow` as soon as any multiplication overflows.
    pub fn pow(self, exponent: i64) -> Result<Self, FractionError> {
        if exponent == 0 {
            return Ok(Self::ONE);
        }

        let base = if exponent < 0 { self.recip()? } else { self };
        let mut exp = exponent.unsigned_abs();

        let mut base_num = base.numerator;
        let mut base_den = base.denominator;
        let mut acc_num = 1i64;
        let mut acc_den = 1i64;

        while exp > 0 {
            if exp & 1 == 1 {
                acc_num = checked::checked_mul(acc_num, base_num)?;
                acc_den = checked::checked_mul(acc_den, base_den)?;
            }
            exp >>= 1;
            // The final squaring would be discarded; skipping it avoids
            // reporting an overflow the result never needed.
            if exp > 0 {
                base_num = checked::checked_mul(base_num, base_num)?;
                base_den = checked::checked_mul(base_den, base_den)?;
            }
        }

        Self::new(acc_num, acc_den)
    }

    /// Returns `self < other`.
    ///
    /// # Errors
    ///
    /// Returns `ArithmeticOverflow` if a cross product overflows.
    pub fn less_than(self, other: impl Into<Self>) -> Result<bool, FractionError> {
        let (c1, c2) = self.cross(other.into())?;
        Ok(c1 < c2)
    }

    /// Returns `self <= other`.
    ///
    /// # Errors
    ///
    /// Returns `ArithmeticOverflow` if a cross product overflows.
    pub fn less_or_equal(self, other: impl Into<Self>) -> Result<bool, FractionError> {
        let (c1, c2) = self.cross(other.into())?;
        Ok(c1 <= c2)
    }

    /// Returns `self > other`.
    ///
    /// # Errors
    ///
    /// Returns `ArithmeticOverflow` if a cross product overflows.
    pub fn greater_than(self, other: impl Into<Self>) -> Result<bool, FractionError> {
        let (c1, c2) = self.cross(other.into())?;
        Ok(c1 > c2)
    }

    /// Returns `self >= other`.
    ///
    /// # Errors
    ///
    /// Returns `ArithmeticOverflow` if a cross product overflows.
    pub fn greater_or_equal(self, other: impl Into<Self>) -> Result<bool, FractionError> {
        let (c1, c2) = self.cross(other.into())?;
        Ok(c1 >= c2)
    }

    /// Returns `self == other` by cross-multiplication.
    ///
    /// # Errors
    ///
    /// Returns `ArithmeticOverflow` if a cross product overflows.
    pub fn equals(self, other: impl Into<Self>) -> Result<bool, FractionError> {
        let (c1, c2) = self.cross(other.into())?;
        Ok(c1 == c2)
    }

    /// Rewrites both numerators over `lcm(self.den, other.den)`.
    fn align(self, other: Self) -> Result<(i64, i64, i64), FractionError> {
        let den = checked::lcm(self.denominator, other.denominator)?;
        let lhs = checked::checked_mul(
            self.numerator,
            checked::exact_div(den, self.denominator)?,
        )?;
        let rhs = checked::checked_mul(
            other.numerator,
            checked::exact_div(den, other.denominator)?,
        )?;
        Ok((lhs, rhs, den))
    }

    fn cross(self, other: Self) -> Result<(i64, i64), FractionError> {
        Ok((
            checked::checked_mul(self.numerator, other.denominator)?,
            checked::checked_mul(other.numerator, self.denominator)?,
        ))
    }
}

impl Default for Fraction {
    fn default() -> Self {
        Self::ZERO
    }
}

impl From<i64> for Fraction {
    fn from(n: i64) -> Self {
        Self::from_integer(n)
    }
}

impl From<i32> for Fraction {
    fn from(n: i32) -> Self {
        Self::from_integer(i64::from(n))
    }
}

impl TryFrom<(i64, i64)> for Fraction {
    type Error = FractionError;

    fn try_from((numerator, denominator): (i64, i64)) -> Result<Self, Self::Error> {
        Self::new(numerator, denominator)
    }
}

// Total order; the i128 cross products cannot overflow.
impl Ord for Fraction {
    fn cmp(&self, other: &Self) -> Ordering {
        let lhs = i128::from(self.numerator) * i128::from(other.denominator);
        let rhs = i128::from(other.numerator) * i128::from(self.denominator);
        lhs.cmp(&rhs)
    }
}

impl PartialOrd for Fraction {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// Operator forms panic on failure, like primitive integer operators.
impl Add for Fraction {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        self.checked_add(rhs)
            .unwrap_or_else(|e| panic!("fraction addition failed: {e}"))
    }
}

impl Add for &Fraction {
    type Output = Fraction;

    fn add(self, rhs: Self) -> Self::Output {
        *self + *rhs
    }
}

impl Sub for Fraction {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        self.checked_sub(rhs)
            .unwrap_or_else(|e| panic!("fraction subtraction failed: {e}"))
    }
}

impl Sub for &Fraction {
    type Output = Fraction;

    fn sub(self, rhs: Self) -> Self::Output {
        *self - *rhs
    }
}

impl Mul for Fraction {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        self.checked_mul(rhs)
            .unwrap_or_else(|e| panic!("fraction multiplication failed: {e}"))
    }
}

impl Mul for &Fraction {
    type Output = Fraction;

    fn mul(self, rhs: Self) -> Self::Output {
        *self * *rhs
    }
}

impl Div for Fraction {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        self.checked_div(rhs)
            .unwrap_or_else(|e| panic!("fraction division failed: {e}"))
    }
}

impl Div for &Fraction {
    type Output = Fraction;

    fn div(self, rhs: Self) -> Self::Output {
        *self / *rhs
    }
}

impl Neg for Fraction {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self.checked_neg()
            .unwrap_or_else(|e| panic!("fraction negation failed: {e}"))
    }
}

impl Neg for &Fraction {
    type Output = Fraction;

    fn neg(self) -> Self::Output {
        -*self
    }
}

impl Zero for Fraction {
    fn zero() -> Self {
        Self::ZERO
    }

    fn is_zero(&self) -> bool {
        self.numerator == 0
    }
}

impl One for Fraction {
    fn one() -> Self {
        Self::ONE
    }

    fn is_one(&self) -> bool {
        *self == Self::ONE
    }
}

impl CheckedAdd for Fraction {
    fn checked_add(&self, v: &Self) -> Option<Self> {
        Fraction::checked_add(*self, *v).ok()
    }
}

impl CheckedSub for Fraction {
    fn checked_sub(&self, v: &Self) -> Option<Self> {
        Fraction::checked_sub(*self, *v).ok()
    }
}

impl CheckedMul for Fraction {
    fn checked_mul(&self, v: &Self) -> Option<Self> {
        Fraction::checked_mul(*self, *v).ok()
    }
}

impl CheckedDiv for Fraction {
    fn checked_div(&self, v: &Self) -> Option<Self> {
        Fraction::checked_div(*self, *v).ok()
    }
}

impl Inv for Fraction {
    type Output = Result<Self, FractionError>;

    fn inv(self) -> Self::Output {
        self.recip()
    }
}
