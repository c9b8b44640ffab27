//! Text forms of a fraction: plain, LaTeX, and fixed-precision decimal.

use std::fmt;
use std::str::FromStr;

use crate::{Fraction, FractionError};

impl Fraction {
    /// Renders as LaTeX: `n` for integers, `\frac{n}{d}` otherwise.
    #[must_use]
    pub fn to_latex(self) -> String {
        if self.is_integer() {
            self.numerator().to_string()
        } else {
            format!("\\frac{{{}}}{{{}}}", self.numerator(), self.denominator())
        }
    }

    /// Renders as a decimal with exactly `precision` digits after the point.
    ///
    /// The integer part is the quotient truncated toward zero and is the
    /// only part that carries a sign, so `-3/2` renders as `-1.50` (with
    /// precision 2) and `-1/2` as `0.50`. Digits are truncated, never
    /// rounded. A precision of zero yields the integer part and a bare
    /// trailing `.`.
    #[must_use]
    pub fn to_decimal_string(self, precision: usize) -> String {
        let num = self.numerator();
        let den = i128::from(self.denominator());

        let mut out = String::with_capacity(precision.saturating_add(21));
        // den >= 1, so neither `/` nor `%` can overflow.
        out.push_str(&(num / self.denominator()).to_string());
        out.push('.');

        // remainder < den <= i64::MAX, so remainder * 10 fits in i128.
        let mut remainder = i128::from((num % self.denominator()).unsigned_abs());
        for _ in 0..precision {
            if remainder == 0 {
                out.push('0');
                continue;
            }
            remainder *= 10;
            // remainder < den before the multiply, so the digit is 0..=9.
            let digit = u32::try_from(remainder / den).ok().and_then(|d| char::from_digit(d, 10));
            out.extend(digit);
            remainder %= den;
        }
        out
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_integer() {
            fmt::Display::fmt(&self.numerator(), f)
        } else {
            f.pad(&format!("{}/{}", self.numerator(), self.denominator()))
        }
    }
}

impl fmt::Debug for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fraction({}/{})", self.numerator(), self.denominator())
    }
}

impl FromStr for Fraction {
    type Err = FractionError;

    /// Parses `n` or `n/d`, normalizing the result.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parse = |part: &str| {
            part.trim()
                .parse::<i64>()
                .map_err(|e| FractionError::Parse(format!("{s:?}: {e}")))
        };

        match s.split_once('/') {
            Some((num, den)) => Self::new(parse(num)?, parse(den)?),
            None => Ok(Self::from_integer(parse(s)?)),
        }
    }
}
