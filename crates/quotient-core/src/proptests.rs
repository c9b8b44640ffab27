//! Property-based tests for fraction arithmetic.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::checked::gcd;
    use crate::{Fraction, FractionError};

    // Strategy for generating small integers
    fn small_int() -> impl Strategy<Value = i64> {
        -1000i64..1000i64
    }

    // Strategy for generating non-zero integers
    fn non_zero_int() -> impl Strategy<Value = i64> {
        prop_oneof![(-1000i64..=-1i64), (1i64..=1000i64)]
    }

    fn small_fraction() -> impl Strategy<Value = Fraction> {
        (small_int(), non_zero_int()).prop_map(|(n, d)| Fraction::new(n, d).unwrap())
    }

    proptest! {
        // Normalization

        #[test]
        fn construct_is_canonical(n in any::<i64>(), d in any::<i64>().prop_filter("non-zero", |d| *d != 0)) {
            match Fraction::new(n, d) {
                Ok(f) => {
                    prop_assert!(f.denominator() > 0);
                    prop_assert_eq!(gcd(f.numerator(), f.denominator()), Ok(1));
                    // Same value: f.num * d == n * f.den
                    prop_assert_eq!(
                        i128::from(f.numerator()) * i128::from(d),
                        i128::from(n) * i128::from(f.denominator())
                    );
                }
                // Only a sign flip of 2^63 can fail.
                Err(e) => prop_assert!(e.is_overflow()),
            }
        }

        #[test]
        fn construct_is_idempotent(f in small_fraction()) {
            prop_assert_eq!(Fraction::new(f.numerator(), f.denominator()), Ok(f));
        }

        #[test]
        fn integer_constructor_matches(n in any::<i64>()) {
            prop_assert_eq!(Ok(Fraction::from_integer(n)), Fraction::new(n, 1));
        }

        #[test]
        fn zero_denominator_rejected(n in any::<i64>()) {
            prop_assert_eq!(Fraction::new(n, 0), Err(FractionError::DivisionByZero));
        }

        // Field axioms

        #[test]
        fn add_commutative(a in small_fraction(), b in small_fraction()) {
            prop_assert_eq!(a.checked_add(b), b.checked_add(a));
        }

        #[test]
        fn mul_commutative(a in small_fraction(), b in small_fraction()) {
            prop_assert_eq!(a.checked_mul(b), b.checked_mul(a));
        }

        #[test]
        fn distributive(a in small_fraction(), b in small_fraction(), c in small_fraction()) {
            prop_assert_eq!(a * (b + c), a * b + a * c);
        }

        #[test]
        fn sub_inverts_add(a in small_fraction(), b in small_fraction()) {
            prop_assert_eq!(a.checked_add(b).and_then(|s| s.checked_sub(b)), Ok(a));
        }

        #[test]
        fn div_inverts_mul(a in small_fraction(), b in small_fraction()) {
            prop_assume!(!b.is_zero());
            prop_assert_eq!(a.checked_mul(b).and_then(|p| p.checked_div(b)), Ok(a));
        }

        #[test]
        fn multiplicative_inverse(num in non_zero_int(), den in non_zero_int()) {
            let a = Fraction::new(num, den).unwrap();
            prop_assert_eq!(a.checked_mul(a.recip().unwrap()), Ok(Fraction::ONE));
        }

        // Exponentiation

        #[test]
        fn pow_matches_repeated_multiplication(a in small_fraction(), e in 0i64..4) {
            let mut expected = Fraction::ONE;
            for _ in 0..e {
                expected = expected * a;
            }
            prop_assert_eq!(a.pow(e), Ok(expected));
        }

        #[test]
        fn negative_pow_is_reciprocal(a in small_fraction(), e in 1i64..4) {
            prop_assume!(!a.is_zero());
            prop_assert_eq!(a.pow(-e), a.pow(e).and_then(Fraction::recip));
        }

        // Ordering

        #[test]
        fn trichotomy(a in small_fraction(), b in small_fraction()) {
            let lt = a.less_than(b).unwrap();
            let eq = a.equals(b).unwrap();
            let gt = a.greater_than(b).unwrap();
            prop_assert_eq!(u8::from(lt) + u8::from(eq) + u8::from(gt), 1);
            prop_assert_eq!(a.less_or_equal(b).unwrap(), lt || eq);
            prop_assert_eq!(a.greater_or_equal(b).unwrap(), gt || eq);
            prop_assert_eq!(eq, a == b);
        }

        #[test]
        fn total_order_agrees_with_predicates(a in small_fraction(), b in small_fraction()) {
            prop_assert_eq!(a < b, a.less_than(b).unwrap());
            prop_assert_eq!(a >= b, a.greater_or_equal(b).unwrap());
        }

        // Rendering

        #[test]
        fn display_round_trip(f in small_fraction()) {
            let text = f.to_string();
            let (n, d) = text.split_once('/').unwrap_or((text.as_str(), "1"));
            let parsed = Fraction::new(n.parse().unwrap(), d.parse().unwrap());
            prop_assert_eq!(parsed, Ok(f));
            prop_assert_eq!(text.parse::<Fraction>(), Ok(f));
        }

        #[test]
        fn decimal_has_requested_digits(f in small_fraction(), precision in 0usize..20) {
            let text = f.to_decimal_string(precision);
            let (_, digits) = text.split_once('.').unwrap();
            prop_assert_eq!(digits.len(), precision);
            prop_assert!(digits.bytes().all(|b| b.is_ascii_digit()));
        }
    }
}
