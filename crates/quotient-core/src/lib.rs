//! # quotient-core
//!
//! Exact rational arithmetic on fixed-width integers.
//!
//! This crate provides:
//! - [`Fraction`], an immutable `i64 / i64` rational kept in canonical form
//! - Overflow-checked `gcd`, `lcm` and primitive helpers ([`checked`])
//! - Plain, LaTeX and fixed-precision decimal rendering
//!
//! ## Failure model
//!
//! Nothing wraps or saturates. Every fallible operation returns
//! [`FractionError::DivisionByZero`] or [`FractionError::ArithmeticOverflow`].
//! The `std::ops` operator impls panic with the same message instead, the
//! way primitive integer operators do.
//!
//! ```
//! use quotient_core::Fraction;
//!
//! let a = Fraction::new(1, 2)?;
//! let b = Fraction::new(1, 3)?;
//! assert_eq!(a.checked_add(b)?.to_string(), "5/6");
//! assert_eq!(Fraction::new(1, 3)?.to_decimal_string(4), "0.3333");
//! # Ok::<(), quotient_core::FractionError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod checked;
pub mod error;
pub mod fraction;
mod render;

#[cfg(test)]
mod proptests;

pub use error::FractionError;
pub use fraction::Fraction;
