//! # quotient-cli
//!
//! Front end for the fraction calculator.
//!
//! A request is five text fields, `num1 den1 op num2 den2`. They are parsed
//! into two [`Fraction`]s and one [`Operation`], evaluated by
//! `quotient-core`, and the result is rendered in the requested
//! [`OutputFormat`].

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;

use std::fmt;
use std::io::{self, BufRead, Write};
use std::num::ParseIntError;
use std::str::FromStr;

use quotient_core::{Fraction, FractionError};
use thiserror::Error;
use tracing::{debug, info};

/// Errors reported to the user.
#[derive(Debug, Error)]
pub enum CliError {
    /// A numerator or denominator field is not an `i64`.
    #[error("{field} is not a valid integer: {source}")]
    InvalidInteger {
        /// Which of the four integer fields failed.
        field: &'static str,
        /// The underlying integer parse error.
        #[source]
        source: ParseIntError,
    },

    /// The operator field is not one of `+ - * /`.
    #[error("unknown operator `{0}` (expected one of + - * /)")]
    UnknownOperator(String),

    /// A request did not have exactly five fields.
    #[error("expected 5 fields (num1 den1 op num2 den2), got {0}")]
    FieldCount(usize),

    /// Zero denominator, zero divisor, or overflow in the core.
    #[error("{}", describe(.0))]
    Arithmetic(#[from] FractionError),

    /// Reading requests or writing results failed.
    #[error(transparent)]
    Io(#[from] io::Error),
}

fn describe(err: &FractionError) -> String {
    match err {
        FractionError::DivisionByZero => "cannot divide by zero".to_string(),
        FractionError::ArithmeticOverflow { operation } => {
            format!("result is too large to represent ({operation} overflowed)")
        }
        other => other.to_string(),
    }
}

/// The four calculator operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    /// `+`
    Add,
    /// `-`
    Subtract,
    /// `*`
    Multiply,
    /// `/`
    Divide,
}

impl Operation {
    /// Applies the operation to two fractions.
    ///
    /// # Errors
    ///
    /// Propagates `DivisionByZero` and `ArithmeticOverflow` from the core.
    pub fn apply(self, lhs: Fraction, rhs: Fraction) -> Result<Fraction, FractionError> {
        match self {
            Operation::Add => lhs.checked_add(rhs),
            Operation::Subtract => lhs.checked_sub(rhs),
            Operation::Multiply => lhs.checked_mul(rhs),
            Operation::Divide => lhs.checked_div(rhs),
        }
    }

    /// The operator symbol.
    pub fn symbol(self) -> &'static str {
        match self {
            Operation::Add => "+",
            Operation::Subtract => "-",
            Operation::Multiply => "*",
            Operation::Divide => "/",
        }
    }
}

impl FromStr for Operation {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "+" => Ok(Operation::Add),
            "-" => Ok(Operation::Subtract),
            "*" => Ok(Operation::Multiply),
            "/" => Ok(Operation::Divide),
            other => Err(CliError::UnknownOperator(other.to_string())),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// How a result is printed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// `n/d`, or `n` for integers.
    #[default]
    Plain,
    /// `\frac{n}{d}`, or `n` for integers.
    Latex,
    /// Truncated decimal expansion.
    Decimal,
}

impl OutputFormat {
    /// Renders a fraction in this format.
    pub fn render(self, value: Fraction, precision: usize) -> String {
        match self {
            OutputFormat::Plain => value.to_string(),
            OutputFormat::Latex => value.to_latex(),
            OutputFormat::Decimal => value.to_decimal_string(precision),
        }
    }
}

/// One parsed calculator request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Calculation {
    /// Left operand as `(numerator, denominator)`, not yet normalized.
    pub lhs: (i64, i64),
    /// The operation to apply.
    pub op: Operation,
    /// Right operand as `(numerator, denominator)`, not yet normalized.
    pub rhs: (i64, i64),
}

impl Calculation {
    /// Parses `num1 den1 op num2 den2`.
    ///
    /// # Errors
    ///
    /// Returns `FieldCount`, `InvalidInteger` or `UnknownOperator`.
    pub fn parse(fields: &[&str]) -> Result<Self, CliError> {
        let [num1, den1, op, num2, den2] = fields else {
            return Err(CliError::FieldCount(fields.len()));
        };

        Ok(Self {
            lhs: (
                parse_integer("numerator 1", num1)?,
                parse_integer("denominator 1", den1)?,
            ),
            op: op.parse()?,
            rhs: (
                parse_integer("numerator 2", num2)?,
                parse_integer("denominator 2", den2)?,
            ),
        })
    }

    /// Builds both fractions and applies the operation.
    ///
    /// # Errors
    ///
    /// Returns `Arithmetic` for a zero denominator, a zero divisor, or an
    /// overflowing result.
    pub fn evaluate(&self) -> Result<Fraction, CliError> {
        let lhs = Fraction::new(self.lhs.0, self.lhs.1)?;
        let rhs = Fraction::new(self.rhs.0, self.rhs.1)?;
        debug!(%lhs, op = %self.op, %rhs, "evaluating");

        let result = self.op.apply(lhs, rhs)?;
        info!(%result, "evaluated");
        Ok(result)
    }
}

fn parse_integer(field: &'static str, text: &str) -> Result<i64, CliError> {
    text.trim()
        .parse()
        .map_err(|source| CliError::InvalidInteger { field, source })
}

/// Parses, evaluates and renders one request.
///
/// # Errors
///
/// Returns any parse or arithmetic error.
pub fn calculate(
    fields: &[&str],
    format: OutputFormat,
    precision: usize,
) -> Result<String, CliError> {
    let result = Calculation::parse(fields)?.evaluate()?;
    Ok(format.render(result, precision))
}

/// Reads one request per line until EOF or `quit`, writing one result or
/// `error: ...` line per request. Blank lines are skipped. Bytes that are
/// not UTF-8 are replaced, so such a line fails as a bad request instead of
/// ending the session.
///
/// # Errors
///
/// Returns `Io` if reading or writing fails; request errors are written to
/// `output` and do not stop the session.
pub fn run_interactive<R: BufRead, W: Write>(
    mut input: R,
    mut output: W,
    format: OutputFormat,
    precision: usize,
) -> Result<(), CliError> {
    let mut buf = Vec::new();
    loop {
        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        let line = String::from_utf8_lossy(&buf);
        let fields: Vec<&str> = line.split_whitespace().collect();
        match fields.as_slice() {
            [] => continue,
            ["quit" | "exit"] => break,
            _ => {}
        }

        match calculate(&fields, format, precision) {
            Ok(text) => writeln!(output, "{text}")?,
            Err(e) => {
                debug!(error = %e, "request failed");
                writeln!(output, "error: {e}")?;
            }
        }
        output.flush()?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_symbols() {
        for (text, op) in [
            ("+", Operation::Add),
            ("-", Operation::Subtract),
            ("*", Operation::Multiply),
            ("/", Operation::Divide),
        ] {
            assert_eq!(text.parse::<Operation>().unwrap(), op);
            assert_eq!(op.to_string(), text);
        }
        assert!(matches!("%".parse::<Operation>(), Err(CliError::UnknownOperator(s)) if s == "%"));
    }

    #[test]
    fn test_calculate_each_operation() {
        let run = |fields: [&str; 5]| calculate(&fields, OutputFormat::Plain, 0).unwrap();
        assert_eq!(run(["1", "2", "+", "1", "3"]), "5/6");
        assert_eq!(run(["1", "2", "-", "1", "3"]), "1/6");
        assert_eq!(run(["2", "3", "*", "3", "4"]), "1/2");
        assert_eq!(run(["1", "2", "/", "1", "3"]), "3/2");
        assert_eq!(run(["-4", "-8", "+", "1", "2"]), "1");
    }

    #[test]
    fn test_output_formats() {
        let fields = ["1", "3", "+", "0", "1"];
        assert_eq!(calculate(&fields, OutputFormat::Latex, 0).unwrap(), "\\frac{1}{3}");
        assert_eq!(calculate(&fields, OutputFormat::Decimal, 4).unwrap(), "0.3333");
    }

    #[test]
    fn test_parse_errors() {
        let err = Calculation::parse(&["1", "x", "+", "1", "2"]).unwrap_err();
        assert!(matches!(err, CliError::InvalidInteger { field: "denominator 1", .. }));

        let err = Calculation::parse(&["1", "2", "+"]).unwrap_err();
        assert!(matches!(err, CliError::FieldCount(3)));
    }

    #[test]
    fn test_arithmetic_errors() {
        let err = calculate(&["1", "0", "+", "1", "2"], OutputFormat::Plain, 0).unwrap_err();
        assert!(matches!(err, CliError::Arithmetic(FractionError::DivisionByZero)));
        assert_eq!(err.to_string(), "cannot divide by zero");

        let err = calculate(&["1", "2", "/", "0", "5"], OutputFormat::Plain, 0).unwrap_err();
        assert!(matches!(err, CliError::Arithmetic(FractionError::DivisionByZero)));

        let err = calculate(&["9223372036854775807", "1", "*", "2", "1"], OutputFormat::Plain, 0)
            .unwrap_err();
        assert!(matches!(
            err,
            CliError::Arithmetic(FractionError::ArithmeticOverflow { .. })
        ));
        assert!(err.to_string().contains("too large"));
    }

    #[test]
    fn test_interactive_session() {
        let input = b"1 2 + 1 3\n\n1 0 * 1 1\n2 3 * 3 4\nquit\n1 1 + 1 1\n";
        let mut output = Vec::new();
        run_interactive(&input[..], &mut output, OutputFormat::Plain, 0).unwrap();
        assert_eq!(
            String::from_utf8(output).unwrap(),
            "5/6\nerror: cannot divide by zero\n1/2\n"
        );
    }

    #[test]
    fn test_interactive_survives_invalid_utf8() {
        let input = b"1 2 + 1 3\n\xff\xfe 2 + 1 3\n2 3 * 3 4";
        let mut output = Vec::new();
        run_interactive(&input[..], &mut output, OutputFormat::Plain, 0).unwrap();

        let text = String::from_utf8(output).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "5/6");
        assert!(lines[1].starts_with("error: numerator 1 is not a valid integer"));
        assert_eq!(lines[2], "1/2");
    }
}
