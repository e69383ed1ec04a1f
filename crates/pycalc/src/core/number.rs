//! Numeric values produced by the evaluator.

use std::fmt;

/// An evaluated value.
///
/// Integer arithmetic stays exact until a true division or a float operand
/// promotes it, so `2+2` shows `4` while `4/2` shows `2.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    /// Exact integer
    Int(i128),
    /// Floating point
    Float(f64),
}

impl Number {
    /// Returns the value as a float, promoting integers
    #[must_use]
    pub fn as_f64(self) -> f64 {
        match self {
            Self::Int(i) => i as f64,
            Self::Float(f) => f,
        }
    }

    /// Returns true if this is an exact integer
    #[must_use]
    pub const fn is_int(self) -> bool {
        matches!(self, Self::Int(_))
    }

    /// Returns true if the value is zero
    #[must_use]
    pub fn is_zero(self) -> bool {
        match self {
            Self::Int(i) => i == 0,
            Self::Float(f) => f == 0.0,
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(i) => write!(f, "{i}"),
            Self::Float(x) => f.write_str(&format_float(*x)),
        }
    }
}

/// Shortest round-trip float rendering with a visible fractional part.
///
/// Positional notation is used while the decimal exponent is in `[-4, 16)`,
/// scientific notation with a signed two-digit exponent otherwise.
pub(crate) fn format_float(value: f64) -> String {
    if value.is_nan() {
        return "nan".into();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf".into() } else { "-inf".into() };
    }

    let sign = if value.is_sign_negative() { "-" } else { "" };
    // `{:e}` already yields the shortest digits that round-trip
    let sci = format!("{:e}", value.abs());
    let (mantissa, exponent) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();

    if (-4..16).contains(&exponent) {
        format!("{sign}{}", positional(&digits, exponent))
    } else {
        let (head, tail) = digits.split_at(1);
        let exp_sign = if exponent < 0 { '-' } else { '+' };
        if tail.is_empty() {
            format!("{sign}{head}e{exp_sign}{:02}", exponent.abs())
        } else {
            format!("{sign}{head}.{tail}e{exp_sign}{:02}", exponent.abs())
        }
    }
}

fn positional(digits: &str, exponent: i32) -> String {
    if exponent < 0 {
        let zeros = "0".repeat((-exponent - 1) as usize);
        return format!("0.{zeros}{digits}");
    }

    let int_len = exponent as usize + 1;
    if digits.len() > int_len {
        let (int_part, frac_part) = digits.split_at(int_len);
        format!("{int_part}.{frac_part}")
    } else {
        let padding = "0".repeat(int_len - digits.len());
        format!("{digits}{padding}.0")
    }
}
