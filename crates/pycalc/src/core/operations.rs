//! Binary operations over [`Number`].

use crate::core::{CalcError, CalcResult, Number};

/// Type-safe operation enum - every operator the parser can produce
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Addition (+)
    Add,
    /// Subtraction (-)
    Subtract,
    /// Multiplication (*)
    Multiply,
    /// True division (/), always yields a float
    Divide,
    /// Floor division (//)
    FloorDivide,
    /// Exponentiation (**)
    Power,
}

impl Operation {
    /// Returns the operator symbol for display
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
            Self::FloorDivide => "//",
            Self::Power => "**",
        }
    }

    /// Returns the precedence level (higher binds tighter)
    #[must_use]
    pub const fn precedence(&self) -> u8 {
        match self {
            Self::Add | Self::Subtract => 1,
            Self::Multiply | Self::Divide | Self::FloorDivide => 2,
            Self::Power => 3,
        }
    }

    /// Returns true if this operation is left-associative
    #[must_use]
    pub const fn is_left_associative(&self) -> bool {
        !matches!(self, Self::Power)
    }

    /// Applies the operation to two operands
    pub fn apply(self, a: Number, b: Number) -> CalcResult<Number> {
        match (a, b) {
            (Number::Int(x), Number::Int(y)) => self.apply_int(x, y),
            _ => self.apply_float(a.as_f64(), b.as_f64()),
        }
    }

    fn apply_int(self, a: i128, b: i128) -> CalcResult<Number> {
        let value = match self {
            Self::Add => a.checked_add(b),
            Self::Subtract => a.checked_sub(b),
            Self::Multiply => a.checked_mul(b),
            Self::FloorDivide => {
                if b == 0 {
                    return Err(CalcError::DivisionByZero);
                }
                floor_div(a, b)
            }
            Self::Divide => return divide(a as f64, b as f64),
            Self::Power => return power(Number::Int(a), Number::Int(b)),
        };
        value.map(Number::Int).ok_or(CalcError::Overflow)
    }

    fn apply_float(self, a: f64, b: f64) -> CalcResult<Number> {
        let value = match self {
            Self::Add => a + b,
            Self::Subtract => a - b,
            Self::Multiply => a * b,
            Self::FloorDivide => {
                if b == 0.0 {
                    return Err(CalcError::DivisionByZero);
                }
                (a / b).floor()
            }
            Self::Divide => return divide(a, b),
            Self::Power => return power(Number::Float(a), Number::Float(b)),
        };
        finite(value)
    }
}

/// Arithmetic negation
pub(crate) fn negate(value: Number) -> CalcResult<Number> {
    match value {
        Number::Int(i) => i.checked_neg().map(Number::Int).ok_or(CalcError::Overflow),
        Number::Float(f) => Ok(Number::Float(-f)),
    }
}

fn divide(a: f64, b: f64) -> CalcResult<Number> {
    if b == 0.0 {
        return Err(CalcError::DivisionByZero);
    }
    finite(a / b)
}

/// Integer division rounded toward negative infinity
fn floor_div(a: i128, b: i128) -> Option<i128> {
    let quotient = a.checked_div(b)?;
    let remainder = a.checked_rem(b)?;
    if remainder != 0 && ((remainder < 0) != (b < 0)) {
        quotient.checked_sub(1)
    } else {
        Some(quotient)
    }
}

fn power(base: Number, exponent: Number) -> CalcResult<Number> {
    if let (Number::Int(b), Number::Int(e)) = (base, exponent) {
        if e >= 0 {
            return int_power(b, e);
        }
        if b == 0 {
            return Err(CalcError::DivisionByZero);
        }
    }

    let (b, e) = (base.as_f64(), exponent.as_f64());
    if b == 0.0 && e < 0.0 {
        return Err(CalcError::DivisionByZero);
    }
    if b < 0.0 && e.fract() != 0.0 {
        return Err(CalcError::invalid_result("complex result"));
    }
    finite(b.powf(e))
}

fn int_power(base: i128, exponent: i128) -> CalcResult<Number> {
    let value = match base {
        0 if exponent == 0 => 1,
        0 => 0,
        1 => 1,
        -1 if exponent % 2 == 0 => 1,
        -1 => -1,
        _ => {
            let exponent = u32::try_from(exponent).map_err(|_| CalcError::Overflow)?;
            base.checked_pow(exponent).ok_or(CalcError::Overflow)?
        }
    };
    Ok(Number::Int(value))
}

fn finite(value: f64) -> CalcResult<Number> {
    if value.is_nan() {
        Err(CalcError::invalid_result("NaN"))
    } else if value.is_infinite() {
        Err(CalcError::Overflow)
    } else {
        Ok(Number::Float(value))
    }
}
