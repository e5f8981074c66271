//! Public models for the calculator module.
//!
//! These are transport-agnostic data structures that define the contract
//! between the calculator module and its consumers.

use std::fmt;
use std::ops::{Add, Mul, Sub};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::api::CalculatorError;

/// Numeric operand: an integer or a floating-point value.
///
/// Arithmetic follows the usual promotion rules: two integers produce an
/// integer, anything involving a float produces a float. Integer overflow
/// promotes the result to a float instead of wrapping.
///
/// Equality is exact and numeric across variants, so `Int(2) == Float(2.0)`
/// while `Int(2^53 + 1) != Float(2^53)`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    /// Widen to `f64`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn as_f64(self) -> f64 {
        match self {
            Self::Int(v) => v as f64,
            Self::Float(v) => v,
        }
    }

    #[must_use]
    pub fn is_zero(self) -> bool {
        match self {
            Self::Int(v) => v == 0,
            Self::Float(v) => v == 0.0,
        }
    }

    /// Strictly greater than zero. `NaN` is not positive.
    #[must_use]
    pub fn is_positive(self) -> bool {
        match self {
            Self::Int(v) => v > 0,
            Self::Float(v) => v > 0.0,
        }
    }

    #[must_use]
    pub fn is_float(self) -> bool {
        matches!(self, Self::Float(_))
    }

    /// True division.
    ///
    /// Two integers that divide evenly stay an integer (`10 / 5 == Int(2)`);
    /// every other quotient is a float (`7 / 2 == Float(3.5)`).
    ///
    /// # Errors
    /// Returns `CalculatorError::DivisionByZero` if `rhs` is zero (including `-0.0`).
    pub fn checked_div(self, rhs: Self) -> Result<Self, CalculatorError> {
        if rhs.is_zero() {
            return Err(CalculatorError::DivisionByZero);
        }

        if let (Self::Int(a), Self::Int(b)) = (self, rhs)
            && a.checked_rem(b) == Some(0)
            && let Some(quotient) = a.checked_div(b)
        {
            return Ok(Self::Int(quotient));
        }

        Ok(Self::Float(self.as_f64() / rhs.as_f64()))
    }

    fn combine(
        self,
        rhs: Self,
        int_op: fn(i64, i64) -> Option<i64>,
        float_op: fn(f64, f64) -> f64,
    ) -> Self {
        let widened = || Self::Float(float_op(self.as_f64(), rhs.as_f64()));
        match (self, rhs) {
            (Self::Int(a), Self::Int(b)) => int_op(a, b).map_or_else(widened, Self::Int),
            _ => widened(),
        }
    }
}

impl Add for Number {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        self.combine(rhs, i64::checked_add, |a, b| a + b)
    }
}

impl Sub for Number {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self.combine(rhs, i64::checked_sub, |a, b| a - b)
    }
}

impl Mul for Number {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        self.combine(rhs, i64::checked_mul, |a, b| a * b)
    }
}

/// 2^63, the first float above the `i64` range.
const I64_UPPER_BOUND: f64 = 9_223_372_036_854_775_808.0;

/// Exact comparison, no widening: the float must be integral, in range, and
/// convert back to the same integer.
fn int_eq_float(int: i64, float: f64) -> bool {
    if !float.is_finite() || float.fract() != 0.0 {
        return false;
    }
    if !(-I64_UPPER_BOUND..I64_UPPER_BOUND).contains(&float) {
        return false;
    }
    #[allow(clippy::cast_possible_truncation)]
    let truncated = float as i64;
    truncated == int
}

impl PartialEq for Number {
    #[allow(clippy::float_cmp)]
    fn eq(&self, other: &Self) -> bool {
        match (*self, *other) {
            (Self::Int(a), Self::Int(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => a == b,
            (Self::Int(i), Self::Float(f)) | (Self::Float(f), Self::Int(i)) => {
                int_eq_float(i, f)
            }
        }
    }
}

impl From<i64> for Number {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<i32> for Number {
    fn from(v: i32) -> Self {
        Self::Int(i64::from(v))
    }
}

impl From<f64> for Number {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Int(v) => write!(f, "{v}"),
            // Integral floats keep a fractional digit so `4.0` never reads as an integer.
            Self::Float(v) if v.is_finite() && v.fract() == 0.0 => write!(f, "{v:.1}"),
            Self::Float(v) => write!(f, "{v}"),
        }
    }
}

/// Error returned when a token is neither an integer nor a float.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid number: '{input}'")]
pub struct ParseNumberError {
    pub input: String,
}

impl FromStr for Number {
    type Err = ParseNumberError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        if let Ok(v) = token.parse::<i64>() {
            return Ok(Self::Int(v));
        }
        token
            .parse::<f64>()
            .map(Self::Float)
            .map_err(|_| ParseNumberError {
                input: s.to_owned(),
            })
    }
}

/// Supported arithmetic operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    pub const ALL: [Self; 4] = [Self::Add, Self::Subtract, Self::Multiply, Self::Divide];

    /// Look up the operation for an exact symbol. Anything other than
    /// `+`, `-`, `*` or `/` (including the empty string) yields `None`.
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "+" => Some(Self::Add),
            "-" => Some(Self::Subtract),
            "*" => Some(Self::Multiply),
            "/" => Some(Self::Divide),
            _ => None,
        }
    }

    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
        }
    }

    /// Apply the operation to `a` and `b`.
    ///
    /// # Errors
    /// Returns `CalculatorError::DivisionByZero` for `Divide` with a zero divisor.
    pub fn apply(self, a: Number, b: Number) -> Result<Number, CalculatorError> {
        match self {
            Self::Add => Ok(a + b),
            Self::Subtract => Ok(a - b),
            Self::Multiply => Ok(a * b),
            Self::Divide => a.checked_div(b),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
