//! Calculator API trait and types
//!
//! Contract trait and types for the calculator service.

use crate::models::Number;

/// Calculator API trait
///
/// Two stateless operations: a binary evaluator and a positive-value doubler.
///
/// `calc` has two distinct non-result channels that callers must keep apart:
/// division by zero is an `Err`, an unrecognized operation symbol is `Ok(None)`.
pub trait CalculatorClient: Send + Sync {
    /// Evaluate `a <op> b` where `op` is one of `+`, `-`, `*`, `/`.
    ///
    /// Returns `Ok(None)` when `op` is not a recognized symbol.
    ///
    /// # Errors
    /// Returns `CalculatorError::DivisionByZero` when `op` is `/` and `b` is zero.
    fn calc(&self, a: Number, b: Number, op: &str) -> Result<Option<Number>, CalculatorError>;

    /// Keep the strictly positive values of `data`, doubled, in their original order.
    fn process_data(&self, data: &[Number]) -> Vec<Number>;
}

/// Error type for Calculator operations
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalculatorError {
    #[error("cannot divide by zero")]
    DivisionByZero,
}
