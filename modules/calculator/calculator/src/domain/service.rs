//! Domain service for calculator
//!
//! Contains the core business logic for the evaluator and the doubler.

use calculator_sdk::{CalculatorClient, CalculatorError, Number, Operation};
use tracing::debug;

/// Domain service that performs calculator operations.
///
/// This is a simple stateless service. Consumers hold it behind
/// `dyn CalculatorClient`.
#[derive(Clone, Default)]
pub struct Service;

impl Service {
    /// Create a new service.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl CalculatorClient for Service {
    fn calc(&self, a: Number, b: Number, op: &str) -> Result<Option<Number>, CalculatorError> {
        let Some(operation) = Operation::from_symbol(op) else {
            debug!(op, "unrecognized operation symbol");
            return Ok(None);
        };

        debug!(%a, %b, op = %operation, "evaluating");
        operation.apply(a, b).map(Some)
    }

    fn process_data(&self, data: &[Number]) -> Vec<Number> {
        let doubled: Vec<Number> = data
            .iter()
            .filter(|value| value.is_positive())
            .map(|&value| value * Number::Int(2))
            .collect();

        debug!(
            input_len = data.len(),
            output_len = doubled.len(),
            "doubled positive values"
        );
        doubled
    }
}
