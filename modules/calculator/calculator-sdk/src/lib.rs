//! Calculator SDK
//!
//! This crate provides everything needed to consume the calculator service:
//! - API trait (`CalculatorClient`)
//! - Error types (`CalculatorError`, `ParseNumberError`)
//! - Operand and operation types (`Number`, `Operation`)
//!
//! ## Usage
//!
//! ```ignore
//! use calculator_sdk::{CalculatorClient, Number};
//!
//! let client: &dyn CalculatorClient = &service;
//! let sum = client.calc(Number::Int(10), Number::Int(5), "+")?;
//! assert_eq!(sum, Some(Number::Int(15)));
//! ```

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

// === API TRAIT AND TYPES ===
mod api;
pub use api::{CalculatorClient, CalculatorError};

// === MODELS ===
pub mod models;
pub use models::{Number, Operation, ParseNumberError};
