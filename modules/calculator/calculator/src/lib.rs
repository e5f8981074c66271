//! Calculator Module
//!
//! Stateless arithmetic: a binary evaluator over `+ - * /` and a doubler
//! that keeps only the positive values of a sequence.
//!
//! ## Architecture
//!
//! - `domain/service.rs` - Core business logic, implements `CalculatorClient`
//! - `config.rs` - Typed module configuration
//!
//! Consumers should depend on the `CalculatorClient` trait from `calculator-sdk`
//! and hold the `Service` behind it.

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

// === CONFIGURATION ===
pub mod config;
pub use config::{CalculatorConfig, DemoConfig};

#[cfg(test)]
mod config_tests;

// === DOMAIN ===
pub mod domain;
pub use domain::Service;
