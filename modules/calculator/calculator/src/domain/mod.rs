//! Domain layer for calculator module
//!
//! Contains business logic for the evaluator and the doubler.

pub mod service;

pub use service::Service;
