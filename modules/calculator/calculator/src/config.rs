//! Configuration for the calculator module.

use std::fmt;

use calculator_sdk::Number;
use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize};

/// Calculator module configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CalculatorConfig {
    /// Arguments evaluated by the demonstration entry point.
    pub demo: DemoConfig,

    /// Treat an unrecognized operation symbol as a failure at the CLI boundary.
    pub strict_operations: bool,
}

/// Fixed arguments for the demonstration entry point.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DemoConfig {
    #[serde(default = "default_a")]
    pub a: Number,

    #[serde(default = "default_b")]
    pub b: Number,

    /// Operation symbol. Any scalar is kept as its string form so unrecognized
    /// symbols (including numeric-looking ones such as `1`) reach the evaluator.
    #[serde(default = "default_op", deserialize_with = "deserialize_symbol")]
    pub op: String,
}

fn default_a() -> Number {
    Number::Int(10)
}

fn default_b() -> Number {
    Number::Int(5)
}

fn default_op() -> String {
    "+".to_owned()
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            a: default_a(),
            b: default_b(),
            op: default_op(),
        }
    }
}

struct SymbolVisitor;

impl Visitor<'_> for SymbolVisitor {
    type Value = String;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an operation symbol")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<String, E> {
        Ok(v.to_owned())
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<String, E> {
        Ok(v)
    }

    fn visit_char<E: de::Error>(self, v: char) -> Result<String, E> {
        Ok(v.to_string())
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<String, E> {
        Ok(v.to_string())
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<String, E> {
        Ok(v.to_string())
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<String, E> {
        Ok(v.to_string())
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<String, E> {
        Ok(v.to_string())
    }
}

fn deserialize_symbol<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    deserializer.deserialize_any(SymbolVisitor)
}
