//! Application configuration.
//!
//! Layered loading, lowest precedence first:
//! 1. built-in defaults
//! 2. YAML file passed with `--config`
//! 3. environment variables prefixed `CALCULATOR__` (`__` separates nesting,
//!    e.g. `CALCULATOR__CALCULATOR__DEMO__OP=*`)
//! 4. CLI overrides

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};
use calculator::CalculatorConfig;
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Yaml};
use serde::{Deserialize, Serialize};

/// Prefix for environment overrides.
pub const ENV_PREFIX: &str = "CALCULATOR__";

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub logging: LoggingConfig,
    pub calculator: CalculatorConfig,
}

/// Logging configuration.
///
/// `RUST_LOG`, when set, replaces the filter built from these settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// Default level for every target.
    #[serde(default = "default_level")]
    pub default: String,

    /// Per-target level overrides, e.g. `calculator: debug`.
    pub modules: BTreeMap<String, String>,

    pub format: LogFormat,
}

#[derive(Debug, Default, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

fn default_level() -> String {
    "warn".to_owned()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            default: default_level(),
            modules: BTreeMap::new(),
            format: LogFormat::default(),
        }
    }
}

/// CLI arguments that flow into the configuration merge.
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    pub verbose: u8,
    pub strict: bool,
}

impl AppConfig {
    /// Load defaults, then the YAML file (if any), then `CALCULATOR__*` env overrides.
    ///
    /// # Errors
    /// Returns an error if a layer cannot be parsed or does not match the schema.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));
        if let Some(path) = path {
            figment = figment.merge(Yaml::file(path));
        }

        figment
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
            .context("failed to load configuration")
    }

    /// Apply CLI overrides on top of the loaded configuration.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        let level = match args.verbose {
            0 => None,
            1 => Some("info"),
            2 => Some("debug"),
            _ => Some("trace"),
        };
        if let Some(level) = level {
            level.clone_into(&mut self.logging.default);
        }

        if args.strict {
            self.calculator.strict_operations = true;
        }
    }

    /// Render the effective configuration.
    ///
    /// # Errors
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("failed to serialize configuration")
    }
}
