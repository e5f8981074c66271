//! Logging initialization.
//!
//! Logs go to stderr so stdout carries only results. `RUST_LOG` takes
//! precedence over the configured levels:
//! ```bash
//! RUST_LOG=calculator=debug calculator-cli calc 7 / 2
//! ```

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::config::{LogFormat, LoggingConfig};

/// Build the filter directive string from configuration, e.g. `warn,calculator=debug`.
#[must_use]
pub fn filter_directives(config: &LoggingConfig) -> String {
    let mut directives = config.default.clone();
    for (target, level) in &config.modules {
        directives.push(',');
        directives.push_str(target);
        directives.push('=');
        directives.push_str(level);
    }
    directives
}

/// Install the global subscriber. Call once at startup.
///
/// # Errors
/// Returns an error if the configured directives are invalid or a global
/// subscriber is already installed.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let filter = if std::env::var_os(EnvFilter::DEFAULT_ENV).is_some() {
        EnvFilter::try_from_default_env().context("invalid RUST_LOG directives")?
    } else {
        let directives = filter_directives(config);
        EnvFilter::try_new(&directives)
            .with_context(|| format!("invalid logging directives '{directives}'"))?
    };

    let registry = tracing_subscriber::registry().with(filter);
    match config.format {
        LogFormat::Text => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true),
            )
            .try_init(),
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .try_init(),
    }
    .context("failed to install tracing subscriber")
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn test_default_directives() {
        assert_eq!(filter_directives(&LoggingConfig::default()), "warn");
    }

    #[test]
    fn test_module_overrides_are_appended() {
        let mut config = LoggingConfig {
            default: "info".to_owned(),
            ..LoggingConfig::default()
        };
        config
            .modules
            .insert("calculator".to_owned(), "debug".to_owned());
        config
            .modules
            .insert("calculator_cli".to_owned(), "trace".to_owned());

        let directives = filter_directives(&config);
        assert_eq!(directives, "info,calculator=debug,calculator_cli=trace");
        assert!(EnvFilter::try_new(&directives).is_ok());
    }
}
