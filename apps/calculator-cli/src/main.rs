mod config;
mod logging;

use std::path::PathBuf;

use anyhow::{Result, bail};
use calculator::{DemoConfig, Service};
use calculator_sdk::{CalculatorClient, Number};
use clap::{Parser, Subcommand};

use crate::config::{AppConfig, CliArgs};

/// Calculator - binary arithmetic and positive-value doubling
#[derive(Parser)]
#[command(name = "calculator-cli")]
#[command(about = "Calculator - binary arithmetic and positive-value doubling")]
#[command(version)]
struct Cli {
    /// Path to configuration file (YAML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print effective configuration (JSON) and exit
    #[arg(long)]
    print_config: bool,

    /// Log verbosity level (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Fail on unrecognized operation symbols instead of printing `None`
    #[arg(long)]
    strict: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate the configured demo expression (default: 10 + 5)
    Demo,
    /// Evaluate `A OP B` where OP is one of + - * /
    Calc {
        #[arg(allow_negative_numbers = true)]
        a: Number,
        op: String,
        #[arg(allow_negative_numbers = true)]
        b: Number,
    },
    /// Double every positive value, dropping zero and negatives
    Double {
        #[arg(allow_negative_numbers = true)]
        values: Vec<Number>,
    },
    /// Validate configuration and exit
    Check,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = &cli.config
        && !path.is_file()
    {
        bail!("config file does not exist: {}", path.display());
    }

    let args = CliArgs {
        verbose: cli.verbose,
        strict: cli.strict,
    };

    let mut config = AppConfig::load_or_default(cli.config.as_deref())?;
    config.apply_cli_overrides(&args);

    logging::init_logging(&config.logging)?;
    tracing::debug!(strict = config.calculator.strict_operations, "calculator-cli starting");

    if cli.print_config {
        println!("{}", config.to_json()?);
        return Ok(());
    }

    let service = Service::new();
    match cli.command.unwrap_or(Commands::Demo) {
        Commands::Demo => {
            let DemoConfig { a, b, op } = &config.calculator.demo;
            evaluate(&service, &config, *a, *b, op)
        }
        Commands::Calc { a, op, b } => evaluate(&service, &config, a, b, &op),
        Commands::Double { values } => {
            let doubled = service.process_data(&values);
            let line: Vec<String> = doubled.iter().map(ToString::to_string).collect();
            println!("{}", line.join(" "));
            Ok(())
        }
        Commands::Check => {
            tracing::info!("Checking configuration...");
            println!("Configuration is valid");
            println!("{}", config.to_json()?);
            Ok(())
        }
    }
}

fn evaluate(
    client: &dyn CalculatorClient,
    config: &AppConfig,
    a: Number,
    b: Number,
    op: &str,
) -> Result<()> {
    match client.calc(a, b, op)? {
        Some(result) => println!("{result}"),
        None if config.calculator.strict_operations => {
            bail!("unrecognized operation '{op}'")
        }
        None => println!("None"),
    }
    Ok(())
}
