use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::debug;

use loan_cli::config::LoanConfig;
use loan_cli::form::{FieldOverrides, LoanForm};
use loan_cli::{app, csv_loader, logging};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Loan payment calculator.
///
/// Computes the level monthly payment for a fixed-rate loan from the loan
/// amount, annual interest rate, term in months, and down payment.
#[derive(Debug, Parser)]
#[command(name = "loan-calc")]
#[command(version, about, long_about = None)]
struct Cli {
    /// TOML file with form defaults and the currency symbol.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log level or filter directive. `RUST_LOG` takes precedence.
    #[arg(long, global = true, default_value = "info")]
    log_level: String,

    /// Also append log records to this file.
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Calculate the monthly payment for one loan.
    ///
    /// Values are free text; anything that is not a number yields no payment.
    Calc {
        #[command(flatten)]
        overrides: FieldOverrides,

        /// Print the month-by-month amortization schedule.
        #[arg(short, long, default_value_t = false)]
        schedule: bool,
    },

    /// Calculate payments for every row of a CSV file.
    Batch {
        /// CSV file with `loan_amount`, `interest_rate`, and `loan_term` columns.
        #[arg(short, long)]
        file: PathBuf,
    },
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init_logging(&cli.log_level)?;
    if let Some(path) = &cli.log_file {
        logging::enable_file_logging(path)?;
    }

    let config =
        LoanConfig::load_or_default(cli.config.as_deref()).context("Failed to load config")?;
    debug!(?config, "configuration loaded");

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Command::Calc {
            overrides,
            schedule,
        } => {
            let mut form = LoanForm::from_defaults(&config.defaults);
            form.apply_overrides(overrides);
            app::run_calculation(&mut out, &mut form, &config, schedule)
        }
        Command::Batch { file } => {
            let scenarios = csv_loader::load_from_file(&file)
                .with_context(|| format!("Failed to load scenarios: {}", file.display()))?;
            debug!(count = scenarios.len(), "parsed scenarios");
            app::run_batch(&mut out, &scenarios, &config)
        }
    }
}
