//! Command implementations shared by the binary and the integration tests.
//!
//! Each command writes plain text to any [`Write`] so the output can be
//! asserted on directly.

use std::io::Write;

use anyhow::{Context, Result};
use loan_core::calculations::common::to_currency;
use loan_core::{AmortizationSchedule, LoanPayment, ScheduleError, calculate};
use tracing::{info, warn};

use crate::config::LoanConfig;
use crate::csv_loader::LoanScenario;
use crate::form::LoanForm;
use crate::utils::format_currency;

const NO_PAYMENT: &str =
    "No monthly payment: loan amount must exceed the down payment, and rate and term must be positive.";

/// Calculates the form and prints the result, optionally with the full schedule.
pub fn run_calculation<W: Write>(
    out: &mut W,
    form: &mut LoanForm,
    config: &LoanConfig,
    show_schedule: bool,
) -> Result<()> {
    let payment = form.calculate();
    let symbol = config.currency_symbol.as_str();

    let Some(shown) = form.monthly_payment_display(symbol) else {
        info!("inputs do not produce a payment");
        writeln!(out, "{NO_PAYMENT}")?;
        return Ok(());
    };

    info!(monthly_payment = %shown, "calculated loan payment");
    writeln!(
        out,
        "Principal:       {}",
        format_currency(symbol, to_currency(payment.principal))
    )?;
    writeln!(out, "Monthly Payment: {shown}")?;
    writeln!(out, "Total Paid:      {}", format_currency(symbol, payment.total_paid()))?;
    writeln!(
        out,
        "Total Interest:  {}",
        format_currency(symbol, payment.total_interest())
    )?;

    if show_schedule {
        write_schedule(out, &payment, symbol)?;
    }

    Ok(())
}

fn write_schedule<W: Write>(
    out: &mut W,
    payment: &LoanPayment,
    symbol: &str,
) -> Result<()> {
    let schedule = match AmortizationSchedule::build(payment) {
        Ok(schedule) => schedule,
        Err(e @ ScheduleError::TermTooLong(_)) => {
            warn!(error = %e, "schedule skipped");
            writeln!(out, "\nSchedule not shown: {e}")?;
            return Ok(());
        }
        Err(e) => return Err(e).context("cannot build amortization schedule"),
    };

    writeln!(out)?;
    writeln!(
        out,
        "{:>6}  {:>14}  {:>14}  {:>14}  {:>16}",
        "Month", "Payment", "Interest", "Principal", "Balance"
    )?;
    for entry in schedule.entries() {
        writeln!(
            out,
            "{:>6}  {:>14}  {:>14}  {:>14}  {:>16}",
            entry.period,
            format_currency(symbol, entry.payment),
            format_currency(symbol, entry.interest),
            format_currency(symbol, entry.principal),
            format_currency(symbol, entry.balance),
        )?;
    }
    writeln!(
        out,
        "{:>6}  {:>14}  {:>14}",
        "Total",
        format_currency(symbol, schedule.total_paid()),
        format_currency(symbol, schedule.total_interest()),
    )?;

    Ok(())
}

/// Calculates every scenario and prints one line per row.
pub fn run_batch<W: Write>(
    out: &mut W,
    scenarios: &[LoanScenario],
    config: &LoanConfig,
) -> Result<()> {
    let symbol = config.currency_symbol.as_str();
    let mut payable = 0usize;

    for scenario in scenarios {
        let payment = calculate(&scenario.inputs);
        if payment.is_payable() {
            payable += 1;
            writeln!(
                out,
                "{}: monthly payment {}",
                scenario.label,
                format_currency(symbol, payment.rounded_payment())
            )?;
        } else {
            writeln!(out, "{}: no payment", scenario.label)?;
        }
    }

    info!(rows = scenarios.len(), payable, "batch complete");
    Ok(())
}
