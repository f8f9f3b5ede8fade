//! Month-by-month amortization schedule.
//!
//! Each level payment is split into interest on the outstanding balance and
//! principal repaid. The running balance is tracked in `f64` and every entry is
//! rounded to cents for display. The final entry pays off whatever balance is
//! left, so the schedule always closes at exactly zero.

use rust_decimal::Decimal;
use thiserror::Error;
use tracing::debug;

use crate::calculations::common::to_currency;
use crate::models::{LoanPayment, ScheduleEntry};

/// Longest schedule that will be built (100 years of monthly payments).
pub const MAX_PERIODS: u64 = 1200;

/// Errors that can occur when building a schedule.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScheduleError {
    /// The payment is zero, so there is nothing to amortize.
    #[error("no payment is due for these inputs")]
    NotPayable,

    /// The term needs more periods than [`MAX_PERIODS`].
    #[error("term of {0} payments exceeds the {MAX_PERIODS} payment limit")]
    TermTooLong(u64),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AmortizationSchedule {
    entries: Vec<ScheduleEntry>,
}

impl AmortizationSchedule {
    /// Builds the schedule for a calculated payment.
    ///
    /// A fractional term is rounded up to a whole number of payments; the
    /// last one is then smaller than the rest.
    ///
    /// # Errors
    ///
    /// Returns [`ScheduleError::NotPayable`] for a zero payment and
    /// [`ScheduleError::TermTooLong`] past [`MAX_PERIODS`].
    pub fn build(payment: &LoanPayment) -> Result<Self, ScheduleError> {
        if !payment.is_payable() {
            return Err(ScheduleError::NotPayable);
        }

        // Saturating cast; anything huge trips the limit below.
        let periods = payment.term_months.ceil() as u64;
        if periods > MAX_PERIODS {
            return Err(ScheduleError::TermTooLong(periods));
        }

        let rate = payment.monthly_rate;
        let level = payment.monthly_payment;
        let mut balance = payment.principal;
        let mut entries = Vec::with_capacity(periods as usize);

        for period in 1..=periods {
            let interest = balance * rate;
            let principal = if period == periods {
                balance
            } else {
                (level - interest).min(balance)
            };
            balance -= principal;

            entries.push(ScheduleEntry {
                period: period as u32,
                payment: to_currency(interest + principal),
                interest: to_currency(interest),
                principal: to_currency(principal),
                balance: to_currency(balance),
            });
        }

        debug!(periods, "built amortization schedule");
        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[ScheduleEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of the rounded interest column.
    pub fn total_interest(&self) -> Decimal {
        self.entries.iter().map(|e| e.interest).sum()
    }

    /// Sum of the rounded payment column.
    pub fn total_paid(&self) -> Decimal {
        self.entries.iter().map(|e| e.payment).sum()
    }
}
