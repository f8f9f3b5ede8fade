use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculations::common::to_currency;

/// Result of a single payment calculation.
///
/// `principal` and `monthly_rate` are the derived values the calculator saw,
/// kept alongside the payment so callers can display or schedule them without
/// recomputing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoanPayment {
    pub principal: f64,
    pub monthly_rate: f64,
    pub term_months: f64,

    /// Level monthly payment. Exactly `0.0` for degenerate inputs.
    pub monthly_payment: f64,
}

impl LoanPayment {
    /// A zero payment for the given derived values.
    pub fn zero(
        principal: f64,
        monthly_rate: f64,
        term_months: f64,
    ) -> Self {
        Self {
            principal,
            monthly_rate,
            term_months,
            monthly_payment: 0.0,
        }
    }

    /// Whether there is anything to pay. The form hides the result otherwise.
    pub fn is_payable(&self) -> bool {
        self.monthly_payment > 0.0
    }

    /// Monthly payment rounded to cents.
    pub fn rounded_payment(&self) -> Decimal {
        to_currency(self.monthly_payment)
    }

    /// Sum of all payments over the term, rounded to cents.
    ///
    /// A fractional term is paid as whole months plus one short final payment,
    /// matching the last row of the amortization schedule.
    pub fn total_paid(&self) -> Decimal {
        if !self.is_payable() {
            return Decimal::ZERO;
        }
        to_currency(self.paid_over_term())
    }

    /// Interest portion of [`total_paid`](Self::total_paid), rounded to cents.
    pub fn total_interest(&self) -> Decimal {
        if !self.is_payable() {
            return Decimal::ZERO;
        }
        to_currency(self.paid_over_term() - self.principal)
    }

    fn paid_over_term(&self) -> f64 {
        let whole = self.term_months.floor();
        let fraction = self.term_months - whole;
        let rate = self.monthly_rate;

        // Balance left after the whole months is the present value of the
        // remaining fractional payment; it accrues one more month of interest.
        let remaining = self.monthly_payment * -(-fraction * rate.ln_1p()).exp_m1() / rate;
        self.monthly_payment * whole + remaining * (1.0 + rate)
    }
}
