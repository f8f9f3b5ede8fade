use serde::{Deserialize, Serialize};

/// The four values a user enters on the loan form.
///
/// A field whose text could not be parsed is carried as `f64::NAN`. NaN
/// compares false against everything, so it fails every positivity check in
/// the calculator and the payment falls back to zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoanInputs {
    /// Total price being financed before the down payment.
    pub loan_amount: f64,

    /// Annual interest rate as a percent (5.5 means 5.5%).
    pub annual_rate_percent: f64,

    /// Number of monthly payments. Fractional values are accepted.
    pub term_months: f64,

    /// Amount paid up front.
    pub down_payment: f64,
}

impl LoanInputs {
    pub fn new(
        loan_amount: f64,
        annual_rate_percent: f64,
        term_months: f64,
        down_payment: f64,
    ) -> Self {
        Self {
            loan_amount,
            annual_rate_percent,
            term_months,
            down_payment,
        }
    }

    /// Amount actually financed: loan amount minus down payment.
    pub fn principal(&self) -> f64 {
        self.loan_amount - self.down_payment
    }

    /// Annual percent converted to a decimal monthly rate.
    pub fn monthly_rate(&self) -> f64 {
        self.annual_rate_percent / 100.0 / 12.0
    }
}
