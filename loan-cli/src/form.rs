//! Form state for the loan calculator.
//!
//! Holds the four fields as the user typed them and the result of the last
//! explicit calculation. Nothing is recomputed until [`LoanForm::calculate`]
//! is called.

use clap::Args;
use loan_core::{LoanInputs, LoanPayment, calculate};

use crate::config::FormDefaults;
use crate::utils::{format_currency, parse_field};

/// Field values given on the command line. Unset fields keep the form's text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Args)]
pub struct FieldOverrides {
    /// Loan amount.
    #[arg(short, long, allow_hyphen_values = true)]
    pub amount: Option<String>,

    /// Annual interest rate in percent.
    #[arg(short, long, allow_hyphen_values = true)]
    pub rate: Option<String>,

    /// Loan term in months.
    #[arg(short, long, allow_hyphen_values = true)]
    pub term: Option<String>,

    /// Down payment.
    #[arg(short, long, allow_hyphen_values = true)]
    pub down: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LoanForm {
    pub loan_amount: String,
    pub interest_rate: String,
    pub loan_term: String,
    pub down_payment: String,

    /// Result of the last calculation, `None` until one has run.
    result: Option<LoanPayment>,
}

impl Default for LoanForm {
    fn default() -> Self {
        Self::new()
    }
}

impl LoanForm {
    /// A form seeded with the built-in defaults.
    pub fn new() -> Self {
        Self::from_defaults(&FormDefaults::default())
    }

    pub fn from_defaults(defaults: &FormDefaults) -> Self {
        Self {
            loan_amount: defaults.loan_amount.clone(),
            interest_rate: defaults.interest_rate.clone(),
            loan_term: defaults.loan_term.clone(),
            down_payment: defaults.down_payment.clone(),
            result: None,
        }
    }

    /// Replaces the text of every field set in `overrides`.
    ///
    /// Like editing a field, this leaves the last result in place until the
    /// next [`calculate`](Self::calculate).
    pub fn apply_overrides(&mut self, overrides: FieldOverrides) {
        let FieldOverrides {
            amount,
            rate,
            term,
            down,
        } = overrides;

        if let Some(amount) = amount {
            self.loan_amount = amount;
        }
        if let Some(rate) = rate {
            self.interest_rate = rate;
        }
        if let Some(term) = term {
            self.loan_term = term;
        }
        if let Some(down) = down {
            self.down_payment = down;
        }
    }

    /// Parses the current field text. Unparseable fields become NaN.
    pub fn inputs(&self) -> LoanInputs {
        LoanInputs::new(
            parse_field(&self.loan_amount),
            parse_field(&self.interest_rate),
            parse_field(&self.loan_term),
            parse_field(&self.down_payment),
        )
    }

    /// Recomputes the payment from the current fields and stores it.
    pub fn calculate(&mut self) -> LoanPayment {
        let payment = calculate(&self.inputs());
        self.result = Some(payment);
        payment
    }

    pub fn result(&self) -> Option<&LoanPayment> {
        self.result.as_ref()
    }

    /// The payment as displayed, e.g. `$120.78`.
    ///
    /// `None` before the first calculation and whenever the payment is not
    /// greater than zero.
    pub fn monthly_payment_display(
        &self,
        currency_symbol: &str,
    ) -> Option<String> {
        self.result
            .filter(LoanPayment::is_payable)
            .map(|payment| format_currency(currency_symbol, payment.rounded_payment()))
    }
}
