//! Level monthly payment for a fixed-rate loan.
//!
//! # Formula
//!
//! | Symbol | Meaning |
//! |--------|---------|
//! | A      | Loan amount |
//! | D      | Down payment |
//! | R      | Annual interest rate, percent |
//! | N      | Term in months |
//! | P      | Principal, `A - D` |
//! | r      | Monthly rate, `R / 100 / 12` |
//!
//! When `P > 0`, `r > 0`, and `N > 0`:
//!
//! ```text
//! payment = P · r · (1 + r)^N / ((1 + r)^N − 1)
//! ```
//!
//! Otherwise the payment is exactly zero. A zero rate is treated as
//! degenerate rather than falling back to `P / N`.
//!
//! The formula is evaluated as `P · r / (1 − (1 + r)^−N)` using `ln_1p` and
//! `exp_m1`, which is the same value without overflowing for long terms or
//! losing precision for tiny rates. Very long terms therefore still get a
//! payment (close to `P · r`) where the textbook form evaluates to NaN.
//!
//! A payment whose total over the term cannot be represented as a currency
//! amount is treated as degenerate too, so a shown payment is never `0.00`.
//!
//! # Example
//!
//! ```
//! use loan_core::{LoanInputs, calculate};
//! use rust_decimal_macros::dec;
//!
//! let inputs = LoanInputs::new(5000.0, 5.5, 36.0, 1000.0);
//! let payment = calculate(&inputs);
//!
//! assert_eq!(payment.principal, 4000.0);
//! assert_eq!(payment.rounded_payment(), dec!(120.78));
//! ```

use tracing::debug;

use crate::calculations::common::fits_currency;
use crate::models::{LoanInputs, LoanPayment};

/// Why a calculation fell back to a zero payment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Degenerate {
    Principal,
    Rate,
    Term,
    Overflow,
}

impl Degenerate {
    fn as_str(self) -> &'static str {
        match self {
            Self::Principal => "principal is not positive",
            Self::Rate => "monthly rate is not positive",
            Self::Term => "term is not positive",
            Self::Overflow => "payment is outside the currency range",
        }
    }
}

/// NaN is never positive.
fn is_positive(value: f64) -> bool {
    value > 0.0
}

fn check_inputs(
    principal: f64,
    monthly_rate: f64,
    term_months: f64,
) -> Result<(), Degenerate> {
    if !is_positive(principal) {
        return Err(Degenerate::Principal);
    }
    if !is_positive(monthly_rate) {
        return Err(Degenerate::Rate);
    }
    if !is_positive(term_months) {
        return Err(Degenerate::Term);
    }
    Ok(())
}

/// `P · r / (1 − (1 + r)^−N)`. Callers must have checked all three are positive.
fn level_payment(
    principal: f64,
    monthly_rate: f64,
    term_months: f64,
) -> f64 {
    let discount = -(-term_months * monthly_rate.ln_1p()).exp_m1();
    principal * monthly_rate / discount
}

/// Calculates the monthly payment together with the derived principal and rate.
///
/// Never fails: degenerate or unparseable inputs produce a [`LoanPayment`]
/// whose `monthly_payment` is `0.0`.
pub fn calculate(inputs: &LoanInputs) -> LoanPayment {
    let principal = inputs.principal();
    let monthly_rate = inputs.monthly_rate();
    let term_months = inputs.term_months;

    let payment = check_inputs(principal, monthly_rate, term_months)
        .map(|()| level_payment(principal, monthly_rate, term_months))
        .and_then(|payment| {
            let total = payment * term_months.ceil();
            if is_positive(payment) && fits_currency(payment) && fits_currency(total) {
                Ok(payment)
            } else {
                Err(Degenerate::Overflow)
            }
        });

    match payment {
        Ok(monthly_payment) => {
            debug!(
                principal,
                monthly_rate, term_months, monthly_payment, "calculated monthly payment"
            );
            LoanPayment {
                principal,
                monthly_rate,
                term_months,
                monthly_payment,
            }
        }
        Err(reason) => {
            debug!(
                principal,
                monthly_rate,
                term_months,
                reason = reason.as_str(),
                "no payment for degenerate inputs"
            );
            LoanPayment::zero(principal, monthly_rate, term_months)
        }
    }
}

/// Monthly payment only. See [`calculate`].
pub fn monthly_payment(inputs: &LoanInputs) -> f64 {
    calculate(inputs).monthly_payment
}
