//! Loan payment calculations.
//!
//! This module provides the level-payment amortization formula and the
//! month-by-month schedule derived from it.

pub mod amortization;
pub mod common;
pub mod schedule;

pub use amortization::{calculate, monthly_payment};
pub use schedule::{AmortizationSchedule, ScheduleError};
