pub mod calculations;
pub mod models;

pub use calculations::{AmortizationSchedule, ScheduleError, calculate, monthly_payment};
pub use models::*;
