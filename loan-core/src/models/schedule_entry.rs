use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One month of an amortization schedule, in rounded currency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    /// 1-based payment number.
    pub period: u32,
    pub payment: Decimal,
    pub interest: Decimal,
    pub principal: Decimal,

    /// Balance remaining after this payment.
    pub balance: Decimal,
}
