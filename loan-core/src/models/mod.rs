mod loan_inputs;
mod loan_payment;
mod schedule_entry;

pub use loan_inputs::LoanInputs;
pub use loan_payment::LoanPayment;
pub use schedule_entry::ScheduleEntry;
