pub mod amortization;
pub mod schedule;

pub use amortization::{compute_remaining_balance, AmortizationEngine};
pub use schedule::{BalanceSnapshot, ScheduledPayment};
