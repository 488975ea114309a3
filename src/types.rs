use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// unique identifier for a property
pub type PropertyId = Uuid;

/// which calendar day within each month a payment is deemed to post
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentTiming {
    /// first calendar day of the month
    #[default]
    StartOfMonth,
    /// last calendar day of the month
    EndOfMonth,
}

/// where a loan stands as of a given day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoanStatus {
    /// no payment has posted yet
    NotStarted,
    /// at least one payment posted, principal remains
    Amortizing,
    /// principal fully retired
    PaidOff,
}

/// calendar basis used when turning an instant into a calendar day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TimeBasis {
    /// the host's local calendar
    #[default]
    Local,
    Utc,
}
