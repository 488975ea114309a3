pub mod cache;
pub mod calendar;
pub mod clock;
pub mod config;
pub mod decimal;
pub mod errors;
pub mod events;
pub mod payments;
pub mod property;
pub mod terms;
pub mod types;

// re-export key types
pub use cache::BalanceCache;
pub use config::EngineConfig;
pub use decimal::{Money, Rate};
pub use errors::{MortgageError, Result};
pub use events::{Event, EventStore};
pub use payments::{compute_remaining_balance, AmortizationEngine, BalanceSnapshot, ScheduledPayment};
pub use property::{DebtSummary, Property};
pub use terms::{MortgageFields, MortgageTerms, MortgageTermsBuilder};
pub use types::{LoanStatus, PaymentTiming, PropertyId, TimeBasis};

// re-export external dependencies that users will need
pub use chrono;
pub use hourglass_rs::{SafeTimeProvider, TimeSource};
pub use rust_decimal::Decimal;
pub use uuid::Uuid;
