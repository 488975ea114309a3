use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::decimal::Money;
use crate::types::PropertyId;

/// mortgage lifecycle events recorded on a property
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Event {
    MortgageAttached {
        property_id: PropertyId,
        loan_amount: Money,
        start_date: NaiveDate,
        bank_name: String,
    },
    MortgageReplaced {
        property_id: PropertyId,
        old_loan_amount: Money,
        new_loan_amount: Money,
        start_date: NaiveDate,
    },
    MortgageRemoved {
        property_id: PropertyId,
        loan_amount: Money,
    },
    MortgageRejected {
        property_id: PropertyId,
        reason: String,
    },
}

/// event store for collecting events during operations
#[derive(Debug, Clone, Default)]
pub struct EventStore {
    events: Vec<Event>,
}

impl EventStore {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn emit(&mut self, event: Event) {
        self.events.push(event);
    }

    pub fn take_events(&mut self) -> Vec<Event> {
        std::mem::take(&mut self.events)
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }
}
