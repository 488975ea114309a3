//! Property records as seen by the display and persistence layers.
//!
//! A property carries at most one mortgage. Saving mortgage fields creates or
//! replaces the terms in one step, saving without them removes the terms, and
//! the balance shown next to a property is always recomputed from the stored
//! terms.

use chrono::NaiveDate;
use hourglass_rs::SafeTimeProvider;
use serde::{Deserialize, Serialize};
use tracing::warn;
use uuid::Uuid;

use crate::clock;
use crate::decimal::Money;
use crate::errors::Result;
use crate::events::{Event, EventStore};
use crate::payments::AmortizationEngine;
use crate::terms::{MortgageFields, MortgageTerms};
use crate::types::{LoanStatus, PropertyId};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Property {
    pub id: PropertyId,
    pub name: String,
    mortgage: Option<MortgageTerms>,
    #[serde(skip)]
    pub events: EventStore,
}

/// what the display layer shows for a property's debt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DebtSummary {
    MortgageFree,
    Outstanding {
        loan_amount: Money,
        remaining: Money,
        bank_name: String,
        status: LoanStatus,
    },
    /// stored terms are corrupt; omit the debt figure
    Unavailable {
        reason: String,
    },
}

impl Property {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            mortgage: None,
            events: EventStore::new(),
        }
    }

    pub fn with_mortgage(name: impl Into<String>, terms: MortgageTerms) -> Result<Self> {
        let mut property = Self::new(name);
        property.set_mortgage(Some(terms))?;
        Ok(property)
    }

    pub fn mortgage(&self) -> Option<&MortgageTerms> {
        self.mortgage.as_ref()
    }

    pub fn is_mortgage_free(&self) -> bool {
        self.mortgage.is_none()
    }

    /// Apply the mortgage fields of a property save.
    ///
    /// Populated fields attach or replace the terms, empty fields remove
    /// them. Invalid fields leave the current terms untouched.
    pub fn save_mortgage(&mut self, fields: &MortgageFields) -> Result<()> {
        match fields.into_terms() {
            None => self.set_mortgage(None),
            Some(Ok(terms)) => self.set_mortgage(Some(terms)),
            Some(Err(err)) => {
                self.events.emit(Event::MortgageRejected {
                    property_id: self.id,
                    reason: err.to_string(),
                });
                Err(err)
            }
        }
    }

    /// replace the mortgage terms, validating new terms first
    pub fn set_mortgage(&mut self, terms: Option<MortgageTerms>) -> Result<()> {
        if let Some(terms) = &terms {
            terms.validate()?;
        }

        let event = match (&self.mortgage, &terms) {
            (None, None) => None,
            (None, Some(new)) => Some(Event::MortgageAttached {
                property_id: self.id,
                loan_amount: new.loan_amount,
                start_date: new.start_date,
                bank_name: new.bank_name.clone(),
            }),
            (Some(old), Some(new)) => Some(Event::MortgageReplaced {
                property_id: self.id,
                old_loan_amount: old.loan_amount,
                new_loan_amount: new.loan_amount,
                start_date: new.start_date,
            }),
            (Some(old), None) => Some(Event::MortgageRemoved {
                property_id: self.id,
                loan_amount: old.loan_amount,
            }),
        };

        self.mortgage = terms;
        if let Some(event) = event {
            self.events.emit(event);
        }
        Ok(())
    }

    /// full-precision remaining debt, `None` when mortgage-free
    pub fn remaining_debt(&self, as_of: NaiveDate) -> Option<Result<Money>> {
        self.mortgage
            .as_ref()
            .map(|terms| crate::payments::compute_remaining_balance(terms, as_of))
    }

    /// debt figure for display, degrading on corrupt terms
    pub fn debt_summary(&self, engine: &AmortizationEngine, as_of: NaiveDate) -> DebtSummary {
        let terms = match &self.mortgage {
            Some(terms) => terms,
            None => return DebtSummary::MortgageFree,
        };

        match engine.balance_as_of(terms, as_of) {
            Ok(snapshot) => DebtSummary::Outstanding {
                loan_amount: terms.loan_amount,
                remaining: snapshot.display_balance(engine.config().display_precision),
                bank_name: terms.bank_name.clone(),
                status: snapshot.status,
            },
            Err(err) => {
                warn!(property_id = %self.id, error = %err, "mortgage data corrupt, omitting debt");
                DebtSummary::Unavailable {
                    reason: err.to_string(),
                }
            }
        }
    }

    /// debt figure for display as of today on the given clock
    pub fn debt_summary_now(&self, engine: &AmortizationEngine, time: &SafeTimeProvider) -> DebtSummary {
        self.debt_summary(engine, clock::today(time, engine.config().time_basis))
    }
}
