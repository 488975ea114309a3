//! Memoized balance lookups.
//!
//! The engine is cheap and deterministic, so a cached balance is always the
//! value the engine would compute. Keys are the full terms plus the calendar
//! day; errors are returned to the caller and never stored.

use chrono::NaiveDate;
use moka::sync::Cache;

use crate::config::EngineConfig;
use crate::decimal::Money;
use crate::errors::Result;
use crate::payments::compute_remaining_balance;
use crate::terms::MortgageTerms;

/// Thread-safe cache of remaining balances keyed by `(terms, as_of)`.
#[derive(Clone)]
pub struct BalanceCache {
    cache: Cache<(MortgageTerms, NaiveDate), Money>,
}

impl BalanceCache {
    pub fn new(max_capacity: u64) -> Self {
        Self {
            cache: Cache::builder().max_capacity(max_capacity).build(),
        }
    }

    pub fn from_config(config: &EngineConfig) -> Self {
        Self::new(config.cache_capacity)
    }

    /// remaining balance, computed once per distinct key
    pub fn remaining_balance(&self, terms: &MortgageTerms, as_of: NaiveDate) -> Result<Money> {
        let key = (terms.clone(), as_of);
        if let Some(balance) = self.cache.get(&key) {
            return Ok(balance);
        }

        let balance = compute_remaining_balance(terms, as_of)?;
        self.cache.insert(key, balance);
        Ok(balance)
    }

    pub fn contains(&self, terms: &MortgageTerms, as_of: NaiveDate) -> bool {
        self.cache.contains_key(&(terms.clone(), as_of))
    }

    pub fn invalidate_all(&self) {
        self.cache.invalidate_all();
    }

    pub fn entry_count(&self) -> u64 {
        self.cache.run_pending_tasks();
        self.cache.entry_count()
    }
}

impl Default for BalanceCache {
    fn default() -> Self {
        Self::from_config(&EngineConfig::default())
    }
}
