use chrono::NaiveDate;
use hourglass_rs::SafeTimeProvider;
use tracing::debug;

use crate::calendar;
use crate::clock;
use crate::config::EngineConfig;
use crate::decimal::Money;
use crate::errors::Result;
use crate::payments::schedule::{BalanceSnapshot, PostedSteps, ScheduledPayment};
use crate::terms::MortgageTerms;
use crate::types::LoanStatus;

/// Remaining principal of `terms` as of the calendar day `as_of`.
///
/// Simulates every monthly payment whose payment date is on or before
/// `as_of`, starting with the first payment date on or after the start date.
/// The result keeps full precision
/// and is never negative; round it for display.
pub fn compute_remaining_balance(terms: &MortgageTerms, as_of: NaiveDate) -> Result<Money> {
    terms.validate()?;

    let mut steps = PostedSteps::new(terms, as_of);
    let posted = steps.by_ref().count();
    let balance = steps.balance();

    debug!(
        loan_amount = %terms.loan_amount,
        start_date = %terms.start_date,
        timing = ?terms.payment_timing,
        %as_of,
        posted,
        %balance,
        "computed remaining balance"
    );

    Ok(balance)
}

/// amortization engine carrying display and projection settings
#[derive(Debug, Clone, Default)]
pub struct AmortizationEngine {
    config: EngineConfig,
}

impl AmortizationEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// full-precision remaining balance
    pub fn remaining_balance(&self, terms: &MortgageTerms, as_of: NaiveDate) -> Result<Money> {
        compute_remaining_balance(terms, as_of)
    }

    /// remaining balance rounded to the configured display precision
    pub fn display_balance(&self, terms: &MortgageTerms, as_of: NaiveDate) -> Result<Money> {
        Ok(self.remaining_balance(terms, as_of)?.round_dp(self.config.display_precision))
    }

    /// remaining balance as of today on the given clock
    pub fn remaining_balance_now(&self, terms: &MortgageTerms, time: &SafeTimeProvider) -> Result<Money> {
        self.remaining_balance(terms, clock::today(time, self.config.time_basis))
    }

    /// remaining balance together with the payment history behind it
    pub fn balance_as_of(&self, terms: &MortgageTerms, as_of: NaiveDate) -> Result<BalanceSnapshot> {
        terms.validate()?;

        let mut steps = PostedSteps::new(terms, as_of);
        let mut payments_posted = 0;
        let mut total_interest_paid = Money::ZERO;
        let mut total_principal_paid = Money::ZERO;
        let mut last_payment_date = None;

        for step in steps.by_ref() {
            payments_posted += 1;
            total_interest_paid += step.interest_portion;
            total_principal_paid += step.principal_portion;
            last_payment_date = Some(step.payment_date);
        }

        let remaining_balance = steps.balance();
        let status = if steps.is_paid_off() {
            LoanStatus::PaidOff
        } else if payments_posted == 0 {
            LoanStatus::NotStarted
        } else {
            LoanStatus::Amortizing
        };

        let next_payment_date = match (status, last_payment_date) {
            (LoanStatus::PaidOff, _) => None,
            (_, Some(last)) => {
                calendar::next_month(last).map(|month| calendar::payment_date(month, terms.payment_timing))
            }
            (_, None) => Some(terms.first_payment_date()),
        };

        Ok(BalanceSnapshot {
            as_of,
            original_amount: terms.loan_amount,
            remaining_balance,
            payments_posted,
            total_interest_paid,
            total_principal_paid,
            last_payment_date,
            next_payment_date,
            status,
        })
    }

    /// every payment posted on or before `as_of`
    pub fn posted_schedule(&self, terms: &MortgageTerms, as_of: NaiveDate) -> Result<Vec<ScheduledPayment>> {
        terms.validate()?;
        Ok(PostedSteps::new(terms, as_of).collect())
    }

    /// Payment date of the step that retires the loan.
    ///
    /// `None` when the payment never covers more than the interest, or when
    /// payoff lies beyond `max_months` payments.
    pub fn projected_payoff(&self, terms: &MortgageTerms) -> Result<Option<NaiveDate>> {
        terms.validate()?;

        if terms.monthly_payment() <= terms.monthly_interest(terms.loan_amount) {
            return Ok(None);
        }

        let mut steps = PostedSteps::unbounded(terms);
        let last = steps
            .by_ref()
            .take(self.config.max_months as usize)
            .last();

        Ok(last.filter(|_| steps.is_paid_off()).map(|step| step.payment_date))
    }
}
