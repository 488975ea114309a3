use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::calendar::{self, Months};
use crate::decimal::Money;
use crate::terms::MortgageTerms;
use crate::types::LoanStatus;

/// one payment that has posted against the loan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledPayment {
    pub payment_number: u32,
    pub payment_date: NaiveDate,
    pub beginning_balance: Money,
    pub payment_amount: Money,
    pub interest_portion: Money,
    pub principal_portion: Money,
    pub ending_balance: Money,
}

/// remaining balance with the history that produced it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceSnapshot {
    pub as_of: NaiveDate,
    pub original_amount: Money,
    pub remaining_balance: Money,
    pub payments_posted: u32,
    pub total_interest_paid: Money,
    pub total_principal_paid: Money,
    pub last_payment_date: Option<NaiveDate>,
    pub next_payment_date: Option<NaiveDate>,
    pub status: LoanStatus,
}

impl BalanceSnapshot {
    /// remaining balance rounded for display
    pub fn display_balance(&self, dp: u32) -> Money {
        self.remaining_balance.round_dp(dp)
    }
}

/// Month-by-month amortization steps posted on or before `as_of`.
///
/// Walks months from the start month through the `as_of` month and stops at
/// the first month whose payment date lies after `as_of`, or once the balance
/// is fully retired. A start-month payment dated before the start date is not
/// owed and is skipped. Terms must already be validated.
pub(crate) struct PostedSteps<'a> {
    terms: &'a MortgageTerms,
    months: Months,
    as_of: NaiveDate,
    payment: Money,
    balance: Money,
    number: u32,
    done: bool,
}

impl<'a> PostedSteps<'a> {
    pub(crate) fn new(terms: &'a MortgageTerms, as_of: NaiveDate) -> Self {
        Self::over(terms, Months::between(terms.start_date, as_of), as_of)
    }

    /// steps with no cut-off date, for projecting the loan forward
    pub(crate) fn unbounded(terms: &'a MortgageTerms) -> Self {
        Self::over(terms, Months::starting(terms.start_date), NaiveDate::MAX)
    }

    fn over(terms: &'a MortgageTerms, months: Months, as_of: NaiveDate) -> Self {
        Self {
            terms,
            months,
            as_of,
            payment: terms.monthly_payment(),
            balance: terms.loan_amount,
            number: 0,
            done: false,
        }
    }

    /// balance after the steps taken so far
    pub(crate) fn balance(&self) -> Money {
        self.balance
    }

    pub(crate) fn is_paid_off(&self) -> bool {
        !self.balance.is_positive()
    }
}

impl Iterator for PostedSteps<'_> {
    type Item = ScheduledPayment;

    fn next(&mut self) -> Option<ScheduledPayment> {
        if self.done {
            return None;
        }

        let payment_date = loop {
            let month = match self.months.next() {
                Some(month) => month,
                None => {
                    self.done = true;
                    return None;
                }
            };
            let date = calendar::payment_date(month, self.terms.payment_timing);
            if date >= self.terms.start_date {
                break date;
            }
        };

        if payment_date > self.as_of {
            // later months cannot have posted either
            self.done = true;
            return None;
        }

        let beginning_balance = self.balance;
        let interest_portion = self.terms.monthly_interest(beginning_balance);
        let mut principal_portion = self.payment - interest_portion;
        let mut ending_balance = beginning_balance - principal_portion;

        if !ending_balance.is_positive() {
            principal_portion = beginning_balance;
            ending_balance = Money::ZERO;
            self.done = true;
        }

        self.balance = ending_balance;
        self.number += 1;

        trace!(
            payment_number = self.number,
            %payment_date,
            %interest_portion,
            %principal_portion,
            %ending_balance,
            "amortization step"
        );

        Some(ScheduledPayment {
            payment_number: self.number,
            payment_date,
            beginning_balance,
            payment_amount: interest_portion + principal_portion,
            interest_portion,
            principal_portion,
            ending_balance,
        })
    }
}
