use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::calendar;
use crate::decimal::{Money, Rate};
use crate::errors::{MortgageError, Result};
use crate::types::PaymentTiming;

/// largest loan amount accepted by [`MortgageTerms::validate`]
pub const MAX_LOAN_AMOUNT: Decimal = dec!(1000000000000000);

/// largest annual rate, in percent, accepted by [`MortgageTerms::validate`]
pub const MAX_RATE_PERCENT: Decimal = dec!(100000);

/// terms of a property's single active loan
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MortgageTerms {
    /// original principal disbursed
    pub loan_amount: Money,
    /// day the loan is disbursed; the first payment falls on or after it
    pub start_date: NaiveDate,
    /// annual nominal interest rate
    pub interest_rate: Rate,
    /// annual nominal repayment rate
    pub principal_rate: Rate,
    #[serde(default)]
    pub bank_name: String,
    #[serde(default)]
    pub payment_timing: PaymentTiming,
}

impl MortgageTerms {
    /// create terms, rejecting invariant violations
    pub fn new(
        loan_amount: Money,
        start_date: NaiveDate,
        interest_rate: Rate,
        principal_rate: Rate,
        bank_name: impl Into<String>,
        payment_timing: PaymentTiming,
    ) -> Result<Self> {
        let terms = Self {
            loan_amount,
            start_date,
            interest_rate,
            principal_rate,
            bank_name: bank_name.into(),
            payment_timing,
        };
        terms.validate()?;
        Ok(terms)
    }

    pub fn builder() -> MortgageTermsBuilder {
        MortgageTermsBuilder::new()
    }

    /// check the loan invariants
    pub fn validate(&self) -> Result<()> {
        if !self.loan_amount.is_positive() {
            return Err(MortgageError::invalid_terms(
                "loanAmount",
                format!("must be positive, got {}", self.loan_amount),
            ));
        }

        if self.interest_rate.is_negative() {
            return Err(MortgageError::invalid_terms(
                "interestRate",
                format!("must not be negative, got {}", self.interest_rate),
            ));
        }

        if self.principal_rate.is_negative() {
            return Err(MortgageError::invalid_terms(
                "principalRate",
                format!("must not be negative, got {}", self.principal_rate),
            ));
        }

        if self.loan_amount.as_decimal() > MAX_LOAN_AMOUNT {
            return Err(MortgageError::invalid_terms(
                "loanAmount",
                format!("must not exceed {}, got {}", MAX_LOAN_AMOUNT, self.loan_amount),
            ));
        }

        for (field, rate) in [("interestRate", self.interest_rate), ("principalRate", self.principal_rate)] {
            if rate.as_percent() > MAX_RATE_PERCENT {
                return Err(MortgageError::invalid_terms(
                    field,
                    format!("must not exceed {}%, got {}", MAX_RATE_PERCENT, rate),
                ));
            }
        }

        if self.checked_monthly_payment().is_none() {
            return Err(MortgageError::invalid_terms(
                "loanAmount",
                "monthly payment is out of range",
            ));
        }

        Ok(())
    }

    fn checked_monthly_payment(&self) -> Option<Decimal> {
        let total = self.interest_rate.as_percent().checked_add(self.principal_rate.as_percent())?;
        self.loan_amount.as_decimal().checked_mul(total)?.checked_div(dec!(1200))
    }

    /// interest rate / 100 / 12
    pub fn monthly_interest_factor(&self) -> Decimal {
        self.interest_rate.monthly_fraction()
    }

    /// (interest rate + principal rate) / 100
    pub fn annual_total_rate(&self) -> Decimal {
        (self.interest_rate + self.principal_rate).as_fraction()
    }

    /// fixed installment for the life of the loan; terms must be validated
    pub fn monthly_payment(&self) -> Money {
        let total = (self.interest_rate + self.principal_rate).as_percent();
        Money::from_decimal(self.loan_amount.as_decimal() * total / dec!(1200))
    }

    /// one month of interest on `balance`.
    ///
    /// Same value as `balance * monthly_interest_factor()`, evaluated in the
    /// order used by [`MortgageTerms::monthly_payment`] so that a loan with a
    /// zero principal rate has an interest part exactly equal to its payment.
    pub fn monthly_interest(&self, balance: Money) -> Money {
        Money::from_decimal(balance.as_decimal() * self.interest_rate.as_percent() / dec!(1200))
    }

    /// first payment date on or after the start date
    pub fn first_payment_date(&self) -> NaiveDate {
        let in_start_month = calendar::payment_date(self.start_date, self.payment_timing);
        if in_start_month >= self.start_date {
            return in_start_month;
        }
        calendar::next_month(self.start_date)
            .map(|month| calendar::payment_date(month, self.payment_timing))
            .unwrap_or(NaiveDate::MAX)
    }
}

/// builder for mortgage terms
#[derive(Debug, Default)]
pub struct MortgageTermsBuilder {
    loan_amount: Option<Money>,
    start_date: Option<NaiveDate>,
    interest_rate: Option<Rate>,
    principal_rate: Option<Rate>,
    bank_name: Option<String>,
    payment_timing: Option<PaymentTiming>,
}

impl MortgageTermsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn loan_amount(mut self, amount: Money) -> Self {
        self.loan_amount = Some(amount);
        self
    }

    pub fn start_date(mut self, date: NaiveDate) -> Self {
        self.start_date = Some(date);
        self
    }

    pub fn interest_rate(mut self, rate: Rate) -> Self {
        self.interest_rate = Some(rate);
        self
    }

    pub fn principal_rate(mut self, rate: Rate) -> Self {
        self.principal_rate = Some(rate);
        self
    }

    pub fn bank_name(mut self, name: impl Into<String>) -> Self {
        self.bank_name = Some(name.into());
        self
    }

    pub fn payment_timing(mut self, timing: PaymentTiming) -> Self {
        self.payment_timing = Some(timing);
        self
    }

    pub fn build(self) -> Result<MortgageTerms> {
        let loan_amount = self
            .loan_amount
            .ok_or_else(|| MortgageError::invalid_terms("loanAmount", "is required"))?;
        let start_date = self
            .start_date
            .ok_or_else(|| MortgageError::invalid_terms("startDate", "is required"))?;
        let interest_rate = self
            .interest_rate
            .ok_or_else(|| MortgageError::invalid_terms("interestRate", "is required"))?;

        MortgageTerms::new(
            loan_amount,
            start_date,
            interest_rate,
            self.principal_rate.unwrap_or(Rate::ZERO),
            self.bank_name.unwrap_or_default(),
            self.payment_timing.unwrap_or_default(),
        )
    }
}

/// mortgage fields as they arrive with a property save
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MortgageFields {
    pub loan_amount: Option<String>,
    pub start_date: Option<String>,
    pub interest_rate: Option<String>,
    pub principal_rate: Option<String>,
    pub bank_name: Option<String>,
    pub payment_timing: Option<PaymentTiming>,
}

impl MortgageFields {
    /// true when any amount, rate or date field carries a value
    pub fn is_populated(&self) -> bool {
        [
            &self.loan_amount,
            &self.start_date,
            &self.interest_rate,
            &self.principal_rate,
        ]
        .iter()
        .any(|field| present(field).is_some())
    }

    /// `None` for a mortgage-free save, otherwise the validated terms
    pub fn into_terms(&self) -> Option<Result<MortgageTerms>> {
        if !self.is_populated() {
            return None;
        }
        Some(self.parse())
    }

    fn parse(&self) -> Result<MortgageTerms> {
        let loan_amount = present(&self.loan_amount)
            .ok_or_else(|| MortgageError::invalid_terms("loanAmount", "is required"))
            .and_then(|raw| {
                Money::from_str(raw)
                    .map_err(|_| MortgageError::invalid_terms("loanAmount", format!("{:?} is not a number", raw)))
            })?;

        let start_date = present(&self.start_date)
            .ok_or_else(|| MortgageError::invalid_terms("startDate", "is required"))
            .and_then(|s| {
                calendar::parse_date(s).map_err(|e| MortgageError::invalid_terms("startDate", e.to_string()))
            })?;

        let interest_rate = Rate::from_percent(required_decimal("interestRate", &self.interest_rate)?);

        let principal_rate = match present(&self.principal_rate) {
            Some(_) => Rate::from_percent(required_decimal("principalRate", &self.principal_rate)?),
            None => Rate::ZERO,
        };

        MortgageTerms::new(
            loan_amount,
            start_date,
            interest_rate,
            principal_rate,
            present(&self.bank_name).unwrap_or_default(),
            self.payment_timing.unwrap_or_default(),
        )
    }
}

fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

fn required_decimal(name: &str, field: &Option<String>) -> Result<Decimal> {
    let raw = present(field).ok_or_else(|| MortgageError::invalid_terms(name, "is required"))?;
    Decimal::from_str(raw).map_err(|_| MortgageError::invalid_terms(name, format!("{:?} is not a number", raw)))
}
