//! Property-based tests for the remaining-balance engine.
//!
//! - balance never increases as the as-of day moves forward
//! - balance is never negative
//! - before the first payment date the balance is the loan amount
//! - the first posted payment falls on or after the start date
//! - a loan whose payments exceed its principal reports exactly zero
//! - end-of-month loans drop by one step's principal on the month's last day

use chrono::{Datelike, Days, NaiveDate};
use mortgage_balance_rs::calendar;
use mortgage_balance_rs::{
    compute_remaining_balance, AmortizationEngine, Money, MortgageTerms, PaymentTiming, Rate,
};
use proptest::prelude::*;
use rust_decimal::Decimal;

/// loan amounts 1,000.00 to 2,000,000.00
fn loan_amount() -> impl Strategy<Value = Money> {
    (100_000i64..200_000_000i64).prop_map(|cents| Money::from_minor(cents, 2))
}

/// rates 0.00% to 15.00%
fn rate() -> impl Strategy<Value = Rate> {
    (0i64..=1_500i64).prop_map(|bps| Rate::from_percent(Decimal::new(bps, 2)))
}

fn timing() -> impl Strategy<Value = PaymentTiming> {
    prop_oneof![Just(PaymentTiming::StartOfMonth), Just(PaymentTiming::EndOfMonth)]
}

fn start_date() -> impl Strategy<Value = NaiveDate> {
    (1990i32..2030, 1u32..=12, 1u32..=28).prop_map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap())
}

fn terms() -> impl Strategy<Value = MortgageTerms> {
    (loan_amount(), start_date(), rate(), rate(), timing()).prop_map(|(amount, start, interest, principal, timing)| {
        MortgageTerms::builder()
            .loan_amount(amount)
            .start_date(start)
            .interest_rate(interest)
            .principal_rate(principal)
            .payment_timing(timing)
            .build()
            .unwrap()
    })
}

/// offset in days from the start date, up to ~40 years either side
fn offset_days() -> impl Strategy<Value = i64> {
    -400i64..15_000
}

fn shift(date: NaiveDate, days: i64) -> NaiveDate {
    if days >= 0 {
        date + Days::new(days as u64)
    } else {
        date - Days::new(days.unsigned_abs())
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_balance_never_increases(t in terms(), a in offset_days(), gap in 0i64..2_000) {
        let d1 = shift(t.start_date, a);
        let d2 = shift(d1, gap);
        let b1 = compute_remaining_balance(&t, d1).unwrap();
        let b2 = compute_remaining_balance(&t, d2).unwrap();
        prop_assert!(b1 >= b2, "{} on {} < {} on {}", b1, d1, b2, d2);
    }

    #[test]
    fn prop_balance_never_negative(t in terms(), a in offset_days()) {
        let balance = compute_remaining_balance(&t, shift(t.start_date, a)).unwrap();
        prop_assert!(!balance.is_negative());
        prop_assert!(balance <= t.loan_amount);
    }

    #[test]
    fn prop_before_first_payment_is_loan_amount(t in terms(), back in 1i64..5_000) {
        let as_of = shift(t.first_payment_date(), -back);
        prop_assert_eq!(compute_remaining_balance(&t, as_of).unwrap(), t.loan_amount);
    }

    #[test]
    fn prop_first_payment_not_before_start(t in terms(), ahead in 0i64..400) {
        let engine = AmortizationEngine::default();
        let schedule = engine.posted_schedule(&t, shift(t.start_date, ahead)).unwrap();
        if let Some(first) = schedule.first() {
            prop_assert!(first.payment_date >= t.start_date);
            prop_assert_eq!(first.payment_date, t.first_payment_date());
            prop_assert_eq!(first.beginning_balance, t.loan_amount);
        }
    }

    #[test]
    fn prop_fast_repayment_floors_at_zero(
        amount in loan_amount(),
        start in start_date(),
        interest in rate(),
        months in 1u32..24,
        extra in 1u32..48,
    ) {
        // payment covers the whole principal within `months` payments
        let t = MortgageTerms::builder()
            .loan_amount(amount)
            .start_date(start)
            .interest_rate(interest)
            .principal_rate(Rate::from_percent(Decimal::from(1200 / months + 1)))
            .build()
            .unwrap();

        let mut as_of = calendar::month_start(start);
        for _ in 0..(months + extra) {
            as_of = calendar::next_month(as_of).unwrap();
        }
        prop_assert_eq!(compute_remaining_balance(&t, as_of).unwrap(), Money::ZERO);
    }

    #[test]
    fn prop_end_of_month_boundary(t in terms(), months_in in 0u32..240) {
        let t = MortgageTerms { payment_timing: PaymentTiming::EndOfMonth, ..t };

        let mut month = calendar::month_start(t.start_date);
        for _ in 0..months_in {
            month = calendar::next_month(month).unwrap();
        }
        let last_day = calendar::month_end(month);
        let day_before = last_day.pred_opt().unwrap();
        prop_assert_eq!(last_day.day(), calendar::days_in_month(last_day.year(), last_day.month()));

        let before = compute_remaining_balance(&t, day_before).unwrap();
        let on = compute_remaining_balance(&t, last_day).unwrap();

        let engine = AmortizationEngine::default();
        let schedule = engine.posted_schedule(&t, last_day).unwrap();
        let step = schedule.last().unwrap();

        if before.is_zero() {
            prop_assert_eq!(on, Money::ZERO);
        } else {
            prop_assert_eq!(step.payment_date, last_day);
            prop_assert_eq!(step.beginning_balance, before);
            prop_assert_eq!(step.ending_balance, on);
            prop_assert_eq!((before - on).round_dp(12), step.principal_portion.round_dp(12));
        }
    }
}
