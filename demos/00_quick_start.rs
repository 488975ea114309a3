/// quick start - remaining balance of a single mortgage
use mortgage_balance_rs::chrono::NaiveDate;
use mortgage_balance_rs::{compute_remaining_balance, Decimal, Money, MortgageTerms, PaymentTiming, Rate};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let terms = MortgageTerms::builder()
        .loan_amount(Money::from_major(250_000))
        .start_date(NaiveDate::from_ymd_opt(2024, 1, 1).ok_or("bad date")?)
        .interest_rate(Rate::from_percent(Decimal::new(35, 1)))
        .principal_rate(Rate::from_percent(Decimal::new(20, 1)))
        .bank_name("Sparkasse")
        .payment_timing(PaymentTiming::StartOfMonth)
        .build()?;

    println!("monthly payment: {}", terms.monthly_payment().round_currency());

    for day in ["2023-12-31", "2024-01-01", "2025-01-01", "2034-01-01"] {
        let as_of = mortgage_balance_rs::calendar::parse_date(day)?;
        let balance = compute_remaining_balance(&terms, as_of)?;
        println!("{}: {}", as_of, balance.round_currency());
    }

    Ok(())
}
