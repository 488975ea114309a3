/// time control - deterministic "today" with a controlled clock
use mortgage_balance_rs::chrono::{Duration, NaiveDate, TimeZone, Utc};
use mortgage_balance_rs::{
    AmortizationEngine, Decimal, EngineConfig, Money, MortgageTerms, PaymentTiming, Rate,
    SafeTimeProvider, TimeSource,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("=== time control example ===\n");

    let time = SafeTimeProvider::new(TimeSource::Test(
        Utc.with_ymd_and_hms(2024, 1, 30, 12, 0, 0).unwrap(),
    ));
    let controller = time.test_control().unwrap();

    let terms = MortgageTerms::builder()
        .loan_amount(Money::from_major(180_000))
        .start_date(NaiveDate::from_ymd_opt(2024, 1, 15).ok_or("bad date")?)
        .interest_rate(Rate::from_percent(Decimal::new(41, 1)))
        .principal_rate(Rate::from_percent(Decimal::from(2)))
        .payment_timing(PaymentTiming::EndOfMonth)
        .build()?;

    let engine = AmortizationEngine::new(EngineConfig::utc());

    // step across the end-of-month boundary one day at a time
    for _ in 0..4 {
        let balance = engine.remaining_balance_now(&terms, &time)?;
        println!("{}: {}", time.now().format("%Y-%m-%d"), balance.round_currency());
        controller.advance(Duration::days(1));
    }

    controller.advance(Duration::days(365));
    let snapshot = engine.balance_as_of(&terms, time.now().date_naive())?;
    println!(
        "\n{}: {} after {} payments ({:?}), next due {:?}",
        snapshot.as_of,
        snapshot.display_balance(2),
        snapshot.payments_posted,
        snapshot.status,
        snapshot.next_payment_date
    );

    if let Some(payoff) = engine.projected_payoff(&terms)? {
        println!("projected payoff: {}", payoff);
    }

    Ok(())
}
