/// property debt - what the display layer shows per property
use mortgage_balance_rs::{
    AmortizationEngine, BalanceCache, DebtSummary, MortgageFields, PaymentTiming, Property,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let engine = AmortizationEngine::default();
    let cache = BalanceCache::from_config(engine.config());
    let today = mortgage_balance_rs::clock::today(
        &mortgage_balance_rs::clock::system_time(),
        engine.config().time_basis,
    );

    let mut financed = Property::new("Lindenstrasse 4");
    financed.save_mortgage(&MortgageFields {
        loan_amount: Some("320000".to_string()),
        start_date: Some("2021-07-01".to_string()),
        interest_rate: Some("1.9".to_string()),
        principal_rate: Some("3".to_string()),
        bank_name: Some("Volksbank".to_string()),
        payment_timing: Some(PaymentTiming::EndOfMonth),
    })?;

    let paid_for = Property::new("Gartenweg 7");

    let mut rejected = Property::new("Hauptstrasse 12");
    if let Err(err) = rejected.save_mortgage(&MortgageFields {
        loan_amount: Some("0".to_string()),
        start_date: Some("2022-02-01".to_string()),
        interest_rate: Some("2.5".to_string()),
        ..Default::default()
    }) {
        println!("rejected save for {}: {}", rejected.name, err);
    }

    for property in [&financed, &paid_for, &rejected] {
        match property.debt_summary(&engine, today) {
            DebtSummary::MortgageFree => println!("{}: mortgage-free", property.name),
            DebtSummary::Outstanding { loan_amount, remaining, bank_name, .. } => {
                println!("{}: {} of {} remaining at {}", property.name, remaining, loan_amount, bank_name)
            }
            DebtSummary::Unavailable { reason } => println!("{}: debt unavailable ({})", property.name, reason),
        }
    }

    if let Some(terms) = financed.mortgage() {
        let balance = cache.remaining_balance(terms, today)?;
        println!("cached balance for {}: {}", financed.name, balance.round_currency());
    }

    for event in financed.events.events() {
        println!("{:?}", event);
    }

    Ok(())
}
