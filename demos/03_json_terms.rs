/// json terms - terms as stored by the persistence layer
use mortgage_balance_rs::calendar::parse_date;
use mortgage_balance_rs::{AmortizationEngine, EngineConfig, MortgageTerms};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = EngineConfig::from_json(r#"{ "display_precision": 2, "time_basis": "utc" }"#)?;
    let engine = AmortizationEngine::new(config);

    let stored = r#"{
        "loanAmount": "250000",
        "startDate": "2024-01-01",
        "interestRate": "3.5",
        "principalRate": "2.0",
        "bankName": "Sparkasse",
        "paymentTiming": "END_OF_MONTH"
    }"#;
    let terms: MortgageTerms = serde_json::from_str(stored)?;

    let as_of = parse_date("2024-06-15")?;
    let schedule = engine.posted_schedule(&terms, as_of)?;
    println!("{}", serde_json::to_string_pretty(&schedule)?);

    let snapshot = engine.balance_as_of(&terms, as_of)?;
    println!("{}", serde_json::to_string_pretty(&snapshot)?);

    Ok(())
}
