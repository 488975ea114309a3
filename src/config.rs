use serde::{Deserialize, Serialize};

use crate::decimal::CURRENCY_DP;
use crate::errors::{MortgageError, Result};
use crate::types::TimeBasis;

/// engine configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// decimal places used when a balance is shown
    pub display_precision: u32,
    /// calendar used to turn "now" into a day
    pub time_basis: TimeBasis,
    /// upper bound on months searched by the payoff projection
    pub max_months: u32,
    /// entries kept by the balance cache
    pub cache_capacity: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            display_precision: CURRENCY_DP,
            time_basis: TimeBasis::Local,
            max_months: 1200,
            cache_capacity: 1024,
        }
    }
}

impl EngineConfig {
    /// parse and validate a json document; missing keys take defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let config: EngineConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<()> {
        if self.display_precision > 8 {
            return Err(MortgageError::InvalidConfiguration {
                message: format!("display_precision must be at most 8, got {}", self.display_precision),
            });
        }

        if self.max_months == 0 {
            return Err(MortgageError::InvalidConfiguration {
                message: "max_months must be positive".to_string(),
            });
        }

        Ok(())
    }

    /// configuration that reads "now" in UTC
    pub fn utc() -> Self {
        Self {
            time_basis: TimeBasis::Utc,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_from_empty_document() {
        let config = EngineConfig::from_json("{}").unwrap();
        assert_eq!(config, EngineConfig::default());
        assert_eq!(config.display_precision, 2);
        assert_eq!(config.time_basis, TimeBasis::Local);
    }

    #[test]
    fn test_partial_document() {
        let config = EngineConfig::from_json(r#"{"time_basis": "utc", "max_months": 480}"#).unwrap();
        assert_eq!(config.time_basis, TimeBasis::Utc);
        assert_eq!(config.max_months, 480);
        assert_eq!(config.cache_capacity, 1024);
    }

    #[test]
    fn test_invalid_values_rejected() {
        let err = EngineConfig::from_json(r#"{"display_precision": 12}"#).unwrap_err();
        assert!(matches!(err, MortgageError::InvalidConfiguration { .. }));

        assert!(EngineConfig::from_json(r#"{"max_months": 0}"#).is_err());
        assert!(matches!(
            EngineConfig::from_json(r#"{"time_basis": "mars"}"#),
            Err(MortgageError::Serialization { .. })
        ));
    }

    #[test]
    fn test_json_round_trip() {
        let json = EngineConfig::utc().to_json().unwrap();
        assert_eq!(EngineConfig::from_json(&json).unwrap(), EngineConfig::utc());
    }
}
