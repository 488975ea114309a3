use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MortgageError {
    #[error("invalid mortgage terms: {field} {reason}")]
    InvalidTerms {
        field: String,
        reason: String,
    },

    #[error("invalid date: {message}")]
    InvalidDate {
        message: String,
    },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration {
        message: String,
    },

    #[error("serialization error: {message}")]
    Serialization {
        message: String,
    },
}

impl MortgageError {
    pub fn invalid_terms(field: &str, reason: impl Into<String>) -> Self {
        MortgageError::InvalidTerms {
            field: field.to_string(),
            reason: reason.into(),
        }
    }

    /// true when the error means the stored mortgage data is unusable
    pub fn is_invalid_terms(&self) -> bool {
        matches!(self, MortgageError::InvalidTerms { .. })
    }
}

impl From<serde_json::Error> for MortgageError {
    fn from(e: serde_json::Error) -> Self {
        MortgageError::Serialization {
            message: e.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, MortgageError>;
