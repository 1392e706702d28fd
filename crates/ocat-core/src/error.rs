use thiserror::Error;

use crate::models::risk::RiskLevel;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    #[error("score {0} is outside range [0, 5]")]
    ScoreOutOfRange(u8),

    #[error("risk level '{actual}' does not match score {score} (expected '{expected}')")]
    RiskMismatch {
        score: u8,
        expected: RiskLevel,
        actual: RiskLevel,
    },

    #[error("invalid risk level: {0}")]
    InvalidRiskLevel(String),
}
