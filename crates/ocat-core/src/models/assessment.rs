use jiff::civil::Date;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::risk::{MAX_SCORE, RiskLevel};
use crate::error::CoreError;

/// A persisted behavioral assessment.
///
/// Never updated in place. Removal sets `deleted_at`; the row itself stays.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Assessment {
    #[ts(type = "number")]
    pub id: i64,
    pub cat_name: String,
    pub cat_date_of_birth: Date,
    pub instrument_type: i32,
    pub score: u8,
    pub risk_level: RiskLevel,
    pub created_at: jiff::Timestamp,
    #[serde(default)]
    pub deleted_at: Option<jiff::Timestamp>,
}

/// The validated input of a create operation. Every field is present and
/// `risk_level` agrees with `score`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct NewAssessment {
    pub cat_name: String,
    pub cat_date_of_birth: Date,
    pub instrument_type: i32,
    pub score: u8,
    pub risk_level: RiskLevel,
}

impl NewAssessment {
    /// Build an input whose risk level is derived from `score`.
    pub fn scored(
        cat_name: impl Into<String>,
        cat_date_of_birth: Date,
        instrument_type: i32,
        score: u8,
    ) -> Self {
        Self {
            cat_name: cat_name.into(),
            cat_date_of_birth,
            instrument_type,
            score,
            risk_level: RiskLevel::from_score(score),
        }
    }

    /// Check the data-model invariants: non-blank name, score in range,
    /// risk tier consistent with the score.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.cat_name.trim().is_empty() {
            return Err(CoreError::MissingField("catName"));
        }
        if self.score > MAX_SCORE {
            return Err(CoreError::ScoreOutOfRange(self.score));
        }
        let expected = RiskLevel::from_score(self.score);
        if self.risk_level != expected {
            return Err(CoreError::RiskMismatch {
                score: self.score,
                expected,
                actual: self.risk_level,
            });
        }
        Ok(())
    }
}

/// Wire shape of a create request. Fields are optional here so that an
/// absent field is reported by name instead of as a parse failure.
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(export)]
pub struct CreateAssessmentRequest {
    pub cat_name: Option<String>,
    pub cat_date_of_birth: Option<Date>,
    pub instrument_type: Option<i32>,
    pub score: Option<u8>,
    pub risk_level: Option<RiskLevel>,
}

impl TryFrom<CreateAssessmentRequest> for NewAssessment {
    type Error = CoreError;

    fn try_from(req: CreateAssessmentRequest) -> Result<Self, Self::Error> {
        let new = NewAssessment {
            cat_name: req
                .cat_name
                .filter(|name| !name.trim().is_empty())
                .ok_or(CoreError::MissingField("catName"))?,
            cat_date_of_birth: req
                .cat_date_of_birth
                .ok_or(CoreError::MissingField("catDateOfBirth"))?,
            instrument_type: req
                .instrument_type
                .ok_or(CoreError::MissingField("instrumentType"))?,
            score: req.score.ok_or(CoreError::MissingField("score"))?,
            risk_level: req
                .risk_level
                .ok_or(CoreError::MissingField("riskLevel"))?,
        };
        new.validate()?;
        Ok(new)
    }
}
