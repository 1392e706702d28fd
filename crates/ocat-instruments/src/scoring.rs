use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

use ocat_core::models::risk::RiskLevel;

/// One selectable answer of a single-choice question.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AnswerOption {
    pub label: String,
    /// Value submitted by the form for this option.
    pub value: String,
    /// Points contributed to the score (0 or 1).
    pub points: u8,
}

/// A required single-choice question within an instrument.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Question {
    pub id: String,
    pub prompt: String,
    pub options: Vec<AnswerOption>,
}

impl Question {
    /// Points for a submitted option value, `None` if no option matches.
    pub fn points_for(&self, value: &str) -> Option<u8> {
        self.options
            .iter()
            .find(|o| o.value == value)
            .map(|o| o.points)
    }
}

/// An answer provided by the user for scoring or validation.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AnswerEntry {
    pub question_id: String,
    pub value: String,
}

/// Result of applying the scoring rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ScoreSummary {
    pub score: u8,
    pub risk_level: RiskLevel,
}

/// Sum polarity-mapped answers and classify the result.
///
/// Missing answers count as 0. Values are expected to be 0 or 1; anything
/// else is the caller's contract violation and is summed as given.
pub fn score_answers(answers: &[Option<u8>]) -> ScoreSummary {
    let score = answers
        .iter()
        .map(|a| a.unwrap_or(0))
        .fold(0u8, u8::saturating_add);

    ScoreSummary {
        score,
        risk_level: RiskLevel::from_score(score),
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, TS, Error)]
#[ts(export)]
#[error("{message}")]
pub struct ValidationError {
    pub question_id: String,
    pub message: String,
}
