//! ocat-instruments
//!
//! Questionnaire definitions and the scoring rule. Pure data with no database
//! or HTTP dependency. Each instrument lists its questions, the points each
//! answer contributes, and how a set of answers turns into a score and a
//! risk tier.

pub mod error;
pub mod instruments;
pub mod scoring;

use error::InstrumentError;
use scoring::{AnswerEntry, Question, ScoreSummary, ValidationError, score_answers};

pub use instruments::cat_behavioral::CAT_BEHAVIORAL_INSTRUMENT_TYPE;

/// Trait implemented by each questionnaire.
pub trait Instrument: Send + Sync {
    /// Integer tag stored as `instrumentType` on every assessment.
    fn instrument_type(&self) -> i32;

    /// Human-readable name (e.g., "Cat Behavioral Instrument").
    fn name(&self) -> &str;

    /// The questions in presentation order.
    fn questions(&self) -> &[Question];

    /// Check that every question is answered with one of its options.
    fn validate_answers(&self, answers: &[AnswerEntry]) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        for question in self.questions() {
            match answers.iter().find(|a| a.question_id == question.id) {
                None => errors.push(ValidationError {
                    question_id: question.id.clone(),
                    message: "This question is required.".to_string(),
                }),
                Some(entry) if question.points_for(&entry.value).is_none() => {
                    errors.push(ValidationError {
                        question_id: question.id.clone(),
                        message: format!(
                            "{}: '{}' is not a valid answer",
                            question.prompt, entry.value
                        ),
                    });
                }
                Some(_) => {}
            }
        }
        errors
    }

    /// Score a set of answers. Unanswered questions, and answers that match
    /// no option, contribute 0.
    fn score(&self, answers: &[AnswerEntry]) -> ScoreSummary {
        let points: Vec<Option<u8>> = self
            .questions()
            .iter()
            .map(|question| {
                answers
                    .iter()
                    .find(|a| a.question_id == question.id)
                    .and_then(|a| question.points_for(&a.value))
            })
            .collect();
        score_answers(&points)
    }
}

/// Return all registered instruments.
pub fn all_instruments() -> Vec<Box<dyn Instrument>> {
    vec![Box::new(instruments::cat_behavioral::CatBehavioral)]
}

/// Look up an instrument by its type tag.
pub fn get_instrument(instrument_type: i32) -> Option<Box<dyn Instrument>> {
    all_instruments()
        .into_iter()
        .find(|i| i.instrument_type() == instrument_type)
}

/// Like [`get_instrument`], but an unknown type is an error.
pub fn require_instrument(instrument_type: i32) -> Result<Box<dyn Instrument>, InstrumentError> {
    get_instrument(instrument_type).ok_or(InstrumentError::UnknownInstrument(instrument_type))
}
