use std::collections::BTreeMap;

use jiff::civil::Date;
use serde::Serialize;

use ocat_core::models::assessment::NewAssessment;
use ocat_instruments::Instrument;
use ocat_instruments::scoring::AnswerEntry;

pub const CAT_NAME_FIELD: &str = "catName";
pub const DATE_OF_BIRTH_FIELD: &str = "catDateOfBirth";

/// Shown when a submission fails without a usable message.
pub const SUBMIT_FAILED: &str = "Submit Failed";

/// Raw values of a submitted form. Kept as typed so a re-rendered form can
/// show them back to the user.
#[derive(Debug, Clone, Default, Serialize)]
pub struct FormInput {
    pub cat_name: String,
    pub cat_date_of_birth: String,
    pub answers: Vec<AnswerEntry>,
}

impl FormInput {
    /// Collect the form's urlencoded pairs. Pairs that are neither the cat
    /// fields nor a question of `instrument` are ignored, including any
    /// client-sent instrument type.
    pub fn from_pairs(pairs: Vec<(String, String)>, instrument: &dyn Instrument) -> Self {
        let mut input = FormInput::default();
        for (key, value) in pairs {
            match key.as_str() {
                CAT_NAME_FIELD => input.cat_name = value,
                DATE_OF_BIRTH_FIELD => input.cat_date_of_birth = value,
                _ if instrument.questions().iter().any(|q| q.id == key) => {
                    input.answers.retain(|a| a.question_id != key);
                    input.answers.push(AnswerEntry {
                        question_id: key,
                        value,
                    });
                }
                _ => {}
            }
        }
        input
    }

    fn answer(&self, question_id: &str) -> Option<&str> {
        self.answers
            .iter()
            .find(|a| a.question_id == question_id)
            .map(|a| a.value.as_str())
    }
}

/// Field name → message, for every field that failed validation.
pub type FieldErrors = BTreeMap<String, String>;

/// Check required fields, then score the answers.
pub fn validate(input: &FormInput, instrument: &dyn Instrument) -> Result<NewAssessment, FieldErrors> {
    let mut errors = FieldErrors::new();

    let cat_name = input.cat_name.trim();
    if cat_name.is_empty() {
        errors.insert(CAT_NAME_FIELD.to_string(), "Cat name is required".to_string());
    }

    let date_raw = input.cat_date_of_birth.trim();
    let date_of_birth = if date_raw.is_empty() {
        errors.insert(
            DATE_OF_BIRTH_FIELD.to_string(),
            "Date of birth is required".to_string(),
        );
        None
    } else {
        match date_raw.parse::<Date>() {
            Ok(date) => Some(date),
            Err(_) => {
                errors.insert(
                    DATE_OF_BIRTH_FIELD.to_string(),
                    "Date of birth must be a valid date".to_string(),
                );
                None
            }
        }
    };

    for error in instrument.validate_answers(&input.answers) {
        errors.insert(error.question_id, error.message);
    }

    match date_of_birth {
        Some(cat_date_of_birth) if errors.is_empty() => {
            let summary = instrument.score(&input.answers);
            Ok(NewAssessment {
                cat_name: cat_name.to_string(),
                cat_date_of_birth,
                instrument_type: instrument.instrument_type(),
                score: summary.score,
                risk_level: summary.risk_level,
            })
        }
        _ => Err(errors),
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct OptionView {
    pub id: String,
    pub label: String,
    pub value: String,
    pub checked: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct QuestionView {
    pub id: String,
    pub number: usize,
    pub prompt: String,
    pub options: Vec<OptionView>,
    pub error: Option<String>,
}

/// Everything the form template needs.
#[derive(Debug, Clone, Serialize)]
pub struct FormPage {
    pub instrument_name: String,
    pub instrument_type: i32,
    pub cat_name: String,
    pub cat_date_of_birth: String,
    pub cat_name_error: Option<String>,
    pub cat_date_of_birth_error: Option<String>,
    pub questions: Vec<QuestionView>,
    pub alert: Option<String>,
}

pub fn build_form_page(
    instrument: &dyn Instrument,
    input: &FormInput,
    errors: &FieldErrors,
    alert: Option<String>,
) -> FormPage {
    let questions = instrument
        .questions()
        .iter()
        .enumerate()
        .map(|(i, q)| {
            let selected = input.answer(&q.id);
            QuestionView {
                id: q.id.clone(),
                number: i + 1,
                prompt: q.prompt.clone(),
                options: q
                    .options
                    .iter()
                    .enumerate()
                    .map(|(j, o)| OptionView {
                        id: format!("{}-{j}", q.id),
                        label: o.label.clone(),
                        value: o.value.clone(),
                        checked: selected == Some(o.value.as_str()),
                    })
                    .collect(),
                error: errors.get(&q.id).cloned(),
            }
        })
        .collect();

    FormPage {
        instrument_name: instrument.name().to_string(),
        instrument_type: instrument.instrument_type(),
        cat_name: input.cat_name.clone(),
        cat_date_of_birth: input.cat_date_of_birth.clone(),
        cat_name_error: errors.get(CAT_NAME_FIELD).cloned(),
        cat_date_of_birth_error: errors.get(DATE_OF_BIRTH_FIELD).cloned(),
        questions,
        alert,
    }
}

/// Alert text for a failed submission.
pub fn submit_alert(error: &impl std::fmt::Display) -> String {
    let message = error.to_string();
    if message.trim().is_empty() {
        SUBMIT_FAILED.to_string()
    } else {
        message
    }
}
