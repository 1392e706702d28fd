use crate::Instrument;
use crate::scoring::{AnswerOption, Question};

/// Type tag of the only questionnaire currently in use.
pub const CAT_BEHAVIORAL_INSTRUMENT_TYPE: i32 = 1;

/// Cat Behavioral Instrument.
/// Five yes/no style questions, one point per answer pointing at risk.
/// Total 0–5.
pub struct CatBehavioral;

impl Instrument for CatBehavioral {
    fn instrument_type(&self) -> i32 {
        CAT_BEHAVIORAL_INSTRUMENT_TYPE
    }

    fn name(&self) -> &str {
        "Cat Behavioral Instrument"
    }

    fn questions(&self) -> &[Question] {
        static QUESTIONS: std::sync::LazyLock<Vec<Question>> = std::sync::LazyLock::new(|| {
            vec![
                question(
                    "q1",
                    "Previous contact with the Cat Judicial System",
                    &[("No", 0), ("Yes", 1)],
                ),
                question(
                    "q2",
                    "Physical altercations with other cats",
                    &[("0–3 altercations", 0), ("3+ altercations", 1)],
                ),
                question(
                    "q3",
                    "Physical altercations with owner",
                    &[("10+ altercations", 1), ("0–10 altercations", 0)],
                ),
                // Reverse polarity: not getting along with dogs scores.
                question("q4", "Plays well with dogs", &[("No", 1), ("Yes", 0)]),
                question("q5", "Hisses at strangers", &[("Yes", 1), ("No", 0)]),
            ]
        });
        &QUESTIONS
    }
}

fn question(id: &str, prompt: &str, options: &[(&str, u8)]) -> Question {
    Question {
        id: id.to_string(),
        prompt: prompt.to_string(),
        options: options
            .iter()
            .map(|(label, points)| AnswerOption {
                label: label.to_string(),
                value: points.to_string(),
                points: *points,
            })
            .collect(),
    }
}
