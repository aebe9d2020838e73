use serde::{Deserialize, Serialize};
use validator::Validate;

pub type QuestionId = i64;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
}

/// A question as stored in the question bank.
///
/// `correct_answers` holds positions into `options` in their stored order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Question {
    pub id: QuestionId,
    pub category_id: i64,
    pub text: String,
    #[serde(default)]
    #[validate(length(min = 1))]
    pub options: Vec<String>,
    #[serde(default)]
    #[validate(length(min = 1))]
    pub correct_answers: Vec<usize>,
    #[serde(default)]
    pub is_multiple_choice: bool,
    #[serde(default = "default_time_limit")]
    pub time_limit_seconds: u32,
}

fn default_time_limit() -> u32 {
    60
}

impl Question {
    /// Checks the invariants the assembler relies on. Returns a short reason
    /// on the first violation found.
    pub fn check_structure(&self) -> Result<(), String> {
        if let Err(errors) = self.validate() {
            let mut fields: Vec<String> =
                errors.field_errors().keys().map(|k| k.to_string()).collect();
            fields.sort();
            return Err(format!("empty fields: {}", fields.join(", ")));
        }
        if self.options.len() < self.correct_answers.len() {
            return Err(format!(
                "{} correct answers but only {} options",
                self.correct_answers.len(),
                self.options.len()
            ));
        }
        if let Some(idx) = self
            .correct_answers
            .iter()
            .find(|&&idx| idx >= self.options.len())
        {
            return Err(format!(
                "correct answer index {} is out of range for {} options",
                idx,
                self.options.len()
            ));
        }
        if !self.is_multiple_choice && self.correct_answers.len() != 1 {
            return Err(format!(
                "single-choice question has {} correct answers",
                self.correct_answers.len()
            ));
        }
        Ok(())
    }
}

/// A question prepared for one exam attempt: options reshuffled and
/// `correct_answers` pointing into the reshuffled list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssembledQuestion {
    pub id: QuestionId,
    pub category_id: i64,
    pub text: String,
    pub options: Vec<String>,
    pub correct_answers: Vec<usize>,
    pub is_multiple_choice: bool,
    pub time_limit_seconds: u32,
}
