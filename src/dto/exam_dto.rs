use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::question::{AssembledQuestion, Category, QuestionId};
use crate::models::submission::Submission;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategorySummary {
    pub id: i64,
    pub name: String,
    pub question_count: usize,
    pub passing_threshold: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AssembleExamRequest {
    pub category_id: i64,
    #[validate(range(min = 1))]
    pub count: Option<usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssembleExamResponse {
    pub category: Category,
    pub questions: Vec<AssembledQuestion>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct GradeExamRequest {
    pub category_id: i64,
    #[validate(length(min = 1, max = 100))]
    pub examinee: String,
    pub questions: Vec<AssembledQuestion>,
    /// Keyed by question id; a `null` value or missing key means no answer.
    #[serde(default)]
    pub answers: HashMap<QuestionId, Option<Submission>>,
}

impl GradeExamRequest {
    pub fn submissions(&self) -> HashMap<QuestionId, Submission> {
        self.answers
            .iter()
            .filter_map(|(id, s)| s.clone().map(|s| (*id, s)))
            .collect()
    }
}
