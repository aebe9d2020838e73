use serde::{Deserialize, Serialize};

use crate::models::question::QuestionId;
use crate::models::submission::Submission;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionOutcome {
    pub question_id: QuestionId,
    pub question_text: String,
    pub submission: Option<Submission>,
    pub correct_answers: Vec<usize>,
    pub is_correct: bool,
    pub timed_out: bool,
}

/// Score of an attempt before any category policy is applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradedExam {
    pub total: usize,
    pub score: usize,
    pub percentage: f64,
    pub details: Vec<QuestionOutcome>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExamResult {
    pub category: String,
    pub total: usize,
    pub score: usize,
    pub percentage: f64,
    pub threshold: f64,
    pub passed: bool,
    pub details: Vec<QuestionOutcome>,
}
