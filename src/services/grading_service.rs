use std::collections::HashMap;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::exam_result::{ExamResult, GradedExam, QuestionOutcome};
use crate::models::question::{AssembledQuestion, QuestionId};
use crate::models::submission::Submission;
use crate::services::pass_policy;

pub struct GradingService;

impl GradingService {
    /// Never fails: a timeout, a missing answer or an answer of the wrong
    /// shape is simply incorrect.
    pub fn is_correct(
        submission: Option<&Submission>,
        correct_answers: &[usize],
        is_multiple_choice: bool,
    ) -> bool {
        match (submission, is_multiple_choice) {
            (Some(Submission::Single(given)), false) => correct_answers == [*given],
            (Some(Submission::Multiple(given)), true) => {
                if given.len() != correct_answers.len() {
                    return false;
                }
                let mut given = given.clone();
                let mut expected = correct_answers.to_vec();
                given.sort_unstable();
                expected.sort_unstable();
                given == expected
            }
            _ => false,
        }
    }

    pub fn grade_exam(
        submissions: &HashMap<QuestionId, Submission>,
        questions: &[AssembledQuestion],
    ) -> GradedExam {
        let mut score = 0;
        let mut details = Vec::with_capacity(questions.len());

        for q in questions {
            let submission = submissions.get(&q.id);
            let is_correct =
                Self::is_correct(submission, &q.correct_answers, q.is_multiple_choice);
            if is_correct {
                score += 1;
            }

            details.push(QuestionOutcome {
                question_id: q.id,
                question_text: q.text.clone(),
                submission: submission.cloned(),
                correct_answers: q.correct_answers.clone(),
                is_correct,
                timed_out: submission.map_or(false, Submission::is_timeout),
            });
        }

        let total = questions.len();
        GradedExam {
            total,
            score,
            percentage: percentage(score, total),
            details,
        }
    }

    /// Grades an attempt and applies the pass threshold of `category_name`.
    pub fn evaluate(
        category_name: &str,
        submissions: &HashMap<QuestionId, Submission>,
        questions: &[AssembledQuestion],
    ) -> ExamResult {
        let graded = Self::grade_exam(submissions, questions);
        let threshold = pass_policy::passing_threshold(category_name);
        let passed = pass_policy::is_passed(graded.percentage, category_name);

        tracing::debug!(
            category = category_name,
            score = graded.score,
            total = graded.total,
            percentage = graded.percentage,
            passed,
            "Exam graded"
        );

        ExamResult {
            category: category_name.to_string(),
            total: graded.total,
            score: graded.score,
            percentage: graded.percentage,
            threshold,
            passed,
            details: graded.details,
        }
    }
}

/// `score / total * 100`, rounded half-up to two places. Zero for an empty exam.
fn percentage(score: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let ratio = Decimal::from(score) * Decimal::ONE_HUNDRED / Decimal::from(total);
    ratio
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or(0.0)
}
