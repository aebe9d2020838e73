use rand::Rng;

use crate::error::ExamError;
use crate::models::question::{AssembledQuestion, Question};
use crate::utils::shuffle::shuffled;

pub struct AssemblyService;

impl AssemblyService {
    /// Builds an exam of up to `desired_count` questions drawn from `pool`.
    ///
    /// Asking for more questions than the pool holds returns the whole pool
    /// in random order.
    pub fn assemble_exam<R: Rng + ?Sized>(
        pool: &[Question],
        desired_count: usize,
        rng: &mut R,
    ) -> Result<Vec<AssembledQuestion>, ExamError> {
        if pool.is_empty() {
            return Err(ExamError::EmptyPool);
        }
        for q in pool {
            q.check_structure()
                .map_err(|reason| ExamError::MalformedQuestion {
                    question_id: q.id,
                    reason,
                })?;
        }

        let take = desired_count.min(pool.len());
        tracing::debug!(pool = pool.len(), requested = desired_count, take, "Assembling exam");

        let exam = shuffled(pool, rng)
            .into_iter()
            .take(take)
            .map(|q| Self::shuffle_options(q, &mut *rng))
            .collect();

        Ok(exam)
    }

    pub fn assemble_exam_random(
        pool: &[Question],
        desired_count: usize,
    ) -> Result<Vec<AssembledQuestion>, ExamError> {
        let mut rng = rand::thread_rng();
        Self::assemble_exam(pool, desired_count, &mut rng)
    }

    fn shuffle_options<R: Rng + ?Sized>(question: Question, rng: &mut R) -> AssembledQuestion {
        let indexed: Vec<(usize, String)> = question.options.into_iter().enumerate().collect();
        let indexed = shuffled(&indexed, rng);

        let correct_answers: Vec<usize> = question
            .correct_answers
            .iter()
            .filter_map(|&original| {
                let found = indexed.iter().position(|(idx, _)| *idx == original);
                if found.is_none() {
                    tracing::warn!(
                        question_id = question.id,
                        original,
                        "Correct answer lost while shuffling options"
                    );
                }
                found
            })
            .collect();

        AssembledQuestion {
            id: question.id,
            category_id: question.category_id,
            text: question.text,
            options: indexed.into_iter().map(|(_, text)| text).collect(),
            correct_answers,
            is_multiple_choice: question.is_multiple_choice,
            time_limit_seconds: question.time_limit_seconds,
        }
    }
}
