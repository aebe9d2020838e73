use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::question::{Category, Question};

/// On-disk layout of the question bank file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QuestionBankFile {
    pub categories: Vec<Category>,
    #[serde(default)]
    pub questions: Vec<Question>,
}

/// Read-only question pools, grouped by category.
#[derive(Debug, Clone, Default)]
pub struct QuestionBank {
    categories: Vec<Category>,
    pools: HashMap<i64, Vec<Question>>,
}

impl QuestionBank {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        let file: QuestionBankFile = serde_json::from_str(&raw)?;
        let bank = Self::from_parts(file.categories, file.questions);
        tracing::info!(
            path = %path.display(),
            categories = bank.categories.len(),
            questions = bank.question_count(),
            "Question bank loaded"
        );
        Ok(bank)
    }

    pub fn from_parts(categories: Vec<Category>, questions: Vec<Question>) -> Self {
        let mut pools: HashMap<i64, Vec<Question>> =
            categories.iter().map(|c| (c.id, Vec::new())).collect();

        for q in questions {
            match pools.get_mut(&q.category_id) {
                Some(pool) => pool.push(q),
                None => tracing::warn!(
                    question_id = q.id,
                    category_id = q.category_id,
                    "Skipping question with unknown category"
                ),
            }
        }

        Self { categories, pools }
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn category(&self, id: i64) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    /// Questions of a category; empty when the category is unknown.
    pub fn pool(&self, category_id: i64) -> &[Question] {
        self.pools
            .get(&category_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn question_count(&self) -> usize {
        self.pools.values().map(Vec::len).sum()
    }
}
