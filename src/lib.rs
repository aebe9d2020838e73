pub mod config;
pub mod dto;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;
pub mod utils;

use std::sync::Arc;

use crate::services::{notification_service::ResultNotifier, question_bank::QuestionBank};

#[derive(Clone)]
pub struct AppState {
    pub bank: Arc<QuestionBank>,
    pub notifier: Arc<dyn ResultNotifier>,
    pub default_exam_size: usize,
}

impl AppState {
    pub fn new(
        bank: QuestionBank,
        notifier: Arc<dyn ResultNotifier>,
        default_exam_size: usize,
    ) -> Self {
        Self {
            bank: Arc::new(bank),
            notifier,
            default_exam_size,
        }
    }
}
