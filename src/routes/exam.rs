use axum::{
    extract::State,
    response::{IntoResponse, Json, Response},
};
use validator::Validate;

use crate::dto::exam_dto::{
    AssembleExamRequest, AssembleExamResponse, CategorySummary, GradeExamRequest,
};
use crate::error::{Error, Result};
use crate::models::question::Category;
use crate::services::assembly_service::AssemblyService;
use crate::services::grading_service::GradingService;
use crate::services::notification_service::ExamCompletedNotice;
use crate::services::pass_policy::passing_threshold;
use crate::AppState;

fn find_category(state: &AppState, id: i64) -> Result<Category> {
    state
        .bank
        .category(id)
        .cloned()
        .ok_or_else(|| Error::NotFound(format!("Exam category {} not found", id)))
}

#[axum::debug_handler]
pub async fn list_categories(State(state): State<AppState>) -> Result<Response> {
    let summaries: Vec<CategorySummary> = state
        .bank
        .categories()
        .iter()
        .map(|c| CategorySummary {
            id: c.id,
            name: c.name.clone(),
            question_count: state.bank.pool(c.id).len(),
            passing_threshold: passing_threshold(&c.name),
        })
        .collect();
    Ok(Json(summaries).into_response())
}

#[axum::debug_handler]
pub async fn assemble_exam(
    State(state): State<AppState>,
    Json(req): Json<AssembleExamRequest>,
) -> Result<Response> {
    req.validate()?;
    let category = find_category(&state, req.category_id)?;
    let count = req.count.unwrap_or(state.default_exam_size);

    let questions = AssemblyService::assemble_exam_random(state.bank.pool(category.id), count)
        .map_err(|e| {
            tracing::warn!(category = %category.name, error = %e, "Failed to assemble exam");
            e
        })?;

    tracing::info!(
        category = %category.name,
        questions = questions.len(),
        "Exam assembled"
    );
    Ok(Json(AssembleExamResponse {
        category,
        questions,
    })
    .into_response())
}

#[axum::debug_handler]
pub async fn grade_exam(
    State(state): State<AppState>,
    Json(req): Json<GradeExamRequest>,
) -> Result<Response> {
    req.validate()?;
    let category = find_category(&state, req.category_id)?;

    let result = GradingService::evaluate(&category.name, &req.submissions(), &req.questions);
    tracing::info!(
        examinee = %req.examinee,
        category = %category.name,
        score = result.score,
        total = result.total,
        passed = result.passed,
        "Exam submitted"
    );

    let notice = ExamCompletedNotice::from_result(&req.examinee, &result);
    if let Err(e) = state.notifier.exam_completed(&notice).await {
        tracing::warn!(error = ?e, "Failed to deliver exam notification");
    }

    Ok(Json(result).into_response())
}
