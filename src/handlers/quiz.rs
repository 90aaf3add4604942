// src/handlers/quiz.rs

use axum::{Json, extract::State};

use crate::{
    error::{AppError, ErrorEnvelope},
    models::quiz::{QuizRequest, QuizResponse},
    repository::QuestionFilter,
    selector::{Selection, select_question},
    state::SharedRepository,
    utils::extract::ApiJson,
};

/// Serves the next quiz question.
///
/// * Picks uniformly among the questions of `quiz_category` (id 0 = all)
///   whose id is not in `previous_questions`.
/// * Replies `{success: false}` once every question has been served.
/// * Both fields absent → 404; only one present, or an unknown category → 400.
#[utoipa::path(
    post,
    path = "/quizzes",
    tag = "quizzes",
    request_body = QuizRequest,
    responses(
        (status = 200, description = "Next question, or success=false when exhausted", body = QuizResponse),
        (status = 400, description = "Malformed session or unknown category", body = ErrorEnvelope),
        (status = 404, description = "Session fields are missing", body = ErrorEnvelope)
    )
)]
pub async fn next_question(
    State(repo): State<SharedRepository>,
    ApiJson(req): ApiJson<QuizRequest>,
) -> Result<Json<QuizResponse>, AppError> {
    let (previous, category) = match (req.previous_questions, req.quiz_category) {
        (Some(previous), Some(category)) => (previous, category),
        (None, None) => {
            return Err(AppError::NotFound(
                "Missing `previous_questions` and `quiz_category`".to_string(),
            ));
        }
        (None, Some(_)) => {
            return Err(AppError::BadRequest("Missing `previous_questions`".to_string()));
        }
        (Some(_), None) => {
            return Err(AppError::BadRequest("Missing `quiz_category`".to_string()));
        }
    };

    let filter = if category.is_all() {
        QuestionFilter::All
    } else {
        QuestionFilter::Category(category.id)
    };

    let candidates = repo.list_questions(filter).await.map_err(|e| {
        tracing::error!("Failed to load quiz candidates: {:?}", e);
        AppError::BadRequest(e.to_string())
    })?;

    // An empty pool is only exhaustion if the category itself exists.
    if candidates.is_empty() {
        if let QuestionFilter::Category(id) = filter {
            let known = repo
                .find_category(id)
                .await
                .map_err(|e| {
                    tracing::error!("Failed to look up category {}: {:?}", id, e);
                    AppError::BadRequest(e.to_string())
                })?
                .is_some();
            if !known {
                return Err(AppError::BadRequest(format!("Unknown category {}", id)));
            }
        }
    }

    let selection = select_question(candidates, &previous, &mut rand::thread_rng());

    let response = match selection {
        Selection::Next(question) => {
            tracing::debug!(question_id = question.id, served = previous.len(), "Quiz question selected");
            QuizResponse {
                success: true,
                question: Some(question),
            }
        }
        Selection::Exhausted => {
            tracing::debug!(served = previous.len(), "Quiz category exhausted");
            QuizResponse {
                success: false,
                question: None,
            }
        }
    };

    Ok(Json(response))
}
