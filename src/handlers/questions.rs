// src/handlers/questions.rs

use axum::{Json, extract::State};

use crate::{
    error::{AppError, ErrorEnvelope},
    models::{
        category::category_map,
        question::{
            CreateQuestionRequest, CreateQuestionResponse, DeleteQuestionResponse, PageParams,
            QuestionPage, SearchRequest, SearchResponse,
        },
    },
    state::SharedRepository,
    utils::extract::{ApiJson, ApiPath, ApiQuery},
};

pub const QUESTIONS_PER_PAGE: i64 = 10;

/// Label used when a listing is not restricted to one category.
pub const ALL_CATEGORIES: &str = "All";

/// Row offset of a 1-indexed page, or `None` when the page cannot exist.
pub fn page_offset(page: i64) -> Option<i64> {
    if page < 1 {
        return None;
    }
    (page - 1).checked_mul(QUESTIONS_PER_PAGE)
}

/// Lists questions, ten per page.
///
/// The page number comes from `?page=`, defaulting to 1.
/// An empty page (including any page past the last one) is a 404.
#[utoipa::path(
    get,
    path = "/questions",
    tag = "questions",
    params(("page" = Option<i64>, Query, description = "1-indexed page number")),
    responses(
        (status = 200, description = "One page of questions", body = QuestionPage),
        (status = 404, description = "Page is empty", body = ErrorEnvelope)
    )
)]
pub async fn list_questions(
    State(repo): State<SharedRepository>,
    ApiQuery(pairs): ApiQuery<Vec<(String, String)>>,
) -> Result<Json<QuestionPage>, AppError> {
    let page = PageParams::from_pairs(&pairs).page();
    let offset = page_offset(page)
        .ok_or_else(|| AppError::NotFound(format!("Page {} is out of range", page)))?;

    let (questions, total_questions) = repo.fetch_question_page(offset, QUESTIONS_PER_PAGE).await?;

    if questions.is_empty() {
        return Err(AppError::NotFound(format!("Page {} is empty", page)));
    }

    let categories = repo.list_categories().await?;

    Ok(Json(QuestionPage {
        success: true,
        questions,
        total_questions,
        categories: category_map(&categories),
        current_category: ALL_CATEGORIES.to_string(),
    }))
}

/// Deletes a question by ID.
#[utoipa::path(
    delete,
    path = "/questions/{id}",
    tag = "questions",
    params(("id" = i64, Path, description = "Question id")),
    responses(
        (status = 200, description = "Question deleted", body = DeleteQuestionResponse),
        (status = 400, description = "Store failure", body = ErrorEnvelope),
        (status = 404, description = "No such question", body = ErrorEnvelope)
    )
)]
pub async fn delete_question(
    State(repo): State<SharedRepository>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<DeleteQuestionResponse>, AppError> {
    let deleted = repo.delete_question(id).await.map_err(|e| {
        tracing::error!("Failed to delete question {}: {:?}", id, e);
        AppError::BadRequest(e.to_string())
    })?;

    if !deleted {
        return Err(AppError::NotFound(format!("Question {} not found", id)));
    }

    tracing::info!(question_id = id, "Question deleted");

    Ok(Json(DeleteQuestionResponse {
        success: true,
        deleted: id,
    }))
}

/// Creates a new question.
///
/// A missing field is a 404 and an invalid one a 422; both are decided
/// before the store is touched.
#[utoipa::path(
    post,
    path = "/questions",
    tag = "questions",
    request_body = CreateQuestionRequest,
    responses(
        (status = 200, description = "Question created", body = CreateQuestionResponse),
        (status = 400, description = "Store failure", body = ErrorEnvelope),
        (status = 404, description = "A required field is missing", body = ErrorEnvelope),
        (status = 422, description = "A field is invalid", body = ErrorEnvelope)
    )
)]
pub async fn create_question(
    State(repo): State<SharedRepository>,
    ApiJson(payload): ApiJson<CreateQuestionRequest>,
) -> Result<Json<CreateQuestionResponse>, AppError> {
    let new_question = payload.into_new_question()?;

    let id = repo.insert_question(&new_question).await.map_err(|e| {
        tracing::error!("Failed to create question: {:?}", e);
        AppError::BadRequest(e.to_string())
    })?;

    tracing::info!(question_id = id, category = new_question.category, "Question created");

    Ok(Json(CreateQuestionResponse {
        success: true,
        response: id,
    }))
}

/// Case-insensitive substring search over question text.
/// No match is still a success, with an empty list.
#[utoipa::path(
    post,
    path = "/questions/search",
    tag = "questions",
    request_body = SearchRequest,
    responses(
        (status = 200, description = "Matching questions", body = SearchResponse),
        (status = 400, description = "Store failure", body = ErrorEnvelope),
        (status = 404, description = "searchTerm is missing", body = ErrorEnvelope)
    )
)]
pub async fn search_questions(
    State(repo): State<SharedRepository>,
    ApiJson(payload): ApiJson<SearchRequest>,
) -> Result<Json<SearchResponse>, AppError> {
    let term = payload
        .search_term
        .ok_or_else(|| AppError::NotFound("Missing required field `searchTerm`".to_string()))?;

    let questions = repo.search_questions(&term).await.map_err(|e| {
        tracing::error!("Failed to search questions: {:?}", e);
        AppError::BadRequest(e.to_string())
    })?;

    Ok(Json(SearchResponse {
        success: true,
        total_questions: questions.len(),
        questions,
        current_category: ALL_CATEGORIES.to_string(),
    }))
}
