// src/handlers/categories.rs

use axum::{Json, extract::State};

use crate::{
    error::{AppError, ErrorEnvelope},
    models::category::{CategoriesResponse, CategoryQuestionsResponse, category_map},
    repository::QuestionFilter,
    state::SharedRepository,
    utils::extract::ApiPath,
};

/// Lists every category as an `{id: name}` map.
#[utoipa::path(
    get,
    path = "/categories",
    tag = "categories",
    responses(
        (status = 200, description = "All categories", body = CategoriesResponse),
        (status = 500, description = "Store failure", body = ErrorEnvelope)
    )
)]
pub async fn list_categories(
    State(repo): State<SharedRepository>,
) -> Result<Json<CategoriesResponse>, AppError> {
    let categories = repo.list_categories().await?;

    Ok(Json(CategoriesResponse {
        success: true,
        number_of_categories_available: categories.len(),
        categories: category_map(&categories),
    }))
}

/// Lists the questions of one category.
///
/// * No questions in the category → 404.
/// * Questions exist but the category row cannot be read → 400.
#[utoipa::path(
    get,
    path = "/categories/{id}/questions",
    tag = "categories",
    params(("id" = i64, Path, description = "Category id")),
    responses(
        (status = 200, description = "Questions of the category", body = CategoryQuestionsResponse),
        (status = 400, description = "Category lookup failed", body = ErrorEnvelope),
        (status = 404, description = "Category has no questions", body = ErrorEnvelope)
    )
)]
pub async fn list_category_questions(
    State(repo): State<SharedRepository>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<CategoryQuestionsResponse>, AppError> {
    let questions = repo.list_questions(QuestionFilter::Category(id)).await?;

    if questions.is_empty() {
        return Err(AppError::NotFound(format!("Category {} has no questions", id)));
    }

    let category = repo
        .find_category(id)
        .await
        .map_err(|e| {
            tracing::error!("Failed to look up category {}: {:?}", id, e);
            AppError::BadRequest(e.to_string())
        })?
        .ok_or_else(|| {
            tracing::warn!(category_id = id, "Questions reference a missing category");
            AppError::BadRequest(format!("Category {} does not exist", id))
        })?;

    Ok(Json(CategoryQuestionsResponse {
        total_questions: questions.len(),
        questions,
        current_category: category.kind,
    }))
}
