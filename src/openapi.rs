// src/openapi.rs

use axum::Json;
use utoipa::OpenApi;

use crate::handlers::{categories, questions, quiz};

/// OpenAPI description of the public API, served at `/openapi.json`.
#[derive(OpenApi)]
#[openapi(
    info(title = "Trivia API", description = "Questions, categories and quiz play."),
    paths(
        categories::list_categories,
        categories::list_category_questions,
        questions::list_questions,
        questions::create_question,
        questions::delete_question,
        questions::search_questions,
        quiz::next_question,
    ),
    tags(
        (name = "categories", description = "Category listing"),
        (name = "questions", description = "Question management and search"),
        (name = "quizzes", description = "Quiz play")
    )
)]
pub struct ApiDoc;

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
