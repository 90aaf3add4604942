// src/models/question.rs

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use sqlx::prelude::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use crate::error::AppError;

/// Represents the 'questions' table in the database.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, ToSchema)]
pub struct Question {
    pub id: i64,

    /// The text of the question.
    pub question: String,

    pub answer: String,

    /// Id of the owning category. Not checked against the categories table.
    pub category: i64,

    pub difficulty: i32,
}

/// Body of `POST /questions`.
/// Every field is optional here so that absence can be told apart from invalidity.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateQuestionRequest {
    pub question: Option<String>,
    pub answer: Option<String>,
    #[serde(default, deserialize_with = "crate::utils::id::lenient_opt_i64")]
    #[schema(value_type = Option<i64>)]
    pub category: Option<i64>,
    #[serde(default, deserialize_with = "crate::utils::id::lenient_opt_i64")]
    #[schema(value_type = Option<i64>)]
    pub difficulty: Option<i64>,
}

/// A validated question ready to be inserted.
#[derive(Debug, Clone, Validate)]
pub struct NewQuestion {
    #[validate(length(min = 1), custom(function = not_blank))]
    pub question: String,
    #[validate(length(min = 1), custom(function = not_blank))]
    pub answer: String,
    #[validate(range(min = 1))]
    pub category: i64,
    #[validate(range(min = 1, max = 5))]
    pub difficulty: i64,
}

fn not_blank(value: &str) -> Result<(), validator::ValidationError> {
    if value.trim().is_empty() {
        return Err(validator::ValidationError::new("blank"));
    }
    Ok(())
}

impl CreateQuestionRequest {
    /// Missing (or null) fields are `NotFound`; present but invalid ones are `Unprocessable`.
    pub fn into_new_question(self) -> Result<NewQuestion, AppError> {
        let new_question = NewQuestion {
            question: self.question.ok_or_else(|| missing("question"))?,
            answer: self.answer.ok_or_else(|| missing("answer"))?,
            category: self.category.ok_or_else(|| missing("category"))?,
            difficulty: self.difficulty.ok_or_else(|| missing("difficulty"))?,
        };
        new_question.validate()?;
        Ok(new_question)
    }
}

fn missing(field: &str) -> AppError {
    AppError::NotFound(format!("Missing required field `{}`", field))
}

/// Response for `POST /questions`.
#[derive(Debug, Serialize, ToSchema)]
pub struct CreateQuestionResponse {
    pub success: bool,
    /// Id of the created question.
    pub response: i64,
}

/// Response for `DELETE /questions/{id}`.
#[derive(Debug, Serialize, ToSchema)]
pub struct DeleteQuestionResponse {
    pub success: bool,
    pub deleted: i64,
}

/// Query parameters for `GET /questions`.
/// Kept as raw text: a non-integer page falls back to the first page.
#[derive(Debug)]
pub struct PageParams {
    pub page: Option<String>,
}

impl PageParams {
    /// Takes the first `page` pair; later repeats are ignored.
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        Self {
            page: pairs
                .iter()
                .find(|(key, _)| key == "page")
                .map(|(_, value)| value.clone()),
        }
    }

    pub fn page(&self) -> i64 {
        self.page
            .as_deref()
            .and_then(|p| p.trim().parse().ok())
            .unwrap_or(1)
    }
}

/// Response for `GET /questions`.
#[derive(Debug, Serialize, ToSchema)]
pub struct QuestionPage {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: i64,
    pub categories: BTreeMap<i64, String>,
    pub current_category: String,
}

/// Body of `POST /questions/search`.
#[derive(Debug, Deserialize, ToSchema)]
pub struct SearchRequest {
    #[serde(rename = "searchTerm")]
    pub search_term: Option<String>,
}

/// Response for `POST /questions/search`.
#[derive(Debug, Serialize, ToSchema)]
pub struct SearchResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub current_category: String,
    pub total_questions: usize,
}
