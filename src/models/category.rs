// src/models/category.rs

use std::collections::BTreeMap;

use serde::Serialize;
use sqlx::prelude::FromRow;
use utoipa::ToSchema;

/// Represents the 'categories' table in the database.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, ToSchema)]
pub struct Category {
    pub id: i64,

    /// Display name. The column is called `type`, a reserved word in Rust.
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub kind: String,
}

/// `{id: name}` map as served to clients.
pub fn category_map(categories: &[Category]) -> BTreeMap<i64, String> {
    categories.iter().map(|c| (c.id, c.kind.clone())).collect()
}

/// Response for `GET /categories`.
#[derive(Debug, Serialize, ToSchema)]
pub struct CategoriesResponse {
    pub success: bool,
    pub categories: BTreeMap<i64, String>,
    pub number_of_categories_available: usize,
}

/// Response for `GET /categories/{id}/questions`.
#[derive(Debug, Serialize, ToSchema)]
pub struct CategoryQuestionsResponse {
    pub questions: Vec<super::question::Question>,
    pub total_questions: usize,
    /// Display name of the category, never its id.
    pub current_category: String,
}
