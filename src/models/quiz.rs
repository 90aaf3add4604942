// src/models/quiz.rs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::question::Question;

/// Category selection sent by the quiz client. Id `0` stands for every category.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct QuizCategory {
    #[serde(deserialize_with = "crate::utils::id::lenient_i64")]
    #[schema(value_type = i64)]
    pub id: i64,

    /// Display name echoed back by the client; not used for selection.
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
}

impl QuizCategory {
    pub const ALL: i64 = 0;

    pub fn is_all(&self) -> bool {
        self.id == Self::ALL
    }
}

/// Body of `POST /quizzes`. The client replays its whole session on every call.
#[derive(Debug, Deserialize, ToSchema)]
pub struct QuizRequest {
    pub previous_questions: Option<Vec<i64>>,
    pub quiz_category: Option<QuizCategory>,
}

/// Response for `POST /quizzes`.
/// `success: false` with no question means the category is exhausted.
#[derive(Debug, Serialize, ToSchema)]
pub struct QuizResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub question: Option<Question>,
}
