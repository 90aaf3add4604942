// src/repository/mod.rs

//! Store access. Handlers receive a [`TriviaRepository`] through axum state
//! instead of reaching for a global connection.

mod postgres;

pub use postgres::PgTriviaRepository;

use async_trait::async_trait;

use crate::models::{
    category::Category,
    question::{NewQuestion, Question},
};

pub type RepoResult<T> = Result<T, sqlx::Error>;

/// Which questions a listing should include.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionFilter {
    All,
    Category(i64),
}

#[async_trait]
pub trait TriviaRepository: Send + Sync {
    /// All categories, ordered by id.
    async fn list_categories(&self) -> RepoResult<Vec<Category>>;

    async fn find_category(&self, id: i64) -> RepoResult<Option<Category>>;

    /// One page of questions ordered by id, plus the unfiltered total.
    async fn fetch_question_page(&self, offset: i64, limit: i64) -> RepoResult<(Vec<Question>, i64)>;

    /// Every question matching the filter, ordered by id.
    async fn list_questions(&self, filter: QuestionFilter) -> RepoResult<Vec<Question>>;

    /// Case-insensitive literal substring match on the question text.
    async fn search_questions(&self, term: &str) -> RepoResult<Vec<Question>>;

    /// Single question by id; used for read-after-write checks.
    async fn find_question(&self, id: i64) -> RepoResult<Option<Question>>;

    /// Stores the question and returns the id assigned to it.
    async fn insert_question(&self, question: &NewQuestion) -> RepoResult<i64>;

    /// Returns `false` when no question had that id.
    async fn delete_question(&self, id: i64) -> RepoResult<bool>;
}
