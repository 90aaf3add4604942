// src/repository/postgres.rs

use async_trait::async_trait;
use sqlx::PgPool;

use super::{QuestionFilter, RepoResult, TriviaRepository};
use crate::models::{
    category::Category,
    question::{NewQuestion, Question},
};

const QUESTION_COLUMNS: &str = "id, question, answer, category, difficulty";

/// PostgreSQL-backed store.
///
/// Each operation checks a connection out of the pool and hands it back when
/// the connection guard drops at the end of the call.
#[derive(Clone)]
pub struct PgTriviaRepository {
    pool: PgPool,
}

impl PgTriviaRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Escapes LIKE metacharacters so the term matches literally.
pub(crate) fn like_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

#[async_trait]
impl TriviaRepository for PgTriviaRepository {
    async fn list_categories(&self) -> RepoResult<Vec<Category>> {
        let mut conn = self.pool.acquire().await?;
        sqlx::query_as::<_, Category>("SELECT id, type FROM categories ORDER BY id")
            .fetch_all(&mut *conn)
            .await
    }

    async fn find_category(&self, id: i64) -> RepoResult<Option<Category>> {
        let mut conn = self.pool.acquire().await?;
        sqlx::query_as::<_, Category>("SELECT id, type FROM categories WHERE id = $1")
            .bind(id)
            .fetch_optional(&mut *conn)
            .await
    }

    async fn fetch_question_page(&self, offset: i64, limit: i64) -> RepoResult<(Vec<Question>, i64)> {
        let mut conn = self.pool.acquire().await?;

        let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM questions")
            .fetch_one(&mut *conn)
            .await?;

        let questions = sqlx::query_as::<_, Question>(&format!(
            "SELECT {} FROM questions ORDER BY id LIMIT $1 OFFSET $2",
            QUESTION_COLUMNS
        ))
        .bind(limit)
        .bind(offset)
        .fetch_all(&mut *conn)
        .await?;

        Ok((questions, total))
    }

    async fn list_questions(&self, filter: QuestionFilter) -> RepoResult<Vec<Question>> {
        let mut conn = self.pool.acquire().await?;
        match filter {
            QuestionFilter::All => {
                sqlx::query_as::<_, Question>(&format!(
                    "SELECT {} FROM questions ORDER BY id",
                    QUESTION_COLUMNS
                ))
                .fetch_all(&mut *conn)
                .await
            }
            QuestionFilter::Category(category) => {
                sqlx::query_as::<_, Question>(&format!(
                    "SELECT {} FROM questions WHERE category = $1 ORDER BY id",
                    QUESTION_COLUMNS
                ))
                .bind(category)
                .fetch_all(&mut *conn)
                .await
            }
        }
    }

    async fn search_questions(&self, term: &str) -> RepoResult<Vec<Question>> {
        let mut conn = self.pool.acquire().await?;
        sqlx::query_as::<_, Question>(&format!(
            r"SELECT {} FROM questions WHERE question ILIKE $1 ESCAPE '\' ORDER BY id",
            QUESTION_COLUMNS
        ))
        .bind(like_pattern(term))
        .fetch_all(&mut *conn)
        .await
    }

    async fn find_question(&self, id: i64) -> RepoResult<Option<Question>> {
        let mut conn = self.pool.acquire().await?;
        sqlx::query_as::<_, Question>(&format!(
            "SELECT {} FROM questions WHERE id = $1",
            QUESTION_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&mut *conn)
        .await
    }

    async fn insert_question(&self, question: &NewQuestion) -> RepoResult<i64> {
        let mut conn = self.pool.acquire().await?;
        sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO questions (question, answer, category, difficulty)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(&question.question)
        .bind(&question.answer)
        .bind(question.category)
        .bind(question.difficulty as i32)
        .fetch_one(&mut *conn)
        .await
    }

    async fn delete_question(&self, id: i64) -> RepoResult<bool> {
        let mut conn = self.pool.acquire().await?;
        let result = sqlx::query("DELETE FROM questions WHERE id = $1")
            .bind(id)
            .execute(&mut *conn)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
