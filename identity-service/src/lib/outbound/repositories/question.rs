use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::account::errors::AccountError;
use crate::domain::account::models::AccountId;
use crate::domain::account::models::QuestionCard;
use crate::domain::account::ports::QuestionRepository;

pub struct PostgresQuestionRepository {
    pool: PgPool,
}

impl PostgresQuestionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct QuestionCardRow {
    id: Uuid,
    title: String,
    points: i32,
    created_at: DateTime<Utc>,
}

impl From<QuestionCardRow> for QuestionCard {
    fn from(row: QuestionCardRow) -> Self {
        QuestionCard {
            id: row.id,
            title: row.title,
            points: row.points,
            created_at: row.created_at,
        }
    }
}

#[async_trait]
impl QuestionRepository for PostgresQuestionRepository {
    async fn recent_authored(
        &self,
        author: &AccountId,
        limit: i64,
    ) -> Result<Vec<QuestionCard>, AccountError> {
        let rows = sqlx::query_as::<_, QuestionCardRow>(
            r#"
            SELECT id, title, points, created_at
            FROM questions
            WHERE author_id = $1
            ORDER BY created_at DESC
            LIMIT $2
            "#,
        )
        .bind(author.0)
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AccountError::Storage(e.to_string()))?;

        Ok(rows.into_iter().map(QuestionCard::from).collect())
    }

    async fn recent_answered(
        &self,
        author: &AccountId,
        limit: i64,
    ) -> Result<Vec<QuestionCard>, AccountError> {
        // EXISTS keeps a question with several matching answers to one row
        let rows = sqlx::query_as::<_, QuestionCardRow>(
            r#"
            SELECT q.id, q.title, q.points, q.created_at
            FROM questions q
            WHERE EXISTS (
                SELECT 1 FROM answers a
                WHERE a.question_id = q.id AND a.author_id = $1
            )
            ORDER BY q.created_at DESC
            LIMIT $2
            "#,
        )
        .bind(author.0)
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AccountError::Storage(e.to_string()))?;

        Ok(rows.into_iter().map(QuestionCard::from).collect())
    }

    async fn authored_question_ids(&self, author: &AccountId) -> Result<Vec<Uuid>, AccountError> {
        sqlx::query_scalar::<_, Uuid>(
            "SELECT id FROM questions WHERE author_id = $1 ORDER BY created_at",
        )
        .bind(author.0)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AccountError::Storage(e.to_string()))
    }

    async fn authored_answer_ids(&self, author: &AccountId) -> Result<Vec<Uuid>, AccountError> {
        sqlx::query_scalar::<_, Uuid>(
            "SELECT id FROM answers WHERE author_id = $1 ORDER BY created_at",
        )
        .bind(author.0)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AccountError::Storage(e.to_string()))
    }
}
