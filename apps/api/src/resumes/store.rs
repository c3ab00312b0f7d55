//! Resume persistence.
//!
//! Handlers talk to `Arc<dyn ResumeStore>`; production wires `PgResumeStore`.
//! Every operation is scoped by `user_id`: another user's resume behaves as
//! if it does not exist.

use async_trait::async_trait;
use serde_json::Value;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::resume::{ResumeRow, ResumeSummaryRow};

/// Fields for a new resume row. Validation happens before this point.
#[derive(Debug, Clone)]
pub struct NewResume {
    pub user_id: Uuid,
    pub title: String,
    pub template_id: String,
    pub content: Value,
}

/// Partial update. `None` leaves the column unchanged.
#[derive(Debug, Clone, Default)]
pub struct ResumeChanges {
    pub title: Option<String>,
    pub template_id: Option<String>,
    pub content: Option<Value>,
}

#[async_trait]
pub trait ResumeStore: Send + Sync {
    /// Newest first, without content bodies.
    async fn list(&self, user_id: Uuid) -> Result<Vec<ResumeSummaryRow>, AppError>;

    async fn get(&self, user_id: Uuid, id: Uuid) -> Result<Option<ResumeRow>, AppError>;

    async fn create(&self, resume: NewResume) -> Result<ResumeRow, AppError>;

    /// Replacing the content clears the stored ATS score, which no longer
    /// describes it.
    async fn update(
        &self,
        user_id: Uuid,
        id: Uuid,
        changes: ResumeChanges,
    ) -> Result<Option<ResumeRow>, AppError>;

    /// Returns whether a row was deleted.
    async fn delete(&self, user_id: Uuid, id: Uuid) -> Result<bool, AppError>;

    /// Returns whether a row was updated.
    async fn set_ats_score(&self, user_id: Uuid, id: Uuid, score: i32) -> Result<bool, AppError>;
}

pub struct PgResumeStore {
    pool: PgPool,
}

impl PgResumeStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ResumeStore for PgResumeStore {
    async fn list(&self, user_id: Uuid) -> Result<Vec<ResumeSummaryRow>, AppError> {
        let rows = sqlx::query_as::<_, ResumeSummaryRow>(
            r#"
            SELECT id, title, template_id, ats_score, created_at, updated_at
            FROM resumes
            WHERE user_id = $1
            ORDER BY updated_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn get(&self, user_id: Uuid, id: Uuid) -> Result<Option<ResumeRow>, AppError> {
        let row = sqlx::query_as::<_, ResumeRow>(
            "SELECT * FROM resumes WHERE id = $1 AND user_id = $2",
        )
        .bind(id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn create(&self, resume: NewResume) -> Result<ResumeRow, AppError> {
        let row = sqlx::query_as::<_, ResumeRow>(
            r#"
            INSERT INTO resumes (id, user_id, title, template_id, content)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(resume.user_id)
        .bind(&resume.title)
        .bind(&resume.template_id)
        .bind(&resume.content)
        .fetch_one(&self.pool)
        .await?;

        info!("Created resume {} for user {}", row.id, row.user_id);
        Ok(row)
    }

    async fn update(
        &self,
        user_id: Uuid,
        id: Uuid,
        changes: ResumeChanges,
    ) -> Result<Option<ResumeRow>, AppError> {
        let row = sqlx::query_as::<_, ResumeRow>(
            r#"
            UPDATE resumes
            SET title = COALESCE($3, title),
                template_id = COALESCE($4, template_id),
                content = COALESCE($5::jsonb, content),
                ats_score = CASE WHEN $5::jsonb IS NULL THEN ats_score ELSE NULL END,
                updated_at = NOW()
            WHERE id = $1 AND user_id = $2
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(user_id)
        .bind(changes.title)
        .bind(changes.template_id)
        .bind(changes.content)
        .fetch_optional(&self.pool)
        .await?;

        if let Some(row) = &row {
            info!("Updated resume {}", row.id);
        }
        Ok(row)
    }

    async fn delete(&self, user_id: Uuid, id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM resumes WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(&self.pool)
            .await?;

        let deleted = result.rows_affected() > 0;
        if deleted {
            info!("Deleted resume {id}");
        }
        Ok(deleted)
    }

    async fn set_ats_score(&self, user_id: Uuid, id: Uuid, score: i32) -> Result<bool, AppError> {
        // updated_at is left alone: scoring is not an edit.
        let result =
            sqlx::query("UPDATE resumes SET ats_score = $3 WHERE id = $1 AND user_id = $2")
                .bind(id)
                .bind(user_id)
                .bind(score)
                .execute(&self.pool)
                .await?;
        Ok(result.rows_affected() > 0)
    }
}
