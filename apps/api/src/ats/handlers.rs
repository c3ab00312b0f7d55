//! Axum route handlers for the ATS API.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::ats::{analyze_resume, group_by_category, AtsCheckResult, CategoryGroup};
use crate::errors::AppError;
use crate::models::content::ResumeContent;
use crate::resumes::handlers::UserIdQuery;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    #[serde(flatten)]
    pub result: AtsCheckResult,
    pub groups: Vec<CategoryGroup>,
}

impl From<AtsCheckResult> for AnalyzeResponse {
    fn from(result: AtsCheckResult) -> Self {
        let groups = group_by_category(&result.checks);
        Self { result, groups }
    }
}

/// POST /api/v1/ats/analyze
///
/// Scores an unsaved content snapshot, e.g. the editor's live state.
pub async fn handle_analyze(Json(content): Json<ResumeContent>) -> Json<AnalyzeResponse> {
    Json(analyze_resume(&content).into())
}

/// POST /api/v1/resumes/:id/analyze
///
/// Scores the stored content and records the score on the resume.
pub async fn handle_analyze_stored(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let resume = state
        .store
        .get(params.user_id, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Resume {id} not found")))?;

    let result = analyze_resume(&resume.parsed_content());
    let score = i32::try_from(result.score).map_err(|e| AppError::Internal(e.into()))?;
    if !state.store.set_ats_score(params.user_id, id, score).await? {
        return Err(AppError::NotFound(format!("Resume {id} not found")));
    }

    info!("Recorded ATS score {} ({}) for resume {id}", result.score, result.grade);
    Ok(Json(result.into()))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use serde_json::json;

    use super::*;
    use crate::models::resume::{ResumeRow, ResumeSummaryRow};
    use crate::resumes::store::memory::InMemoryResumeStore;
    use crate::resumes::store::{NewResume, ResumeChanges, ResumeStore};

    /// Loses the row between the read and the score write.
    #[derive(Default)]
    struct DeletedMidRequestStore {
        inner: InMemoryResumeStore,
    }

    #[async_trait]
    impl ResumeStore for DeletedMidRequestStore {
        async fn list(&self, user_id: Uuid) -> Result<Vec<ResumeSummaryRow>, AppError> {
            self.inner.list(user_id).await
        }

        async fn get(&self, user_id: Uuid, id: Uuid) -> Result<Option<ResumeRow>, AppError> {
            self.inner.get(user_id, id).await
        }

        async fn create(&self, resume: NewResume) -> Result<ResumeRow, AppError> {
            self.inner.create(resume).await
        }

        async fn update(
            &self,
            user_id: Uuid,
            id: Uuid,
            changes: ResumeChanges,
        ) -> Result<Option<ResumeRow>, AppError> {
            self.inner.update(user_id, id, changes).await
        }

        async fn delete(&self, user_id: Uuid, id: Uuid) -> Result<bool, AppError> {
            self.inner.delete(user_id, id).await
        }

        async fn set_ats_score(&self, user_id: Uuid, id: Uuid, score: i32) -> Result<bool, AppError> {
            self.inner.delete(user_id, id).await?;
            self.inner.set_ats_score(user_id, id, score).await
        }
    }

    #[tokio::test]
    async fn test_analyze_stored_reports_row_deleted_before_score_write() {
        let store = Arc::new(DeletedMidRequestStore::default());
        let user_id = Uuid::new_v4();
        let row = store
            .create(NewResume {
                user_id,
                title: "Backend".to_string(),
                template_id: "modern".to_string(),
                content: json!({ "summary": "Hello" }),
            })
            .await
            .unwrap();
        let state = AppState { store, llm: None };

        let result =
            handle_analyze_stored(State(state), Path(row.id), Query(UserIdQuery { user_id })).await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }
}
