//! Axum route handlers for the Resume API.

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use serde_json::Value;
use uuid::Uuid;

use crate::errors::AppError;
use crate::export::{export_filename, render_json, render_text, ExportFormat};
use crate::models::content::ResumeContent;
use crate::models::resume::{ResumeRow, ResumeSummaryRow};
use crate::resumes::store::{NewResume, ResumeChanges};
use crate::state::AppState;
use crate::templates::{find_template, DEFAULT_TEMPLATE_ID};

const DEFAULT_TITLE: &str = "Untitled Resume";
const MAX_TITLE_CHARS: usize = 200;

// ────────────────────────────────────────────────────────────────────────────
// Request types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct UserIdQuery {
    pub user_id: Uuid,
}

#[derive(Debug, Deserialize)]
pub struct CreateResumeRequest {
    pub user_id: Uuid,
    pub title: Option<String>,
    pub template_id: Option<String>,
    pub content: Option<ResumeContent>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateResumeRequest {
    pub title: Option<String>,
    pub template_id: Option<String>,
    pub content: Option<ResumeContent>,
}

#[derive(Debug, Deserialize)]
pub struct ExportQuery {
    pub user_id: Uuid,
    pub format: Option<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Validation
// ────────────────────────────────────────────────────────────────────────────

fn validate_title(title: &str) -> Result<String, AppError> {
    let title = title.trim();
    if title.is_empty() {
        return Err(AppError::Validation("title cannot be empty".to_string()));
    }
    if title.chars().count() > MAX_TITLE_CHARS {
        return Err(AppError::Validation(format!(
            "title cannot exceed {MAX_TITLE_CHARS} characters"
        )));
    }
    Ok(title.to_string())
}

fn validate_template(template_id: &str) -> Result<String, AppError> {
    find_template(template_id)
        .map(|t| t.id.to_string())
        .ok_or_else(|| AppError::Validation(format!("unknown template '{template_id}'")))
}

fn content_to_value(content: &ResumeContent) -> Result<Value, AppError> {
    serde_json::to_value(content).map_err(|e| AppError::Internal(e.into()))
}

async fn load_resume(state: &AppState, user_id: Uuid, id: Uuid) -> Result<ResumeRow, AppError> {
    state
        .store
        .get(user_id, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Resume {id} not found")))
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/resumes
pub async fn handle_list_resumes(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<Vec<ResumeSummaryRow>>, AppError> {
    Ok(Json(state.store.list(params.user_id).await?))
}

/// POST /api/v1/resumes
pub async fn handle_create_resume(
    State(state): State<AppState>,
    Json(request): Json<CreateResumeRequest>,
) -> Result<(StatusCode, Json<ResumeRow>), AppError> {
    let title = validate_title(request.title.as_deref().unwrap_or(DEFAULT_TITLE))?;
    let template_id =
        validate_template(request.template_id.as_deref().unwrap_or(DEFAULT_TEMPLATE_ID))?;
    let content = content_to_value(&request.content.unwrap_or_default())?;

    let row = state
        .store
        .create(NewResume {
            user_id: request.user_id,
            title,
            template_id,
            content,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(row)))
}

/// GET /api/v1/resumes/:id
pub async fn handle_get_resume(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<ResumeRow>, AppError> {
    Ok(Json(load_resume(&state, params.user_id, id).await?))
}

/// PUT /api/v1/resumes/:id
pub async fn handle_update_resume(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(params): Query<UserIdQuery>,
    Json(request): Json<UpdateResumeRequest>,
) -> Result<Json<ResumeRow>, AppError> {
    let changes = ResumeChanges {
        title: request.title.as_deref().map(validate_title).transpose()?,
        template_id: request
            .template_id
            .as_deref()
            .map(validate_template)
            .transpose()?,
        content: request.content.as_ref().map(content_to_value).transpose()?,
    };

    let row = state
        .store
        .update(params.user_id, id, changes)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Resume {id} not found")))?;

    Ok(Json(row))
}

/// DELETE /api/v1/resumes/:id
pub async fn handle_delete_resume(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(params): Query<UserIdQuery>,
) -> Result<StatusCode, AppError> {
    if !state.store.delete(params.user_id, id).await? {
        return Err(AppError::NotFound(format!("Resume {id} not found")));
    }
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/resumes/:id/duplicate
///
/// Copies title, template and content. The copy starts unscored.
pub async fn handle_duplicate_resume(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(params): Query<UserIdQuery>,
) -> Result<(StatusCode, Json<ResumeRow>), AppError> {
    let original = load_resume(&state, params.user_id, id).await?;
    let title: String = format!("{} (Copy)", original.title)
        .chars()
        .take(MAX_TITLE_CHARS)
        .collect();

    let row = state
        .store
        .create(NewResume {
            user_id: params.user_id,
            title,
            template_id: original.template_id,
            content: original.content,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(row)))
}

/// GET /api/v1/resumes/:id/export?format=text|json
pub async fn handle_export_resume(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(params): Query<ExportQuery>,
) -> Result<Response, AppError> {
    let format_name = params.format.as_deref().unwrap_or("text");
    let format = ExportFormat::from_name(format_name).ok_or_else(|| {
        AppError::Validation(format!(
            "unsupported export format '{format_name}' (expected text or json)"
        ))
    })?;

    let resume = load_resume(&state, params.user_id, id).await?;
    let content = resume.parsed_content();
    let body = match format {
        ExportFormat::Text => render_text(&content),
        ExportFormat::Json => render_json(&content).map_err(|e| AppError::Internal(e.into()))?,
    };

    let disposition = format!(
        "attachment; filename=\"{}\"",
        export_filename(&resume.title, format)
    );

    Ok((
        [
            (header::CONTENT_TYPE, format.content_type().to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        body,
    )
        .into_response())
}
