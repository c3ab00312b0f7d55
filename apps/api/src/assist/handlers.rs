use axum::{extract::State, Json};

use crate::assist::{run_assist, AssistRequest, AssistResponse};
use crate::errors::AppError;
use crate::state::AppState;

/// POST /api/v1/assist
///
/// Returns AI-generated suggestions for the editor. 503 when no provider key
/// is configured.
pub async fn handle_assist(
    State(state): State<AppState>,
    Json(request): Json<AssistRequest>,
) -> Result<Json<AssistResponse>, AppError> {
    let llm = state.llm.as_ref().ok_or(AppError::AssistUnavailable)?;
    request.validate()?;
    Ok(Json(run_assist(llm, &request).await?))
}
