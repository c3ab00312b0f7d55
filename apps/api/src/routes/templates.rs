use axum::Json;

use crate::templates::{Template, TEMPLATES};

/// GET /api/v1/templates
pub async fn list_templates_handler() -> Json<&'static [Template]> {
    Json(TEMPLATES)
}
