use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use uuid::Uuid;

use crate::models::content::ResumeContent;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ResumeRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub template_id: String,
    pub content: Value,
    pub ats_score: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ResumeRow {
    /// Typed view of the stored content. Content that no longer matches the
    /// editor's shape is read as an empty resume.
    pub fn parsed_content(&self) -> ResumeContent {
        match serde_json::from_value(self.content.clone()) {
            Ok(content) => content,
            Err(e) => {
                tracing::warn!("Resume {} has unreadable content: {e}", self.id);
                ResumeContent::default()
            }
        }
    }
}

/// Listing projection: everything but the content body.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ResumeSummaryRow {
    pub id: Uuid,
    pub title: String,
    pub template_id: String,
    pub ats_score: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&ResumeRow> for ResumeSummaryRow {
    fn from(row: &ResumeRow) -> Self {
        Self {
            id: row.id,
            title: row.title.clone(),
            template_id: row.template_id.clone(),
            ats_score: row.ats_score,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn make_row(content: Value) -> ResumeRow {
        ResumeRow {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            title: "Backend".to_string(),
            template_id: "modern".to_string(),
            content,
            ats_score: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_parsed_content_reads_editor_shape() {
        let row = make_row(json!({ "summary": "Rust engineer" }));
        assert_eq!(row.parsed_content().summary, "Rust engineer");
    }

    #[test]
    fn test_parsed_content_falls_back_to_empty() {
        let row = make_row(json!("not an object"));
        assert_eq!(row.parsed_content(), ResumeContent::default());
    }
}
