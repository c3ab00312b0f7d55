use std::sync::Arc;

use crate::llm_client::LlmClient;
use crate::resumes::store::ResumeStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Resume persistence. Postgres in production, in-memory in router tests.
    pub store: Arc<dyn ResumeStore>,
    /// `None` when no provider key is configured; assist routes answer 503.
    pub llm: Option<LlmClient>,
}
