// AI assist: content suggestions from the LLM provider.
// Suggestions are returned to the editor, never written to the resume.

pub mod handlers;
pub mod prompts;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::llm_client::prompts::{JSON_ONLY_SYSTEM, PLAIN_TEXT_SYSTEM};
use crate::llm_client::LlmClient;
use crate::models::content::{ResumeContent, Skill};

const MAX_SKILL_SUGGESTIONS: usize = 10;
const FALLBACK_ROLE: &str = "their next role";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssistKind {
    Summary,
    ImproveBullet,
    SuggestSkills,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AssistRequest {
    pub kind: AssistKind,
    #[serde(default)]
    pub content: ResumeContent,
    /// The bullet to rewrite, for `improve_bullet`.
    #[serde(default)]
    pub text: String,
    /// Overrides the job title from the content.
    #[serde(default)]
    pub job_title: Option<String>,
}

impl AssistRequest {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.kind == AssistKind::ImproveBullet && self.text.trim().is_empty() {
            return Err(AppError::Validation(
                "text is required to improve a bullet".to_string(),
            ));
        }
        Ok(())
    }

    fn target_role(&self) -> &str {
        self.job_title
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .or_else(|| Some(self.content.personal_info.job_title.trim()).filter(|t| !t.is_empty()))
            .unwrap_or(FALLBACK_ROLE)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AssistResponse {
    pub kind: AssistKind,
    pub suggestions: Vec<String>,
}

pub async fn run_assist(llm: &LlmClient, request: &AssistRequest) -> Result<AssistResponse, AppError> {
    let role = request.target_role();

    let suggestions = match request.kind {
        AssistKind::Summary => {
            let prompt = prompts::build_summary_prompt(&request.content, role);
            vec![llm.call_text(&prompt, PLAIN_TEXT_SYSTEM).await?]
        }
        AssistKind::ImproveBullet => {
            let prompt = prompts::build_bullet_prompt(&request.text, role);
            vec![llm.call_text(&prompt, PLAIN_TEXT_SYSTEM).await?]
        }
        AssistKind::SuggestSkills => {
            let prompt = prompts::build_skills_prompt(&request.content, role);
            let suggested: Vec<String> = llm.call_json(&prompt, JSON_ONLY_SYSTEM).await?;
            new_skills(&request.content.skills, suggested)
        }
    };

    info!(
        "Assist {:?} for role '{role}' returned {} suggestion(s)",
        request.kind,
        suggestions.len()
    );

    Ok(AssistResponse {
        kind: request.kind,
        suggestions,
    })
}

/// Drops blanks, skills already listed and repeats (case-insensitive), then
/// caps the list.
fn new_skills(existing: &[Skill], suggested: Vec<String>) -> Vec<String> {
    let mut seen: Vec<String> = existing
        .iter()
        .map(|s| s.name.trim().to_lowercase())
        .collect();

    let mut fresh = Vec::new();
    for skill in suggested {
        let skill = skill.trim().to_string();
        let key = skill.to_lowercase();
        if skill.is_empty() || seen.contains(&key) {
            continue;
        }
        seen.push(key);
        fresh.push(skill);
        if fresh.len() == MAX_SKILL_SUGGESTIONS {
            break;
        }
    }
    fresh
}
