use crate::export::strip_markup;
use crate::llm_client::prompts::{ATS_STYLE_INSTRUCTION, GROUNDING_INSTRUCTION};
use crate::models::content::ResumeContent;

/// Compact plain-text digest of the resume for prompt context.
fn resume_digest(content: &ResumeContent) -> String {
    let mut lines = Vec::new();

    for exp in &content.experience {
        let role = [exp.title.trim(), exp.company.trim()]
            .iter()
            .filter(|s| !s.is_empty())
            .copied()
            .collect::<Vec<_>>()
            .join(" at ");
        if role.is_empty() {
            continue;
        }
        let description = strip_markup(&exp.description).replace('\n', " ");
        if description.is_empty() {
            lines.push(format!("- {role}"));
        } else {
            lines.push(format!("- {role}: {description}"));
        }
    }

    for edu in &content.education {
        let line = [edu.degree.trim(), edu.field.trim(), edu.school.trim()]
            .iter()
            .filter(|s| !s.is_empty())
            .copied()
            .collect::<Vec<_>>()
            .join(", ");
        if !line.is_empty() {
            lines.push(format!("- Education: {line}"));
        }
    }

    let skills = content
        .skills
        .iter()
        .map(|s| s.name.trim())
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>();
    if !skills.is_empty() {
        lines.push(format!("- Skills: {}", skills.join(", ")));
    }

    if lines.is_empty() {
        "(no experience, education or skills provided)".to_string()
    } else {
        lines.join("\n")
    }
}

pub fn build_summary_prompt(content: &ResumeContent, target_role: &str) -> String {
    let current = strip_markup(&content.summary);
    let current = if current.is_empty() {
        "(none)".to_string()
    } else {
        current
    };

    format!(
        r#"Write a professional resume summary of 40 to 80 words for a candidate targeting the role "{target_role}".

Candidate background:
{digest}

Current summary:
{current}

{GROUNDING_INSTRUCTION}
{ATS_STYLE_INSTRUCTION}"#,
        digest = resume_digest(content),
    )
}

pub fn build_bullet_prompt(bullet: &str, target_role: &str) -> String {
    format!(
        r#"Rewrite this resume bullet point for a candidate targeting the role "{target_role}". Keep it to one sentence of at most 30 words and make the impact explicit.

Bullet:
{bullet}

{GROUNDING_INSTRUCTION}
{ATS_STYLE_INSTRUCTION}"#,
        bullet = strip_markup(bullet),
    )
}

pub fn build_skills_prompt(content: &ResumeContent, target_role: &str) -> String {
    format!(
        r#"Suggest up to 10 additional skills a candidate targeting the role "{target_role}" should consider listing, based on their background. Do not repeat skills they already list.

Candidate background:
{digest}

Return a JSON array of strings, e.g. ["Docker", "Stakeholder management"]."#,
        digest = resume_digest(content),
    )
}
