use tracing::debug;

use crate::ats::checks::CHECKS;
use crate::ats::models::{AtsCheck, AtsCheckResult, CategoryGroup, CheckCategory, Grade};
use crate::models::content::ResumeContent;

const MAX_IMPROVEMENTS: usize = 5;

/// Scores a resume snapshot against every ATS check.
///
/// Pure and total: the same content always yields the same result, and
/// empty or partial content yields a low score rather than an error.
pub fn analyze_resume(content: &ResumeContent) -> AtsCheckResult {
    let checks: Vec<AtsCheck> = CHECKS.iter().map(|check| check(content)).collect();

    let earned: u32 = checks.iter().map(|c| c.score).sum();
    let possible: u32 = checks.iter().map(|c| c.max_score).sum();
    let score = percentage(earned, possible);
    let grade = Grade::from_score(score);

    debug!("ATS analysis: {earned}/{possible} points, score {score}, grade {grade}");

    AtsCheckResult {
        score,
        grade,
        summary: summary_for(score).to_string(),
        improvements: rank_improvements(&checks),
        checks,
    }
}

fn percentage(earned: u32, possible: u32) -> u32 {
    if possible == 0 {
        return 0;
    }
    ((100.0 * earned as f64 / possible as f64).round() as u32).min(100)
}

/// One-line verdict for the overall score, banded like the grade.
pub fn summary_for(score: u32) -> &'static str {
    match Grade::from_score(score) {
        Grade::A => "Excellent! Your resume is highly optimized for applicant tracking systems.",
        Grade::B => "Great job! Your resume should perform well with most applicant tracking systems.",
        Grade::C => "Good start. A few improvements will noticeably boost your ATS compatibility.",
        Grade::D => "Fair. Your resume needs some work to pass ATS filters reliably.",
        Grade::F => "Needs improvement. Work through the suggestions below to raise your ATS compatibility.",
    }
}

/// Suggestions from non-passing checks, largest shortfall first. Ties keep
/// check order.
fn rank_improvements(checks: &[AtsCheck]) -> Vec<String> {
    let mut failing: Vec<&AtsCheck> = checks.iter().filter(|c| !c.passed()).collect();
    failing.sort_by(|a, b| b.shortfall().cmp(&a.shortfall()));

    failing
        .into_iter()
        .take(MAX_IMPROVEMENTS)
        .map(|c| c.suggestion.as_deref().unwrap_or(c.message.as_str()))
        .filter(|s| !s.trim().is_empty())
        .map(String::from)
        .collect()
}

/// Groups checks by category for display, in category order. Categories
/// with no checks are omitted.
pub fn group_by_category(checks: &[AtsCheck]) -> Vec<CategoryGroup> {
    CheckCategory::ALL
        .iter()
        .filter_map(|&category| {
            let members: Vec<AtsCheck> = checks
                .iter()
                .filter(|c| c.category == category)
                .cloned()
                .collect();
            if members.is_empty() {
                return None;
            }
            Some(CategoryGroup {
                category,
                label: category.label().to_string(),
                score: members.iter().map(|c| c.score).sum(),
                max_score: members.iter().map(|c| c.max_score).sum(),
                checks: members,
            })
        })
        .collect()
}
