use std::fmt;

use serde::{Deserialize, Serialize};

/// The eight facets an ATS review covers. Closed set: the presentation layer
/// groups on this rather than on free-text labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CheckCategory {
    ContactInfo,
    Summary,
    Experience,
    Education,
    Skills,
    Keywords,
    ContentLength,
    Formatting,
}

impl CheckCategory {
    /// Execution and display order.
    pub const ALL: [CheckCategory; 8] = [
        CheckCategory::ContactInfo,
        CheckCategory::Summary,
        CheckCategory::Experience,
        CheckCategory::Education,
        CheckCategory::Skills,
        CheckCategory::Keywords,
        CheckCategory::ContentLength,
        CheckCategory::Formatting,
    ];

    /// Stable identifier, also the serialized form.
    pub fn id(self) -> &'static str {
        match self {
            CheckCategory::ContactInfo => "contact-info",
            CheckCategory::Summary => "summary",
            CheckCategory::Experience => "experience",
            CheckCategory::Education => "education",
            CheckCategory::Skills => "skills",
            CheckCategory::Keywords => "keywords",
            CheckCategory::ContentLength => "content-length",
            CheckCategory::Formatting => "formatting",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CheckCategory::ContactInfo => "Contact Information",
            CheckCategory::Summary => "Professional Summary",
            CheckCategory::Experience => "Work Experience",
            CheckCategory::Education => "Education",
            CheckCategory::Skills => "Skills",
            CheckCategory::Keywords => "Keywords & Impact",
            CheckCategory::ContentLength => "Content Length",
            CheckCategory::Formatting => "Formatting",
        }
    }

    /// Point budget and status thresholds. Budgets sum to 100.
    pub fn rubric(self) -> Rubric {
        match self {
            CheckCategory::ContactInfo => Rubric::new(15, 12, 8),
            CheckCategory::Summary => Rubric::new(15, 12, 8),
            CheckCategory::Experience => Rubric::new(25, 20, 12),
            CheckCategory::Education => Rubric::new(10, 8, 5),
            CheckCategory::Skills => Rubric::new(15, 12, 7),
            CheckCategory::Keywords => Rubric::new(10, 8, 5),
            CheckCategory::ContentLength => Rubric::new(5, 4, 2),
            CheckCategory::Formatting => Rubric::new(5, 4, 2),
        }
    }
}

impl fmt::Display for CheckCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rubric {
    pub max_score: u32,
    pub pass_at: u32,
    pub warn_at: u32,
}

impl Rubric {
    const fn new(max_score: u32, pass_at: u32, warn_at: u32) -> Self {
        Self {
            max_score,
            pass_at,
            warn_at,
        }
    }

    pub fn status(&self, score: u32) -> CheckStatus {
        match score {
            s if s >= self.pass_at => CheckStatus::Pass,
            s if s >= self.warn_at => CheckStatus::Warning,
            _ => CheckStatus::Fail,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckStatus {
    Pass,
    Warning,
    Fail,
}

/// Outcome of one category check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AtsCheck {
    pub id: String,
    pub category: CheckCategory,
    pub name: String,
    pub status: CheckStatus,
    pub score: u32,
    pub max_score: u32,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl AtsCheck {
    /// Builds a check whose status follows the category's thresholds.
    /// Scores above the budget are capped; passing checks carry no suggestion.
    pub fn scored(
        category: CheckCategory,
        score: u32,
        message: impl Into<String>,
        suggestion: Option<String>,
    ) -> Self {
        let rubric = category.rubric();
        let score = score.min(rubric.max_score);
        let status = rubric.status(score);
        Self {
            id: category.id().to_string(),
            category,
            name: category.label().to_string(),
            status,
            score,
            max_score: rubric.max_score,
            message: message.into(),
            suggestion: suggestion.filter(|_| status != CheckStatus::Pass),
        }
    }

    /// Points left on the table.
    pub fn shortfall(&self) -> u32 {
        self.max_score - self.score
    }

    pub fn passed(&self) -> bool {
        self.status == CheckStatus::Pass
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Grade {
    A,
    B,
    C,
    D,
    F,
}

impl Grade {
    pub fn from_score(score: u32) -> Self {
        match score {
            s if s >= 90 => Grade::A,
            s if s >= 80 => Grade::B,
            s if s >= 70 => Grade::C,
            s if s >= 60 => Grade::D,
            _ => Grade::F,
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = match self {
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
            Grade::F => "F",
        };
        f.write_str(letter)
    }
}

/// Full analysis of one resume snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AtsCheckResult {
    pub score: u32,
    pub grade: Grade,
    pub checks: Vec<AtsCheck>,
    pub summary: String,
    pub improvements: Vec<String>,
}

/// Checks of one category with their combined points, for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryGroup {
    pub category: CheckCategory,
    pub label: String,
    pub score: u32,
    pub max_score: u32,
    pub checks: Vec<AtsCheck>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_budgets_sum_to_100() {
        let total: u32 = CheckCategory::ALL
            .iter()
            .map(|c| c.rubric().max_score)
            .sum();
        assert_eq!(total, 100);
    }

    #[test]
    fn test_rubric_status_bands() {
        let rubric = CheckCategory::Experience.rubric();
        assert_eq!(rubric.status(25), CheckStatus::Pass);
        assert_eq!(rubric.status(20), CheckStatus::Pass);
        assert_eq!(rubric.status(19), CheckStatus::Warning);
        assert_eq!(rubric.status(12), CheckStatus::Warning);
        assert_eq!(rubric.status(11), CheckStatus::Fail);
    }

    #[test]
    fn test_scored_caps_at_budget() {
        let check = AtsCheck::scored(CheckCategory::Formatting, 9, "ok", None);
        assert_eq!(check.score, 5);
        assert_eq!(check.shortfall(), 0);
        assert!(check.passed());
    }

    #[test]
    fn test_grade_bands() {
        assert_eq!(Grade::from_score(100), Grade::A);
        assert_eq!(Grade::from_score(90), Grade::A);
        assert_eq!(Grade::from_score(89), Grade::B);
        assert_eq!(Grade::from_score(70), Grade::C);
        assert_eq!(Grade::from_score(60), Grade::D);
        assert_eq!(Grade::from_score(59), Grade::F);
        assert_eq!(Grade::from_score(0), Grade::F);
    }

    #[test]
    fn test_check_serializes_camel_case() {
        let check = AtsCheck::scored(
            CheckCategory::ContactInfo,
            3,
            "Missing contact details",
            Some("Add your email".to_string()),
        );
        let json = serde_json::to_value(&check).unwrap();
        assert_eq!(json["id"], "contact-info");
        assert_eq!(json["category"], "contact-info");
        assert_eq!(json["maxScore"], 15);
        assert_eq!(json["status"], "fail");
    }

    #[test]
    fn test_passing_check_omits_suggestion() {
        let check = AtsCheck::scored(
            CheckCategory::Formatting,
            5,
            "Clean",
            Some("Nothing to do".to_string()),
        );
        assert_eq!(check.suggestion, None);
        let json = serde_json::to_value(&check).unwrap();
        assert!(json.get("suggestion").is_none());
    }
}
