//! Structured resume content as produced by the editor.
//!
//! Field names follow the editor's camelCase JSON. Every field is optional on
//! the wire: missing values and explicit `null`s both deserialize to the empty
//! value, so downstream consumers never branch on nullability.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Treats an explicit JSON `null` the same as a missing field.
fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResumeContent {
    #[serde(deserialize_with = "nullable")]
    pub personal_info: PersonalInfo,
    #[serde(deserialize_with = "nullable")]
    pub summary: String,
    #[serde(deserialize_with = "nullable")]
    pub experience: Vec<Experience>,
    #[serde(deserialize_with = "nullable")]
    pub education: Vec<Education>,
    #[serde(deserialize_with = "nullable")]
    pub skills: Vec<Skill>,
    #[serde(deserialize_with = "nullable")]
    pub projects: Vec<Project>,
    #[serde(deserialize_with = "nullable")]
    pub certifications: Vec<Certification>,
    #[serde(deserialize_with = "nullable")]
    pub languages: Vec<Language>,
    #[serde(deserialize_with = "nullable")]
    pub awards: Vec<Award>,
    /// Keys this model does not name (extra sections such as hobbies or
    /// volunteering). Kept so they are stored unchanged and still scanned by
    /// the formatting check.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonalInfo {
    #[serde(deserialize_with = "nullable")]
    pub first_name: String,
    #[serde(deserialize_with = "nullable")]
    pub last_name: String,
    #[serde(deserialize_with = "nullable")]
    pub email: String,
    #[serde(deserialize_with = "nullable")]
    pub phone: String,
    #[serde(deserialize_with = "nullable")]
    pub location: String,
    #[serde(deserialize_with = "nullable")]
    pub job_title: String,
    #[serde(deserialize_with = "nullable")]
    pub linkedin: String,
    #[serde(deserialize_with = "nullable")]
    pub website: String,
    #[serde(deserialize_with = "nullable")]
    pub github: String,
    #[serde(deserialize_with = "nullable")]
    pub address: String,
    #[serde(deserialize_with = "nullable")]
    pub postal_code: String,
    #[serde(deserialize_with = "nullable")]
    pub nationality: String,
    #[serde(deserialize_with = "nullable")]
    pub date_of_birth: String,
    #[serde(deserialize_with = "nullable")]
    pub driving_license: String,
    /// Keys this model does not name.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl PersonalInfo {
    /// "First Last", skipping blank parts.
    pub fn full_name(&self) -> String {
        [self.first_name.trim(), self.last_name.trim()]
            .iter()
            .filter(|part| !part.is_empty())
            .copied()
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Profile links in display order, blanks skipped.
    pub fn links(&self) -> Vec<&str> {
        [&self.linkedin, &self.website, &self.github]
            .into_iter()
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Experience {
    #[serde(deserialize_with = "nullable")]
    pub id: String,
    #[serde(deserialize_with = "nullable")]
    pub title: String,
    #[serde(deserialize_with = "nullable")]
    pub company: String,
    #[serde(deserialize_with = "nullable")]
    pub location: String,
    #[serde(deserialize_with = "nullable")]
    pub start_date: String,
    pub end_date: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub current: bool,
    #[serde(deserialize_with = "nullable")]
    pub description: String,
    /// Keys this model does not name.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Education {
    #[serde(deserialize_with = "nullable")]
    pub id: String,
    #[serde(deserialize_with = "nullable")]
    pub school: String,
    #[serde(deserialize_with = "nullable")]
    pub degree: String,
    #[serde(deserialize_with = "nullable")]
    pub field: String,
    #[serde(deserialize_with = "nullable")]
    pub start_date: String,
    #[serde(deserialize_with = "nullable")]
    pub end_date: String,
    #[serde(deserialize_with = "nullable")]
    pub description: String,
    /// Keys this model does not name.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Skill {
    #[serde(deserialize_with = "nullable")]
    pub id: String,
    #[serde(deserialize_with = "nullable")]
    pub name: String,
    /// Keys this model does not name.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Project {
    #[serde(deserialize_with = "nullable")]
    pub id: String,
    #[serde(deserialize_with = "nullable")]
    pub name: String,
    #[serde(deserialize_with = "nullable")]
    pub description: String,
    #[serde(deserialize_with = "nullable")]
    pub url: String,
    /// Keys this model does not name.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Certification {
    #[serde(deserialize_with = "nullable")]
    pub id: String,
    #[serde(deserialize_with = "nullable")]
    pub name: String,
    #[serde(deserialize_with = "nullable")]
    pub issuer: String,
    #[serde(deserialize_with = "nullable")]
    pub date: String,
    /// Keys this model does not name.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Language {
    #[serde(deserialize_with = "nullable")]
    pub id: String,
    #[serde(deserialize_with = "nullable")]
    pub name: String,
    #[serde(deserialize_with = "nullable")]
    pub proficiency: String,
    /// Keys this model does not name.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Award {
    #[serde(deserialize_with = "nullable")]
    pub id: String,
    #[serde(deserialize_with = "nullable")]
    pub title: String,
    #[serde(deserialize_with = "nullable")]
    pub issuer: String,
    #[serde(deserialize_with = "nullable")]
    pub date: String,
    /// Keys this model does not name.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_object_deserializes_to_default() {
        let content: ResumeContent = serde_json::from_value(json!({})).unwrap();
        assert_eq!(content, ResumeContent::default());
    }

    #[test]
    fn test_nulls_become_empty_values() {
        let content: ResumeContent = serde_json::from_value(json!({
            "personalInfo": { "firstName": null, "email": "a@b.co" },
            "summary": null,
            "experience": null,
            "skills": [{ "id": "1", "name": null }]
        }))
        .unwrap();
        assert_eq!(content.personal_info.first_name, "");
        assert_eq!(content.personal_info.email, "a@b.co");
        assert_eq!(content.summary, "");
        assert!(content.experience.is_empty());
        assert_eq!(content.skills[0].name, "");
    }

    #[test]
    fn test_camel_case_fields_and_null_end_date() {
        let content: ResumeContent = serde_json::from_value(json!({
            "experience": [{
                "title": "Engineer",
                "company": "Acme",
                "startDate": "2021-01",
                "endDate": null,
                "current": true,
                "description": "Built things"
            }]
        }))
        .unwrap();
        let exp = &content.experience[0];
        assert_eq!(exp.start_date, "2021-01");
        assert_eq!(exp.end_date, None);
        assert!(exp.current);
    }

    #[test]
    fn test_unknown_fields_are_kept_and_written_back() {
        let input = json!({
            "summary": "Hello",
            "hobbies": ["chess"],
            "personalInfo": { "firstName": "Ada", "twitter": "@ada" },
            "skills": [{ "id": "1", "name": "Rust", "level": 4 }]
        });
        let content: ResumeContent = serde_json::from_value(input).unwrap();
        assert_eq!(content.summary, "Hello");
        assert_eq!(content.extra["hobbies"], json!(["chess"]));
        assert_eq!(content.personal_info.extra["twitter"], "@ada");
        assert_eq!(content.skills[0].extra["level"], 4);

        let written = serde_json::to_value(&content).unwrap();
        assert_eq!(written["hobbies"], json!(["chess"]));
        assert_eq!(written["personalInfo"]["twitter"], "@ada");
        assert_eq!(written["skills"][0]["level"], 4);
        assert!(written.get("extra").is_none());
    }

    #[test]
    fn test_full_name_skips_blank_parts() {
        let info = PersonalInfo {
            first_name: "Ada".to_string(),
            last_name: "  ".to_string(),
            ..Default::default()
        };
        assert_eq!(info.full_name(), "Ada");
    }

    #[test]
    fn test_links_in_display_order() {
        let info = PersonalInfo {
            github: "github.com/ada".to_string(),
            linkedin: "linkedin.com/in/ada".to_string(),
            ..Default::default()
        };
        assert_eq!(info.links(), vec!["linkedin.com/in/ada", "github.com/ada"]);
    }
}
