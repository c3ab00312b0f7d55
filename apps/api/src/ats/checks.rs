//! The eight category checks.
//!
//! Every check is a pure function of the content snapshot. Missing data is a
//! scored deficiency, never an error. When a check falls short it offers the
//! single most useful suggestion, in its own priority order.

use crate::ats::models::{AtsCheck, CheckCategory, CheckStatus};
use crate::ats::text::{
    action_verbs_in, contains_emoji, count_metrics, count_words, has_digit, has_skill_language,
    is_present, is_soft_skill, is_technical_skill, is_valid_email,
};
use crate::models::content::ResumeContent;

pub type Check = fn(&ResumeContent) -> AtsCheck;

/// All checks in execution order. Order only affects result position.
pub const CHECKS: [Check; 8] = [
    check_contact_info,
    check_summary,
    check_experience,
    check_education,
    check_skills,
    check_keywords,
    check_content_length,
    check_formatting,
];

const MIN_DETAILED_DESCRIPTION_CHARS: usize = 50;
const MIN_PHONE_CHARS: usize = 10;

fn plural(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{count} {singular}")
    } else {
        format!("{count} {plural}")
    }
}

/// Summary text followed by every experience description, space-joined.
fn narrative_text(content: &ResumeContent) -> String {
    std::iter::once(content.summary.as_str())
        .chain(content.experience.iter().map(|e| e.description.as_str()))
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn check_contact_info(content: &ResumeContent) -> AtsCheck {
    let info = &content.personal_info;

    let has_name = is_present(&info.first_name) && is_present(&info.last_name);
    let has_email = is_valid_email(info.email.trim());
    let has_phone = info.phone.trim().chars().count() >= MIN_PHONE_CHARS;
    let has_location = is_present(&info.location);
    let has_link = !info.links().is_empty();

    let weighted: [(bool, u32); 5] = [
        (has_name, 3),
        (has_email, 4),
        (has_phone, 3),
        (has_location, 2),
        (has_link, 3),
    ];
    let score: u32 = weighted
        .iter()
        .filter(|(present, _)| *present)
        .map(|(_, points)| points)
        .sum();

    let found = [has_name, has_email, has_phone, has_location, has_link]
        .iter()
        .filter(|f| **f)
        .count();
    let message = if found == 5 {
        "All key contact details are present".to_string()
    } else {
        format!("{found} of 5 key contact details present")
    };

    let suggestion = if !has_name {
        Some("Add your full name (first and last)")
    } else if !has_email {
        if is_present(&info.email) {
            Some("Check your email address; it does not look valid")
        } else {
            Some("Add a professional email address")
        }
    } else if !has_phone {
        Some("Add a phone number including the area code")
    } else if !has_location {
        Some("Add your city and country so recruiters can filter by location")
    } else if !has_link {
        Some("Add a LinkedIn profile, personal website or GitHub link")
    } else {
        None
    };

    AtsCheck::scored(
        CheckCategory::ContactInfo,
        score,
        message,
        suggestion.map(String::from),
    )
}

pub fn check_summary(content: &ResumeContent) -> AtsCheck {
    let summary = content.summary.trim();
    if summary.is_empty() {
        return AtsCheck::scored(
            CheckCategory::Summary,
            0,
            "No professional summary found",
            Some(
                "Add a 30-200 word professional summary highlighting your experience, key skills and top achievements"
                    .to_string(),
            ),
        );
    }

    let words = count_words(summary);
    let uses_skill_language = has_skill_language(summary);
    let quantified = has_digit(summary);

    let length_points = match words {
        30..=200 => 5,
        w if w >= 20 => 3,
        _ => 1,
    };
    let language_points = if uses_skill_language { 5 } else { 0 };
    let metric_points = if quantified { 5 } else { 2 };

    let suggestion = if words < 30 {
        Some("Expand your summary to 30-200 words describing your experience, strengths and goals")
    } else if words > 200 {
        Some("Shorten your summary to under 200 words; recruiters skim the opening lines")
    } else if !uses_skill_language {
        Some("Use action verbs and skill keywords such as \"developed\", \"led\" or \"experienced\"")
    } else if !quantified {
        Some("Add a measurable highlight such as years of experience, team size or a % improvement")
    } else {
        None
    };

    AtsCheck::scored(
        CheckCategory::Summary,
        length_points + language_points + metric_points,
        format!("Summary has {}", plural(words, "word", "words")),
        suggestion.map(String::from),
    )
}

pub fn check_experience(content: &ResumeContent) -> AtsCheck {
    let entries = &content.experience;
    if entries.is_empty() {
        return AtsCheck::scored(
            CheckCategory::Experience,
            0,
            "No work experience found",
            Some(
                "Add your work history with job titles, companies, dates and descriptions"
                    .to_string(),
            ),
        );
    }

    let count = entries.len();
    let all_titles = entries.iter().all(|e| is_present(&e.title));
    let all_companies = entries.iter().all(|e| is_present(&e.company));
    let all_start_dates = entries.iter().all(|e| is_present(&e.start_date));
    let detailed = entries
        .iter()
        .filter(|e| e.description.chars().count() > MIN_DETAILED_DESCRIPTION_CHARS)
        .count();
    let quantified = entries.iter().filter(|e| has_digit(&e.description)).count();

    // >= 80% detailed, >= 50% quantified
    let mostly_detailed = detailed * 5 >= count * 4;
    let mostly_quantified = quantified * 2 >= count;

    let mut score = (3 * count).min(9) as u32;
    if all_titles {
        score += 4;
    }
    if all_companies {
        score += 3;
    }
    if all_start_dates {
        score += 3;
    }
    if mostly_detailed {
        score += 3;
    }
    if mostly_quantified {
        score += 3;
    }

    let suggestion = if !all_titles {
        Some("Add a job title to every position")
    } else if !all_companies {
        Some("Add the company name to every position")
    } else if !all_start_dates {
        Some("Add a start date to every position")
    } else if !mostly_detailed {
        Some("Describe each role in more detail (over 50 characters) covering responsibilities and results")
    } else if !mostly_quantified {
        Some("Quantify your achievements with numbers, percentages or amounts")
    } else if count < 3 {
        Some("Add other relevant positions, internships or freelance work if you have them")
    } else {
        None
    };

    AtsCheck::scored(
        CheckCategory::Experience,
        score,
        format!(
            "{} listed, {} with detailed descriptions",
            plural(count, "position", "positions"),
            detailed
        ),
        suggestion.map(String::from),
    )
}

pub fn check_education(content: &ResumeContent) -> AtsCheck {
    let entries = &content.education;
    if entries.is_empty() {
        // A missing education section is a soft gap, not a failure.
        return AtsCheck {
            status: CheckStatus::Warning,
            ..AtsCheck::scored(
                CheckCategory::Education,
                2,
                "No education listed",
                Some("Add your highest degree, diploma or relevant training".to_string()),
            )
        };
    }

    let count = entries.len();
    let any_school = entries.iter().any(|e| is_present(&e.school));
    let any_degree = entries.iter().any(|e| is_present(&e.degree));
    let any_date = entries
        .iter()
        .any(|e| is_present(&e.start_date) || is_present(&e.end_date));

    let mut score = (3 * count).min(6) as u32;
    if any_school {
        score += 2;
    }
    if any_degree {
        score += 1;
    }
    if any_date {
        score += 1;
    }

    let suggestion = if !any_school {
        Some("Add the name of your school or university")
    } else if !any_degree {
        Some("Add the degree or qualification you earned")
    } else if !any_date {
        Some("Add attendance or graduation dates")
    } else if count < 2 {
        Some("Add further degrees, certifications or relevant coursework")
    } else {
        None
    };

    AtsCheck::scored(
        CheckCategory::Education,
        score,
        format!("{} listed", plural(count, "education entry", "education entries")),
        suggestion.map(String::from),
    )
}

pub fn check_skills(content: &ResumeContent) -> AtsCheck {
    let skills = &content.skills;
    if skills.is_empty() {
        return AtsCheck::scored(
            CheckCategory::Skills,
            0,
            "No skills listed",
            Some("Add a skills section with 6-10 relevant hard and soft skills".to_string()),
        );
    }

    let count = skills.len();
    let has_technical = skills.iter().any(|s| is_technical_skill(&s.name));
    let has_soft = skills.iter().any(|s| is_soft_skill(&s.name));

    let count_points = match count {
        c if c >= 10 => 10,
        c if c >= 6 => 7,
        c if c >= 3 => 4,
        _ => 2,
    };
    let technical_points = if has_technical { 3 } else { 0 };
    let soft_points = if has_soft { 2 } else { 0 };

    let suggestion = if count < 6 {
        Some("List at least 6-10 skills relevant to the roles you are targeting")
    } else if !has_technical {
        Some("Include technical or tool-specific skills that appear in job descriptions")
    } else if !has_soft {
        Some("Add a few soft skills such as communication or leadership")
    } else if count < 10 {
        Some("Round out your skills section to 10 or more entries")
    } else {
        None
    };

    AtsCheck::scored(
        CheckCategory::Skills,
        count_points + technical_points + soft_points,
        format!("{} listed", plural(count, "skill", "skills")),
        suggestion.map(String::from),
    )
}

pub fn check_keywords(content: &ResumeContent) -> AtsCheck {
    let text = narrative_text(content);
    let verbs = action_verbs_in(&text).len();
    let metrics = count_metrics(&text);

    let verb_points = match verbs {
        v if v >= 8 => 6,
        v if v >= 5 => 4,
        v if v >= 2 => 2,
        _ => 0,
    };
    let metric_points = match metrics {
        m if m >= 5 => 4,
        m if m >= 2 => 2,
        m if m >= 1 => 1,
        _ => 0,
    };

    let suggestion = if verbs < 5 {
        Some("Start bullet points with strong action verbs such as \"led\", \"built\" or \"increased\"")
    } else if metrics < 5 {
        Some("Back up your impact with numbers, e.g. \"reduced costs by 20%\"")
    } else if verbs < 8 {
        Some("Vary your action verbs across roles to cover more keywords")
    } else {
        None
    };

    AtsCheck::scored(
        CheckCategory::Keywords,
        verb_points + metric_points,
        format!(
            "{} and {} found",
            plural(verbs, "action verb", "action verbs"),
            plural(metrics, "quantified result", "quantified results")
        ),
        suggestion.map(String::from),
    )
}

pub fn check_content_length(content: &ResumeContent) -> AtsCheck {
    let total_words = count_words(&content.summary)
        + content
            .experience
            .iter()
            .map(|e| count_words(&e.description))
            .sum::<usize>();

    let score = match total_words {
        300..=1000 => 5,
        200..=1200 => 3,
        w if w >= 100 => 2,
        _ => 1,
    };

    let suggestion = if total_words < 300 {
        Some("Add more detail; aim for 300-1000 words across your summary and experience")
    } else if total_words > 1000 {
        Some("Tighten your content to under 1000 words so key points stand out")
    } else {
        None
    };

    AtsCheck::scored(
        CheckCategory::ContentLength,
        score,
        format!(
            "{} across summary and experience",
            plural(total_words, "word", "words")
        ),
        suggestion.map(String::from),
    )
}

pub fn check_formatting(content: &ResumeContent) -> AtsCheck {
    let serialized = serde_json::to_string(content).unwrap_or_default();

    if contains_emoji(&serialized) {
        AtsCheck::scored(
            CheckCategory::Formatting,
            3,
            "Emojis or decorative symbols detected",
            Some("Remove emojis and decorative symbols; many ATS parsers cannot read them".to_string()),
        )
    } else {
        AtsCheck::scored(
            CheckCategory::Formatting,
            5,
            "No emojis or decorative symbols detected",
            None,
        )
    }
}
