//! Plain-text and JSON export of resume content.
//!
//! Rich-text markup from the editor is converted to plain lines here. The ATS
//! analyzer deliberately does not share this cleanup.

use std::sync::OnceLock;

use regex::Regex;

use crate::models::content::ResumeContent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Text,
    Json,
}

impl ExportFormat {
    /// Parses a `?format=` value, case-insensitively.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "text" | "txt" => Some(ExportFormat::Text),
            "json" => Some(ExportFormat::Json),
            _ => None,
        }
    }

    pub fn content_type(self) -> &'static str {
        match self {
            ExportFormat::Text => "text/plain; charset=utf-8",
            ExportFormat::Json => "application/json",
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Text => "txt",
            ExportFormat::Json => "json",
        }
    }
}

fn line_break_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)<br\s*/?>|</p>|</li>|</div>|</h[1-6]>").expect("line break pattern is valid")
    })
}

fn list_item_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)<li[^>]*>").expect("list item pattern is valid"))
}

fn tag_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"<[^>]*>").expect("tag pattern is valid"))
}

/// Converts editor markup to plain text: block ends become newlines, list
/// items become "- " bullets, remaining tags are dropped and the common
/// entities decoded. Blank lines are removed.
pub fn strip_markup(html: &str) -> String {
    let text = line_break_regex().replace_all(html, "\n");
    let text = list_item_regex().replace_all(&text, "- ");
    let text = tag_regex().replace_all(&text, "");
    let text = text
        .replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&");

    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Joins the non-blank parts with `sep`.
fn join_present(parts: &[&str], sep: &str) -> String {
    parts
        .iter()
        .map(|p| p.trim())
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join(sep)
}

fn date_range(start: &str, end: &str) -> String {
    let range = join_present(&[start, end], " - ");
    if range.is_empty() {
        range
    } else {
        format!("({range})")
    }
}

fn push_section(out: &mut String, heading: &str, body: &str) {
    if body.trim().is_empty() {
        return;
    }
    if !out.is_empty() {
        out.push('\n');
    }
    out.push_str(heading);
    out.push('\n');
    out.push_str(body.trim_end());
    out.push('\n');
}

/// Renders the resume as plain text with upper-case section headings.
/// Empty sections are skipped.
pub fn render_text(content: &ResumeContent) -> String {
    let info = &content.personal_info;
    let mut out = String::new();

    let header = [
        info.full_name(),
        info.job_title.trim().to_string(),
        join_present(&[&info.email, &info.phone, &info.location], " | "),
        info.links().join(" | "),
    ]
    .into_iter()
    .filter(|line| !line.is_empty())
    .collect::<Vec<_>>()
    .join("\n");
    if !header.is_empty() {
        out.push_str(&header);
        out.push('\n');
    }

    push_section(&mut out, "SUMMARY", &strip_markup(&content.summary));

    let experience = content
        .experience
        .iter()
        .map(|e| {
            let end = if e.current {
                "Present"
            } else {
                e.end_date.as_deref().unwrap_or_default()
            };
            let heading = join_present(
                &[
                    &join_present(&[&e.title, &e.company], ", "),
                    &date_range(&e.start_date, end),
                ],
                " ",
            );
            join_present(&[&heading, &e.location, &strip_markup(&e.description)], "\n")
        })
        .filter(|block| !block.is_empty())
        .collect::<Vec<_>>()
        .join("\n\n");
    push_section(&mut out, "EXPERIENCE", &experience);

    let education = content
        .education
        .iter()
        .map(|e| {
            let qualification = join_present(&[&e.degree, &e.field], " in ");
            let heading = join_present(
                &[
                    &join_present(&[&qualification, &e.school], ", "),
                    &date_range(&e.start_date, &e.end_date),
                ],
                " ",
            );
            join_present(&[&heading, &strip_markup(&e.description)], "\n")
        })
        .filter(|block| !block.is_empty())
        .collect::<Vec<_>>()
        .join("\n\n");
    push_section(&mut out, "EDUCATION", &education);

    let skills = content
        .skills
        .iter()
        .map(|s| s.name.trim())
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(", ");
    push_section(&mut out, "SKILLS", &skills);

    let projects = content
        .projects
        .iter()
        .map(|p| {
            let heading = join_present(&[&p.name, &p.url], " - ");
            join_present(&[&heading, &strip_markup(&p.description)], "\n")
        })
        .filter(|block| !block.is_empty())
        .collect::<Vec<_>>()
        .join("\n\n");
    push_section(&mut out, "PROJECTS", &projects);

    let certifications = content
        .certifications
        .iter()
        .map(|c| {
            join_present(
                &[&join_present(&[&c.name, &c.issuer], ", "), &date_range(&c.date, "")],
                " ",
            )
        })
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n");
    push_section(&mut out, "CERTIFICATIONS", &certifications);

    let languages = content
        .languages
        .iter()
        .map(|l| {
            if l.proficiency.trim().is_empty() {
                l.name.trim().to_string()
            } else {
                format!("{} ({})", l.name.trim(), l.proficiency.trim())
            }
        })
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n");
    push_section(&mut out, "LANGUAGES", &languages);

    let awards = content
        .awards
        .iter()
        .map(|a| {
            join_present(
                &[&join_present(&[&a.title, &a.issuer], ", "), &date_range(&a.date, "")],
                " ",
            )
        })
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n");
    push_section(&mut out, "AWARDS", &awards);

    out
}

/// Serializes the content for download.
pub fn render_json(content: &ResumeContent) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(content)
}

/// Download filename derived from the resume title, e.g. "senior-engineer.txt".
pub fn export_filename(title: &str, format: ExportFormat) -> String {
    let slug = title
        .to_lowercase()
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("-");
    let stem = if slug.is_empty() { "resume" } else { &slug };
    format!("{stem}.{}", format.extension())
}
