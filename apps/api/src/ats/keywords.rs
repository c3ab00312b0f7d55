//! Word lists consulted by the ATS checks.
//!
//! These are data, not logic: extend a list here and every check that reads
//! it picks the change up. Matching is case-insensitive on whole words.

/// Strong action verbs counted by the summary and keyword checks.
pub const ACTION_VERBS: &[&str] = &[
    "achieved",
    "improved",
    "developed",
    "created",
    "managed",
    "led",
    "implemented",
    "designed",
    "built",
    "launched",
    "increased",
    "reduced",
    "delivered",
    "organized",
    "collaborated",
    "analyzed",
    "streamlined",
    "optimized",
    "generated",
    "established",
];

/// Competence words that, alongside the action verbs, make a summary read as
/// skill-oriented.
pub const SUMMARY_KEYWORDS: &[&str] = &[
    "experienced",
    "experience",
    "skilled",
    "expert",
    "expertise",
    "proficient",
    "specialized",
    "specializing",
    "certified",
    "accomplished",
    "proven",
    "results-driven",
    "track record",
];

/// Technical skill names recognized in the skills section.
pub const TECHNICAL_SKILLS: &[&str] = &[
    "javascript",
    "typescript",
    "python",
    "java",
    "c++",
    "c#",
    "rust",
    "golang",
    "ruby",
    "php",
    "swift",
    "kotlin",
    "scala",
    "sql",
    "nosql",
    "postgresql",
    "mysql",
    "mongodb",
    "react",
    "angular",
    "vue",
    "node",
    "node.js",
    "html",
    "css",
    "aws",
    "azure",
    "gcp",
    "docker",
    "kubernetes",
    "terraform",
    "git",
    "linux",
    "graphql",
    "rest api",
    "machine learning",
    "data analysis",
    "excel",
    "tableau",
    "figma",
    "agile",
    "scrum",
];

/// Interpersonal skill names recognized in the skills section.
pub const SOFT_SKILLS: &[&str] = &[
    "communication",
    "leadership",
    "teamwork",
    "collaboration",
    "problem solving",
    "problem-solving",
    "critical thinking",
    "time management",
    "adaptability",
    "creativity",
    "negotiation",
    "mentoring",
    "presentation",
    "project management",
];
