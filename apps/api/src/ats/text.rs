//! Field validators and text heuristics shared by the ATS checks.
//!
//! Rich-text markup is not stripped here: tags count toward word and
//! character totals exactly as the editor stores them.

use std::collections::BTreeSet;
use std::sync::OnceLock;

use regex::Regex;

use crate::ats::keywords::{ACTION_VERBS, SOFT_SKILLS, SUMMARY_KEYWORDS, TECHNICAL_SKILLS};

/// Compiles a case-insensitive alternation over `words`, anchored on `\b`.
/// Only valid for lists of plain word characters.
fn word_pattern(words: &[&str]) -> Regex {
    let alternation = words
        .iter()
        .map(|w| regex::escape(w))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!(r"(?i)\b(?:{alternation})\b")).expect("word list compiles to a valid pattern")
}

/// Like [`word_pattern`] but delimited by non-word characters, so terms such
/// as `c++` or `node.js` still match. Suitable for `is_match` only.
fn term_pattern(words: &[&str]) -> Regex {
    let alternation = words
        .iter()
        .map(|w| regex::escape(w))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!(r"(?i)(?:^|\W)(?:{alternation})(?:$|\W)"))
        .expect("term list compiles to a valid pattern")
}

fn email_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"))
}

fn metric_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[0-9]+%?").expect("metric pattern is valid"))
}

fn action_verb_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| word_pattern(ACTION_VERBS))
}

fn summary_keyword_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| term_pattern(SUMMARY_KEYWORDS))
}

fn technical_skill_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| term_pattern(TECHNICAL_SKILLS))
}

fn soft_skill_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| term_pattern(SOFT_SKILLS))
}

/// A field counts as filled when it has any non-whitespace content.
pub fn is_present(value: &str) -> bool {
    !value.trim().is_empty()
}

pub fn is_valid_email(value: &str) -> bool {
    email_regex().is_match(value)
}

/// Number of whitespace-separated tokens.
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

pub fn has_digit(text: &str) -> bool {
    text.chars().any(|c| c.is_ascii_digit())
}

/// Number of numeric runs (optionally followed by `%`) in `text`.
pub fn count_metrics(text: &str) -> usize {
    metric_regex().find_iter(text).count()
}

/// Distinct action verbs used in `text`, lowercased.
pub fn action_verbs_in(text: &str) -> BTreeSet<String> {
    action_verb_regex()
        .find_iter(text)
        .map(|m| m.as_str().to_lowercase())
        .collect()
}

/// True when `text` uses an action verb or a competence keyword.
pub fn has_skill_language(text: &str) -> bool {
    action_verb_regex().is_match(text) || summary_keyword_regex().is_match(text)
}

pub fn is_technical_skill(name: &str) -> bool {
    technical_skill_regex().is_match(name)
}

pub fn is_soft_skill(name: &str) -> bool {
    soft_skill_regex().is_match(name)
}

/// Pictographic emoji, dingbats and regional-indicator flags. Many ATS
/// parsers drop or mangle these.
pub fn is_emoji(c: char) -> bool {
    matches!(
        u32::from(c),
        0x1F300..=0x1FAFF | 0x2600..=0x27BF | 0x1F1E6..=0x1F1FF
    )
}

pub fn contains_emoji(text: &str) -> bool {
    text.chars().any(is_emoji)
}
