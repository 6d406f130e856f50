use once_cell::sync::Lazy;
use regex::Regex;

use super::section::locate_section;

static LABELED_NAME_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?im)^[ \t]*(?:full[ \t]+name|name)[ \t]*[:\-][ \t]*([A-Z][A-Za-z.'-]*(?:[ \t]+[A-Z][A-Za-z.'-]*){0,3})")
        .unwrap()
});

static RESUME_OF_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:resume|curriculum[ \t]+vitae|cv)[ \t]+of[ \t]+([A-Z][A-Za-z.'-]*(?:[ \t]+[A-Z][A-Za-z.'-]*){0,3})")
        .unwrap()
});

static GENERIC_NAME_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b([A-Z][a-z]+(?:[ \t]+(?:[A-Z]\.|[A-Z][a-z]+))?[ \t]+[A-Z][a-z]+)\b").unwrap()
});

static STARTS_WITH_DIGIT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\+?\d").unwrap());

const CONTACT_SYNONYMS: &[&str] = &[
    "personal information",
    "personal details",
    "contact information",
    "contact",
    "about me",
];

pub fn extract_name(text: &str) -> Option<String> {
    if let Some(captures) = LABELED_NAME_RE.captures(text) {
        return captures.get(1).map(|m| m.as_str().trim().to_string());
    }
    if let Some(captures) = RESUME_OF_RE.captures(text) {
        return captures.get(1).map(|m| m.as_str().trim().to_string());
    }

    if let Some(name) = name_shaped_line(text, 10) {
        return Some(name);
    }

    let contact_section = locate_section(text, CONTACT_SYNONYMS);
    if !contact_section.is_empty() {
        if let Some(name) = name_shaped_line(&contact_section, 10) {
            return Some(name);
        }
    }

    GENERIC_NAME_RE
        .captures(text)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
}

pub fn split_name(full_name: &str) -> (String, String, String) {
    let tokens: Vec<&str> = full_name.split_whitespace().collect();
    match tokens.len() {
        0 => (String::new(), String::new(), String::new()),
        1 => (tokens[0].to_string(), String::new(), String::new()),
        2 => (tokens[0].to_string(), String::new(), tokens[1].to_string()),
        n => (
            tokens[0].to_string(),
            tokens[1..n - 1].join(" "),
            tokens[n - 1].to_string(),
        ),
    }
}

fn name_shaped_line(text: &str, max_lines: usize) -> Option<String> {
    for raw in text.lines().filter(|l| !l.trim().is_empty()).take(max_lines) {
        let line = raw.trim();
        if line.contains('@')
            || line.contains("http")
            || line.len() > 50
            || line.ends_with(':')
            || STARTS_WITH_DIGIT_RE.is_match(line)
        {
            continue;
        }

        let words: Vec<&str> = line.split_whitespace().collect();
        if !(2..=4).contains(&words.len()) {
            continue;
        }

        if words
            .iter()
            .all(|w| w.chars().next().map(|c| c.is_uppercase()).unwrap_or(false))
        {
            return Some(line.to_string());
        }
    }

    None
}
