use once_cell::sync::Lazy;
use regex::Regex;

use super::section::locate_section;

pub const SKILLS_SYNONYMS: &[&str] = &[
    "skills",
    "key skills",
    "core competencies",
    "areas of expertise",
    "expertise",
];

pub const TECHNICAL_SYNONYMS: &[&str] = &[
    "technical skills",
    "technical proficiencies",
    "technical expertise",
    "technologies",
    "tech stack",
];

pub const SOFT_SYNONYMS: &[&str] = &[
    "soft skills",
    "interpersonal skills",
    "personal skills",
    "strengths",
];

pub const LANGUAGE_SYNONYMS: &[&str] = &["languages known", "languages", "language proficiency"];

const SUMMARY_SYNONYMS: &[&str] = &[
    "professional summary",
    "summary",
    "profile",
    "about me",
    "objective",
];

const CERTIFICATION_SYNONYMS: &[&str] = &[
    "certifications",
    "certificates",
    "licenses",
    "courses",
    "training",
];

static BULLET_LINE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^[ \t]*[-•*▪◦‣][ \t]*(.+)$").unwrap());

static CATEGORY_LINE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^[ \t]*[A-Za-z][A-Za-z /&+#]{2,30}:[ \t]*(.+)$").unwrap());

static PROFICIENCY_LINE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?im)^[ \t]*[-•*]?[ \t]*([A-Za-z+#.][A-Za-z+#. ]*?)[ \t]*[-–:(][ \t]*(?:beginner|intermediate|advanced|expert|proficient)\)?[ \t]*$")
        .unwrap()
});

static CEFR_LINE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?im)^[ \t]*[-•*]?[ \t]*([A-Za-z]+)[ \t]*[-–:(]?[ \t]*(?:[ABC][12])\)?[ \t]*$")
        .unwrap()
});

static LANGUAGE_LEVEL_LINE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?im)^[ \t]*[-•*]?[ \t]*([A-Za-z]+)[ \t]*[-–:(][ \t]*(?:fluent|native|proficient|basic|conversational|intermediate|advanced|beginner|professional|bilingual)\)?[ \t]*$")
        .unwrap()
});

const TECH_VOCABULARY: &[&str] = &[
    "Python", "Java", "JavaScript", "TypeScript", "Rust", "Go", "C++", "C#", "Ruby", "PHP",
    "Swift", "Kotlin", "SQL", "HTML", "CSS", "React", "Angular", "Vue", "Node.js", "Django",
    "Flask", "Spring", "Docker", "Kubernetes", "AWS", "Azure", "GCP", "Git", "Linux",
    "MongoDB", "PostgreSQL", "MySQL", "Redis", "GraphQL", "TensorFlow", "PyTorch",
];

const SOFT_VOCABULARY: &[&str] = &[
    "Communication", "Leadership", "Teamwork", "Problem Solving", "Time Management",
    "Adaptability", "Critical Thinking", "Collaboration", "Creativity", "Attention to Detail",
    "Decision Making", "Conflict Resolution", "Public Speaking",
];

const LANGUAGE_VOCABULARY: &[&str] = &[
    "English", "Hindi", "Spanish", "French", "German", "Mandarin", "Chinese", "Japanese",
    "Korean", "Arabic", "Portuguese", "Russian", "Italian", "Bengali", "Tamil", "Telugu",
    "Marathi", "Gujarati", "Punjabi", "Urdu", "Dutch",
];

pub fn extract_skills(text: &str) -> String {
    let section = locate_section(text, SKILLS_SYNONYMS);
    if section.is_empty() {
        return String::new();
    }

    let mut items = bulleted_items(&section);
    items.extend(comma_run_items(&section));
    items.extend(short_line_items(&section));
    join_deduplicated(items)
}

pub fn extract_technical_skills(text: &str) -> String {
    let section = locate_section(text, TECHNICAL_SYNONYMS);
    if section.is_empty() {
        return vocabulary_scan(text, TECH_VOCABULARY);
    }

    let mut items = Vec::new();
    for captures in CATEGORY_LINE_RE.captures_iter(&section) {
        if let Some(m) = captures.get(1) {
            items.extend(split_list(m.as_str()));
        }
    }
    for captures in PROFICIENCY_LINE_RE.captures_iter(&section) {
        if let Some(m) = captures.get(1) {
            items.push(m.as_str().trim().to_string());
        }
    }
    items.extend(bulleted_items(&section));
    items.extend(comma_run_items(&section));
    items.extend(short_line_items(&section));
    join_deduplicated(items)
}

pub fn extract_soft_skills(text: &str) -> String {
    let mut section = locate_section(text, SOFT_SYNONYMS);
    if section.is_empty() {
        section = locate_section(text, SUMMARY_SYNONYMS);
    }

    if !section.is_empty() {
        let mut items = bulleted_items(&section);
        items.extend(comma_run_items(&section));
        let joined = join_deduplicated(items);
        if !joined.is_empty() {
            return joined;
        }
    }

    vocabulary_scan(text, SOFT_VOCABULARY)
}

pub fn extract_languages(text: &str) -> String {
    let section = locate_section(text, LANGUAGE_SYNONYMS);
    if !section.is_empty() {
        let mut items = Vec::new();
        for captures in CEFR_LINE_RE.captures_iter(&section) {
            if let Some(m) = captures.get(1) {
                items.push(m.as_str().trim().to_string());
            }
        }
        for captures in LANGUAGE_LEVEL_LINE_RE.captures_iter(&section) {
            if let Some(m) = captures.get(1) {
                items.push(m.as_str().trim().to_string());
            }
        }
        // Suffix-tier lines re-enter the plain tiers with the suffix attached.
        let mut plain = bulleted_items(&section);
        plain.extend(comma_run_items(&section));
        plain.extend(short_line_items(&section));
        items.extend(plain.into_iter().filter(|line| {
            !LANGUAGE_LEVEL_LINE_RE.is_match(line) && !CEFR_LINE_RE.is_match(line)
        }));
        let joined = join_deduplicated(items);
        if !joined.is_empty() {
            return joined;
        }
    }

    vocabulary_scan(text, LANGUAGE_VOCABULARY)
}

pub fn extract_certifications(text: &str) -> String {
    let section = locate_section(text, CERTIFICATION_SYNONYMS);
    if section.is_empty() {
        return String::new();
    }

    let lines: Vec<String> = section
        .lines()
        .map(|line| strip_bullet(line).to_string())
        .filter(|line| !line.is_empty())
        .collect();
    lines.join("\n")
}

fn bulleted_items(section: &str) -> Vec<String> {
    BULLET_LINE_RE
        .captures_iter(section)
        .filter_map(|c| c.get(1))
        .flat_map(|m| split_list(m.as_str()))
        .collect()
}

fn comma_run_items(section: &str) -> Vec<String> {
    section
        .lines()
        .filter(|line| line.matches(',').count() >= 1 && !line.contains(':'))
        .flat_map(split_list)
        .collect()
}

fn short_line_items(section: &str) -> Vec<String> {
    section
        .lines()
        .map(str::trim)
        .filter(|line| {
            !line.is_empty()
                && line.len() <= 40
                && !line.contains(':')
                && !line.contains(',')
                && !line.starts_with(['-', '•', '*'])
        })
        .map(|line| line.to_string())
        .collect()
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split([',', '|', ';', '/'])
        .map(|item| strip_bullet(item).to_string())
        .filter(|item| !item.is_empty() && item.len() <= 40)
        .collect()
}

fn strip_bullet(raw: &str) -> &str {
    raw.trim()
        .trim_start_matches(['-', '•', '*', '▪', '◦', '‣'])
        .trim()
}

fn join_deduplicated(items: Vec<String>) -> String {
    let mut seen: Vec<String> = Vec::new();
    for item in items {
        if !seen.contains(&item) {
            seen.push(item);
        }
    }
    seen.join(", ")
}

fn vocabulary_scan(text: &str, vocabulary: &[&str]) -> String {
    let found: Vec<String> = vocabulary
        .iter()
        .filter(|term| {
            Regex::new(&format!(
                r"(?i)(?:^|[^A-Za-z0-9]){}(?:[^A-Za-z0-9]|$)",
                regex::escape(term)
            ))
            .map(|re| re.is_match(text))
            .unwrap_or(false)
        })
        .map(|term| term.to_string())
        .collect();
    found.join(", ")
}
