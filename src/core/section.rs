use regex::Regex;

pub const COMMON_HEADERS: &[&str] = &[
    "work experience",
    "professional experience",
    "employment history",
    "technical skills",
    "soft skills",
    "core competencies",
    "personal information",
    "personal details",
    "professional summary",
    "academic background",
    "languages known",
    "personal projects",
    "academic projects",
    "education",
    "qualifications",
    "experience",
    "employment",
    "skills",
    "expertise",
    "languages",
    "projects",
    "certifications",
    "certificates",
    "achievements",
    "awards",
    "publications",
    "summary",
    "objective",
    "profile",
    "contact",
    "interests",
    "hobbies",
    "references",
    "volunteer",
    "declaration",
];

const MIN_SECTION_LEN: usize = 10;

pub fn find_header(text: &str, synonym: &str) -> Option<(usize, usize)> {
    let escaped = regex::escape(synonym);

    // "Header:" content may continue on the same line, so content starts
    // right after the colon rather than on the next line.
    let labeled = Regex::new(&format!(r"(?im)^[ \t]*{escaped}[ \t]*:")).ok()?;
    if let Some(m) = labeled.find(text) {
        return Some((m.start(), m.end()));
    }

    let line_start_patterns = [
        format!(r"(?im)^[ \t]*{escaped}[ \t]*\r?\n[ \t]*[-=_]{{3,}}[ \t]*$"),
        format!(r"(?m)^[ \t]*{}[ \t]*$", escaped.to_uppercase()),
        format!(r"(?im)^[ \t]*\[[ \t]*{escaped}[ \t]*\][ \t]*$"),
        format!(r"(?im)^[ \t]*(?:#{{1,6}}[ \t]*|\*\*){escaped}(?:\*\*)?[ \t]*$"),
        format!(r"(?im)^[ \t]*\d+[.)][ \t]*{escaped}[ \t]*$"),
        format!(r"(?im)^[ \t]*{escaped}[ \t]*$"),
    ];

    for pattern in &line_start_patterns {
        let regex = Regex::new(pattern).ok()?;
        if let Some(m) = regex.find(text) {
            let content_start = text[m.end()..]
                .find('\n')
                .map(|offset| m.end() + offset + 1)
                .unwrap_or(text.len());
            return Some((m.start(), content_start));
        }
    }

    None
}

pub fn locate_section(full_text: &str, header_synonyms: &[&str]) -> String {
    for (index, synonym) in header_synonyms.iter().enumerate() {
        let Some((_, content_start)) = find_header(full_text, synonym) else {
            continue;
        };

        let rest = &full_text[content_start..];
        let end = COMMON_HEADERS
            .iter()
            .filter(|header| !header.eq_ignore_ascii_case(synonym))
            .filter_map(|header| find_header(rest, header).map(|(start, _)| start))
            .min()
            .unwrap_or(rest.len());

        let span = rest[..end].trim();
        if span.len() < MIN_SECTION_LEN && index + 1 < header_synonyms.len() {
            continue;
        }

        return span.to_string();
    }

    String::new()
}
