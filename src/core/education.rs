use once_cell::sync::Lazy;
use regex::Regex;

use super::dates::YEAR_RANGE_RE;
use super::models::EducationRecord;
use super::section::locate_section;

pub const EDUCATION_SYNONYMS: &[&str] = &[
    "education",
    "educational qualifications",
    "academic qualifications",
    "academic background",
    "academics",
    "qualifications",
];

static LABELED_COLLEGE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?im)^[ \t]*(?:college|institute|institution|school)(?:[ \t]+name)?[ \t]*[:\-][ \t]*(.+)$")
        .unwrap()
});

static LABELED_DEGREE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?im)^[ \t]*degree[ \t]*[:\-][ \t]*(.+)$").unwrap());

static LABELED_UNIVERSITY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?im)^[ \t]*university(?:[ \t]+name)?[ \t]*[:\-][ \t]*(.+)$").unwrap()
});

static LABELED_SPECIALIZATION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?im)^[ \t]*(?:specialization|specialisation|major|stream|branch)[ \t]*[:\-][ \t]*(.+)$")
        .unwrap()
});

static CGPA_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:cgpa|gpa|grade|percentage)[ \t]*[:\-]?[ \t]*(\d{1,2}(?:\.\d{1,2})?(?:[ \t]*/[ \t]*\d{1,2}(?:\.\d{1,2})?)?%?)")
        .unwrap()
});

static GRADUATION_YEAR_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:graduat(?:ion|ed)|passing|pass(?:ed)?[ \t]+out|batch|class)[ \t]*(?:year|of)?[ \t]*[:\-]?[ \t]*((?:19|20)\d{2})")
        .unwrap()
});

static DEGREE_ABBREV_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(B\.?[ ]?Tech|B\.?E\b\.?|B\.?Sc|B\.?A\b\.?|B\.?Com|BBA|BCA|M\.?[ ]?Tech|M\.?Sc|M\.?A\b\.?|M\.?Com|MBA|MCA|Ph\.?D|M\.?Phil|Diploma|Bachelor(?:'s)?(?:[ \t]+of[ \t]+[A-Za-z]+)?|Master(?:'s)?(?:[ \t]+of[ \t]+[A-Za-z]+)?)\.?(?:[ \t]+(?:in|of)[ \t]+([A-Za-z][A-Za-z &]+))?")
        .unwrap()
});

static INSTITUTION_LINE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"([A-Z][A-Za-z.&',]*(?:[ \t]+[A-Za-z.&',]+)*[ \t]+(?:University|College|Institute|Academy|School)(?:[ \t]+of[ \t]+[A-Z][A-Za-z ]+)?)")
        .unwrap()
});

static LABELED_LOCATION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?im)^[ \t]*location[ \t]*[:\-][ \t]*(.+)$").unwrap());

static INTERMEDIATE_LEVEL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:12th|xii|10\+2|intermediate|higher[ \t]+secondary|senior[ \t]+secondary|high[ \t]+school|hsc|ssc)\b")
        .unwrap()
});

static GRADUATE_LEVEL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:b\.?[ ]?tech|b\.?e\b|b\.?sc|b\.?a\b|b\.?com|bba|bca|bachelor|undergraduate|graduation)\b")
        .unwrap()
});

static POST_GRADUATE_LEVEL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:m\.?[ ]?tech|m\.?sc|m\.?a\b|m\.?com|mba|mca|master|ph\.?d|doctorate|postgraduate|post[ \t]+graduate)\b")
        .unwrap()
});

const METADATA_WORDS: &[&str] = &["degree", "gpa", "cgpa", "grade", "percentage", "specialization", "major"];

pub fn extract_education(text: &str, now_year: i32) -> EducationRecord {
    let section = locate_section(text, EDUCATION_SYNONYMS);
    let scope = if section.is_empty() {
        text
    } else {
        section.as_str()
    };

    let mut record = EducationRecord {
        college_name: capture_first(&LABELED_COLLEGE_RE, scope),
        degree: capture_first(&LABELED_DEGREE_RE, scope),
        university_name: capture_first(&LABELED_UNIVERSITY_RE, scope),
        specialization: capture_first(&LABELED_SPECIALIZATION_RE, scope),
        graduation_year: capture_first(&GRADUATION_YEAR_RE, scope),
        cgpa: capture_first(&CGPA_RE, scope),
        location: capture_first(&LABELED_LOCATION_RE, scope),
        ..EducationRecord::default()
    };

    if let Some(captures) = YEAR_RANGE_RE.captures(scope) {
        record.start_year = captures
            .get(1)
            .map(|m| m.as_str().to_string())
            .unwrap_or_default();
        record.end_year = captures
            .get(2)
            .map(|m| {
                let raw = m.as_str();
                if raw.chars().next().is_some_and(|c| c.is_ascii_digit()) {
                    raw.to_string()
                } else {
                    now_year.to_string()
                }
            })
            .unwrap_or_default();
        if record.graduation_year.is_empty() {
            record.graduation_year = record.end_year.clone();
        }
    }

    if record.degree.is_empty() {
        if let Some(captures) = DEGREE_ABBREV_RE.captures(scope) {
            record.degree = captures
                .get(1)
                .map(|m| m.as_str().trim().to_string())
                .unwrap_or_default();
            if record.specialization.is_empty() {
                if let Some(m) = captures.get(2) {
                    record.specialization = m.as_str().trim().to_string();
                }
            }
        }
    }

    if record.university_name.is_empty() && record.college_name.is_empty() {
        for line in scope.lines() {
            let lower = line.to_lowercase();
            if METADATA_WORDS.iter().any(|word| lower.contains(word)) {
                continue;
            }
            let Some(m) = INSTITUTION_LINE_RE.captures(line).and_then(|c| c.get(1)) else {
                continue;
            };
            let institution = m.as_str().trim().to_string();
            if institution.to_lowercase().contains("university") {
                record.university_name = institution;
            } else {
                record.college_name = institution;
            }
            break;
        }
    }

    if record.university_name.is_empty() && !record.college_name.is_empty() {
        record.university_name = record.college_name.clone();
    }

    record
}

pub fn classify_level(full_text: &str) -> String {
    let tiers: [(&Regex, &str); 3] = [
        (&INTERMEDIATE_LEVEL_RE, "Intermediate"),
        (&GRADUATE_LEVEL_RE, "Graduate"),
        (&POST_GRADUATE_LEVEL_RE, "Post Graduate"),
    ];

    for (regex, label) in tiers {
        if regex.is_match(full_text) {
            return label.to_string();
        }
    }

    let section = locate_section(full_text, EDUCATION_SYNONYMS);
    if !section.is_empty() {
        for (regex, label) in tiers {
            if regex.is_match(&section) {
                return label.to_string();
            }
        }
    }

    String::new()
}

fn capture_first(regex: &Regex, text: &str) -> String {
    regex
        .captures(text)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().trim().to_string())
        .unwrap_or_default()
}
