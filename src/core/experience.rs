use once_cell::sync::Lazy;
use regex::Regex;

use super::dates::{extract_date_range, YEAR_RANGE_RE};
use super::models::WorkExperience;
use super::section::locate_section;

pub const EXPERIENCE_SYNONYMS: &[&str] = &[
    "work experience",
    "professional experience",
    "employment history",
    "work history",
    "career history",
    "experience",
    "employment",
];

static LABELED_COMPANY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?im)^[ \t]*(?:company|employer|organization|organisation)[ \t]*[:\-][ \t]*(.+)$")
        .unwrap()
});

static LABELED_POSITION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?im)^[ \t]*(?:position|title|role|designation)[ \t]*[:\-][ \t]*(.+)$").unwrap()
});

static COMPANY_DATE_LINE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^[ \t]*([A-Z][A-Za-z0-9.,&' \-]{1,60}?)[ \t]*[|,–—-]?[ \t]+((?:19|20)\d{2}[ \t]*(?:[-–—]|to)[ \t]*(?:(?:19|20)\d{2}|(?i:present|current|now)))[ \t]*$")
        .unwrap()
});

static POSITION_AT_COMPANY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(.{2,60}?)[ \t]+at[ \t]+(.{2,60})$").unwrap());

static COMPANY_DASH_POSITION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(.{2,60}?)[ \t]*[-–—|][ \t]*(.{2,60})$").unwrap());

static ACADEMIC_TITLE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?im)^[ \t]*((?:assistant|associate|adjunct|visiting)?[ \t]*professor|research[ \t]+assistant|teaching[ \t]+assistant|lecturer|postdoctoral[ \t]+(?:fellow|researcher))[ \t]+at[ \t]+([A-Z][A-Za-z0-9.,&' ]{2,60})")
        .unwrap()
});

static LABELED_LOCATION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?im)^[ \t]*location[ \t]*[:\-][ \t]*(.+)$").unwrap());

static CITY_STATE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b([A-Z][a-z]+(?:[ \t][A-Z][a-z]+)?,[ \t]*[A-Z][A-Za-z]+)\b").unwrap());

static RESPONSIBILITIES_LABEL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?im)^[ \t]*(?:key[ \t]+)?responsibilities[ \t]*[:\-]").unwrap());

static ACHIEVEMENTS_LABEL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?im)^[ \t]*(?:achievements|accomplishments)[ \t]*[:\-]").unwrap());

static BULLET_LINE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^[ \t]*[-•*▪‣][ \t]*(.+)$").unwrap());

static EXPLICIT_YEARS_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(\d{1,2})\+?[ \t]*years?[ \t]+of[ \t]+(?:\w+[ \t]+)?experience\b").unwrap()
});

pub fn extract_work_experience(text: &str) -> Vec<WorkExperience> {
    let section = locate_section(text, EXPERIENCE_SYNONYMS);

    // Only label-anchored strategies run outside a located section.
    if section.is_empty() {
        for strategy in [labeled_experiences, academic_experiences] {
            let entries = strategy(text);
            if !entries.is_empty() {
                return entries;
            }
        }
        return vec![WorkExperience::placeholder()];
    }

    let strategies: [fn(&str) -> Vec<WorkExperience>; 4] = [
        labeled_experiences,
        company_date_experiences,
        block_experiences,
        academic_experiences,
    ];

    for strategy in strategies {
        let entries = strategy(&section);
        if !entries.is_empty() {
            return entries;
        }
    }

    vec![WorkExperience::placeholder()]
}

pub fn calculate_experience(text: &str, now_year: i32) -> u32 {
    if let Some(captures) = EXPLICIT_YEARS_RE.captures(text) {
        if let Some(m) = captures.get(1) {
            if let Ok(years) = m.as_str().parse::<u32>() {
                return years;
            }
        }
    }

    let section = locate_section(text, EXPERIENCE_SYNONYMS);
    if section.is_empty() {
        return 0;
    }

    let mut total: i32 = 0;
    for captures in YEAR_RANGE_RE.captures_iter(&section) {
        let Some(start) = captures.get(1).and_then(|m| m.as_str().parse::<i32>().ok()) else {
            continue;
        };
        let end = captures
            .get(2)
            .map(|m| m.as_str())
            .and_then(|raw| {
                if raw.chars().next().is_some_and(|c| c.is_ascii_digit()) {
                    raw.parse::<i32>().ok()
                } else {
                    Some(now_year)
                }
            })
            .unwrap_or(start);
        total += (end - start).max(0);
    }

    total.max(0) as u32
}

fn labeled_experiences(scope: &str) -> Vec<WorkExperience> {
    let matches: Vec<(usize, usize, String)> = LABELED_COMPANY_RE
        .captures_iter(scope)
        .filter_map(|captures| {
            let whole = captures.get(0)?;
            let company = captures.get(1)?.as_str().trim().to_string();
            Some((whole.start(), whole.end(), company))
        })
        .collect();

    matches
        .iter()
        .enumerate()
        .map(|(i, (_, body_start, company))| {
            let body_end = matches
                .get(i + 1)
                .map(|(next_start, _, _)| *next_start)
                .unwrap_or(scope.len());
            let body = &scope[*body_start..body_end];
            let position = LABELED_POSITION_RE
                .captures(body)
                .and_then(|c| c.get(1))
                .map(|m| m.as_str().trim().to_string())
                .unwrap_or_default();
            build_experience(company.clone(), position, body)
        })
        .collect()
}

fn company_date_experiences(scope: &str) -> Vec<WorkExperience> {
    let matches: Vec<(usize, usize, String)> = COMPANY_DATE_LINE_RE
        .captures_iter(scope)
        .filter_map(|captures| {
            let whole = captures.get(0)?;
            let company = captures.get(1)?.as_str().trim().to_string();
            Some((whole.start(), whole.end(), company))
        })
        .collect();

    matches
        .iter()
        .enumerate()
        .map(|(i, (start, body_start, company))| {
            let body_end = matches
                .get(i + 1)
                .map(|(next_start, _, _)| *next_start)
                .unwrap_or(scope.len());
            // Include the header line so the date range lands in the body.
            let header = &scope[*start..*body_start];
            let body = format!("{header}{}", &scope[*body_start..body_end]);
            build_experience(company.clone(), String::new(), &body)
        })
        .collect()
}

fn block_experiences(scope: &str) -> Vec<WorkExperience> {
    scope
        .split("\n\n")
        .map(str::trim)
        .filter(|block| !block.is_empty())
        .filter_map(|block| {
            let mut lines = block.lines();
            let header = lines.next()?.trim();
            let body: String = lines.collect::<Vec<_>>().join("\n");

            if let Some(captures) = POSITION_AT_COMPANY_RE.captures(header) {
                let position = captures.get(1)?.as_str().trim().to_string();
                let company = captures.get(2)?.as_str().trim().to_string();
                return Some(build_experience(company, position, &body));
            }
            if let Some(captures) = COMPANY_DASH_POSITION_RE.captures(header) {
                let company = captures.get(1)?.as_str().trim().to_string();
                let position = captures.get(2)?.as_str().trim().to_string();
                return Some(build_experience(company, position, &body));
            }

            None
        })
        .collect()
}

fn academic_experiences(scope: &str) -> Vec<WorkExperience> {
    ACADEMIC_TITLE_RE
        .captures_iter(scope)
        .filter_map(|captures| {
            let position = captures.get(1)?.as_str().trim().to_string();
            let company = captures.get(2)?.as_str().trim().to_string();
            let line_start = captures.get(0)?.start();
            let body_end = scope[line_start..]
                .find("\n\n")
                .map(|offset| line_start + offset)
                .unwrap_or(scope.len());
            Some(build_experience(company, position, &scope[line_start..body_end]))
        })
        .collect()
}

fn build_experience(company: String, position: String, body: &str) -> WorkExperience {
    let (start_date, end_date) = extract_date_range(body)
        .map(|range| (range.start_date, range.end_date))
        .unwrap_or_default();

    let location = LABELED_LOCATION_RE
        .captures(body)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().trim().to_string())
        .or_else(|| CITY_STATE_RE.captures(body).and_then(|c| c.get(1)).map(|m| m.as_str().to_string()))
        .unwrap_or_default();

    let responsibilities = labeled_sub_block(body, &RESPONSIBILITIES_LABEL_RE)
        .unwrap_or_default();
    let achievements = labeled_sub_block(body, &ACHIEVEMENTS_LABEL_RE).unwrap_or_default();

    let description = body
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter(|line| {
            !(line.len() <= 60 && extract_date_range(line).is_some())
                && !RESPONSIBILITIES_LABEL_RE.is_match(line)
                && !ACHIEVEMENTS_LABEL_RE.is_match(line)
                && !LABELED_LOCATION_RE.is_match(line)
                && !LABELED_POSITION_RE.is_match(line)
                && !LABELED_COMPANY_RE.is_match(line)
                && !responsibilities.contains(line.trim_start_matches(['-', '•', '*']).trim())
                && !achievements.contains(line.trim_start_matches(['-', '•', '*']).trim())
        })
        .map(|line| line.trim_start_matches(['-', '•', '*', '▪', '‣']).trim())
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ");

    WorkExperience {
        company,
        position,
        start_date,
        end_date,
        location,
        description,
        responsibilities,
        achievements,
    }
}

fn labeled_sub_block(body: &str, label: &Regex) -> Option<String> {
    let m = label.find(body)?;
    let after = &body[m.end()..];

    let mut items: Vec<String> = Vec::new();
    let mut lines = after.lines();

    if let Some(first) = lines.next() {
        let inline = first.trim();
        if !inline.is_empty() {
            items.push(inline.to_string());
        }
    }

    for line in lines {
        if let Some(captures) = BULLET_LINE_RE.captures(line) {
            if let Some(item) = captures.get(1) {
                items.push(item.as_str().trim().to_string());
                continue;
            }
        }
        break;
    }

    if items.is_empty() {
        None
    } else {
        Some(items.join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labeled_company_blocks_win() {
        let text = "Work Experience\nCompany: Acme Corp\nPosition: Backend Engineer\n2019 - 2021\nCompany: Globex\nPosition: SRE";
        let entries = extract_work_experience(text);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].company, "Acme Corp");
        assert_eq!(entries[0].position, "Backend Engineer");
        assert_eq!(entries[0].start_date, "2019");
        assert_eq!(entries[0].end_date, "2021");
        assert_eq!(entries[1].company, "Globex");
    }

    #[test]
    fn company_date_lines_are_second_tier() {
        let text = "Work Experience\nAcme Corp 2019 - 2021\n- Built the billing pipeline\nGlobex 2021 - Present\n- On-call lead";
        let entries = extract_work_experience(text);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].company, "Acme Corp");
        assert_eq!(entries[0].end_date, "2021");
        assert_eq!(entries[1].company, "Globex");
        assert_eq!(entries[1].end_date, "Present");
    }

    #[test]
    fn block_headers_split_position_and_company() {
        let text = "Work Experience\nBackend Engineer at Acme Corp\nShipped APIs.\n\nGlobex - Site Reliability Engineer\nRan the fleet.";
        let entries = extract_work_experience(text);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].position, "Backend Engineer");
        assert_eq!(entries[0].company, "Acme Corp");
        assert_eq!(entries[1].company, "Globex");
        assert_eq!(entries[1].position, "Site Reliability Engineer");
    }

    #[test]
    fn academic_titles_cover_cv_input() {
        let text = "Experience\nResearch Assistant at Stanford University\nJan 2018 - Mar 2020";
        let entries = extract_work_experience(text);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].position, "Research Assistant");
        assert_eq!(entries[0].company, "Stanford University");
    }

    #[test]
    fn responsibilities_and_achievements_are_split_out() {
        let text = "Work Experience\nCompany: Acme Corp\nShipped the billing system.\nResponsibilities:\n- Own the API\n- Review designs\nAchievements:\n- Cut latency 40%";
        let entries = extract_work_experience(text);
        assert_eq!(entries[0].responsibilities, "Own the API\nReview designs");
        assert_eq!(entries[0].achievements, "Cut latency 40%");
        assert_eq!(entries[0].description, "Shipped the billing system.");
    }

    #[test]
    fn description_lines_lose_bullet_markers() {
        let text = "Work Experience\nAcme Corp 2019 - 2021\n- Built the billing pipeline\n- Ran migrations";
        let entries = extract_work_experience(text);
        assert_eq!(
            entries[0].description,
            "Built the billing pipeline Ran migrations"
        );
    }

    #[test]
    fn missing_experience_yields_a_placeholder() {
        let entries = extract_work_experience("Education\nState University");
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].company, "");
        assert_eq!(entries[0].position, "");
    }

    #[test]
    fn calculate_experience_prefers_explicit_phrase() {
        assert_eq!(calculate_experience("5 years of experience in Rust", 2026), 5);
        assert_eq!(
            calculate_experience("over 3+ years of professional experience", 2026),
            3
        );
    }

    #[test]
    fn calculate_experience_sums_section_ranges() {
        let text = "Work Experience\nAcme Corp 2018 - 2020\nGlobex 2021 - Present";
        assert_eq!(calculate_experience(text, 2026), 2 + 5);
    }

    #[test]
    fn calculate_experience_defaults_to_zero() {
        assert_eq!(calculate_experience("", 2026), 0);
        assert_eq!(calculate_experience("no dates anywhere", 2026), 0);
    }
}
