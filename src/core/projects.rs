use once_cell::sync::Lazy;
use regex::Regex;

use super::contact::ensure_https;
use super::dates::extract_date_range;
use super::models::Project;
use super::section::locate_section;

pub const PROJECT_SYNONYMS: &[&str] = &[
    "personal projects",
    "academic projects",
    "key projects",
    "projects",
    "project work",
];

static LABELED_PROJECT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?im)^[ \t]*project(?:[ \t]+(?:name|title))?[ \t]*[:\-][ \t]*(.+)$").unwrap());

static BULLET_TITLE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^[ \t]*[-•*▪‣][ \t]*(.+)$").unwrap());

static TECH_LINE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?im)^[ \t]*(?:tech(?:nologies|nology)?(?:[ \t]+used)?|stack|tools|built[ \t]+with)[ \t]*[:\-][ \t]*(.+)$")
        .unwrap()
});

static TITLE_WITH_DATES_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^[ \t]*(\S.{0,70}?)[ \t]*\(([^)]*(?:19|20)\d{2}[^)]*)\)[ \t]*$").unwrap()
});

static ROLE_LINE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?im)^[ \t]*role[ \t]*[:\-][ \t]*(.+)$").unwrap());

static GITHUB_LINK_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?:https?://)?(?:www\.)?github\.com/[A-Za-z0-9_\-./]+").unwrap()
});

static URL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)https?://[A-Za-z0-9.\-]+\.[A-Za-z]{2,}[^\s<>'\x22)]*").unwrap()
});

pub fn extract_projects(text: &str) -> Vec<Project> {
    let section = locate_section(text, PROJECT_SYNONYMS);

    // Only the labeled strategy runs outside a located section.
    if section.is_empty() {
        let projects = labeled_projects(text);
        if !projects.is_empty() {
            return projects;
        }
        return vec![Project::placeholder()];
    }

    let strategies: [fn(&str) -> Vec<Project>; 4] = [
        labeled_projects,
        bulleted_projects,
        block_projects,
        dated_title_projects,
    ];

    for strategy in strategies {
        let projects = strategy(&section);
        if !projects.is_empty() {
            return projects;
        }
    }

    vec![Project::placeholder()]
}

fn labeled_projects(scope: &str) -> Vec<Project> {
    let matches: Vec<(usize, usize, String)> = LABELED_PROJECT_RE
        .captures_iter(scope)
        .filter_map(|captures| {
            let whole = captures.get(0)?;
            let name = captures.get(1)?.as_str().trim().to_string();
            Some((whole.start(), whole.end(), name))
        })
        .collect();

    matches
        .iter()
        .enumerate()
        .map(|(i, (_, body_start, name))| {
            let body_end = matches
                .get(i + 1)
                .map(|(next_start, _, _)| *next_start)
                .unwrap_or(scope.len());
            build_project(name, &scope[*body_start..body_end])
        })
        .collect()
}

fn bulleted_projects(scope: &str) -> Vec<Project> {
    let matches: Vec<(usize, usize, String)> = BULLET_TITLE_RE
        .captures_iter(scope)
        .filter_map(|captures| {
            let whole = captures.get(0)?;
            let title = captures.get(1)?.as_str().trim().to_string();
            Some((whole.start(), whole.end(), title))
        })
        .collect();

    matches
        .iter()
        .enumerate()
        .map(|(i, (_, body_start, title))| {
            let body_end = matches
                .get(i + 1)
                .map(|(next_start, _, _)| *next_start)
                .unwrap_or(scope.len());
            build_project(title, &scope[*body_start..body_end])
        })
        .collect()
}

fn block_projects(scope: &str) -> Vec<Project> {
    scope
        .split("\n\n")
        .map(str::trim)
        .filter(|block| !block.is_empty())
        .filter_map(|block| {
            let mut lines = block.lines();
            let name = lines.next()?.trim();
            // Dated title headers belong to strategy 4.
            if name.is_empty() || name.len() > 80 || TITLE_WITH_DATES_RE.is_match(name) {
                return None;
            }
            let body: String = lines.collect::<Vec<_>>().join("\n");
            Some(build_project(name, &body))
        })
        .collect()
}

fn dated_title_projects(scope: &str) -> Vec<Project> {
    let matches: Vec<(usize, usize, String, String)> = TITLE_WITH_DATES_RE
        .captures_iter(scope)
        .filter_map(|captures| {
            let whole = captures.get(0)?;
            let title = captures.get(1)?.as_str().trim().to_string();
            let dates = captures.get(2)?.as_str().to_string();
            Some((whole.start(), whole.end(), title, dates))
        })
        .collect();

    matches
        .iter()
        .enumerate()
        .map(|(i, (_, body_start, title, dates))| {
            let body_end = matches
                .get(i + 1)
                .map(|(next_start, _, _, _)| *next_start)
                .unwrap_or(scope.len());
            let mut project = build_project(title, &scope[*body_start..body_end]);
            if project.start_date.is_empty() {
                if let Some(range) = extract_date_range(dates) {
                    project.start_date = range.start_date;
                    project.end_date = range.end_date;
                }
            }
            project
        })
        .collect()
}

fn build_project(name: &str, body: &str) -> Project {
    let technologies = TECH_LINE_RE
        .captures(body)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().trim().to_string())
        .unwrap_or_default();

    let github_link = GITHUB_LINK_RE
        .find(body)
        .map(|m| ensure_https(m.as_str()))
        .unwrap_or_default();

    let live_link = URL_RE
        .find_iter(body)
        .map(|m| m.as_str())
        .find(|url| !url.to_ascii_lowercase().contains("github.com"))
        .map(ensure_https)
        .unwrap_or_default();

    let (start_date, end_date) = extract_date_range(body)
        .map(|range| (range.start_date, range.end_date))
        .unwrap_or_default();

    let role = ROLE_LINE_RE
        .captures(body)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().trim().to_string())
        .unwrap_or_default();

    let description = body
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter(|line| !TECH_LINE_RE.is_match(line) && !ROLE_LINE_RE.is_match(line))
        .collect::<Vec<_>>()
        .join(" ");

    Project {
        name: name.to_string(),
        description,
        technologies,
        github_link,
        live_link,
        start_date,
        end_date,
        role,
    }
}
