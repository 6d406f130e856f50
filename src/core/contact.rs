use once_cell::sync::Lazy;
use regex::Regex;

use super::section::locate_section;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b").unwrap());

static LABELED_PHONE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?im)^[ \t]*(?:phone|mobile|tel|cell|contact(?:[ \t]*(?:no|number))?)[ \t.]*[:\-][ \t]*(\+?\(?\d[\d \t().\-]{7,}\d)")
        .unwrap()
});

static GENERIC_PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\+?\(?\d[\d \t().\-]{8,}\d").unwrap());

static PHONE_CLEAN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\s\-().]").unwrap());

static LABELED_LINKEDIN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)linkedin[ \t]*[:\-][ \t]*((?:https?://)?(?:www\.)?linkedin\.com/\S+)")
        .unwrap()
});

static BARE_LINKEDIN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?:https?://)?(?:www\.)?linkedin\.com/(?:in|pub|profile)/[A-Za-z0-9_%\-./]+")
        .unwrap()
});

static LABELED_GITHUB_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)github[ \t]*[:\-][ \t]*((?:https?://)?(?:www\.)?github\.com/\S+)").unwrap()
});

static BARE_GITHUB_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?:https?://)?(?:www\.)?github\.com/[A-Za-z0-9_\-./]+").unwrap()
});

static LABELED_PORTFOLIO_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?im)^[ \t]*(?:portfolio|website|personal[ \t]+site|blog)[ \t]*[:\-][ \t]*((?:https?://)?[A-Za-z0-9.\-]+\.[A-Za-z]{2,}\S*)")
        .unwrap()
});

static BARE_URL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)https?://[A-Za-z0-9.\-]+\.[A-Za-z]{2,}[^\s<>'\x22)]*").unwrap()
});

static LABELED_ADDRESS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?im)^[ \t]*address[ \t]*[:\-][ \t]*(.+)$").unwrap());

static CITY_STATE_ZIP_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[A-Z][A-Za-z]+(?:[ \t][A-Z][A-Za-z]+)*,[ \t]*[A-Z][A-Za-z ]+[ \t]+\d{5,6}")
        .unwrap()
});

const CONTACT_SYNONYMS: &[&str] = &[
    "personal information",
    "personal details",
    "contact information",
    "contact",
];

pub fn extract_email(text: &str) -> Option<String> {
    EMAIL_RE.find(text).map(|m| m.as_str().to_lowercase())
}

pub fn extract_phone(text: &str) -> Option<String> {
    if let Some(captures) = LABELED_PHONE_RE.captures(text) {
        if let Some(m) = captures.get(1) {
            return Some(m.as_str().trim().to_string());
        }
    }

    for m in GENERIC_PHONE_RE.find_iter(text) {
        let candidate = m.as_str().trim();
        let digits = PHONE_CLEAN_RE.replace_all(candidate, "");
        if is_valid_phone(&digits) || (10..=15).contains(&digits.trim_start_matches('+').len()) {
            return Some(candidate.to_string());
        }
    }

    None
}

pub fn extract_linkedin(text: &str) -> Option<String> {
    if let Some(captures) = LABELED_LINKEDIN_RE.captures(text) {
        return captures.get(1).map(|m| ensure_https(m.as_str()));
    }

    BARE_LINKEDIN_RE
        .find(text)
        .map(|m| ensure_https(m.as_str()))
}

pub fn extract_github(text: &str) -> Option<String> {
    if let Some(captures) = LABELED_GITHUB_RE.captures(text) {
        return captures.get(1).map(|m| ensure_https(m.as_str()));
    }

    BARE_GITHUB_RE.find(text).map(|m| ensure_https(m.as_str()))
}

pub fn extract_portfolio(text: &str) -> Option<String> {
    if let Some(captures) = LABELED_PORTFOLIO_RE.captures(text) {
        if let Some(m) = captures.get(1) {
            let url = m.as_str().trim_end_matches(['.', ',']);
            if !is_excluded_domain(url) {
                return Some(ensure_https(url));
            }
        }
    }

    BARE_URL_RE
        .find_iter(text)
        .map(|m| m.as_str().trim_end_matches(['.', ',']))
        .find(|url| !is_excluded_domain(url))
        .map(ensure_https)
}

pub fn extract_address(text: &str) -> Option<String> {
    let section = locate_section(text, CONTACT_SYNONYMS);
    if section.is_empty() {
        return None;
    }

    if let Some(captures) = LABELED_ADDRESS_RE.captures(&section) {
        return captures.get(1).map(|m| m.as_str().trim().to_string());
    }

    CITY_STATE_ZIP_RE
        .find(&section)
        .map(|m| m.as_str().to_string())
}

pub fn ensure_https(url: &str) -> String {
    let trimmed = url.trim();
    if trimmed.to_ascii_lowercase().starts_with("http") {
        trimmed.to_string()
    } else {
        format!("https://{trimmed}")
    }
}

fn is_excluded_domain(url: &str) -> bool {
    let lower = url.to_ascii_lowercase();
    lower.contains("linkedin.com") || lower.contains("github.com")
}

fn is_valid_phone(digits: &str) -> bool {
    phonenumber::parse(None, digits)
        .map(|parsed| phonenumber::is_valid(&parsed))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extract_email_finds_standard_addresses() {
        assert_eq!(
            extract_email("Contact: jane@example.com"),
            Some("jane@example.com".to_string())
        );
        assert_eq!(
            extract_email("Reach me at John.Doe@Example.CO.UK today"),
            Some("john.doe@example.co.uk".to_string())
        );
        assert_eq!(extract_email("no email here"), None);
    }

    #[test]
    fn extract_phone_prefers_labeled_lines() {
        assert_eq!(
            extract_phone("Phone: +91 98765 43210\n2016 - 2020"),
            Some("+91 98765 43210".to_string())
        );
        assert_eq!(
            extract_phone("Mobile - (555) 123-4567"),
            Some("(555) 123-4567".to_string())
        );
    }

    #[test]
    fn extract_phone_falls_back_to_phone_shaped_runs() {
        assert_eq!(
            extract_phone("Reach me on +1 555 123 4567 anytime"),
            Some("+1 555 123 4567".to_string())
        );
        assert_eq!(extract_phone("graduated 2016 - 2020"), None);
        assert_eq!(extract_phone(""), None);
    }

    #[test]
    fn extract_linkedin_normalizes_bare_domains() {
        assert_eq!(
            extract_linkedin("linkedin: linkedin.com/in/janeq"),
            Some("https://linkedin.com/in/janeq".to_string())
        );
        assert_eq!(
            extract_linkedin("see https://www.linkedin.com/in/jane-q"),
            Some("https://www.linkedin.com/in/jane-q".to_string())
        );
        assert_eq!(extract_linkedin("no profile"), None);
    }

    #[test]
    fn extract_github_normalizes_bare_domains() {
        assert_eq!(
            extract_github("github.com/janeq"),
            Some("https://github.com/janeq".to_string())
        );
        assert_eq!(
            extract_github("GitHub: https://github.com/jane-q"),
            Some("https://github.com/jane-q".to_string())
        );
    }

    #[test]
    fn extract_portfolio_skips_linkedin_and_github() {
        let text = "https://github.com/janeq\nhttps://linkedin.com/in/janeq\nPortfolio: janeq.dev/work";
        assert_eq!(
            extract_portfolio(text),
            Some("https://janeq.dev/work".to_string())
        );
        assert_eq!(
            extract_portfolio("only https://github.com/janeq here"),
            None
        );
    }

    #[test]
    fn extract_address_requires_contact_section() {
        let text = "Contact\nAddress: 42 Elm Street, Springfield\nPhone: 555 123 4567";
        assert_eq!(
            extract_address(text),
            Some("42 Elm Street, Springfield".to_string())
        );
        assert_eq!(extract_address("Address: 42 Elm Street"), None);
    }
}
