//! Small text helpers shared by the blog pipeline and templates.

use std::sync::LazyLock;

use chrono::{DateTime, NaiveDate};
use regex::Regex;

/// Average adult reading speed used for the "N min read" label.
pub const WORDS_PER_MINUTE: usize = 225;

static NON_SLUG_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9_\s-]").expect("valid regex"));
static WHITESPACE_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));
static HYPHEN_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"--+").expect("valid regex"));

/// Converts a heading or title into a URL fragment.
///
/// Lowercases, trims, drops anything that is not an ASCII word character,
/// whitespace or `-`, then collapses whitespace and repeated hyphens.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(slugify("Why Speed Matters"), "why-speed-matters");
/// assert_eq!(slugify("Q&A: HOA -- portals"), "qa-hoa-portals");
/// ```
pub fn slugify(value: &str) -> String {
    let lowered = value.to_lowercase();
    let stripped = NON_SLUG_CHARS.replace_all(lowered.trim(), "");
    let hyphenated = WHITESPACE_RUN.replace_all(&stripped, "-");
    HYPHEN_RUN.replace_all(&hyphenated, "-").into_owned()
}

/// Minutes needed to read `text`, never less than one.
pub fn reading_minutes(text: &str) -> usize {
    let words = text.split_whitespace().count();
    words.div_ceil(WORDS_PER_MINUTE).max(1)
}

/// Reading-time label such as `"4 min read"`.
pub fn reading_time(text: &str) -> String {
    format!("{} min read", reading_minutes(text))
}

/// Parses the date formats found in post front matter.
pub fn parse_date(input: &str) -> Option<NaiveDate> {
    let input = input.trim();
    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .ok()
        .or_else(|| {
            DateTime::parse_from_rfc3339(input)
                .ok()
                .map(|dt| dt.date_naive())
        })
        .or_else(|| NaiveDate::parse_from_str(input, "%B %d, %Y").ok())
}

/// Formats a date as `February 10, 2024`. Unparseable input is returned as is.
pub fn format_date(input: &str) -> String {
    match parse_date(input) {
        Some(date) => date.format("%B %-d, %Y").to_string(),
        None => input.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Hello World"), "hello-world");
        assert_eq!(slugify("  Why Speed Matters  "), "why-speed-matters");
        assert_eq!(slugify("Q&A: HOA -- portals"), "qa-hoa-portals");
        assert_eq!(slugify("snake_case stays"), "snake_case-stays");
        assert_eq!(slugify("Café résumé"), "caf-rsum");
    }

    #[test]
    fn test_reading_time_minimum_one() {
        assert_eq!(reading_time(""), "1 min read");
        assert_eq!(reading_time("just a few words"), "1 min read");
    }

    #[test]
    fn test_reading_time_rounds_up() {
        let words = vec!["word"; 226].join(" ");
        assert_eq!(reading_minutes(&words), 2);
        let words = vec!["word"; 450].join(" ");
        assert_eq!(reading_minutes(&words), 2);
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-02-10"), "February 10, 2024");
        assert_eq!(format_date("2024-03-05T12:00:00Z"), "March 5, 2024");
        assert_eq!(format_date("someday"), "someday");
    }

    #[test]
    fn test_parse_date_orders() {
        let a = parse_date("2024-01-01").unwrap();
        let b = parse_date("2024-02-01").unwrap();
        assert!(a < b);
        assert!(parse_date("not a date").is_none());
    }
}
