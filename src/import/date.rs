//! Best-effort date parsing for imported spreadsheet cells.
//!
//! Programme sheets carry dates in whatever shape the author typed: ranges
//! ("12 to 14 March 2026"), US slashes, ISO, spelled-out months, quoted cells
//! and "TBD" placeholders. Anything not recognized resolves to `None` so the
//! caller can skip the row.

use std::sync::LazyLock;

use chrono::{Datelike, NaiveDate};
use regex::Regex;

use crate::constants::import::TBD_SENTINEL;
use crate::types::CalendarDate;

/// Range separator, matched case-insensitively.
#[allow(clippy::expect_used)]
static RE_RANGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i) to ").expect("valid regex: RE_RANGE")
});

/// A standalone four-digit year.
#[allow(clippy::expect_used)]
static RE_YEAR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(\d{4})\b").expect("valid regex: RE_YEAR")
});

/// An English month name or abbreviation.
#[allow(clippy::expect_used)]
static RE_MONTH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:jan|feb|mar|apr|may|jun|jul|aug|sep|oct|nov|dec)[a-z]*\b")
        .expect("valid regex: RE_MONTH")
});

/// Ordinal suffix after a day number (`12th`).
#[allow(clippy::expect_used)]
static RE_ORDINAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(\d{1,2})(?:st|nd|rd|th)\b").expect("valid regex: RE_ORDINAL")
});

/// Leading weekday name (`Sunday,` or `Sun.`).
#[allow(clippy::expect_used)]
static RE_WEEKDAY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:mon|tue|wed|thu|fri|sat|sun)[a-z]*\.?,?\s+").expect("valid regex: RE_WEEKDAY")
});

/// ISO date prefix of a timestamp (`2026-03-12T09:30:00`).
#[allow(clippy::expect_used)]
static RE_ISO_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{4}-\d{1,2}-\d{1,2})[T ]").expect("valid regex: RE_ISO_PREFIX")
});

/// Day-first dotted date (`12.03.2026`).
#[allow(clippy::expect_used)]
static RE_DOTTED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\d{1,2}\.\d{1,2}\.\d{4}$").expect("valid regex: RE_DOTTED")
});

/// `Sept`, which chrono's month names do not accept.
#[allow(clippy::expect_used)]
static RE_SEPT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\bsept\b").expect("valid regex: RE_SEPT")
});

const QUOTE_CHARS: &[char] = &['"', '\'', '\u{201c}', '\u{201d}', '\u{2018}', '\u{2019}'];

/// Formats tried in order once the text has been normalized.
const FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%m-%d-%Y",
    "%d %B %Y",
    "%B %d %Y",
    "%d-%b-%Y",
    "%Y %B %d",
];

/// Parse a date cell, defaulting range rows without a year to the current year.
pub fn parse_flexible_date(raw: &str) -> Option<CalendarDate> {
    parse_flexible_date_in_year(raw, chrono::Local::now().year())
}

/// Parse a date cell, defaulting range rows without a year to `default_year`.
pub fn parse_flexible_date_in_year(raw: &str, default_year: i32) -> Option<CalendarDate> {
    let cleaned: String = raw.trim().chars().filter(|c| !QUOTE_CHARS.contains(c)).collect();
    let cleaned = cleaned.trim();
    if cleaned.is_empty() || cleaned.eq_ignore_ascii_case(TBD_SENTINEL) {
        return None;
    }

    let candidate = match RE_RANGE.find(cleaned) {
        Some(sep) => range_start(cleaned, sep.start(), sep.end(), default_year),
        None => cleaned.to_string(),
    };

    parse_generic(&candidate)
}

/// Rebuild the first date of a range so it stands on its own.
///
/// The month and year are usually written once, after the second day
/// ("12 to 14 March 2026"); both are borrowed when the first part lacks them.
fn range_start(text: &str, sep_start: usize, sep_end: usize, default_year: i32) -> String {
    let mut first = text[..sep_start].trim().to_string();
    let rest = &text[sep_end..];

    if !RE_MONTH.is_match(&first) {
        if let Some(month) = RE_MONTH.find(rest) {
            first = format!("{first} {}", month.as_str());
        }
    }

    let year = RE_YEAR
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map_or_else(|| default_year.to_string(), |m| m.as_str().to_string());

    if first.contains(&year) {
        first
    } else {
        format!("{first}, {year}")
    }
}

fn parse_generic(text: &str) -> Option<CalendarDate> {
    let text = text.trim();

    if let Some(caps) = RE_ISO_PREFIX.captures(text) {
        return try_formats(caps.get(1)?.as_str());
    }
    if RE_DOTTED.is_match(text) {
        return NaiveDate::parse_from_str(text, "%d.%m.%Y").ok().map(CalendarDate::from);
    }

    let text = RE_WEEKDAY.replace(text, "");
    let text = RE_ORDINAL.replace_all(&text, "$1");
    let text = text.replace([',', '.'], " ");
    let text = RE_SEPT.replace_all(&text, "Sep");
    let text = text.split_whitespace().collect::<Vec<_>>().join(" ");

    try_formats(&text)
}

/// Try each format, keeping only dates whose year is written out in full.
///
/// chrono's `%d` happily eats the first two digits of a year (`March 2026`
/// reads as day 20 of year 26), so the parsed year must match a four-digit
/// token of the input.
fn try_formats(text: &str) -> Option<CalendarDate> {
    let years: Vec<i32> = RE_YEAR
        .captures_iter(text)
        .filter_map(|caps| caps.get(1)?.as_str().parse().ok())
        .collect();
    if years.is_empty() {
        return None;
    }

    FORMATS
        .iter()
        .filter_map(|fmt| NaiveDate::parse_from_str(text, fmt).ok())
        .find(|date| years.contains(&date.year()))
        .map(CalendarDate::from)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    fn parse(raw: &str) -> Option<String> {
        parse_flexible_date_in_year(raw, 2026).map(|d| d.to_string())
    }

    #[test]
    fn test_sentinels_and_empty() {
        assert_eq!(parse(""), None);
        assert_eq!(parse("   "), None);
        assert_eq!(parse("TBD"), None);
        assert_eq!(parse("tbd"), None);
        assert_eq!(parse("\"TBD\""), None);
    }

    #[test]
    fn test_range_borrows_month_and_year() {
        assert_eq!(parse("12 to 14 March 2026").as_deref(), Some("2026-03-12"));
        assert_eq!(parse("12 March to 14 March 2026").as_deref(), Some("2026-03-12"));
        assert_eq!(parse("30 March TO 2 April 2025").as_deref(), Some("2025-03-30"));
        assert_eq!(parse("March 12 to 14, 2027").as_deref(), Some("2027-03-12"));
    }

    #[test]
    fn test_range_without_year_uses_default() {
        assert_eq!(parse("5 to 7 June").as_deref(), Some("2026-06-05"));
        assert_eq!(
            parse_flexible_date_in_year("5 to 7 June", 2031).map(|d| d.to_string()).as_deref(),
            Some("2031-06-05")
        );
    }

    #[test]
    fn test_common_formats() {
        assert_eq!(parse("2026-03-12").as_deref(), Some("2026-03-12"));
        assert_eq!(parse("2026-03-12T09:30:00").as_deref(), Some("2026-03-12"));
        assert_eq!(parse("3/12/2026").as_deref(), Some("2026-03-12"));
        assert_eq!(parse("12 March 2026").as_deref(), Some("2026-03-12"));
        assert_eq!(parse("March 12, 2026").as_deref(), Some("2026-03-12"));
        assert_eq!(parse("Sunday, 12th March 2026").as_deref(), Some("2026-03-12"));
        assert_eq!(parse("12-Mar-2026").as_deref(), Some("2026-03-12"));
        assert_eq!(parse("12.03.2026").as_deref(), Some("2026-03-12"));
        assert_eq!(parse("\u{201c}12 Mar. 2026\u{201d}").as_deref(), Some("2026-03-12"));
    }

    #[test]
    fn test_month_year_cells_are_unresolved() {
        assert_eq!(parse("March 2026"), None);
        assert_eq!(parse("June 2025"), None);
        assert_eq!(parse("Dec 2019"), None);
        assert_eq!(parse("12 March 26"), None);
        assert_eq!(parse("3/12/26"), None);
    }

    #[test]
    fn test_sept_abbreviation() {
        assert_eq!(parse("Sept 12, 2026").as_deref(), Some("2026-09-12"));
        assert_eq!(parse("12 Sept. 2026").as_deref(), Some("2026-09-12"));
        assert_eq!(parse("12 to 14 Sept 2026").as_deref(), Some("2026-09-12"));
        assert_eq!(parse("12 September 2026").as_deref(), Some("2026-09-12"));
    }

    #[test]
    fn test_unrecognized_is_none() {
        assert_eq!(parse("Choir practice"), None);
        assert_eq!(parse("31 February 2026"), None);
        assert_eq!(parse("someday to never"), None);
    }
}
