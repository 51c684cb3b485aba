//! Calendar month handling, including the lenient ISO-8601 date parsing used by the
//! HTTP layer to pick which monthly average to score.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};
use serde::{Serialize, Serializer};
use std::fmt;
use std::fmt::{Display, Formatter};

const MONTH_ABBREVIATIONS: [&str; 12] = [
    "JAN", "FEB", "MAR", "APR", "MAY", "JUN", "JUL", "AUG", "SEP", "OCT", "NOV", "DEC",
];

/// A month of the year, always in `1..=12`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Ord, PartialOrd, Hash)]
pub struct Month(u32);

impl Month {
    /// Month used when a request date cannot be parsed (July).
    pub const FALLBACK: Month = Month(7);

    /// Returns `None` unless `month` is in `1..=12`.
    pub fn new(month: u32) -> Option<Self> {
        (1..=12).contains(&month).then_some(Self(month))
    }

    pub fn get(self) -> u32 {
        self.0
    }

    /// Zero-based position, for indexing twelve-slot series.
    pub fn index0(self) -> usize {
        (self.0 - 1) as usize
    }

    /// Parses a three-letter month abbreviation, ignoring case.
    pub fn from_abbreviation(abbreviation: &str) -> Option<Self> {
        MONTH_ABBREVIATIONS
            .iter()
            .position(|m| m.eq_ignore_ascii_case(abbreviation))
            .map(|i| Self(i as u32 + 1))
    }

    pub fn all() -> impl Iterator<Item = Month> {
        (1..=12).map(Month)
    }
}

impl Display for Month {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}", self.0)
    }
}

impl Serialize for Month {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u32(self.0)
    }
}

/// Resolves the calendar month of an ISO-8601 date string.
///
/// Accepts plain dates (`2025-07-15`), RFC 3339 timestamps (`2025-07-15T10:00:00Z`),
/// naive timestamps (`2025-07-15T10:00:00`) and year-month strings (`2025-07`).
/// Anything else resolves to [`Month::FALLBACK`].
///
/// # Examples
///
/// ```
/// use weather_odds::{month_from_iso, Month};
///
/// assert_eq!(month_from_iso("2025-07-15").get(), 7);
/// assert_eq!(month_from_iso("2024-12-01T08:30:00Z").get(), 12);
/// assert_eq!(month_from_iso("next tuesday"), Month::FALLBACK);
/// ```
pub fn month_from_iso(date: &str) -> Month {
    let date = date.trim();

    let parsed = NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(date).ok().map(|dt| dt.date_naive()))
        .or_else(|| {
            NaiveDateTime::parse_from_str(date, "%Y-%m-%dT%H:%M:%S%.f")
                .ok()
                .map(|dt| dt.date())
        })
        .or_else(|| NaiveDate::parse_from_str(&format!("{date}-01"), "%Y-%m-%d").ok());

    parsed
        .and_then(|d| Month::new(d.month()))
        .unwrap_or(Month::FALLBACK)
}
