use std::{cmp::Ordering, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::detect::FormatHint;
use crate::parse::parse_date;
use crate::{CalendarDate, ParseError, RANGE_SEPARATOR, prelude::*};

/// An inclusive range between two calendar dates.
///
/// Deliberately permissive: `start <= end` is NOT enforced, matching the
/// filter workflows this range serves. An inverted range is representable
/// and simply contains nothing; callers wanting strictness check
/// [`DateRange::is_inverted`] themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display(fmt = "{start}..{end}")]
pub struct DateRange {
    start: CalendarDate,
    end: CalendarDate,
}

/// Error type for date range operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RangeError {
    /// Error parsing a boundary date.
    #[error(transparent)]
    ParseError(#[from] ParseError),

    /// Invalid combined range text.
    #[error("Invalid range format: {0}")]
    InvalidFormat(String),
}

impl DateRange {
    /// Creates a new range. No ordering check: an inverted pair is accepted
    /// and yields an empty range.
    pub const fn new(start: CalendarDate, end: CalendarDate) -> Self {
        Self { start, end }
    }

    /// Parses both boundary strings through the hint-less chain, each
    /// resolved independently. No cross-validation between the two: if one
    /// boundary carries a decisive field and the other does not, each is
    /// still read on its own.
    ///
    /// # Errors
    /// Returns `ParseError` for the first boundary that fails to parse.
    pub fn parse(start_text: &str, end_text: &str) -> Result<Self, ParseError> {
        let start = parse_date(start_text, None)?;
        let end = parse_date(end_text, None)?;
        Ok(Self { start, end })
    }

    /// Returns the start date of the range
    pub const fn start(&self) -> CalendarDate {
        self.start
    }

    /// Returns the end date of the range
    pub const fn end(&self) -> CalendarDate {
        self.end
    }

    /// Returns both start and end dates as a tuple
    pub const fn dates(&self) -> (CalendarDate, CalendarDate) {
        (self.start, self.end)
    }

    /// True when `start > end`. Such a range contains nothing.
    pub fn is_inverted(&self) -> bool {
        self.start > self.end
    }

    /// Checks whether `start <= date <= end` by calendar ordering
    /// (year, then month, then day)
    pub fn contains(&self, date: CalendarDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Renders both boundaries as ISO strings for direct use as REST query
    /// parameters
    pub fn to_api_params(&self) -> (String, String) {
        (self.start.to_string(), self.end.to_string())
    }
}

/// Parses all three inputs through the hint-less chain and answers whether
/// the date falls within the inclusive range.
///
/// # Errors
/// Returns `ParseError` for the first of the three inputs that fails to
/// parse.
pub fn in_range(date_text: &str, start_text: &str, end_text: &str) -> Result<bool, ParseError> {
    let date = parse_date(date_text, None)?;
    let range = DateRange::parse(start_text, end_text)?;
    Ok(range.contains(date))
}

/// Parses both boundary strings (disambiguated by `hint` when one was
/// detected) and renders each in ISO form for the REST API layer.
///
/// # Errors
/// Returns `ParseError` for the first boundary that fails to parse.
pub fn to_api_params(
    start_text: &str,
    end_text: &str,
    hint: Option<FormatHint>,
) -> Result<(String, String), ParseError> {
    let start = parse_date(start_text, hint)?;
    let end = parse_date(end_text, hint)?;
    Ok(DateRange::new(start, end).to_api_params())
}

impl FromStr for DateRange {
    type Err = RangeError;

    /// Parses `start..end`, each boundary through the full parsing chain.
    /// `..` is the range separator because boundary text may itself contain
    /// `/`, `-` or `.` as field separators.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();

        let separator_count = trimmed.matches(RANGE_SEPARATOR).count();
        match separator_count {
            0 => Err(RangeError::InvalidFormat(format!(
                "No range separator found (expected '{RANGE_SEPARATOR}'): {s}"
            ))),
            1 => {
                let (start_str, end_str) =
                    trimmed.split_once(RANGE_SEPARATOR).ok_or_else(|| {
                        RangeError::InvalidFormat(format!(
                            "Separator '{RANGE_SEPARATOR}' not found despite count == 1"
                        ))
                    })?;

                Ok(Self::parse(start_str.trim(), end_str.trim())?)
            }
            _ => Err(RangeError::InvalidFormat(format!(
                "Too many '{RANGE_SEPARATOR}' separators: expected 1, found {separator_count}"
            ))),
        }
    }
}

impl PartialOrd for DateRange {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for DateRange {
    fn cmp(&self, other: &Self) -> Ordering {
        // Compare start dates first, then end dates
        match self.start.cmp(&other.start) {
            Ordering::Equal => self.end.cmp(&other.end),
            ord => ord,
        }
    }
}

impl Serialize for DateRange {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for DateRange {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
