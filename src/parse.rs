//! The ordered date-parsing strategy chain.
//!
//! Banking dates are exactly the place where a silent misread is costly, so
//! the day-first/month-first guess is an explicit, auditable chain rather
//! than a lenient library fallback:
//!
//! 1. Strict ISO (`YYYY-MM-DD`) — unambiguous, always wins over any hint.
//! 2. A fixed table of explicit (separator, field-order) candidates; the
//!    first full parse into a valid calendar date wins. A supplied hint
//!    orders the two ambiguous slash candidates.
//! 3. A generic three-field split, disambiguated by hint, then first-field
//!    magnitude, then the month-first default.
//!
//! Anything else is a [`ParseError`] carrying the offending input.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::consts::{FIELD_SEPARATORS, ISO_SEPARATOR, SLASH_SEPARATOR};
use crate::detect::FormatHint;
use crate::{CalendarDate, ParseError};

/// Exactly four digits, hyphen, two, hyphen, two. Zero-padded ISO only;
/// looser year-first shapes go through the explicit table instead.
static STRICT_ISO: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("strict ISO pattern is valid"));

/// Position of day and month within a three-field date string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FieldOrder {
    YearMonthDay,
    DayMonthYear,
    MonthDayYear,
}

/// One explicit-format candidate: a single separator and a field order
#[derive(Debug, Clone, Copy)]
struct Candidate {
    separator: char,
    order: FieldOrder,
}

/// The explicit format table. The two ambiguous slash candidates are ordered
/// by the hint when one is supplied; without a hint the day-first candidate
/// is tried first, matching the source site's dominant convention for
/// free-typed input.
const fn explicit_candidates(hint: Option<FormatHint>) -> [Candidate; 4] {
    let iso = Candidate {
        separator: ISO_SEPARATOR,
        order: FieldOrder::YearMonthDay,
    };
    let day_first = Candidate {
        separator: SLASH_SEPARATOR,
        order: FieldOrder::DayMonthYear,
    };
    let month_first = Candidate {
        separator: SLASH_SEPARATOR,
        order: FieldOrder::MonthDayYear,
    };
    let year_first_slash = Candidate {
        separator: SLASH_SEPARATOR,
        order: FieldOrder::YearMonthDay,
    };

    match hint {
        Some(FormatHint::MonthFirst) => [iso, month_first, day_first, year_first_slash],
        Some(FormatHint::DayFirst) | None => [iso, day_first, month_first, year_first_slash],
    }
}

/// Parses a date string of unknown format into a [`CalendarDate`].
///
/// The optional `hint` (usually obtained from [`crate::detect_format`])
/// only influences ambiguous input: strict ISO is never reinterpreted, and
/// a decisive field (> 12) overrides a wrong hint through the candidate
/// table. Two-digit years are never normalized; every strategy requires a
/// four-digit year.
///
/// # Errors
/// Returns `ParseError::EmptyInput` for blank input, a component error for
/// ISO-shaped input with invalid values, and `ParseError::InvalidFormat`
/// carrying the input when every strategy fails.
pub fn parse_date(text: &str, hint: Option<FormatHint>) -> Result<CalendarDate, ParseError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ParseError::EmptyInput);
    }

    // Strategy 1: strict ISO, hint ignored by design. An ISO-shaped string
    // with invalid values fails here outright rather than falling through
    // to a reinterpreting strategy.
    if STRICT_ISO.is_match(trimmed) {
        return parse_fields(trimmed, ISO_SEPARATOR, FieldOrder::YearMonthDay)
            .unwrap_or_else(|| Err(ParseError::InvalidFormat(text.to_owned())));
    }

    // Strategy 2: explicit format table, first full parse wins. A candidate
    // that matches the shape but yields an invalid date (e.g. month 13)
    // fails that candidate only.
    for candidate in explicit_candidates(hint) {
        if let Some(Ok(date)) = parse_fields(trimmed, candidate.separator, candidate.order) {
            return Ok(date);
        }
    }

    // Strategy 3: generic split with hint-guided ordering
    if let Some(Ok(date)) = parse_generic(trimmed, hint) {
        return Ok(date);
    }

    Err(ParseError::InvalidFormat(text.to_owned()))
}

/// Attempts one explicit candidate. `None` means the shape did not match at
/// all; `Some(Err(_))` means the shape matched but the values were invalid.
fn parse_fields(
    text: &str,
    separator: char,
    order: FieldOrder,
) -> Option<Result<CalendarDate, ParseError>> {
    let parts: Vec<&str> = text.split(separator).map(str::trim).collect();
    if parts.len() != 3 {
        return None;
    }

    let (year_part, month_part, day_part) = match order {
        FieldOrder::YearMonthDay => (parts[0], parts[1], parts[2]),
        FieldOrder::DayMonthYear => (parts[2], parts[1], parts[0]),
        FieldOrder::MonthDayYear => (parts[2], parts[0], parts[1]),
    };

    let year = parse_year_field(year_part)?;
    let month = parse_small_field(month_part)?;
    let day = parse_small_field(day_part)?;

    Some(CalendarDate::from_ymd(year, month, day))
}

/// Generic fallback: split on any single separator, require exactly three
/// numeric fields ending in a four-digit year, then decide day/month order
/// by hint, first-field magnitude, or the month-first default, in that
/// priority.
fn parse_generic(
    text: &str,
    hint: Option<FormatHint>,
) -> Option<Result<CalendarDate, ParseError>> {
    let parts: Vec<&str> = text.split(FIELD_SEPARATORS).map(str::trim).collect();
    if parts.len() != 3 {
        return None;
    }

    let first = parse_small_field(parts[0])?;
    let second = parse_small_field(parts[1])?;
    let year = parse_year_field(parts[2])?;

    let day_first = match hint {
        Some(FormatHint::DayFirst) => true,
        Some(FormatHint::MonthFirst) => false,
        None => first > 12,
    };

    let (day, month) = if day_first { (first, second) } else { (second, first) };
    Some(CalendarDate::from_ymd(year, month, day))
}

/// A year field must be exactly four digits; two-digit years are rejected
/// rather than pivoted to a century
fn parse_year_field(part: &str) -> Option<u16> {
    if part.len() != 4 {
        return None;
    }
    numeric(part)?.parse().ok()
}

/// A day or month field: one or two digits
fn parse_small_field(part: &str) -> Option<u8> {
    if part.is_empty() || part.len() > 2 {
        return None;
    }
    numeric(part)?.parse().ok()
}

fn numeric(part: &str) -> Option<&str> {
    part.bytes().all(|b| b.is_ascii_digit()).then_some(part)
}
