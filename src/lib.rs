mod consts;
mod detect;
mod format;
mod parse;
mod prelude;
mod range;
mod types;

pub use consts::*;
pub use detect::{FormatHint, detect_format};
pub use format::{PageFormat, PatternError, format_for_api, to_page_format};
pub use parse::parse_date;
pub use range::{DateRange, RangeError, in_range, to_api_params};
pub use types::{Day, Month, Year};

use crate::prelude::*;
use std::str::FromStr;

/// A plain calendar date: year, month, day, no time-of-day.
/// Validity (month range, day-for-month, leap years, four-digit year) is
/// guaranteed at construction by the component types, so a value of this
/// type is always a real Gregorian date.
///
/// Displays as ISO `YYYY-MM-DD`, the canonical wire format of the API layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:04}-{:02}-{:02}", "year.get()", "month.get()", "day.get()")]
pub struct CalendarDate {
    // Field order matters: the derived ordering compares year, then month,
    // then day, which is exactly calendar ordering.
    year: types::Year,
    month: types::Month,
    day: types::Day,
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "Unrecognized date format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Invalid year: {} (must be {}-{})", "_0", MIN_YEAR, MAX_YEAR)]
    InvalidYear(u16),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(u8),
    #[display(fmt = "Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { month: u8, day: u8, year: u16 },
    #[display(fmt = "Empty date string")]
    EmptyInput,
}

impl std::error::Error for ParseError {}

impl CalendarDate {
    /// Creates a date from already-validated component types
    pub const fn new(year: types::Year, month: types::Month, day: types::Day) -> Self {
        Self { year, month, day }
    }

    /// Creates a date from raw numbers, validating every component
    ///
    /// # Errors
    /// Returns `ParseError::InvalidYear`/`InvalidMonth`/`InvalidDay` for the
    /// first component that fails validation.
    pub fn from_ymd(year: u16, month: u8, day: u8) -> Result<Self, ParseError> {
        let year_t = types::Year::new(year)?;
        let month_t = types::Month::new(month)?;
        let day_t = types::Day::new(day, year, month)?;
        Ok(Self {
            year: year_t,
            month: month_t,
            day: day_t,
        })
    }

    /// Returns the year (always four digits)
    pub const fn year(&self) -> u16 {
        self.year.get()
    }

    /// Returns the month (1-12)
    pub const fn month(&self) -> u8 {
        self.month.get()
    }

    /// Returns the day of month
    pub const fn day(&self) -> u8 {
        self.day.get()
    }

    /// Returns the Year type
    pub const fn year_typed(&self) -> types::Year {
        self.year
    }

    /// Returns the Month type
    pub const fn month_typed(&self) -> types::Month {
        self.month
    }

    /// Returns the Day type
    pub const fn day_typed(&self) -> types::Day {
        self.day
    }
}

impl FromStr for CalendarDate {
    type Err = ParseError;

    /// Runs the full hint-less parsing chain (strict ISO, then the explicit
    /// format table, then the generic split with month-first default).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse::parse_date(s, None)
    }
}

impl serde::Serialize for CalendarDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for CalendarDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: u16, month: u8, day: u8) -> CalendarDate {
        CalendarDate::from_ymd(year, month, day).unwrap()
    }

    #[test]
    fn test_from_ymd_valid() {
        let d = date(2025, 3, 8);
        assert_eq!(d.year(), 2025);
        assert_eq!(d.month(), 3);
        assert_eq!(d.day(), 8);
    }

    #[test]
    fn test_from_ymd_invalid_components() {
        assert!(matches!(
            CalendarDate::from_ymd(999, 1, 1),
            Err(ParseError::InvalidYear(999))
        ));
        assert!(matches!(
            CalendarDate::from_ymd(2025, 13, 1),
            Err(ParseError::InvalidMonth(13))
        ));
        assert!(matches!(
            CalendarDate::from_ymd(2025, 2, 29),
            Err(ParseError::InvalidDay {
                year: 2025,
                month: 2,
                day: 29
            })
        ));
    }

    #[test]
    fn test_typed_accessors() {
        let d = date(2025, 3, 8);
        assert_eq!(d.year_typed(), Year::new(2025).unwrap());
        assert_eq!(d.month_typed(), Month::new(3).unwrap());
        assert_eq!(d.day_typed(), Day::new(8, 2025, 3).unwrap());
        assert_eq!(d, CalendarDate::new(d.year_typed(), d.month_typed(), d.day_typed()));
    }

    #[test]
    fn test_leap_day_construction() {
        assert!(CalendarDate::from_ymd(2024, 2, 29).is_ok());
        assert!(CalendarDate::from_ymd(2000, 2, 29).is_ok());
        assert!(CalendarDate::from_ymd(1900, 2, 29).is_err());
    }

    #[test]
    fn test_display_is_iso() {
        assert_eq!(date(2025, 3, 8).to_string(), "2025-03-08");
        assert_eq!(date(2025, 12, 31).to_string(), "2025-12-31");
    }

    #[test]
    fn test_ordering_is_calendar_order() {
        assert!(date(2024, 12, 31) < date(2025, 1, 1));
        assert!(date(2025, 1, 31) < date(2025, 2, 1));
        assert!(date(2025, 2, 14) < date(2025, 2, 15));
        assert_eq!(date(2025, 2, 15), date(2025, 2, 15));
    }

    #[test]
    fn test_from_str_runs_full_chain() {
        // Strict ISO
        assert_eq!("2025-03-08".parse::<CalendarDate>().unwrap(), date(2025, 3, 8));
        // Explicit table (day-first slash wins without a hint)
        assert_eq!("15/02/2025".parse::<CalendarDate>().unwrap(), date(2025, 2, 15));
        // Generic split on dots
        assert_eq!("15.2.2025".parse::<CalendarDate>().unwrap(), date(2025, 2, 15));
    }

    #[test]
    fn test_from_str_garbage() {
        assert!(matches!(
            "not-a-date".parse::<CalendarDate>(),
            Err(ParseError::InvalidFormat(_))
        ));
        assert!(matches!(
            "".parse::<CalendarDate>(),
            Err(ParseError::EmptyInput)
        ));
    }

    #[test]
    fn test_serde_round_trip() {
        let d = date(2025, 3, 8);
        let json = serde_json::to_string(&d).unwrap();
        assert_eq!(json, r#""2025-03-08""#);

        let parsed: CalendarDate = serde_json::from_str(&json).unwrap();
        assert_eq!(d, parsed);
    }

    #[test]
    fn test_serde_accepts_page_formats() {
        // Deserialization goes through the parse chain, so page-native
        // strings with a decisive field are accepted too
        let parsed: CalendarDate = serde_json::from_str(r#""13/01/2025""#).unwrap();
        assert_eq!(parsed, date(2025, 1, 13));
    }

    #[test]
    fn test_serde_rejects_invalid() {
        let result: Result<CalendarDate, _> = serde_json::from_str(r#""2025-02-30""#);
        assert!(result.is_err());

        let result: Result<CalendarDate, _> = serde_json::from_str(r#""garbage""#);
        assert!(result.is_err());
    }
}
