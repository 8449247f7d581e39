//! Rendering calendar dates into the three output conventions: page-native
//! slash formats, the API's ISO format, and caller-supplied custom patterns.

use crate::detect::FormatHint;
use crate::parse::parse_date;
use crate::{CalendarDate, ParseError};

/// A target output convention for [`CalendarDate::render`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageFormat {
    /// `MM/DD/YYYY` (US page convention)
    MonthFirst,
    /// `DD/MM/YYYY`
    DayFirst,
    /// `YYYY-MM-DD`, the only format the REST API layer accepts
    Iso,
    /// A strftime-like pattern applied literally. Supported directives:
    /// `%Y` (four-digit year), `%m` (zero-padded month), `%d` (zero-padded
    /// day), `%%` (literal percent).
    Custom(String),
}

/// A caller-supplied custom pattern was malformed. Never silently coerced;
/// the built-in formats cannot produce this.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PatternError {
    /// Pattern contains a `%` directive the formatter does not know.
    #[error("Unsupported pattern directive: %{0}")]
    UnknownDirective(char),

    /// Pattern ends with a bare `%`.
    #[error("Pattern ends with a dangling '%'")]
    DanglingPercent,
}

impl CalendarDate {
    /// Renders this date in the given output convention.
    ///
    /// Total for the three built-in formats; only a malformed
    /// [`PageFormat::Custom`] pattern can fail.
    ///
    /// # Errors
    /// Returns `PatternError` for an unknown custom directive or a pattern
    /// ending in a bare `%`.
    pub fn render(&self, target: &PageFormat) -> Result<String, PatternError> {
        match target {
            PageFormat::MonthFirst => {
                Ok(format!("{:02}/{:02}/{:04}", self.month(), self.day(), self.year()))
            }
            PageFormat::DayFirst => {
                Ok(format!("{:02}/{:02}/{:04}", self.day(), self.month(), self.year()))
            }
            PageFormat::Iso => Ok(self.to_string()),
            PageFormat::Custom(pattern) => self.render_pattern(pattern),
        }
    }

    /// Applies a strftime-like pattern. Unknown directives are an error, not
    /// a passthrough: a typo'd pattern must surface, never produce a
    /// plausible-but-wrong date string.
    fn render_pattern(&self, pattern: &str) -> Result<String, PatternError> {
        let mut out = String::with_capacity(pattern.len() + 8);
        let mut chars = pattern.chars();

        while let Some(c) = chars.next() {
            if c != '%' {
                out.push(c);
                continue;
            }
            match chars.next() {
                Some('Y') => out.push_str(&format!("{:04}", self.year())),
                Some('m') => out.push_str(&format!("{:02}", self.month())),
                Some('d') => out.push_str(&format!("{:02}", self.day())),
                Some('%') => out.push('%'),
                Some(other) => return Err(PatternError::UnknownDirective(other)),
                None => return Err(PatternError::DanglingPercent),
            }
        }

        Ok(out)
    }
}

/// Parses `text` with the page's detected hint and re-renders it in that
/// page convention, ready for a date-range form field. A parse failure
/// propagates; the input is never echoed back unverified.
///
/// # Errors
/// Returns `ParseError` when `text` fails the parsing chain.
pub fn to_page_format(text: &str, hint: FormatHint) -> Result<String, ParseError> {
    let date = parse_date(text, Some(hint))?;
    let target = match hint {
        FormatHint::MonthFirst => PageFormat::MonthFirst,
        FormatHint::DayFirst => PageFormat::DayFirst,
    };
    // Only Custom patterns can fail rendering, and both page targets are
    // built-in
    date.render(&target)
        .map_err(|_| ParseError::InvalidFormat(text.to_owned()))
}

/// Parses `text` with no hint and renders it as an ISO query parameter.
///
/// # Errors
/// Returns `ParseError` when `text` fails the parsing chain.
pub fn format_for_api(text: &str) -> Result<String, ParseError> {
    Ok(parse_date(text, None)?.to_string())
}
