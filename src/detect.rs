//! Date-format detection from scraped page text.
//!
//! Pages rarely declare whether they render `01/03/2025` as January 3rd or
//! March 1st. The detector scans text samples pulled from the page for
//! numeric date tokens and looks for a decisive one: a field larger than 12
//! can only be a day, which settles the ordering for the whole page.

use once_cell::sync::Lazy;
use regex::Regex;

/// How an ambiguous two-small-numbers date string should be read.
/// Derived once per page pass and passed down by value; never cached
/// across sites.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormatHint {
    /// Month/day/year (US convention), e.g. `03/08/2025` is March 8th
    MonthFirst,
    /// Day/month/year, e.g. `03/08/2025` is August 3rd
    DayFirst,
}

/// Numeric date token: 1-2 digits, separator, 1-2 digits, separator,
/// exactly 4 digits. Separators are `/`, `-` or `.`.
static DATE_TOKEN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\d{1,2})[/.\-](\d{1,2})[/.\-](\d{4})").expect("date token pattern is valid")
});

/// Infers the page's date ordering from a sequence of scraped text samples.
///
/// The first decisive token wins: if its first field exceeds 12 the page is
/// day-first, if its second field exceeds 12 it is month-first. Tokens where
/// both fields are 12 or less are skipped. With no decisive token at all
/// (including an empty sample list) the detector falls back to
/// [`FormatHint::MonthFirst`], the convention of the target site's primary
/// audience.
///
/// Never fails: a bad sample list degrades to the default, and the parser's
/// own fallback chain copes with a wrong hint. Note the deliberate absence
/// of voting: one decisive token settles the page, even if later samples
/// would disagree.
pub fn detect_format<I, S>(samples: I) -> FormatHint
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    for sample in samples {
        for token in DATE_TOKEN.captures_iter(sample.as_ref()) {
            let first = capture_field(&token, 1);
            let second = capture_field(&token, 2);
            let (Some(first), Some(second)) = (first, second) else {
                continue;
            };

            if first > 12 {
                return FormatHint::DayFirst;
            }
            if second > 12 {
                return FormatHint::MonthFirst;
            }
            // Both fields could be a month; keep scanning
        }
    }

    FormatHint::MonthFirst
}

fn capture_field(captures: &regex::Captures<'_>, index: usize) -> Option<u8> {
    captures.get(index)?.as_str().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decisive_first_field() {
        let hint = detect_format(["Posted 13/01/2025", "Updated 02/02/2025"]);
        assert_eq!(hint, FormatHint::DayFirst);
    }

    #[test]
    fn test_decisive_second_field() {
        let hint = detect_format(["Statement date 01/13/2025"]);
        assert_eq!(hint, FormatHint::MonthFirst);
    }

    #[test]
    fn test_empty_samples_default() {
        let samples: [&str; 0] = [];
        assert_eq!(detect_format(samples), FormatHint::MonthFirst);
    }

    #[test]
    fn test_all_ambiguous_default() {
        let hint = detect_format(["01/02/2025", "03/04/2025", "11/12/2025"]);
        assert_eq!(hint, FormatHint::MonthFirst);
    }

    #[test]
    fn test_no_date_tokens_default() {
        let hint = detect_format(["Welcome back!", "Balance: $1,234.56", ""]);
        assert_eq!(hint, FormatHint::MonthFirst);
    }

    #[test]
    fn test_first_decisive_sample_wins() {
        // No voting: the first decisive token settles it, even though the
        // later sample points the other way
        let hint = detect_format(["31/01/2025", "01/31/2025", "01/31/2025"]);
        assert_eq!(hint, FormatHint::DayFirst);
    }

    #[test]
    fn test_skips_ambiguous_before_decisive() {
        let hint = detect_format(["01/02/2025", "no dates here", "due 01/25/2025"]);
        assert_eq!(hint, FormatHint::MonthFirst);

        let hint = detect_format(["01/02/2025", "due 25/01/2025"]);
        assert_eq!(hint, FormatHint::DayFirst);
    }

    #[test]
    fn test_token_embedded_in_text() {
        let hint = detect_format(["Last login: 28/06/2025 09:14"]);
        assert_eq!(hint, FormatHint::DayFirst);
    }

    #[test]
    fn test_mixed_separators() {
        assert_eq!(detect_format(["28-06-2025"]), FormatHint::DayFirst);
        assert_eq!(detect_format(["28.06.2025"]), FormatHint::DayFirst);
        assert_eq!(detect_format(["06-28-2025"]), FormatHint::MonthFirst);
    }

    #[test]
    fn test_two_digit_year_ignored() {
        // 28/06/25 is not a token (year must be four digits), so the only
        // recognized token is the ambiguous one
        let hint = detect_format(["28/06/25", "01/02/2025"]);
        assert_eq!(hint, FormatHint::MonthFirst);
    }

    #[test]
    fn test_owned_strings() {
        let samples = vec![String::from("Posted 13/01/2025")];
        assert_eq!(detect_format(samples), FormatHint::DayFirst);
    }
}
