/// Smallest valid year (inclusive). Page and API dates always carry a
/// four-digit year, so anything shorter is rejected outright.
pub const MIN_YEAR: u16 = 1000;

/// Largest valid year (inclusive)
pub const MAX_YEAR: u16 = 9999;

/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// Month number for February
pub const FEBRUARY: u8 = 2;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Maximum days in each month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: u16 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: u16 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: u16 = 400;

/// Date component separator in ISO 8601 dates
pub const ISO_SEPARATOR: char = '-';
/// Date component separator in page-native slash dates
pub const SLASH_SEPARATOR: char = '/';
/// Date component separator in dotted European dates
pub const DOT_SEPARATOR: char = '.';

/// Separator between the two boundaries of a textual date range.
/// Slash dates contain '/', so ranges use '..' instead.
pub const RANGE_SEPARATOR: &str = "..";

/// Any single separator accepted between fields of a generic date string
pub const FIELD_SEPARATORS: [char; 3] = [SLASH_SEPARATOR, ISO_SEPARATOR, DOT_SEPARATOR];
