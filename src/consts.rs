/// Maximum valid year (inclusive), the largest value a 4-digit group holds
pub const MAX_YEAR: u16 = 9999;

/// First month of the year
pub const MIN_MONTH: u8 = 1;
/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// First day of month, used for lower bounds
pub const MIN_DAY: u8 = 1;

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
pub(crate) const LEAP_YEAR_CYCLE: i64 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: i64 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: i64 = 400;

/// Separator of the canonical `YYYY-MM-DD` form
pub const CANONICAL_SEPARATOR: char = '-';
/// Separator of the slash-delimited display formats
pub const SLASH_SEPARATOR: char = '/';
/// Separator of the dotted display formats
pub const DOT_SEPARATOR: char = '.';

/// Display width of the day group
pub const DAY_WIDTH: usize = 2;
/// Display width of the month group
pub const MONTH_WIDTH: usize = 2;
/// Display width of the year group
pub const YEAR_WIDTH: usize = 4;
/// Digits in a complete date, with separators removed
pub const DATE_DIGITS: usize = DAY_WIDTH + MONTH_WIDTH + YEAR_WIDTH;

/// Number of groups in a display string
pub const GROUP_COUNT: usize = 3;

/// Prompt label shown next to the field, regardless of validity
pub const PROMPT: &str = "Enter the date";
