//! Gregorian calendar rules used by the validator.

use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_MONTH, FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE, LEAP_YEAR_CYCLE,
    MAX_MONTH, MIN_DAY, MIN_MONTH,
};

/// Error type for calendar lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    /// Month outside `1..=12`.
    #[error("Invalid month: {0} (must be {min}-{max})", min = MIN_MONTH, max = MAX_MONTH)]
    InvalidMonth(u32),
}

/// Returns true for Gregorian leap years. Total over all years, including
/// zero and negative (proleptic) years.
pub const fn is_leap_year(year: i64) -> bool {
    (year.rem_euclid(LEAP_YEAR_CYCLE) == 0 && year.rem_euclid(CENTURY_CYCLE) != 0)
        || year.rem_euclid(GREGORIAN_CYCLE) == 0
}

/// Returns true if `month` is in `1..=12`.
pub const fn is_valid_month(month: u32) -> bool {
    month >= MIN_MONTH as u32 && month <= MAX_MONTH as u32
}

/// Number of days in `month` of `year`.
///
/// # Errors
/// Returns `CalendarError::InvalidMonth` if the month is outside `1..=12`.
pub const fn days_in_month(month: u32, year: i64) -> Result<u8, CalendarError> {
    if !is_valid_month(month) {
        return Err(CalendarError::InvalidMonth(month));
    }

    if month == FEBRUARY as u32 && is_leap_year(year) {
        Ok(FEBRUARY_DAYS_LEAP)
    } else {
        Ok(DAYS_IN_MONTH[month as usize])
    }
}

/// Returns true if `day` exists in `month` of `year`. An invalid month makes
/// every day invalid.
pub const fn is_valid_day(day: u32, month: u32, year: i64) -> bool {
    match days_in_month(month, year) {
        Ok(max_day) => day >= MIN_DAY as u32 && day <= max_day as u32,
        Err(_) => false,
    }
}
