use crate::DateError;
use crate::calendar::{days_in_month, is_valid_month};
use crate::consts::MAX_YEAR;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU8;

/// A year value guaranteed to be in the range `0..=MAX_YEAR` (0..=9999),
/// i.e. anything a 4-digit year group can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct Year(u16);

impl Year {
    /// Creates a new Year, validating that it's <= `MAX_YEAR`
    ///
    /// # Errors
    /// Returns `DateError::InvalidYear` if the value is > `MAX_YEAR`.
    pub fn new(value: u16) -> Result<Self, DateError> {
        if value > MAX_YEAR {
            return Err(DateError::InvalidYear(value.into()));
        }
        Ok(Self(value))
    }

    /// Returns the year value as u16
    #[inline]
    pub const fn get(self) -> u16 {
        self.0
    }
}

impl TryFrom<u16> for Year {
    type Error = DateError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Year> for u16 {
    fn from(year: Year) -> Self {
        year.0
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}", self.0)
    }
}

/// A month value guaranteed to be in the range `1..=12`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Month(NonZeroU8);

impl Month {
    /// Creates a new Month, validating that it's in `1..=12`
    ///
    /// # Errors
    /// Returns `DateError::InvalidMonth` if the value is 0 or > 12.
    pub fn new(value: u8) -> Result<Self, DateError> {
        if !is_valid_month(value.into()) {
            return Err(DateError::InvalidMonth(value.into()));
        }
        NonZeroU8::new(value)
            .map(Self)
            .ok_or(DateError::InvalidMonth(value.into()))
    }

    /// Returns the month value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl TryFrom<u8> for Month {
    type Error = DateError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.0.get()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}", self.0.get())
    }
}

/// A day value guaranteed to be valid for the year and month it was built with
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(into = "u8")]
pub struct Day(NonZeroU8);

impl Day {
    /// Creates a new Day, validating that it exists in the given year and month
    ///
    /// # Errors
    /// Returns `DateError::InvalidMonth` if the month is not in `1..=12`, and
    /// `DateError::InvalidDay` if the day is 0 or past the end of the month.
    pub fn new(value: u8, year: Year, month: u8) -> Result<Self, DateError> {
        let max_day = days_in_month(month.into(), year.get().into())
            .map_err(|_| DateError::InvalidMonth(month.into()))?;

        let invalid = DateError::InvalidDay {
            year:  year.get().into(),
            month: month.into(),
            day:   value.into(),
        };
        if value > max_day {
            return Err(invalid);
        }
        NonZeroU8::new(value).map(Self).ok_or(invalid)
    }

    /// Returns the day value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl From<Day> for u8 {
    fn from(day: Day) -> Self {
        day.0.get()
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}", self.0.get())
    }
}
