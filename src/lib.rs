//! # date_mask
//!
//! A locale-aware, validating date input mask.
//!
//! The engine maps a canonical `YYYY-MM-DD` date to an editable display
//! string whose group order depends on the [`Locale`] (`31/12/2000` by
//! default, `12/31/2000` for the US), and classifies edited text as a valid
//! [`CanonicalDate`] or as invalid with an [`InvalidReason`].
//!
//! ```
//! use date_mask::{Locale, MaskOptions, MaskedInput};
//!
//! let field = MaskedInput::new("2000-12-31", MaskOptions::for_locale(Locale::Us));
//! assert_eq!(field.display(), "12/31/2000");
//! assert_eq!(field.error_message(), None);
//! ```

pub mod calendar;
mod consts;
mod input;
pub mod locale;
pub mod mask;
mod prelude;
#[cfg(test)]
mod test_utils;
mod types;
mod validator;

pub use calendar::CalendarError;
pub use consts::*;
pub use input::{MaskOptions, MaskState, MaskedInput};
pub use locale::{Field, FieldOrder, Locale, LocaleError};
pub use mask::MaskError;
pub use types::{Day, Month, Year};
pub use validator::{InvalidReason, ValidationResult, validate, validate_fields};

use crate::prelude::*;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A complete, calendar-valid Gregorian date.
///
/// Only built through checked constructors, so every value names a day that
/// exists. Displays and serializes in the canonical `YYYY-MM-DD` form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{year}-{month}-{day}")]
pub struct CanonicalDate {
    year:  Year,
    month: Month,
    day:   Day,
}

/// An unvalidated `(year, month, day)` triple in canonical order.
///
/// This is what structural parsing produces before any calendar check, so a
/// date such as `2000-12-32` can still be rendered and then reported.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateFields {
    pub year:  u32,
    pub month: u32,
    pub day:   u32,
}

/// Error type for canonical date construction and parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateError {
    #[error("Invalid date format: {0}")]
    InvalidFormat(String),
    #[error("Invalid year: {0} (must be 0-{max})", max = MAX_YEAR)]
    InvalidYear(u32),
    #[error("Invalid month: {0} (must be {min}-{max})", min = MIN_MONTH, max = MAX_MONTH)]
    InvalidMonth(u32),
    #[error("Invalid day {day} for month {year:04}-{month:02}")]
    InvalidDay { year: u32, month: u32, day: u32 },
    #[error("Empty date string")]
    EmptyInput,
}

impl CanonicalDate {
    /// Creates a date, validating month and day against the calendar.
    ///
    /// # Errors
    /// Returns the `DateError` for the first component that is out of range.
    pub fn new(year: u16, month: u8, day: u8) -> Result<Self, DateError> {
        let year = Year::new(year)?;
        let month_typed = Month::new(month)?;
        let day = Day::new(day, year, month)?;
        Ok(Self {
            year,
            month: month_typed,
            day,
        })
    }

    /// Returns the year component
    pub const fn year(&self) -> u16 {
        self.year.get()
    }

    /// Returns the month component
    pub const fn month(&self) -> u8 {
        self.month.get()
    }

    /// Returns the day component
    pub const fn day(&self) -> u8 {
        self.day.get()
    }

    /// Returns the components as unvalidated fields
    pub fn fields(&self) -> DateFields {
        DateFields::from(*self)
    }
}

impl DateFields {
    pub const fn new(year: u32, month: u32, day: u32) -> Self {
        Self { year, month, day }
    }

    /// Helper to parse one fixed-width group of the canonical form
    fn parse_group(s: &str, width: usize) -> Result<u32, DateError> {
        if s.len() != width || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DateError::InvalidFormat(s.to_owned()));
        }
        s.parse::<u32>()
            .map_err(|_| DateError::InvalidFormat(s.to_owned()))
    }
}

impl From<CanonicalDate> for DateFields {
    fn from(date: CanonicalDate) -> Self {
        Self {
            year:  date.year().into(),
            month: date.month().into(),
            day:   date.day().into(),
        }
    }
}

impl FromStr for DateFields {
    type Err = DateError;

    /// Structural parse of the canonical `YYYY-MM-DD` form. Group widths and
    /// digits are enforced; calendar ranges are not.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(DateError::EmptyInput);
        }

        let parts: Vec<&str> = trimmed.split(CANONICAL_SEPARATOR).collect();
        if parts.len() != GROUP_COUNT {
            return Err(DateError::InvalidFormat(format!(
                "expected YYYY{CANONICAL_SEPARATOR}MM{CANONICAL_SEPARATOR}DD, found {} {CANONICAL_SEPARATOR} separators in {trimmed}",
                parts.len() - 1
            )));
        }

        Ok(Self {
            year:  Self::parse_group(parts[0], YEAR_WIDTH)?,
            month: Self::parse_group(parts[1], MONTH_WIDTH)?,
            day:   Self::parse_group(parts[2], DAY_WIDTH)?,
        })
    }
}

impl TryFrom<DateFields> for CanonicalDate {
    type Error = DateError;

    fn try_from(fields: DateFields) -> Result<Self, Self::Error> {
        let year = u16::try_from(fields.year).map_err(|_| DateError::InvalidYear(fields.year))?;
        let month =
            u8::try_from(fields.month).map_err(|_| DateError::InvalidMonth(fields.month))?;
        let day = u8::try_from(fields.day).map_err(|_| DateError::InvalidDay {
            year:  fields.year,
            month: fields.month,
            day:   fields.day,
        })?;
        Self::new(year, month, day)
    }
}

impl FromStr for CanonicalDate {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<DateFields>()?.try_into()
    }
}

impl Serialize for CanonicalDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for CanonicalDate {
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
    use crate::test_utils::date;

    #[test]
    fn test_parse_canonical_date() {
        let d = "2000-12-31".parse::<CanonicalDate>().unwrap();
        assert_eq!(d.year(), 2000);
        assert_eq!(d.month(), 12);
        assert_eq!(d.day(), 31);
        assert_eq!(d, date(2000, 12, 31));
    }

    #[test]
    fn test_parse_with_whitespace() {
        assert_eq!(
            " 2000-12-31 ".parse::<CanonicalDate>().unwrap(),
            date(2000, 12, 31)
        );
    }

    #[test]
    fn test_display_is_canonical() {
        assert_eq!(date(2000, 1, 5).to_string(), "2000-01-05");
        assert_eq!(date(33, 7, 4).to_string(), "0033-07-04");
    }

    #[test]
    fn test_invalid_month() {
        let result = "2000-13-30".parse::<CanonicalDate>();
        assert!(matches!(result, Err(DateError::InvalidMonth(13))));
    }

    #[test]
    fn test_invalid_day() {
        let result = "2000-12-32".parse::<CanonicalDate>();
        assert!(matches!(
            result,
            Err(DateError::InvalidDay {
                year: 2000,
                month: 12,
                day: 32
            })
        ));
    }

    #[test]
    fn test_leap_year() {
        assert!("2000-02-29".parse::<CanonicalDate>().is_ok());
        assert!("1900-02-29".parse::<CanonicalDate>().is_err());
        assert!("1999-02-29".parse::<CanonicalDate>().is_err());
    }

    #[test]
    fn test_structural_parse_keeps_out_of_range_values() {
        let fields = "2000-13-32".parse::<DateFields>().unwrap();
        assert_eq!(fields, DateFields::new(2000, 13, 32));
    }

    #[test]
    fn test_bad_tokens() {
        struct TestCase {
            input:       &'static str,
            description: &'static str,
        }

        let cases = [
            TestCase {
                input:       "2000-1-31",
                description: "month not zero-padded",
            },
            TestCase {
                input:       "200-12-31",
                description: "short year",
            },
            TestCase {
                input:       "2000/12/31",
                description: "wrong separator",
            },
            TestCase {
                input:       "2000-12",
                description: "missing day",
            },
            TestCase {
                input:       "2000-12-31-01",
                description: "too many groups",
            },
            TestCase {
                input:       "2000-+1-31",
                description: "sign in month",
            },
            TestCase {
                input:       "abcd-ef-gh",
                description: "non-numeric",
            },
        ];

        for case in &cases {
            let result = case.input.parse::<DateFields>();
            assert!(
                matches!(result, Err(DateError::InvalidFormat(_))),
                "Expected InvalidFormat for {} ({})",
                case.input,
                case.description
            );
        }
    }

    #[test]
    fn test_empty_input() {
        assert_eq!("".parse::<DateFields>(), Err(DateError::EmptyInput));
        assert_eq!("   ".parse::<CanonicalDate>(), Err(DateError::EmptyInput));
    }

    #[test]
    fn test_fields_round_trip() {
        let d = date(2024, 2, 29);
        let fields = d.fields();
        assert_eq!(fields, DateFields::new(2024, 2, 29));
        assert_eq!(CanonicalDate::try_from(fields).unwrap(), d);
    }

    #[test]
    fn test_try_from_fields_out_of_range() {
        assert!(matches!(
            CanonicalDate::try_from(DateFields::new(70_000, 1, 1)),
            Err(DateError::InvalidYear(70_000))
        ));
        assert!(matches!(
            CanonicalDate::try_from(DateFields::new(2000, 300, 1)),
            Err(DateError::InvalidMonth(300))
        ));
        assert!(matches!(
            CanonicalDate::try_from(DateFields::new(2000, 1, 300)),
            Err(DateError::InvalidDay { day: 300, .. })
        ));
    }

    #[test]
    fn test_ordering() {
        assert!(date(1999, 12, 31) < date(2000, 1, 1));
        assert!(date(2000, 1, 31) < date(2000, 2, 1));
        assert!(date(2000, 2, 1) < date(2000, 2, 2));
    }

    #[test]
    fn test_serde_string_format() {
        let d = date(2000, 12, 31);
        let json = serde_json::to_string(&d).unwrap();
        assert_eq!(json, r#""2000-12-31""#);

        let parsed: CanonicalDate = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, d);
    }

    #[test]
    fn test_serde_validation() {
        assert!(serde_json::from_str::<CanonicalDate>(r#""2000-13-01""#).is_err());
        assert!(serde_json::from_str::<CanonicalDate>(r#""2000-02-30""#).is_err());
        assert!(serde_json::from_str::<CanonicalDate>(r#""2000-02-29""#).is_ok());
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            DateError::InvalidDay {
                year:  2000,
                month: 2,
                day:   30,
            }
            .to_string(),
            "Invalid day 30 for month 2000-02"
        );
        assert_eq!(
            DateError::InvalidYear(10_000).to_string(),
            "Invalid year: 10000 (must be 0-9999)"
        );
    }
}
