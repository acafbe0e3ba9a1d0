use serde::{Deserialize, Serialize};

use crate::{
    CanonicalDate, DateFields,
    calendar::{is_valid_day, is_valid_month},
    locale::Locale,
    mask,
    prelude::*,
};

/// Why a display string was rejected. Displays as the user-facing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum InvalidReason {
    /// Wrong group count, empty or non-numeric group
    #[display(fmt = "Invalid date format")]
    MalformedInput,
    /// Day outside the range of an otherwise valid month
    #[display(fmt = "Wrong day")]
    WrongDay,
    /// Month outside `1..=12`
    #[display(fmt = "Wrong month")]
    WrongMonth,
}

impl InvalidReason {
    /// Message for the host to show. Format errors name the pattern expected
    /// in `locale`.
    pub fn message(self, locale: Locale) -> String {
        match self {
            Self::MalformedInput => {
                format!("{self}, expected {}", locale.field_order().pattern())
            }
            Self::WrongDay | Self::WrongMonth => self.to_string(),
        }
    }
}

/// Outcome of validating a display string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, From, Serialize, Deserialize)]
pub enum ValidationResult {
    Valid(CanonicalDate),
    Invalid(InvalidReason),
}

impl ValidationResult {
    pub const fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }

    /// Returns the date if valid
    pub const fn date(&self) -> Option<CanonicalDate> {
        match *self {
            Self::Valid(date) => Some(date),
            Self::Invalid(_) => None,
        }
    }

    /// Returns the rejection reason if invalid
    pub const fn reason(&self) -> Option<InvalidReason> {
        match *self {
            Self::Valid(_) => None,
            Self::Invalid(reason) => Some(reason),
        }
    }

    /// Error message for the host, `None` when valid
    pub fn message(&self, locale: Locale) -> Option<String> {
        self.reason().map(|reason| reason.message(locale))
    }
}

/// Validates edited text in `locale`.
///
/// Structural problems are reported as `MalformedInput`. Otherwise the month
/// is checked before the day, so a date wrong in both reports `WrongMonth`.
pub fn validate(raw: &str, locale: Locale) -> ValidationResult {
    let result = match mask::parse(raw, locale) {
        Ok(values) => validate_fields(locale.field_order().fields_to_canonical(values)),
        Err(err) => {
            log::trace!("malformed date input {raw:?}: {err}");
            ValidationResult::Invalid(InvalidReason::MalformedInput)
        }
    };

    log::debug!("validated {raw:?} in {locale}: {result:?}");
    result
}

/// Checks canonical-order fields against the calendar.
pub fn validate_fields(fields: DateFields) -> ValidationResult {
    if !is_valid_month(fields.month) {
        return InvalidReason::WrongMonth.into();
    }
    if !is_valid_day(fields.day, fields.month, fields.year.into()) {
        return InvalidReason::WrongDay.into();
    }

    match CanonicalDate::try_from(fields) {
        Ok(date) => date.into(),
        Err(err) => {
            log::trace!("fields {fields:?} rejected: {err}");
            InvalidReason::MalformedInput.into()
        }
    }
}
