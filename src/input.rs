//! Host-facing model of a masked date field.
//!
//! The host owns rendering and events. It builds a [`MaskedInput`] from the
//! canonical date it was given, forwards each edit, and renders the returned
//! [`MaskState`] next to [`PROMPT`].

use serde::{Deserialize, Serialize};

use crate::{
    CanonicalDate, DateFields, PROMPT,
    locale::Locale,
    mask,
    validator::{InvalidReason, ValidationResult, validate},
};

/// Runtime options of a field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MaskOptions {
    /// Display locale, fixed for the lifetime of the field
    pub locale:            Locale,
    /// Report format errors on incomplete input while the user is still typing
    pub report_incomplete: bool,
}

impl MaskOptions {
    pub const fn for_locale(locale: Locale) -> Self {
        Self {
            locale,
            report_incomplete: false,
        }
    }

    /// Options for an optional locale tag; absent or unknown tags use `Default`
    pub fn for_tag(tag: Option<&str>) -> Self {
        Self::for_locale(Locale::from_optional_tag(tag))
    }
}

/// What the host renders after each change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MaskState {
    pub display: String,
    pub result:  ValidationResult,
    pub message: Option<String>,
}

/// A date field: the current display text, its validation result and the
/// last date that validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaskedInput {
    options:   MaskOptions,
    display:   String,
    result:    ValidationResult,
    accepted:  Option<CanonicalDate>,
    committed: bool,
}

impl MaskedInput {
    /// Builds a field from a canonical `YYYY-MM-DD` string.
    ///
    /// Out-of-range values are still rendered in locale order and reported,
    /// so `2000-12-32` shows as `12/32/2000` in the US with a wrong day.
    /// Text that is not structurally `YYYY-MM-DD` is shown as given and
    /// reported as malformed.
    pub fn new(date: &str, options: MaskOptions) -> Self {
        let (display, result) = render_canonical(date, options.locale);
        log::debug!("new field for {date:?} in {}: {display:?}", options.locale);
        Self {
            options,
            display,
            result,
            accepted: result.date(),
            committed: true,
        }
    }

    /// Builds a field from a canonical date string and an optional locale tag
    pub fn with_locale_tag(date: &str, locale: Option<&str>) -> Self {
        Self::new(date, MaskOptions::for_tag(locale))
    }

    /// Prompt label, present regardless of validity
    pub const fn prompt(&self) -> &'static str {
        PROMPT
    }

    pub fn display(&self) -> &str {
        &self.display
    }

    pub const fn result(&self) -> ValidationResult {
        self.result
    }

    /// The last date that validated, if any
    pub const fn date(&self) -> Option<CanonicalDate> {
        self.accepted
    }

    pub const fn locale(&self) -> Locale {
        self.options.locale
    }

    pub const fn options(&self) -> MaskOptions {
        self.options
    }

    /// Error message to show, if any.
    ///
    /// Format errors on input that is still being typed are held back until
    /// [`MaskedInput::commit`] unless `report_incomplete` is set.
    pub fn error_message(&self) -> Option<String> {
        let reason = self.result.reason()?;
        let held_back = reason == InvalidReason::MalformedInput
            && !self.committed
            && !self.options.report_incomplete
            && mask::is_partial(&self.display, self.options.locale);
        if held_back {
            return None;
        }
        Some(reason.message(self.options.locale))
    }

    pub fn state(&self) -> MaskState {
        MaskState {
            display: self.display.clone(),
            result:  self.result,
            message: self.error_message(),
        }
    }

    /// Applies typed or pasted text, validates it and remembers the date if
    /// it is valid.
    ///
    /// Separators are filled in only while that keeps every typed character.
    /// Any other text, such as a date pasted in another field order, is kept
    /// as typed and classified as is.
    pub fn edit(&mut self, raw: &str) -> MaskState {
        let locale = self.options.locale;
        let trimmed = raw.trim();
        self.display = mask::try_mask(trimmed, locale).unwrap_or_else(|| trimmed.to_owned());
        self.result = validate(&self.display, locale);
        self.committed = false;
        if let Some(date) = self.result.date() {
            self.accepted = Some(date);
        }
        log::debug!("edit {raw:?} -> {:?} ({:?})", self.display, self.result);
        self.state()
    }

    /// Ends editing, e.g. when the field loses focus. Held back errors are
    /// reported from now on and a valid date is re-rendered zero-padded.
    pub fn commit(&mut self) -> MaskState {
        self.committed = true;
        if let Some(date) = self.result.date() {
            self.display = mask::format(&date, self.options.locale);
        }
        log::debug!("commit {:?} ({:?})", self.display, self.result);
        self.state()
    }

    /// Replaces the field contents with a new canonical date from the host
    pub fn set_date(&mut self, date: &str) -> MaskState {
        let (display, result) = render_canonical(date, self.options.locale);
        self.display = display;
        self.result = result;
        self.committed = true;
        if let Some(date) = result.date() {
            self.accepted = Some(date);
        }
        log::debug!("set date {date:?} -> {:?} ({:?})", self.display, self.result);
        self.state()
    }
}

fn render_canonical(date: &str, locale: Locale) -> (String, ValidationResult) {
    match date.parse::<DateFields>() {
        Ok(fields) => {
            let display = mask::format_fields(fields, locale);
            let result = validate(&display, locale);
            (display, result)
        }
        Err(err) => {
            log::debug!("cannot render {date:?}: {err}");
            (
                date.trim().to_owned(),
                ValidationResult::Invalid(InvalidReason::MalformedInput),
            )
        }
    }
}
