//! Conversion between dates and locale-ordered display strings.
//!
//! [`format`] renders zero-padded groups in locale order. [`parse`] checks
//! the structure of edited text and returns the three group values in
//! display order. It leaves calendar checks to the validator so that
//! garbage input can be told apart from a well-formed but impossible date.

use crate::{
    CanonicalDate, DATE_DIGITS, DateFields, GROUP_COUNT, YEAR_WIDTH,
    locale::{Field, FieldOrder, Locale},
};

/// Structural parse failure of a display string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MaskError {
    #[error("Empty date input")]
    Empty,
    #[error("Expected {expected} groups separated by {separator:?}, found {found}")]
    GroupCount {
        expected:  usize,
        found:     usize,
        separator: char,
    },
    #[error("Empty {field} group")]
    EmptyGroup { field: Field },
    #[error("Non-numeric {field} group: {group:?}")]
    NonNumeric { field: Field, group: String },
    #[error("The year group {group:?} must have {width} digits", width = YEAR_WIDTH)]
    YearWidth { group: String },
    #[error("Expected {expected} digits without separators, found {found}")]
    WrongLength { expected: usize, found: usize },
    #[error("Unexpected character {0:?}")]
    InvalidCharacter(char),
}

/// Formats a date for display in `locale`
pub fn format(date: &CanonicalDate, locale: Locale) -> String {
    format_fields(date.fields(), locale)
}

/// Formats unvalidated fields for display in `locale`. Values wider than
/// their group are printed in full.
pub fn format_fields(fields: DateFields, locale: Locale) -> String {
    format_with_order(fields, &locale.field_order())
}

pub fn format_with_order(fields: DateFields, order: &FieldOrder) -> String {
    order
        .fields()
        .iter()
        .zip(order.canonical_to_fields(fields))
        .map(|(field, value)| format!("{value:0width$}", width = field.width()))
        .collect::<Vec<_>>()
        .join(&order.separator().to_string())
}

/// Parses a display string into its three group values, in display order.
///
/// # Errors
/// Returns a `MaskError` describing the first structural problem found.
pub fn parse(raw: &str, locale: Locale) -> Result<[u32; GROUP_COUNT], MaskError> {
    parse_with_order(raw, &locale.field_order())
}

/// Parses with an explicit field order.
///
/// Text containing the separator is split on it. Day and month groups take
/// any number of digits and are range-checked later by the validator; the
/// year group takes exactly 4. Text made only of digits must hold exactly 8
/// and is cut into fixed-width groups.
///
/// # Errors
/// Returns a `MaskError` describing the first structural problem found.
pub fn parse_with_order(raw: &str, order: &FieldOrder) -> Result<[u32; GROUP_COUNT], MaskError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(MaskError::Empty);
    }

    let separator = order.separator();
    let values = if trimmed.contains(separator) {
        parse_separated(trimmed, order)?
    } else if let Some(c) = trimmed.chars().find(|c| !c.is_ascii_digit()) {
        return Err(MaskError::InvalidCharacter(c));
    } else {
        parse_digits(trimmed, order)?
    };

    log::trace!("parsed {trimmed:?} as {values:?}");
    Ok(values)
}

fn parse_separated(s: &str, order: &FieldOrder) -> Result<[u32; GROUP_COUNT], MaskError> {
    let groups: Vec<&str> = s.split(order.separator()).map(str::trim).collect();
    if groups.len() != GROUP_COUNT {
        return Err(MaskError::GroupCount {
            expected:  GROUP_COUNT,
            found:     groups.len(),
            separator: order.separator(),
        });
    }

    let mut values = [0; GROUP_COUNT];
    for ((value, group), field) in values.iter_mut().zip(groups).zip(order.fields()) {
        *value = parse_group(group, field)?;
    }
    Ok(values)
}

fn parse_digits(s: &str, order: &FieldOrder) -> Result<[u32; GROUP_COUNT], MaskError> {
    if s.len() != DATE_DIGITS {
        return Err(MaskError::WrongLength {
            expected: DATE_DIGITS,
            found:    s.len(),
        });
    }

    let mut values = [0; GROUP_COUNT];
    let mut rest = s;
    for (value, field) in values.iter_mut().zip(order.fields()) {
        let (group, tail) = rest.split_at(field.width());
        *value = parse_group(group, field)?;
        rest = tail;
    }
    Ok(values)
}

fn parse_group(group: &str, field: Field) -> Result<u32, MaskError> {
    if group.is_empty() {
        return Err(MaskError::EmptyGroup { field });
    }
    if !group.bytes().all(|b| b.is_ascii_digit()) {
        return Err(MaskError::NonNumeric {
            field,
            group: group.to_owned(),
        });
    }
    if field == Field::Year && group.len() != YEAR_WIDTH {
        return Err(MaskError::YearWidth {
            group: group.to_owned(),
        });
    }
    // Only overflow can fail here; saturate so the calendar check rejects it.
    Ok(group.parse().unwrap_or(u32::MAX))
}

/// Applies the input mask to typed or pasted text.
///
/// Keeps digits and the locale separator and drops everything else. A
/// separator closes a non-empty group; a digit arriving at a full group
/// opens the next one. Digits past the last full group are dropped.
/// Applying the mask to its own output returns it unchanged.
pub fn apply_mask(raw: &str, locale: Locale) -> String {
    mask_chars(raw, &locale.field_order()).0
}

/// Applies the input mask only if it keeps every character of `raw` in the
/// group it was typed in, i.e. it just appends missing separators. Returns
/// `None` when masking would drop or regroup what was typed, such as a date
/// pasted in another field order.
pub fn try_mask(raw: &str, locale: Locale) -> Option<String> {
    let (masked, lossless) = mask_chars(raw, &locale.field_order());
    lossless.then_some(masked)
}

fn mask_chars(raw: &str, order: &FieldOrder) -> (String, bool) {
    let fields = order.fields();
    let separator = order.separator();

    let mut out = String::with_capacity(DATE_DIGITS + GROUP_COUNT - 1);
    let mut lossless = true;
    let mut inserted = false;
    let mut group = 0;
    let mut len = 0;
    for c in raw.chars() {
        if c.is_ascii_digit() {
            if len == fields[group].width() {
                if group + 1 == GROUP_COUNT {
                    lossless = false;
                    break;
                }
                out.push(separator);
                inserted = true;
                group += 1;
                len = 0;
            }
            out.push(c);
            len += 1;
        } else if c == separator && len > 0 && group + 1 < GROUP_COUNT {
            // A typed separator after an inserted one means the groups moved.
            lossless &= !inserted;
            out.push(separator);
            group += 1;
            len = 0;
        } else {
            lossless = false;
        }
    }

    log::trace!("masked {raw:?} to {out:?} (lossless: {lossless})");
    (out, lossless)
}

/// Returns true if `raw` is an incomplete date that further typing could
/// still complete, such as `31/1` or `3112`.
pub fn is_partial(raw: &str, locale: Locale) -> bool {
    let order = locale.field_order();
    let fields = order.fields();
    let separator = order.separator();

    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return true;
    }
    if !trimmed.chars().all(|c| c.is_ascii_digit() || c == separator) {
        return false;
    }

    let groups: Vec<&str> = trimmed.split(separator).collect();
    if groups.len() == 1 {
        return trimmed.len() < DATE_DIGITS;
    }
    if groups.len() > GROUP_COUNT {
        return false;
    }

    let last = groups.len() - 1;
    for (i, (group, field)) in groups.iter().zip(fields).enumerate() {
        if group.len() > field.width() {
            return false;
        }
        if i < last && (group.is_empty() || (field == Field::Year && group.len() != YEAR_WIDTH)) {
            return false;
        }
    }
    groups.len() < GROUP_COUNT || groups[last].len() < fields[last].width()
}
