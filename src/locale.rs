//! Locale to field order mapping.
//!
//! Every [`Locale`] resolves to a [`FieldOrder`]: the order in which the
//! day, month and year groups appear in the display string, plus the
//! separator placed between them. Lookups by tag never fail; unknown tags
//! degrade to [`Locale::Default`].

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{
    CANONICAL_SEPARATOR, DAY_WIDTH, DOT_SEPARATOR, DateFields, GROUP_COUNT, MONTH_WIDTH,
    SLASH_SEPARATOR, YEAR_WIDTH, prelude::*,
};

/// One semantic group of a date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Field {
    #[display(fmt = "day")]
    Day,
    #[display(fmt = "month")]
    Month,
    #[display(fmt = "year")]
    Year,
}

impl Field {
    /// Number of digits the field occupies when zero-padded
    pub const fn width(self) -> usize {
        match self {
            Self::Day => DAY_WIDTH,
            Self::Month => MONTH_WIDTH,
            Self::Year => YEAR_WIDTH,
        }
    }

    /// Placeholder shown in format hints, e.g. `DD`
    pub const fn placeholder(self) -> &'static str {
        match self {
            Self::Day => "DD",
            Self::Month => "MM",
            Self::Year => "YYYY",
        }
    }
}

/// Error type for locale lookups and custom field orders.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LocaleError {
    #[error("Unknown locale: {0}")]
    UnknownLocale(String),
    #[error("Field order repeats the {0} field")]
    DuplicateField(Field),
    #[error("Invalid separator {0:?}: digits cannot separate groups")]
    DigitSeparator(char),
}

/// Display order of the three date groups and the separator between them.
/// Always a permutation: each field appears exactly once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldOrder {
    fields:    [Field; GROUP_COUNT],
    separator: char,
}

impl FieldOrder {
    /// `31/12/2000`
    pub const DAY_MONTH_YEAR: Self = Self {
        fields:    [Field::Day, Field::Month, Field::Year],
        separator: SLASH_SEPARATOR,
    };
    /// `12/31/2000`
    pub const MONTH_DAY_YEAR: Self = Self {
        fields:    [Field::Month, Field::Day, Field::Year],
        separator: SLASH_SEPARATOR,
    };
    /// `2000-12-31`
    pub const YEAR_MONTH_DAY: Self = Self {
        fields:    [Field::Year, Field::Month, Field::Day],
        separator: CANONICAL_SEPARATOR,
    };
    /// `31.12.2000`
    pub const DAY_MONTH_YEAR_DOTTED: Self = Self {
        fields:    [Field::Day, Field::Month, Field::Year],
        separator: DOT_SEPARATOR,
    };
    /// `2000/12/31`
    pub const YEAR_MONTH_DAY_SLASHED: Self = Self {
        fields:    [Field::Year, Field::Month, Field::Day],
        separator: SLASH_SEPARATOR,
    };

    /// Creates a custom field order.
    ///
    /// # Errors
    /// Returns `LocaleError::DuplicateField` if a field appears twice (and so
    /// another is missing), or `LocaleError::DigitSeparator` if the separator
    /// is an ASCII digit.
    pub fn new(fields: [Field; GROUP_COUNT], separator: char) -> Result<Self, LocaleError> {
        if separator.is_ascii_digit() {
            return Err(LocaleError::DigitSeparator(separator));
        }
        for (i, field) in fields.iter().enumerate() {
            if fields[i + 1..].contains(field) {
                return Err(LocaleError::DuplicateField(*field));
            }
        }
        Ok(Self { fields, separator })
    }

    /// Returns the fixed order for `locale`
    pub const fn resolve(locale: Locale) -> Self {
        match locale {
            Locale::Default => Self::DAY_MONTH_YEAR,
            Locale::Us => Self::MONTH_DAY_YEAR,
            Locale::Iso => Self::YEAR_MONTH_DAY,
            Locale::German => Self::DAY_MONTH_YEAR_DOTTED,
            Locale::Japanese => Self::YEAR_MONTH_DAY_SLASHED,
        }
    }

    pub const fn fields(&self) -> [Field; GROUP_COUNT] {
        self.fields
    }

    pub const fn separator(&self) -> char {
        self.separator
    }

    /// Format hint such as `DD/MM/YYYY`
    pub fn pattern(&self) -> String {
        self.fields
            .iter()
            .map(|field| field.placeholder())
            .collect::<Vec<_>>()
            .join(&self.separator.to_string())
    }

    /// Reorders canonical fields into display order. No validation.
    pub const fn canonical_to_fields(&self, date: DateFields) -> [u32; GROUP_COUNT] {
        let mut out = [0; GROUP_COUNT];
        let mut i = 0;
        while i < GROUP_COUNT {
            out[i] = match self.fields[i] {
                Field::Day => date.day,
                Field::Month => date.month,
                Field::Year => date.year,
            };
            i += 1;
        }
        out
    }

    /// Reorders display-order values back into canonical fields. No validation.
    pub const fn fields_to_canonical(&self, values: [u32; GROUP_COUNT]) -> DateFields {
        let mut date = DateFields::new(0, 0, 0);
        let mut i = 0;
        while i < GROUP_COUNT {
            match self.fields[i] {
                Field::Day => date.day = values[i],
                Field::Month => date.month = values[i],
                Field::Year => date.year = values[i],
            }
            i += 1;
        }
        date
    }
}

/// Supported display locales.
///
/// Serializes as its tag; deserializing goes through [`Locale::from_tag`], so
/// unknown tags in configuration fall back to [`Locale::Default`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Locale {
    /// Day first: `31/12/2000`
    #[default]
    #[display(fmt = "DEFAULT")]
    Default,
    /// Month first: `12/31/2000`
    #[display(fmt = "US")]
    Us,
    /// Year first, ISO 8601 style: `2000-12-31`
    #[display(fmt = "ISO")]
    Iso,
    /// Day first with dots: `31.12.2000`
    #[display(fmt = "DE")]
    German,
    /// Year first with slashes: `2000/12/31`
    #[display(fmt = "JP")]
    Japanese,
}

impl Locale {
    /// Every supported locale
    pub const ALL: [Self; 5] = [Self::Default, Self::Us, Self::Iso, Self::German, Self::Japanese];

    /// Looks up a locale tag, falling back to `Default` for unknown tags.
    pub fn from_tag(tag: &str) -> Self {
        tag.parse().unwrap_or_else(|err: LocaleError| {
            log::debug!("{err}, falling back to {}", Self::Default);
            Self::Default
        })
    }

    /// Like [`Locale::from_tag`], treating an absent tag as `Default`.
    pub fn from_optional_tag(tag: Option<&str>) -> Self {
        tag.map_or(Self::Default, Self::from_tag)
    }

    /// Returns the field order for this locale
    pub const fn field_order(self) -> FieldOrder {
        FieldOrder::resolve(self)
    }
}

impl FromStr for Locale {
    type Err = LocaleError;

    /// Strict tag lookup: ASCII case-insensitive, `_` and `-` are equivalent.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim().to_ascii_uppercase().replace('_', "-");
        match tag.as_str() {
            "DEFAULT" | "GB" | "UK" | "EN-GB" => Ok(Self::Default),
            "US" | "EN-US" => Ok(Self::Us),
            "ISO" => Ok(Self::Iso),
            "DE" | "DE-DE" | "DE-AT" | "DE-CH" => Ok(Self::German),
            "JP" | "JA" | "JA-JP" => Ok(Self::Japanese),
            _ => Err(LocaleError::UnknownLocale(s.to_owned())),
        }
    }
}

impl From<String> for Locale {
    fn from(tag: String) -> Self {
        Self::from_tag(&tag)
    }
}

impl From<Locale> for String {
    fn from(locale: Locale) -> Self {
        locale.to_string()
    }
}

/// Returns the fixed field order for `locale`
pub const fn resolve(locale: Locale) -> FieldOrder {
    FieldOrder::resolve(locale)
}

/// Reorders canonical fields into the display order of `order`
pub const fn canonical_to_fields(date: DateFields, order: &FieldOrder) -> [u32; GROUP_COUNT] {
    order.canonical_to_fields(date)
}

/// Reorders display-order values into canonical fields
pub const fn fields_to_canonical(values: [u32; GROUP_COUNT], order: &FieldOrder) -> DateFields {
    order.fields_to_canonical(values)
}
