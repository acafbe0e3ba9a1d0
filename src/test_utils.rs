//! Constructors shared by the unit tests.

use crate::{CanonicalDate, Year};

pub fn year(value: u16) -> Year {
    Year::new(value).expect("valid year")
}

pub fn date(year: u16, month: u8, day: u8) -> CanonicalDate {
    CanonicalDate::new(year, month, day).expect("valid date")
}
