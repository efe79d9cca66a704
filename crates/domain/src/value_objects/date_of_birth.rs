//! Date of birth value object
//!
//! Accepts `DD-MM-YYYY`, `DD/MM/YYYY` and `DD.MM.YYYY` input and always renders
//! as `DD-MM-YYYY`.
//!
//! # Examples
//!
//! ```
//! use addressbook_domain::DateOfBirth;
//!
//! let dashed = DateOfBirth::new("31-12-1999").unwrap();
//! let slashed = DateOfBirth::new("31/12/1999").unwrap();
//!
//! assert_eq!(dashed, slashed);
//! assert_eq!(slashed.to_string(), "31-12-1999");
//!
//! // Shaped like a date but not on the calendar
//! assert!(DateOfBirth::new("29-02-2021").is_err());
//! ```

use std::{fmt, sync::LazyLock};

use chrono::NaiveDate;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::{
    date_parser::{self, DateFormatter},
    errors::DomainError,
    validation::{check_argument, require_present},
};

static DATE_OF_BIRTH_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::expect_used)] // Infallible with a valid static pattern
    Regex::new(DateOfBirth::VALIDATION_REGEX).expect("Failed to compile date of birth pattern")
});

/// A person's date of birth
///
/// Equality, ordering and hashing follow the calendar date, not the text it
/// was entered as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateOfBirth(NaiveDate);

impl DateOfBirth {
    /// Shown to the user when validation fails
    pub const MESSAGE_CONSTRAINTS: &'static str =
        "Dates should be of the following formats: DD-MM-YYYY, DD/MM/YYYY or DD.MM.YYYY";

    /// Day 01-31, month 01-12, four-digit year, one separator used throughout
    pub const VALIDATION_REGEX: &'static str = r"^(?:0[1-9]|[12][0-9]|3[01])(?:-(?:0[1-9]|1[0-2])-|/(?:0[1-9]|1[0-2])/|\.(?:0[1-9]|1[0-2])\.)[0-9]{4}$";

    /// Accepted input formats, tried in order
    pub const FORMATTERS: [DateFormatter; 3] = [
        DateFormatter::DAY_MONTH_YEAR_DASH,
        DateFormatter::DAY_MONTH_YEAR_SLASH,
        DateFormatter::DAY_MONTH_YEAR_DOT,
    ];

    /// Canonical output format
    pub const DATE_FORMATTER: DateFormatter = DateFormatter::DAY_MONTH_YEAR_DASH;

    /// Create a date of birth from user input
    ///
    /// # Examples
    ///
    /// ```
    /// use addressbook_domain::DateOfBirth;
    ///
    /// let dob = DateOfBirth::new("01.01.2000").unwrap();
    /// assert_eq!(dob.to_string(), "01-01-2000");
    ///
    /// assert!(DateOfBirth::new("2020-02-30").is_err());
    /// ```
    pub fn new(raw: impl AsRef<str>) -> Result<Self, DomainError> {
        let raw = raw.as_ref();
        check_argument(
            DATE_OF_BIRTH_REGEX.is_match(raw),
            Self::MESSAGE_CONSTRAINTS,
        )?;
        check_argument(
            date_parser::is_valid_date(raw, &Self::FORMATTERS),
            Self::MESSAGE_CONSTRAINTS,
        )?;

        Ok(Self(date_parser::parse_date(raw, &Self::FORMATTERS)?))
    }

    /// Create a date of birth from input that may be absent
    pub fn from_input(raw: Option<&str>) -> Result<Self, DomainError> {
        Self::new(require_present(raw, "date of birth")?)
    }

    /// Whether `test` would be accepted by [`DateOfBirth::new`]
    pub fn is_valid_date_of_birth(test: &str) -> bool {
        DATE_OF_BIRTH_REGEX.is_match(test) && date_parser::is_valid_date(test, &Self::FORMATTERS)
    }

    /// Get the normalized calendar date
    pub const fn date(&self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for DateOfBirth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", date_parser::format_date(self.0, &Self::DATE_FORMATTER))
    }
}

impl TryFrom<String> for DateOfBirth {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for DateOfBirth {
    type Error = DomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<DateOfBirth> for NaiveDate {
    fn from(dob: DateOfBirth) -> Self {
        dob.0
    }
}

impl Serialize for DateOfBirth {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for DateOfBirth {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        Self::from_input(raw.as_deref()).map_err(serde::de::Error::custom)
    }
}
