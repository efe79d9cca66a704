//! Multi-format date parsing
//!
//! A [`DateFormatter`] is compiled from a small pattern language (`dd`, `MM`,
//! `yyyy`, anything else that is not a letter is a literal). The free functions
//! in this module check, parse and render dates against an ordered list of
//! formatters.
//!
//! # Examples
//!
//! ```
//! use addressbook_domain::date_parser::{self, DateFormatter};
//!
//! let formats = [DateFormatter::DAY_MONTH_YEAR_DASH, DateFormatter::DAY_MONTH_YEAR_SLASH];
//!
//! assert!(date_parser::is_valid_date("31/12/1999", &formats));
//! assert!(!date_parser::is_valid_date("30/02/2020", &formats));
//!
//! let date = date_parser::parse_date("31/12/1999", &formats).unwrap();
//! assert_eq!(
//!     date_parser::format_date(date, &DateFormatter::DAY_MONTH_YEAR_DASH),
//!     "31-12-1999"
//! );
//! ```

use std::{borrow::Cow, fmt};

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::DomainError;

/// A compiled date pattern that can parse and render calendar dates
///
/// Parsing is strict: the input must denote a real calendar date and must
/// render back to exactly the same text, so field widths are enforced.
/// `yyyy` is a year of the common era and starts at 1.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DateFormatter {
    pattern: Cow<'static, str>,
    strftime: Cow<'static, str>,
}

impl DateFormatter {
    /// `dd-MM-yyyy`
    pub const DAY_MONTH_YEAR_DASH: Self = Self::from_static("dd-MM-yyyy", "%d-%m-%Y");
    /// `dd/MM/yyyy`
    pub const DAY_MONTH_YEAR_SLASH: Self = Self::from_static("dd/MM/yyyy", "%d/%m/%Y");
    /// `dd.MM.yyyy`
    pub const DAY_MONTH_YEAR_DOT: Self = Self::from_static("dd.MM.yyyy", "%d.%m.%Y");
    /// `yyyy-MM-dd`
    pub const ISO_LOCAL_DATE: Self = Self::from_static("yyyy-MM-dd", "%Y-%m-%d");

    const fn from_static(pattern: &'static str, strftime: &'static str) -> Self {
        Self {
            pattern: Cow::Borrowed(pattern),
            strftime: Cow::Borrowed(strftime),
        }
    }

    /// Compile a formatter from a pattern such as `dd-MM-yyyy`
    ///
    /// The fields `dd` (day), `MM` (month) and `yyyy` (year) must each appear
    /// exactly once. Every character that is not an ASCII letter is matched
    /// literally.
    ///
    /// # Examples
    ///
    /// ```
    /// use addressbook_domain::date_parser::DateFormatter;
    ///
    /// let formatter = DateFormatter::of_pattern("dd-MM-yyyy").unwrap();
    /// assert_eq!(formatter, DateFormatter::DAY_MONTH_YEAR_DASH);
    ///
    /// assert!(DateFormatter::of_pattern("HH:mm").is_err());
    /// assert!(DateFormatter::of_pattern("dd-MM").is_err());
    /// ```
    pub fn of_pattern(pattern: impl Into<String>) -> Result<Self, DomainError> {
        let pattern = pattern.into();
        let strftime = compile_pattern(&pattern)?;
        Ok(Self {
            pattern: Cow::Owned(pattern),
            strftime: Cow::Owned(strftime),
        })
    }

    /// The pattern this formatter was built from
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Parse `raw` into a calendar date
    pub fn parse(&self, raw: &str) -> Result<NaiveDate, DomainError> {
        NaiveDate::parse_from_str(raw, &self.strftime)
            .ok()
            .filter(|date| date.year() >= 1 && self.format(*date) == raw)
            .ok_or_else(|| DomainError::ParseError(raw.to_string()))
    }

    /// Render `date` with this formatter's pattern
    pub fn format(&self, date: NaiveDate) -> String {
        date.format(&self.strftime).to_string()
    }
}

impl fmt::Display for DateFormatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.pattern)
    }
}

impl TryFrom<String> for DateFormatter {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::of_pattern(value)
    }
}

impl TryFrom<&str> for DateFormatter {
    type Error = DomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::of_pattern(value)
    }
}

impl From<DateFormatter> for String {
    fn from(formatter: DateFormatter) -> Self {
        formatter.pattern.into_owned()
    }
}

/// Translate a pattern into a chrono format string
fn compile_pattern(pattern: &str) -> Result<String, DomainError> {
    let invalid = || DomainError::InvalidPattern(pattern.to_string());
    let (mut day, mut month, mut year) = (false, false, false);

    let mut compiled = String::with_capacity(pattern.len() + 3);
    let mut chars = pattern.chars().peekable();
    while let Some(c) = chars.next() {
        if c.is_ascii_alphabetic() {
            let mut run = 1;
            while chars.next_if_eq(&c).is_some() {
                run += 1;
            }
            let (seen, directive) = match (c, run) {
                ('d', 2) => (&mut day, "%d"),
                ('M', 2) => (&mut month, "%m"),
                ('y', 4) => (&mut year, "%Y"),
                _ => return Err(invalid()),
            };
            if std::mem::replace(seen, true) {
                return Err(invalid());
            }
            compiled.push_str(directive);
        } else if c == '%' {
            compiled.push_str("%%");
        } else {
            compiled.push(c);
        }
    }

    if !(day && month && year) {
        return Err(invalid());
    }

    Ok(compiled)
}

/// Whether `raw` parses under at least one of `formatters`
pub fn is_valid_date(raw: &str, formatters: &[DateFormatter]) -> bool {
    formatters
        .iter()
        .any(|formatter| formatter.parse(raw).is_ok())
}

/// Parse `raw` with the first formatter in `formatters` that accepts it
///
/// Callers are expected to have checked [`is_valid_date`] first; an input no
/// formatter accepts still fails with [`DomainError::ParseError`].
pub fn parse_date(raw: &str, formatters: &[DateFormatter]) -> Result<NaiveDate, DomainError> {
    formatters
        .iter()
        .find_map(|formatter| formatter.parse(raw).ok())
        .ok_or_else(|| {
            debug!(
                formatters = formatters.len(),
                "no formatter accepted date input"
            );
            DomainError::ParseError(raw.to_string())
        })
}

/// Render `date` using `formatter`
pub fn format_date(date: NaiveDate, formatter: &DateFormatter) -> String {
    formatter.format(date)
}
