//! Blood type value object
//!
//! # Examples
//!
//! ```
//! use addressbook_domain::BloodType;
//!
//! let blood_type = BloodType::new("AB Negative").unwrap();
//! assert_eq!(blood_type.to_string(), "AB Negative");
//!
//! // Symbols and blank input are rejected
//! assert!(BloodType::new("O+").is_err());
//! assert!(BloodType::new(" ").is_err());
//!
//! // Absent input is reported separately from bad input
//! assert!(BloodType::from_input(None).unwrap_err().is_null_input());
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::{
    errors::DomainError,
    validation::{ALPHANUMERIC_WITH_SPACES_REGEX, require_present},
};

/// A person's blood type, stored exactly as entered
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Validate)]
#[serde(transparent)]
pub struct BloodType {
    #[validate(regex(path = *ALPHANUMERIC_WITH_SPACES_REGEX))]
    value: String,
}

impl BloodType {
    /// Shown to the user when validation fails
    pub const MESSAGE_CONSTRAINTS: &'static str = "Blood types should only contain alphanumeric \
                                                   characters and spaces, and it should not be blank";

    /// Create a new blood type, validating the format
    ///
    /// # Examples
    ///
    /// ```
    /// use addressbook_domain::BloodType;
    ///
    /// assert_eq!(BloodType::new("O Positive").unwrap().as_str(), "O Positive");
    /// assert!(BloodType::new("").is_err());
    /// ```
    pub fn new(blood_type: impl Into<String>) -> Result<Self, DomainError> {
        let candidate = Self {
            value: blood_type.into(),
        };
        candidate
            .validate()
            .map_err(|_| DomainError::invalid_format(Self::MESSAGE_CONSTRAINTS))?;

        Ok(candidate)
    }

    /// Create a blood type from input that may be absent
    pub fn from_input(raw: Option<&str>) -> Result<Self, DomainError> {
        Self::new(require_present(raw, "blood type")?)
    }

    /// Whether `test` would be accepted by [`BloodType::new`]
    pub fn is_valid_blood_type(test: &str) -> bool {
        ALPHANUMERIC_WITH_SPACES_REGEX.is_match(test)
    }

    /// Get the blood type as a string slice
    pub fn as_str(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for BloodType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl TryFrom<String> for BloodType {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for BloodType {
    type Error = DomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Re-validates on the way in; `null` is reported as absent input
impl<'de> Deserialize<'de> for BloodType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        Self::from_input(raw.as_deref()).map_err(serde::de::Error::custom)
    }
}
