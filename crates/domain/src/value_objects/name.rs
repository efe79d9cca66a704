//! Person name value object

use std::fmt;

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::{
    errors::DomainError,
    validation::{ALPHANUMERIC_WITH_SPACES_REGEX, require_present},
};

/// A person's name in the address book
///
/// Guarantees: non-empty, starts with an alphanumeric character and contains
/// only alphanumeric characters and spaces.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Validate)]
#[serde(transparent)]
pub struct Name {
    #[validate(regex(path = *ALPHANUMERIC_WITH_SPACES_REGEX))]
    value: String,
}

impl Name {
    /// Shown to the user when validation fails
    pub const MESSAGE_CONSTRAINTS: &'static str = "Names should only contain alphanumeric \
                                                   characters and spaces, and it should not be blank";

    /// Create a new name, validating the format
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        let candidate = Self { value: name.into() };
        candidate
            .validate()
            .map_err(|_| DomainError::invalid_format(Self::MESSAGE_CONSTRAINTS))?;

        Ok(candidate)
    }

    /// Create a name from input that may be absent
    pub fn from_input(raw: Option<&str>) -> Result<Self, DomainError> {
        Self::new(require_present(raw, "name")?)
    }

    /// Whether `test` would be accepted by [`Name::new`]
    pub fn is_valid_name(test: &str) -> bool {
        ALPHANUMERIC_WITH_SPACES_REGEX.is_match(test)
    }

    /// Get the name as a string slice
    pub fn as_str(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl TryFrom<String> for Name {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for Name {
    type Error = DomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl<'de> Deserialize<'de> for Name {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        Self::from_input(raw.as_deref()).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_name_is_accepted() {
        assert_eq!(Name::new("Alex Yeoh").unwrap().as_str(), "Alex Yeoh");
        assert_eq!(Name::new("Charlotte 2nd").unwrap().as_str(), "Charlotte 2nd");
    }

    #[test]
    fn invalid_name_is_rejected() {
        assert!(Name::new("").is_err());
        assert!(Name::new(" ").is_err());
        assert!(Name::new("^").is_err());
        assert!(Name::new("peter*").is_err());
    }

    #[test]
    fn invalid_name_reports_constraint_message() {
        let err = Name::new("").unwrap_err();
        assert_eq!(err.to_string(), Name::MESSAGE_CONSTRAINTS);
    }

    #[test]
    fn absent_name_is_null_input() {
        assert_eq!(Name::from_input(None), Err(DomainError::NullInput("name")));
    }

    #[test]
    fn display_format() {
        assert_eq!(Name::new("Bernice Yu").unwrap().to_string(), "Bernice Yu");
    }

    #[test]
    fn serialization() {
        let name = Name::new("David Li").unwrap();
        let json = serde_json::to_string(&name).unwrap();
        assert_eq!(json, "\"David Li\"");
        let parsed: Name = serde_json::from_str(&json).unwrap();
        assert_eq!(name, parsed);
    }
}
