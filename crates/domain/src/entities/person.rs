//! Person entity
//!
//! A contact in the address book, assembled from already-validated value
//! objects.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{
    errors::DomainError,
    value_objects::{BloodType, DateOfBirth, Name},
};

/// A person in the address book
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Person {
    /// Display name, also used to recognise duplicates
    name: Name,
    /// Blood type as entered
    blood_type: BloodType,
    /// Normalized date of birth
    date_of_birth: DateOfBirth,
}

impl Person {
    /// Create a person from valid fields
    #[must_use]
    pub const fn new(name: Name, blood_type: BloodType, date_of_birth: DateOfBirth) -> Self {
        Self {
            name,
            blood_type,
            date_of_birth,
        }
    }

    /// Build a person from raw user input
    ///
    /// Fields are checked in declaration order and the first failure is
    /// returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use addressbook_domain::Person;
    ///
    /// let person = Person::from_input(Some("Alex Yeoh"), Some("O Positive"), Some("02/03/1990"))
    ///     .unwrap();
    /// assert_eq!(person.date_of_birth().to_string(), "02-03-1990");
    ///
    /// assert!(Person::from_input(Some("Alex Yeoh"), None, Some("02/03/1990")).is_err());
    /// ```
    pub fn from_input(
        name: Option<&str>,
        blood_type: Option<&str>,
        date_of_birth: Option<&str>,
    ) -> Result<Self, DomainError> {
        Ok(Self::new(
            Name::from_input(name)?,
            BloodType::from_input(blood_type)?,
            DateOfBirth::from_input(date_of_birth)?,
        ))
    }

    /// Get the person's name
    #[must_use]
    pub const fn name(&self) -> &Name {
        &self.name
    }

    /// Get the person's blood type
    #[must_use]
    pub const fn blood_type(&self) -> &BloodType {
        &self.blood_type
    }

    /// Get the person's date of birth
    #[must_use]
    pub const fn date_of_birth(&self) -> DateOfBirth {
        self.date_of_birth
    }

    /// Whether `other` refers to the same contact
    ///
    /// Weaker than equality: only the names are compared.
    pub fn is_same_person(&self, other: &Self) -> bool {
        self.name == other.name
    }

    /// Copy of this person with a different blood type
    #[must_use]
    pub fn with_blood_type(&self, blood_type: BloodType) -> Self {
        Self {
            blood_type,
            ..self.clone()
        }
    }

    /// Copy of this person with a different date of birth
    #[must_use]
    pub fn with_date_of_birth(&self, date_of_birth: DateOfBirth) -> Self {
        Self {
            date_of_birth,
            ..self.clone()
        }
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}; Blood Type: {}; Date of Birth: {}",
            self.name, self.blood_type, self.date_of_birth
        )
    }
}
