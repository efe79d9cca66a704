//! Domain entities

mod person;

pub use person::Person;
