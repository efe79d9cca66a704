//! Domain layer for the address book
//!
//! Contains the person aggregate, its constrained value objects and the
//! multi-format date parser they share. Every value object is validated when
//! it is built; an instance that exists is always valid.

pub mod date_parser;
pub mod entities;
pub mod errors;
pub mod validation;
pub mod value_objects;

pub use date_parser::DateFormatter;
pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;
