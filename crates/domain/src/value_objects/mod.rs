//! Value Objects - Immutable, identity-less domain primitives

mod blood_type;
mod date_of_birth;
mod name;

pub use blood_type::BloodType;
pub use date_of_birth::DateOfBirth;
pub use name::Name;
