//! Shared construction-time checks used by the value objects

use std::sync::LazyLock;

use regex::Regex;

use crate::errors::DomainError;

/// First character alphanumeric, the rest alphanumeric or space.
///
/// Rejects the empty string and blank input such as `" "`.
pub const ALPHANUMERIC_WITH_SPACES: &str = r"^[A-Za-z0-9][A-Za-z0-9 ]*$";

pub(crate) static ALPHANUMERIC_WITH_SPACES_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::expect_used)] // Infallible with a valid static pattern
    Regex::new(ALPHANUMERIC_WITH_SPACES).expect("Failed to compile alphanumeric pattern")
});

/// Reject absent input before any format check runs
pub fn require_present<'a>(
    raw: Option<&'a str>,
    field: &'static str,
) -> Result<&'a str, DomainError> {
    raw.ok_or(DomainError::NullInput(field))
}

/// Fail with the given constraint message unless `condition` holds
pub fn check_argument(condition: bool, message: &str) -> Result<(), DomainError> {
    if condition {
        Ok(())
    } else {
        Err(DomainError::invalid_format(message))
    }
}
