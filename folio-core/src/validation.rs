use regex::Regex;
use std::sync::LazyLock;

use crate::error::ContactError;

/// Something, `@`, something, `.`, something; no whitespace and no second `@`.
/// Deliberately loose: the reply-to address is the only place it ends up.
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Invalid email regex pattern")
});

/// Validates a submitter email address
///
/// # Examples
///
/// ```rust
/// use folio_core::validation::validate_email;
///
/// assert!(validate_email("jane@example.com").is_ok());
/// assert!(validate_email("jane@example").is_err());
/// ```
pub fn validate_email(email: &str) -> Result<(), ContactError> {
    if EMAIL_REGEX.is_match(email) {
        Ok(())
    } else {
        Err(ContactError::InvalidEmail)
    }
}

/// A required text field is present when it exists and is not the empty string.
pub fn is_present(value: Option<&str>) -> bool {
    value.is_some_and(|value| !value.is_empty())
}
