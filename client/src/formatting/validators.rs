//! Form field validators.

use thiserror::Error;

/// Message shown next to a field that failed validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct FieldError {
    message: &'static str,
}

impl FieldError {
    /// Message to display.
    #[must_use]
    pub const fn message(&self) -> &'static str {
        self.message
    }
}

const INVALID_EMAIL: FieldError = FieldError {
    message: "Invalid e-mail.",
};
const REQUIRED: FieldError = FieldError {
    message: "Required.",
};

/// Accept values that look like an e-mail address.
///
/// Only the presence of `@` is checked; the server validates the rest.
///
/// # Errors
///
/// Returns a [`FieldError`] reading `Invalid e-mail.` otherwise.
pub fn validate_email_field(value: &str) -> Result<(), FieldError> {
    if value.contains('@') {
        Ok(())
    } else {
        Err(INVALID_EMAIL)
    }
}

/// Accept any value that is not blank.
///
/// Whitespace-only input counts as blank, so `"   "` is rejected even
/// though it is a non-empty string.
///
/// # Errors
///
/// Returns a [`FieldError`] reading `Required.` for empty or
/// whitespace-only values.
pub fn validate_required_field(value: &str) -> Result<(), FieldError> {
    if value.trim().is_empty() {
        Err(REQUIRED)
    } else {
        Ok(())
    }
}
