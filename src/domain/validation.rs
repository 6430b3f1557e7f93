//! Stateless validation primitives shared by domain entities.
//!
//! Each check takes the value under test and a field label used only to
//! build the error message. The message text is part of the public
//! contract: callers and tests match on it verbatim.

use thiserror::Error;

/// Single-field precondition failure raised by the validation primitives.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required value was absent.
    #[error("{0} should not be null")]
    Null(&'static str),
    /// A required string was absent, empty or whitespace-only.
    #[error("{0} should not be empty or null")]
    EmptyOrNull(&'static str),
    /// A string was shorter than the required minimum length.
    #[error("{0} should be at least {1} characters long")]
    TooShort(&'static str, usize),
    /// A string exceeded the allowed maximum length.
    #[error("{0} should be less or equal {1} characters long")]
    TooLong(&'static str, usize),
}

/// Fails when `value` is absent.
pub fn not_null<T>(value: &Option<T>, field: &'static str) -> Result<(), ValidationError> {
    if value.is_none() {
        return Err(ValidationError::Null(field));
    }
    Ok(())
}

/// Fails when `value` is absent, empty or consists only of whitespace.
pub fn not_null_or_empty(value: Option<&str>, field: &'static str) -> Result<(), ValidationError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(()),
        _ => Err(ValidationError::EmptyOrNull(field)),
    }
}

/// Fails when `value` is shorter than `min_length` characters.
pub fn min_length(
    value: &str,
    min_length: usize,
    field: &'static str,
) -> Result<(), ValidationError> {
    if value.chars().count() < min_length {
        return Err(ValidationError::TooShort(field, min_length));
    }
    Ok(())
}

/// Fails when `value` is longer than `max_length` characters.
pub fn max_length(
    value: &str,
    max_length: usize,
    field: &'static str,
) -> Result<(), ValidationError> {
    if value.chars().count() > max_length {
        return Err(ValidationError::TooLong(field, max_length));
    }
    Ok(())
}
