//! Field validation for create payloads
//!
//! Checks run before anything touches storage so that a rejected request
//! never leaves a partial write behind.

use std::sync::OnceLock;

use regex::Regex;

use crate::error::DomainError;

fn url_pattern() -> Result<&'static Regex, DomainError> {
    static URL_PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    URL_PATTERN
        .get_or_init(|| Regex::new(r"^https?://\S+$").ok())
        .as_ref()
        .ok_or_else(|| DomainError::Internal("url pattern failed to compile".to_string()))
}

/// A required string: not blank, at most `max` characters
pub fn required_text(field: &str, value: &str, max: usize) -> Result<(), DomainError> {
    if value.trim().is_empty() {
        return Err(DomainError::Validation(format!(
            "{} must not be blank",
            field
        )));
    }
    max_length(field, value, max)
}

/// An optional string: when present, at most `max` characters
pub fn optional_text(field: &str, value: Option<&str>, max: usize) -> Result<(), DomainError> {
    match value {
        Some(v) => max_length(field, v, max),
        None => Ok(()),
    }
}

/// A required absolute http(s) reference
pub fn reference_url(field: &str, value: &str, max: usize) -> Result<(), DomainError> {
    required_text(field, value, max)?;
    if !url_pattern()?.is_match(value) {
        return Err(DomainError::Validation(format!(
            "{} must be an absolute http(s) URL",
            field
        )));
    }
    Ok(())
}

/// An optional measurement: finite and not negative
pub fn non_negative(field: &str, value: Option<f64>) -> Result<(), DomainError> {
    match value {
        Some(v) if !v.is_finite() || v < 0.0 => Err(DomainError::Validation(format!(
            "{} must be a non-negative number",
            field
        ))),
        _ => Ok(()),
    }
}

/// An optional percentage in `0..=100`
pub fn percentage(field: &str, value: Option<f64>) -> Result<(), DomainError> {
    non_negative(field, value)?;
    match value {
        Some(v) if v > 100.0 => Err(DomainError::Validation(format!(
            "{} must not exceed 100",
            field
        ))),
        _ => Ok(()),
    }
}

/// An optional count: not negative
pub fn count<T>(field: &str, value: Option<T>) -> Result<(), DomainError>
where
    T: PartialOrd + Default,
{
    match value {
        Some(v) if v < T::default() => Err(DomainError::Validation(format!(
            "{} must not be negative",
            field
        ))),
        _ => Ok(()),
    }
}

fn max_length(field: &str, value: &str, max: usize) -> Result<(), DomainError> {
    if value.chars().count() > max {
        return Err(DomainError::Validation(format!(
            "{} must be at most {} characters",
            field, max
        )));
    }
    Ok(())
}
