//! Input validation helpers
//!
//! Centralized text length constants and validation functions. Limits are
//! UX-driven; the store itself does not enforce lengths.

use crate::error::FloorError;

/// Guest and table names
pub const MAX_NAME_LEN: usize = 200;

/// Free-text special requests
pub const MAX_REQUEST_LEN: usize = 500;

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> Result<(), FloorError> {
    if value.trim().is_empty() {
        return Err(FloorError::validation(format!("{field} must not be empty")));
    }
    if value.len() > max_len {
        return Err(FloorError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            value.len()
        )));
    }
    Ok(())
}

/// Validate that an optional string, if present, is within the length limit.
pub fn validate_optional_text(
    value: Option<&str>,
    field: &str,
    max_len: usize,
) -> Result<(), FloorError> {
    if let Some(v) = value
        && v.len() > max_len
    {
        return Err(FloorError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            v.len()
        )));
    }
    Ok(())
}
