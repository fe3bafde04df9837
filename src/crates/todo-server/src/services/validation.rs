//! Field rules shared by create and update

use crate::services::error::{ServiceError, ServiceResult};

pub const TITLE_MAX: usize = 200;
pub const DESCRIPTION_MAX: usize = 1000;
pub const ACTIVITY_MAX: usize = 100;

/// Trim a required text field and check its length in characters
///
/// `None` and blank values are both "required" failures.
pub fn required_text(value: Option<&str>, field: &str, max: usize) -> ServiceResult<String> {
    let trimmed = value.map(str::trim).unwrap_or_default();
    if trimmed.is_empty() {
        return Err(ServiceError::validation(format!("{} is required", field)));
    }
    check_length(trimmed, field, max)?;
    Ok(trimmed.to_string())
}

/// Trim an optional text field and check its length in characters
pub fn optional_text(value: Option<&str>, field: &str, max: usize) -> ServiceResult<Option<String>> {
    value
        .map(|raw| {
            let trimmed = raw.trim();
            check_length(trimmed, field, max)?;
            Ok(trimmed.to_string())
        })
        .transpose()
}

fn check_length(value: &str, field: &str, max: usize) -> ServiceResult<()> {
    if value.chars().count() > max {
        return Err(ServiceError::validation(format!(
            "{} must be at most {} characters",
            field, max
        )));
    }
    Ok(())
}
