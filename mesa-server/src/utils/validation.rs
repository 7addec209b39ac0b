//! Input validation helpers
//!
//! Derive-based checks (`validator::Validate`) run first in handlers; these
//! helpers cover what the derives cannot express, such as blank strings.

use crate::utils::AppError;

/// Validate that a required string is not just whitespace.
pub fn validate_not_blank(value: &str, field: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::validation(format!("{field} must not be empty")));
    }
    Ok(())
}

/// Validate that an optional string, if present, is not just whitespace.
pub fn validate_optional_not_blank(value: &Option<String>, field: &str) -> Result<(), AppError> {
    if let Some(v) = value {
        validate_not_blank(v, field)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_strings_are_rejected() {
        assert!(validate_not_blank("   ", "name").is_err());
        assert!(validate_not_blank("Ana", "name").is_ok());
        assert!(validate_optional_not_blank(&None, "phone").is_ok());
        assert!(validate_optional_not_blank(&Some("\t".into()), "phone").is_err());
    }
}
