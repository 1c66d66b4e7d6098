//! Input validation helpers
//!
//! Length limits and checks that sit outside the derive-based payload
//! validation. SQLite TEXT has no built-in length enforcement, so free-text
//! fields are capped here.

use crate::utils::AppError;

/// Free-text location strings
pub const MAX_LOCATION_LEN: usize = 500;

/// Bio text
pub const MAX_BIO_LEN: usize = 500;

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::validation(format!("{field} must not be empty")));
    }
    if value.len() > max_len {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            value.len()
        )));
    }
    Ok(())
}

/// Validate that an optional string, if present, is within the length limit.
pub fn validate_optional_text(
    value: &Option<String>,
    field: &str,
    max_len: usize,
) -> Result<(), AppError> {
    if let Some(v) = value {
        if v.len() > max_len {
            return Err(AppError::validation(format!(
                "{field} is too long ({} chars, max {max_len})",
                v.len()
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_required_text_is_rejected() {
        assert!(validate_required_text("  ", "location", MAX_LOCATION_LEN).is_err());
        assert!(validate_required_text("Multan", "location", MAX_LOCATION_LEN).is_ok());
    }

    #[test]
    fn long_optional_text_is_rejected() {
        let long = Some("x".repeat(MAX_BIO_LEN + 1));
        assert!(validate_optional_text(&long, "bio", MAX_BIO_LEN).is_err());
        assert!(validate_optional_text(&None, "bio", MAX_BIO_LEN).is_ok());
    }
}
