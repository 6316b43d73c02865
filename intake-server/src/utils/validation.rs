//! Input validation helpers
//!
//! SQLite TEXT has no built-in length enforcement, so limits are applied
//! in handlers before anything reaches the store.

use crate::utils::AppError;

/// Order codes: short human-assigned identifiers (e.g. OS-1234)
pub const MAX_CODE_LEN: usize = 64;

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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_reasonable_text() {
        assert!(validate_required_text("OS-1234", "code", MAX_CODE_LEN).is_ok());
    }

    #[test]
    fn rejects_empty_and_blank() {
        assert!(validate_required_text("", "code", MAX_CODE_LEN).is_err());
        assert!(validate_required_text("   ", "code", MAX_CODE_LEN).is_err());
    }

    #[test]
    fn rejects_overlong_text() {
        let long = "X".repeat(MAX_CODE_LEN + 1);
        assert!(validate_required_text(&long, "code", MAX_CODE_LEN).is_err());
    }
}
