//! Free-text field helpers shared by the write paths.

use std::borrow::Cow;

use validator::ValidationError;

/// Trim `value`, mapping absent and blank input to `None`.
pub fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// `validator` hook for required text that must not be only whitespace.
pub fn validate_not_blank_field(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::new("blank").with_message(Cow::Borrowed("Campo obrigatório")))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_blank_trims() {
        assert_eq!(non_blank(Some("  cesta  ")), Some("cesta".to_string()));
    }

    #[test]
    fn non_blank_drops_empty() {
        assert_eq!(non_blank(Some(" \t ")), None);
        assert_eq!(non_blank(None), None);
    }

    #[test]
    fn not_blank_field() {
        assert!(validate_not_blank_field("Ana").is_ok());
        assert_eq!(validate_not_blank_field("   ").unwrap_err().code, "blank");
    }
}
