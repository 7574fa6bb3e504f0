//! Helpers shared by the entity contracts

/// Checks that a required text field is not blank.
pub fn require_text(value: &str, message: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        return Err(message.to_string());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_text() {
        assert!(require_text("حي النصر", "err").is_ok());
        assert_eq!(require_text("   ", "مطلوب"), Err("مطلوب".to_string()));
        assert_eq!(require_text("", "مطلوب"), Err("مطلوب".to_string()));
    }
}
