//! Common validation utilities.

use rust_decimal::Decimal;
use validator::ValidationError;

/// Maximum length of a service request note.
pub const MAX_NOTE_LENGTH: usize = 1000;

/// Validates that a text field contains something other than whitespace.
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("blank");
        err.message = Some("Value must not be blank".into());
        Err(err)
    } else {
        Ok(())
    }
}

/// Validates a service request note: not blank and at most
/// [`MAX_NOTE_LENGTH`] characters.
pub fn validate_note(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() || value.chars().count() > MAX_NOTE_LENGTH {
        let mut err = ValidationError::new("note_length");
        err.message = Some(format!("Note must be 1-{} characters", MAX_NOTE_LENGTH).into());
        Err(err)
    } else {
        Ok(())
    }
}

/// Validates that a currency amount is zero or positive.
pub fn validate_non_negative_amount(amount: &Decimal) -> Result<(), ValidationError> {
    if amount.is_sign_negative() && !amount.is_zero() {
        let mut err = ValidationError::new("amount_range");
        err.message = Some("Amount must not be negative".into());
        Err(err)
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_not_blank() {
        assert!(validate_not_blank("Leaky faucet").is_ok());
        assert!(validate_not_blank(" x ").is_ok());
        assert!(validate_not_blank("").is_err());
        assert!(validate_not_blank("   \t\n").is_err());
    }

    #[test]
    fn test_validate_not_blank_message() {
        let err = validate_not_blank(" ").unwrap_err();
        assert_eq!(err.code, "blank");
        assert_eq!(err.message.unwrap(), "Value must not be blank");
    }

    #[test]
    fn test_validate_note_bounds() {
        assert!(validate_note("x").is_ok());
        assert!(validate_note(&"x".repeat(MAX_NOTE_LENGTH)).is_ok());
        // Counted in characters, not bytes
        assert!(validate_note(&"é".repeat(MAX_NOTE_LENGTH)).is_ok());
        assert!(validate_note(&"x".repeat(MAX_NOTE_LENGTH + 1)).is_err());
        assert!(validate_note("").is_err());
        assert!(validate_note("  \n ").is_err());
    }

    #[test]
    fn test_validate_note_message() {
        let err = validate_note("").unwrap_err();
        assert_eq!(err.code, "note_length");
        assert_eq!(err.message.unwrap(), "Note must be 1-1000 characters");
    }

    #[test]
    fn test_validate_non_negative_amount() {
        assert!(validate_non_negative_amount(&Decimal::ZERO).is_ok());
        assert!(validate_non_negative_amount(&Decimal::new(12550, 2)).is_ok());
        assert!(validate_non_negative_amount(&Decimal::new(-1, 2)).is_err());
    }
}
