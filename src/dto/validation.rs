//! Validation helpers for DTOs.

use validator::ValidationError;

/// Longest player name accepted after trimming surrounding whitespace.
pub const MAX_NAME_LEN: usize = 32;

/// Validates that a submitted player name fits the store's column width.
///
/// Whitespace-only input is deliberately accepted: it means "clear this
/// slot" on the entry screen, not an invalid name.
pub fn validate_player_name(text: &str) -> Result<(), ValidationError> {
    if text.trim().chars().count() > MAX_NAME_LEN {
        let mut err = ValidationError::new("player_name_length");
        err.message =
            Some(format!("Player name must be at most {MAX_NAME_LEN} characters").into());
        return Err(err);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_player_name_valid() {
        assert!(validate_player_name("ALICE").is_ok());
        assert!(validate_player_name("a").is_ok());
        assert!(validate_player_name(&"x".repeat(MAX_NAME_LEN)).is_ok());
    }

    #[test]
    fn test_validate_player_name_blank_is_ok() {
        assert!(validate_player_name("").is_ok());
        assert!(validate_player_name("   ").is_ok());
    }

    #[test]
    fn test_validate_player_name_too_long() {
        assert!(validate_player_name(&"x".repeat(MAX_NAME_LEN + 1)).is_err());
        // Surrounding whitespace does not count against the limit.
        let padded = format!("  {}  ", "x".repeat(MAX_NAME_LEN));
        assert!(validate_player_name(&padded).is_ok());
    }
}
