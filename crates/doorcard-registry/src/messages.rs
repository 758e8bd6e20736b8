//! Display messages for access control results
//!
//! This module provides constants for the operator-facing messages tied to
//! registry outcomes. Screen layout and prompts belong to the terminal; the
//! texts here describe what happened to a card.
//!
//! # Usage
//!
//! ```
//! use doorcard_registry::messages::DisplayMessages;
//!
//! let message = DisplayMessages::ACCESS_GRANTED;
//! assert_eq!(message, "Access granted!");
//! ```

/// Display messages for card scans and access changes
///
/// # Message Format
///
/// - Single line, ASCII only
/// - `ERROR:` prefix for rejected operator input
pub struct DisplayMessages;

impl DisplayMessages {
    /// Scan of a known card with access on
    pub const ACCESS_GRANTED: &'static str = "Access granted!";

    /// Scan of an unknown card or a card with access off
    pub const ACCESS_DENIED: &'static str = "Access DENIED!";

    /// Scan with nothing entered
    pub const INVALID_CARD: &'static str = "ERROR: Invalid card.";

    /// Add/remove access with nothing entered
    pub const EMPTY_SHORTCODE: &'static str = "ERROR: Shortcode cannot be empty.";

    /// Add/remove access cancelled by the operator
    pub const OPERATION_CANCELLED: &'static str = "Operation cancelled.";
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Ensures all message constants have content (no empty strings)
    #[test]
    #[allow(clippy::const_is_empty)]
    fn test_messages_are_non_empty() {
        assert!(!DisplayMessages::ACCESS_GRANTED.is_empty());
        assert!(!DisplayMessages::ACCESS_DENIED.is_empty());
        assert!(!DisplayMessages::INVALID_CARD.is_empty());
        assert!(!DisplayMessages::EMPTY_SHORTCODE.is_empty());
        assert!(!DisplayMessages::OPERATION_CANCELLED.is_empty());
    }

    #[test]
    fn test_error_messages_are_prefixed() {
        assert!(DisplayMessages::INVALID_CARD.starts_with("ERROR:"));
        assert!(DisplayMessages::EMPTY_SHORTCODE.starts_with("ERROR:"));
    }

    #[test]
    fn test_messages_are_ascii() {
        for message in [
            DisplayMessages::ACCESS_GRANTED,
            DisplayMessages::ACCESS_DENIED,
            DisplayMessages::INVALID_CARD,
            DisplayMessages::EMPTY_SHORTCODE,
            DisplayMessages::OPERATION_CANCELLED,
        ] {
            assert!(message.is_ascii());
        }
    }
}
