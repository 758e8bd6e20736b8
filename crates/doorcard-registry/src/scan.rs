//! Card scan decisions.
//!
//! A scan grants access only when the shortcode belongs to a known card
//! whose access flag is on. Every other case is a denial; the
//! [`DenyReason`] only changes the message shown to the operator, never
//! the lamp.

use serde::{Deserialize, Serialize};

use crate::messages::DisplayMessages;

/// Why a scan was denied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DenyReason {
    /// Nothing was scanned (blank input); the registry was not consulted.
    EmptyInput,

    /// No card with this shortcode is on file.
    NotFound,

    /// The card is on file but its access flag is off.
    AccessRevoked,
}

/// Result of scanning a card against the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScanOutcome {
    Granted,
    Denied(DenyReason),
}

impl ScanOutcome {
    /// Returns `true` if the door opens.
    pub fn is_grant(&self) -> bool {
        matches!(self, ScanOutcome::Granted)
    }

    /// Reason for a denial, `None` for a grant.
    pub fn deny_reason(&self) -> Option<DenyReason> {
        match self {
            ScanOutcome::Granted => None,
            ScanOutcome::Denied(reason) => Some(*reason),
        }
    }

    /// Operator-facing message for this outcome.
    pub fn display_message(&self) -> &'static str {
        match self {
            ScanOutcome::Granted => DisplayMessages::ACCESS_GRANTED,
            ScanOutcome::Denied(DenyReason::EmptyInput) => DisplayMessages::INVALID_CARD,
            ScanOutcome::Denied(_) => DisplayMessages::ACCESS_DENIED,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CardRegistry;
    use rstest::rstest;

    fn registry_with_cards() -> CardRegistry {
        let mut registry = CardRegistry::new().unwrap();
        registry.upsert("OPEN", true).unwrap();
        registry.upsert("CLOSED", false).unwrap();
        registry
    }

    #[rstest]
    #[case("OPEN", ScanOutcome::Granted)]
    #[case("CLOSED", ScanOutcome::Denied(DenyReason::AccessRevoked))]
    #[case("MISSING", ScanOutcome::Denied(DenyReason::NotFound))]
    #[case("open", ScanOutcome::Denied(DenyReason::NotFound))]
    #[case("", ScanOutcome::Denied(DenyReason::EmptyInput))]
    #[case("   ", ScanOutcome::Denied(DenyReason::EmptyInput))]
    fn test_scan_decision_table(#[case] input: &str, #[case] expected: ScanOutcome) {
        let registry = registry_with_cards();
        assert_eq!(registry.scan(input), expected);
    }

    #[test]
    fn test_empty_input_denied_even_if_empty_card_exists() {
        let mut registry = CardRegistry::new().unwrap();
        registry.upsert("", true).unwrap();

        assert_eq!(
            registry.scan(""),
            ScanOutcome::Denied(DenyReason::EmptyInput)
        );
    }

    #[test]
    fn test_scan_does_not_modify_registry() {
        let registry = registry_with_cards();
        let before = registry.enumerate().to_vec();

        registry.scan("OPEN");
        registry.scan("MISSING");

        assert_eq!(registry.enumerate(), before.as_slice());
    }

    #[test]
    fn test_outcome_helpers() {
        assert!(ScanOutcome::Granted.is_grant());
        assert_eq!(ScanOutcome::Granted.deny_reason(), None);

        let denied = ScanOutcome::Denied(DenyReason::NotFound);
        assert!(!denied.is_grant());
        assert_eq!(denied.deny_reason(), Some(DenyReason::NotFound));
    }

    #[test]
    fn test_denials_share_message_except_empty_input() {
        assert_eq!(
            ScanOutcome::Denied(DenyReason::NotFound).display_message(),
            ScanOutcome::Denied(DenyReason::AccessRevoked).display_message()
        );
        assert_eq!(
            ScanOutcome::Denied(DenyReason::EmptyInput).display_message(),
            DisplayMessages::INVALID_CARD
        );
        assert_eq!(
            ScanOutcome::Granted.display_message(),
            DisplayMessages::ACCESS_GRANTED
        );
    }
}
