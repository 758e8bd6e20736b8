use doorcard_core::{AccessStatus, Shortcode, Timestamp};
use serde::{Deserialize, Serialize};

/// Card record representing one access card known to the terminal
///
/// Records only ever leave the registry by shared reference, so the
/// registry alone decides when the access flag and timestamp change.
///
/// # Fields
///
/// * `shortcode` - Card identifier, at most 9 characters, unique in the registry
/// * `has_access` - Whether a scan of this card opens the door
/// * `last_modified` - Set on creation and on every access-flag update
///
/// # Examples
///
/// ```
/// use doorcard_core::{Shortcode, Timestamp};
/// use doorcard_registry::models::CardRecord;
///
/// let added = Timestamp::parse("2025-10-27 14:30:00").unwrap();
/// let card = CardRecord::new(Shortcode::new("1212"), true, added);
///
/// assert!(card.is_granted());
/// assert_eq!(card.access_status().label(), "HAS ACCESS");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardRecord {
    /// Card shortcode (registry key)
    pub shortcode: Shortcode,

    /// Access flag
    ///
    /// `true` grants entry on scan; `false` keeps the card on file but denies it.
    pub has_access: bool,

    /// Record creation or last access change, local time
    pub last_modified: Timestamp,
}

impl CardRecord {
    /// Create a new card record
    pub fn new(shortcode: Shortcode, has_access: bool, last_modified: Timestamp) -> Self {
        Self {
            shortcode,
            has_access,
            last_modified,
        }
    }

    /// Access flag as a display-ready status
    pub fn access_status(&self) -> AccessStatus {
        AccessStatus::from(self.has_access)
    }

    /// Returns `true` if a scan of this card opens the door
    pub fn is_granted(&self) -> bool {
        self.has_access
    }

    pub(crate) fn set_access(&mut self, has_access: bool, now: Timestamp) {
        self.has_access = has_access;
        self.last_modified = now;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_card() -> CardRecord {
        CardRecord::new(
            Shortcode::new("1212"),
            true,
            Timestamp::parse("2025-10-27 14:30:00").unwrap(),
        )
    }

    #[test]
    fn test_card_is_granted() {
        let card = create_test_card();
        assert!(card.is_granted());
        assert_eq!(card.access_status(), AccessStatus::HasAccess);
    }

    #[test]
    fn test_card_denied() {
        let mut card = create_test_card();
        card.has_access = false;
        assert!(!card.is_granted());
        assert_eq!(card.access_status(), AccessStatus::Denied);
    }

    #[test]
    fn test_set_access_refreshes_timestamp() {
        let mut card = create_test_card();
        let later = Timestamp::parse("2025-10-27 15:00:00").unwrap();

        card.set_access(false, later);

        assert!(!card.has_access);
        assert_eq!(card.last_modified, later);
        assert_eq!(card.shortcode.as_str(), "1212");
    }

    #[test]
    fn test_card_serialization() {
        let card = create_test_card();
        let json = serde_json::to_string(&card).unwrap();
        assert!(json.contains("\"shortcode\":\"1212\""));

        let deserialized: CardRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(card, deserialized);
    }
}
