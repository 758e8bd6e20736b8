//! Core constants for the door access card terminal.
//!
//! This module defines the fixed capacities, formats and timings used
//! throughout the doorcard workspace. Keeping them in one place keeps the
//! registry, the terminal shell and the binary in agreement about field
//! widths and simulated hardware timings.
//!
//! # Usage
//!
//! Constants are organized by category for easy discovery:
//!
//! ```
//! use doorcard_core::constants::*;
//!
//! // Shortcode storage limit
//! assert_eq!(MAX_SHORTCODE_LENGTH, 9);
//!
//! // Lamp timing
//! use std::time::Duration;
//! let green = Duration::from_millis(DEFAULT_GREEN_LAMP_MS);
//! assert_eq!(green.as_secs(), 3);
//! ```

// ============================================================================
// Card Shortcodes
// ============================================================================

/// Maximum stored shortcode length (characters).
///
/// Longer input is truncated silently when a card is stored or looked up.
///
/// # Value: 9 characters
///
/// # Examples
///
/// ```
/// use doorcard_core::Shortcode;
/// use doorcard_core::constants::MAX_SHORTCODE_LENGTH;
///
/// let code = Shortcode::new("ABCDEFGHIJK");
/// assert_eq!(code.as_str().chars().count(), MAX_SHORTCODE_LENGTH);
/// ```
pub const MAX_SHORTCODE_LENGTH: usize = 9;

// ============================================================================
// Operator Input
// ============================================================================

/// Size of the operator line buffer (bytes), terminator included.
///
/// A line keeps at most `INPUT_BUFFER_SIZE - 1` bytes of content. Anything
/// past that on the same physical line is drained and discarded.
///
/// # Value: 20 bytes
pub const INPUT_BUFFER_SIZE: usize = 20;

// ============================================================================
// Timestamps
// ============================================================================

/// Format of the "last modified" column (`YYYY-MM-DD HH:MM:SS`, local time).
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

// ============================================================================
// Registry Sizing
// ============================================================================

/// Number of records the registry reserves at startup.
///
/// Growth past this is geometric, so N inserts stay amortized O(N).
///
/// # Value: 10 records
pub const DEFAULT_INITIAL_CAPACITY: usize = 10;

// ============================================================================
// Simulated Hardware Timings
// ============================================================================

/// How long the lamp stays GREEN after a grant or remote open (milliseconds).
///
/// # Value: 3000 ms
pub const DEFAULT_GREEN_LAMP_MS: u64 = 3000;

/// How long the lamp stays RED after a denial (milliseconds).
///
/// # Value: 2000 ms
pub const DEFAULT_RED_LAMP_MS: u64 = 2000;

/// Pause after an operator message before the menu is shown again (milliseconds).
///
/// # Value: 1500 ms
pub const DEFAULT_MESSAGE_PAUSE_MS: u64 = 1500;

// ============================================================================
// Screen Layout
// ============================================================================

/// Width of the rule lines framing each screen.
pub const SCREEN_RULE_WIDTH: usize = 46;

/// Width of the asterisk border around the lamp panel.
pub const LAMP_PANEL_WIDTH: usize = 43;

/// Column reserved for the lamp color inside the panel.
pub const LAMP_COLOR_COLUMN_WIDTH: usize = 20;

/// Card table column widths: shortcode, access status, last modified.
pub const CARD_TABLE_COLUMNS: [usize; 3] = [10, 15, 20];

// ============================================================================
// Display Texts
// ============================================================================

/// Access column text for a card that may open the door.
pub const TEXT_HAS_ACCESS: &str = "HAS ACCESS";

/// Access column text for a card that may not open the door.
pub const TEXT_DENIED: &str = "DENIED";

#[cfg(test)]
#[allow(clippy::assertions_on_constants)]
mod tests {
    use super::*;

    #[test]
    fn test_input_buffer_holds_a_full_shortcode() {
        assert!(INPUT_BUFFER_SIZE - 1 > MAX_SHORTCODE_LENGTH);
    }

    #[test]
    fn test_rule_wider_than_lamp_panel() {
        assert!(SCREEN_RULE_WIDTH > LAMP_PANEL_WIDTH);
        assert!(LAMP_COLOR_COLUMN_WIDTH < LAMP_PANEL_WIDTH);
    }

    #[test]
    fn test_status_texts_fit_table_column() {
        assert!(TEXT_HAS_ACCESS.len() < CARD_TABLE_COLUMNS[1]);
        assert!(TEXT_DENIED.len() < CARD_TABLE_COLUMNS[1]);
    }
}
