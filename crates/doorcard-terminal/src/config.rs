//! Terminal session configuration.
//!
//! Holds the simulated hardware timings, the operator line buffer size and
//! the registry sizing. The binary fills it from command-line arguments;
//! tests usually start from [`TerminalConfig::default`].
//!
//! # Examples
//!
//! ```
//! use std::time::Duration;
//! use doorcard_terminal::TerminalConfig;
//!
//! let config = TerminalConfig::builder()
//!     .with_green_lamp(Duration::from_millis(500))
//!     .with_initial_capacity(32)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.green_lamp, Duration::from_millis(500));
//! assert_eq!(config.red_lamp, Duration::from_millis(2000));
//! ```

use std::time::Duration;

use doorcard_core::constants::{
    DEFAULT_GREEN_LAMP_MS, DEFAULT_INITIAL_CAPACITY, DEFAULT_MESSAGE_PAUSE_MS, DEFAULT_RED_LAMP_MS,
    INPUT_BUFFER_SIZE, MAX_SHORTCODE_LENGTH,
};
use doorcard_core::{Error, Result};
use doorcard_registry::{CardRegistry, CardRegistryBuilder, SystemClock};

/// Settings for one terminal session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TerminalConfig {
    /// How long the lamp stays GREEN after a grant or remote open.
    pub green_lamp: Duration,

    /// How long the lamp stays RED after a denial.
    pub red_lamp: Duration,

    /// Pause after an operator message before the menu returns.
    pub message_pause: Duration,

    /// Operator line buffer size in bytes, terminator included.
    pub input_buffer_size: usize,

    /// Cards reserved in the registry at startup.
    pub initial_capacity: usize,

    /// Upper bound on stored cards; `None` means limited only by memory.
    pub max_cards: Option<usize>,
}

impl TerminalConfig {
    /// Create a builder starting from the default settings.
    pub fn builder() -> TerminalConfigBuilder {
        TerminalConfigBuilder::default()
    }

    /// Check the settings for values the terminal cannot run with.
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` if:
    /// - `initial_capacity` is zero
    /// - `max_cards` is `Some(0)`
    /// - `input_buffer_size` cannot hold a full shortcode plus terminator
    pub fn validate(&self) -> Result<()> {
        if self.initial_capacity == 0 {
            return Err(Error::Config(
                "initial capacity must be at least 1".to_string(),
            ));
        }

        if self.max_cards == Some(0) {
            return Err(Error::Config("card limit must be at least 1".to_string()));
        }

        if self.input_buffer_size <= MAX_SHORTCODE_LENGTH {
            return Err(Error::Config(format!(
                "input buffer must be larger than {} bytes, got {}",
                MAX_SHORTCODE_LENGTH, self.input_buffer_size
            )));
        }

        Ok(())
    }

    /// Registry builder sized according to this configuration.
    pub fn registry_builder(&self) -> CardRegistryBuilder<SystemClock> {
        CardRegistry::builder()
            .with_initial_capacity(self.initial_capacity)
            .with_max_records(self.max_cards)
    }
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            green_lamp: Duration::from_millis(DEFAULT_GREEN_LAMP_MS),
            red_lamp: Duration::from_millis(DEFAULT_RED_LAMP_MS),
            message_pause: Duration::from_millis(DEFAULT_MESSAGE_PAUSE_MS),
            input_buffer_size: INPUT_BUFFER_SIZE,
            initial_capacity: DEFAULT_INITIAL_CAPACITY,
            max_cards: None,
        }
    }
}

/// Builder for constructing `TerminalConfig` instances.
#[derive(Debug, Default)]
pub struct TerminalConfigBuilder {
    config: TerminalConfig,
}

impl TerminalConfigBuilder {
    /// Set the GREEN lamp duration.
    pub fn with_green_lamp(mut self, duration: Duration) -> Self {
        self.config.green_lamp = duration;
        self
    }

    /// Set the RED lamp duration.
    pub fn with_red_lamp(mut self, duration: Duration) -> Self {
        self.config.red_lamp = duration;
        self
    }

    /// Set the pause after operator messages.
    pub fn with_message_pause(mut self, duration: Duration) -> Self {
        self.config.message_pause = duration;
        self
    }

    /// Set the operator line buffer size (bytes, terminator included).
    pub fn with_input_buffer_size(mut self, size: usize) -> Self {
        self.config.input_buffer_size = size;
        self
    }

    /// Set how many cards the registry reserves at startup.
    pub fn with_initial_capacity(mut self, capacity: usize) -> Self {
        self.config.initial_capacity = capacity;
        self
    }

    /// Cap the number of stored cards.
    pub fn with_max_cards(mut self, limit: Option<usize>) -> Self {
        self.config.max_cards = limit;
        self
    }

    /// Validate and return the configuration.
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` under the same conditions as
    /// [`TerminalConfig::validate`].
    pub fn build(self) -> Result<TerminalConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_default_config() {
        let config = TerminalConfig::default();
        assert_eq!(config.green_lamp, Duration::from_secs(3));
        assert_eq!(config.red_lamp, Duration::from_secs(2));
        assert_eq!(config.message_pause, Duration::from_millis(1500));
        assert_eq!(config.input_buffer_size, 20);
        assert_eq!(config.initial_capacity, 10);
        assert_eq!(config.max_cards, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_fluent_api() {
        let config = TerminalConfig::builder()
            .with_green_lamp(Duration::ZERO)
            .with_red_lamp(Duration::ZERO)
            .with_message_pause(Duration::ZERO)
            .with_input_buffer_size(64)
            .with_initial_capacity(1)
            .with_max_cards(Some(100))
            .build()
            .unwrap();

        assert!(config.green_lamp.is_zero());
        assert_eq!(config.input_buffer_size, 64);
        assert_eq!(config.max_cards, Some(100));
    }

    #[rstest]
    #[case(TerminalConfig::builder().with_initial_capacity(0))]
    #[case(TerminalConfig::builder().with_max_cards(Some(0)))]
    #[case(TerminalConfig::builder().with_input_buffer_size(9))]
    #[case(TerminalConfig::builder().with_input_buffer_size(0))]
    fn test_invalid_config_rejected(#[case] builder: TerminalConfigBuilder) {
        assert!(matches!(builder.build(), Err(Error::Config(_))));
    }

    #[test]
    fn test_smallest_input_buffer_accepted() {
        let config = TerminalConfig::builder()
            .with_input_buffer_size(MAX_SHORTCODE_LENGTH + 1)
            .build();
        assert!(config.is_ok());
    }

    #[test]
    fn test_registry_builder_uses_sizing() {
        let config = TerminalConfig::builder()
            .with_initial_capacity(4)
            .with_max_cards(Some(8))
            .build()
            .unwrap();

        let registry = config.registry_builder().build().unwrap();
        assert!(registry.capacity() >= 4);
        assert_eq!(registry.max_records(), Some(8));
    }
}
