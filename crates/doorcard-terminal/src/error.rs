//! Error types for the terminal shell.
//!
//! Most operator mistakes (blank shortcodes, non-numeric input, unknown menu
//! choices) are handled inside the shell and never surface as errors. What
//! remains here are failures of the terminal itself.

use doorcard_registry::RegistryError;

/// Result type alias for terminal operations.
pub type TerminalResult<T> = std::result::Result<T, TerminalError>;

/// Errors that can end or abort a terminal session.
#[derive(Debug, thiserror::Error)]
pub enum TerminalError {
    /// Reading operator input or writing the transcript failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Operator input reached end of file.
    #[error("Operator input closed")]
    InputClosed,

    /// Registry operation failed.
    #[error("Registry error: {0}")]
    Registry(#[from] RegistryError),

    /// Terminal configuration rejected.
    #[error(transparent)]
    Config(#[from] doorcard_core::Error),
}

impl TerminalError {
    /// Create a new configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(doorcard_core::Error::Config(message.into()))
    }

    /// Returns `true` if the session ended because input ran out.
    pub fn is_input_closed(&self) -> bool {
        matches!(self, Self::InputClosed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let error = TerminalError::config("green lamp duration too long");
        assert_eq!(
            error.to_string(),
            "Configuration error: green lamp duration too long"
        );
        assert!(!error.is_input_closed());
    }

    #[test]
    fn test_input_closed() {
        let error = TerminalError::InputClosed;
        assert!(error.is_input_closed());
        assert_eq!(error.to_string(), "Operator input closed");
    }

    #[test]
    fn test_registry_error_conversion() {
        let error: TerminalError = RegistryError::LimitReached { limit: 5 }.into();
        assert!(matches!(error, TerminalError::Registry(_)));
        assert_eq!(
            error.to_string(),
            "Registry error: Card limit reached (5 cards)"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "stdout closed");
        let error: TerminalError = io.into();
        assert!(matches!(error, TerminalError::Io(_)));
    }
}
