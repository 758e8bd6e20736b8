use std::collections::TryReserveError;

use thiserror::Error;

/// Registry-specific error types for the door access card terminal.
///
/// These errors represent failures to acquire or grow the storage that
/// backs the card registry. A failed operation never leaves the registry
/// partially modified.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// Initial storage could not be reserved at startup
    #[error("Failed to allocate memory for {requested} cards: {source}")]
    AllocationFailed {
        requested: usize,
        #[source]
        source: TryReserveError,
    },

    /// Storage could not grow to hold another card
    #[error("Failed to expand card storage beyond {len} cards: {source}")]
    GrowthFailed {
        len: usize,
        #[source]
        source: TryReserveError,
    },

    /// Configured card limit already reached
    #[error("Card limit reached ({limit} cards)")]
    LimitReached { limit: usize },

    /// Registry configuration rejected
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl RegistryError {
    /// Returns `true` for errors raised while adding a card, after which the
    /// registry stays usable.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::GrowthFailed { .. } | Self::LimitReached { .. })
    }
}

/// Specialized result type for registry operations
pub type RegistryResult<T> = Result<T, RegistryError>;
