//! In-memory card registry.
//!
//! [`CardRegistry`] keeps every card the terminal knows about in insertion
//! order. Cards are added or updated with [`upsert`](CardRegistry::upsert)
//! and are never removed: revoking a card means turning its access flag off.
//!
//! # Invariants
//!
//! - No two records share a shortcode (comparison after truncation to 9
//!   characters).
//! - New cards append; updates change the record in place and never move it.
//! - A failed `upsert` leaves the registry exactly as it was.

use doorcard_core::{Shortcode, constants::DEFAULT_INITIAL_CAPACITY};
use tracing::{debug, warn};

use crate::clock::{Clock, SystemClock};
use crate::error::{RegistryError, RegistryResult};
use crate::models::CardRecord;
use crate::scan::{DenyReason, ScanOutcome};

/// Ordered collection of access cards keyed by shortcode.
///
/// The registry is a plain owned value: the terminal holds it and passes
/// `&mut` to each operation. It is not meant to be shared between threads.
///
/// # Examples
///
/// ```
/// use doorcard_registry::CardRegistry;
///
/// let mut registry = CardRegistry::new().unwrap();
/// registry.upsert("1212", true).unwrap();
///
/// assert!(registry.scan("1212").is_grant());
/// assert!(!registry.scan("9999").is_grant());
/// ```
#[derive(Debug)]
pub struct CardRegistry<C: Clock = SystemClock> {
    cards: Vec<CardRecord>,
    max_records: Option<usize>,
    clock: C,
}

impl CardRegistry<SystemClock> {
    /// Create an empty registry with the default initial capacity.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::AllocationFailed` if the initial storage
    /// cannot be reserved.
    pub fn new() -> RegistryResult<Self> {
        Self::builder().build()
    }

    /// Create a builder for a registry with custom sizing or clock.
    pub fn builder() -> CardRegistryBuilder<SystemClock> {
        CardRegistryBuilder::default()
    }
}

impl<C: Clock> CardRegistry<C> {
    /// Index of the card matching `shortcode`, if any.
    ///
    /// Only the first 9 characters of `shortcode` take part in the match,
    /// mirroring how codes are stored. Case-sensitive.
    pub fn position(&self, shortcode: &str) -> Option<usize> {
        self.cards
            .iter()
            .position(|card| card.shortcode.matches(shortcode))
    }

    /// Find the card matching `shortcode`.
    pub fn find(&self, shortcode: &str) -> Option<&CardRecord> {
        self.position(shortcode).map(|index| &self.cards[index])
    }

    /// Add a card or change the access flag of an existing one.
    ///
    /// The shortcode is truncated to 9 characters. An existing card keeps
    /// its position and gets a fresh `last_modified`; an unknown one is
    /// appended. Empty shortcodes are accepted here; rejecting them is the
    /// caller's job.
    ///
    /// # Errors
    ///
    /// Returns an error only when a new card cannot be stored:
    /// - `RegistryError::LimitReached` if the configured card limit is full
    /// - `RegistryError::GrowthFailed` if the backing storage cannot grow
    ///
    /// In both cases the registry is left unmodified.
    pub fn upsert(&mut self, shortcode: &str, has_access: bool) -> RegistryResult<&CardRecord> {
        let now = self.clock.now();

        if let Some(index) = self.position(shortcode) {
            let card = &mut self.cards[index];
            card.set_access(has_access, now);
            debug!(
                "Card '{}' updated at index {} (access: {})",
                card.shortcode, index, has_access
            );
            return Ok(&self.cards[index]);
        }

        let len = self.cards.len();
        if let Some(limit) = self.max_records
            && len >= limit
        {
            warn!("Card '{}' not added: limit of {} reached", shortcode, limit);
            return Err(RegistryError::LimitReached { limit });
        }

        // Vec grows geometrically, so sequential inserts stay amortized O(1)
        self.cards.try_reserve(1).map_err(|source| {
            warn!("Failed to expand card storage beyond {} cards", len);
            RegistryError::GrowthFailed { len, source }
        })?;

        let card = CardRecord::new(Shortcode::new(shortcode), has_access, now);
        debug!(
            "Card '{}' created at index {} (access: {})",
            card.shortcode, len, has_access
        );
        self.cards.push(card);

        Ok(&self.cards[len])
    }

    /// All cards in insertion order.
    pub fn enumerate(&self) -> &[CardRecord] {
        &self.cards
    }

    /// Iterate over cards in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, CardRecord> {
        self.cards.iter()
    }

    /// Card at `index` in insertion order.
    pub fn get(&self, index: usize) -> Option<&CardRecord> {
        self.cards.get(index)
    }

    /// Number of cards on file.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns `true` if no card has been added yet.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of cards that can be stored before the backing storage grows.
    pub fn capacity(&self) -> usize {
        self.cards.capacity()
    }

    /// Configured card limit, if any.
    pub fn max_records(&self) -> Option<usize> {
        self.max_records
    }

    /// Clock used to stamp records.
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Decide whether a scanned shortcode opens the door.
    ///
    /// Access is granted only for a known card whose flag is on. Input that
    /// is empty after trimming is denied without consulting the registry.
    pub fn scan(&self, shortcode: &str) -> ScanOutcome {
        if shortcode.trim().is_empty() {
            return ScanOutcome::Denied(DenyReason::EmptyInput);
        }

        match self.find(shortcode) {
            None => ScanOutcome::Denied(DenyReason::NotFound),
            Some(card) if !card.has_access => ScanOutcome::Denied(DenyReason::AccessRevoked),
            Some(_) => ScanOutcome::Granted,
        }
    }
}

impl<'a, C: Clock> IntoIterator for &'a CardRegistry<C> {
    type Item = &'a CardRecord;
    type IntoIter = std::slice::Iter<'a, CardRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}

/// Builder for constructing `CardRegistry` instances.
///
/// # Examples
///
/// ```
/// use doorcard_core::Timestamp;
/// use doorcard_registry::CardRegistry;
/// use doorcard_registry::clock::ManualClock;
///
/// let clock = ManualClock::new(Timestamp::parse("2025-10-27 14:30:00").unwrap());
/// let registry = CardRegistry::builder()
///     .with_initial_capacity(4)
///     .with_max_records(Some(100))
///     .with_clock(clock)
///     .build()
///     .unwrap();
///
/// assert!(registry.capacity() >= 4);
/// assert_eq!(registry.max_records(), Some(100));
/// ```
#[derive(Debug)]
pub struct CardRegistryBuilder<C: Clock> {
    initial_capacity: usize,
    max_records: Option<usize>,
    clock: C,
}

impl<C: Clock> CardRegistryBuilder<C> {
    /// Set how many cards to reserve storage for up front.
    pub fn with_initial_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = capacity;
        self
    }

    /// Cap the number of cards; `None` means limited only by memory.
    pub fn with_max_records(mut self, limit: Option<usize>) -> Self {
        self.max_records = limit;
        self
    }

    /// Use another clock for record timestamps.
    pub fn with_clock<D: Clock>(self, clock: D) -> CardRegistryBuilder<D> {
        CardRegistryBuilder {
            initial_capacity: self.initial_capacity,
            max_records: self.max_records,
            clock,
        }
    }

    /// Build the registry, reserving the initial storage.
    ///
    /// # Errors
    ///
    /// - `RegistryError::Configuration` if the card limit is zero
    /// - `RegistryError::AllocationFailed` if the initial storage cannot be
    ///   reserved
    pub fn build(self) -> RegistryResult<CardRegistry<C>> {
        if self.max_records == Some(0) {
            return Err(RegistryError::Configuration(
                "card limit must be at least 1".to_string(),
            ));
        }

        // No point reserving past the limit
        let requested = match self.max_records {
            Some(limit) => self.initial_capacity.min(limit),
            None => self.initial_capacity,
        };

        let mut cards = Vec::new();
        cards
            .try_reserve_exact(requested)
            .map_err(|source| RegistryError::AllocationFailed { requested, source })?;

        debug!("Card registry created with capacity {}", cards.capacity());

        Ok(CardRegistry {
            cards,
            max_records: self.max_records,
            clock: self.clock,
        })
    }
}

impl Default for CardRegistryBuilder<SystemClock> {
    fn default() -> Self {
        Self {
            initial_capacity: DEFAULT_INITIAL_CAPACITY,
            max_records: None,
            clock: SystemClock,
        }
    }
}
