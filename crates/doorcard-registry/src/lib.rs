//! Card registry for the door access card terminal.
//!
//! This crate holds the in-memory registry of access cards and the scan
//! decision built on top of it. Nothing is persisted: the registry lives
//! as long as the terminal session that owns it.
//!
//! # Architecture
//!
//! - [`CardRegistry`] - Ordered, unique-by-shortcode collection of [`CardRecord`]s
//! - [`Clock`] - Source of "last modified" timestamps ([`SystemClock`], [`ManualClock`])
//! - [`ScanOutcome`] - Grant/deny decision for a scanned shortcode
//! - [`DisplayMessages`] - Operator texts for scan and access-change outcomes
//!
//! # Core Concepts
//!
//! ## Shortcodes
//!
//! Cards are keyed by a case-sensitive shortcode of at most 9 characters.
//! Longer input is truncated silently, both when storing and when looking
//! up, so `"ABCDEFGHIJK"` and `"ABCDEFGHI"` name the same card.
//!
//! ## No Deletion
//!
//! Cards are never removed. Revoking a card turns its access flag off; the
//! record stays listed with status `DENIED`.
//!
//! # Examples
//!
//! ```
//! use doorcard_registry::{CardRegistry, DenyReason, ScanOutcome};
//!
//! let mut registry = CardRegistry::new().unwrap();
//!
//! registry.upsert("1212", true).unwrap();
//! assert_eq!(registry.scan("1212"), ScanOutcome::Granted);
//!
//! registry.upsert("1212", false).unwrap();
//! assert_eq!(
//!     registry.scan("1212"),
//!     ScanOutcome::Denied(DenyReason::AccessRevoked)
//! );
//!
//! assert_eq!(registry.len(), 1);
//! ```
//!
//! # Failure Semantics
//!
//! Reserving the initial storage can fail with
//! [`RegistryError::AllocationFailed`]; callers treat that as fatal.
//! Adding a card can fail with [`RegistryError::GrowthFailed`] or
//! [`RegistryError::LimitReached`]; the registry is then left unchanged and
//! stays usable.

pub mod clock;
pub mod error;
pub mod messages;
pub mod models;
pub mod registry;
pub mod scan;

pub use clock::{Clock, ManualClock, SystemClock};
pub use error::{RegistryError, RegistryResult};
pub use messages::DisplayMessages;
pub use models::CardRecord;
pub use registry::{CardRegistry, CardRegistryBuilder};
pub use scan::{DenyReason, ScanOutcome};
