use crate::{
    Result,
    constants::{MAX_SHORTCODE_LENGTH, TEXT_DENIED, TEXT_HAS_ACCESS, TIMESTAMP_FORMAT},
    error::Error,
};
use chrono::{Duration, Local, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};
use std::fmt;
use subtle::ConstantTimeEq;

/// Card shortcode (at most 9 characters, case-sensitive)
///
/// Construction never fails: text longer than [`MAX_SHORTCODE_LENGTH`]
/// characters is truncated silently. No other normalization is applied.
///
/// # Security
/// This type implements constant-time comparison so that matching a scanned
/// code against stored cards does not leak where the codes differ.
#[derive(Debug, Clone, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Shortcode(String);

impl Shortcode {
    /// Create a shortcode, keeping the first 9 characters of `code`.
    #[must_use]
    pub fn new(code: &str) -> Self {
        Shortcode(code.chars().take(MAX_SHORTCODE_LENGTH).collect())
    }

    /// Get the shortcode as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` if the shortcode holds no characters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns `true` if `input`, after truncation, equals this shortcode.
    ///
    /// Avoids allocating a second `Shortcode` on every comparison during a
    /// registry scan.
    #[must_use]
    pub fn matches(&self, input: &str) -> bool {
        let end = input
            .char_indices()
            .nth(MAX_SHORTCODE_LENGTH)
            .map_or(input.len(), |(idx, _)| idx);
        self.0.as_bytes().ct_eq(input[..end].as_bytes()).into()
    }
}

impl fmt::Display for Shortcode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        // Forward to str so width/alignment flags apply to table columns
        fmt::Display::fmt(&self.0, f)
    }
}

impl From<&str> for Shortcode {
    fn from(code: &str) -> Self {
        Shortcode::new(code)
    }
}

impl From<String> for Shortcode {
    fn from(code: String) -> Self {
        Shortcode::new(&code)
    }
}

impl From<Shortcode> for String {
    fn from(code: Shortcode) -> Self {
        code.0
    }
}

/// Constant-time comparison implementation for Shortcode
impl PartialEq for Shortcode {
    fn eq(&self, other: &Self) -> bool {
        self.0.as_bytes().ct_eq(other.0.as_bytes()).into()
    }
}

impl std::hash::Hash for Shortcode {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

/// Local wall-clock timestamp with second precision (YYYY-MM-DD HH:MM:SS)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Timestamp(NaiveDateTime);

impl Timestamp {
    /// Create a timestamp from the current local time.
    #[must_use]
    pub fn now() -> Self {
        Timestamp::from_naive(Local::now().naive_local())
    }

    /// Create a timestamp from a naive local date-time, dropping sub-second precision.
    #[must_use]
    pub fn from_naive(dt: NaiveDateTime) -> Self {
        Timestamp(dt.with_nanosecond(0).unwrap_or(dt))
    }

    /// Parse from "2025-10-27 14:30:00".
    ///
    /// # Errors
    /// Returns `Error::InvalidTimestamp` if the string does not match
    /// `YYYY-MM-DD HH:MM:SS`.
    pub fn parse(s: &str) -> Result<Self> {
        let dt = NaiveDateTime::parse_from_str(s, TIMESTAMP_FORMAT).map_err(|e| {
            Error::InvalidTimestamp {
                input: s.to_string(),
                reason: e.to_string(),
            }
        })?;
        Ok(Timestamp(dt))
    }

    /// Format as `YYYY-MM-DD HH:MM:SS`.
    #[must_use]
    pub fn format(&self) -> String {
        self.0.format(TIMESTAMP_FORMAT).to_string()
    }

    /// Return this timestamp moved forward by `delta`.
    #[must_use]
    pub fn advanced_by(&self, delta: Duration) -> Self {
        Timestamp::from_naive(self.0 + delta)
    }

    /// Get the inner date-time.
    #[must_use]
    pub fn inner(&self) -> &NaiveDateTime {
        &self.0
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(&self.format())
    }
}

impl std::str::FromStr for Timestamp {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Timestamp::parse(s)
    }
}

/// Access flag of a card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessStatus {
    HasAccess,
    Denied,
}

impl AccessStatus {
    /// Returns `true` if the card may open the door.
    #[inline]
    #[must_use]
    pub fn is_granted(self) -> bool {
        matches!(self, AccessStatus::HasAccess)
    }

    /// Table text for this status.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            AccessStatus::HasAccess => TEXT_HAS_ACCESS,
            AccessStatus::Denied => TEXT_DENIED,
        }
    }
}

impl From<bool> for AccessStatus {
    fn from(has_access: bool) -> Self {
        if has_access {
            AccessStatus::HasAccess
        } else {
            AccessStatus::Denied
        }
    }
}

impl From<AccessStatus> for bool {
    fn from(status: AccessStatus) -> Self {
        status.is_granted()
    }
}

impl fmt::Display for AccessStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(self.label())
    }
}
