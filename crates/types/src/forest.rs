//! Forest identifiers and the records stored under them.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Number of bytes in a stored forest name.
pub const FOREST_NAME_BYTES: usize = 32;

/// Errors that can occur when constructing a forest name.
#[derive(Debug, Error)]
pub enum ForestNameError {
    #[error("forest name exceeds 32 bytes, got {0}")]
    TooLong(usize),
}

/// Fixed-size forest identifier acting as the unique registry key.
///
/// Labels shorter than 32 bytes are right-padded with zero bytes; lookup and
/// duplicate detection compare all 32 stored bytes. Input longer than 32
/// bytes is rejected at construction, so the registry always stores exactly
/// [`FOREST_NAME_BYTES`] bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ForestName([u8; FOREST_NAME_BYTES]);

impl ForestName {
    /// Build a name from a label of at most 32 bytes.
    pub fn new(label: impl AsRef<[u8]>) -> Result<Self, ForestNameError> {
        let raw = label.as_ref();
        if raw.len() > FOREST_NAME_BYTES {
            return Err(ForestNameError::TooLong(raw.len()));
        }

        let mut bytes = [0u8; FOREST_NAME_BYTES];
        bytes[..raw.len()].copy_from_slice(raw);
        Ok(ForestName(bytes))
    }

    /// Wrap an already-padded 32-byte key.
    pub const fn from_bytes(bytes: [u8; FOREST_NAME_BYTES]) -> Self {
        ForestName(bytes)
    }

    /// The padded storage key.
    pub fn as_bytes(&self) -> &[u8; FOREST_NAME_BYTES] {
        &self.0
    }

    /// The label with the zero-byte padding stripped.
    pub fn label(&self) -> String {
        let end = self
            .0
            .iter()
            .rposition(|&b| b != 0)
            .map_or(0, |pos| pos + 1);
        String::from_utf8_lossy(&self.0[..end]).into_owned()
    }
}

impl fmt::Display for ForestName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

impl From<ForestName> for String {
    fn from(value: ForestName) -> Self {
        value.label()
    }
}

impl TryFrom<String> for ForestName {
    type Error = ForestNameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        ForestName::new(value.as_bytes())
    }
}

/// A tracked forest record.
///
/// `name` and `created_at` are fixed at registration; `verifications_count`
/// only ever increases.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Forest {
    /// Unique registry key.
    pub name: ForestName,
    /// Number of verifications appended so far.
    pub verifications_count: u64,
    /// Processing timestamp (seconds since epoch) at registration.
    pub created_at: u64,
}

/// One measurement event appended to a forest's log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verification {
    /// Measured value.
    pub value: u64,
    /// Caller-supplied timestamp of when the measurement was physically
    /// taken. Not validated against processing order.
    pub acquired_at: u64,
    /// Processing timestamp at the moment the entry was recorded.
    pub created_at: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pads_short_labels_with_zero_bytes() {
        let name = ForestName::new("kongo").unwrap();
        let mut expected = [0u8; FOREST_NAME_BYTES];
        expected[..5].copy_from_slice(b"kongo");
        assert_eq!(name.as_bytes(), &expected);
        assert_eq!(name.label(), "kongo");
    }

    #[test]
    fn padded_and_unpadded_forms_are_the_same_key() {
        let mut padded = [0u8; FOREST_NAME_BYTES];
        padded[..5].copy_from_slice(b"kongo");
        assert_eq!(ForestName::new("kongo").unwrap(), ForestName::from_bytes(padded));
    }

    #[test]
    fn rejects_labels_over_32_bytes() {
        let long = "x".repeat(FOREST_NAME_BYTES + 1);
        assert!(matches!(
            ForestName::new(&long),
            Err(ForestNameError::TooLong(33))
        ));
    }

    #[test]
    fn accepts_exactly_32_bytes() {
        let label = "y".repeat(FOREST_NAME_BYTES);
        let name = ForestName::new(&label).unwrap();
        assert_eq!(name.label(), label);
    }

    #[test]
    fn serializes_as_stripped_label() {
        let name = ForestName::new("kongo").unwrap();
        let json = serde_json::to_string(&name).unwrap();
        assert_eq!(json, "\"kongo\"");

        let back: ForestName = serde_json::from_str(&json).unwrap();
        assert_eq!(back, name);
    }
}
