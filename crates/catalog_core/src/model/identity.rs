//! Validated UUID identifier value object.
//!
//! # Invariants
//! - The wrapped text is in canonical 8-4-4-4-12 form for the whole value
//!   lifetime. It is checked once, in [`Uuid::parse`], and never rechecked.
//! - Generated identifiers are random version-4 UUIDs.
//! - Deserialization goes through the same check as [`Uuid::parse`].

use crate::error::InvalidIdentifierError;
use crate::model::value_object::ValueObject;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

// Accepts RFC 9562 versions 1-8 with the RFC variant, plus the nil and max
// sentinels.
static CANONICAL_UUID_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)^(?:[0-9a-f]{8}-[0-9a-f]{4}-[1-8][0-9a-f]{3}-[89ab][0-9a-f]{3}-[0-9a-f]{12}|00000000-0000-0000-0000-000000000000|ffffffff-ffff-ffff-ffff-ffffffffffff)$",
    )
    .expect("valid uuid regex")
});

/// Globally unique entity identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Uuid {
    id: String,
}

impl Uuid {
    /// Generates a fresh random identifier.
    pub fn new() -> Self {
        Self {
            id: uuid::Uuid::new_v4().hyphenated().to_string(),
        }
    }

    /// Wraps caller-provided text after checking its format.
    ///
    /// # Errors
    /// - Returns [`InvalidIdentifierError`] when `value` is not a canonical
    ///   UUID string. No `Uuid` is produced in that case.
    pub fn parse(value: impl Into<String>) -> Result<Self, InvalidIdentifierError> {
        let id = value.into();
        if !is_canonical_uuid(&id) {
            return Err(InvalidIdentifierError::new(id));
        }
        Ok(Self { id })
    }

    pub fn as_str(&self) -> &str {
        &self.id
    }
}

impl Default for Uuid {
    fn default() -> Self {
        Self::new()
    }
}

impl ValueObject for Uuid {}

impl Display for Uuid {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.id)
    }
}

impl FromStr for Uuid {
    type Err = InvalidIdentifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Uuid {
    type Error = InvalidIdentifierError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<Uuid> for String {
    fn from(value: Uuid) -> Self {
        value.id
    }
}

/// Returns whether `value` is a canonical textual UUID.
pub fn is_canonical_uuid(value: &str) -> bool {
    CANONICAL_UUID_RE.is_match(value)
}

#[cfg(test)]
mod tests {
    use super::is_canonical_uuid;

    #[test]
    fn accepts_sentinels_and_mixed_case() {
        assert!(is_canonical_uuid("00000000-0000-0000-0000-000000000000"));
        assert!(is_canonical_uuid("ffffffff-ffff-ffff-ffff-ffffffffffff"));
        assert!(is_canonical_uuid("EF62C677-6499-4477-9848-D8C580A4D262"));
    }

    #[test]
    fn rejects_non_canonical_forms() {
        // simple, braced and urn forms are all parseable by the uuid crate
        assert!(!is_canonical_uuid("ef62c67764994477a848d8c580a4d262"));
        assert!(!is_canonical_uuid("{ef62c677-6499-4477-9848-d8c580a4d262}"));
        assert!(!is_canonical_uuid(
            "urn:uuid:ef62c677-6499-4477-9848-d8c580a4d262"
        ));
        assert!(!is_canonical_uuid("ef62c677-6499-9477-9848-d8c580a4d262"));
        assert!(!is_canonical_uuid("ef62c677-6499-4477-c848-d8c580a4d262"));
        assert!(!is_canonical_uuid(" ef62c677-6499-4477-9848-d8c580a4d262"));
    }
}
