//! Identity-based entity contract.
//!
//! # Invariants
//! - Two entities are the same entity iff their identifiers are equal; no
//!   other field takes part in the comparison.
//! - The identifier is assigned at construction and never reassigned, so
//!   implementors expose it by shared reference only.

use crate::model::value_object::ValueObject;
use std::fmt::Display;

/// Domain object with a stable identity and mutable state.
pub trait Entity: Clone + Send + Sync + 'static {
    /// Identifier value object type.
    type Id: ValueObject + Display + Send + Sync;

    /// Human-readable kind used in error messages, e.g. `Category`.
    const KIND: &'static str;

    fn entity_id(&self) -> &Self::Id;

    /// Identity equality with another entity of the same type.
    fn same_identity(&self, other: &Self) -> bool {
        self.entity_id() == other.entity_id()
    }

    fn has_id(&self, id: &Self::Id) -> bool {
        self.entity_id() == id
    }
}
