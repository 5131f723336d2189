//! Structural-equality contract for immutable compound values.
//!
//! # Responsibility
//! - Give identifiers and other immutable values one equality vocabulary.
//!
//! # Invariants
//! - Equality is structural: same concrete type and every field equal.
//!   Nested value objects compare by value through their own `PartialEq`.
//! - Comparing against an absent operand yields `false`, never a panic.
//! - Values of a different concrete type are never equal, even when their
//!   field shapes coincide.

use std::any::Any;
use std::fmt::Debug;

/// Immutable value whose identity is its full content.
///
/// Implementors derive `PartialEq` over their fields; the provided methods
/// only add the absent-operand and cross-type rules on top of it.
pub trait ValueObject: Any + Clone + Debug + PartialEq {
    /// Compares with an optional operand. `None` is never equal.
    fn equals(&self, other: Option<&Self>) -> bool {
        other.is_some_and(|other| self == other)
    }

    /// Compares with a value of unknown concrete type.
    fn equals_dyn(&self, other: &dyn Any) -> bool {
        other
            .downcast_ref::<Self>()
            .is_some_and(|other| self == other)
    }
}
