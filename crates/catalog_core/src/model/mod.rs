//! Domain model: value objects, identities and entities.
//!
//! # Responsibility
//! - Define the equality vocabulary the store relies on.
//! - Host the example `Category` entity.
//!
//! # Invariants
//! - Value objects compare structurally, entities compare by identity.
//! - Every entity is identified by a validated [`identity::Uuid`].

pub mod category;
pub mod entity;
pub mod identity;
pub mod value_object;
