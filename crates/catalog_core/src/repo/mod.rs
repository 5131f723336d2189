//! Repository contracts and the in-memory searchable store.
//!
//! # Responsibility
//! - Define CRUD and search contracts independent of storage.
//! - Provide the generic in-memory implementation and the category store.
//!
//! # Invariants
//! - Records are matched by identity equality only.
//! - Search always runs filter, then sort, then paginate.

pub mod category_repo;
pub mod in_memory;
pub mod repository;
pub mod search;
