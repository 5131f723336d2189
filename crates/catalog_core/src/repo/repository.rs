//! Repository contracts.
//!
//! # Responsibility
//! - Define the CRUD operation set every entity store satisfies.
//! - Define the search extension on top of it.
//!
//! # Invariants
//! - Records are located by identity equality ([`Entity::same_identity`]).
//! - `update`/`delete` on an unknown identity fail with `NotFound`;
//!   `find_by_id` reports absence as `Ok(None)`.
//! - Methods are async so storage-backed implementations can suspend
//!   without changing the interface shape.

use crate::error::RepoResult;
use crate::model::entity::Entity;
use crate::repo::search::{SearchParams, SearchResult};
use async_trait::async_trait;

/// CRUD interface over one entity type.
#[async_trait]
pub trait Repository<E: Entity>: Send + Sync {
    /// Kind name reported in not-found errors.
    fn entity_kind(&self) -> &'static str {
        E::KIND
    }

    /// Appends one entity. Duplicate identities are not checked.
    async fn insert(&self, entity: E) -> RepoResult<()>;

    /// Appends all entities in input order as one batch.
    async fn bulk_insert(&self, entities: Vec<E>) -> RepoResult<()>;

    /// Replaces the stored record that has the same identity.
    async fn update(&self, entity: E) -> RepoResult<()>;

    async fn delete(&self, entity_id: &E::Id) -> RepoResult<()>;

    async fn find_by_id(&self, entity_id: &E::Id) -> RepoResult<Option<E>>;

    /// Returns every record in current storage order.
    async fn find_all(&self) -> RepoResult<Vec<E>>;
}

/// Repository with the filter -> sort -> paginate query pipeline.
#[async_trait]
pub trait SearchableRepository<E: Entity, F: Send + Sync = String>: Repository<E> {
    /// Field names accepted as sort keys.
    fn sortable_fields(&self) -> Vec<&'static str>;

    async fn search(&self, params: &SearchParams<F>) -> RepoResult<SearchResult<E>>;
}
