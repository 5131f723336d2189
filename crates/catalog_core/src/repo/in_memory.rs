//! In-memory repository and searchable store.
//!
//! # Responsibility
//! - Keep one ordered collection of entities for the process lifetime.
//! - Run the fixed filter -> sort -> paginate pipeline for searches.
//!
//! # Invariants
//! - Every mutation runs under the write lock, one acquisition per call, so
//!   each CRUD call is atomic and concurrent mutations are serialized.
//! - Reads copy a snapshot under the read lock; a search never observes a
//!   collection mid-mutation.
//! - Sorting is stable and only happens for allow-listed fields. An unknown
//!   sort field leaves the filtered order untouched.
//! - `total` counts filter matches before pagination.

use crate::error::{NotFoundError, RepoResult};
use crate::model::entity::Entity;
use crate::repo::repository::{Repository, SearchableRepository};
use crate::repo::search::{SearchParams, SearchResult, SortDirection};
use async_trait::async_trait;
use log::{debug, warn};
use std::cmp::Ordering;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Vector-backed repository. Clones share the same collection.
pub struct InMemoryRepository<E: Entity> {
    items: Arc<RwLock<Vec<E>>>,
}

impl<E: Entity> InMemoryRepository<E> {
    pub fn new() -> Self {
        Self::with_items(Vec::new())
    }

    /// Starts from pre-existing records, kept in the given order.
    pub fn with_items(items: Vec<E>) -> Self {
        Self {
            items: Arc::new(RwLock::new(items)),
        }
    }

    pub async fn len(&self) -> usize {
        self.items.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.items.read().await.is_empty()
    }

    /// Copies the current collection under the read lock.
    pub async fn snapshot(&self) -> Vec<E> {
        self.items.read().await.clone()
    }

    fn not_found(id: &E::Id) -> NotFoundError {
        NotFoundError::new(id, E::KIND)
    }
}

impl<E: Entity> Clone for InMemoryRepository<E> {
    fn clone(&self) -> Self {
        Self {
            items: Arc::clone(&self.items),
        }
    }
}

impl<E: Entity> Default for InMemoryRepository<E> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<E: Entity> Repository<E> for InMemoryRepository<E> {
    async fn insert(&self, entity: E) -> RepoResult<()> {
        let mut items = self.items.write().await;
        debug!(
            "event=entity_insert module=store status=ok kind={} id={}",
            E::KIND,
            entity.entity_id()
        );
        items.push(entity);
        Ok(())
    }

    async fn bulk_insert(&self, entities: Vec<E>) -> RepoResult<()> {
        let mut items = self.items.write().await;
        debug!(
            "event=entity_bulk_insert module=store status=ok kind={} count={}",
            E::KIND,
            entities.len()
        );
        items.extend(entities);
        Ok(())
    }

    async fn update(&self, entity: E) -> RepoResult<()> {
        let mut items = self.items.write().await;
        let Some(index) = items.iter().position(|item| item.same_identity(&entity)) else {
            warn!(
                "event=entity_update module=store status=error reason=not_found kind={} id={}",
                E::KIND,
                entity.entity_id()
            );
            return Err(Self::not_found(entity.entity_id()).into());
        };

        debug!(
            "event=entity_update module=store status=ok kind={} id={}",
            E::KIND,
            entity.entity_id()
        );
        items[index] = entity;
        Ok(())
    }

    async fn delete(&self, entity_id: &E::Id) -> RepoResult<()> {
        let mut items = self.items.write().await;
        let Some(index) = items.iter().position(|item| item.has_id(entity_id)) else {
            warn!(
                "event=entity_delete module=store status=error reason=not_found kind={} id={}",
                E::KIND,
                entity_id
            );
            return Err(Self::not_found(entity_id).into());
        };

        items.remove(index);
        debug!(
            "event=entity_delete module=store status=ok kind={} id={}",
            E::KIND,
            entity_id
        );
        Ok(())
    }

    async fn find_by_id(&self, entity_id: &E::Id) -> RepoResult<Option<E>> {
        let items = self.items.read().await;
        Ok(items.iter().find(|item| item.has_id(entity_id)).cloned())
    }

    async fn find_all(&self) -> RepoResult<Vec<E>> {
        Ok(self.snapshot().await)
    }
}

type FilterFn<E, F> = Arc<dyn Fn(&E, &F) -> bool + Send + Sync>;
type CompareFn<E> = Arc<dyn Fn(&E, &E) -> Ordering + Send + Sync>;

/// Named sort key backed by a typed accessor.
pub struct SortableField<E> {
    name: &'static str,
    compare: CompareFn<E>,
}

impl<E> SortableField<E> {
    /// Registers `name` as sortable, ordering records by the key `key` returns.
    pub fn new<K, G>(name: &'static str, key: G) -> Self
    where
        K: Ord,
        G: Fn(&E) -> K + Send + Sync + 'static,
    {
        Self {
            name,
            compare: Arc::new(move |a, b| key(a).cmp(&key(b))),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    fn compare(&self, a: &E, b: &E) -> Ordering {
        (self.compare)(a, b)
    }
}

impl<E> Clone for SortableField<E> {
    fn clone(&self) -> Self {
        Self {
            name: self.name,
            compare: Arc::clone(&self.compare),
        }
    }
}

/// Entity-specific search behavior handed to the generic store.
pub struct SearchConfig<E, F = String> {
    filter: FilterFn<E, F>,
    sortable_fields: Vec<SortableField<E>>,
    default_sort: Option<(&'static str, SortDirection)>,
}

impl<E, F> SearchConfig<E, F> {
    /// Starts a config with the predicate a record must satisfy to match.
    pub fn new(filter: impl Fn(&E, &F) -> bool + Send + Sync + 'static) -> Self {
        Self {
            filter: Arc::new(filter),
            sortable_fields: Vec::new(),
            default_sort: None,
        }
    }

    /// Adds one field to the sort allow-list.
    pub fn sortable(mut self, field: SortableField<E>) -> Self {
        self.sortable_fields.push(field);
        self
    }

    /// Ordering applied when the caller does not ask for a sort field.
    pub fn default_sort(mut self, field: &'static str, direction: SortDirection) -> Self {
        self.default_sort = Some((field, direction));
        self
    }

    pub fn sortable_field_names(&self) -> Vec<&'static str> {
        self.sortable_fields.iter().map(SortableField::name).collect()
    }

    fn field(&self, name: &str) -> Option<&SortableField<E>> {
        self.sortable_fields.iter().find(|field| field.name == name)
    }
}

/// In-memory store with the search pipeline on top of CRUD.
pub struct InMemorySearchableRepository<E: Entity, F = String> {
    repository: InMemoryRepository<E>,
    config: Arc<SearchConfig<E, F>>,
}

impl<E: Entity, F> InMemorySearchableRepository<E, F> {
    pub fn new(config: SearchConfig<E, F>) -> Self {
        Self::with_repository(InMemoryRepository::new(), config)
    }

    /// Searches over an existing collection handle.
    pub fn with_repository(repository: InMemoryRepository<E>, config: SearchConfig<E, F>) -> Self {
        Self {
            repository,
            config: Arc::new(config),
        }
    }

    pub fn repository(&self) -> &InMemoryRepository<E> {
        &self.repository
    }

    pub(crate) fn apply_filter(&self, items: Vec<E>, filter: Option<&F>) -> Vec<E> {
        let Some(filter) = filter else {
            return items;
        };
        items
            .into_iter()
            .filter(|item| (self.config.filter)(item, filter))
            .collect()
    }

    pub(crate) fn apply_sort(
        &self,
        mut items: Vec<E>,
        sort: Option<&str>,
        sort_dir: Option<SortDirection>,
    ) -> Vec<E> {
        let (name, direction) = match (sort, self.config.default_sort) {
            (Some(name), _) => (name, sort_dir.unwrap_or_default()),
            (None, Some(default_sort)) => default_sort,
            (None, None) => return items,
        };

        let Some(field) = self.config.field(name) else {
            debug!(
                "event=search_sort module=store status=skipped kind={} field={}",
                E::KIND,
                name
            );
            return items;
        };

        // sort_by is stable; reversing the comparison keeps ties in place
        items.sort_by(|a, b| match direction {
            SortDirection::Asc => field.compare(a, b),
            SortDirection::Desc => field.compare(a, b).reverse(),
        });
        items
    }
}

impl<E: Entity, F> Clone for InMemorySearchableRepository<E, F> {
    fn clone(&self) -> Self {
        Self {
            repository: self.repository.clone(),
            config: Arc::clone(&self.config),
        }
    }
}

/// Returns the `[start, start + per_page)` window of a 1-indexed page.
pub(crate) fn apply_paginate<E>(items: Vec<E>, page: u32, per_page: u32) -> Vec<E> {
    let per_page = per_page as usize;
    let start = (page.saturating_sub(1) as usize).saturating_mul(per_page);
    items.into_iter().skip(start).take(per_page).collect()
}

#[async_trait]
impl<E, F> Repository<E> for InMemorySearchableRepository<E, F>
where
    E: Entity,
    F: Send + Sync + 'static,
{
    async fn insert(&self, entity: E) -> RepoResult<()> {
        self.repository.insert(entity).await
    }

    async fn bulk_insert(&self, entities: Vec<E>) -> RepoResult<()> {
        self.repository.bulk_insert(entities).await
    }

    async fn update(&self, entity: E) -> RepoResult<()> {
        self.repository.update(entity).await
    }

    async fn delete(&self, entity_id: &E::Id) -> RepoResult<()> {
        self.repository.delete(entity_id).await
    }

    async fn find_by_id(&self, entity_id: &E::Id) -> RepoResult<Option<E>> {
        self.repository.find_by_id(entity_id).await
    }

    async fn find_all(&self) -> RepoResult<Vec<E>> {
        self.repository.find_all().await
    }
}

#[async_trait]
impl<E, F> SearchableRepository<E, F> for InMemorySearchableRepository<E, F>
where
    E: Entity,
    F: Send + Sync + 'static,
{
    fn sortable_fields(&self) -> Vec<&'static str> {
        self.config.sortable_field_names()
    }

    async fn search(&self, params: &SearchParams<F>) -> RepoResult<SearchResult<E>> {
        let snapshot = self.repository.snapshot().await;
        let filtered = self.apply_filter(snapshot, params.filter_criteria());
        let total = filtered.len();
        let sorted = self.apply_sort(filtered, params.sort_field(), params.sort_direction());
        let items = apply_paginate(sorted, params.current_page(), params.page_size());

        debug!(
            "event=search module=store status=ok kind={} total={} page={} per_page={} returned={}",
            E::KIND,
            total,
            params.current_page(),
            params.page_size(),
            items.len()
        );

        Ok(SearchResult::new(
            items,
            total,
            params.current_page(),
            params.page_size(),
        ))
    }
}
