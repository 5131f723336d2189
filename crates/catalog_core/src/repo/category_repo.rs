//! In-memory category store.
//!
//! # Responsibility
//! - Supply the category-specific search behavior: name filter, sortable
//!   fields and default ordering.
//!
//! # Invariants
//! - Filtering is a case-insensitive substring match on `name`.
//! - Only `name` and `created_at` are sortable.
//! - Without an explicit sort field, newest categories come first.

use crate::error::RepoResult;
use crate::model::category::Category;
use crate::model::identity::Uuid;
use crate::repo::in_memory::{InMemorySearchableRepository, SearchConfig, SortableField};
use crate::repo::repository::{Repository, SearchableRepository};
use crate::repo::search::{SearchParams, SearchResult, SortDirection};
use async_trait::async_trait;

pub const CATEGORY_SORT_NAME: &str = "name";
pub const CATEGORY_SORT_CREATED_AT: &str = "created_at";

/// Search configuration for categories.
pub fn category_search_config() -> SearchConfig<Category> {
    SearchConfig::new(|category: &Category, filter: &String| {
        category
            .name()
            .to_lowercase()
            .contains(&filter.to_lowercase())
    })
    .sortable(SortableField::new(CATEGORY_SORT_NAME, |category: &Category| {
        category.name().to_string()
    }))
    .sortable(SortableField::new(
        CATEGORY_SORT_CREATED_AT,
        Category::created_at,
    ))
    .default_sort(CATEGORY_SORT_CREATED_AT, SortDirection::Desc)
}

#[derive(Clone)]
pub struct CategoryInMemoryRepository {
    inner: InMemorySearchableRepository<Category>,
}

impl CategoryInMemoryRepository {
    pub fn new() -> Self {
        Self {
            inner: InMemorySearchableRepository::new(category_search_config()),
        }
    }

    pub async fn len(&self) -> usize {
        self.inner.repository().len().await
    }
}

impl Default for CategoryInMemoryRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Repository<Category> for CategoryInMemoryRepository {
    async fn insert(&self, entity: Category) -> RepoResult<()> {
        self.inner.insert(entity).await
    }

    async fn bulk_insert(&self, entities: Vec<Category>) -> RepoResult<()> {
        self.inner.bulk_insert(entities).await
    }

    async fn update(&self, entity: Category) -> RepoResult<()> {
        self.inner.update(entity).await
    }

    async fn delete(&self, entity_id: &Uuid) -> RepoResult<()> {
        self.inner.delete(entity_id).await
    }

    async fn find_by_id(&self, entity_id: &Uuid) -> RepoResult<Option<Category>> {
        self.inner.find_by_id(entity_id).await
    }

    async fn find_all(&self) -> RepoResult<Vec<Category>> {
        self.inner.find_all().await
    }
}

#[async_trait]
impl SearchableRepository<Category> for CategoryInMemoryRepository {
    fn sortable_fields(&self) -> Vec<&'static str> {
        self.inner.sortable_fields()
    }

    async fn search(&self, params: &SearchParams) -> RepoResult<SearchResult<Category>> {
        self.inner.search(params).await
    }
}
