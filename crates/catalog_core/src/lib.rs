//! Generic in-process record store for catalog entities.
//! Identity-based entities, structural value objects and a
//! filter -> sort -> paginate search pipeline.

pub mod config;
pub mod error;
pub mod logging;
pub mod model;
pub mod repo;

pub use config::CoreConfig;
pub use error::{
    EntityValidationError, InvalidIdentifierError, NotFoundError, RepoError, RepoResult,
};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::category::{Category, CategoryCreateCommand, CategoryProps};
pub use model::entity::Entity;
pub use model::identity::Uuid;
pub use model::value_object::ValueObject;
pub use repo::category_repo::CategoryInMemoryRepository;
pub use repo::in_memory::{
    InMemoryRepository, InMemorySearchableRepository, SearchConfig, SortableField,
};
pub use repo::repository::{Repository, SearchableRepository};
pub use repo::search::{
    PaginationLimits, RawSearchParams, SearchParams, SearchResult, SortDirection,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
