//! Error taxonomy shared by the model and repository layers.
//!
//! # Responsibility
//! - Name every failure a caller of the store can observe.
//! - Keep validation failures renderable field by field.
//!
//! # Invariants
//! - `EntityValidationError` aggregates every violated rule of every field
//!   before it is returned; it is never built from the first failure only.
//! - Errors are surfaced unmodified; the store never retries.

use std::collections::BTreeMap;
use thiserror::Error;

pub type RepoResult<T> = Result<T, RepoError>;

/// Identifier text failed format validation at construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid uuid: `{value}`")]
pub struct InvalidIdentifierError {
    pub value: String,
}

impl InvalidIdentifierError {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }
}

/// One or more entity field rules were violated.
///
/// Field names map to the ordered list of messages of every rule that
/// failed for that field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
#[error("entity validation failed: {}", render_field_errors(.errors))]
pub struct EntityValidationError {
    errors: BTreeMap<String, Vec<String>>,
}

impl EntityValidationError {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one violated rule for `field`, keeping insertion order.
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors
            .entry(field.into())
            .or_default()
            .push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &BTreeMap<String, Vec<String>> {
        &self.errors
    }

    /// Messages recorded for one field, empty when the field passed.
    pub fn field_errors(&self, field: &str) -> &[String] {
        self.errors.get(field).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains(&self, field: &str, message: &str) -> bool {
        self.field_errors(field).iter().any(|m| m == message)
    }

    /// Converts the collected violations into a validation outcome.
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

/// Update or delete referenced an identity absent from the store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{entity_kind} not found using ID {id}")]
pub struct NotFoundError {
    pub id: String,
    pub entity_kind: &'static str,
}

impl NotFoundError {
    pub fn new(id: impl ToString, entity_kind: &'static str) -> Self {
        Self {
            id: id.to_string(),
            entity_kind,
        }
    }
}

/// Error returned by repository operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepoError {
    #[error(transparent)]
    NotFound(#[from] NotFoundError),
    #[error(transparent)]
    Validation(#[from] EntityValidationError),
    #[error(transparent)]
    InvalidIdentifier(#[from] InvalidIdentifierError),
}

fn render_field_errors(errors: &BTreeMap<String, Vec<String>>) -> String {
    errors
        .iter()
        .map(|(field, messages)| format!("{field}: [{}]", messages.join("; ")))
        .collect::<Vec<_>>()
        .join(", ")
}
