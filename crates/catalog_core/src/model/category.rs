//! Category domain entity.
//!
//! # Responsibility
//! - Provide the minimal concrete entity the generic store is exercised with.
//! - Own category field rules as one explicit validation function.
//!
//! # Invariants
//! - Every constructor and every mutator runs [`Category::validate`].
//! - Mutators validate the candidate state first; a rejected mutation leaves
//!   the category unchanged.
//! - `category_id` is assigned once and never reassigned.
//! - Equality is identity equality (see [`Entity`]).

use crate::error::EntityValidationError;
use crate::model::entity::Entity;
use crate::model::identity::Uuid;
use chrono::{DateTime, Utc};
use serde::Serialize;

pub const NAME_MAX_CHARS: usize = 255;
pub const DESCRIPTION_MAX_CHARS: usize = 2000;

/// Full property set, used when rehydrating an existing category.
///
/// Missing optional fields fall back to the same defaults as
/// [`Category::create`].
#[derive(Debug, Clone, Default)]
pub struct CategoryProps {
    pub category_id: Option<Uuid>,
    pub name: String,
    pub description: Option<String>,
    pub is_active: Option<bool>,
    pub created_at: Option<DateTime<Utc>>,
}

/// Input for creating a brand new category.
#[derive(Debug, Clone, Default)]
pub struct CategoryCreateCommand {
    pub name: String,
    pub description: Option<String>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Category {
    category_id: Uuid,
    name: String,
    description: Option<String>,
    is_active: bool,
    created_at: DateTime<Utc>,
}

impl Category {
    /// Builds a category from stored or imported properties.
    ///
    /// # Errors
    /// - Returns every violated field rule as [`EntityValidationError`].
    pub fn new(props: CategoryProps) -> Result<Self, EntityValidationError> {
        let category = Self {
            category_id: props.category_id.unwrap_or_default(),
            name: props.name,
            description: props.description,
            is_active: props.is_active.unwrap_or(true),
            created_at: props.created_at.unwrap_or_else(Utc::now),
        };
        category.validate()?;
        Ok(category)
    }

    /// Creates a new category with a generated identity.
    pub fn create(command: CategoryCreateCommand) -> Result<Self, EntityValidationError> {
        Self::new(CategoryProps {
            category_id: None,
            name: command.name,
            description: command.description,
            is_active: command.is_active,
            created_at: None,
        })
    }

    pub fn category_id(&self) -> &Uuid {
        &self.category_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn change_name(&mut self, name: impl Into<String>) -> Result<(), EntityValidationError> {
        let name = name.into();
        self.apply(|candidate| candidate.name = name)
    }

    pub fn change_description(
        &mut self,
        description: Option<String>,
    ) -> Result<(), EntityValidationError> {
        self.apply(|candidate| candidate.description = description)
    }

    /// Replaces name and description together, validating once.
    pub fn update(
        &mut self,
        name: impl Into<String>,
        description: Option<String>,
    ) -> Result<(), EntityValidationError> {
        let name = name.into();
        self.apply(|candidate| {
            candidate.name = name;
            candidate.description = description;
        })
    }

    pub fn activate(&mut self) {
        self.is_active = true;
    }

    pub fn deactivate(&mut self) {
        self.is_active = false;
    }

    /// Checks every field rule and reports all violations at once.
    pub fn validate(&self) -> Result<(), EntityValidationError> {
        let mut errors = EntityValidationError::new();

        if self.name.trim().is_empty() {
            errors.add("name", "name should not be empty");
        }
        if self.name.chars().count() > NAME_MAX_CHARS {
            errors.add(
                "name",
                format!("name must be shorter than or equal to {NAME_MAX_CHARS} characters"),
            );
        }

        if let Some(description) = self.description.as_deref() {
            if description.chars().count() > DESCRIPTION_MAX_CHARS {
                errors.add(
                    "description",
                    format!(
                        "description must be shorter than or equal to {DESCRIPTION_MAX_CHARS} characters"
                    ),
                );
            }
        }

        errors.into_result()
    }

    fn apply(&mut self, change: impl FnOnce(&mut Self)) -> Result<(), EntityValidationError> {
        let mut candidate = self.clone();
        change(&mut candidate);
        candidate.validate()?;
        *self = candidate;
        Ok(())
    }
}

impl Entity for Category {
    type Id = Uuid;

    const KIND: &'static str = "Category";

    fn entity_id(&self) -> &Uuid {
        &self.category_id
    }
}

impl PartialEq for Category {
    fn eq(&self, other: &Self) -> bool {
        self.same_identity(other)
    }
}

impl Eq for Category {}
