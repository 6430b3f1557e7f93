//! The `Category` aggregate root.
//!
//! A `Category` can only be obtained through its constructors and only
//! changed through its mutators; every path re-runs the full invariant
//! check, so an invalid instance is never observable.

use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::domain::validation::{self, ValidationError};

const NAME_MIN_LENGTH: usize = 3;
const NAME_MAX_LENGTH: usize = 255;
const DESCRIPTION_MAX_LENGTH: usize = 10_000;

/// Validation failure raised at the aggregate boundary.
///
/// The message text is contractual; outer layers and tests match on it
/// verbatim.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EntityValidationError {
    /// A rule delegated to the [`validation`] primitives failed.
    #[error(transparent)]
    Field(#[from] ValidationError),
    #[error("Name should be at leats 3 characters long")]
    NameTooShort,
    #[error("Name should be less or equal 255 characters long")]
    NameTooLong,
    #[error("Description should be less or equal 10.000 characters long")]
    DescriptionTooLong,
}

/// Canonical category record.
///
/// `id` and `created_at` are stamped at construction and never change.
/// Deserialization routes through [`CategoryRecord`] so a serialized form
/// cannot smuggle in fields the constructors would reject.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(try_from = "CategoryRecord")]
pub struct Category {
    id: Uuid,
    name: String,
    description: String,
    is_active: bool,
    created_at: NaiveDateTime,
}

impl Category {
    /// Creates an active category.
    pub fn new(name: &str, description: Option<&str>) -> Result<Self, EntityValidationError> {
        Self::with_is_active(name, description, true)
    }

    /// Creates a category with an explicit active flag.
    ///
    /// A missing description (`None`) is rejected; an empty one is allowed.
    pub fn with_is_active(
        name: &str,
        description: Option<&str>,
        is_active: bool,
    ) -> Result<Self, EntityValidationError> {
        validate_fields(name, description)?;
        Ok(Self {
            id: Uuid::new_v4(),
            name: name.to_owned(),
            description: description.unwrap_or_default().to_owned(),
            is_active,
            created_at: Utc::now().naive_utc(),
        })
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    pub fn created_at(&self) -> NaiveDateTime {
        self.created_at
    }

    /// Marks the category active. Idempotent.
    pub fn activate(&mut self) -> Result<(), EntityValidationError> {
        self.is_active = true;
        self.validate()
    }

    /// Marks the category inactive. Idempotent.
    pub fn deactivate(&mut self) -> Result<(), EntityValidationError> {
        self.is_active = false;
        self.validate()
    }

    /// Replaces the name, and the description when one is supplied.
    ///
    /// Candidate values are validated before either field is written, so a
    /// rejected update leaves the aggregate exactly as it was.
    pub fn update(
        &mut self,
        name: &str,
        description: Option<&str>,
    ) -> Result<(), EntityValidationError> {
        let candidate = description.unwrap_or(&self.description);
        validate_fields(name, Some(candidate))?;
        self.name = name.to_owned();
        if let Some(description) = description {
            self.description = description.to_owned();
        }
        Ok(())
    }

    fn validate(&self) -> Result<(), EntityValidationError> {
        validate_fields(&self.name, Some(&self.description))
    }
}

/// Raw shape read from a serialized [`Category`], validated before it
/// becomes a live aggregate.
#[derive(Deserialize)]
struct CategoryRecord {
    id: Uuid,
    name: String,
    description: String,
    is_active: bool,
    created_at: NaiveDateTime,
}

impl TryFrom<CategoryRecord> for Category {
    type Error = EntityValidationError;

    fn try_from(record: CategoryRecord) -> Result<Self, Self::Error> {
        validate_fields(&record.name, Some(&record.description))?;
        Ok(Self {
            id: record.id,
            name: record.name,
            description: record.description,
            is_active: record.is_active,
            created_at: record.created_at,
        })
    }
}

/// Invariant checks shared by the constructors and every mutator.
///
/// Rule order is fixed: when several rules are violated at once, the first
/// one in this sequence decides which error surfaces.
fn validate_fields(name: &str, description: Option<&str>) -> Result<(), EntityValidationError> {
    validation::not_null_or_empty(Some(name), "Name")?;
    if name.chars().count() < NAME_MIN_LENGTH {
        return Err(EntityValidationError::NameTooShort);
    }
    if name.chars().count() > NAME_MAX_LENGTH {
        return Err(EntityValidationError::NameTooLong);
    }
    validation::not_null(&description, "Description")?;
    if description.unwrap_or_default().chars().count() > DESCRIPTION_MAX_LENGTH {
        return Err(EntityValidationError::DescriptionTooLong);
    }
    Ok(())
}
