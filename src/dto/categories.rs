use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::category::Category;

fn default_is_active() -> bool {
    true
}

/// Payload accepted by the create-category use case.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreateCategoryInput {
    pub name: String,
    /// `None` models an absent description and fails aggregate validation.
    #[serde(default)]
    pub description: Option<String>,
    /// Defaults to `true` when omitted from the payload.
    #[serde(default = "default_is_active")]
    pub is_active: bool,
}

impl CreateCategoryInput {
    pub fn new(name: impl Into<String>, description: Option<String>, is_active: bool) -> Self {
        Self {
            name: name.into(),
            description,
            is_active,
        }
    }
}

/// Read-only snapshot of a [`Category`] handed outward by the services.
///
/// Recreated on every projection; it has no lifecycle of its own.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CategoryModelOutput {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
}

impl From<&Category> for CategoryModelOutput {
    fn from(category: &Category) -> Self {
        Self {
            id: category.id(),
            name: category.name().to_owned(),
            description: category.description().to_owned(),
            is_active: category.is_active(),
            created_at: category.created_at(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_is_active_defaults_to_true() {
        let input: CreateCategoryInput =
            serde_json::from_str(r#"{"name": "Movies", "description": "Movie category"}"#)
                .unwrap();
        assert!(input.is_active);
        assert_eq!(input.description.as_deref(), Some("Movie category"));
    }

    #[test]
    fn input_description_defaults_to_absent() {
        let input: CreateCategoryInput = serde_json::from_str(r#"{"name": "Movies"}"#).unwrap();
        assert!(input.description.is_none());
    }

    #[test]
    fn output_copies_every_aggregate_field() {
        let category = Category::with_is_active("Movies", Some("Movie category"), false).unwrap();
        let output = CategoryModelOutput::from(&category);

        assert_eq!(output.id, category.id());
        assert_eq!(output.name, category.name());
        assert_eq!(output.description, category.description());
        assert_eq!(output.is_active, category.is_active());
        assert_eq!(output.created_at, category.created_at());
    }
}
