//! Dog entity and its transport DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use kennel_core::types::{DogId, Version};

// ---------------------------------------------------------------------------
// Entity
// ---------------------------------------------------------------------------

/// A row from the `dogs` table.
///
/// `id` is `None` until the store assigns one on first save.
#[derive(Debug, Clone, Default, PartialEq, Eq, FromRow)]
pub struct Dog {
    pub id: Option<DogId>,
    pub breed: String,
    pub name: String,
    /// Bumped by the store on every overwrite. Never checked by the service.
    pub version: Version,
}

// ---------------------------------------------------------------------------
// DTOs
// ---------------------------------------------------------------------------

/// Payload for creating or replacing a dog.
///
/// Missing fields deserialize to empty strings so they surface as
/// validation violations rather than parse failures.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Validate, ToSchema)]
pub struct DogRequestDto {
    #[serde(default)]
    #[schema(example = "Golden Retriever", min_length = 2, max_length = 50)]
    #[validate(
        custom(function = "kennel_core::validation::not_blank", message = "Breed is required"),
        length(min = 2, max = 50, message = "Breed must be between 2 and 50 characters")
    )]
    pub breed: String,

    #[serde(default)]
    #[schema(example = "Buddy", min_length = 2, max_length = 30)]
    #[validate(
        custom(function = "kennel_core::validation::not_blank", message = "Name is required"),
        length(min = 2, max = 30, message = "Name must be between 2 and 30 characters")
    )]
    pub name: String,
}

impl DogRequestDto {
    pub fn new(breed: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            breed: breed.into(),
            name: name.into(),
        }
    }
}

/// Read-only projection of a persisted dog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct DogResponseDto {
    /// Store-assigned identifier.
    #[schema(value_type = String)]
    pub id: DogId,
    #[schema(example = "Golden Retriever")]
    pub breed: String,
    #[schema(example = "Buddy")]
    pub name: String,
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use kennel_core::error::CoreError;
    use kennel_core::validation::{validate, FieldViolation};

    use super::*;

    fn violations(dto: &DogRequestDto) -> Vec<FieldViolation> {
        match validate(dto) {
            Ok(()) => Vec::new(),
            Err(CoreError::Validation(v)) => v,
            Err(other) => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn accepts_bounds() {
        assert!(validate(&DogRequestDto::new("ab", "cd")).is_ok());
        assert!(validate(&DogRequestDto::new("b".repeat(50), "n".repeat(30))).is_ok());
    }

    #[test]
    fn rejects_short_breed() {
        let v = violations(&DogRequestDto::new("L", "Max"));
        assert_eq!(
            v,
            vec![FieldViolation::new("breed", "Breed must be between 2 and 50 characters")]
        );
    }

    #[test]
    fn rejects_long_breed() {
        let v = violations(&DogRequestDto::new("b".repeat(51), "Max"));
        assert_eq!(v.len(), 1);
        assert_eq!(v[0].field, "breed");
    }

    #[test]
    fn rejects_short_and_long_name() {
        assert_eq!(violations(&DogRequestDto::new("Labrador", "M"))[0].field, "name");
        assert_eq!(
            violations(&DogRequestDto::new("Labrador", "n".repeat(31))),
            vec![FieldViolation::new("name", "Name must be between 2 and 30 characters")]
        );
    }

    #[test]
    fn rejects_blank_fields() {
        let v = violations(&DogRequestDto::new("   ", "  "));
        assert_eq!(
            v,
            vec![
                FieldViolation::new("breed", "Breed is required"),
                FieldViolation::new("name", "Name is required"),
            ]
        );
    }

    #[test]
    fn missing_fields_deserialize_to_violations() {
        let dto: DogRequestDto = serde_json::from_str("{}").unwrap();
        let v = violations(&dto);
        assert!(v.contains(&FieldViolation::new("breed", "Breed is required")));
        assert!(v.contains(&FieldViolation::new("name", "Name is required")));
        assert_matches!(validate(&dto), Err(CoreError::Validation(_)));
    }
}
