//! Conversions between the `Dog` entity and its DTOs.
//!
//! All functions are pure; none touch the store.

use crate::models::dog::{Dog, DogRequestDto, DogResponseDto};

/// Build an unsaved entity from a request. The id is left for the store.
pub fn to_entity(request: &DogRequestDto) -> Dog {
    Dog {
        id: None,
        breed: request.breed.clone(),
        name: request.name.clone(),
        version: 0,
    }
}

/// Project an entity into its response shape.
pub fn to_response_dto(entity: &Dog) -> DogResponseDto {
    DogResponseDto {
        id: entity.id.clone().unwrap_or_default(),
        breed: entity.breed.clone(),
        name: entity.name.clone(),
    }
}

pub fn to_response_dto_list(entities: &[Dog]) -> Vec<DogResponseDto> {
    entities.iter().map(to_response_dto).collect()
}

/// Overwrite the mutable fields of `target` from `source`.
///
/// `id` and `version` are left untouched.
pub fn update_entity(target: &mut Dog, source: &DogRequestDto) {
    target.breed.clone_from(&source.breed);
    target.name.clone_from(&source.name);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn saved(id: &str, breed: &str, name: &str) -> Dog {
        Dog {
            id: Some(id.to_string()),
            breed: breed.to_string(),
            name: name.to_string(),
            version: 3,
        }
    }

    #[test]
    fn to_entity_leaves_id_unset() {
        let dog = to_entity(&DogRequestDto::new("Labrador", "Max"));
        assert_eq!(dog.id, None);
        assert_eq!(dog.breed, "Labrador");
        assert_eq!(dog.name, "Max");
    }

    #[test]
    fn request_survives_entity_and_back() {
        let request = DogRequestDto::new("Beagle", "Charlie");
        let response = to_response_dto(&to_entity(&request));
        assert_eq!(response.breed, request.breed);
        assert_eq!(response.name, request.name);
        assert!(response.id.is_empty());
    }

    #[test]
    fn list_preserves_order_and_length() {
        let dogs = vec![
            saved("b", "Beagle", "Charlie"),
            saved("a", "Labrador", "Max"),
        ];
        let list = to_response_dto_list(&dogs);
        assert_eq!(list.len(), 2);
        assert_eq!(list[0].id, "b");
        assert_eq!(list[1].id, "a");
        assert!(to_response_dto_list(&[]).is_empty());
    }

    #[test]
    fn update_entity_keeps_identity() {
        let mut dog = saved("dog-1", "Labrador", "Max");
        update_entity(&mut dog, &DogRequestDto::new("Poodle", "Bella"));
        assert_eq!(dog, saved("dog-1", "Poodle", "Bella"));
    }
}
