//! Orchestration of the dog lifecycle.
//!
//! The service owns every read-modify-write against the repository.
//! Payloads arrive already validated by the HTTP layer.

use std::sync::Arc;

use kennel_core::error::CoreError;
use kennel_db::mapper;
use kennel_db::models::dog::{Dog, DogRequestDto, DogResponseDto};
use kennel_db::repositories::DogRepository;

use crate::error::AppResult;

pub struct DogService {
    repository: Arc<dyn DogRepository>,
}

impl DogService {
    pub fn new(repository: Arc<dyn DogRepository>) -> Self {
        Self { repository }
    }

    pub async fn list_dogs(&self) -> AppResult<Vec<DogResponseDto>> {
        tracing::info!("Fetching all dogs");
        let dogs = self.repository.find_all().await?;
        Ok(mapper::to_response_dto_list(&dogs))
    }

    pub async fn get_dog(&self, id: &str) -> AppResult<DogResponseDto> {
        tracing::info!(id, "Fetching dog");
        let dog = self.find_dog(id).await?;
        Ok(mapper::to_response_dto(&dog))
    }

    pub async fn create_dog(&self, request: &DogRequestDto) -> AppResult<DogResponseDto> {
        tracing::info!(breed = %request.breed, name = %request.name, "Creating dog");
        let saved = self.repository.save(mapper::to_entity(request)).await?;
        tracing::info!(id = saved.id.as_deref().unwrap_or_default(), "Dog created");
        Ok(mapper::to_response_dto(&saved))
    }

    /// Replace `breed` and `name` on an existing dog.
    ///
    /// Fails with NotFound without writing anything if `id` is unknown.
    pub async fn update_dog(&self, id: &str, request: &DogRequestDto) -> AppResult<DogResponseDto> {
        tracing::info!(id, breed = %request.breed, name = %request.name, "Updating dog");
        let mut dog = self.find_dog(id).await?;

        mapper::update_entity(&mut dog, request);
        dog.id = Some(id.to_string());

        let saved = self.repository.save(dog).await?;
        Ok(mapper::to_response_dto(&saved))
    }

    pub async fn delete_dog(&self, id: &str) -> AppResult<()> {
        tracing::info!(id, "Deleting dog");
        if !self.repository.exists_by_id(id).await? {
            return Err(CoreError::dog_not_found(id).into());
        }
        self.repository.delete_by_id(id).await?;
        Ok(())
    }

    /// Entity-level lookup shared by the DTO operations.
    pub async fn find_dog(&self, id: &str) -> AppResult<Dog> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| CoreError::dog_not_found(id).into())
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use kennel_db::repositories::MemoryDogRepo;

    use super::*;
    use crate::error::AppError;

    fn service() -> (DogService, Arc<MemoryDogRepo>) {
        let repo = Arc::new(MemoryDogRepo::new());
        (DogService::new(repo.clone()), repo)
    }

    fn labrador() -> DogRequestDto {
        DogRequestDto::new("Labrador", "Max")
    }

    #[tokio::test]
    async fn create_then_get_round_trips_fields() {
        let (service, _) = service();

        let created = service.create_dog(&labrador()).await.unwrap();
        assert!(!created.id.is_empty());
        assert_eq!(created.breed, "Labrador");
        assert_eq!(created.name, "Max");

        let fetched = service.get_dog(&created.id).await.unwrap();
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn get_unknown_id_is_not_found() {
        let (service, _) = service();
        let err = service.get_dog("nope").await.unwrap_err();
        assert_matches!(err, AppError::Core(CoreError::NotFound { entity: "Dog", ref id }) if id == "nope");
    }

    #[tokio::test]
    async fn list_is_empty_then_tracks_live_records() {
        let (service, _) = service();
        assert!(service.list_dogs().await.unwrap().is_empty());

        let a = service.create_dog(&labrador()).await.unwrap();
        let b = service
            .create_dog(&DogRequestDto::new("Beagle", "Charlie"))
            .await
            .unwrap();
        service.delete_dog(&a.id).await.unwrap();

        assert_eq!(service.list_dogs().await.unwrap(), vec![b]);
    }

    #[tokio::test]
    async fn update_replaces_fields_and_keeps_id() {
        let (service, repo) = service();
        let created = service.create_dog(&labrador()).await.unwrap();

        let updated = service
            .update_dog(&created.id, &DogRequestDto::new("Poodle", "Bella"))
            .await
            .unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.breed, "Poodle");
        assert_eq!(updated.name, "Bella");
        assert_eq!(repo.len().await, 1);
        assert_eq!(service.find_dog(&created.id).await.unwrap().version, 1);
    }

    #[tokio::test]
    async fn update_unknown_id_fails_without_creating() {
        let (service, repo) = service();
        let err = service.update_dog("ghost", &labrador()).await.unwrap_err();

        assert_matches!(err, AppError::Core(CoreError::NotFound { .. }));
        assert!(repo.is_empty().await);
    }

    #[tokio::test]
    async fn delete_removes_record() {
        let (service, _) = service();
        let created = service.create_dog(&labrador()).await.unwrap();

        service.delete_dog(&created.id).await.unwrap();

        assert_matches!(
            service.get_dog(&created.id).await,
            Err(AppError::Core(CoreError::NotFound { .. }))
        );
    }

    #[tokio::test]
    async fn delete_unknown_id_is_not_found_and_changes_nothing() {
        let (service, repo) = service();
        service.create_dog(&labrador()).await.unwrap();

        let err = service.delete_dog("ghost").await.unwrap_err();

        assert_matches!(err, AppError::Core(CoreError::NotFound { .. }));
        assert_eq!(repo.len().await, 1);
    }
}
