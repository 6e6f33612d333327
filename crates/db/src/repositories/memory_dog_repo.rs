//! In-process [`DogRepository`] for local development and tests.

use async_trait::async_trait;
use indexmap::IndexMap;
use kennel_core::types::DogId;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{describe, DogRepository};
use crate::error::StoreError;
use crate::models::dog::Dog;

/// Insertion-ordered map of dogs keyed by id.
#[derive(Default)]
pub struct MemoryDogRepo {
    dogs: RwLock<IndexMap<DogId, Dog>>,
}

impl MemoryDogRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.dogs.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.dogs.read().await.is_empty()
    }
}

#[async_trait]
impl DogRepository for MemoryDogRepo {
    async fn find_all(&self) -> Result<Vec<Dog>, StoreError> {
        Ok(self.dogs.read().await.values().cloned().collect())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Dog>, StoreError> {
        Ok(self.dogs.read().await.get(id).cloned())
    }

    async fn save(&self, mut dog: Dog) -> Result<Dog, StoreError> {
        tracing::debug!(id = describe(dog.id.as_ref()), "Saving dog in memory");

        let mut dogs = self.dogs.write().await;
        let id = dog.id.clone().unwrap_or_else(|| Uuid::new_v4().to_string());

        if let Some(existing) = dogs.get_mut(&id) {
            existing.breed = dog.breed;
            existing.name = dog.name;
            existing.version += 1;
            return Ok(existing.clone());
        }

        dog.id = Some(id.clone());
        dog.version = 0;
        dogs.insert(id, dog.clone());
        Ok(dog)
    }

    async fn exists_by_id(&self, id: &str) -> Result<bool, StoreError> {
        Ok(self.dogs.read().await.contains_key(id))
    }

    async fn delete_by_id(&self, id: &str) -> Result<(), StoreError> {
        self.dogs.write().await.shift_remove(id);
        Ok(())
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
