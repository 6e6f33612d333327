//! Repository layer.
//!
//! [`DogRepository`] is the seam between the service and the store. Two
//! adapters implement it: [`PgDogRepo`] against Postgres and
//! [`MemoryDogRepo`] in process.

use async_trait::async_trait;
use kennel_core::types::DogId;

use crate::error::StoreError;
use crate::models::dog::Dog;

pub mod dog_repo;
pub mod memory_dog_repo;

pub use dog_repo::PgDogRepo;
pub use memory_dog_repo::MemoryDogRepo;

/// Identity-keyed access to stored dogs.
#[async_trait]
pub trait DogRepository: Send + Sync {
    /// All stored dogs, oldest first.
    async fn find_all(&self) -> Result<Vec<Dog>, StoreError>;

    async fn find_by_id(&self, id: &str) -> Result<Option<Dog>, StoreError>;

    /// Insert when `dog.id` is `None`, otherwise overwrite the record with
    /// that id (creating it if absent). Returns the stored state.
    async fn save(&self, dog: Dog) -> Result<Dog, StoreError>;

    async fn exists_by_id(&self, id: &str) -> Result<bool, StoreError>;

    /// Remove the record with `id`. Absent ids are a no-op.
    async fn delete_by_id(&self, id: &str) -> Result<(), StoreError>;

    /// Confirm the backing store is reachable.
    async fn health_check(&self) -> Result<(), StoreError>;
}

/// Convenience for adapters that need to report which id they touched.
pub(crate) fn describe(id: Option<&DogId>) -> &str {
    id.map(String::as_str).unwrap_or("<new>")
}
