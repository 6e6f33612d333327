//! Repository for the `dogs` table.

use async_trait::async_trait;
use sqlx::PgPool;

use super::{describe, DogRepository};
use crate::error::StoreError;
use crate::models::dog::Dog;

/// Column list for `dogs` queries.
const COLUMNS: &str = "id, breed, name, version";

/// Postgres-backed [`DogRepository`].
#[derive(Clone)]
pub struct PgDogRepo {
    pool: PgPool,
}

impl PgDogRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DogRepository for PgDogRepo {
    async fn find_all(&self) -> Result<Vec<Dog>, StoreError> {
        let query = format!("SELECT {COLUMNS} FROM dogs ORDER BY created_at, id");
        let dogs = sqlx::query_as::<_, Dog>(&query)
            .fetch_all(&self.pool)
            .await?;
        Ok(dogs)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Dog>, StoreError> {
        let query = format!("SELECT {COLUMNS} FROM dogs WHERE id = $1");
        let dog = sqlx::query_as::<_, Dog>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(dog)
    }

    /// New rows get their id from the column default. Known ids are
    /// upserted with `ON CONFLICT (id) DO UPDATE`, bumping `version`.
    async fn save(&self, dog: Dog) -> Result<Dog, StoreError> {
        tracing::debug!(id = describe(dog.id.as_ref()), "Saving dog row");

        let saved = match &dog.id {
            None => {
                let query = format!(
                    "INSERT INTO dogs (breed, name) VALUES ($1, $2) RETURNING {COLUMNS}"
                );
                sqlx::query_as::<_, Dog>(&query)
                    .bind(&dog.breed)
                    .bind(&dog.name)
                    .fetch_one(&self.pool)
                    .await?
            }
            Some(id) => {
                let query = format!(
                    "INSERT INTO dogs (id, breed, name) VALUES ($1, $2, $3) \
                     ON CONFLICT (id) DO UPDATE SET \
                         breed = EXCLUDED.breed, \
                         name = EXCLUDED.name, \
                         version = dogs.version + 1, \
                         updated_at = now() \
                     RETURNING {COLUMNS}"
                );
                sqlx::query_as::<_, Dog>(&query)
                    .bind(id)
                    .bind(&dog.breed)
                    .bind(&dog.name)
                    .fetch_one(&self.pool)
                    .await?
            }
        };

        Ok(saved)
    }

    async fn exists_by_id(&self, id: &str) -> Result<bool, StoreError> {
        let exists = sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM dogs WHERE id = $1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;
        Ok(exists)
    }

    async fn delete_by_id(&self, id: &str) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM dogs WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        tracing::debug!(id, rows = result.rows_affected(), "Deleted dog row");
        Ok(())
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        crate::health_check(&self.pool).await?;
        Ok(())
    }
}
