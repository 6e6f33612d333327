use std::sync::Arc;

use kennel_db::repositories::DogRepository;

use crate::services::DogService;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable; everything inside is behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Repository adapter, also probed by the health check.
    pub repository: Arc<dyn DogRepository>,
    pub dogs: Arc<DogService>,
}

impl AppState {
    /// Wire the service over `repository`.
    pub fn new(repository: Arc<dyn DogRepository>) -> Self {
        let dogs = Arc::new(DogService::new(Arc::clone(&repository)));
        Self { repository, dogs }
    }
}
