//! Route definitions for the dog resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::dogs;
use crate::state::AppState;

/// Dog routes mounted at `/dogs`.
///
/// ```text
/// GET    /      -> list_dogs
/// POST   /      -> create_dog
/// GET    /{id}  -> get_dog
/// PUT    /{id}  -> update_dog
/// DELETE /{id}  -> delete_dog
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(dogs::list_dogs).post(dogs::create_dog))
        .route(
            "/{id}",
            get(dogs::get_dog)
                .put(dogs::update_dog)
                .delete(dogs::delete_dog),
        )
}
