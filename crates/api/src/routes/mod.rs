pub mod dogs;
pub mod health;

use axum::routing::get;
use axum::Router;

use crate::openapi;
use crate::state::AppState;

/// Resource routes, mounted under `/v1/examples`.
///
/// ```text
/// /dogs          -> dogs::router
/// /openapi.json  -> openapi_json
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/dogs", dogs::router())
        .route("/openapi.json", get(openapi::openapi_json))
}
