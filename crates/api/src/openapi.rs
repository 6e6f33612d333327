//! OpenAPI description of the HTTP surface, served as JSON.

use axum::Json;
use utoipa::OpenApi;

use crate::handlers::dogs;

#[derive(OpenApi)]
#[openapi(
    info(description = "API endpoints for managing dogs"),
    paths(
        dogs::list_dogs,
        dogs::get_dog,
        dogs::create_dog,
        dogs::update_dog,
        dogs::delete_dog,
    ),
    components(schemas(
        kennel_db::models::dog::DogRequestDto,
        kennel_db::models::dog::DogResponseDto,
    )),
    tags((name = "Dog Management", description = "API endpoints for managing dogs"))
)]
pub struct ApiDoc;

/// GET /v1/examples/openapi.json
pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
