//! Handlers for the dog resource.
//!
//! Thin delegation to [`DogService`](crate::services::DogService); bodies are
//! validated by [`ValidatedJson`] before any handler runs.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use kennel_db::models::dog::{DogRequestDto, DogResponseDto};

use crate::error::AppResult;
use crate::extract::ValidatedJson;
use crate::state::AppState;

/// GET /v1/examples/dogs
#[utoipa::path(
    get,
    path = "/v1/examples/dogs",
    responses(
        (status = 200, description = "All dogs", body = [DogResponseDto])
    ),
    tag = "Dog Management"
)]
pub async fn list_dogs(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let dogs = state.dogs.list_dogs().await?;
    Ok(Json(dogs))
}

/// GET /v1/examples/dogs/{id}
#[utoipa::path(
    get,
    path = "/v1/examples/dogs/{id}",
    params(("id" = String, Path, description = "Dog ID")),
    responses(
        (status = 200, description = "Dog found", body = DogResponseDto),
        (status = 404, description = "Dog not found")
    ),
    tag = "Dog Management"
)]
pub async fn get_dog(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let dog = state.dogs.get_dog(&id).await?;
    Ok(Json(dog))
}

/// POST /v1/examples/dogs
///
/// Returns 201 with the stored dog, including its assigned id.
#[utoipa::path(
    post,
    path = "/v1/examples/dogs",
    request_body = DogRequestDto,
    responses(
        (status = 201, description = "Dog created", body = DogResponseDto),
        (status = 400, description = "Invalid input")
    ),
    tag = "Dog Management"
)]
pub async fn create_dog(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<DogRequestDto>,
) -> AppResult<impl IntoResponse> {
    let dog = state.dogs.create_dog(&input).await?;
    Ok((StatusCode::CREATED, Json(dog)))
}

/// PUT /v1/examples/dogs/{id}
///
/// Replaces both fields of an existing dog; unknown ids are 404, not upserts.
#[utoipa::path(
    put,
    path = "/v1/examples/dogs/{id}",
    params(("id" = String, Path, description = "Dog ID")),
    request_body = DogRequestDto,
    responses(
        (status = 200, description = "Dog updated", body = DogResponseDto),
        (status = 400, description = "Invalid input"),
        (status = 404, description = "Dog not found")
    ),
    tag = "Dog Management"
)]
pub async fn update_dog(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(input): ValidatedJson<DogRequestDto>,
) -> AppResult<impl IntoResponse> {
    let dog = state.dogs.update_dog(&id, &input).await?;
    Ok(Json(dog))
}

/// DELETE /v1/examples/dogs/{id}
#[utoipa::path(
    delete,
    path = "/v1/examples/dogs/{id}",
    params(("id" = String, Path, description = "Dog ID")),
    responses(
        (status = 204, description = "Dog deleted"),
        (status = 404, description = "Dog not found")
    ),
    tag = "Dog Management"
)]
pub async fn delete_dog(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    state.dogs.delete_dog(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
