//! Animal API handlers.
//!
//! # Purpose
//! Implements listing with query filters, creation, lookup, partial update,
//! and deletion of animals under `/api/animais`.
use crate::api::error::{ApiError, api_internal, api_store_error, api_validation_error};
use crate::api::parse_record_id;
use crate::api::types::MessageResponse;
use crate::app::AppState;
use crate::filter::AnimalFilter;
use crate::model::{Animal, AnimalPatch, NewAnimal, Payload};
use crate::validation::validate_animal_data;
use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

const ANIMAL_NOT_FOUND: &str = "Animal não encontrado";

#[utoipa::path(
    get,
    path = "/api/animais",
    tag = "animais",
    params(AnimalFilter),
    responses(
        (status = 200, description = "Animals matching every given filter, in insertion order", body = [Animal])
    )
)]
pub(crate) async fn list_animals(
    Query(pairs): Query<Vec<(String, String)>>,
    State(state): State<AppState>,
) -> Result<Json<Vec<Animal>>, ApiError> {
    let filter = AnimalFilter::from_pairs(pairs);
    let items = state
        .store
        .list_animals(&filter)
        .await
        .map_err(|err| api_internal("failed to list animals", &err))?;
    Ok(Json(items))
}

#[utoipa::path(
    post,
    path = "/api/animais",
    tag = "animais",
    request_body = NewAnimal,
    responses(
        (status = 201, description = "Animal created", body = Animal),
        (status = 400, description = "Invalid animal fields", body = crate::api::types::ErrorResponse)
    )
)]
pub(crate) async fn create_animal(
    State(state): State<AppState>,
    Json(body): Json<Payload>,
) -> Result<impl IntoResponse, ApiError> {
    validate_animal_data(&body, false)?;
    let draft =
        NewAnimal::from_payload(body).map_err(|err| api_validation_error(&err.to_string()))?;
    let created = state
        .store
        .create_animal(draft)
        .await
        .map_err(|err| api_internal("failed to create animal", &err))?;
    tracing::info!(id = created.id, especie = %created.especie, "animal registered");
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    get,
    path = "/api/animais/{id}",
    tag = "animais",
    params(
        ("id" = u64, Path, description = "Animal identifier")
    ),
    responses(
        (status = 200, description = "Fetch animal", body = Animal),
        (status = 404, description = "Animal not found", body = crate::api::types::ErrorResponse)
    )
)]
pub(crate) async fn get_animal(
    Path(raw_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<Animal>, ApiError> {
    let id = parse_record_id(&raw_id, ANIMAL_NOT_FOUND)?;
    let animal = state
        .store
        .get_animal(id)
        .await
        .map_err(|err| api_store_error(err, ANIMAL_NOT_FOUND, "failed to fetch animal"))?;
    Ok(Json(animal))
}

#[utoipa::path(
    put,
    path = "/api/animais/{id}",
    tag = "animais",
    params(
        ("id" = u64, Path, description = "Animal identifier")
    ),
    request_body = AnimalPatch,
    responses(
        (status = 200, description = "Animal updated", body = Animal),
        (status = 400, description = "Invalid animal fields", body = crate::api::types::ErrorResponse),
        (status = 404, description = "Animal not found", body = crate::api::types::ErrorResponse)
    )
)]
pub(crate) async fn update_animal(
    Path(raw_id): Path<String>,
    State(state): State<AppState>,
    Json(body): Json<Payload>,
) -> Result<Json<Animal>, ApiError> {
    let id = parse_record_id(&raw_id, ANIMAL_NOT_FOUND)?;
    // Existence is checked before the patch is validated.
    state
        .store
        .get_animal(id)
        .await
        .map_err(|err| api_store_error(err, ANIMAL_NOT_FOUND, "failed to fetch animal"))?;
    validate_animal_data(&body, true)?;
    let patch =
        AnimalPatch::from_payload(body).map_err(|err| api_validation_error(&err.to_string()))?;
    let updated = state
        .store
        .patch_animal(id, patch)
        .await
        .map_err(|err| api_store_error(err, ANIMAL_NOT_FOUND, "failed to update animal"))?;
    Ok(Json(updated))
}

#[utoipa::path(
    delete,
    path = "/api/animais/{id}",
    tag = "animais",
    params(
        ("id" = u64, Path, description = "Animal identifier")
    ),
    responses(
        (status = 200, description = "Animal deleted", body = MessageResponse),
        (status = 404, description = "Animal not found", body = crate::api::types::ErrorResponse)
    )
)]
pub(crate) async fn delete_animal(
    Path(raw_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<MessageResponse>, ApiError> {
    let id = parse_record_id(&raw_id, ANIMAL_NOT_FOUND)?;
    state
        .store
        .delete_animal(id)
        .await
        .map_err(|err| api_store_error(err, ANIMAL_NOT_FOUND, "failed to delete animal"))?;
    tracing::info!(id, "animal removed");
    Ok(Json(MessageResponse {
        message: "Animal deletado com sucesso".to_string(),
    }))
}
