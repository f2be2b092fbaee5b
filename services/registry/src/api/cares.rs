//! Care routine API handlers.
//!
//! # Purpose
//! Implements listing, creation, lookup, partial update, and deletion of care
//! routines under `/api/cuidados`. Unlike animals, the listing takes no
//! filters.
use crate::api::error::{ApiError, api_internal, api_store_error, api_validation_error};
use crate::api::parse_record_id;
use crate::api::types::MessageResponse;
use crate::app::AppState;
use crate::model::{Cuidado, CuidadoPatch, NewCuidado, Payload};
use crate::validation::validate_care_data;
use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

const CARE_NOT_FOUND: &str = "Cuidado não encontrado";
// Update answers with the plural form.
const CARE_UPDATE_NOT_FOUND: &str = "Cuidados não encontrado";

#[utoipa::path(
    get,
    path = "/api/cuidados",
    tag = "cuidados",
    responses(
        (status = 200, description = "All care routines, in insertion order", body = [Cuidado])
    )
)]
pub(crate) async fn list_cares(
    State(state): State<AppState>,
) -> Result<Json<Vec<Cuidado>>, ApiError> {
    let items = state
        .store
        .list_cares()
        .await
        .map_err(|err| api_internal("failed to list care routines", &err))?;
    Ok(Json(items))
}

#[utoipa::path(
    post,
    path = "/api/cuidados",
    tag = "cuidados",
    request_body = NewCuidado,
    responses(
        (status = 201, description = "Care routine created", body = Cuidado),
        (status = 400, description = "Invalid care fields", body = crate::api::types::ErrorResponse)
    )
)]
pub(crate) async fn create_care(
    State(state): State<AppState>,
    Json(body): Json<Payload>,
) -> Result<impl IntoResponse, ApiError> {
    validate_care_data(&body, false)?;
    let draft =
        NewCuidado::from_payload(body).map_err(|err| api_validation_error(&err.to_string()))?;
    let created = state
        .store
        .create_care(draft)
        .await
        .map_err(|err| api_internal("failed to create care routine", &err))?;
    tracing::info!(id = created.id, frequencia = %created.frequencia, "care routine registered");
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    get,
    path = "/api/cuidados/{id}",
    tag = "cuidados",
    params(
        ("id" = u64, Path, description = "Care routine identifier")
    ),
    responses(
        (status = 200, description = "Fetch care routine", body = Cuidado),
        (status = 404, description = "Care routine not found", body = crate::api::types::ErrorResponse)
    )
)]
pub(crate) async fn get_care(
    Path(raw_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<Cuidado>, ApiError> {
    let id = parse_record_id(&raw_id, CARE_NOT_FOUND)?;
    let care = state
        .store
        .get_care(id)
        .await
        .map_err(|err| api_store_error(err, CARE_NOT_FOUND, "failed to fetch care routine"))?;
    Ok(Json(care))
}

#[utoipa::path(
    put,
    path = "/api/cuidados/{id}",
    tag = "cuidados",
    params(
        ("id" = u64, Path, description = "Care routine identifier")
    ),
    request_body = CuidadoPatch,
    responses(
        (status = 200, description = "Care routine updated", body = Cuidado),
        (status = 400, description = "Invalid care fields", body = crate::api::types::ErrorResponse),
        (status = 404, description = "Care routine not found", body = crate::api::types::ErrorResponse)
    )
)]
pub(crate) async fn update_care(
    Path(raw_id): Path<String>,
    State(state): State<AppState>,
    Json(body): Json<Payload>,
) -> Result<Json<Cuidado>, ApiError> {
    let id = parse_record_id(&raw_id, CARE_UPDATE_NOT_FOUND)?;
    state.store.get_care(id).await.map_err(|err| {
        api_store_error(err, CARE_UPDATE_NOT_FOUND, "failed to fetch care routine")
    })?;
    validate_care_data(&body, true)?;
    let patch =
        CuidadoPatch::from_payload(body).map_err(|err| api_validation_error(&err.to_string()))?;
    let updated = state.store.patch_care(id, patch).await.map_err(|err| {
        api_store_error(err, CARE_UPDATE_NOT_FOUND, "failed to update care routine")
    })?;
    Ok(Json(updated))
}

#[utoipa::path(
    delete,
    path = "/api/cuidados/{id}",
    tag = "cuidados",
    params(
        ("id" = u64, Path, description = "Care routine identifier")
    ),
    responses(
        (status = 200, description = "Care routine deleted", body = MessageResponse),
        (status = 404, description = "Care routine not found", body = crate::api::types::ErrorResponse)
    )
)]
pub(crate) async fn delete_care(
    Path(raw_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<MessageResponse>, ApiError> {
    let id = parse_record_id(&raw_id, CARE_NOT_FOUND)?;
    state
        .store
        .delete_care(id)
        .await
        .map_err(|err| api_store_error(err, CARE_NOT_FOUND, "failed to delete care routine"))?;
    tracing::info!(id, "care routine removed");
    Ok(Json(MessageResponse {
        message: "Cuidado deletado com sucesso".to_string(),
    }))
}
