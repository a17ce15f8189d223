//! Request handlers for the calculation API.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use tracing::error;

use super::AppState;
use super::types::{CreateCalculationRequest, ErrorBody, SummaryResponse};
use crate::catalog::{self, CatalogEntry};
use crate::model::{Calculation, CalculationPatch};
use crate::storage::StorageError;

type ErrorResponse = (StatusCode, Json<ErrorBody>);

fn internal(action: &str, err: &StorageError) -> ErrorResponse {
    error!(error = %err, "failed to {action}");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorBody::message(format!("Failed to {action}"))),
    )
}

fn not_found() -> ErrorResponse {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorBody::message("Calculation not found")),
    )
}

/// `GET /api/calculations` → 200 + all saved records.
pub async fn list_calculations(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Calculation>>, ErrorResponse> {
    match state.storage.list().await {
        Ok(calculations) => Ok(Json(calculations)),
        Err(err) => Err(internal("fetch calculations", &err)),
    }
}

/// `GET /api/calculations/{id}` → 200, or 404 for an unknown id.
pub async fn get_calculation(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Calculation>, ErrorResponse> {
    match state.storage.get(&id).await {
        Ok(Some(calculation)) => Ok(Json(calculation)),
        Ok(None) => Err(not_found()),
        Err(err) => Err(internal("fetch calculation", &err)),
    }
}

/// `POST /api/calculations` → 201 + created record, or 400 with field
/// errors.
pub async fn create_calculation(
    State(state): State<Arc<AppState>>,
    Json(request): Json<CreateCalculationRequest>,
) -> Result<(StatusCode, Json<Calculation>), ErrorResponse> {
    let errors = request.validate();
    if !errors.is_empty() {
        return Err((StatusCode::BAD_REQUEST, Json(ErrorBody::invalid(errors))));
    }
    let new = request.into_new(&state.tariff);
    match state.storage.create(new).await {
        Ok(calculation) => Ok((StatusCode::CREATED, Json(calculation))),
        Err(err) => Err(internal("create calculation", &err)),
    }
}

/// `PATCH /api/calculations/{id}` → 200 updated record, 400 on bad
/// fields, 404 for an unknown id.
pub async fn update_calculation(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(patch): Json<CalculationPatch>,
) -> Result<Json<Calculation>, ErrorResponse> {
    let errors = patch.validate();
    if !errors.is_empty() {
        return Err((StatusCode::BAD_REQUEST, Json(ErrorBody::invalid(errors))));
    }
    match state.storage.update(&id, patch).await {
        Ok(Some(calculation)) => Ok(Json(calculation)),
        Ok(None) => Err(not_found()),
        Err(err) => Err(internal("update calculation", &err)),
    }
}

/// `DELETE /api/calculations/{id}` → 204, or 404 for an unknown id.
pub async fn delete_calculation(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<StatusCode, ErrorResponse> {
    match state.storage.delete(&id).await {
        Ok(true) => Ok(StatusCode::NO_CONTENT),
        Ok(false) => Err(not_found()),
        Err(err) => Err(internal("delete calculation", &err)),
    }
}

/// `GET /api/calculations/{id}/summary` → 200 + recomputed figures.
pub async fn get_summary(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<SummaryResponse>, ErrorResponse> {
    match state.storage.get(&id).await {
        Ok(Some(calculation)) => Ok(Json(SummaryResponse::from_calculation(&calculation))),
        Ok(None) => Err(not_found()),
        Err(err) => Err(internal("fetch calculation", &err)),
    }
}

/// `GET /api/appliances` → 200 + built-in catalog.
pub async fn list_catalog() -> Json<&'static [CatalogEntry]> {
    Json(catalog::CATALOG)
}
