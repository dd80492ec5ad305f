//! Surcharge admin routes.

#[cfg(test)]
#[path = "surcharges_test.rs"]
mod surcharges_test;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use uuid::Uuid;

use crate::services::surcharge::{self, CreateSurcharge, SurchargeError, SurchargePatch};
use crate::state::{AppState, Surcharge};

/// `GET /api/admin/surcharges`: list surcharges sorted by name.
pub async fn list_surcharges(State(state): State<AppState>) -> Json<Vec<Surcharge>> {
    Json(surcharge::list_surcharges(&state).await)
}

/// `POST /api/admin/surcharges`: create a surcharge.
pub async fn create_surcharge(
    State(state): State<AppState>,
    Json(body): Json<CreateSurcharge>,
) -> Result<(StatusCode, Json<Surcharge>), StatusCode> {
    let created = surcharge::create_surcharge(&state, body)
        .await
        .map_err(surcharge_error_to_status)?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// `GET /api/admin/surcharges/:id`: fetch one surcharge.
pub async fn get_surcharge(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Surcharge>, StatusCode> {
    surcharge::get_surcharge(&state, id)
        .await
        .map(Json)
        .map_err(surcharge_error_to_status)
}

/// `PATCH /api/admin/surcharges/:id`: partial update.
pub async fn update_surcharge(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<SurchargePatch>,
) -> Result<Json<Surcharge>, StatusCode> {
    surcharge::update_surcharge(&state, id, body)
        .await
        .map(Json)
        .map_err(surcharge_error_to_status)
}

/// `DELETE /api/admin/surcharges/:id`: delete a surcharge.
pub async fn delete_surcharge(State(state): State<AppState>, Path(id): Path<Uuid>) -> Result<StatusCode, StatusCode> {
    surcharge::delete_surcharge(&state, id)
        .await
        .map_err(surcharge_error_to_status)?;
    Ok(StatusCode::NO_CONTENT)
}

pub(crate) fn surcharge_error_to_status(err: SurchargeError) -> StatusCode {
    match err {
        SurchargeError::NotFound(_) => StatusCode::NOT_FOUND,
        SurchargeError::Invalid(reason) => {
            tracing::debug!(%reason, "rejected surcharge input");
            StatusCode::BAD_REQUEST
        }
    }
}
