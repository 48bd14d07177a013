//! Slot endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    error::{AppError, AppResult},
    models::slot::{GenerateSlots, Slot, SlotQuery, SlotWithTurf, UpdateSlotStatus},
};

use super::{AppJson, AuthenticatedUser};

/// Slot list response
#[derive(Serialize, ToSchema)]
pub struct SlotListResponse {
    pub slots: Vec<SlotWithTurf>,
}

/// Slot generation response
#[derive(Serialize, ToSchema)]
pub struct GenerateSlotsResponse {
    pub message: String,
    pub count: usize,
    pub slots: Vec<Slot>,
}

/// Get slots for a turf on a date, sorted by start time
#[utoipa::path(
    get,
    path = "/slots",
    tag = "slots",
    params(SlotQuery),
    responses(
        (status = 200, description = "Slots for the turf and date", body = SlotListResponse),
        (status = 400, description = "Missing turfId or date")
    )
)]
pub async fn list_slots(
    State(state): State<crate::AppState>,
    Query(query): Query<SlotQuery>,
) -> AppResult<Json<SlotListResponse>> {
    let (turf_id, date) = match (query.turf_id, query.date) {
        (Some(turf_id), Some(date)) => (turf_id, date),
        _ => {
            return Err(AppError::Validation(
                "turfId and date are required".to_string(),
            ))
        }
    };

    let slots = state.services.slots.list_for_turf_date(turf_id, date).await?;
    Ok(Json(SlotListResponse { slots }))
}

/// Generate the slot grid for a turf on a date (admin).
///
/// Replaces all existing slots for that turf+date with the freshly
/// computed grid.
#[utoipa::path(
    post,
    path = "/slots/generate",
    tag = "slots",
    security(("bearer_auth" = [])),
    request_body = GenerateSlots,
    responses(
        (status = 201, description = "Slots generated", body = GenerateSlotsResponse),
        (status = 400, description = "Invalid time window or slot configuration"),
        (status = 404, description = "Turf not found"),
        (status = 409, description = "Concurrent generation for the same turf and date")
    )
)]
pub async fn generate_slots(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    AppJson(request): AppJson<GenerateSlots>,
) -> AppResult<(StatusCode, Json<GenerateSlotsResponse>)> {
    claims.require_admin()?;

    let slots = state.services.slots.generate(&request).await?;

    Ok((
        StatusCode::CREATED,
        Json(GenerateSlotsResponse {
            message: "Slots generated successfully".to_string(),
            count: slots.len(),
            slots,
        }),
    ))
}

/// Update slot status (admin).
///
/// Direct override: no validation against in-flight bookings.
#[utoipa::path(
    put,
    path = "/slots/{id}",
    tag = "slots",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Slot ID")),
    request_body = UpdateSlotStatus,
    responses(
        (status = 200, description = "Slot updated", body = Slot),
        (status = 404, description = "Slot not found")
    )
)]
pub async fn update_slot(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<i32>,
    AppJson(data): AppJson<UpdateSlotStatus>,
) -> AppResult<Json<Slot>> {
    claims.require_admin()?;
    let slot = state
        .services
        .slots
        .update_status(id, data.status, data.blocked_by.as_deref())
        .await?;
    Ok(Json(slot))
}

/// Delete a slot (admin). Bookings referencing it are not cascaded.
#[utoipa::path(
    delete,
    path = "/slots/{id}",
    tag = "slots",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Slot ID")),
    responses(
        (status = 200, description = "Slot deleted"),
        (status = 404, description = "Slot not found")
    )
)]
pub async fn delete_slot(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<i32>,
) -> AppResult<Json<serde_json::Value>> {
    claims.require_admin()?;
    state.services.slots.delete(id).await?;
    Ok(Json(serde_json::json!({ "message": "Slot deleted successfully" })))
}
