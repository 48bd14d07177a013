//! Turf endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::{
    error::AppResult,
    models::turf::{CreateTurf, Turf, TurfQuery, UpdateTurf},
};

use super::{validation_errors, AppJson, AuthenticatedUser};

/// List turfs, optionally filtered by venue and sport type
#[utoipa::path(
    get,
    path = "/turfs",
    tag = "turfs",
    params(TurfQuery),
    responses(
        (status = 200, description = "Active turfs", body = Vec<Turf>)
    )
)]
pub async fn list_turfs(
    State(state): State<crate::AppState>,
    Query(query): Query<TurfQuery>,
) -> AppResult<Json<Vec<Turf>>> {
    let turfs = state.services.catalog.list_turfs(&query).await?;
    Ok(Json(turfs))
}

/// Get a turf by ID
#[utoipa::path(
    get,
    path = "/turfs/{id}",
    tag = "turfs",
    params(("id" = i32, Path, description = "Turf ID")),
    responses(
        (status = 200, description = "Turf", body = Turf),
        (status = 404, description = "Turf not found")
    )
)]
pub async fn get_turf(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Turf>> {
    let turf = state.services.catalog.get_turf(id).await?;
    Ok(Json(turf))
}

/// Create a turf (admin)
#[utoipa::path(
    post,
    path = "/turfs",
    tag = "turfs",
    security(("bearer_auth" = [])),
    request_body = CreateTurf,
    responses(
        (status = 201, description = "Turf created", body = Turf),
        (status = 400, description = "Invalid slot configuration"),
        (status = 404, description = "Venue not found")
    )
)]
pub async fn create_turf(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    AppJson(data): AppJson<CreateTurf>,
) -> AppResult<(StatusCode, Json<Turf>)> {
    claims.require_admin()?;
    data.validate().map_err(validation_errors)?;
    let turf = state.services.catalog.create_turf(&data).await?;
    Ok((StatusCode::CREATED, Json(turf)))
}

/// Update a turf (admin)
#[utoipa::path(
    put,
    path = "/turfs/{id}",
    tag = "turfs",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Turf ID")),
    request_body = UpdateTurf,
    responses(
        (status = 200, description = "Turf updated", body = Turf),
        (status = 400, description = "Invalid slot configuration"),
        (status = 404, description = "Turf or venue not found")
    )
)]
pub async fn update_turf(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<i32>,
    AppJson(data): AppJson<UpdateTurf>,
) -> AppResult<Json<Turf>> {
    claims.require_admin()?;
    data.validate().map_err(validation_errors)?;
    let turf = state.services.catalog.update_turf(id, &data).await?;
    Ok(Json(turf))
}

/// Delete a turf (admin)
#[utoipa::path(
    delete,
    path = "/turfs/{id}",
    tag = "turfs",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Turf ID")),
    responses(
        (status = 200, description = "Turf deleted"),
        (status = 404, description = "Turf not found")
    )
)]
pub async fn delete_turf(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<i32>,
) -> AppResult<Json<serde_json::Value>> {
    claims.require_admin()?;
    state.services.catalog.delete_turf(id).await?;
    Ok(Json(serde_json::json!({ "message": "Turf deleted successfully" })))
}
