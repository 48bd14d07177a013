//! Venue endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::venue::{CreateVenue, UpdateVenue, Venue, VenueQuery},
};

use super::{AppJson, AuthenticatedUser};

/// List venues, optionally filtered by city
#[utoipa::path(
    get,
    path = "/venues",
    tag = "venues",
    params(VenueQuery),
    responses(
        (status = 200, description = "Active venues", body = Vec<Venue>)
    )
)]
pub async fn list_venues(
    State(state): State<crate::AppState>,
    Query(query): Query<VenueQuery>,
) -> AppResult<Json<Vec<Venue>>> {
    let venues = state.services.catalog.list_venues(query.city_id).await?;
    Ok(Json(venues))
}

/// Get a venue by ID
#[utoipa::path(
    get,
    path = "/venues/{id}",
    tag = "venues",
    params(("id" = i32, Path, description = "Venue ID")),
    responses(
        (status = 200, description = "Venue", body = Venue),
        (status = 404, description = "Venue not found")
    )
)]
pub async fn get_venue(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Venue>> {
    let venue = state.services.catalog.get_venue(id).await?;
    Ok(Json(venue))
}

/// Create a venue (admin)
#[utoipa::path(
    post,
    path = "/venues",
    tag = "venues",
    security(("bearer_auth" = [])),
    request_body = CreateVenue,
    responses(
        (status = 201, description = "Venue created", body = Venue),
        (status = 404, description = "City not found")
    )
)]
pub async fn create_venue(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    AppJson(data): AppJson<CreateVenue>,
) -> AppResult<(StatusCode, Json<Venue>)> {
    claims.require_admin()?;
    let venue = state.services.catalog.create_venue(&data).await?;
    Ok((StatusCode::CREATED, Json(venue)))
}

/// Update a venue (admin)
#[utoipa::path(
    put,
    path = "/venues/{id}",
    tag = "venues",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Venue ID")),
    request_body = UpdateVenue,
    responses(
        (status = 200, description = "Venue updated", body = Venue),
        (status = 404, description = "Venue or city not found")
    )
)]
pub async fn update_venue(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<i32>,
    AppJson(data): AppJson<UpdateVenue>,
) -> AppResult<Json<Venue>> {
    claims.require_admin()?;
    let venue = state.services.catalog.update_venue(id, &data).await?;
    Ok(Json(venue))
}

/// Delete a venue (admin)
#[utoipa::path(
    delete,
    path = "/venues/{id}",
    tag = "venues",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Venue ID")),
    responses(
        (status = 200, description = "Venue deleted"),
        (status = 404, description = "Venue not found")
    )
)]
pub async fn delete_venue(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<i32>,
) -> AppResult<Json<serde_json::Value>> {
    claims.require_admin()?;
    state.services.catalog.delete_venue(id).await?;
    Ok(Json(serde_json::json!({ "message": "Venue deleted successfully" })))
}
