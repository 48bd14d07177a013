//! City endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::city::{City, CreateCity, UpdateCity},
};

use super::{AppJson, AuthenticatedUser};

/// List cities
#[utoipa::path(
    get,
    path = "/cities",
    tag = "cities",
    responses(
        (status = 200, description = "Active cities", body = Vec<City>)
    )
)]
pub async fn list_cities(State(state): State<crate::AppState>) -> AppResult<Json<Vec<City>>> {
    let cities = state.services.catalog.list_cities().await?;
    Ok(Json(cities))
}

/// Create a city (admin)
#[utoipa::path(
    post,
    path = "/cities",
    tag = "cities",
    security(("bearer_auth" = [])),
    request_body = CreateCity,
    responses(
        (status = 201, description = "City created", body = City),
        (status = 409, description = "City already exists")
    )
)]
pub async fn create_city(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    AppJson(data): AppJson<CreateCity>,
) -> AppResult<(StatusCode, Json<City>)> {
    claims.require_admin()?;
    let city = state.services.catalog.create_city(&data).await?;
    Ok((StatusCode::CREATED, Json(city)))
}

/// Update a city (admin)
#[utoipa::path(
    put,
    path = "/cities/{id}",
    tag = "cities",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "City ID")),
    request_body = UpdateCity,
    responses(
        (status = 200, description = "City updated", body = City),
        (status = 404, description = "City not found")
    )
)]
pub async fn update_city(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<i32>,
    AppJson(data): AppJson<UpdateCity>,
) -> AppResult<Json<City>> {
    claims.require_admin()?;
    let city = state.services.catalog.update_city(id, &data).await?;
    Ok(Json(city))
}

/// Delete a city (admin)
#[utoipa::path(
    delete,
    path = "/cities/{id}",
    tag = "cities",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "City ID")),
    responses(
        (status = 200, description = "City deleted"),
        (status = 404, description = "City not found")
    )
)]
pub async fn delete_city(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<i32>,
) -> AppResult<Json<serde_json::Value>> {
    claims.require_admin()?;
    state.services.catalog.delete_city(id).await?;
    Ok(Json(serde_json::json!({ "message": "City deleted successfully" })))
}
