//! Booking endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::booking::{Booking, BookingDetails, BookingQuery, CreateBooking},
};

use super::{AppJson, AuthenticatedUser};

/// Create a booking by claiming an available slot
#[utoipa::path(
    post,
    path = "/bookings",
    tag = "bookings",
    security(("bearer_auth" = [])),
    request_body = CreateBooking,
    responses(
        (status = 201, description = "Booking confirmed", body = Booking),
        (status = 404, description = "Slot or venue not found"),
        (status = 409, description = "Slot is not available")
    )
)]
pub async fn create_booking(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    AppJson(data): AppJson<CreateBooking>,
) -> AppResult<(StatusCode, Json<Booking>)> {
    let booking = state.services.bookings.create(claims.user_id, &data).await?;
    Ok((StatusCode::CREATED, Json(booking)))
}

/// List the authenticated user's bookings
#[utoipa::path(
    get,
    path = "/bookings/my",
    tag = "bookings",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "User's bookings", body = Vec<BookingDetails>)
    )
)]
pub async fn list_my_bookings(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
) -> AppResult<Json<Vec<BookingDetails>>> {
    let bookings = state.services.bookings.list_for_user(claims.user_id).await?;
    Ok(Json(bookings))
}

/// List all bookings with optional filters (admin)
#[utoipa::path(
    get,
    path = "/bookings",
    tag = "bookings",
    security(("bearer_auth" = [])),
    params(BookingQuery),
    responses(
        (status = 200, description = "All bookings", body = Vec<BookingDetails>)
    )
)]
pub async fn list_bookings(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Query(query): Query<BookingQuery>,
) -> AppResult<Json<Vec<BookingDetails>>> {
    claims.require_admin()?;
    let bookings = state.services.bookings.list_all(&query).await?;
    Ok(Json(bookings))
}

/// Cancel a booking (owner or admin)
#[utoipa::path(
    put,
    path = "/bookings/{id}/cancel",
    tag = "bookings",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Booking ID")),
    responses(
        (status = 200, description = "Booking cancelled", body = Booking),
        (status = 403, description = "Not the booking owner"),
        (status = 404, description = "Booking not found"),
        (status = 409, description = "Booking already cancelled or completed")
    )
)]
pub async fn cancel_booking(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<i32>,
) -> AppResult<Json<Booking>> {
    let booking = state.services.bookings.cancel(id, &claims).await?;
    Ok(Json(booking))
}
