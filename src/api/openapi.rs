//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{auth, bookings, cities, health, slots, turfs, venues};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Turfbook API",
        version = "0.1.0",
        description = "Turf & Venue Booking Platform REST API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Auth
        auth::register,
        auth::login,
        auth::me,
        // Cities
        cities::list_cities,
        cities::create_city,
        cities::update_city,
        cities::delete_city,
        // Venues
        venues::list_venues,
        venues::get_venue,
        venues::create_venue,
        venues::update_venue,
        venues::delete_venue,
        // Turfs
        turfs::list_turfs,
        turfs::get_turf,
        turfs::create_turf,
        turfs::update_turf,
        turfs::delete_turf,
        // Slots
        slots::list_slots,
        slots::generate_slots,
        slots::update_slot,
        slots::delete_slot,
        // Bookings
        bookings::create_booking,
        bookings::list_my_bookings,
        bookings::list_bookings,
        bookings::cancel_booking,
    ),
    components(
        schemas(
            // Auth
            auth::RegisterRequest,
            auth::LoginRequest,
            auth::AuthResponse,
            crate::models::user::User,
            // Enums
            crate::models::enums::SlotStatus,
            crate::models::enums::BookingStatus,
            crate::models::enums::Role,
            // Cities
            crate::models::city::City,
            crate::models::city::CreateCity,
            crate::models::city::UpdateCity,
            // Venues
            crate::models::venue::Venue,
            crate::models::venue::CreateVenue,
            crate::models::venue::UpdateVenue,
            // Turfs
            crate::models::turf::Turf,
            crate::models::turf::CreateTurf,
            crate::models::turf::UpdateTurf,
            // Slots
            crate::models::slot::Slot,
            crate::models::slot::SlotWithTurf,
            crate::models::slot::GenerateSlots,
            crate::models::slot::UpdateSlotStatus,
            slots::SlotListResponse,
            slots::GenerateSlotsResponse,
            // Bookings
            crate::models::booking::Booking,
            crate::models::booking::BookingDetails,
            crate::models::booking::CreateBooking,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "auth", description = "Authentication endpoints"),
        (name = "cities", description = "City management"),
        (name = "venues", description = "Venue management"),
        (name = "turfs", description = "Turf management"),
        (name = "slots", description = "Slot generation and administration"),
        (name = "bookings", description = "Booking management")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
