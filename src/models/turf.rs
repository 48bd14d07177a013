//! Turf model
//!
//! A turf carries the slot-generation configuration consumed by the slot
//! lifecycle: duration, buffer and hourly price. Generated slots capture
//! the duration at generation time and do not change retroactively when
//! the turf configuration is edited.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// Turf model from database, joined with venue and city names for display
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Turf {
    pub id: i32,
    pub venue_id: i32,
    pub name: String,
    pub sport_type: String,
    #[schema(value_type = f64, example = 1200.0)]
    pub price_per_hour: Decimal,
    pub slot_duration_minutes: i32,
    pub buffer_minutes: i32,
    pub is_active: bool,
    pub venue_name: String,
    pub city_name: String,
}

/// Create turf request
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateTurf {
    pub venue_id: i32,
    pub name: String,
    pub sport_type: String,
    #[schema(value_type = f64)]
    pub price_per_hour: Decimal,
    #[validate(range(min = 1, message = "slotDurationMinutes must be positive"))]
    pub slot_duration_minutes: i32,
    #[validate(range(min = 0, message = "bufferMinutes must be non-negative"))]
    #[serde(default)]
    pub buffer_minutes: i32,
}

/// Update turf request
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTurf {
    pub venue_id: Option<i32>,
    pub name: Option<String>,
    pub sport_type: Option<String>,
    #[schema(value_type = Option<f64>)]
    pub price_per_hour: Option<Decimal>,
    #[validate(range(min = 1, message = "slotDurationMinutes must be positive"))]
    pub slot_duration_minutes: Option<i32>,
    #[validate(range(min = 0, message = "bufferMinutes must be non-negative"))]
    pub buffer_minutes: Option<i32>,
    pub is_active: Option<bool>,
}

/// Query parameters for listing turfs
#[derive(Debug, Deserialize, IntoParams, ToSchema)]
pub struct TurfQuery {
    /// Filter by venue
    #[serde(rename = "venueId")]
    pub venue_id: Option<i32>,
    /// Filter by sport type
    #[serde(rename = "sportType")]
    pub sport_type: Option<String>,
}
