//! Venue model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};

/// Venue model from database, joined with its city name for display
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Venue {
    pub id: i32,
    pub city_id: i32,
    pub name: String,
    pub address: String,
    pub is_active: bool,
    pub city_name: String,
}

/// Create venue request
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateVenue {
    pub city_id: i32,
    pub name: String,
    pub address: String,
}

/// Update venue request
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateVenue {
    pub city_id: Option<i32>,
    pub name: Option<String>,
    pub address: Option<String>,
    pub is_active: Option<bool>,
}

/// Query parameters for listing venues
#[derive(Debug, Deserialize, IntoParams, ToSchema)]
pub struct VenueQuery {
    /// Filter by city
    #[serde(rename = "cityId")]
    pub city_id: Option<i32>,
}
