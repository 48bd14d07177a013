//! Booking model
//!
//! Bookings reference slots without a cascading foreign key: regenerating
//! a turf's slots deletes the old slot rows and leaves existing bookings
//! pointing at ids that no longer exist. This orphaning is a documented
//! hazard of the destructive regeneration flow, not something the booking
//! side repairs.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};

use super::enums::BookingStatus;
use super::slot::hhmm;

/// Booking model from database
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: i32,
    pub slot_id: i32,
    pub venue_id: i32,
    pub user_id: i32,
    pub booking_date: NaiveDate,
    pub status: BookingStatus,
    #[schema(value_type = f64)]
    pub total_amount: Decimal,
    pub created_at: DateTime<Utc>,
}

/// Booking with venue and slot details for list views.
///
/// Slot times are optional: they are resolved through a LEFT JOIN and come
/// back NULL for orphaned bookings whose slot was regenerated away.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookingDetails {
    pub id: i32,
    pub slot_id: i32,
    pub venue_id: i32,
    pub user_id: i32,
    pub booking_date: NaiveDate,
    pub status: BookingStatus,
    #[schema(value_type = f64)]
    pub total_amount: Decimal,
    pub created_at: DateTime<Utc>,
    pub venue_name: String,
    pub user_name: String,
    #[serde(with = "hhmm_opt")]
    #[schema(value_type = Option<String>, example = "06:00")]
    pub slot_start_time: Option<NaiveTime>,
    #[serde(with = "hhmm_opt")]
    #[schema(value_type = Option<String>, example = "07:00")]
    pub slot_end_time: Option<NaiveTime>,
}

/// Serialize/deserialize an optional `NaiveTime` as "HH:MM"
mod hhmm_opt {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        time: &Option<NaiveTime>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match time {
            Some(t) => super::hhmm::serialize(t, serializer),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<NaiveTime>, D::Error> {
        let s = Option::<String>::deserialize(deserializer)?;
        s.map(|s| {
            NaiveTime::parse_from_str(&s, "%H:%M").map_err(serde::de::Error::custom)
        })
        .transpose()
    }
}

/// Create booking request
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateBooking {
    pub slot_id: i32,
    pub venue_id: i32,
    /// Date (YYYY-MM-DD)
    pub booking_date: NaiveDate,
}

/// Query parameters for listing bookings (admin)
#[derive(Debug, Deserialize, IntoParams, ToSchema)]
pub struct BookingQuery {
    /// Filter by status
    pub status: Option<BookingStatus>,
    /// Filter by booking date (YYYY-MM-DD)
    pub date: Option<NaiveDate>,
}
