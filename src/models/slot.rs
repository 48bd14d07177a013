//! Slot model
//!
//! Slots are stored with TIME columns and exposed as "HH:MM" strings at
//! the API boundary. The (turf, date, start_time) tuple is unique.

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};

use super::enums::SlotStatus;

/// Serialize/deserialize a `NaiveTime` as zero-padded "HH:MM"
pub mod hhmm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%H:%M";

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&time.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let s = String::deserialize(deserializer)?;
        NaiveTime::parse_from_str(&s, FORMAT).map_err(serde::de::Error::custom)
    }
}

/// Slot model from database
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Slot {
    pub id: i32,
    pub turf_id: i32,
    pub date: NaiveDate,
    #[serde(with = "hhmm")]
    #[schema(value_type = String, example = "06:00")]
    pub start_time: NaiveTime,
    #[serde(with = "hhmm")]
    #[schema(value_type = String, example = "07:00")]
    pub end_time: NaiveTime,
    pub status: SlotStatus,
    pub blocked_by: Option<String>,
}

/// Slot augmented with turf name and price for listing
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SlotWithTurf {
    pub id: i32,
    pub turf_id: i32,
    pub date: NaiveDate,
    #[serde(with = "hhmm")]
    #[schema(value_type = String, example = "06:00")]
    pub start_time: NaiveTime,
    #[serde(with = "hhmm")]
    #[schema(value_type = String, example = "07:00")]
    pub end_time: NaiveTime,
    pub status: SlotStatus,
    pub blocked_by: Option<String>,
    pub turf_name: String,
    #[schema(value_type = f64)]
    pub price_per_hour: Decimal,
}

/// Query parameters for listing slots; both are required at the handler
#[derive(Debug, Deserialize, IntoParams, ToSchema)]
pub struct SlotQuery {
    #[serde(rename = "turfId")]
    pub turf_id: Option<i32>,
    /// Date (YYYY-MM-DD)
    pub date: Option<NaiveDate>,
}

/// Slot generation request
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GenerateSlots {
    pub turf_id: i32,
    /// Date (YYYY-MM-DD)
    pub date: NaiveDate,
    /// Window start (HH:MM)
    pub start_time: String,
    /// Window end (HH:MM)
    pub end_time: String,
}

/// Admin slot status override.
///
/// Bypasses booking semantics entirely: no validation against in-flight
/// bookings is performed, the new status is authoritative.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSlotStatus {
    pub status: SlotStatus,
    pub blocked_by: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn slot_times_serialize_as_hhmm() {
        let slot = Slot {
            id: 1,
            turf_id: 2,
            date: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
            start_time: NaiveTime::from_hms_opt(6, 0, 0).unwrap(),
            end_time: NaiveTime::from_hms_opt(7, 0, 0).unwrap(),
            status: SlotStatus::Available,
            blocked_by: None,
        };
        let json = serde_json::to_value(&slot).unwrap();
        assert_eq!(json["startTime"], "06:00");
        assert_eq!(json["endTime"], "07:00");
        assert_eq!(json["status"], "AVAILABLE");
        assert_eq!(json["date"], "2025-06-01");
    }

    #[test]
    fn slot_times_deserialize_from_hhmm() {
        let slot: Slot = serde_json::from_value(serde_json::json!({
            "id": 1,
            "turfId": 2,
            "date": "2025-06-01",
            "startTime": "18:30",
            "endTime": "19:30",
            "status": "BOOKED",
            "blockedBy": null
        }))
        .unwrap();
        assert_eq!(slot.start_time, NaiveTime::from_hms_opt(18, 30, 0).unwrap());
        assert_eq!(slot.status, SlotStatus::Booked);
    }
}
