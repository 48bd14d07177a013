//! Shared domain enums

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// ---------------------------------------------------------------------------
// SlotStatus
// ---------------------------------------------------------------------------

/// Slot availability state.
///
/// The status column is the mutual-exclusion flag for bookings: a slot can
/// be claimed by at most one confirmed booking, and only while AVAILABLE.
/// BLOCKED is an admin-only state that the booking flow never enters or
/// leaves on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "slot_status")]
#[serde(rename_all = "UPPERCASE")]
pub enum SlotStatus {
    #[sqlx(rename = "AVAILABLE")]
    Available,
    #[sqlx(rename = "BOOKED")]
    Booked,
    #[sqlx(rename = "BLOCKED")]
    Blocked,
}

impl std::fmt::Display for SlotStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            SlotStatus::Available => "AVAILABLE",
            SlotStatus::Booked => "BOOKED",
            SlotStatus::Blocked => "BLOCKED",
        };
        write!(f, "{}", label)
    }
}

// ---------------------------------------------------------------------------
// BookingStatus
// ---------------------------------------------------------------------------

/// Booking lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "booking_status")]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    #[sqlx(rename = "confirmed")]
    Confirmed,
    #[sqlx(rename = "cancelled")]
    Cancelled,
    #[sqlx(rename = "completed")]
    Completed,
}

impl std::fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::Cancelled => "cancelled",
            BookingStatus::Completed => "completed",
        };
        write!(f, "{}", label)
    }
}

// ---------------------------------------------------------------------------
// Role
// ---------------------------------------------------------------------------

/// User role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "user_role")]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[sqlx(rename = "user")]
    User,
    #[sqlx(rename = "admin")]
    Admin,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Role::User => "user",
            Role::Admin => "admin",
        };
        write!(f, "{}", label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slot_status_serializes_uppercase() {
        assert_eq!(serde_json::to_string(&SlotStatus::Available).unwrap(), "\"AVAILABLE\"");
        assert_eq!(serde_json::to_string(&SlotStatus::Booked).unwrap(), "\"BOOKED\"");
        assert_eq!(serde_json::to_string(&SlotStatus::Blocked).unwrap(), "\"BLOCKED\"");
    }

    #[test]
    fn booking_status_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&BookingStatus::Confirmed).unwrap(), "\"confirmed\"");
        assert_eq!(serde_json::to_string(&BookingStatus::Cancelled).unwrap(), "\"cancelled\"");
    }

    #[test]
    fn invalid_status_is_rejected_on_deserialize() {
        assert!(serde_json::from_str::<SlotStatus>("\"available\"").is_err());
        assert!(serde_json::from_str::<SlotStatus>("\"PENDING\"").is_err());
        assert!(serde_json::from_str::<BookingStatus>("\"CONFIRMED\"").is_err());
    }
}
