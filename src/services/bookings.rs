//! Booking coordination service
//!
//! The only path allowed to move a slot between AVAILABLE and BOOKED. The
//! availability pre-check here gives precise errors (NotFound vs Conflict);
//! correctness rests on the repository's atomic conditional claim, which
//! re-checks under the transaction.

use rust_decimal::Decimal;

use crate::{
    error::{AppError, AppResult},
    models::{
        booking::{Booking, BookingDetails, BookingQuery, CreateBooking},
        enums::{BookingStatus, SlotStatus},
        user::UserClaims,
    },
    repository::Repository,
};

#[derive(Clone)]
pub struct BookingsService {
    repository: Repository,
}

impl BookingsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Create a booking by claiming a slot.
    ///
    /// Fails NotFound if the slot or venue is absent, Conflict if the slot
    /// is not AVAILABLE or if the atomic claim loses a race. On a lost
    /// race the caller should re-fetch availability, not retry blindly.
    pub async fn create(&self, user_id: i32, data: &CreateBooking) -> AppResult<Booking> {
        let slot = self.repository.slots.get_by_id(data.slot_id).await?;

        if slot.status != SlotStatus::Available {
            return Err(AppError::Conflict(format!(
                "Slot is {}, not available for booking",
                slot.status
            )));
        }

        self.repository.venues.get_by_id(data.venue_id).await?;
        let turf = self.repository.turfs.get_by_id(slot.turf_id).await?;

        // Amount is the hourly price prorated over the slot's actual length
        let duration_minutes = (slot.end_time - slot.start_time).num_minutes();
        let total_amount =
            turf.price_per_hour * Decimal::from(duration_minutes) / Decimal::from(60);

        let booking = self
            .repository
            .bookings
            .create_with_claim(user_id, data.slot_id, data.venue_id, data.booking_date, total_amount)
            .await?;

        tracing::info!(
            booking_id = booking.id,
            slot_id = data.slot_id,
            user_id,
            "Booking confirmed"
        );

        Ok(booking)
    }

    /// Cancel a booking. Only the booking owner or an admin may cancel,
    /// and only a confirmed booking; cancelled or completed bookings
    /// reject the transition with Conflict.
    pub async fn cancel(&self, booking_id: i32, actor: &UserClaims) -> AppResult<Booking> {
        let booking = self.repository.bookings.get_by_id(booking_id).await?;

        if booking.user_id != actor.user_id && !actor.is_admin() {
            return Err(AppError::Authorization(
                "Only the booking owner or an admin can cancel".to_string(),
            ));
        }

        if booking.status != BookingStatus::Confirmed {
            return Err(AppError::Conflict(format!(
                "Booking is already {}",
                booking.status
            )));
        }

        self.repository.bookings.cancel(booking_id).await
    }

    /// List bookings for a user
    pub async fn list_for_user(&self, user_id: i32) -> AppResult<Vec<BookingDetails>> {
        self.repository.bookings.list_for_user(user_id).await
    }

    /// List all bookings with optional filters (admin)
    pub async fn list_all(&self, query: &BookingQuery) -> AppResult<Vec<BookingDetails>> {
        self.repository
            .bookings
            .list_all(query.status, query.date)
            .await
    }
}
