//! Bookings repository for database operations
//!
//! The claim of a slot is a single conditional UPDATE checked through
//! `rows_affected`. Two concurrent booking attempts for the same slot race
//! safely: exactly one flips AVAILABLE to BOOKED, the other sees zero rows
//! and gets Conflict. A separate read-then-write would not be safe here.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::{
        booking::{Booking, BookingDetails},
        enums::{BookingStatus, SlotStatus},
    },
};

const BOOKING_DETAILS_SELECT: &str = r#"
    SELECT b.id, b.slot_id, b.venue_id, b.user_id, b.booking_date,
           b.status, b.total_amount, b.created_at,
           v.name AS venue_name, u.name AS user_name,
           s.start_time AS slot_start_time, s.end_time AS slot_end_time
    FROM bookings b
    JOIN venues v ON b.venue_id = v.id
    JOIN users u ON b.user_id = u.id
    LEFT JOIN slots s ON b.slot_id = s.id
"#;

#[derive(Clone)]
pub struct BookingsRepository {
    pool: Pool<Postgres>,
}

impl BookingsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Get booking by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<Booking> {
        sqlx::query_as::<_, Booking>("SELECT * FROM bookings WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Booking with id {} not found", id)))
    }

    /// Atomically claim a slot and create the confirmed booking.
    ///
    /// The conditional UPDATE and the INSERT commit together; if the claim
    /// affects zero rows the slot was taken (or blocked, or deleted) in the
    /// meantime and the transaction rolls back with Conflict.
    pub async fn create_with_claim(
        &self,
        user_id: i32,
        slot_id: i32,
        venue_id: i32,
        booking_date: NaiveDate,
        total_amount: Decimal,
    ) -> AppResult<Booking> {
        let mut tx = self.pool.begin().await?;

        let claimed = sqlx::query("UPDATE slots SET status = $1 WHERE id = $2 AND status = $3")
            .bind(SlotStatus::Booked)
            .bind(slot_id)
            .bind(SlotStatus::Available)
            .execute(&mut *tx)
            .await?;

        if claimed.rows_affected() == 0 {
            return Err(AppError::Conflict(
                "Slot is no longer available".to_string(),
            ));
        }

        let booking = sqlx::query_as::<_, Booking>(
            r#"
            INSERT INTO bookings (slot_id, venue_id, user_id, booking_date, status, total_amount)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(slot_id)
        .bind(venue_id)
        .bind(user_id)
        .bind(booking_date)
        .bind(BookingStatus::Confirmed)
        .bind(total_amount)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(booking)
    }

    /// Cancel a confirmed booking and release its slot.
    ///
    /// Both updates are conditional and run in one transaction: the booking
    /// flips only from confirmed to cancelled (a concurrent double-cancel
    /// loses with Conflict), and the slot reverts only from BOOKED. A slot
    /// that was regenerated away or admin-overridden is left alone and the
    /// reconciliation gap is logged.
    pub async fn cancel(&self, booking_id: i32) -> AppResult<Booking> {
        let mut tx = self.pool.begin().await?;

        let booking = sqlx::query_as::<_, Booking>(
            "UPDATE bookings SET status = $1 WHERE id = $2 AND status = $3 RETURNING *",
        )
        .bind(BookingStatus::Cancelled)
        .bind(booking_id)
        .bind(BookingStatus::Confirmed)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| {
            AppError::Conflict("Only confirmed bookings can be cancelled".to_string())
        })?;

        let released =
            sqlx::query("UPDATE slots SET status = $1 WHERE id = $2 AND status = $3")
                .bind(SlotStatus::Available)
                .bind(booking.slot_id)
                .bind(SlotStatus::Booked)
                .execute(&mut *tx)
                .await?;

        if released.rows_affected() == 0 {
            tracing::warn!(
                booking_id,
                slot_id = booking.slot_id,
                "Cancelled booking references a slot that is missing or no longer BOOKED, skipping release"
            );
        }

        tx.commit().await?;
        Ok(booking)
    }

    /// List bookings for a user, newest first
    pub async fn list_for_user(&self, user_id: i32) -> AppResult<Vec<BookingDetails>> {
        let sql = format!(
            "{} WHERE b.user_id = $1 ORDER BY b.created_at DESC",
            BOOKING_DETAILS_SELECT
        );
        let bookings = sqlx::query_as::<_, BookingDetails>(&sql)
            .bind(user_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(bookings)
    }

    /// List all bookings with optional status and date filters, newest first
    pub async fn list_all(
        &self,
        status: Option<BookingStatus>,
        date: Option<NaiveDate>,
    ) -> AppResult<Vec<BookingDetails>> {
        let sql = format!(
            r#"{}
            WHERE ($1::booking_status IS NULL OR b.status = $1)
              AND ($2::date IS NULL OR b.booking_date = $2)
            ORDER BY b.created_at DESC
            "#,
            BOOKING_DETAILS_SELECT
        );
        let bookings = sqlx::query_as::<_, BookingDetails>(&sql)
            .bind(status)
            .bind(date)
            .fetch_all(&self.pool)
            .await?;
        Ok(bookings)
    }
}
