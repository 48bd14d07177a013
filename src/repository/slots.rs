//! Slots repository: the persisted slot store
//!
//! Uniqueness of (turf_id, date, start_time) is enforced by a unique index;
//! a violation during regeneration means another generation ran
//! concurrently for the same turf and date and surfaces as Conflict.

use chrono::{NaiveDate, NaiveTime};
use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::{
        enums::SlotStatus,
        slot::{Slot, SlotWithTurf},
    },
    timegrid::Interval,
};

#[derive(Clone)]
pub struct SlotsRepository {
    pool: Pool<Postgres>,
}

impl SlotsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Get slot by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<Slot> {
        sqlx::query_as::<_, Slot>("SELECT * FROM slots WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Slot with id {} not found", id)))
    }

    /// List slots for a turf on a date, joined with the turf's name and
    /// price, ordered by ascending start time
    pub async fn list_for_turf_date(
        &self,
        turf_id: i32,
        date: NaiveDate,
    ) -> AppResult<Vec<SlotWithTurf>> {
        let slots = sqlx::query_as::<_, SlotWithTurf>(
            r#"
            SELECT s.id, s.turf_id, s.date, s.start_time, s.end_time,
                   s.status, s.blocked_by, t.name AS turf_name, t.price_per_hour
            FROM slots s
            JOIN turfs t ON s.turf_id = t.id
            WHERE s.turf_id = $1 AND s.date = $2
            ORDER BY s.start_time
            "#,
        )
        .bind(turf_id)
        .bind(date)
        .fetch_all(&self.pool)
        .await?;
        Ok(slots)
    }

    /// Replace all slots for a turf+date with a freshly generated grid.
    ///
    /// Destructive and non-additive: existing rows are deleted first, so
    /// bookings referencing them become orphaned. Delete and insert run in
    /// one transaction; a unique violation from a concurrent regeneration
    /// of the same turf+date aborts the whole batch as Conflict.
    pub async fn replace_for_turf_date(
        &self,
        turf_id: i32,
        date: NaiveDate,
        grid: &[Interval],
    ) -> AppResult<Vec<Slot>> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM slots WHERE turf_id = $1 AND date = $2")
            .bind(turf_id)
            .bind(date)
            .execute(&mut *tx)
            .await?;

        let starts: Vec<NaiveTime> = grid.iter().map(|i| i.start_time()).collect();
        let ends: Vec<NaiveTime> = grid.iter().map(|i| i.end_time()).collect();

        let slots = sqlx::query_as::<_, Slot>(
            r#"
            INSERT INTO slots (turf_id, date, start_time, end_time, status)
            SELECT $1, $2, g.start_time, g.end_time, 'AVAILABLE'::slot_status
            FROM UNNEST($3::time[], $4::time[]) AS g(start_time, end_time)
            RETURNING *
            "#,
        )
        .bind(turf_id)
        .bind(date)
        .bind(&starts)
        .bind(&ends)
        .fetch_all(&mut *tx)
        .await
        .map_err(|e| {
            AppError::from_unique_violation(e, "Concurrent slot generation for this turf and date")
        })?;

        tx.commit().await?;
        Ok(slots)
    }

    /// Administrative status override; no booking validation is applied
    pub async fn update_status(
        &self,
        id: i32,
        status: SlotStatus,
        blocked_by: Option<&str>,
    ) -> AppResult<Slot> {
        sqlx::query_as::<_, Slot>(
            "UPDATE slots SET status = $2, blocked_by = $3 WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(status)
        .bind(blocked_by)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Slot with id {} not found", id)))
    }

    /// Delete a slot. Does not cascade to bookings.
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM slots WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Slot with id {} not found", id)));
        }
        Ok(())
    }
}
