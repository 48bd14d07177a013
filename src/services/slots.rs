//! Slot lifecycle service
//!
//! Orchestrates grid generation and administrative slot mutations. The
//! canonical generation semantics: one request produces the full grid for
//! the requested window, replacing whatever slots previously existed for
//! that turf and date.

use chrono::NaiveDate;

use crate::{
    error::AppResult,
    models::{
        enums::SlotStatus,
        slot::{GenerateSlots, Slot, SlotWithTurf},
    },
    repository::Repository,
    timegrid,
};

#[derive(Clone)]
pub struct SlotsService {
    repository: Repository,
}

impl SlotsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// List slots for a turf on a date, sorted by start time
    pub async fn list_for_turf_date(
        &self,
        turf_id: i32,
        date: NaiveDate,
    ) -> AppResult<Vec<SlotWithTurf>> {
        self.repository.slots.list_for_turf_date(turf_id, date).await
    }

    /// Generate the slot grid for a turf on a date.
    ///
    /// Loads the turf's duration/buffer configuration, computes the grid,
    /// and replaces all existing slots for that turf+date. Existing
    /// bookings that referenced the replaced slots are orphaned; callers
    /// are expected to regenerate only before bookings open for the date.
    pub async fn generate(&self, request: &GenerateSlots) -> AppResult<Vec<Slot>> {
        let turf = self.repository.turfs.get_by_id(request.turf_id).await?;

        let start = timegrid::parse_hhmm(&request.start_time)?;
        let end = timegrid::parse_hhmm(&request.end_time)?;

        let grid = timegrid::generate(
            start,
            end,
            turf.slot_duration_minutes,
            turf.buffer_minutes,
        )?;

        let slots = self
            .repository
            .slots
            .replace_for_turf_date(request.turf_id, request.date, &grid)
            .await?;

        tracing::info!(
            turf_id = request.turf_id,
            date = %request.date,
            count = slots.len(),
            "Generated slot grid"
        );

        Ok(slots)
    }

    /// Administrative status override. Bypasses booking semantics: the new
    /// status is authoritative even if a confirmed booking references the
    /// slot.
    pub async fn update_status(
        &self,
        slot_id: i32,
        status: SlotStatus,
        blocked_by: Option<&str>,
    ) -> AppResult<Slot> {
        self.repository
            .slots
            .update_status(slot_id, status, blocked_by)
            .await
    }

    /// Delete a slot. Bookings referencing it are not cascaded.
    pub async fn delete(&self, slot_id: i32) -> AppResult<()> {
        self.repository.slots.delete(slot_id).await
    }
}
