//! Time-grid generation for bookable slots
//!
//! All arithmetic happens on integer minutes since midnight; "HH:MM"
//! strings exist only at the API boundary. The grid walks a cursor from
//! the window start, emitting fixed-duration intervals and skipping the
//! buffer between consecutive slots. A trailing interval that would
//! overrun the window is discarded, never truncated.

use chrono::{NaiveTime, Timelike};

use crate::error::{AppError, AppResult};

/// A half-open `[start, end)` interval in minutes since midnight
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interval {
    pub start: u32,
    pub end: u32,
}

impl Interval {
    /// Start of the interval as a time of day
    pub fn start_time(&self) -> NaiveTime {
        minutes_to_time(self.start)
    }

    /// End of the interval as a time of day
    pub fn end_time(&self) -> NaiveTime {
        minutes_to_time(self.end)
    }
}

/// Parse an "HH:MM" 24-hour string into minutes since midnight
pub fn parse_hhmm(s: &str) -> AppResult<u32> {
    let time = NaiveTime::parse_from_str(s, "%H:%M")
        .map_err(|_| AppError::Validation(format!("Invalid time '{}', expected HH:MM", s)))?;
    Ok(time.hour() * 60 + time.minute())
}

/// Format minutes since midnight as zero-padded "HH:MM"
pub fn format_hhmm(minutes: u32) -> String {
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

fn minutes_to_time(minutes: u32) -> NaiveTime {
    // Interval minutes never exceed the window end, which parse_hhmm caps
    // below 24:00
    NaiveTime::from_num_seconds_from_midnight_opt(minutes * 60, 0)
        .unwrap_or(NaiveTime::MIN)
}

/// Generate the ordered grid of non-overlapping slot intervals for a
/// booking window.
///
/// `start_minutes >= end_minutes` yields an empty grid. A non-positive
/// duration is rejected: the cursor would never advance and the loop
/// would not terminate.
pub fn generate(
    start_minutes: u32,
    end_minutes: u32,
    slot_duration_minutes: i32,
    buffer_minutes: i32,
) -> AppResult<Vec<Interval>> {
    if slot_duration_minutes <= 0 {
        return Err(AppError::InvalidConfiguration(format!(
            "Slot duration must be positive, got {}",
            slot_duration_minutes
        )));
    }
    if buffer_minutes < 0 {
        return Err(AppError::InvalidConfiguration(format!(
            "Buffer minutes must be non-negative, got {}",
            buffer_minutes
        )));
    }

    let duration = slot_duration_minutes as u32;
    let buffer = buffer_minutes as u32;

    let mut intervals = Vec::new();
    let mut cursor = start_minutes;

    while cursor < end_minutes {
        let next = cursor + duration;
        if next > end_minutes {
            // Partial trailing slot is discarded
            break;
        }
        intervals.push(Interval { start: cursor, end: next });
        // Buffer applies only between slots
        cursor = next + buffer;
    }

    Ok(intervals)
}
