//! Turfbook Booking Platform
//!
//! A Rust REST API server for a turf/venue booking platform: admins define
//! cities, venues, turfs and bookable time slots; users browse turfs and
//! reserve slots, with a status lifecycle keeping slot and booking state
//! consistent under concurrent access.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;
pub mod timegrid;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub repository: repository::Repository,
    pub services: Arc<services::Services>,
}
