//! Catalog service: cities, venues and turfs
//!
//! Plain record management around the booking core. Mutations verify the
//! parent reference before writing.

use crate::{
    error::AppResult,
    models::{
        city::{City, CreateCity, UpdateCity},
        turf::{CreateTurf, Turf, TurfQuery, UpdateTurf},
        venue::{CreateVenue, UpdateVenue, Venue},
    },
    repository::Repository,
};

#[derive(Clone)]
pub struct CatalogService {
    repository: Repository,
}

impl CatalogService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    // ---- Cities ----

    pub async fn list_cities(&self) -> AppResult<Vec<City>> {
        self.repository.cities.list().await
    }

    pub async fn create_city(&self, data: &CreateCity) -> AppResult<City> {
        self.repository.cities.create(data).await
    }

    pub async fn update_city(&self, id: i32, data: &UpdateCity) -> AppResult<City> {
        self.repository.cities.update(id, data).await
    }

    pub async fn delete_city(&self, id: i32) -> AppResult<()> {
        self.repository.cities.delete(id).await
    }

    // ---- Venues ----

    pub async fn list_venues(&self, city_id: Option<i32>) -> AppResult<Vec<Venue>> {
        self.repository.venues.list(city_id).await
    }

    pub async fn get_venue(&self, id: i32) -> AppResult<Venue> {
        self.repository.venues.get_by_id(id).await
    }

    pub async fn create_venue(&self, data: &CreateVenue) -> AppResult<Venue> {
        // Verify city exists
        self.repository.cities.get_by_id(data.city_id).await?;
        self.repository.venues.create(data).await
    }

    pub async fn update_venue(&self, id: i32, data: &UpdateVenue) -> AppResult<Venue> {
        if let Some(city_id) = data.city_id {
            self.repository.cities.get_by_id(city_id).await?;
        }
        self.repository.venues.update(id, data).await
    }

    pub async fn delete_venue(&self, id: i32) -> AppResult<()> {
        self.repository.venues.delete(id).await
    }

    // ---- Turfs ----

    pub async fn list_turfs(&self, query: &TurfQuery) -> AppResult<Vec<Turf>> {
        self.repository.turfs.list(query).await
    }

    pub async fn get_turf(&self, id: i32) -> AppResult<Turf> {
        self.repository.turfs.get_by_id(id).await
    }

    pub async fn create_turf(&self, data: &CreateTurf) -> AppResult<Turf> {
        // Verify venue exists
        self.repository.venues.get_by_id(data.venue_id).await?;
        self.repository.turfs.create(data).await
    }

    pub async fn update_turf(&self, id: i32, data: &UpdateTurf) -> AppResult<Turf> {
        if let Some(venue_id) = data.venue_id {
            self.repository.venues.get_by_id(venue_id).await?;
        }
        self.repository.turfs.update(id, data).await
    }

    pub async fn delete_turf(&self, id: i32) -> AppResult<()> {
        self.repository.turfs.delete(id).await
    }
}
