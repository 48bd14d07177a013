//! Business logic services

pub mod auth;
pub mod bookings;
pub mod catalog;
pub mod slots;

use crate::{config::AuthConfig, error::AppResult, repository::Repository};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub auth: auth::AuthService,
    pub catalog: catalog::CatalogService,
    pub slots: slots::SlotsService,
    pub bookings: bookings::BookingsService,
}

impl Services {
    /// Create all services with the given repository, seeding the
    /// bootstrap admin account if it is missing
    pub async fn new(repository: Repository, auth_config: AuthConfig) -> AppResult<Self> {
        let auth = auth::AuthService::new(repository.clone(), auth_config);
        auth.ensure_admin().await?;

        Ok(Self {
            auth,
            catalog: catalog::CatalogService::new(repository.clone()),
            slots: slots::SlotsService::new(repository.clone()),
            bookings: bookings::BookingsService::new(repository),
        })
    }
}
