//! Repository layer for database operations

pub mod bookings;
pub mod cities;
pub mod slots;
pub mod turfs;
pub mod users;
pub mod venues;

use sqlx::{Pool, Postgres};

/// Main repository struct holding database connection pool
#[derive(Clone)]
pub struct Repository {
    pub pool: Pool<Postgres>,
    pub users: users::UsersRepository,
    pub cities: cities::CitiesRepository,
    pub venues: venues::VenuesRepository,
    pub turfs: turfs::TurfsRepository,
    pub slots: slots::SlotsRepository,
    pub bookings: bookings::BookingsRepository,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self {
            users: users::UsersRepository::new(pool.clone()),
            cities: cities::CitiesRepository::new(pool.clone()),
            venues: venues::VenuesRepository::new(pool.clone()),
            turfs: turfs::TurfsRepository::new(pool.clone()),
            slots: slots::SlotsRepository::new(pool.clone()),
            bookings: bookings::BookingsRepository::new(pool.clone()),
            pool,
        }
    }

    /// Round-trip a trivial query to verify the database is reachable
    pub async fn ping(&self) -> Result<(), sqlx::Error> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
