//! Venues repository for database operations

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::venue::{CreateVenue, UpdateVenue, Venue},
};

const VENUE_SELECT: &str = r#"
    SELECT v.id, v.city_id, v.name, v.address, v.is_active, c.name AS city_name
    FROM venues v
    JOIN cities c ON v.city_id = c.id
"#;

#[derive(Clone)]
pub struct VenuesRepository {
    pool: Pool<Postgres>,
}

impl VenuesRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List active venues, optionally filtered by city, ordered by name
    pub async fn list(&self, city_id: Option<i32>) -> AppResult<Vec<Venue>> {
        let query = format!(
            "{} WHERE v.is_active AND ($1::int IS NULL OR v.city_id = $1) ORDER BY v.name",
            VENUE_SELECT
        );
        let venues = sqlx::query_as::<_, Venue>(&query)
            .bind(city_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(venues)
    }

    /// Get venue by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<Venue> {
        let query = format!("{} WHERE v.id = $1", VENUE_SELECT);
        sqlx::query_as::<_, Venue>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Venue with id {} not found", id)))
    }

    /// Create a venue
    pub async fn create(&self, data: &CreateVenue) -> AppResult<Venue> {
        let id = sqlx::query_scalar::<_, i32>(
            "INSERT INTO venues (city_id, name, address) VALUES ($1, $2, $3) RETURNING id",
        )
        .bind(data.city_id)
        .bind(&data.name)
        .bind(&data.address)
        .fetch_one(&self.pool)
        .await?;

        self.get_by_id(id).await
    }

    /// Update a venue
    pub async fn update(&self, id: i32, data: &UpdateVenue) -> AppResult<Venue> {
        let updated = sqlx::query_scalar::<_, i32>(
            r#"
            UPDATE venues
            SET city_id = COALESCE($2, city_id),
                name = COALESCE($3, name),
                address = COALESCE($4, address),
                is_active = COALESCE($5, is_active)
            WHERE id = $1
            RETURNING id
            "#,
        )
        .bind(id)
        .bind(data.city_id)
        .bind(&data.name)
        .bind(&data.address)
        .bind(data.is_active)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Venue with id {} not found", id)))?;

        self.get_by_id(updated).await
    }

    /// Delete a venue
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM venues WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Venue with id {} not found", id)));
        }
        Ok(())
    }
}
