//! Cities repository for database operations

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::city::{City, CreateCity, UpdateCity},
};

#[derive(Clone)]
pub struct CitiesRepository {
    pool: Pool<Postgres>,
}

impl CitiesRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List active cities, ordered by name
    pub async fn list(&self) -> AppResult<Vec<City>> {
        let cities = sqlx::query_as::<_, City>(
            "SELECT * FROM cities WHERE is_active ORDER BY name",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(cities)
    }

    /// Get city by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<City> {
        sqlx::query_as::<_, City>("SELECT * FROM cities WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("City with id {} not found", id)))
    }

    /// Create a city
    pub async fn create(&self, data: &CreateCity) -> AppResult<City> {
        sqlx::query_as::<_, City>(
            "INSERT INTO cities (name) VALUES ($1) RETURNING *",
        )
        .bind(&data.name)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::from_unique_violation(e, "City already exists"))
    }

    /// Update a city
    pub async fn update(&self, id: i32, data: &UpdateCity) -> AppResult<City> {
        sqlx::query_as::<_, City>(
            r#"
            UPDATE cities
            SET name = COALESCE($2, name),
                is_active = COALESCE($3, is_active)
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&data.name)
        .bind(data.is_active)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("City with id {} not found", id)))
    }

    /// Delete a city
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM cities WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("City with id {} not found", id)));
        }
        Ok(())
    }
}
