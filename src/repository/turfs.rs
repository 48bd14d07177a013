//! Turfs repository for database operations

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::turf::{CreateTurf, Turf, TurfQuery, UpdateTurf},
};

const TURF_SELECT: &str = r#"
    SELECT t.id, t.venue_id, t.name, t.sport_type, t.price_per_hour,
           t.slot_duration_minutes, t.buffer_minutes, t.is_active,
           v.name AS venue_name, c.name AS city_name
    FROM turfs t
    JOIN venues v ON t.venue_id = v.id
    JOIN cities c ON v.city_id = c.id
"#;

#[derive(Clone)]
pub struct TurfsRepository {
    pool: Pool<Postgres>,
}

impl TurfsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List active turfs, optionally filtered by venue and sport type,
    /// ordered by name
    pub async fn list(&self, query: &TurfQuery) -> AppResult<Vec<Turf>> {
        let sql = format!(
            r#"{}
            WHERE t.is_active
              AND ($1::int IS NULL OR t.venue_id = $1)
              AND ($2::text IS NULL OR t.sport_type = $2)
            ORDER BY t.name
            "#,
            TURF_SELECT
        );
        let turfs = sqlx::query_as::<_, Turf>(&sql)
            .bind(query.venue_id)
            .bind(&query.sport_type)
            .fetch_all(&self.pool)
            .await?;
        Ok(turfs)
    }

    /// Get turf by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<Turf> {
        let sql = format!("{} WHERE t.id = $1", TURF_SELECT);
        sqlx::query_as::<_, Turf>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Turf with id {} not found", id)))
    }

    /// Create a turf
    pub async fn create(&self, data: &CreateTurf) -> AppResult<Turf> {
        let id = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO turfs (venue_id, name, sport_type, price_per_hour,
                               slot_duration_minutes, buffer_minutes)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id
            "#,
        )
        .bind(data.venue_id)
        .bind(&data.name)
        .bind(&data.sport_type)
        .bind(data.price_per_hour)
        .bind(data.slot_duration_minutes)
        .bind(data.buffer_minutes)
        .fetch_one(&self.pool)
        .await?;

        self.get_by_id(id).await
    }

    /// Update a turf. Existing slots keep the duration they were generated
    /// with; only future generations see the new configuration.
    pub async fn update(&self, id: i32, data: &UpdateTurf) -> AppResult<Turf> {
        let updated = sqlx::query_scalar::<_, i32>(
            r#"
            UPDATE turfs
            SET venue_id = COALESCE($2, venue_id),
                name = COALESCE($3, name),
                sport_type = COALESCE($4, sport_type),
                price_per_hour = COALESCE($5, price_per_hour),
                slot_duration_minutes = COALESCE($6, slot_duration_minutes),
                buffer_minutes = COALESCE($7, buffer_minutes),
                is_active = COALESCE($8, is_active)
            WHERE id = $1
            RETURNING id
            "#,
        )
        .bind(id)
        .bind(data.venue_id)
        .bind(&data.name)
        .bind(&data.sport_type)
        .bind(data.price_per_hour)
        .bind(data.slot_duration_minutes)
        .bind(data.buffer_minutes)
        .bind(data.is_active)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Turf with id {} not found", id)))?;

        self.get_by_id(updated).await
    }

    /// Delete a turf
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM turfs WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Turf with id {} not found", id)));
        }
        Ok(())
    }
}
