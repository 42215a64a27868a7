use async_trait::async_trait;
use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::features::locations::models::{CreateLocation, Location};

/// Persistence seam for locations
#[async_trait]
pub trait LocationRepository: Send + Sync {
    async fn insert(&self, data: &CreateLocation) -> Result<Location>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Location>>;

    async fn list(&self) -> Result<Vec<Location>>;

    /// Removes the location; its reports and contacts go with it (ON DELETE CASCADE).
    /// Returns false when no row matched.
    async fn delete(&self, id: i64) -> Result<bool>;
}

pub struct PgLocationRepository {
    pool: PgPool,
}

impl PgLocationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LocationRepository for PgLocationRepository {
    async fn insert(&self, data: &CreateLocation) -> Result<Location> {
        sqlx::query_as::<_, Location>(
            r#"
            INSERT INTO locations (name, latitude, longitude, country)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, latitude, longitude, country
            "#,
        )
        .bind(&data.name)
        .bind(data.latitude)
        .bind(data.longitude)
        .bind(&data.country)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to create location: {:?}", e);
            AppError::Database(e)
        })
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Location>> {
        sqlx::query_as::<_, Location>(
            r#"
            SELECT id, name, latitude, longitude, country
            FROM locations
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get location: {:?}", e);
            AppError::Database(e)
        })
    }

    async fn list(&self) -> Result<Vec<Location>> {
        sqlx::query_as::<_, Location>(
            r#"
            SELECT id, name, latitude, longitude, country
            FROM locations
            ORDER BY name, id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list locations: {:?}", e);
            AppError::Database(e)
        })
    }

    async fn delete(&self, id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM locations WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete location: {:?}", e);
                AppError::Database(e)
            })?;

        Ok(result.rows_affected() > 0)
    }
}
