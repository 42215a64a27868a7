use async_trait::async_trait;
use sqlx::PgPool;

use crate::core::database::foreign_key_violation;
use crate::core::error::{AppError, Result};
use crate::features::contacts::models::{CreateContact, NonProfitContact};

/// Persistence seam for non-profit contacts
#[async_trait]
pub trait ContactRepository: Send + Sync {
    async fn insert(&self, data: &CreateContact) -> Result<NonProfitContact>;

    async fn list_by_location(&self, location_id: i64) -> Result<Vec<NonProfitContact>>;

    async fn delete(&self, id: i64) -> Result<bool>;
}

pub struct PgContactRepository {
    pool: PgPool,
}

impl PgContactRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ContactRepository for PgContactRepository {
    async fn insert(&self, data: &CreateContact) -> Result<NonProfitContact> {
        sqlx::query_as::<_, NonProfitContact>(
            r#"
            INSERT INTO non_profit_contacts (location_id, name, contact_email, phone, website)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, location_id, name, contact_email, phone, website
            "#,
        )
        .bind(data.location_id)
        .bind(&data.name)
        .bind(&data.contact_email)
        .bind(&data.phone)
        .bind(&data.website)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if foreign_key_violation(&e).is_some() {
                return AppError::NotFound(format!("Location {} not found", data.location_id));
            }
            tracing::error!("Failed to create contact: {:?}", e);
            AppError::Database(e)
        })
    }

    async fn list_by_location(&self, location_id: i64) -> Result<Vec<NonProfitContact>> {
        sqlx::query_as::<_, NonProfitContact>(
            r#"
            SELECT id, location_id, name, contact_email, phone, website
            FROM non_profit_contacts
            WHERE location_id = $1
            ORDER BY name
            "#,
        )
        .bind(location_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list contacts: {:?}", e);
            AppError::Database(e)
        })
    }

    async fn delete(&self, id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM non_profit_contacts WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete contact: {:?}", e);
                AppError::Database(e)
            })?;

        Ok(result.rows_affected() > 0)
    }
}
