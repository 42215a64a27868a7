use async_trait::async_trait;
use sqlx::PgPool;

use crate::core::database::foreign_key_violation;
use crate::core::error::{AppError, Result};
use crate::features::locations::models::{CreateLocation, Location};
use crate::features::reports::models::{Report, ReportDetail, ReportFields, ReportMarker};

const REPORT_COLUMNS: &str = "r.id, r.user_id, r.location_id, r.report_type, r.category, \
     r.severity, r.magnitude, r.temperature, r.humidity, r.wind_speed, r.precipitation, \
     r.image_url, r.is_active, r.timestamp, r.row_version";

/// Persistence seam for reports
#[async_trait]
pub trait ReportRepository: Send + Sync {
    /// Active reports joined with their location, ordered by id
    async fn list_active_markers(&self) -> Result<Vec<ReportMarker>>;

    /// Insert a location and a report referencing it atomically.
    /// Nothing is persisted if either insert fails.
    async fn create_with_location(
        &self,
        location: &CreateLocation,
        fields: &ReportFields,
    ) -> Result<ReportMarker>;

    async fn insert(&self, location_id: i64, fields: &ReportFields) -> Result<Report>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Report>>;

    async fn find_detail(&self, id: i64) -> Result<Option<ReportDetail>>;

    /// One page of reports ordered by id, with the total row count
    async fn list_details(&self, offset: i64, limit: i64) -> Result<(Vec<ReportDetail>, i64)>;

    /// Overwrite every field when the stored `row_version` still equals
    /// `expected_version`, bumping it by one. `None` when no row matched.
    async fn replace(
        &self,
        id: i64,
        location_id: i64,
        expected_version: i32,
        fields: &ReportFields,
    ) -> Result<Option<Report>>;

    async fn exists(&self, id: i64) -> Result<bool>;

    async fn delete(&self, id: i64) -> Result<bool>;
}

pub struct PgReportRepository {
    pool: PgPool,
}

impl PgReportRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn db_error(action: &str, e: sqlx::Error) -> AppError {
    tracing::error!("Failed to {}: {:?}", action, e);
    AppError::Database(e)
}

/// Like `db_error`, but a dangling location/user reference is a validation failure
fn write_error(action: &str, e: sqlx::Error) -> AppError {
    match foreign_key_violation(&e).as_deref() {
        Some("reports_location_id_fkey") => {
            tracing::warn!("Failed to {}: location vanished", action);
            AppError::Validation("location_id: location does not exist".to_string())
        }
        Some("reports_user_id_fkey") => {
            tracing::warn!("Failed to {}: user vanished", action);
            AppError::Validation("user_id: user does not exist".to_string())
        }
        _ => db_error(action, e),
    }
}

#[async_trait]
impl ReportRepository for PgReportRepository {
    async fn list_active_markers(&self) -> Result<Vec<ReportMarker>> {
        sqlx::query_as::<_, ReportMarker>(
            r#"
            SELECT r.id, r.category, r.severity, r.timestamp, l.latitude, l.longitude
            FROM reports r
            INNER JOIN locations l ON l.id = r.location_id
            WHERE r.is_active = TRUE
            ORDER BY r.id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_error("list report markers", e))
    }

    async fn create_with_location(
        &self,
        location: &CreateLocation,
        fields: &ReportFields,
    ) -> Result<ReportMarker> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| db_error("begin report transaction", e))?;

        let created = sqlx::query_as::<_, Location>(
            r#"
            INSERT INTO locations (name, latitude, longitude, country)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, latitude, longitude, country
            "#,
        )
        .bind(&location.name)
        .bind(location.latitude)
        .bind(location.longitude)
        .bind(&location.country)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| db_error("create report location", e))?;

        let report = bind_fields(
            sqlx::query_as::<_, Report>(&format!(
                r#"
                INSERT INTO reports AS r (
                    location_id, user_id, report_type, category, severity, magnitude,
                    temperature, humidity, wind_speed, precipitation, image_url,
                    is_active, timestamp
                )
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
                RETURNING {REPORT_COLUMNS}
                "#
            ))
            .bind(created.id),
            fields,
        )
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| write_error("create report", e))?;

        tx.commit()
            .await
            .map_err(|e| db_error("commit report transaction", e))?;

        Ok(ReportMarker {
            id: report.id,
            category: report.category,
            severity: report.severity,
            timestamp: report.timestamp,
            latitude: created.latitude,
            longitude: created.longitude,
        })
    }

    async fn insert(&self, location_id: i64, fields: &ReportFields) -> Result<Report> {
        bind_fields(
            sqlx::query_as::<_, Report>(&format!(
                r#"
                INSERT INTO reports AS r (
                    location_id, user_id, report_type, category, severity, magnitude,
                    temperature, humidity, wind_speed, precipitation, image_url,
                    is_active, timestamp
                )
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
                RETURNING {REPORT_COLUMNS}
                "#
            ))
            .bind(location_id),
            fields,
        )
        .fetch_one(&self.pool)
        .await
        .map_err(|e| write_error("create report", e))
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Report>> {
        sqlx::query_as::<_, Report>(&format!(
            "SELECT {REPORT_COLUMNS} FROM reports r WHERE r.id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| db_error("get report", e))
    }

    async fn find_detail(&self, id: i64) -> Result<Option<ReportDetail>> {
        sqlx::query_as::<_, ReportDetail>(&format!(
            r#"
            SELECT {REPORT_COLUMNS}, l.name AS location_name, u.email AS user_email
            FROM reports r
            INNER JOIN locations l ON l.id = r.location_id
            LEFT JOIN users u ON u.id = r.user_id
            WHERE r.id = $1
            "#
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| db_error("get report detail", e))
    }

    async fn list_details(&self, offset: i64, limit: i64) -> Result<(Vec<ReportDetail>, i64)> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM reports")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| db_error("count reports", e))?;

        let rows = sqlx::query_as::<_, ReportDetail>(&format!(
            r#"
            SELECT {REPORT_COLUMNS}, l.name AS location_name, u.email AS user_email
            FROM reports r
            INNER JOIN locations l ON l.id = r.location_id
            LEFT JOIN users u ON u.id = r.user_id
            ORDER BY r.id
            LIMIT $1 OFFSET $2
            "#
        ))
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_error("list reports", e))?;

        Ok((rows, total))
    }

    async fn replace(
        &self,
        id: i64,
        location_id: i64,
        expected_version: i32,
        fields: &ReportFields,
    ) -> Result<Option<Report>> {
        sqlx::query_as::<_, Report>(&format!(
            r#"
            UPDATE reports AS r SET
                location_id = $1,
                user_id = $2,
                report_type = $3,
                category = $4,
                severity = $5,
                magnitude = $6,
                temperature = $7,
                humidity = $8,
                wind_speed = $9,
                precipitation = $10,
                image_url = $11,
                is_active = $12,
                timestamp = $13,
                row_version = r.row_version + 1
            WHERE r.id = $14 AND r.row_version = $15
            RETURNING {REPORT_COLUMNS}
            "#
        ))
        .bind(location_id)
        .bind(fields.user_id)
        .bind(fields.report_type)
        .bind(&fields.category)
        .bind(&fields.severity)
        .bind(fields.magnitude)
        .bind(fields.temperature)
        .bind(fields.humidity)
        .bind(fields.wind_speed)
        .bind(fields.precipitation)
        .bind(&fields.image_url)
        .bind(fields.is_active)
        .bind(fields.timestamp)
        .bind(id)
        .bind(expected_version)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| write_error("update report", e))
    }

    async fn exists(&self, id: i64) -> Result<bool> {
        sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM reports WHERE id = $1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| db_error("check report", e))
    }

    async fn delete(&self, id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM reports WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("delete report", e))?;

        Ok(result.rows_affected() > 0)
    }
}

type ReportInsert<'q> =
    sqlx::query::QueryAs<'q, sqlx::Postgres, Report, sqlx::postgres::PgArguments>;

/// Binds parameters $2..$13 of the report INSERT statements
fn bind_fields<'q>(query: ReportInsert<'q>, fields: &'q ReportFields) -> ReportInsert<'q> {
    query
        .bind(fields.user_id)
        .bind(fields.report_type)
        .bind(&fields.category)
        .bind(&fields.severity)
        .bind(fields.magnitude)
        .bind(fields.temperature)
        .bind(fields.humidity)
        .bind(fields.wind_speed)
        .bind(fields.precipitation)
        .bind(&fields.image_url)
        .bind(fields.is_active)
        .bind(fields.timestamp)
}
