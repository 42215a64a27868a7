use async_trait::async_trait;
use sqlx::PgPool;

use crate::core::database::foreign_key_violation;
use crate::core::error::{AppError, Result};
use crate::features::report_statuses::models::{CreateReportStatus, ReportStatusEntry};

/// Persistence seam for report status history
#[async_trait]
pub trait ReportStatusRepository: Send + Sync {
    async fn insert(&self, data: &CreateReportStatus) -> Result<ReportStatusEntry>;

    /// Oldest entry first
    async fn list_by_report(&self, report_id: i64) -> Result<Vec<ReportStatusEntry>>;
}

pub struct PgReportStatusRepository {
    pool: PgPool,
}

impl PgReportStatusRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReportStatusRepository for PgReportStatusRepository {
    async fn insert(&self, data: &CreateReportStatus) -> Result<ReportStatusEntry> {
        sqlx::query_as::<_, ReportStatusEntry>(
            r#"
            INSERT INTO report_statuses (report_id, status, reviewed_by_id, review_timestamp)
            VALUES ($1, $2, $3, $4)
            RETURNING id, report_id, status, reviewed_by_id, review_timestamp
            "#,
        )
        .bind(data.report_id)
        .bind(data.status)
        .bind(data.reviewed_by_id)
        .bind(data.review_timestamp)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match foreign_key_violation(&e).as_deref() {
            Some("report_statuses_report_id_fkey") => {
                AppError::NotFound(format!("Report {} not found", data.report_id))
            }
            Some("report_statuses_reviewed_by_id_fkey") => {
                AppError::Validation("reviewed_by_id: user does not exist".to_string())
            }
            _ => {
                tracing::error!("Failed to create report status: {:?}", e);
                AppError::Database(e)
            }
        })
    }

    async fn list_by_report(&self, report_id: i64) -> Result<Vec<ReportStatusEntry>> {
        sqlx::query_as::<_, ReportStatusEntry>(
            r#"
            SELECT id, report_id, status, reviewed_by_id, review_timestamp
            FROM report_statuses
            WHERE report_id = $1
            ORDER BY id
            "#,
        )
        .bind(report_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list report statuses: {:?}", e);
            AppError::Database(e)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::locations::models::CreateLocation;
    use crate::features::locations::{LocationRepository, PgLocationRepository};
    use crate::features::report_statuses::models::ReportStatusValue;
    use crate::features::reports::models::{ReportFields, ReportType};
    use crate::features::reports::{PgReportRepository, ReportRepository};
    use crate::features::users::models::CreateUser;
    use crate::features::users::{PgUserRepository, UserRepository};
    use chrono::Utc;
    use rust_decimal::Decimal;

    async fn seed_report(pool: &PgPool) -> i64 {
        let location = PgLocationRepository::new(pool.clone())
            .insert(&CreateLocation {
                name: "Van".to_string(),
                latitude: Decimal::new(385_012, 4),
                longitude: Decimal::new(433_729, 4),
                country: "Turkey".to_string(),
            })
            .await
            .unwrap();

        PgReportRepository::new(pool.clone())
            .insert(
                location.id,
                &ReportFields {
                    user_id: None,
                    report_type: ReportType::Disaster,
                    category: "Earthquake".to_string(),
                    severity: None,
                    magnitude: None,
                    temperature: None,
                    humidity: None,
                    wind_speed: None,
                    precipitation: None,
                    image_url: None,
                    is_active: true,
                    timestamp: Utc::now(),
                },
            )
            .await
            .unwrap()
            .id
    }

    fn review(report_id: i64, reviewed_by_id: Option<i64>) -> CreateReportStatus {
        CreateReportStatus {
            report_id,
            status: ReportStatusValue::Approved,
            reviewed_by_id,
            review_timestamp: Some(Utc::now()),
        }
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_reviewer_delete_keeps_history(pool: PgPool) {
        let repo = PgReportStatusRepository::new(pool.clone());
        let report_id = seed_report(&pool).await;
        let users = PgUserRepository::new(pool.clone());
        let reviewer = users
            .insert(&CreateUser {
                username: "reviewer".to_string(),
                email: "reviewer@example.org".to_string(),
                password_hash: "$argon2id$placeholder".to_string(),
            })
            .await
            .unwrap();

        repo.insert(&review(report_id, Some(reviewer.id))).await.unwrap();
        assert!(users.delete(reviewer.id).await.unwrap());

        let history = repo.list_by_report(report_id).await.unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].status, ReportStatusValue::Approved);
        assert_eq!(history[0].reviewed_by_id, None);
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_report_delete_removes_history(pool: PgPool) {
        let repo = PgReportStatusRepository::new(pool.clone());
        let report_id = seed_report(&pool).await;
        repo.insert(&review(report_id, None)).await.unwrap();

        assert!(PgReportRepository::new(pool.clone())
            .delete(report_id)
            .await
            .unwrap());
        assert!(repo.list_by_report(report_id).await.unwrap().is_empty());
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_dangling_references_map_to_client_errors(pool: PgPool) {
        let repo = PgReportStatusRepository::new(pool.clone());

        let err = repo.insert(&review(55_555, None)).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));

        let report_id = seed_report(&pool).await;
        let err = repo
            .insert(&review(report_id, Some(66_666)))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(msg) if msg.starts_with("reviewed_by_id")));
    }
}
