use std::sync::Arc;

use chrono::Utc;

use crate::core::error::{AppError, Result};
use crate::features::report_statuses::dtos::{CreateReportStatusDto, ReportStatusResponseDto};
use crate::features::report_statuses::models::CreateReportStatus;
use crate::features::report_statuses::repository::ReportStatusRepository;
use crate::features::reports::ReportRepository;
use crate::features::users::UserRepository;

pub struct ReportStatusService {
    repo: Arc<dyn ReportStatusRepository>,
    reports: Arc<dyn ReportRepository>,
    users: Arc<dyn UserRepository>,
}

impl ReportStatusService {
    pub fn new(
        repo: Arc<dyn ReportStatusRepository>,
        reports: Arc<dyn ReportRepository>,
        users: Arc<dyn UserRepository>,
    ) -> Self {
        Self {
            repo,
            reports,
            users,
        }
    }

    async fn ensure_report(&self, report_id: i64) -> Result<()> {
        if !self.reports.exists(report_id).await? {
            return Err(AppError::NotFound(format!("Report {} not found", report_id)));
        }
        Ok(())
    }

    pub async fn list(&self, report_id: i64) -> Result<Vec<ReportStatusResponseDto>> {
        self.ensure_report(report_id).await?;

        let entries = self.repo.list_by_report(report_id).await?;
        Ok(entries.into_iter().map(|e| e.into()).collect())
    }

    /// Record a review entry; decisions are stamped with the current time
    pub async fn record(
        &self,
        report_id: i64,
        dto: CreateReportStatusDto,
    ) -> Result<ReportStatusResponseDto> {
        self.ensure_report(report_id).await?;

        if let Some(reviewer_id) = dto.reviewed_by_id {
            if self.users.find_by_id(reviewer_id).await?.is_none() {
                return Err(AppError::Validation(format!(
                    "reviewed_by_id: user {} does not exist",
                    reviewer_id
                )));
            }
        }

        let data = CreateReportStatus {
            report_id,
            status: dto.status,
            reviewed_by_id: dto.reviewed_by_id,
            review_timestamp: dto.status.is_decision().then(Utc::now),
        };

        let entry = self.repo.insert(&data).await?;
        tracing::info!(
            "Report status recorded: report_id={}, status={}",
            entry.report_id,
            entry.status
        );

        Ok(entry.into())
    }
}
