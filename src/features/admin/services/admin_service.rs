use std::sync::Arc;

use chrono::Utc;

use crate::core::error::{AppError, Result};
use crate::features::admin::dtos::{AdminReportDto, ReportOptionsDto, UpsertReportDto};
use crate::features::locations::LocationRepository;
use crate::features::reports::models::{ReportFields, ReportType};
use crate::features::reports::ReportRepository;
use crate::features::users::UserRepository;
use crate::shared::types::DeletedDto;

/// Service for back-office report management
pub struct ManageReportService {
    reports: Arc<dyn ReportRepository>,
    locations: Arc<dyn LocationRepository>,
    users: Arc<dyn UserRepository>,
}

impl ManageReportService {
    pub fn new(
        reports: Arc<dyn ReportRepository>,
        locations: Arc<dyn LocationRepository>,
        users: Arc<dyn UserRepository>,
    ) -> Self {
        Self {
            reports,
            locations,
            users,
        }
    }

    // =========================================================================
    // QUERIES
    // =========================================================================

    /// List reports with pagination, oldest first
    pub async fn list(&self, offset: i64, limit: i64) -> Result<(Vec<AdminReportDto>, i64)> {
        let (rows, total) = self.reports.list_details(offset, limit).await?;
        Ok((rows.into_iter().map(|r| r.into()).collect(), total))
    }

    pub async fn get(&self, id: i64) -> Result<AdminReportDto> {
        self.reports
            .find_detail(id)
            .await?
            .map(|r| r.into())
            .ok_or_else(|| AppError::NotFound(format!("Report {} not found", id)))
    }

    /// Selection lists for the create/edit forms
    pub async fn options(&self) -> Result<ReportOptionsDto> {
        let locations = self.locations.list().await?;
        let users = self.users.list().await?;

        Ok(ReportOptionsDto {
            locations: locations.into_iter().map(|l| l.into()).collect(),
            users: users.into_iter().map(|u| u.into()).collect(),
            report_types: ReportType::ALL.to_vec(),
        })
    }

    // =========================================================================
    // MUTATIONS
    // =========================================================================

    pub async fn create(&self, dto: UpsertReportDto) -> Result<AdminReportDto> {
        self.ensure_references(&dto).await?;

        let location_id = dto.location_id;
        let timestamp = dto.timestamp.unwrap_or_else(Utc::now);
        let report = self
            .reports
            .insert(location_id, &to_fields(dto, timestamp))
            .await?;
        tracing::info!("Report created by admin: id={}", report.id);

        self.get(report.id).await
    }

    /// Replace every field of a report.
    ///
    /// Fails with `Conflict` when the report changed since `row_version` was read.
    pub async fn update(&self, id: i64, dto: UpsertReportDto) -> Result<AdminReportDto> {
        let current = self
            .reports
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Report {} not found", id)))?;

        let expected_version = dto.row_version.ok_or_else(|| {
            AppError::Validation("row_version: required when replacing a report".to_string())
        })?;
        self.ensure_references(&dto).await?;

        let location_id = dto.location_id;
        let timestamp = dto.timestamp.unwrap_or(current.timestamp);
        let fields = to_fields(dto, timestamp);

        match self
            .reports
            .replace(id, location_id, expected_version, &fields)
            .await?
        {
            Some(report) => {
                tracing::info!(
                    "Report replaced: id={}, row_version={}",
                    report.id,
                    report.row_version
                );
                self.get(report.id).await
            }
            None if self.reports.exists(id).await? => {
                tracing::warn!(
                    "Report replace lost a concurrent update: id={}, expected row_version={}",
                    id,
                    expected_version
                );
                Err(AppError::Conflict(format!(
                    "Report {} was modified by someone else; reload and try again",
                    id
                )))
            }
            None => Err(AppError::NotFound(format!("Report {} not found", id))),
        }
    }

    /// Deleting an unknown id succeeds with `deleted: false`
    pub async fn delete(&self, id: i64) -> Result<DeletedDto> {
        let deleted = self.reports.delete(id).await?;
        if deleted {
            tracing::info!("Report deleted: id={}", id);
        }
        Ok(DeletedDto { id, deleted })
    }

    async fn ensure_references(&self, dto: &UpsertReportDto) -> Result<()> {
        if self.locations.find_by_id(dto.location_id).await?.is_none() {
            return Err(AppError::Validation(format!(
                "location_id: location {} does not exist",
                dto.location_id
            )));
        }

        if let Some(user_id) = dto.user_id {
            if self.users.find_by_id(user_id).await?.is_none() {
                return Err(AppError::Validation(format!(
                    "user_id: user {} does not exist",
                    user_id
                )));
            }
        }

        Ok(())
    }
}

fn to_fields(dto: UpsertReportDto, timestamp: chrono::DateTime<Utc>) -> ReportFields {
    ReportFields {
        user_id: dto.user_id,
        report_type: dto.report_type,
        category: dto.category,
        severity: dto.severity,
        magnitude: dto.magnitude,
        temperature: dto.temperature,
        humidity: dto.humidity,
        wind_speed: dto.wind_speed,
        precipitation: dto.precipitation,
        image_url: dto.image_url,
        is_active: dto.is_active,
        timestamp,
    }
}
