use std::sync::Arc;

use chrono::Utc;

use crate::core::config::IngestionConfig;
use crate::core::error::Result;
use crate::features::locations::models::CreateLocation;
use crate::features::reports::dtos::{CreateMapReportDto, ReportMarkerDto};
use crate::features::reports::models::{ReportFields, ReportType};
use crate::features::reports::repository::ReportRepository;
use crate::shared::constants::COORDINATE_SCALE;

/// Public report feed and map-click ingestion
pub struct ReportService {
    repo: Arc<dyn ReportRepository>,
    ingestion: IngestionConfig,
}

impl ReportService {
    pub fn new(repo: Arc<dyn ReportRepository>, ingestion: IngestionConfig) -> Self {
        Self { repo, ingestion }
    }

    /// Markers for every active report
    pub async fn list_active_markers(&self) -> Result<Vec<ReportMarkerDto>> {
        let markers = self.repo.list_active_markers().await?;
        Ok(markers.into_iter().map(|m| m.into()).collect())
    }

    /// Create a location at the clicked point and an active emergency report on it
    pub async fn create_report_from_click(
        &self,
        dto: CreateMapReportDto,
    ) -> Result<ReportMarkerDto> {
        let now = Utc::now();

        let location = CreateLocation {
            name: format!("Map Report @ {}", now.format("%Y-%m-%d %H:%M:%S UTC")),
            latitude: dto.latitude.round_dp(COORDINATE_SCALE),
            longitude: dto.longitude.round_dp(COORDINATE_SCALE),
            country: self.ingestion.default_country.clone(),
        };

        let fields = ReportFields {
            user_id: None,
            report_type: ReportType::Emergency,
            category: dto.category,
            severity: dto.severity,
            magnitude: None,
            temperature: None,
            humidity: None,
            wind_speed: None,
            precipitation: None,
            image_url: None,
            is_active: true,
            timestamp: now,
        };

        let marker = self.repo.create_with_location(&location, &fields).await?;
        tracing::info!(
            "Map report created: id={}, category={}",
            marker.id,
            marker.category
        );

        Ok(marker.into())
    }
}
