use std::sync::Arc;

use crate::core::error::{AppError, Result};
use crate::features::locations::dtos::{CreateLocationDto, LocationResponseDto};
use crate::features::locations::models::CreateLocation;
use crate::features::locations::repository::LocationRepository;
use crate::shared::constants::COORDINATE_SCALE;
use crate::shared::types::DeletedDto;

/// Service for location management
pub struct LocationService {
    repo: Arc<dyn LocationRepository>,
}

impl LocationService {
    pub fn new(repo: Arc<dyn LocationRepository>) -> Self {
        Self { repo }
    }

    pub async fn create(&self, dto: CreateLocationDto) -> Result<LocationResponseDto> {
        let data = CreateLocation {
            name: dto.name.trim().to_string(),
            latitude: dto.latitude.round_dp(COORDINATE_SCALE),
            longitude: dto.longitude.round_dp(COORDINATE_SCALE),
            country: dto.country.trim().to_string(),
        };

        let location = self.repo.insert(&data).await?;
        tracing::info!("Location created: id={}, name={}", location.id, location.name);

        Ok(location.into())
    }

    pub async fn get(&self, id: i64) -> Result<LocationResponseDto> {
        self.repo
            .find_by_id(id)
            .await?
            .map(|l| l.into())
            .ok_or_else(|| AppError::NotFound(format!("Location {} not found", id)))
    }

    pub async fn list(&self) -> Result<Vec<LocationResponseDto>> {
        let locations = self.repo.list().await?;
        Ok(locations.into_iter().map(|l| l.into()).collect())
    }

    pub async fn delete(&self, id: i64) -> Result<DeletedDto> {
        let deleted = self.repo.delete(id).await?;
        if deleted {
            tracing::info!("Location deleted (cascading to reports and contacts): id={}", id);
        }
        Ok(DeletedDto { id, deleted })
    }
}
