use std::sync::Arc;

use crate::core::error::{AppError, Result};
use crate::features::contacts::dtos::{ContactResponseDto, CreateContactDto};
use crate::features::contacts::models::CreateContact;
use crate::features::contacts::repository::ContactRepository;
use crate::features::locations::LocationRepository;
use crate::shared::types::DeletedDto;

pub struct ContactService {
    repo: Arc<dyn ContactRepository>,
    locations: Arc<dyn LocationRepository>,
}

impl ContactService {
    pub fn new(repo: Arc<dyn ContactRepository>, locations: Arc<dyn LocationRepository>) -> Self {
        Self { repo, locations }
    }

    async fn ensure_location(&self, location_id: i64) -> Result<()> {
        if self.locations.find_by_id(location_id).await?.is_none() {
            return Err(AppError::NotFound(format!(
                "Location {} not found",
                location_id
            )));
        }
        Ok(())
    }

    pub async fn create(
        &self,
        location_id: i64,
        dto: CreateContactDto,
    ) -> Result<ContactResponseDto> {
        self.ensure_location(location_id).await?;

        let data = CreateContact {
            location_id,
            name: dto.name.trim().to_string(),
            contact_email: dto.contact_email.trim().to_string(),
            phone: non_empty(dto.phone),
            website: non_empty(dto.website),
        };

        let contact = self.repo.insert(&data).await?;
        tracing::info!(
            "Contact created: id={}, location_id={}",
            contact.id,
            contact.location_id
        );

        Ok(contact.into())
    }

    pub async fn list_for_location(&self, location_id: i64) -> Result<Vec<ContactResponseDto>> {
        self.ensure_location(location_id).await?;

        let contacts = self.repo.list_by_location(location_id).await?;
        Ok(contacts.into_iter().map(|c| c.into()).collect())
    }

    pub async fn delete(&self, id: i64) -> Result<DeletedDto> {
        let deleted = self.repo.delete(id).await?;
        Ok(DeletedDto { id, deleted })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::InMemoryStore;

    fn dto(name: &str) -> CreateContactDto {
        CreateContactDto {
            name: name.to_string(),
            contact_email: "help@example.org".to_string(),
            phone: Some("112".to_string()),
            website: None,
        }
    }

    #[tokio::test]
    async fn test_create_requires_existing_location() {
        let store = InMemoryStore::new();
        let service = ContactService::new(store.clone(), store);

        let err = service.create(77, dto("Red Crescent")).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_contacts_are_removed_with_location() {
        let store = InMemoryStore::new();
        let location = store.seed_location("Hatay", "36.2", "36.16");
        let service = ContactService::new(store.clone(), store.clone());

        service.create(location.id, dto("AFAD")).await.unwrap();
        assert_eq!(service.list_for_location(location.id).await.unwrap().len(), 1);

        LocationRepository::delete(store.as_ref(), location.id)
            .await
            .unwrap();
        assert_eq!(store.contact_count(), 0);
    }
}
