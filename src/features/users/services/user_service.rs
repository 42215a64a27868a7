use std::sync::Arc;

use crate::core::error::{AppError, Result};
use crate::features::users::dtos::{CreateUserDto, UserResponseDto};
use crate::features::users::models::CreateUser;
use crate::features::users::repository::UserRepository;
use crate::shared::password::hash_password;
use crate::shared::types::DeletedDto;

/// Service for user account management
pub struct UserService {
    repo: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }

    pub async fn create(&self, dto: CreateUserDto) -> Result<UserResponseDto> {
        let data = CreateUser {
            username: dto.username,
            email: dto.email.trim().to_lowercase(),
            password_hash: hash_password(dto.password).await?,
        };

        let user = self.repo.insert(&data).await?;
        tracing::info!("User created: id={}, username={}", user.id, user.username);

        Ok(user.into())
    }

    pub async fn get(&self, id: i64) -> Result<UserResponseDto> {
        self.repo
            .find_by_id(id)
            .await?
            .map(|u| u.into())
            .ok_or_else(|| AppError::NotFound(format!("User {} not found", id)))
    }

    pub async fn list(&self) -> Result<Vec<UserResponseDto>> {
        let users = self.repo.list().await?;
        Ok(users.into_iter().map(|u| u.into()).collect())
    }

    pub async fn delete(&self, id: i64) -> Result<DeletedDto> {
        let deleted = self.repo.delete(id).await?;
        if deleted {
            tracing::info!("User deleted: id={}", id);
        }
        Ok(DeletedDto { id, deleted })
    }
}
