use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::features::users::models::User;

/// Request DTO for creating a user
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateUserDto {
    #[validate(
        length(min = 1, max = 100, message = "Username must be 1-100 characters"),
        regex(
            path = *crate::shared::validation::USERNAME_REGEX,
            message = "Username must start with letter or underscore and contain only alphanumeric characters and underscores"
        )
    )]
    pub username: String,

    #[validate(
        email(message = "Invalid email format"),
        length(max = 255, message = "Email must not exceed 255 characters")
    )]
    pub email: String,

    #[validate(length(min = 8, max = 128, message = "Password must be 8-128 characters"))]
    pub password: String,
}

/// Response DTO for user (never carries the credential)
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserResponseDto {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub join_date: DateTime<Utc>,
}

impl From<User> for UserResponseDto {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            username: u.username,
            email: u.email,
            join_date: u.join_date,
        }
    }
}

/// Entry for the submitter selection list on the report forms
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserOptionDto {
    pub id: i64,
    pub email: String,
}

impl From<User> for UserOptionDto {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            email: u.email,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fake::faker::internet::en::{Password, SafeEmail};
    use fake::Fake;

    #[test]
    fn test_generated_accounts_are_valid() {
        for _ in 0..20 {
            let dto = CreateUserDto {
                username: "field_agent".to_string(),
                email: SafeEmail().fake(),
                password: Password(8..64).fake(),
            };
            assert!(dto.validate().is_ok(), "rejected {:?}", dto.email);
        }
    }

    #[test]
    fn test_rejects_bad_username_email_and_short_password() {
        let dto = CreateUserDto {
            username: "9lives".to_string(),
            email: "nobody".to_string(),
            password: "short".to_string(),
        };

        let errors = dto.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("username"));
        assert!(fields.contains_key("email"));
        assert!(fields.contains_key("password"));
    }

    #[test]
    fn test_response_never_carries_password_hash() {
        let user = User {
            id: 7,
            username: "reviewer".to_string(),
            email: "reviewer@example.org".to_string(),
            password_hash: "$argon2id$v=19$secret".to_string(),
            join_date: Utc::now(),
        };

        let json = serde_json::to_string(&UserResponseDto::from(user)).unwrap();
        assert!(!json.contains("argon2"));
    }
}
