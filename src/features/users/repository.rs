use async_trait::async_trait;
use sqlx::PgPool;

use crate::core::database::unique_violation;
use crate::core::error::{AppError, Result};
use crate::features::users::models::{CreateUser, User};

/// Persistence seam for users
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Fails with `Conflict` when the username or email is taken
    async fn insert(&self, data: &CreateUser) -> Result<User>;

    async fn find_by_id(&self, id: i64) -> Result<Option<User>>;

    async fn list(&self) -> Result<Vec<User>>;

    /// Reports and reviews referencing the user keep existing with a null
    /// reference (ON DELETE SET NULL). Returns false when no row matched.
    async fn delete(&self, id: i64) -> Result<bool>;
}

pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn insert(&self, data: &CreateUser) -> Result<User> {
        sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (username, email, password_hash)
            VALUES ($1, $2, $3)
            RETURNING id, username, email, password_hash, join_date
            "#,
        )
        .bind(&data.username)
        .bind(&data.email)
        .bind(&data.password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match unique_violation(&e) {
            Some(constraint) if constraint.contains("email") => {
                AppError::Conflict(format!("Email '{}' is already registered", data.email))
            }
            Some(_) => {
                AppError::Conflict(format!("Username '{}' is already taken", data.username))
            }
            None => {
                tracing::error!("Failed to create user: {:?}", e);
                AppError::Database(e)
            }
        })
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, email, password_hash, join_date
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get user: {:?}", e);
            AppError::Database(e)
        })
    }

    async fn list(&self) -> Result<Vec<User>> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, email, password_hash, join_date
            FROM users
            ORDER BY email
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list users: {:?}", e);
            AppError::Database(e)
        })
    }

    async fn delete(&self, id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete user: {:?}", e);
                AppError::Database(e)
            })?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn account(username: &str, email: &str) -> CreateUser {
        CreateUser {
            username: username.to_string(),
            email: email.to_string(),
            password_hash: "$argon2id$placeholder".to_string(),
        }
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_duplicate_email_is_conflict(pool: PgPool) {
        let repo = PgUserRepository::new(pool);
        repo.insert(&account("ranger", "ranger@example.org"))
            .await
            .unwrap();

        let err = repo
            .insert(&account("ranger2", "ranger@example.org"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Conflict(msg) if msg.contains("Email")));
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_duplicate_username_is_conflict(pool: PgPool) {
        let repo = PgUserRepository::new(pool);
        repo.insert(&account("ranger", "ranger@example.org"))
            .await
            .unwrap();

        let err = repo
            .insert(&account("ranger", "other@example.org"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Conflict(msg) if msg.contains("Username")));
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_list_orders_by_email_and_delete_is_idempotent(pool: PgPool) {
        let repo = PgUserRepository::new(pool);
        let zed = repo.insert(&account("zed", "zed@example.org")).await.unwrap();
        repo.insert(&account("amy", "amy@example.org")).await.unwrap();

        let emails: Vec<String> = repo.list().await.unwrap().into_iter().map(|u| u.email).collect();
        assert_eq!(emails, vec!["amy@example.org", "zed@example.org"]);

        assert!(repo.delete(zed.id).await.unwrap());
        assert!(!repo.delete(zed.id).await.unwrap());
    }
}
