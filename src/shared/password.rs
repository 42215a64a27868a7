//! Credential hashing for staff accounts (Argon2id, PHC string format)

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHasher, SaltString},
    Argon2,
};

use crate::core::error::{AppError, Result};

/// Argon2 is CPU-bound, so hashing runs on the blocking pool
pub async fn hash_password(password: String) -> Result<String> {
    tokio::task::spawn_blocking(move || hash_password_blocking(&password))
        .await
        .map_err(|e| AppError::Internal(format!("Password hashing task failed: {e}")))?
}

fn hash_password_blocking(password: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AppError::Internal(format!("Failed to hash password: {e}")))
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use argon2::password_hash::{PasswordHash, PasswordVerifier};

    pub(crate) fn verify_password(password: &str, hash: &str) -> Result<bool> {
        let parsed_hash = PasswordHash::new(hash)
            .map_err(|e| AppError::Internal(format!("Invalid password hash format: {e}")))?;

        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok())
    }

    #[tokio::test]
    async fn test_hash_is_not_plaintext() {
        let hash = hash_password("storm-chaser-42".to_string()).await.unwrap();
        assert!(hash.starts_with("$argon2"));
        assert!(!hash.contains("storm-chaser-42"));
    }

    #[tokio::test]
    async fn test_verify_roundtrip() {
        let hash = hash_password("storm-chaser-42".to_string()).await.unwrap();
        assert!(verify_password("storm-chaser-42", &hash).unwrap());
        assert!(!verify_password("wrong", &hash).unwrap());
    }

    #[tokio::test(flavor = "current_thread")]
    async fn test_concurrent_hashes_use_distinct_salts() {
        let (first, second) = tokio::join!(
            hash_password("same-password".to_string()),
            hash_password("same-password".to_string())
        );
        let (first, second) = (first.unwrap(), second.unwrap());
        assert_ne!(first, second);
        assert!(verify_password("same-password", &first).unwrap());
        assert!(verify_password("same-password", &second).unwrap());
    }

    #[test]
    fn test_invalid_hash_format() {
        assert!(verify_password("password", "plaintext").is_err());
    }
}
