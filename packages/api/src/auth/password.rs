//! # Password hashing and verification with Argon2id
//!
//! - [`hash_password`] salts with [`OsRng`] and returns a PHC string
//!   (`$argon2id$v=19$m=19456,t=2,p=1$...`) for the `users.password_hash` column.
//! - [`verify_password`] checks a plaintext against a stored PHC string.
//!   A malformed stored hash is an error rather than a mismatch.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::error::ApiError;

pub fn hash_password(password: &str) -> Result<String, ApiError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| ApiError::Password(format!("Failed to hash password: {}", e)))
}

pub fn verify_password(password: &str, hash: &str) -> Result<bool, ApiError> {
    let parsed = PasswordHash::new(hash)
        .map_err(|e| ApiError::Password(format!("Invalid password hash: {}", e)))?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_then_verify() {
        let hash = hash_password("Maria123!").unwrap();
        assert!(hash.starts_with("$argon2id$"));
        assert!(verify_password("Maria123!", &hash).unwrap());
        assert!(!verify_password("maria123!", &hash).unwrap());
    }

    #[test]
    fn salts_differ() {
        assert_ne!(
            hash_password("same").unwrap(),
            hash_password("same").unwrap()
        );
    }

    #[test]
    fn malformed_hash_is_an_error() {
        assert!(verify_password("x", "not-a-phc-string").is_err());
    }
}
