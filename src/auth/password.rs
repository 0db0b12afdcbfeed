// Password hashing and verification using Argon2id

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::auth::error::AuthError;

/// Password service for hashing and verification
///
/// Both operations are CPU-bound; callers on the async runtime should
/// run them under `tokio::task::spawn_blocking`.
pub struct PasswordService;

impl PasswordService {
    /// Hash a password using Argon2id with a freshly generated salt
    pub fn hash_password(password: &str) -> Result<String, AuthError> {
        let salt = SaltString::generate(&mut OsRng);

        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|_| AuthError::PasswordHashError)
    }

    /// Verify a password against a stored hash
    ///
    /// Returns Ok(false) on a mismatch; Err is reserved for hashes that
    /// cannot be parsed at all.
    pub fn verify_password(password: &str, hash: &str) -> Result<bool, AuthError> {
        let parsed = PasswordHash::new(hash).map_err(|_| AuthError::PasswordHashError)?;

        match Argon2::default().verify_password(password.as_bytes(), &parsed) {
            Ok(()) => Ok(true),
            Err(argon2::password_hash::Error::Password) => Ok(false),
            Err(_) => Err(AuthError::PasswordHashError),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_then_verify_round_trip() {
        let hash = PasswordService::hash_password("password123").unwrap();

        assert!(PasswordService::verify_password("password123", &hash).unwrap());
        assert!(!PasswordService::verify_password("wrong", &hash).unwrap());
    }

    #[test]
    fn test_hash_is_salted_and_opaque() {
        let first = PasswordService::hash_password("password123").unwrap();
        let second = PasswordService::hash_password("password123").unwrap();

        // Random salt: two hashes of the same password differ
        assert_ne!(first, second);
        // The plaintext never appears in the encoded hash
        assert!(!first.contains("password123"));
    }

    #[test]
    fn test_verify_rejects_malformed_hash() {
        assert!(PasswordService::verify_password("password123", "not-a-phc-string").is_err());
    }
}
