// JWT issuance and verification

use chrono::Utc;
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, DecodingKey, EncodingKey, Header, Validation,
};
use serde::{Deserialize, Serialize};

use crate::auth::error::AuthError;

/// Session token lifetime: 24 hours
const TOKEN_DURATION_SECS: i64 = 86400;

/// JWT claims structure
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // user email
    pub iat: i64,    // issued at timestamp
    pub exp: i64,    // expiration timestamp
}

/// Token service for issuing and verifying signed session tokens
///
/// HS256 with a process-wide secret established at startup.
pub struct TokenService {
    secret: String,
}

impl TokenService {
    pub fn new(secret: String) -> Self {
        Self { secret }
    }

    /// Issue a signed, time-bounded token asserting the given identity
    pub fn issue(&self, email: &str) -> Result<String, AuthError> {
        let now = Utc::now().timestamp();

        let claims = Claims {
            sub: email.to_string(),
            iat: now,
            exp: now + TOKEN_DURATION_SECS,
        };

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )
        .map_err(|e| AuthError::TokenError(e.to_string()))
    }

    /// Verify a token, returning its claims
    ///
    /// Distinguishes an expired token from one that fails signature or
    /// structural validation.
    pub fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &Validation::default(),
        )
        .map(|data| data.claims)
        .map_err(|e| match e.kind() {
            ErrorKind::ExpiredSignature => AuthError::ExpiredToken,
            _ => AuthError::InvalidToken,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // Helper to create a test token service
    fn test_token_service() -> TokenService {
        TokenService::new("test_secret_key_for_testing_purposes".to_string())
    }

    #[test]
    fn test_token_expiration_is_24_hours() {
        let service = test_token_service();
        let token = service.issue("test@example.com").unwrap();
        let claims = service.verify(&token).unwrap();

        assert_eq!(claims.exp - claims.iat, 86400);
    }

    #[test]
    fn test_token_claims_contain_identity() {
        let service = test_token_service();
        let token = service.issue("user@example.com").unwrap();
        let claims = service.verify(&token).unwrap();

        assert_eq!(claims.sub, "user@example.com");
    }

    #[test]
    fn test_malformed_tokens_are_rejected() {
        let service = test_token_service();

        assert!(service.verify("").is_err());
        assert!(service.verify("not.a.token").is_err());
        assert!(service.verify("invalid_token_format").is_err());
        assert!(service
            .verify("eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9.invalid.signature")
            .is_err());
    }

    #[test]
    fn test_token_signature_verification() {
        let service1 = TokenService::new("secret1".to_string());
        let service2 = TokenService::new("secret2".to_string());

        let token = service1.issue("test@example.com").unwrap();

        assert!(service1.verify(&token).is_ok());
        // A different secret must reject the token
        assert!(matches!(
            service2.verify(&token),
            Err(AuthError::InvalidToken)
        ));
    }

    #[test]
    fn test_expired_token_is_reported_as_expired() {
        let service = test_token_service();
        let now = Utc::now().timestamp();

        let claims = Claims {
            sub: "test@example.com".to_string(),
            iat: now - 90000,
            exp: now - 3600,
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret("test_secret_key_for_testing_purposes".as_bytes()),
        )
        .unwrap();

        assert!(matches!(service.verify(&token), Err(AuthError::ExpiredToken)));
    }

    proptest! {
        #[test]
        fn prop_issued_tokens_verify_and_carry_identity(
            email in "[a-z]{3,10}@[a-z]{3,10}\\.(com|org|net)"
        ) {
            let service = test_token_service();
            let token = service.issue(&email)?;
            let claims = service.verify(&token)?;

            prop_assert_eq!(claims.sub, email);
            prop_assert_eq!(claims.exp - claims.iat, 86400);
        }

        #[test]
        fn prop_malformed_tokens_rejected(
            malformed in "[a-zA-Z0-9]{10,50}"
        ) {
            let service = test_token_service();
            prop_assert!(service.verify(&malformed).is_err());
        }
    }
}
