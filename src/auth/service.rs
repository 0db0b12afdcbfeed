// Authentication service - business logic layer

use std::sync::Arc;

use tokio::task;
use tracing::{debug, info};

use crate::auth::{
    error::AuthError,
    models::{AuthResponse, NewUser, UserResponse},
    password::PasswordService,
    repository::UserStore,
    token::{Claims, TokenService},
};

/// Authentication service coordinating the credential store, password
/// hasher and token issuer
pub struct AuthService {
    store: Arc<dyn UserStore>,
    tokens: TokenService,
}

impl AuthService {
    pub fn new(store: Arc<dyn UserStore>, tokens: TokenService) -> Self {
        Self { store, tokens }
    }

    /// Authenticate a user and issue a session token
    ///
    /// An unknown email and a wrong password both fail with
    /// `InvalidCredentials`; responses never reveal which one it was.
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthResponse, AuthError> {
        debug!("Login attempt");

        let user = self
            .store
            .find_by_email(email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        // Argon2 verification is CPU-bound; keep it off the async runtime
        let password = password.to_string();
        let hash = user.password_hash.clone();
        let verified = task::spawn_blocking(move || PasswordService::verify_password(&password, &hash))
            .await
            .map_err(|_| AuthError::PasswordHashError)??;

        if !verified {
            return Err(AuthError::InvalidCredentials);
        }

        let token = self.tokens.issue(&user.email)?;
        debug!("Login succeeded");

        Ok(AuthResponse::success(token, None))
    }

    /// Register a new user and issue a session token
    ///
    /// Fails with `EmailAlreadyExists` when the email is taken; nothing
    /// is persisted on any failure path. The store's uniqueness
    /// constraint covers the window between lookup and insert.
    pub async fn signup(
        &self,
        email: &str,
        name: &str,
        password: &str,
    ) -> Result<AuthResponse, AuthError> {
        debug!("Signup attempt");

        if self.store.find_by_email(email).await?.is_some() {
            return Err(AuthError::EmailAlreadyExists);
        }

        let plaintext = password.to_string();
        let password_hash = task::spawn_blocking(move || PasswordService::hash_password(&plaintext))
            .await
            .map_err(|_| AuthError::PasswordHashError)??;

        let user = self
            .store
            .create(NewUser {
                email: email.to_string(),
                name: name.to_string(),
                password_hash,
            })
            .await?;

        let token = self.tokens.issue(&user.email)?;
        info!("New user registered");

        Ok(AuthResponse::success(token, Some("User registered successfully")))
    }

    /// Look up the authenticated user's profile
    pub async fn current_user(&self, email: &str) -> Result<UserResponse, AuthError> {
        let user = self
            .store
            .find_by_email(email)
            .await?
            .ok_or(AuthError::InvalidToken)?;

        Ok(user.into())
    }

    /// Verify a session token, returning its claims
    pub fn verify_token(&self, token: &str) -> Result<Claims, AuthError> {
        self.tokens.verify(token)
    }
}
