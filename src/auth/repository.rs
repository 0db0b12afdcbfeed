// Credential store: user lookup and insert, keyed by email

use async_trait::async_trait;
use sqlx::PgPool;

use crate::auth::{
    error::AuthError,
    models::{NewUser, User},
};

/// Persistence seam for user records
///
/// Injected into the auth service so the workflow is independent of the
/// backing store. Implementations must enforce email uniqueness at the
/// storage layer: a check-then-insert without a constraint is racy, so
/// `create` itself reports `EmailAlreadyExists` for the losing writer.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Find a user by email, or None if absent
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AuthError>;

    /// Insert a new user record
    async fn create(&self, user: NewUser) -> Result<User, AuthError>;
}

/// PostgreSQL-backed user store
pub struct PgUserStore {
    pool: PgPool,
}

impl PgUserStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    /// Find a user by email (case-insensitive)
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AuthError> {
        let user = sqlx::query_as::<_, User>(
            "SELECT email, name, password_hash, created_at FROM users WHERE LOWER(email) = LOWER($1)"
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AuthError::DatabaseError(e.to_string()))?;

        Ok(user)
    }

    async fn create(&self, new_user: NewUser) -> Result<User, AuthError> {
        let user = sqlx::query_as::<_, User>(
            "INSERT INTO users (email, name, password_hash) VALUES ($1, $2, $3) RETURNING email, name, password_hash, created_at"
        )
        .bind(&new_user.email)
        .bind(&new_user.name)
        .bind(&new_user.password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            // The primary key plus the unique index on LOWER(email) turn
            // the concurrent-signup race into a unique violation for the
            // losing insert, including case-variant duplicates
            if let sqlx::Error::Database(db_err) = &e {
                if db_err.is_unique_violation() {
                    return AuthError::EmailAlreadyExists;
                }
            }
            AuthError::DatabaseError(e.to_string())
        })?;

        Ok(user)
    }
}
