// Authentication data models and DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// User database model
///
/// Keyed by email; created on signup and immutable afterwards
/// (no update or delete operations exist in this API).
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub email: String,
    pub name: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// Data needed to insert a new user record
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub name: String,
    pub password_hash: String,
}

/// User response model (excludes password_hash)
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    #[schema(example = "test@example.com")]
    pub email: String,
    #[schema(example = "Test User")]
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            email: user.email,
            name: user.name,
            created_at: user.created_at,
        }
    }
}

/// Signup request DTO
#[derive(Debug, Deserialize, ToSchema)]
pub struct SignupRequest {
    #[schema(example = "test@example.com")]
    pub email: String,
    #[schema(example = "Test User")]
    pub name: String,
    #[schema(example = "password123")]
    pub password: String,
}

/// Login request DTO
#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginRequest {
    #[schema(example = "test@example.com")]
    pub email: String,
    #[schema(example = "password123")]
    pub password: String,
}

/// Authentication response body
///
/// Exactly one side is populated: success carries a token (signup also
/// carries a confirmation message), failure carries a message and no
/// token. Both fields are always serialized so clients see an explicit
/// null for the absent side.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AuthResponse {
    pub token: Option<String>,
    pub message: Option<String>,
}

impl AuthResponse {
    /// Success response with a token and an optional message
    pub fn success(token: String, message: Option<&str>) -> Self {
        Self {
            token: Some(token),
            message: message.map(str::to_string),
        }
    }

    /// Failure response carrying only an explanatory message
    pub fn failure(message: &str) -> Self {
        Self {
            token: None,
            message: Some(message.to_string()),
        }
    }
}
