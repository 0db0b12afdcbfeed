// Authentication error types and HTTP response conversion

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use std::fmt;
use tracing::{debug, error, warn};

use crate::auth::models::AuthResponse;

/// Authentication error types
///
/// `InvalidCredentials` deliberately covers both "no such user" and
/// "wrong password" so responses never reveal whether an account
/// exists.
#[derive(Debug)]
pub enum AuthError {
    /// Login failed: unknown email or wrong password (HTTP 401)
    InvalidCredentials,
    /// Signup failed: a user with this email already exists (HTTP 400)
    EmailAlreadyExists,
    /// No Authorization header on a protected route (HTTP 401)
    MissingToken,
    /// Token failed signature or structural validation (HTTP 401)
    InvalidToken,
    /// Token signature is valid but the token has expired (HTTP 401)
    ExpiredToken,
    /// Storage-layer failure (HTTP 500, details never sent to clients)
    DatabaseError(String),
    /// Password hashing or verification failed internally (HTTP 500)
    PasswordHashError,
    /// Token signing failed (HTTP 500)
    TokenError(String),
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthError::InvalidCredentials => write!(f, "Invalid credentials"),
            AuthError::EmailAlreadyExists => write!(f, "Email already exists"),
            AuthError::MissingToken => write!(f, "Missing authentication token"),
            AuthError::InvalidToken => write!(f, "Invalid token"),
            AuthError::ExpiredToken => write!(f, "Token has expired"),
            AuthError::DatabaseError(msg) => write!(f, "Database error: {}", msg),
            AuthError::PasswordHashError => write!(f, "Password hashing error"),
            AuthError::TokenError(msg) => write!(f, "Token error: {}", msg),
        }
    }
}

impl std::error::Error for AuthError {}

impl AuthError {
    /// HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            AuthError::EmailAlreadyExists => StatusCode::BAD_REQUEST,
            AuthError::MissingToken => StatusCode::UNAUTHORIZED,
            AuthError::InvalidToken => StatusCode::UNAUTHORIZED,
            AuthError::ExpiredToken => StatusCode::UNAUTHORIZED,
            AuthError::DatabaseError(_)
            | AuthError::PasswordHashError
            | AuthError::TokenError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Client-facing message; internal details are filtered out
    fn client_message(&self) -> &'static str {
        match self {
            AuthError::InvalidCredentials => "Invalid credentials",
            AuthError::EmailAlreadyExists => "Email already exists",
            AuthError::MissingToken => "Missing authentication token",
            AuthError::InvalidToken => "Invalid token",
            AuthError::ExpiredToken => "Token has expired",
            AuthError::DatabaseError(_)
            | AuthError::PasswordHashError
            | AuthError::TokenError(_) => "Internal server error",
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        // Expected client errors log at debug, token problems at warn,
        // internal faults at error with full details kept server-side
        match &self {
            AuthError::InvalidCredentials => debug!("Authentication failed"),
            AuthError::EmailAlreadyExists => debug!("Signup rejected: email already exists"),
            AuthError::MissingToken | AuthError::InvalidToken | AuthError::ExpiredToken => {
                warn!("Token rejected: {}", self)
            }
            AuthError::DatabaseError(msg) => error!("Database error: {}", msg),
            AuthError::PasswordHashError => error!("Password hashing error"),
            AuthError::TokenError(msg) => error!("Token error: {}", msg),
        }

        let status = self.status_code();
        let body = AuthResponse::failure(self.client_message());
        (status, Json(body)).into_response()
    }
}
