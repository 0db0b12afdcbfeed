// Authentication middleware for protected routes

use std::sync::Arc;

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header, request::Parts},
};
use tracing::warn;

use crate::auth::{error::AuthError, service::AuthService};

/// Authenticated user extractor for protected routes
///
/// Reads the Bearer token from the Authorization header and verifies
/// it against the token service held in router state.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub email: String,
}

#[async_trait]
impl FromRequestParts<Arc<AuthService>> for AuthenticatedUser {
    type Rejection = AuthError;

    async fn from_request_parts(
        parts: &mut Parts,
        service: &Arc<AuthService>,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(header::AUTHORIZATION)
            .ok_or(AuthError::MissingToken)?
            .to_str()
            .map_err(|_| AuthError::InvalidToken)?;

        let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
            warn!("Authorization header missing 'Bearer ' prefix");
            AuthError::InvalidToken
        })?;

        let claims = service.verify_token(token)?;

        Ok(AuthenticatedUser { email: claims.sub })
    }
}
