// HTTP handlers for authentication endpoints

use std::sync::Arc;

use axum::{extract::State, Json};

use crate::auth::{
    error::AuthError,
    middleware::AuthenticatedUser,
    models::{AuthResponse, LoginRequest, SignupRequest, UserResponse},
    service::AuthService,
};

/// Register a new user
/// POST /auth/signup
#[utoipa::path(
    post,
    path = "/auth/signup",
    request_body = SignupRequest,
    responses(
        (status = 200, description = "User registered, token issued", body = AuthResponse),
        (status = 400, description = "Email already exists", body = AuthResponse),
        (status = 500, description = "Internal server error", body = AuthResponse)
    ),
    tag = "auth"
)]
pub async fn signup_handler(
    State(service): State<Arc<AuthService>>,
    Json(request): Json<SignupRequest>,
) -> Result<Json<AuthResponse>, AuthError> {
    let response = service
        .signup(&request.email, &request.name, &request.password)
        .await?;
    Ok(Json(response))
}

/// Authenticate a user
/// POST /auth/login
#[utoipa::path(
    post,
    path = "/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Authenticated, token issued", body = AuthResponse),
        (status = 401, description = "Invalid credentials", body = AuthResponse),
        (status = 500, description = "Internal server error", body = AuthResponse)
    ),
    tag = "auth"
)]
pub async fn login_handler(
    State(service): State<Arc<AuthService>>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, AuthError> {
    let response = service.login(&request.email, &request.password).await?;
    Ok(Json(response))
}

/// Get the authenticated user's profile
/// GET /auth/me
#[utoipa::path(
    get,
    path = "/auth/me",
    responses(
        (status = 200, description = "Authenticated user profile", body = UserResponse),
        (status = 401, description = "Missing, invalid or expired token", body = AuthResponse)
    ),
    tag = "auth"
)]
pub async fn me_handler(
    user: AuthenticatedUser,
    State(service): State<Arc<AuthService>>,
) -> Result<Json<UserResponse>, AuthError> {
    let profile = service.current_user(&user.email).await?;
    Ok(Json(profile))
}
