// Authentication module
// Signup and login over HTTP backed by a persistent user store,
// Argon2id password hashing and signed session tokens

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod password;
pub mod repository;
pub mod service;
pub mod token;

// Re-export commonly used types
pub use error::AuthError;
pub use handlers::{login_handler, me_handler, signup_handler};
pub use middleware::AuthenticatedUser;
pub use models::{AuthResponse, LoginRequest, SignupRequest, User, UserResponse};
pub use repository::{PgUserStore, UserStore};
pub use service::AuthService;
pub use token::TokenService;
