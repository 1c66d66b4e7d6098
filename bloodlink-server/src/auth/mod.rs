//! Authentication module
//!
//! - [`JwtService`] - token generation and validation
//! - [`CurrentUser`] - per-request user context
//! - [`require_auth`] - axum middleware

pub mod extractor;
pub mod jwt;
pub mod middleware;

pub use extractor::OptionalUser;
pub use jwt::{Claims, CurrentUser, JwtConfig, JwtError, JwtService};
pub use middleware::require_auth;
