//! Bloodlink Server - blood donor/recipient matching backend
//!
//! # Module structure
//!
//! ```text
//! bloodlink-server/src/
//! ├── core/          # Configuration, state, server lifecycle
//! ├── auth/          # JWT authentication middleware
//! ├── api/           # HTTP routes and handlers
//! ├── db/            # SQLite pool and repositories
//! ├── gating.rs      # Role/completion redirect rules
//! ├── events.rs      # Profile change pub/sub
//! └── utils/         # Errors, logging, validation helpers
//! ```

pub mod api;
pub mod auth;
pub mod core;
pub mod db;
pub mod events;
pub mod gating;
pub mod routes;
pub mod utils;

// Re-export public types
pub use auth::{CurrentUser, JwtService};
pub use core::{Config, Server, ServerState};
pub use events::{ProfileEvent, ProfileEventKind, ProfileEvents};
pub use utils::{AppError, AppResult};
pub use utils::logger::{init_logger, init_logger_with_file};

// Security logging macro - structured events on the "security" target
#[macro_export]
macro_rules! security_log {
    ($level:expr, $event:expr, $($key:ident = $value:expr),*) => {
        tracing::info!(
            target: "security",
            level = $level,
            event = $event,
            $($key = $value),*
        );
    };
}
