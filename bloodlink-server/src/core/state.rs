use std::sync::Arc;

use sqlx::SqlitePool;

use crate::auth::JwtService;
use crate::core::Config;
use crate::db::DbService;
use crate::events::{ProfileEventKind, ProfileEvents};
use crate::utils::AppError;

/// Server state — shared handles for all request handlers
///
/// Cloning is shallow; the pool and services are reference-counted.
#[derive(Clone)]
pub struct ServerState {
    /// Server configuration
    pub config: Config,
    /// SQLite connection pool
    pub pool: SqlitePool,
    /// JWT token service
    pub jwt_service: Arc<JwtService>,
    /// Profile change pub/sub
    pub profile_events: Arc<ProfileEvents>,
}

impl ServerState {
    /// Open the database and assemble the state
    pub async fn initialize(config: &Config) -> Result<Self, AppError> {
        let db = DbService::new(&config.database_path).await?;
        Ok(Self::with_pool(config.clone(), db.pool))
    }

    /// Assemble state around an existing pool (tests use an in-memory one)
    pub fn with_pool(config: Config, pool: SqlitePool) -> Self {
        let jwt_service = Arc::new(JwtService::with_config(config.jwt.clone()));
        Self {
            config,
            pool,
            jwt_service,
            profile_events: Arc::new(ProfileEvents::default()),
        }
    }

    /// Publish a profile change to subscribers after a successful write
    pub fn notify_profile_changed(&self, user_id: i64, kind: ProfileEventKind) {
        self.profile_events.publish(user_id, kind);
    }
}
