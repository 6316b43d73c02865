//! Shared application state

use sqlx::SqlitePool;

use crate::core::Config;
use crate::db::DbService;
use crate::extract::{AssistedClient, CodeExtractor};
use crate::utils::AppError;

/// Shared application state handed to every handler.
///
/// Cloning is cheap: the pool is reference-counted internally. The storage
/// handle and the extractor are injected here once at startup, never reached
/// through globals.
#[derive(Debug, Clone)]
pub struct ServerState {
    /// Server configuration
    pub config: Config,
    /// SQLite connection pool
    pub pool: SqlitePool,
    /// Order-code extractor
    pub extractor: CodeExtractor,
}

impl ServerState {
    pub fn new(config: Config, pool: SqlitePool, extractor: CodeExtractor) -> Self {
        Self {
            config,
            pool,
            extractor,
        }
    }

    /// Open the database and wire the extractor from configuration
    pub async fn initialize(config: &Config) -> Result<Self, AppError> {
        let db = DbService::new(&config.database_path).await?;

        let assisted = config.extract_api_key.as_ref().map(|key| {
            AssistedClient::new(&config.extract_api_url, key, config.extract_timeout_ms)
        });
        if assisted.is_none() {
            tracing::info!("No extraction credential configured; assisted matching disabled");
        }
        let extractor = CodeExtractor::new(assisted);

        Ok(Self::new(config.clone(), db.pool, extractor))
    }
}
