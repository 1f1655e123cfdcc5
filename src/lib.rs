pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod infra;

use config::AppConfig;
use error::AppError;
use infra::{init_db, DbPool};

/// Open the store described by `config`, preparing its schema.
pub fn open(config: &AppConfig) -> Result<DbPool, AppError> {
    log::info!("DB path: {:?}", config.db_path);
    init_db(&config.db_path, config.enforce_foreign_keys).map_err(|e| {
        log::error!("DB init failed: {}", e);
        e
    })
}
