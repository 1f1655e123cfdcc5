//! Where the store lives and how it is opened.

use std::path::{Path, PathBuf};

const APP_DIR: &str = "anketa";
const DB_FILE: &str = "anketa.db";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub db_path: PathBuf,
    /// Turn on SQLite foreign-key checks for votes.
    pub enforce_foreign_keys: bool,
}

impl AppConfig {
    pub fn with_db_path(db_path: impl AsRef<Path>) -> Self {
        Self {
            db_path: db_path.as_ref().to_path_buf(),
            ..Self::default()
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        let base = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
        Self {
            db_path: base.join(APP_DIR).join(DB_FILE),
            enforce_foreign_keys: true,
        }
    }
}
