//! SQLite connection and session lifecycle.

use crate::error::AppError;
use crate::infra::schema::prepare_schema;
use rusqlite::Connection;
use std::path::Path;
use std::sync::{Mutex, MutexGuard};

pub struct DbPool(pub Mutex<Connection>);

/// Initialize DB at path, prepare schema, return managed pool.
pub fn init_db(db_path: &Path, enforce_foreign_keys: bool) -> Result<DbPool, AppError> {
    if let Some(parent) = db_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| AppError::Db(e.to_string()))?;
        }
    }
    let conn = Connection::open(db_path)?;
    configure(&conn, enforce_foreign_keys)?;
    prepare_schema(&conn)?;
    log::info!("DB ready: {:?}", db_path);
    Ok(DbPool(Mutex::new(conn)))
}

/// In-memory DB with schema prepared and foreign keys enforced.
pub fn init_test_db() -> DbPool {
    let conn = Connection::open_in_memory().expect("open in-memory db");
    configure(&conn, true).expect("configure test db");
    prepare_schema(&conn).expect("prepare test schema");
    DbPool(Mutex::new(conn))
}

fn configure(conn: &Connection, enforce_foreign_keys: bool) -> Result<(), AppError> {
    let pragma = if enforce_foreign_keys {
        "PRAGMA foreign_keys = ON;"
    } else {
        "PRAGMA foreign_keys = OFF;"
    };
    conn.execute_batch(pragma)?;
    Ok(())
}

/// Get connection from pool.
pub fn get_connection(pool: &DbPool) -> Result<MutexGuard<'_, Connection>, AppError> {
    pool.0
        .lock()
        .map_err(|_| AppError::Db("db lock poisoned".into()))
}

/// Run `f` inside one transaction: commit on `Ok`, roll back on `Err`.
///
/// Repositories never commit on their own; this is the per-request session
/// the use cases open around them.
pub fn with_transaction<T, F>(pool: &DbPool, f: F) -> Result<T, AppError>
where
    F: FnOnce(&Connection) -> Result<T, AppError>,
{
    let conn = get_connection(pool)?;
    let tx = conn.unchecked_transaction()?;
    // dropping `tx` without commit rolls back
    let out = f(&tx)?;
    tx.commit()?;
    Ok(out)
}
