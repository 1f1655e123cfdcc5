//! Schema preparation.

use crate::error::AppError;
use rusqlite::Connection;

const MIGRATIONS: &[(i64, &str)] = &[(1, include_str!("../../migrations/0001_init.sql"))];

/// Ensure the `suggestions` and `votes` tables exist.
///
/// Every statement is "create if absent", so repeated calls are no-ops and
/// existing rows are left alone. No transaction is opened here, which lets
/// callers run it inside their own.
pub fn prepare_schema(conn: &Connection) -> Result<(), AppError> {
    for (_, sql) in MIGRATIONS {
        conn.execute_batch(sql)?;
    }
    log::info!("schema ready at version {}", schema_version(conn)?);
    Ok(())
}

/// Highest recorded migration version, 0 when none.
pub fn schema_version(conn: &Connection) -> Result<i64, AppError> {
    let version: Option<i64> =
        conn.query_row("SELECT MAX(version) FROM schema_migrations", [], |r| {
            r.get(0)
        })?;
    Ok(version.unwrap_or(0))
}
