//! Error type shared by the repositories and use cases.
//!
//! Each variant maps to a stable code; constraint failures also carry the
//! SQLite extended result code so callers can tell FK from NOT NULL.

use rusqlite::{ffi, ErrorCode};
use serde::Serialize;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Db(String),

    #[error("Constraint violation: {message}")]
    Constraint { message: String, extended_code: i32 },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),
}

/// Which rule a constraint failure broke.
fn constraint_kind(extended_code: i32) -> &'static str {
    match extended_code {
        ffi::SQLITE_CONSTRAINT_FOREIGNKEY => "foreign_key",
        ffi::SQLITE_CONSTRAINT_NOTNULL => "not_null",
        ffi::SQLITE_CONSTRAINT_UNIQUE | ffi::SQLITE_CONSTRAINT_PRIMARYKEY => "unique",
        ffi::SQLITE_CONSTRAINT_CHECK => "check",
        _ => "other",
    }
}

impl AppError {
    pub fn code(&self) -> &'static str {
        match self {
            Self::Db(_) => "DB_ERROR",
            Self::Constraint { .. } => "CONSTRAINT_VIOLATION",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::NotFound(_) => "NOT_FOUND",
        }
    }

    pub fn to_serde(&self) -> AppErrorDto {
        let details = match self {
            Self::Constraint { extended_code, .. } => Some(json!({
                "constraint": constraint_kind(*extended_code),
                "extendedCode": extended_code,
            })),
            _ => None,
        };
        AppErrorDto {
            code: self.code().to_string(),
            message: self.to_string(),
            details,
        }
    }
}

impl From<rusqlite::Error> for AppError {
    fn from(e: rusqlite::Error) -> Self {
        match e {
            rusqlite::Error::SqliteFailure(err, msg) if err.code == ErrorCode::ConstraintViolation => {
                AppError::Constraint {
                    message: msg.unwrap_or_else(|| err.to_string()),
                    extended_code: err.extended_code,
                }
            }
            other => AppError::Db(other.to_string()),
        }
    }
}

impl serde::Serialize for AppError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.to_serde().serialize(serializer)
    }
}

/// Wire shape of an error: code, display message, optional structured details.
#[derive(Debug, Serialize)]
pub struct AppErrorDto {
    pub code: String,
    pub message: String,
    pub details: Option<serde_json::Value>,
}
