//! Suggestion use cases: create, list.

use crate::domain::{Suggestion, SuggestionSummary};
use crate::error::AppError;
use crate::infra::{get_connection, get_suggestion, insert_suggestion, list_suggestions};
use crate::infra::{with_transaction, DbPool};
use chrono::{DateTime, Utc};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestionCreateReq {
    pub title: String,
    pub submitter_token: String,
    /// Defaults to now.
    pub created_at: Option<DateTime<Utc>>,
}

pub fn suggestion_create(pool: &DbPool, req: SuggestionCreateReq) -> Result<Suggestion, AppError> {
    let title = req.title.trim();
    if title.is_empty() {
        return Err(AppError::Validation("title is required".into()));
    }
    let submitter_token = req.submitter_token.trim();
    if submitter_token.is_empty() {
        return Err(AppError::Validation("submitter_token is required".into()));
    }
    let created_at = req.created_at.unwrap_or_else(Utc::now);

    with_transaction(pool, |conn| {
        let id = insert_suggestion(conn, title, submitter_token, created_at)?;
        get_suggestion(conn, id)?
            .ok_or_else(|| AppError::NotFound(format!("suggestion {}", id)))
    })
}

pub fn suggestion_list(pool: &DbPool) -> Result<Vec<SuggestionSummary>, AppError> {
    let conn = get_connection(pool)?;
    list_suggestions(&conn)
}
