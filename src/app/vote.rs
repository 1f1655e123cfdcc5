//! Vote use cases: cast, list by suggestion.

use crate::domain::Vote;
use crate::error::AppError;
use crate::infra::{get_connection, get_suggestion, get_vote, insert_vote, list_votes};
use crate::infra::{with_transaction, DbPool};
use chrono::{DateTime, Utc};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoteCastReq {
    pub suggestion_id: i64,
    pub voter_token: String,
    pub upvote: bool,
    pub created_at: Option<DateTime<Utc>>,
}

pub fn vote_cast(pool: &DbPool, req: VoteCastReq) -> Result<Vote, AppError> {
    let voter_token = req.voter_token.trim();
    if voter_token.is_empty() {
        return Err(AppError::Validation("voter_token is required".into()));
    }
    let created_at = req.created_at.unwrap_or_else(Utc::now);

    with_transaction(pool, |conn| {
        // Checked up front so the answer doesn't depend on FK enforcement
        if get_suggestion(conn, req.suggestion_id)?.is_none() {
            log::warn!("vote rejected: suggestion {} not found", req.suggestion_id);
            return Err(AppError::NotFound("Suggestion not found".into()));
        }
        let id = insert_vote(conn, req.suggestion_id, voter_token, req.upvote, created_at)?;
        get_vote(conn, id)?.ok_or_else(|| AppError::NotFound(format!("vote {}", id)))
    })
}

pub fn vote_list(pool: &DbPool, suggestion_id: i64) -> Result<Vec<Vote>, AppError> {
    let conn = get_connection(pool)?;
    list_votes(&conn, suggestion_id)
}
