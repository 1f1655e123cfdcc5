//! Vote rows.

use crate::domain::Vote;
use crate::error::AppError;
use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension};

/// Insert a vote and return its new id.
///
/// Repeat votes by the same token are stored as further rows. A missing
/// suggestion surfaces as `AppError::Constraint` when the connection
/// enforces foreign keys.
pub fn insert_vote(
    conn: &Connection,
    suggestion_id: i64,
    voter_token: &str,
    upvote: bool,
    created_at: DateTime<Utc>,
) -> Result<i64, AppError> {
    conn.execute(
        "INSERT INTO votes (suggestion_id, voter_token, upvote, created_at) VALUES (?1, ?2, ?3, ?4)",
        params![suggestion_id, voter_token, upvote, created_at],
    )?;
    let id = conn.last_insert_rowid();
    log::debug!("vote {} on suggestion {} inserted", id, suggestion_id);
    Ok(id)
}

pub fn get_vote(conn: &Connection, id: i64) -> Result<Option<Vote>, AppError> {
    let vote = conn
        .query_row(
            "SELECT id, suggestion_id, voter_token, upvote, created_at FROM votes WHERE id = ?1",
            [id],
            map_vote,
        )
        .optional()?;
    Ok(vote)
}

/// Votes on one suggestion, oldest first.
pub fn list_votes(conn: &Connection, suggestion_id: i64) -> Result<Vec<Vote>, AppError> {
    let mut stmt = conn.prepare(
        "SELECT id, suggestion_id, voter_token, upvote, created_at FROM votes WHERE suggestion_id = ?1 ORDER BY id",
    )?;
    let rows = stmt.query_map([suggestion_id], map_vote)?;
    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

fn map_vote(r: &rusqlite::Row<'_>) -> rusqlite::Result<Vote> {
    Ok(Vote {
        id: r.get(0)?,
        suggestion_id: r.get(1)?,
        voter_token: r.get(2)?,
        upvote: r.get(3)?,
        created_at: r.get(4)?,
    })
}
