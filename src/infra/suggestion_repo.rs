//! Suggestion rows and the vote-count listing.

use crate::domain::{Suggestion, SuggestionSummary};
use crate::error::AppError;
use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension};

/// Insert a suggestion and return its new id. Every call adds a row.
pub fn insert_suggestion(
    conn: &Connection,
    title: &str,
    submitter_token: &str,
    created_at: DateTime<Utc>,
) -> Result<i64, AppError> {
    conn.execute(
        "INSERT INTO suggestions (title, submitter_token, created_at) VALUES (?1, ?2, ?3)",
        params![title, submitter_token, created_at],
    )?;
    let id = conn.last_insert_rowid();
    log::debug!("suggestion {} inserted", id);
    Ok(id)
}

pub fn get_suggestion(conn: &Connection, id: i64) -> Result<Option<Suggestion>, AppError> {
    let suggestion = conn
        .query_row(
            "SELECT id, title, submitter_token, created_at FROM suggestions WHERE id = ?1",
            [id],
            |r| {
                Ok(Suggestion {
                    id: r.get(0)?,
                    title: r.get(1)?,
                    submitter_token: r.get(2)?,
                    created_at: r.get(3)?,
                })
            },
        )
        .optional()?;
    Ok(suggestion)
}

/// All suggestions in insertion order, each with its count of qualifying
/// votes.
///
/// A vote qualifies when it is an upvote cast by someone other than the
/// suggestion's submitter. Downvotes are recorded but never subtracted.
pub fn list_suggestions(conn: &Connection) -> Result<Vec<SuggestionSummary>, AppError> {
    let mut stmt = conn.prepare(
        "SELECT s.id, s.title, COUNT(v.id) AS vote_count
         FROM suggestions s
         LEFT JOIN votes v
           ON v.suggestion_id = s.id
          AND v.upvote = 1
          AND v.voter_token <> s.submitter_token
         GROUP BY s.id, s.title
         ORDER BY s.id",
    )?;
    let rows = stmt.query_map([], |r| {
        Ok(SuggestionSummary {
            id: r.get(0)?,
            title: r.get(1)?,
            vote_count: r.get(2)?,
        })
    })?;
    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}
