//! Plain records handed out by the repositories.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// A submitted suggestion. Never mutated after insert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Suggestion {
    pub id: i64,
    pub title: String,
    /// Opaque browser/session token, not a user account.
    pub submitter_token: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Vote {
    pub id: i64,
    pub suggestion_id: i64,
    pub voter_token: String,
    pub upvote: bool,
    pub created_at: DateTime<Utc>,
}

/// One row of the suggestion listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SuggestionSummary {
    pub id: i64,
    pub title: String,
    pub vote_count: i64,
}
