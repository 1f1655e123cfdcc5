//! Vote insert and listing tests

use anketa::app::{suggestion_create, vote_cast, vote_list, SuggestionCreateReq, VoteCastReq};
use anketa::infra::db::{get_connection, init_test_db};
use anketa::infra::{get_vote, init_db, insert_suggestion, insert_vote, list_votes};
use chrono::{DateTime, TimeZone, Utc};
use tempfile::TempDir;

// ──────────────────────── Helper ────────────────────────

fn at(hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2017, 3, 15, hour, 0, 0).unwrap()
}

fn seed_suggestion(pool: &anketa::infra::DbPool) -> i64 {
    suggestion_create(
        pool,
        SuggestionCreateReq {
            title: "Tvorba webu".to_string(),
            submitter_token: "cookie1".to_string(),
            created_at: Some(at(12)),
        },
    )
    .unwrap()
    .id
}

fn cast(suggestion_id: i64, voter: &str, upvote: bool) -> VoteCastReq {
    VoteCastReq {
        suggestion_id,
        voter_token: voter.to_string(),
        upvote,
        created_at: Some(at(13)),
    }
}

// ══════════════════════════════════════════════════════════
//  insert_vote / list_votes
// ══════════════════════════════════════════════════════════

#[test]
fn insert_vote_round_trips_fields() {
    let pool = init_test_db();
    let conn = get_connection(&pool).unwrap();
    let sid = insert_suggestion(&conn, "Tvorba webu", "cookie1", at(12)).unwrap();

    let vid = insert_vote(&conn, sid, "cookie2", false, at(13)).unwrap();

    let votes = list_votes(&conn, sid).unwrap();
    assert_eq!(votes.len(), 1);
    assert_eq!(votes[0].id, vid);
    assert_eq!(votes[0].suggestion_id, sid);
    assert_eq!(votes[0].voter_token, "cookie2");
    assert!(!votes[0].upvote);
    assert_eq!(votes[0].created_at, at(13));
}

#[test]
fn same_voter_may_vote_repeatedly() {
    let pool = init_test_db();
    let conn = get_connection(&pool).unwrap();
    let sid = insert_suggestion(&conn, "Tvorba webu", "cookie1", at(12)).unwrap();

    let a = insert_vote(&conn, sid, "cookie2", true, at(13)).unwrap();
    let b = insert_vote(&conn, sid, "cookie2", true, at(13)).unwrap();
    assert_ne!(a, b);
    assert_eq!(list_votes(&conn, sid).unwrap().len(), 2);
}

#[test]
fn list_votes_only_returns_own_suggestion() {
    let pool = init_test_db();
    let conn = get_connection(&pool).unwrap();
    let s1 = insert_suggestion(&conn, "Tvorba webu", "cookie1", at(12)).unwrap();
    let s2 = insert_suggestion(&conn, "Statistika", "cookie1", at(13)).unwrap();
    insert_vote(&conn, s1, "cookie2", true, at(13)).unwrap();
    insert_vote(&conn, s2, "cookie3", true, at(13)).unwrap();
    insert_vote(&conn, s1, "cookie4", false, at(14)).unwrap();

    let tokens: Vec<String> = list_votes(&conn, s1)
        .unwrap()
        .into_iter()
        .map(|v| v.voter_token)
        .collect();
    assert_eq!(tokens, vec!["cookie2", "cookie4"]);
}

#[test]
fn vote_on_missing_suggestion_violates_foreign_key() {
    let pool = init_test_db();
    let conn = get_connection(&pool).unwrap();

    let err = insert_vote(&conn, 999, "cookie1", true, at(13)).unwrap_err();
    assert_eq!(err.code(), "CONSTRAINT_VIOLATION");
    assert!(list_votes(&conn, 999).unwrap().is_empty());

    let json = serde_json::to_value(&err).unwrap();
    assert_eq!(json["details"]["constraint"], "foreign_key");
    assert!(json["details"]["extendedCode"].is_i64());
}

#[test]
fn get_vote_missing_is_none() {
    let pool = init_test_db();
    let conn = get_connection(&pool).unwrap();
    assert!(get_vote(&conn, 42).unwrap().is_none());
}

#[test]
fn get_vote_returns_stored_row() {
    let pool = init_test_db();
    let conn = get_connection(&pool).unwrap();
    let sid = insert_suggestion(&conn, "Tvorba webu", "cookie1", at(12)).unwrap();
    let vid = insert_vote(&conn, sid, "cookie2", true, at(13)).unwrap();

    let vote = get_vote(&conn, vid).unwrap().unwrap();
    assert_eq!(vote.suggestion_id, sid);
    assert!(vote.upvote);
}

#[test]
fn unreadable_timestamp_is_db_error_not_not_found() {
    let pool = init_test_db();
    let conn = get_connection(&pool).unwrap();
    let sid = insert_suggestion(&conn, "Tvorba webu", "cookie1", at(12)).unwrap();
    conn.execute(
        "INSERT INTO votes (suggestion_id, voter_token, upvote, created_at) VALUES (?1, 'cookie2', 1, 'garbage')",
        [sid],
    )
    .unwrap();
    let vid = conn.last_insert_rowid();

    let err = get_vote(&conn, vid).unwrap_err();
    assert_eq!(err.code(), "DB_ERROR");
    let err = list_votes(&conn, sid).unwrap_err();
    assert_eq!(err.code(), "DB_ERROR");
}

#[test]
fn vote_on_missing_suggestion_allowed_without_enforcement() {
    let dir = TempDir::new().unwrap();
    let pool = init_db(&dir.path().join("loose.db"), false).unwrap();
    let conn = get_connection(&pool).unwrap();

    insert_vote(&conn, 999, "cookie1", true, at(13)).unwrap();
    assert_eq!(list_votes(&conn, 999).unwrap().len(), 1);
}

// ══════════════════════════════════════════════════════════
//  vote_cast / vote_list
// ══════════════════════════════════════════════════════════

#[test]
fn cast_returns_stored_vote() {
    let pool = init_test_db();
    let sid = seed_suggestion(&pool);

    let vote = vote_cast(&pool, cast(sid, "cookie2", true)).unwrap();
    assert_eq!(vote.suggestion_id, sid);
    assert_eq!(vote.voter_token, "cookie2");
    assert!(vote.upvote);
    assert_eq!(vote.created_at, at(13));
}

#[test]
fn cast_on_missing_suggestion_is_not_found() {
    let pool = init_test_db();
    let err = vote_cast(&pool, cast(12345, "cookie2", true)).unwrap_err();
    assert_eq!(err.code(), "NOT_FOUND");
}

#[test]
fn cast_empty_voter_token_fails() {
    let pool = init_test_db();
    let sid = seed_suggestion(&pool);
    let err = vote_cast(&pool, cast(sid, "  ", true)).unwrap_err();
    assert_eq!(err.code(), "VALIDATION_ERROR");
    assert!(vote_list(&pool, sid).unwrap().is_empty());
}

#[test]
fn cast_defaults_created_at_to_now() {
    let pool = init_test_db();
    let sid = seed_suggestion(&pool);
    let before = Utc::now();
    let vote = vote_cast(
        &pool,
        VoteCastReq {
            suggestion_id: sid,
            voter_token: "cookie2".to_string(),
            upvote: false,
            created_at: None,
        },
    )
    .unwrap();
    assert!(vote.created_at >= before);
}

#[test]
fn vote_list_in_cast_order() {
    let pool = init_test_db();
    let sid = seed_suggestion(&pool);
    vote_cast(&pool, cast(sid, "cookie3", false)).unwrap();
    vote_cast(&pool, cast(sid, "cookie2", true)).unwrap();

    let votes = vote_list(&pool, sid).unwrap();
    assert_eq!(votes.len(), 2);
    assert_eq!(votes[0].voter_token, "cookie3");
    assert_eq!(votes[1].voter_token, "cookie2");
}

#[test]
fn error_serializes_as_code_and_message() {
    let pool = init_test_db();
    let err = vote_cast(&pool, cast(7, "cookie2", true)).unwrap_err();
    let json = serde_json::to_value(&err).unwrap();
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["message"], "Not found: Suggestion not found");
    assert!(json["details"].is_null());
}
