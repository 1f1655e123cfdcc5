//! Infrastructure: SQLite connection, schema, repositories.

pub mod db;
pub mod schema;
pub mod suggestion_repo;
pub mod vote_repo;

pub(crate) use db::get_connection;
pub use db::{init_db, with_transaction, DbPool};
pub use schema::{prepare_schema, schema_version};
pub use suggestion_repo::{get_suggestion, insert_suggestion, list_suggestions};
pub use vote_repo::{get_vote, insert_vote, list_votes};
