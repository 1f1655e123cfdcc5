//! Application use cases and transactions.

mod suggestion;
mod vote;

pub use suggestion::{suggestion_create, suggestion_list, SuggestionCreateReq};
pub use vote::{vote_cast, vote_list, VoteCastReq};
