use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

use crate::MatchId;

/// Caller-visible engine errors. A failed append/undo leaves the ledger
/// exactly as it was; none of these are retryable without caller correction.
#[derive(Debug, Clone, PartialEq, Error, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum EngineError {
    #[error("unknown action id: {action_id}")]
    UnknownAction { action_id: String },

    #[error("tag {tag_id} is not declared for action {action_id}")]
    InvalidTagForAction { action_id: String, tag_id: String },

    #[error("no points recorded for match {match_id}, nothing to undo")]
    EmptyLedger { match_id: MatchId },

    #[error("concurrent mutation detected for match {match_id}")]
    ConcurrentMutationConflict { match_id: MatchId },

    #[error("match not found: {match_id}")]
    MatchNotFound { match_id: MatchId },

    #[error("storage error: {message}")]
    Storage { message: String },
}
