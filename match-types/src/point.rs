use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

pub type MatchId = Uuid;

/// Which side of the court the recorded player was standing on.
///
/// This is the single side vocabulary the engine speaks. Display layers that
/// use a player1/player2 vocabulary must map to it explicitly; there is
/// deliberately no `Default` and no inferred mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Position {
    Left,
    Right,
}

/// One of the two opposing pairs in a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Team {
    Home,
    Away,
}

/// Whether the tracked side won or lost the point (category 1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum PointOutcome {
    Won,
    Lost,
}

/// Semantic outcome bucket used by the statistics aggregation (category 2).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum OutcomeCategory {
    Winner,
    UnforcedError,
    ForcedError,
    OpponentFault,
    None,
}

/// One entry in a match's point ledger.
///
/// `category1`/`category2` are derived by the classifier at append time and
/// are never recomputed afterward; historical points keep the categories they
/// were recorded with even if the catalog evolves.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RecordedPoint {
    pub sequence_id: u32,
    pub match_id: MatchId,
    pub action_id: String,
    pub sub_tag_id: Option<String>,
    pub sub_sub_tag_id: Option<String>,
    pub position: Position,
    pub team: Team,
    pub category1: PointOutcome,
    pub category2: OutcomeCategory,
    pub timestamp: String, // ISO 8601 string
}
