use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Derived statistics for one match, always recomputed from the full ledger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct StatsSnapshot {
    pub total_points: u32,
    pub points_won: u32,
    pub points_lost: u32,
    /// Points whose category is `Winner`.
    pub winning_shots: u32,
    /// Unforced plus forced errors by the tracked side. Points lost to an
    /// opponent's winning shot (`OpponentFault`) are not faults by the
    /// tracked player and are excluded.
    pub total_faults: u32,
    /// `total_faults / winning_shots`, absent when no winning shot has been
    /// recorded yet.
    pub fault_to_winner_ratio: Option<f64>,
}

impl StatsSnapshot {
    pub fn empty() -> Self {
        Self {
            total_points: 0,
            points_won: 0,
            points_lost: 0,
            winning_shots: 0,
            total_faults: 0,
            fault_to_winner_ratio: None,
        }
    }
}
