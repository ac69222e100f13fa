use match_types::{OutcomeCategory, PointOutcome, RecordedPoint, StatsSnapshot};

pub struct StatsAggregator;

impl StatsAggregator {
    /// Recompute statistics over the full point list.
    ///
    /// Always a fresh pass over the ledger, never incrementally maintained
    /// counters: after any undo/append sequence the snapshot is consistent
    /// without inverse-update logic. Ledgers are bounded by a single match's
    /// point count, so the full scan stays cheap.
    pub fn compute(points: &[RecordedPoint]) -> StatsSnapshot {
        let total_points = points.len() as u32;

        let points_won = points
            .iter()
            .filter(|p| p.category1 == PointOutcome::Won)
            .count() as u32;
        let points_lost = points
            .iter()
            .filter(|p| p.category1 == PointOutcome::Lost)
            .count() as u32;

        let winning_shots = points
            .iter()
            .filter(|p| p.category2 == OutcomeCategory::Winner)
            .count() as u32;

        // Faults by the tracked side only. OpponentFault marks a point lost
        // to an opponent's winning shot, not an error of the tracked player.
        let total_faults = points
            .iter()
            .filter(|p| {
                matches!(
                    p.category2,
                    OutcomeCategory::UnforcedError | OutcomeCategory::ForcedError
                )
            })
            .count() as u32;

        let fault_to_winner_ratio = if winning_shots > 0 {
            Some(f64::from(total_faults) / f64::from(winning_shots))
        } else {
            None
        };

        StatsSnapshot {
            total_points,
            points_won,
            points_lost,
            winning_shots,
            total_faults,
            fault_to_winner_ratio,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use match_types::{Position, Team};
    use uuid::Uuid;

    fn point(sequence_id: u32, category1: PointOutcome, category2: OutcomeCategory) -> RecordedPoint {
        RecordedPoint {
            sequence_id,
            match_id: Uuid::nil(),
            action_id: "test".to_string(),
            sub_tag_id: None,
            sub_sub_tag_id: None,
            position: Position::Left,
            team: Team::Home,
            category1,
            category2,
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }

    #[test]
    fn test_empty_ledger_snapshot() {
        let snapshot = StatsAggregator::compute(&[]);
        assert_eq!(snapshot, StatsSnapshot::empty());
        assert_eq!(snapshot.fault_to_winner_ratio, None);
    }

    #[test]
    fn test_counts_split_by_category() {
        let points = vec![
            point(1, PointOutcome::Won, OutcomeCategory::Winner),
            point(2, PointOutcome::Lost, OutcomeCategory::UnforcedError),
            point(3, PointOutcome::Lost, OutcomeCategory::ForcedError),
            point(4, PointOutcome::Won, OutcomeCategory::Winner),
        ];

        let snapshot = StatsAggregator::compute(&points);
        assert_eq!(snapshot.total_points, 4);
        assert_eq!(snapshot.points_won, 2);
        assert_eq!(snapshot.points_lost, 2);
        assert_eq!(snapshot.winning_shots, 2);
        assert_eq!(snapshot.total_faults, 2);
        assert_eq!(snapshot.fault_to_winner_ratio, Some(1.0));
    }

    #[test]
    fn test_opponent_fault_is_not_a_fault_of_the_tracked_side() {
        let points = vec![
            point(1, PointOutcome::Lost, OutcomeCategory::OpponentFault),
            point(2, PointOutcome::Lost, OutcomeCategory::OpponentFault),
            point(3, PointOutcome::Won, OutcomeCategory::Winner),
        ];

        let snapshot = StatsAggregator::compute(&points);
        assert_eq!(snapshot.total_points, 3);
        assert_eq!(snapshot.points_lost, 2);
        assert_eq!(snapshot.total_faults, 0);
        assert_eq!(snapshot.fault_to_winner_ratio, Some(0.0));
    }

    #[test]
    fn test_ratio_absent_without_winning_shots() {
        let points = vec![
            point(1, PointOutcome::Lost, OutcomeCategory::UnforcedError),
            point(2, PointOutcome::Lost, OutcomeCategory::ForcedError),
        ];

        let snapshot = StatsAggregator::compute(&points);
        assert_eq!(snapshot.total_faults, 2);
        assert_eq!(snapshot.winning_shots, 0);
        assert_eq!(snapshot.fault_to_winner_ratio, None);
    }

    #[test]
    fn test_compute_is_idempotent() {
        let points = vec![
            point(1, PointOutcome::Won, OutcomeCategory::Winner),
            point(2, PointOutcome::Lost, OutcomeCategory::UnforcedError),
        ];

        let first = StatsAggregator::compute(&points);
        let second = StatsAggregator::compute(&points);
        assert_eq!(first, second);
    }

    #[test]
    fn test_fractional_ratio() {
        let points = vec![
            point(1, PointOutcome::Lost, OutcomeCategory::UnforcedError),
            point(2, PointOutcome::Won, OutcomeCategory::Winner),
            point(3, PointOutcome::Won, OutcomeCategory::Winner),
        ];

        let snapshot = StatsAggregator::compute(&points);
        assert_eq!(snapshot.fault_to_winner_ratio, Some(0.5));
    }
}
