use match_types::{
    EngineError, MatchId, OutcomeCategory, PointOutcome, Position, RecordedPoint, StatsSnapshot,
    Team,
};
use std::collections::HashMap;
use tracing::debug;

use crate::classifier::Classifier;
use crate::events::{AnalysisEvent, AnalysisEventBus};
use crate::stats::StatsAggregator;
use crate::taxonomy::{ActionDefinition, Catalog};

/// Caller-supplied portion of a point, before classification.
#[derive(Debug, Clone)]
pub struct PointDraft {
    pub action_id: String,
    pub sub_tag_id: Option<String>,
    pub sub_sub_tag_id: Option<String>,
    pub position: Position,
    pub team: Team,
}

/// Ordered, append-only point log for one match, with single-entry undo.
///
/// Sequence ids start at 1, increase strictly in append order, and are never
/// reused: undo removes the newest point but does not hand its id back.
#[derive(Debug)]
pub struct MatchLedger {
    pub match_id: MatchId,
    points: Vec<RecordedPoint>,
    next_sequence: u32,
}

impl MatchLedger {
    pub fn new(match_id: MatchId) -> Self {
        Self {
            match_id,
            points: Vec::new(),
            next_sequence: 1,
        }
    }

    /// Rebuild a ledger from points previously persisted for this match,
    /// in ascending `sequence_id` order.
    pub fn restore(match_id: MatchId, points: Vec<RecordedPoint>) -> Self {
        let next_sequence = points.last().map(|p| p.sequence_id + 1).unwrap_or(1);
        Self {
            match_id,
            points,
            next_sequence,
        }
    }

    /// Raise the next sequence id to at least `floor`. Used when a caller
    /// tracks a high-water mark beyond what the restored points show, so an
    /// id freed by undo is never handed out again.
    pub fn reserve_from(&mut self, floor: u32) {
        if floor > self.next_sequence {
            self.next_sequence = floor;
        }
    }

    pub(crate) fn append(
        &mut self,
        draft: PointDraft,
        category1: PointOutcome,
        category2: OutcomeCategory,
    ) -> RecordedPoint {
        let point = RecordedPoint {
            sequence_id: self.next_sequence,
            match_id: self.match_id,
            action_id: draft.action_id,
            sub_tag_id: draft.sub_tag_id,
            sub_sub_tag_id: draft.sub_sub_tag_id,
            position: draft.position,
            team: draft.team,
            category1,
            category2,
            timestamp: chrono::Utc::now().to_rfc3339(),
        };

        self.next_sequence += 1;
        self.points.push(point.clone());
        point
    }

    /// Validate against the catalog, classify, and append in one step.
    ///
    /// The only way outside this crate to put a point into a ledger, so
    /// derived categories always come from the classifier.
    pub fn record(
        &mut self,
        catalog: &Catalog,
        draft: PointDraft,
    ) -> Result<RecordedPoint, EngineError> {
        let action = catalog.get(&draft.action_id)?;
        let (category1, category2) = Classifier::classify(
            action,
            draft.sub_tag_id.as_deref(),
            draft.sub_sub_tag_id.as_deref(),
        )?;
        Ok(self.append(draft, category1, category2))
    }

    /// Remove and return the most recent point. Nothing else may be removed.
    pub fn undo_last(&mut self) -> Result<RecordedPoint, EngineError> {
        self.points.pop().ok_or(EngineError::EmptyLedger {
            match_id: self.match_id,
        })
    }

    /// The canonical match timeline, ascending by `sequence_id`.
    pub fn points(&self) -> &[RecordedPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn next_sequence(&self) -> u32 {
        self.next_sequence
    }
}

/// In-memory engine over any number of independent match ledgers.
///
/// This is the single point of truth for category derivation: points enter a
/// ledger only through [`AnalysisEngine::record_point`], which classifies
/// before storing. Callers needing per-match serialization across threads
/// wrap this (or its storage-backed equivalent) behind a per-match lock.
pub struct AnalysisEngine {
    catalog: Catalog,
    ledgers: HashMap<MatchId, MatchLedger>,
    pub event_bus: AnalysisEventBus,
}

impl AnalysisEngine {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            ledgers: HashMap::new(),
            event_bus: AnalysisEventBus::new(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// All recordable actions in stable catalog order.
    pub fn list_actions(&self) -> &[ActionDefinition] {
        self.catalog.actions()
    }

    /// Start an analysis session for a match with an empty ledger.
    /// Recording a first point opens the ledger implicitly as well.
    pub fn open_match(&mut self, match_id: MatchId) {
        self.ledgers
            .entry(match_id)
            .or_insert_with(|| MatchLedger::new(match_id));
    }

    /// Drop a match's ledger when its analysis is deleted.
    pub fn close_match(&mut self, match_id: MatchId) -> Result<(), EngineError> {
        let ledger = self
            .ledgers
            .remove(&match_id)
            .ok_or(EngineError::MatchNotFound { match_id })?;

        debug!(%match_id, points = ledger.len(), "match analysis closed");
        self.event_bus.publish(AnalysisEvent::MatchClosed {
            match_id,
            points_discarded: ledger.len(),
        });
        Ok(())
    }

    /// Validate, classify and append one point. A failed call leaves the
    /// ledger exactly as it was.
    pub fn record_point(
        &mut self,
        match_id: MatchId,
        draft: PointDraft,
    ) -> Result<RecordedPoint, EngineError> {
        let action = self.catalog.get(&draft.action_id)?;
        let (category1, category2) = Classifier::classify(
            action,
            draft.sub_tag_id.as_deref(),
            draft.sub_sub_tag_id.as_deref(),
        )?;

        let ledger = self
            .ledgers
            .entry(match_id)
            .or_insert_with(|| MatchLedger::new(match_id));
        let point = ledger.append(draft, category1, category2);

        debug!(%match_id, sequence_id = point.sequence_id, action_id = %point.action_id, "point recorded");
        self.event_bus.publish(AnalysisEvent::PointRecorded {
            match_id,
            point: point.clone(),
        });
        Ok(point)
    }

    /// Remove the most recent point of a match.
    pub fn undo_last_point(&mut self, match_id: MatchId) -> Result<RecordedPoint, EngineError> {
        let ledger = self
            .ledgers
            .get_mut(&match_id)
            .ok_or(EngineError::EmptyLedger { match_id })?;
        let point = ledger.undo_last()?;

        debug!(%match_id, sequence_id = point.sequence_id, "point undone");
        self.event_bus.publish(AnalysisEvent::PointUndone {
            match_id,
            point: point.clone(),
        });
        Ok(point)
    }

    /// The match timeline, ascending by sequence id. Repeated listing is
    /// idempotent and side-effect free.
    pub fn list_points(&self, match_id: MatchId) -> &[RecordedPoint] {
        self.ledgers
            .get(&match_id)
            .map(|ledger| ledger.points())
            .unwrap_or(&[])
    }

    /// Recompute statistics from the match's current ledger contents.
    pub fn stats(&self, match_id: MatchId) -> StatsSnapshot {
        StatsAggregator::compute(self.list_points(match_id))
    }
}
