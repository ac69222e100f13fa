use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};
use tracing::info;

use match_core::{ActionDefinition, Catalog, MatchLedger, PointDraft, StatsAggregator};
use match_types::{EngineError, MatchId, RecordedPoint, StatsSnapshot};

use crate::store::PointStore;

/// Per-match mutation state held under the match mutex. `high_water` is the
/// highest sequence id this process has ever allocated for the match, so an
/// id freed by undo is never handed out again.
#[derive(Debug, Default)]
struct MatchMutationState {
    high_water: u32,
}

/// Async session facade over the engine and a storage collaborator.
///
/// `record_point` and `undo_last_point` are serialized per match id through
/// a dedicated mutex, making their effects linearizable for one match while
/// different matches proceed without coordination. No ledger state is cached
/// across calls; every operation re-lists the persisted points.
pub struct SessionManager<S: PointStore> {
    catalog: Catalog,
    store: Arc<S>,
    match_locks: RwLock<HashMap<MatchId, Arc<Mutex<MatchMutationState>>>>,
}

impl<S: PointStore> SessionManager<S> {
    pub fn new(catalog: Catalog, store: Arc<S>) -> Self {
        Self {
            catalog,
            store,
            match_locks: RwLock::new(HashMap::new()),
        }
    }

    /// All recordable actions in stable catalog order.
    pub fn list_actions(&self) -> &[ActionDefinition] {
        self.catalog.actions()
    }

    /// Classify and persist one point for a match.
    ///
    /// The point is written in a single store call with its derived
    /// categories already stamped, so an abandoned call either fully
    /// committed or did not commit at all.
    pub async fn record_point(
        &self,
        match_id: MatchId,
        draft: PointDraft,
    ) -> Result<RecordedPoint, EngineError> {
        let lock = self.lock_for(match_id).await;
        let mut state = lock.lock().await;

        let persisted = self.store.list_points(match_id).await?;
        let mut ledger = MatchLedger::restore(match_id, persisted);
        ledger.reserve_from(state.high_water + 1);

        let point = ledger.record(&self.catalog, draft)?;
        self.store.save_point(&point).await?;
        state.high_water = state.high_water.max(point.sequence_id);

        info!(%match_id, sequence_id = point.sequence_id, action_id = %point.action_id, "point recorded");
        Ok(point)
    }

    /// Remove the most recent committed point of a match.
    pub async fn undo_last_point(&self, match_id: MatchId) -> Result<RecordedPoint, EngineError> {
        let lock = self.lock_for(match_id).await;
        let mut state = lock.lock().await;

        let persisted = self.store.list_points(match_id).await?;
        let mut ledger = MatchLedger::restore(match_id, persisted);
        let point = ledger.undo_last()?;

        self.store.delete_point(match_id, point.sequence_id).await?;
        state.high_water = state.high_water.max(point.sequence_id);

        info!(%match_id, sequence_id = point.sequence_id, "point undone");
        Ok(point)
    }

    /// The persisted match timeline, ascending by sequence id.
    pub async fn list_points(&self, match_id: MatchId) -> Result<Vec<RecordedPoint>, EngineError> {
        self.store.list_points(match_id).await
    }

    /// Recompute statistics from the full persisted point list.
    pub async fn get_stats(&self, match_id: MatchId) -> Result<StatsSnapshot, EngineError> {
        let points = self.store.list_points(match_id).await?;
        Ok(StatsAggregator::compute(&points))
    }

    /// Delete every point of a match when its analysis is removed.
    pub async fn close_match(&self, match_id: MatchId) -> Result<(), EngineError> {
        let lock = self.lock_for(match_id).await;
        let _state = lock.lock().await;

        self.store.delete_match(match_id).await?;
        info!(%match_id, "match analysis deleted");
        Ok(())
    }

    async fn lock_for(&self, match_id: MatchId) -> Arc<Mutex<MatchMutationState>> {
        if let Some(lock) = self.match_locks.read().await.get(&match_id) {
            return lock.clone();
        }

        let mut locks = self.match_locks.write().await;
        locks.entry(match_id).or_default().clone()
    }
}
