use async_trait::async_trait;
use sea_orm::{DbErr, SqlErr};
use std::collections::HashMap;
use tokio::sync::RwLock;

use match_persistence::repositories::PointRepository;
use match_types::{EngineError, MatchId, RecordedPoint};

/// Outbound interface to the storage collaborator.
///
/// Points are persisted verbatim, derived categories included, and ledger
/// state for a match is fully reconstructable by re-listing its points in
/// sequence order. Implementations must reject a second point with an
/// already-used `(match_id, sequence_id)` pair with
/// [`EngineError::ConcurrentMutationConflict`].
#[async_trait]
pub trait PointStore: Send + Sync {
    async fn save_point(&self, point: &RecordedPoint) -> Result<(), EngineError>;

    /// All points of a match, ascending by sequence id. An unknown match id
    /// yields an empty list; collaborators that track match records may
    /// return [`EngineError::MatchNotFound`] instead.
    async fn list_points(&self, match_id: MatchId) -> Result<Vec<RecordedPoint>, EngineError>;

    async fn delete_point(&self, match_id: MatchId, sequence_id: u32) -> Result<(), EngineError>;

    async fn delete_match(&self, match_id: MatchId) -> Result<(), EngineError>;
}

/// In-memory store used by tests and offline sessions.
pub struct MemoryStore {
    points: RwLock<HashMap<MatchId, Vec<RecordedPoint>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            points: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PointStore for MemoryStore {
    async fn save_point(&self, point: &RecordedPoint) -> Result<(), EngineError> {
        let mut points = self.points.write().await;
        let ledger = points.entry(point.match_id).or_default();

        if ledger.iter().any(|p| p.sequence_id == point.sequence_id) {
            return Err(EngineError::ConcurrentMutationConflict {
                match_id: point.match_id,
            });
        }

        ledger.push(point.clone());
        ledger.sort_by_key(|p| p.sequence_id);
        Ok(())
    }

    async fn list_points(&self, match_id: MatchId) -> Result<Vec<RecordedPoint>, EngineError> {
        let points = self.points.read().await;
        Ok(points.get(&match_id).cloned().unwrap_or_default())
    }

    async fn delete_point(&self, match_id: MatchId, sequence_id: u32) -> Result<(), EngineError> {
        let mut points = self.points.write().await;
        if let Some(ledger) = points.get_mut(&match_id) {
            ledger.retain(|p| p.sequence_id != sequence_id);
        }
        Ok(())
    }

    async fn delete_match(&self, match_id: MatchId) -> Result<(), EngineError> {
        self.points.write().await.remove(&match_id);
        Ok(())
    }
}

/// Store backed by the sea-orm point repository.
pub struct SeaOrmStore {
    repository: PointRepository,
}

impl SeaOrmStore {
    pub fn new(repository: PointRepository) -> Self {
        Self { repository }
    }
}

fn map_storage_error(match_id: MatchId, error: anyhow::Error) -> EngineError {
    // A violated unique (match_id, sequence_id) index means another writer
    // committed the same sequence id first.
    if let Some(db_err) = error.downcast_ref::<DbErr>() {
        if matches!(db_err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) {
            return EngineError::ConcurrentMutationConflict { match_id };
        }
    }

    EngineError::Storage {
        message: error.to_string(),
    }
}

#[async_trait]
impl PointStore for SeaOrmStore {
    async fn save_point(&self, point: &RecordedPoint) -> Result<(), EngineError> {
        self.repository
            .insert_point(point)
            .await
            .map_err(|e| map_storage_error(point.match_id, e))
    }

    async fn list_points(&self, match_id: MatchId) -> Result<Vec<RecordedPoint>, EngineError> {
        self.repository
            .list_for_match(match_id)
            .await
            .map_err(|e| map_storage_error(match_id, e))
    }

    async fn delete_point(&self, match_id: MatchId, sequence_id: u32) -> Result<(), EngineError> {
        self.repository
            .delete_point(match_id, sequence_id)
            .await
            .map(|_| ())
            .map_err(|e| map_storage_error(match_id, e))
    }

    async fn delete_match(&self, match_id: MatchId) -> Result<(), EngineError> {
        self.repository
            .delete_for_match(match_id)
            .await
            .map(|_| ())
            .map_err(|e| map_storage_error(match_id, e))
    }
}
