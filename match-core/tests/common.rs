use match_core::{AnalysisEngine, AnalysisEvent, AnalysisEventHandler, Catalog, PointDraft};
use match_types::{MatchId, Position, Team};
use std::sync::{Arc, Mutex};
use uuid::Uuid;

/// Creates an engine over the standard catalog
pub fn create_engine() -> AnalysisEngine {
    AnalysisEngine::new(Catalog::standard())
}

pub fn new_match() -> MatchId {
    Uuid::new_v4()
}

/// Creates a draft with no tags
pub fn draft(action_id: &str) -> PointDraft {
    draft_with_tags(action_id, None, None)
}

/// Creates a draft with the given tag ids
pub fn draft_with_tags(
    action_id: &str,
    sub_tag_id: Option<&str>,
    sub_sub_tag_id: Option<&str>,
) -> PointDraft {
    PointDraft {
        action_id: action_id.to_string(),
        sub_tag_id: sub_tag_id.map(str::to_string),
        sub_sub_tag_id: sub_sub_tag_id.map(str::to_string),
        position: Position::Right,
        team: Team::Home,
    }
}

/// Event collector for asserting on emitted analysis events
#[derive(Clone)]
pub struct EventCollector {
    events: Arc<Mutex<Vec<AnalysisEvent>>>,
}

impl EventCollector {
    pub fn new() -> Self {
        Self {
            events: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn events(&self) -> Vec<AnalysisEvent> {
        self.events.lock().unwrap().clone()
    }
}

impl AnalysisEventHandler for EventCollector {
    fn handle_event(&mut self, event: AnalysisEvent) {
        self.events.lock().unwrap().push(event);
    }
}
