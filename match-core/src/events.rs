use match_types::{MatchId, RecordedPoint};

#[derive(Debug, Clone)]
pub enum AnalysisEvent {
    PointRecorded {
        match_id: MatchId,
        point: RecordedPoint,
    },
    PointUndone {
        match_id: MatchId,
        point: RecordedPoint,
    },
    MatchClosed {
        match_id: MatchId,
        points_discarded: usize,
    },
}

impl AnalysisEvent {
    pub fn match_id(&self) -> MatchId {
        match self {
            AnalysisEvent::PointRecorded { match_id, .. } => *match_id,
            AnalysisEvent::PointUndone { match_id, .. } => *match_id,
            AnalysisEvent::MatchClosed { match_id, .. } => *match_id,
        }
    }
}

/// Handler trait for observers of ledger mutations (live scoreboards,
/// session loggers).
pub trait AnalysisEventHandler {
    fn handle_event(&mut self, event: AnalysisEvent);
}

/// Simple event bus for distributing analysis events
pub struct AnalysisEventBus {
    handlers: Vec<Box<dyn AnalysisEventHandler>>,
}

impl AnalysisEventBus {
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
        }
    }

    pub fn add_handler(&mut self, handler: Box<dyn AnalysisEventHandler>) {
        self.handlers.push(handler);
    }

    pub fn publish(&mut self, event: AnalysisEvent) {
        for handler in &mut self.handlers {
            handler.handle_event(event.clone());
        }
    }
}

impl Default for AnalysisEventBus {
    fn default() -> Self {
        Self::new()
    }
}
