use std::sync::Arc;

use tokio::sync::{broadcast, Mutex};

use crate::api::handlers::sse::BoardEvent;
use crate::domain::{BoardSession, ColumnLayout};

#[derive(Clone, Debug)]
pub struct AppState {
    pub session: Arc<Mutex<BoardSession>>,
    pub sse_tx: broadcast::Sender<String>,
}

impl AppState {
    pub fn new(layout: &ColumnLayout, sse_tx: broadcast::Sender<String>) -> Self {
        Self {
            session: Arc::new(Mutex::new(BoardSession::new(layout))),
            sse_tx,
        }
    }

    /// Broadcasts `event` to every stream subscriber. Having no subscribers is
    /// not an error.
    pub fn publish(&self, event: &BoardEvent) {
        if let Ok(payload) = serde_json::to_string(event) {
            let _ = self.sse_tx.send(payload);
        }
    }
}
