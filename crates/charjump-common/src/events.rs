use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

use crate::id::NavigationId;
use crate::types::{Position, ViewId};

/// How a navigation ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeKind {
    Jumped,
    NoMatches,
    Unresolved,
    Cancelled,
    Failed,
}

/// Progress notifications emitted by the navigation controller.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum NavigationEvent {
    Started {
        id: NavigationId,
    },
    SearchFinished {
        id: NavigationId,
        matches: usize,
    },
    LabelsAssigned {
        id: NavigationId,
        count: usize,
        label_length: u32,
    },
    Jumped {
        id: NavigationId,
        view: ViewId,
        position: Position,
    },
    Finished {
        id: NavigationId,
        outcome: OutcomeKind,
    },
    #[serde(other)]
    Unknown,
}

pub struct EventBus {
    sender: broadcast::Sender<NavigationEvent>,
}

impl EventBus {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<NavigationEvent> {
        self.sender.subscribe()
    }

    /// Returns the number of subscribers that received the event.
    pub fn publish(&self, event: NavigationEvent) -> usize {
        match self.sender.send(event) {
            Ok(n) => n,
            Err(_) => {
                tracing::trace!("navigation event dropped, no subscribers");
                0
            }
        }
    }
}
