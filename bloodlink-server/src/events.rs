//! Profile change notifications
//!
//! Explicit pub/sub replacing the reactive query layer of the hosted-store
//! design: mutation handlers publish a [`ProfileEvent`] keyed by user id,
//! subscribers re-fetch on receipt. Lagging subscribers lose old events
//! rather than blocking writers.

use tokio::sync::broadcast;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileEventKind {
    Created,
    LocationUpdated,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProfileEvent {
    pub user_id: i64,
    pub kind: ProfileEventKind,
}

/// Broadcast channel for profile changes
#[derive(Debug)]
pub struct ProfileEvents {
    tx: broadcast::Sender<ProfileEvent>,
}

impl ProfileEvents {
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity);
        Self { tx }
    }

    /// Publish a change. Returns the number of live subscribers.
    pub fn publish(&self, user_id: i64, kind: ProfileEventKind) -> usize {
        let event = ProfileEvent { user_id, kind };
        tracing::debug!(user_id, ?kind, "profile event published");
        self.tx.send(event).unwrap_or(0)
    }

    pub fn subscribe(&self) -> broadcast::Receiver<ProfileEvent> {
        self.tx.subscribe()
    }
}

impl Default for ProfileEvents {
    fn default() -> Self {
        Self::new(64)
    }
}
