use tokio::sync::broadcast;
use tracing::trace;

use crate::domain::events::SettingsEvent;
use crate::domain::ports::EventPublisher;

/// In-process fan-out of settings events.
///
/// Publishing never blocks; subscribers that fall behind lose the oldest
/// events and are told so by `RecvError::Lagged`.
#[derive(Clone)]
pub struct BroadcastEventPublisher {
    tx: broadcast::Sender<SettingsEvent>,
}

impl BroadcastEventPublisher {
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let (tx, _rx) = broadcast::channel(capacity.max(1));
        Self { tx }
    }

    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<SettingsEvent> {
        self.tx.subscribe()
    }
}

impl EventPublisher<SettingsEvent> for BroadcastEventPublisher {
    fn publish(&self, event: &SettingsEvent) {
        // An error here only means nobody is listening.
        if self.tx.send(event.clone()).is_err() {
            trace!(kind = event.kind(), "settings event dropped, no subscribers");
        }
    }
}
