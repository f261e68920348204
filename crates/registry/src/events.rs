//! Registry event notifications.

use notary_types::ForestName;
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

/// Notification published after a successful mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RegistryEvent {
    /// A new forest was registered.
    ForestRegistered {
        name: ForestName,
    },
    /// A verification was appended to a forest's log.
    ForestVerificationAdded {
        forest_name: ForestName,
        value: u64,
        acquired_at: u64,
        created_at: u64,
    },
}

/// Broadcast channel backing [`subscribe`](crate::ForestRegistry::subscribe).
///
/// Publishing is fire-and-forget: delivery to zero subscribers is not an
/// error, and retention is bounded by the channel capacity.
#[derive(Debug)]
pub(crate) struct EventBus {
    sender: broadcast::Sender<RegistryEvent>,
}

impl EventBus {
    pub(crate) fn new(capacity: usize) -> Self {
        let (sender, _receiver) = broadcast::channel(capacity);
        Self { sender }
    }

    pub(crate) fn subscribe(&self) -> broadcast::Receiver<RegistryEvent> {
        self.sender.subscribe()
    }

    /// Returns the number of subscribers the event reached.
    pub(crate) fn publish(&self, event: RegistryEvent) -> usize {
        self.sender.send(event).unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn publish_without_subscribers_is_not_an_error() {
        let bus = EventBus::new(4);
        let name = ForestName::new("kongo").unwrap();
        assert_eq!(bus.publish(RegistryEvent::ForestRegistered { name }), 0);
    }

    #[test]
    fn subscribers_receive_published_events() {
        let bus = EventBus::new(4);
        let mut receiver = bus.subscribe();
        let name = ForestName::new("kongo").unwrap();

        let delivered = bus.publish(RegistryEvent::ForestRegistered { name });
        assert_eq!(delivered, 1);
        assert_eq!(
            receiver.try_recv().unwrap(),
            RegistryEvent::ForestRegistered { name }
        );
    }

    #[test]
    fn events_serialize_with_kind_tag() {
        let event = RegistryEvent::ForestVerificationAdded {
            forest_name: ForestName::new("kongo").unwrap(),
            value: 123,
            acquired_at: 1_649_683_497,
            created_at: 1_649_683_500,
        };

        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["kind"], "forest_verification_added");
        assert_eq!(json["forest_name"], "kongo");
        assert_eq!(json["value"], 123);
    }
}
