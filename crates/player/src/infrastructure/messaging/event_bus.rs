//! Event Bus for partner state change notifications.
//!
//! Subscribers register callbacks that are invoked when the partner store
//! publishes an event. Screens react to these instead of re-reading storage.

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::ports::outbound::PartnerEvent;

type Subscriber = Box<dyn FnMut(PartnerEvent) + Send + 'static>;

/// Event bus for partner events.
///
/// Push-based: subscribers register callbacks that are invoked when events arrive.
/// The bus holds strong references to subscribers, so they persist until explicitly
/// removed or the bus is dropped. Clones share the subscriber list.
#[derive(Clone, Default)]
pub struct EventBus {
    subscribers: Arc<Mutex<Vec<Subscriber>>>,
}

impl EventBus {
    /// Create a new EventBus with no subscribers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe to all events.
    ///
    /// Callbacks run on the publisher's task and must not block.
    pub async fn subscribe(&self, callback: impl FnMut(PartnerEvent) + Send + 'static) {
        self.subscribers.lock().await.push(Box::new(callback));
    }

    /// Dispatch an event to all subscribers, in subscription order.
    pub async fn dispatch(&self, event: PartnerEvent) {
        let mut subscribers = self.subscribers.lock().await;
        tracing::trace!(subscribers = subscribers.len(), event = ?event, "Dispatching partner event");
        for subscriber in subscribers.iter_mut() {
            subscriber(event.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Mutex as StdMutex;

    #[tokio::test]
    async fn test_subscribe_and_dispatch() {
        let bus = EventBus::new();
        let count = Arc::new(AtomicU32::new(0));

        let count_clone = Arc::clone(&count);
        bus.subscribe(move |_event| {
            count_clone.fetch_add(1, Ordering::SeqCst);
        })
        .await;

        bus.dispatch(PartnerEvent::ShinyChanged(true)).await;
        bus.dispatch(PartnerEvent::PartnerChanged(None)).await;

        assert_eq!(count.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_clones_share_subscribers_in_order() {
        let bus = EventBus::new();
        let seen = Arc::new(StdMutex::new(Vec::new()));

        let first = Arc::clone(&seen);
        bus.subscribe(move |event| first.lock().unwrap().push(("first", event)))
            .await;

        let second = Arc::clone(&seen);
        bus.clone()
            .subscribe(move |event| second.lock().unwrap().push(("second", event)))
            .await;

        bus.dispatch(PartnerEvent::ShinyChanged(false)).await;

        assert_eq!(
            *seen.lock().unwrap(),
            vec![
                ("first", PartnerEvent::ShinyChanged(false)),
                ("second", PartnerEvent::ShinyChanged(false)),
            ]
        );
    }
}
