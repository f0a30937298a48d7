//! Event bus - synchronous publish/subscribe for board events
//!
//! The bus is an ordinary value owned by the [`Game`](crate::game::Game)
//! that created it; there is no global instance. Publishing runs every
//! matching handler, in subscription order, before `publish` returns.
//! Handlers observe events only: they receive `&BoardEvent` and cannot reach
//! the board, so the board keeps a single mutating actor.

use tracing::trace;

use crate::types::{BoardEvent, EventKind};

type Handler = Box<dyn FnMut(&BoardEvent)>;

/// Token returned by [`EventBus::subscribe`], used to unsubscribe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

struct Subscriber {
    id: SubscriptionId,
    kind: EventKind,
    handler: Handler,
}

#[derive(Default)]
pub struct EventBus {
    next_id: u64,
    subscribers: Vec<Subscriber>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `handler` for every event of `kind`
    pub fn subscribe<F>(&mut self, kind: EventKind, handler: F) -> SubscriptionId
    where
        F: FnMut(&BoardEvent) + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        self.subscribers.push(Subscriber {
            id,
            kind,
            handler: Box::new(handler),
        });
        id
    }

    /// Remove a subscription. Returns false if it was already gone.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|sub| sub.id != id);
        self.subscribers.len() != before
    }

    /// Deliver `event` to every subscriber of its kind; returns how many ran
    pub fn publish(&mut self, event: &BoardEvent) -> usize {
        let kind = event.kind();
        let mut delivered = 0;
        for sub in self.subscribers.iter_mut().filter(|sub| sub.kind == kind) {
            (sub.handler)(event);
            delivered += 1;
        }
        trace!(kind = kind.as_str(), delivered, "published event");
        delivered
    }

    pub fn subscriber_count(&self, kind: EventKind) -> usize {
        self.subscribers.iter().filter(|sub| sub.kind == kind).count()
    }
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("next_id", &self.next_id)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}
