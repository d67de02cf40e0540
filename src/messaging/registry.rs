use std::collections::HashMap;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::{Arc, Mutex, Weak};

use crate::messaging::EventKind;
use crate::types::EventEnvelope;

type TypedCallback = Arc<dyn Fn(serde_json::Value) + Send + Sync>;
type WildcardCallback = Arc<dyn Fn(EventEnvelope) + Send + Sync>;

struct Slot<C> {
    id: u64,
    callback: C,
}

#[derive(Default)]
struct RegistryInner {
    next_id: u64,
    typed: HashMap<EventKind, Slot<TypedCallback>>,
    wildcard: Option<Slot<WildcardCallback>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SlotKey {
    Typed(EventKind),
    Wildcard,
}

/// Maps event kinds to interested callbacks and fans inbound envelopes out to
/// them, decoupling whoever produces frames from whoever consumes events.
///
/// One callback per kind plus one wildcard slot; a later registration for the
/// same key replaces the earlier one (last-writer-wins). Registrations survive
/// disconnects and reconnects; removal happens only through the
/// [`Subscription`] handle.
pub struct SubscriptionRegistry {
    inner: Arc<Mutex<RegistryInner>>,
}

/// Removes exactly the registration that produced it.
///
/// Idempotent: a second call, or a call after the registration was replaced by
/// a newer subscribe on the same key, is a no-op.
pub struct Subscription {
    key: SlotKey,
    id: u64,
    inner: Weak<Mutex<RegistryInner>>,
}

impl Subscription {
    pub fn unsubscribe(&self) {
        let Some(inner) = self.inner.upgrade() else {
            return;
        };
        let mut inner = inner.lock().unwrap_or_else(|e| e.into_inner());
        match self.key {
            SlotKey::Typed(kind) => {
                if inner.typed.get(&kind).is_some_and(|slot| slot.id == self.id) {
                    inner.typed.remove(&kind);
                }
            }
            SlotKey::Wildcard => {
                if inner.wildcard.as_ref().is_some_and(|slot| slot.id == self.id) {
                    inner.wildcard = None;
                }
            }
        }
    }
}

impl SubscriptionRegistry {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(RegistryInner::default())),
        }
    }

    /// Register `callback` for one event kind. The callback receives the
    /// envelope's `data` payload. Replaces any existing registration for that
    /// kind.
    pub fn subscribe(
        &self,
        kind: EventKind,
        callback: impl Fn(serde_json::Value) + Send + Sync + 'static,
    ) -> Subscription {
        let mut inner = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        let id = inner.next_id;
        inner.next_id += 1;
        if inner
            .typed
            .insert(
                kind,
                Slot {
                    id,
                    callback: Arc::new(callback),
                },
            )
            .is_some()
        {
            tracing::debug!(kind = kind.as_str(), "replacing existing subscription");
        }
        Subscription {
            key: SlotKey::Typed(kind),
            id,
            inner: Arc::downgrade(&self.inner),
        }
    }

    /// Register `callback` for every event kind. The callback receives the
    /// full envelope. Replaces any existing wildcard registration.
    pub fn subscribe_to_all(
        &self,
        callback: impl Fn(EventEnvelope) + Send + Sync + 'static,
    ) -> Subscription {
        let mut inner = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        let id = inner.next_id;
        inner.next_id += 1;
        if inner
            .wildcard
            .replace(Slot {
                id,
                callback: Arc::new(callback),
            })
            .is_some()
        {
            tracing::debug!("replacing existing wildcard subscription");
        }
        Subscription {
            key: SlotKey::Wildcard,
            id,
            inner: Arc::downgrade(&self.inner),
        }
    }

    /// Fan one inbound envelope out: the typed slot for its tag gets `data`,
    /// the wildcard slot gets the whole envelope, both may fire. A panic
    /// inside a callback is caught and logged so one faulty subscriber cannot
    /// break delivery to the other or reach the connection.
    pub fn dispatch(&self, envelope: EventEnvelope) {
        let kind = envelope.kind;
        let (typed, wildcard) = {
            let inner = self.inner.lock().unwrap_or_else(|e| e.into_inner());
            (
                inner.typed.get(&kind).map(|slot| Arc::clone(&slot.callback)),
                inner
                    .wildcard
                    .as_ref()
                    .map(|slot| Arc::clone(&slot.callback)),
            )
        };

        if let Some(callback) = typed {
            let data = envelope.data.clone();
            if catch_unwind(AssertUnwindSafe(|| callback(data))).is_err() {
                tracing::error!(kind = kind.as_str(), "subscriber callback panicked");
            }
        }

        if let Some(callback) = wildcard {
            if catch_unwind(AssertUnwindSafe(move || callback(envelope))).is_err() {
                tracing::error!(kind = kind.as_str(), "wildcard subscriber callback panicked");
            }
        }
    }
}

impl Default for SubscriptionRegistry {
    fn default() -> Self {
        Self::new()
    }
}
