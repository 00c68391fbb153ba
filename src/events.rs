//! Process-wide change notifications.
//!
//! A minimal publish/subscribe signal keyed by event kind, carrying no
//! payload: subscribers re-fetch state from the relevant store on receipt
//! rather than trusting anything delivered with the event. Mirrors the
//! named-event bus the UI layer listens on (`role-changed`,
//! `assets-changed`).

use std::collections::HashMap;
use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::Mutex;

/// Named events the SDK emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// The active role was (re)written in the role store.
    RoleChanged,
    /// The minted-asset cache changed.
    AssetsChanged,
}

impl EventKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::RoleChanged => "role-changed",
            EventKind::AssetsChanged => "assets-changed",
        }
    }
}

/// Process-wide event bus. Cheap to share behind an `Arc`.
///
/// Delivery is best-effort within this process: dropped receivers are pruned
/// on the next emit, and there are no ordering or cross-process guarantees.
#[derive(Default)]
pub struct EventBus {
    subscribers: Mutex<HashMap<EventKind, Vec<Sender<()>>>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe to an event kind. Each received `()` means "re-read state".
    pub fn subscribe(&self, kind: EventKind) -> Receiver<()> {
        let (tx, rx) = channel();
        self.subscribers
            .lock()
            .expect("event bus poisoned")
            .entry(kind)
            .or_default()
            .push(tx);
        rx
    }

    /// Notify all live subscribers of `kind`, pruning dropped ones.
    pub fn emit(&self, kind: EventKind) {
        let mut subs = self.subscribers.lock().expect("event bus poisoned");
        if let Some(senders) = subs.get_mut(&kind) {
            senders.retain(|tx| tx.send(()).is_ok());
        }
        tracing::trace!(event = kind.as_str(), "event emitted");
    }
}
