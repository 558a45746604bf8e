//! Named-event listener registry
//!
//! Listeners are keyed by log type. They run synchronously, in registration
//! order, on the thread that emits. The registry lock is released before any
//! listener runs, so listeners may subscribe, unsubscribe or emit themselves.

use parking_lot::RwLock;
use std::collections::HashMap;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// A formatted message delivered to listeners.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogEvent<'a> {
    /// The log type (event name) the message was emitted under
    pub log_type: &'a str,
    /// The fully formatted message, including prefix and line ending
    pub message: &'a str,
}

pub type Listener = Arc<dyn Fn(&LogEvent<'_>) + Send + Sync>;

/// Handle identifying one listener registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

struct Registration {
    id: ListenerId,
    once: bool,
    listener: Listener,
}

pub struct EventEmitter {
    listeners: RwLock<HashMap<String, Vec<Registration>>>,
    next_id: AtomicU64,
}

impl EventEmitter {
    pub fn new() -> Self {
        Self {
            listeners: RwLock::new(HashMap::new()),
            next_id: AtomicU64::new(1),
        }
    }

    fn register(&self, event: &str, listener: Listener, once: bool) -> ListenerId {
        let id = ListenerId(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.listeners
            .write()
            .entry(event.to_string())
            .or_default()
            .push(Registration { id, once, listener });
        id
    }

    /// Append a listener for `event`.
    pub fn on<F>(&self, event: &str, listener: F) -> ListenerId
    where
        F: Fn(&LogEvent<'_>) + Send + Sync + 'static,
    {
        self.register(event, Arc::new(listener), false)
    }

    /// Append an already shared listener. The same `Listener` may be
    /// registered under several events; each registration gets its own id.
    pub fn add_listener(&self, event: &str, listener: Listener) -> ListenerId {
        self.register(event, listener, false)
    }

    /// Append a listener that is removed right before its first call.
    pub fn once<F>(&self, event: &str, listener: F) -> ListenerId
    where
        F: Fn(&LogEvent<'_>) + Send + Sync + 'static,
    {
        self.register(event, Arc::new(listener), true)
    }

    /// Remove one registration. Returns `false` if it was not registered
    /// under `event` (already removed, or a once-listener that already ran).
    pub fn remove_listener(&self, event: &str, id: ListenerId) -> bool {
        let mut listeners = self.listeners.write();
        let Some(registrations) = listeners.get_mut(event) else {
            return false;
        };

        let before = registrations.len();
        registrations.retain(|r| r.id != id);
        let removed = registrations.len() != before;

        if registrations.is_empty() {
            listeners.remove(event);
        }
        removed
    }

    /// Remove every listener registered for `event`, returning how many were removed.
    pub fn remove_all_listeners(&self, event: &str) -> usize {
        self.listeners
            .write()
            .remove(event)
            .map_or(0, |registrations| registrations.len())
    }

    pub fn listener_count(&self, event: &str) -> usize {
        self.listeners.read().get(event).map_or(0, Vec::len)
    }

    /// Call every listener registered for `event` at the time of the call.
    ///
    /// Returns `true` if there was at least one listener.
    pub fn emit(&self, event: &str, message: &str) -> bool {
        let snapshot: Vec<Listener> = {
            let mut listeners = self.listeners.write();
            let Some(registrations) = listeners.get_mut(event) else {
                return false;
            };

            let snapshot = registrations
                .iter()
                .map(|r| Arc::clone(&r.listener))
                .collect();

            registrations.retain(|r| !r.once);
            if registrations.is_empty() {
                listeners.remove(event);
            }
            snapshot
        };

        let log_event = LogEvent {
            log_type: event,
            message,
        };
        for listener in &snapshot {
            listener(&log_event);
        }

        !snapshot.is_empty()
    }
}

impl Default for EventEmitter {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for EventEmitter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let listeners = self.listeners.read();
        let counts: HashMap<&str, usize> = listeners
            .iter()
            .map(|(event, registrations)| (event.as_str(), registrations.len()))
            .collect();
        f.debug_struct("EventEmitter")
            .field("listeners", &counts)
            .finish()
    }
}
