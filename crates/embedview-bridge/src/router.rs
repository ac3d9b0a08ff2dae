//! Observer registry routing native-fired events to subscribers.
//!
//! An explicit per-channel registry rather than a document-wide broadcast:
//! delivery order is subscription order, and removal is by callback
//! identity, so a caller must retain the exact `Arc` it registered.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use serde_json::Value;

/// Callback invoked with an event's detail payload.
pub type ListenerFn = dyn Fn(&Value) + Send + Sync;

/// Maps channel names to the ordered list of subscribed callbacks.
pub struct EventRouter {
    channels: Mutex<HashMap<String, Vec<Arc<ListenerFn>>>>,
}

impl EventRouter {
    pub fn new() -> Self {
        Self {
            channels: Mutex::new(HashMap::new()),
        }
    }

    /// Append a listener to a channel. Subscribing the same `Arc` twice is
    /// allowed and delivers twice.
    pub fn subscribe(&self, channel: impl Into<String>, listener: Arc<ListenerFn>) {
        let mut channels = self.channels.lock().unwrap();
        channels.entry(channel.into()).or_default().push(listener);
    }

    /// Remove the first subscription of `listener` on `channel`, matched by
    /// pointer identity. Returns whether anything was removed.
    pub fn unsubscribe(&self, channel: &str, listener: &Arc<ListenerFn>) -> bool {
        let mut channels = self.channels.lock().unwrap();
        let Some(listeners) = channels.get_mut(channel) else {
            return false;
        };

        let Some(pos) = listeners.iter().position(|l| Arc::ptr_eq(l, listener)) else {
            return false;
        };
        listeners.remove(pos);

        if listeners.is_empty() {
            channels.remove(channel);
        }
        true
    }

    /// Deliver `detail` to every subscriber of `channel`, in subscription
    /// order. Returns the delivery count.
    ///
    /// The registry lock is released before any callback runs, so listeners
    /// may subscribe or unsubscribe; such changes take effect on the next
    /// dispatch.
    pub fn dispatch(&self, channel: &str, detail: &Value) -> usize {
        let snapshot: Vec<Arc<ListenerFn>> = {
            let channels = self.channels.lock().unwrap();
            match channels.get(channel) {
                Some(listeners) => listeners.clone(),
                None => return 0,
            }
        };

        for listener in &snapshot {
            listener(detail);
        }
        snapshot.len()
    }

    /// How many subscriptions a channel currently has.
    pub fn listener_count(&self, channel: &str) -> usize {
        let channels = self.channels.lock().unwrap();
        channels.get(channel).map_or(0, Vec::len)
    }
}

impl Default for EventRouter {
    fn default() -> Self {
        Self::new()
    }
}
