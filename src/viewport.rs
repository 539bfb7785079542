//! Viewport size change notifications.
//!
//! The app feeds the window size in once per frame; subscribers get a
//! message only when the size actually changed.

use std::collections::BTreeMap;
use std::sync::mpsc::{channel, Receiver, Sender};
use tracing::trace;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ViewportSize {
    pub width: f32,
    pub height: f32,
}

impl ViewportSize {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ListenerId(u64);

#[derive(Debug, Default)]
pub struct ViewportNotifier {
    current: Option<ViewportSize>,
    listeners: BTreeMap<ListenerId, Sender<ViewportSize>>,
    next_id: u64,
}

impl ViewportNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last observed size.
    pub fn current(&self) -> Option<ViewportSize> {
        self.current
    }

    /// Register a listener. The current size, if known, is delivered immediately.
    pub fn subscribe(&mut self) -> (ListenerId, Receiver<ViewportSize>) {
        let (tx, rx) = channel();
        if let Some(size) = self.current {
            let _ = tx.send(size);
        }
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners.insert(id, tx);
        (id, rx)
    }

    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.listeners.remove(&id).is_some()
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Record the size seen this frame and notify on change.
    /// Returns whether listeners were notified.
    pub fn observe(&mut self, size: ViewportSize) -> bool {
        if self.current == Some(size) {
            return false;
        }
        self.current = Some(size);
        trace!(width = size.width, height = size.height, "viewport resized");
        // Drop listeners whose receiver is gone.
        self.listeners.retain(|_, tx| tx.send(size).is_ok());
        true
    }
}
