use std::collections::VecDeque;

use super::{KeyEvent, Notification};

/// Receiver of the session's output events.
pub trait EventSink {
    fn push(&mut self, event: KeyEvent);
}

/// Display collaborator for transient mode banners. Delivery is best-effort.
pub trait Notifier {
    fn notify(&mut self, notification: Notification, duration_ms: u32);
}

/// FIFO drained by the input broker.
#[derive(Debug, Default)]
pub struct EventQueue {
    events: VecDeque<KeyEvent>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pop(&mut self) -> Option<KeyEvent> {
        self.events.pop_front()
    }

    /// Take every queued event, oldest first.
    pub fn drain(&mut self) -> Vec<KeyEvent> {
        self.events.drain(..).collect()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl EventSink for EventQueue {
    fn push(&mut self, event: KeyEvent) {
        self.events.push_back(event);
    }
}

impl EventSink for Vec<KeyEvent> {
    fn push(&mut self, event: KeyEvent) {
        Vec::push(self, event);
    }
}

/// Notifier for builds without a display; drops every banner.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullNotifier;

impl Notifier for NullNotifier {
    fn notify(&mut self, _notification: Notification, _duration_ms: u32) {}
}
