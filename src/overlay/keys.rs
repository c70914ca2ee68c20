//! Synthetic keyboard events and the sink they are dispatched to

use std::collections::VecDeque;

/// Virtual key code carried by synthetic keyboard events
///
/// The codes follow the classic keyboard-event numbering so the consuming
/// game can treat synthetic events exactly like real key presses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VirtualKey(pub u32);

impl VirtualKey {
    /// Space bar (jump)
    pub const SPACE: VirtualKey = VirtualKey(32);
    /// Left arrow (move left)
    pub const ARROW_LEFT: VirtualKey = VirtualKey(37);
    /// Right arrow (move right)
    pub const ARROW_RIGHT: VirtualKey = VirtualKey(39);
    /// The S key (restart)
    pub const KEY_S: VirtualKey = VirtualKey(83);

    /// Raw integer code
    pub fn code(self) -> u32 {
        self.0
    }
}

/// Kind of synthetic keyboard event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyEventKind {
    Down,
    Up,
}

/// A synthetic keyboard event
///
/// The code is carried in two fields because consumers disagree on which
/// one they read; both always hold the same value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub kind: KeyEventKind,
    pub key_code: u32,
    pub which: u32,
}

impl KeyEvent {
    /// Create a key-down event for the given key
    pub fn down(key: VirtualKey) -> Self {
        Self {
            kind: KeyEventKind::Down,
            key_code: key.code(),
            which: key.code(),
        }
    }

    /// Create a key-up event for the given key
    pub fn up(key: VirtualKey) -> Self {
        Self {
            kind: KeyEventKind::Up,
            key_code: key.code(),
            which: key.code(),
        }
    }

    /// The virtual key this event carries
    pub fn key(&self) -> VirtualKey {
        VirtualKey(self.key_code)
    }
}

/// Destination for synthetic keyboard events
///
/// The overlay controls only ever write to the sink; they never read it
/// back. Implementations decide how events reach the consuming game, which
/// also makes the controls testable without a live window.
pub trait KeySink {
    /// Dispatch a key-down event for the given key
    fn key_down(&mut self, key: VirtualKey);

    /// Dispatch a key-up event for the given key
    fn key_up(&mut self, key: VirtualKey);
}

/// Queue-backed key sink
///
/// Controls push events as touches are handled; the host drains the queue
/// once per event-loop iteration and feeds the events to its own input
/// layer.
#[derive(Debug, Default)]
pub struct KeyEventQueue {
    events: VecDeque<KeyEvent>,
}

impl KeyEventQueue {
    /// Creates an empty queue
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of queued events
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Returns true if no events are queued
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Remove and return all queued events in dispatch order
    pub fn drain(&mut self) -> Vec<KeyEvent> {
        self.events.drain(..).collect()
    }
}

impl KeySink for KeyEventQueue {
    fn key_down(&mut self, key: VirtualKey) {
        self.events.push_back(KeyEvent::down(key));
    }

    fn key_up(&mut self, key: VirtualKey) {
        self.events.push_back(KeyEvent::up(key));
    }
}
