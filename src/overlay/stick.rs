//! Two-position directional stick control

use super::geometry::Rect;
use super::keys::{KeySink, VirtualKey};

/// A directional stick: one zone split into a left and a right half
///
/// The horizontal touch position selects which of the two keys is down;
/// crossing the midpoint while the touch moves releases the old key before
/// pressing the new one, so the consumer never sees both halves down at
/// once. Leaving the zone releases the active key; coming back is a fresh
/// press.
#[derive(Debug, Clone)]
pub struct Stick {
    keys: [VirtualKey; 2],
    active: Option<VirtualKey>,
}

impl Stick {
    /// Creates a stick from an ordered `[left, right]` key pair
    pub fn new(keys: [VirtualKey; 2]) -> Self {
        Self { keys, active: None }
    }

    /// The key currently held down, if any
    pub fn active(&self) -> Option<VirtualKey> {
        self.active
    }

    /// Key selected by a horizontal position within the zone rectangle
    ///
    /// The midpoint belongs to the right half.
    fn select(&self, rect: Rect, x: f32) -> VirtualKey {
        if rect.x_fraction(x) < 0.5 {
            self.keys[0]
        } else {
            self.keys[1]
        }
    }

    /// A touch came down on the zone
    pub fn touch_started(&mut self, rect: Rect, pos: [f32; 2], sink: &mut dyn KeySink) {
        let key = self.select(rect, pos[0]);
        sink.key_down(key);
        self.active = Some(key);
    }

    /// The touch moved; `rect` is the zone's current rectangle
    pub fn touch_moved(&mut self, rect: Rect, pos: [f32; 2], sink: &mut dyn KeySink) {
        if !rect.contains(pos) {
            // Touch left the zone: release, and require a fresh start event
            // before anything is pressed again
            if let Some(key) = self.active.take() {
                sink.key_up(key);
            }
            return;
        }

        let key = self.select(rect, pos[0]);
        if self.active != Some(key) {
            // Up before down: never two halves held at once
            if let Some(old) = self.active {
                sink.key_up(old);
            }
            sink.key_down(key);
            self.active = Some(key);
        }
    }

    /// The touch ended or was cancelled
    pub fn touch_ended(&mut self, sink: &mut dyn KeySink) {
        if let Some(key) = self.active.take() {
            sink.key_up(key);
        }
    }
}
