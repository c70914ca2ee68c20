//! Momentary button control

use super::keys::{KeySink, VirtualKey};

/// A momentary button mapped to one key
///
/// The key is down exactly as long as a touch rests on the button's zone.
/// The button keeps no active-state of its own; the touch lifecycle drives
/// it, and a repeated end event simply dispatches another key-up.
#[derive(Debug, Clone, Copy)]
pub struct Button {
    key: VirtualKey,
}

impl Button {
    /// Creates a button dispatching the given key
    pub fn new(key: VirtualKey) -> Self {
        Self { key }
    }

    /// A touch came down on the zone
    pub fn touch_started(&self, sink: &mut dyn KeySink) {
        sink.key_down(self.key);
    }

    /// The touch ended or was cancelled
    pub fn touch_ended(&self, sink: &mut dyn KeySink) {
        sink.key_up(self.key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::overlay::keys::{KeyEvent, KeyEventQueue};

    #[test]
    fn test_start_then_end_is_one_down_up_pair() {
        let button = Button::new(VirtualKey::SPACE);
        let mut queue = KeyEventQueue::new();

        button.touch_started(&mut queue);
        button.touch_ended(&mut queue);

        assert_eq!(
            queue.drain(),
            vec![
                KeyEvent::down(VirtualKey::SPACE),
                KeyEvent::up(VirtualKey::SPACE),
            ]
        );
    }

    #[test]
    fn test_repeated_end_redispatches_up() {
        let button = Button::new(VirtualKey::KEY_S);
        let mut queue = KeyEventQueue::new();

        button.touch_started(&mut queue);
        button.touch_ended(&mut queue);
        button.touch_ended(&mut queue);

        assert_eq!(
            queue.drain(),
            vec![
                KeyEvent::down(VirtualKey::KEY_S),
                KeyEvent::up(VirtualKey::KEY_S),
                KeyEvent::up(VirtualKey::KEY_S),
            ]
        );
    }
}
