//! Touch router health check

use winit::event::TouchPhase;

use crate::health::check::{CheckResult, SystemCheck};
use crate::overlay::{
    KeyEventKind, KeyEventQueue, OverlayConfig, OverlayLayout, OverlaySurfaces, TouchInput,
    TouchRouter, VirtualKey, ZoneId,
};

/// Checks router wiring and a full touch round trip
pub struct RouterCheck;

impl RouterCheck {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RouterCheck {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemCheck for RouterCheck {
    fn name(&self) -> &'static str {
        "Touch Router"
    }

    fn description(&self) -> Option<&'static str> {
        Some("Validates capability gating and end-to-end key dispatch")
    }

    fn check(&self) -> CheckResult {
        let mut details = Vec::new();

        // Without touch capability nothing gets wired and the hint stays up
        let mut surfaces = OverlaySurfaces::new();
        if TouchRouter::wire(false, &mut surfaces).is_some() {
            return CheckResult::fail("Router wired without touch capability");
        }
        if surfaces != OverlaySurfaces::default() {
            return CheckResult::fail("Surfaces changed without touch capability");
        }
        details.push("  ✓ No-touch path leaves keymap hint up".to_string());

        // With capability the touch bar comes up
        let Some(mut router) = TouchRouter::wire(true, &mut surfaces) else {
            return CheckResult::fail("Router failed to wire with touch capability");
        };
        if !surfaces.touch_bar.is_visible() || surfaces.keymap_hint.is_visible() {
            return CheckResult::fail("Surfaces not swapped after wiring");
        }
        details.push("  ✓ Wiring shows touch bar, hides keymap hint".to_string());

        // Round trip: tap the jump button, expect one down/up pair
        let layout = OverlayLayout::from_window(800.0, 600.0, &OverlayConfig::default());
        let mut queue = KeyEventQueue::new();
        let pos = layout
            .zone_rect(ZoneId::Jump)
            .map(|rect| rect.center())
            .unwrap_or([0.0, 0.0]);

        router.handle_touch(TouchInput::new(1, TouchPhase::Started, pos), &layout, &mut queue);
        router.handle_touch(TouchInput::new(1, TouchPhase::Ended, pos), &layout, &mut queue);

        let events = queue.drain();
        let expected_code = VirtualKey::SPACE.code();
        let round_trip_ok = events.len() == 2
            && events[0].kind == KeyEventKind::Down
            && events[0].key_code == expected_code
            && events[1].kind == KeyEventKind::Up
            && events[1].key_code == expected_code;
        if !round_trip_ok {
            return CheckResult::fail(format!("Jump tap produced unexpected events: {:?}", events));
        }
        details.push("  ✓ Jump tap dispatches down/up pair for code 32".to_string());

        CheckResult::pass("Router wiring and dispatch validated").with_details(details.join("\n"))
    }
}
