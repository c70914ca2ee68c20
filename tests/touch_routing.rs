//! End-to-end touch routing tests
//!
//! Drives full touch sequences through the router the way the event loop
//! would, and asserts on the synthetic key events the host drains.

use winit::event::TouchPhase;

use touch_overlay::overlay::{
    KeyEvent, KeyEventQueue, OverlayConfig, OverlayLayout, OverlaySurfaces, TouchInput,
    TouchRouter, VirtualKey, ZoneId,
};

fn layout_for(width: f32, height: f32) -> OverlayLayout {
    OverlayLayout::from_window(width, height, &OverlayConfig::default())
}

fn stick_pos(layout: &OverlayLayout, fraction: f32) -> [f32; 2] {
    let rect = layout.zone_rect(ZoneId::Stick).expect("stick zone");
    [rect.x + rect.width * fraction, rect.center()[1]]
}

#[test]
fn wired_overlay_swaps_surfaces_once() {
    let mut surfaces = OverlaySurfaces::new();
    assert!(surfaces.keymap_hint.is_visible());

    let router = TouchRouter::wire(true, &mut surfaces);
    assert!(router.is_some());
    assert!(surfaces.touch_bar.is_visible());
    assert!(!surfaces.keymap_hint.is_visible());
}

#[test]
fn unwired_overlay_keeps_fallback_hint() {
    let mut surfaces = OverlaySurfaces::new();
    assert!(TouchRouter::wire(false, &mut surfaces).is_none());
    assert!(surfaces.keymap_hint.is_visible());
    assert!(!surfaces.touch_bar.is_visible());
}

#[test]
fn full_play_session() {
    let layout = layout_for(800.0, 600.0);
    let mut surfaces = OverlaySurfaces::new();
    let mut router = TouchRouter::wire(true, &mut surfaces).expect("touch supported");
    let mut queue = KeyEventQueue::new();

    // Hold the stick on the left half with finger 1
    router.handle_touch(
        TouchInput::new(1, TouchPhase::Started, stick_pos(&layout, 0.2)),
        &layout,
        &mut queue,
    );

    // Tap jump with finger 2 while the stick is held
    let jump = layout.zone_rect(ZoneId::Jump).expect("jump zone").center();
    router.handle_touch(TouchInput::new(2, TouchPhase::Started, jump), &layout, &mut queue);
    router.handle_touch(TouchInput::new(2, TouchPhase::Ended, jump), &layout, &mut queue);

    // Slide the stick to the right half, then lift
    router.handle_touch(
        TouchInput::new(1, TouchPhase::Moved, stick_pos(&layout, 0.8)),
        &layout,
        &mut queue,
    );
    router.handle_touch(
        TouchInput::new(1, TouchPhase::Ended, stick_pos(&layout, 0.8)),
        &layout,
        &mut queue,
    );

    // Restart the run
    let restart = layout.zone_rect(ZoneId::Restart).expect("restart zone").center();
    router.handle_touch(TouchInput::new(3, TouchPhase::Started, restart), &layout, &mut queue);
    router.handle_touch(TouchInput::new(3, TouchPhase::Ended, restart), &layout, &mut queue);

    assert_eq!(
        queue.drain(),
        vec![
            KeyEvent::down(VirtualKey::ARROW_LEFT),
            KeyEvent::down(VirtualKey::SPACE),
            KeyEvent::up(VirtualKey::SPACE),
            KeyEvent::up(VirtualKey::ARROW_LEFT),
            KeyEvent::down(VirtualKey::ARROW_RIGHT),
            KeyEvent::up(VirtualKey::ARROW_RIGHT),
            KeyEvent::down(VirtualKey::KEY_S),
            KeyEvent::up(VirtualKey::KEY_S),
        ]
    );
}

#[test]
fn stick_drag_out_and_back_in() {
    let layout = layout_for(800.0, 600.0);
    let mut router = TouchRouter::new();
    let mut queue = KeyEventQueue::new();

    router.handle_touch(
        TouchInput::new(1, TouchPhase::Started, stick_pos(&layout, 0.2)),
        &layout,
        &mut queue,
    );

    // Drag above the stick zone: release without re-press
    let above = [stick_pos(&layout, 0.2)[0], 10.0];
    router.handle_touch(TouchInput::new(1, TouchPhase::Moved, above), &layout, &mut queue);

    // Nothing more fires while outside
    router.handle_touch(TouchInput::new(1, TouchPhase::Moved, above), &layout, &mut queue);

    // Coming back in is a fresh activation
    router.handle_touch(
        TouchInput::new(1, TouchPhase::Moved, stick_pos(&layout, 0.8)),
        &layout,
        &mut queue,
    );
    router.handle_touch(
        TouchInput::new(1, TouchPhase::Ended, stick_pos(&layout, 0.8)),
        &layout,
        &mut queue,
    );

    assert_eq!(
        queue.drain(),
        vec![
            KeyEvent::down(VirtualKey::ARROW_LEFT),
            KeyEvent::up(VirtualKey::ARROW_LEFT),
            KeyEvent::down(VirtualKey::ARROW_RIGHT),
            KeyEvent::up(VirtualKey::ARROW_RIGHT),
        ]
    );
}

#[test]
fn cancelled_touch_releases_stick() {
    let layout = layout_for(800.0, 600.0);
    let mut router = TouchRouter::new();
    let mut queue = KeyEventQueue::new();

    router.handle_touch(
        TouchInput::new(1, TouchPhase::Started, stick_pos(&layout, 0.8)),
        &layout,
        &mut queue,
    );
    router.handle_touch(
        TouchInput::new(1, TouchPhase::Cancelled, stick_pos(&layout, 0.8)),
        &layout,
        &mut queue,
    );

    assert_eq!(
        queue.drain(),
        vec![
            KeyEvent::down(VirtualKey::ARROW_RIGHT),
            KeyEvent::up(VirtualKey::ARROW_RIGHT),
        ]
    );
    assert_eq!(router.stick_active(), None);
}

#[test]
fn resize_mid_touch_uses_fresh_geometry() {
    // The stick is held near the old midpoint; after a resize the same
    // screen position falls on the other half of the grown zone
    let before = layout_for(800.0, 600.0);
    let mut router = TouchRouter::new();
    let mut queue = KeyEventQueue::new();

    let pos = stick_pos(&before, 0.6);
    router.handle_touch(TouchInput::new(1, TouchPhase::Started, pos), &before, &mut queue);
    assert_eq!(queue.drain(), vec![KeyEvent::down(VirtualKey::ARROW_RIGHT)]);

    // Window grows: the stick zone widens, the unchanged screen position
    // is now left of the new midpoint
    let after = layout_for(1600.0, 600.0);
    router.handle_touch(TouchInput::new(1, TouchPhase::Moved, pos), &after, &mut queue);
    assert_eq!(
        queue.drain(),
        vec![
            KeyEvent::up(VirtualKey::ARROW_RIGHT),
            KeyEvent::down(VirtualKey::ARROW_LEFT),
        ]
    );
}

#[test]
fn touch_outside_all_zones_is_not_consumed() {
    let layout = layout_for(800.0, 600.0);
    let mut router = TouchRouter::new();
    let mut queue = KeyEventQueue::new();

    let consumed = router.handle_touch(
        TouchInput::new(1, TouchPhase::Started, [400.0, 50.0]),
        &layout,
        &mut queue,
    );
    assert!(!consumed);
    assert!(queue.is_empty());
}
