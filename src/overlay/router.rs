//! Touch routing and control wiring

use enum_map::EnumMap;
use tracing::{debug, info};
use winit::event::TouchPhase;

use super::button::Button;
use super::keys::{KeySink, VirtualKey};
use super::layout::{OverlayLayout, ZoneId};
use super::stick::Stick;
use super::surface::OverlaySurfaces;

/// One touch update in logical window coordinates
///
/// Carries just what routing needs from a `winit` touch event; the id ties
/// the phases of one physical touch together.
#[derive(Debug, Clone, Copy)]
pub struct TouchInput {
    pub id: u64,
    pub phase: TouchPhase,
    pub position: [f32; 2],
}

impl TouchInput {
    /// Creates a touch update
    pub fn new(id: u64, phase: TouchPhase, position: [f32; 2]) -> Self {
        Self {
            id,
            phase,
            position,
        }
    }
}

/// Routes touch events to the overlay controls
///
/// Each control owns at most one touch at a time, claimed on the start
/// event that lands in its zone and released on the matching end or cancel.
/// Additional touches starting on an already-claimed zone are ignored, and
/// later phases of a touch that never claimed a control fall through
/// unhandled.
pub struct TouchRouter {
    jump: Button,
    stick: Stick,
    restart: Button,
    /// Touch id currently claimed by each zone
    owners: EnumMap<ZoneId, Option<u64>>,
}

impl TouchRouter {
    /// Creates the router with the fixed control bindings
    pub fn new() -> Self {
        Self {
            jump: Button::new(VirtualKey::SPACE),
            stick: Stick::new([VirtualKey::ARROW_LEFT, VirtualKey::ARROW_RIGHT]),
            restart: Button::new(VirtualKey::KEY_S),
            owners: EnumMap::default(),
        }
    }

    /// Wires the overlay if touch capability is present
    ///
    /// With touch support this constructs the three controls and swaps the
    /// visible surface from the keymap hint to the touch bar. Without it
    /// nothing is constructed and neither surface changes, leaving the
    /// hint as the user-facing fallback.
    pub fn wire(touch_supported: bool, surfaces: &mut OverlaySurfaces) -> Option<Self> {
        if !touch_supported {
            debug!("No touch capability, keymap hint stays up");
            return None;
        }

        surfaces.show_touch_bar();
        info!("Touch controls wired, touch bar shown");
        Some(Self::new())
    }

    /// The key the stick currently holds down, if any
    pub fn stick_active(&self) -> Option<VirtualKey> {
        self.stick.active()
    }

    /// Routes one touch update to the controls
    ///
    /// `layout` must be built from the current window size so zone hit
    /// tests see the live geometry. Returns true when a control handled
    /// the event, in which case the caller should suppress any further
    /// handling of it.
    pub fn handle_touch(
        &mut self,
        touch: TouchInput,
        layout: &OverlayLayout,
        sink: &mut dyn KeySink,
    ) -> bool {
        match touch.phase {
            TouchPhase::Started => self.touch_started(touch, layout, sink),
            TouchPhase::Moved => self.touch_moved(touch, layout, sink),
            TouchPhase::Ended | TouchPhase::Cancelled => self.touch_ended(touch, sink),
        }
    }

    fn touch_started(
        &mut self,
        touch: TouchInput,
        layout: &OverlayLayout,
        sink: &mut dyn KeySink,
    ) -> bool {
        let Some(zone) = layout.zone_at(touch.position) else {
            return false;
        };

        if self.owners[zone].is_some() {
            // The zone is already tracking a touch; extra fingers on the
            // same control do nothing but still count as handled
            return true;
        }
        self.owners[zone] = Some(touch.id);

        match zone {
            ZoneId::Jump => self.jump.touch_started(sink),
            ZoneId::Restart => self.restart.touch_started(sink),
            ZoneId::Stick => {
                if let Some(rect) = layout.zone_rect(zone) {
                    self.stick.touch_started(rect, touch.position, sink);
                }
            }
        }
        true
    }

    fn touch_moved(
        &mut self,
        touch: TouchInput,
        layout: &OverlayLayout,
        sink: &mut dyn KeySink,
    ) -> bool {
        // Only the stick tracks movement; buttons react to start/end alone
        if self.owners[ZoneId::Stick] != Some(touch.id) {
            return false;
        }

        if let Some(rect) = layout.zone_rect(ZoneId::Stick) {
            self.stick.touch_moved(rect, touch.position, sink);
        }
        true
    }

    fn touch_ended(&mut self, touch: TouchInput, sink: &mut dyn KeySink) -> bool {
        let owned = self
            .owners
            .iter()
            .find(|(_, owner)| **owner == Some(touch.id))
            .map(|(zone, _)| zone);

        let Some(zone) = owned else {
            return false;
        };
        self.owners[zone] = None;

        match zone {
            ZoneId::Jump => self.jump.touch_ended(sink),
            ZoneId::Restart => self.restart.touch_ended(sink),
            ZoneId::Stick => self.stick.touch_ended(sink),
        }
        true
    }
}

impl Default for TouchRouter {
    fn default() -> Self {
        Self::new()
    }
}
