//! Overlay zone layout
//!
//! Computes the screen rectangle for each control zone from the current
//! window size. The layout is cheap to build and is recomputed from the
//! live window size on every touch event, so zone geometry always reflects
//! the latest resize.

use enum_map::Enum;
use serde::{Deserialize, Serialize};

use super::geometry::Rect;

/// Identifier for an overlay control zone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Enum)]
pub enum ZoneId {
    /// Jump button, bottom-right corner
    Jump,
    /// Movement stick, bottom-left area
    Stick,
    /// Restart button, top-right corner
    Restart,
}

/// Sizing parameters for the overlay zones
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OverlayConfig {
    /// How touch capability is determined (see [`TouchMode`])
    pub touch_mode: TouchMode,
    /// Inset from the window edges in logical pixels
    pub margin: f32,
    /// Side length of the square jump/restart buttons
    pub button_size: f32,
    /// Stick width as a fraction of the window width
    pub stick_width_fraction: f32,
    /// Stick height as a fraction of the window height
    pub stick_height_fraction: f32,
    /// Whether the restart button zone exists at all
    pub restart_enabled: bool,
}

/// How the overlay decides whether a touch screen is present
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TouchMode {
    /// Wire the controls on the first real touch event
    Auto,
    /// Wire the controls at startup unconditionally
    Enabled,
    /// Never wire the controls; the keymap hint stays up
    Disabled,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            touch_mode: TouchMode::Auto,
            margin: 16.0,
            button_size: 96.0,
            stick_width_fraction: 0.4,
            stick_height_fraction: 0.25,
            restart_enabled: true,
        }
    }
}

/// Zone rectangles for one window size
#[derive(Debug, Clone)]
pub struct OverlayLayout {
    jump: Rect,
    stick: Rect,
    restart: Option<Rect>,
}

impl OverlayLayout {
    /// Computes the zone layout for the given logical window size
    pub fn from_window(width: f32, height: f32, config: &OverlayConfig) -> Self {
        let margin = config.margin;
        let button = config.button_size;

        let stick_width = width * config.stick_width_fraction;
        let stick_height = height * config.stick_height_fraction;

        let jump = Rect::new(
            width - margin - button,
            height - margin - button,
            button,
            button,
        );

        let stick = Rect::new(
            margin,
            height - margin - stick_height,
            stick_width,
            stick_height,
        );

        let restart = config
            .restart_enabled
            .then(|| Rect::new(width - margin - button, margin, button, button));

        Self {
            jump,
            stick,
            restart,
        }
    }

    /// Current rectangle for a zone
    ///
    /// Returns `None` for a zone that does not exist in this layout; a
    /// control bound to such a zone never activates.
    pub fn zone_rect(&self, zone: ZoneId) -> Option<Rect> {
        match zone {
            ZoneId::Jump => Some(self.jump),
            ZoneId::Stick => Some(self.stick),
            ZoneId::Restart => self.restart,
        }
    }

    /// Zone containing the given point, if any
    ///
    /// Zones never overlap with sane sizing, so the first hit wins.
    pub fn zone_at(&self, pos: [f32; 2]) -> Option<ZoneId> {
        [ZoneId::Jump, ZoneId::Stick, ZoneId::Restart]
            .into_iter()
            .find(|zone| self.zone_rect(*zone).is_some_and(|rect| rect.contains(pos)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_layout() -> OverlayLayout {
        OverlayLayout::from_window(800.0, 600.0, &OverlayConfig::default())
    }

    #[test]
    fn test_zones_inside_window() {
        let layout = test_layout();
        for zone in [ZoneId::Jump, ZoneId::Stick, ZoneId::Restart] {
            let rect = layout.zone_rect(zone).unwrap();
            assert!(rect.x >= 0.0, "{:?} left edge", zone);
            assert!(rect.y >= 0.0, "{:?} top edge", zone);
            assert!(rect.right() <= 800.0, "{:?} right edge", zone);
            assert!(rect.bottom() <= 600.0, "{:?} bottom edge", zone);
        }
    }

    #[test]
    fn test_stick_bottom_left_jump_bottom_right() {
        let layout = test_layout();
        let stick = layout.zone_rect(ZoneId::Stick).unwrap();
        let jump = layout.zone_rect(ZoneId::Jump).unwrap();
        assert!(stick.x < jump.x);
        assert!(stick.right() < jump.x, "stick and jump must not overlap");
        assert!(stick.bottom() > 300.0, "stick sits in the lower half");
    }

    #[test]
    fn test_restart_disabled_has_no_rect() {
        let config = OverlayConfig {
            restart_enabled: false,
            ..OverlayConfig::default()
        };
        let layout = OverlayLayout::from_window(800.0, 600.0, &config);
        assert!(layout.zone_rect(ZoneId::Restart).is_none());
        let restart_corner = [800.0 - 16.0 - 48.0, 16.0 + 48.0];
        assert_ne!(layout.zone_at(restart_corner), Some(ZoneId::Restart));
    }

    #[test]
    fn test_zone_at_hits() {
        let layout = test_layout();
        let stick_center = layout.zone_rect(ZoneId::Stick).unwrap().center();
        let jump_center = layout.zone_rect(ZoneId::Jump).unwrap().center();
        assert_eq!(layout.zone_at(stick_center), Some(ZoneId::Stick));
        assert_eq!(layout.zone_at(jump_center), Some(ZoneId::Jump));
        assert_eq!(layout.zone_at([400.0, 100.0]), None);
    }

    #[test]
    fn test_layout_tracks_window_size() {
        let config = OverlayConfig::default();
        let small = OverlayLayout::from_window(800.0, 600.0, &config);
        let large = OverlayLayout::from_window(1920.0, 1080.0, &config);
        let small_jump = small.zone_rect(ZoneId::Jump).unwrap();
        let large_jump = large.zone_rect(ZoneId::Jump).unwrap();
        assert!(large_jump.x > small_jump.x);
        assert!(large_jump.y > small_jump.y);
    }
}
