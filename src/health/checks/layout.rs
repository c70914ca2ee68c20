//! Overlay layout health check

use crate::health::check::{CheckResult, SystemCheck};
use crate::overlay::{OverlayConfig, OverlayLayout, ZoneId};

/// Checks that the zone layout stays sane across window sizes
pub struct LayoutCheck {
    window_sizes: Vec<(f32, f32)>,
}

impl LayoutCheck {
    /// Creates a layout check covering common window sizes
    pub fn new() -> Self {
        Self {
            window_sizes: vec![(800.0, 600.0), (1280.0, 720.0), (1920.0, 1080.0)],
        }
    }
}

impl Default for LayoutCheck {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemCheck for LayoutCheck {
    fn name(&self) -> &'static str {
        "Overlay Layout"
    }

    fn description(&self) -> Option<&'static str> {
        Some("Validates zone rectangles stay inside the window and disjoint")
    }

    fn check(&self) -> CheckResult {
        let config = OverlayConfig::default();
        let mut details = Vec::new();

        for &(width, height) in &self.window_sizes {
            let layout = OverlayLayout::from_window(width, height, &config);

            let zones = [ZoneId::Jump, ZoneId::Stick, ZoneId::Restart];
            for zone in zones {
                let Some(rect) = layout.zone_rect(zone) else {
                    return CheckResult::fail(format!("{:?} zone missing from layout", zone));
                };

                if rect.x < 0.0 || rect.y < 0.0 || rect.right() > width || rect.bottom() > height {
                    return CheckResult::fail(format!(
                        "{:?} zone out of bounds at {}x{}",
                        zone, width, height
                    ));
                }
            }

            // The stick and jump button share the bottom edge; they must
            // never overlap or a touch could claim the wrong control
            let (Some(stick), Some(jump)) = (
                layout.zone_rect(ZoneId::Stick),
                layout.zone_rect(ZoneId::Jump),
            ) else {
                return CheckResult::fail("Stick or jump zone missing from layout");
            };
            if stick.right() >= jump.x {
                return CheckResult::fail(format!(
                    "Stick and jump zones overlap at {}x{}",
                    width, height
                ));
            }

            details.push(format!("  ✓ {}x{}: all zones valid", width, height));
        }

        CheckResult::pass(format!("{} window sizes validated", self.window_sizes.len()))
            .with_details(details.join("\n"))
    }
}
