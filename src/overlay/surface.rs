//! Visibility state for the overlay's two surfaces

/// Display state of a surface element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Visible,
    Hidden,
}

impl Visibility {
    /// Returns true if the surface is shown
    pub fn is_visible(self) -> bool {
        matches!(self, Visibility::Visible)
    }
}

/// Visibility of the touch bar and the keymap hint
///
/// The default matches the static markup state: the keymap hint is up and
/// the touch bar is hidden until touch capability is confirmed and the
/// router wires the controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverlaySurfaces {
    pub touch_bar: Visibility,
    pub keymap_hint: Visibility,
}

impl Default for OverlaySurfaces {
    fn default() -> Self {
        Self {
            touch_bar: Visibility::Hidden,
            keymap_hint: Visibility::Visible,
        }
    }
}

impl OverlaySurfaces {
    /// Creates the default surface state
    pub fn new() -> Self {
        Self::default()
    }

    /// Swap to the touch control surface: bar shown, hint hidden
    pub fn show_touch_bar(&mut self) {
        self.touch_bar = Visibility::Visible;
        self.keymap_hint = Visibility::Hidden;
    }
}
