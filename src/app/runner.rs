//! Main application handler for the overlay

use std::sync::Arc;

use tracing::{debug, error, info, warn};
use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::ActiveEventLoop;
use winit::window::{Window, WindowId};

use super::config::AppConfig;
use crate::overlay::{
    KeyEventQueue, OverlayLayout, OverlaySurfaces, TouchInput, TouchMode, TouchRouter,
};

/// Main overlay application
///
/// Owns the window, the touch router, and the key event queue. Touch events
/// are routed as they arrive; the queue is drained once per event-loop
/// iteration, which is where a host game would consume the synthetic key
/// events.
pub struct App {
    config: AppConfig,
    window: Option<Arc<Window>>,
    surfaces: OverlaySurfaces,
    router: Option<TouchRouter>,
    keys: KeyEventQueue,
}

impl App {
    /// Creates a new overlay application with the provided configuration
    pub fn new(config: AppConfig) -> Self {
        info!(profile = %config.profile, "Starting touch overlay");
        info!(?config.window, "Window configuration");
        info!(?config.overlay, "Overlay configuration");

        Self {
            config,
            window: None,
            surfaces: OverlaySurfaces::new(),
            router: None,
            keys: KeyEventQueue::new(),
        }
    }

    /// Creates a new overlay application with configuration loaded from environment
    pub fn from_env() -> Self {
        let config = AppConfig::load_from_env().unwrap_or_else(|e| {
            warn!(error = %e, "Failed to load config, using default configuration");
            AppConfig::default()
        });
        Self::new(config)
    }

    /// Current surface visibility (touch bar vs. keymap hint)
    pub fn surfaces(&self) -> OverlaySurfaces {
        self.surfaces
    }

    /// Routes one winit touch event through the overlay
    fn on_touch(&mut self, touch: winit::event::Touch) {
        // In auto mode the first real touch event is the capability probe
        if self.router.is_none() && self.config.overlay.touch_mode == TouchMode::Auto {
            self.router = TouchRouter::wire(true, &mut self.surfaces);
        }

        let Some(window) = &self.window else {
            return;
        };
        let Some(router) = &mut self.router else {
            return;
        };

        // Work in DPI-scaled logical coordinates, matching the layout
        let scale = window.scale_factor();
        let pos = [
            (touch.location.x / scale) as f32,
            (touch.location.y / scale) as f32,
        ];

        // Rebuild the layout from the live window size so zone rectangles
        // reflect the latest resize
        let size = window.inner_size().to_logical::<f32>(scale);
        let layout = OverlayLayout::from_window(size.width, size.height, &self.config.overlay);

        let input = TouchInput::new(touch.id, touch.phase, pos);
        let consumed = router.handle_touch(input, &layout, &mut self.keys);
        if consumed {
            debug!(id = touch.id, phase = ?touch.phase, "Touch handled by overlay");
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::from_env()
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            let window_attributes = self.config.window.window_attributes();

            match event_loop.create_window(window_attributes) {
                Ok(window) => {
                    let size = window.inner_size();
                    info!(
                        window.width = size.width,
                        window.height = size.height,
                        "Window created successfully"
                    );
                    self.window = Some(Arc::new(window));
                }
                Err(e) => {
                    error!(error = %e, "Failed to create window");
                    return;
                }
            }

            // Startup wiring: only an explicitly enabled overlay is wired
            // here; auto mode waits for the first touch event
            let supported = self.config.overlay.touch_mode == TouchMode::Enabled;
            self.router = TouchRouter::wire(supported, &mut self.surfaces);
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        // Host consumption point: a game embedding the overlay would feed
        // these into its own input layer
        for event in self.keys.drain() {
            debug!(kind = ?event.kind, code = event.key().code(), "Synthetic key event");
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                info!("Close requested, exiting");
                event_loop.exit();
            }
            WindowEvent::Touch(touch) => {
                self.on_touch(touch);
            }
            WindowEvent::Resized(new_size) => {
                // Nothing to recompute here: the zone layout is rebuilt
                // from the window size on every touch event
                debug!(width = new_size.width, height = new_size.height, "Window resized");
            }
            _ => {}
        }
    }
}
