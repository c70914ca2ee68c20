//! Touch control overlay
//!
//! Maps touches on designated screen zones to synthetic keyboard events so
//! a keyboard-driven game can be played on a touch screen:
//! - A momentary jump button (space)
//! - A two-position movement stick (left/right arrows) with live half
//!   switching and boundary tracking
//! - A momentary restart button (S)
//!
//! # Architecture
//!
//! ```text
//! Raw touch (winit) → TouchRouter → Button / Stick
//!                     (zone hit test,     ↓
//!                      touch ownership)  KeySink
//!                                         ↓
//!                                   KeyEventQueue
//!                                   (drained by the host)
//! ```
//!
//! Zone geometry comes from [`OverlayLayout`], rebuilt from the live window
//! size on every event. Controls only write to the injected [`KeySink`],
//! which keeps the whole pipeline testable without a window.

pub mod button;
pub mod geometry;
pub mod keys;
pub mod layout;
pub mod router;
pub mod stick;
pub mod surface;

pub use button::Button;
pub use geometry::Rect;
pub use keys::{KeyEvent, KeyEventKind, KeyEventQueue, KeySink, VirtualKey};
pub use layout::{OverlayConfig, OverlayLayout, TouchMode, ZoneId};
pub use router::{TouchInput, TouchRouter};
pub use stick::Stick;
pub use surface::{OverlaySurfaces, Visibility};
