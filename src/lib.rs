//! Touch Overlay
//!
//! Translates touches on designated screen regions into synthetic keyboard
//! events, so a keyboard-controlled game can be played on a touch device
//! without modification.

/// Overlay application - windowing, configuration, and event-loop wiring
pub mod app;

/// Build-time information (git SHA, branch, timestamp, etc.)
pub mod build_info;

/// Health check system for validating configuration and overlay wiring
pub mod health;

/// Touch controls - zone layout, button/stick state machines, key dispatch
pub mod overlay;
