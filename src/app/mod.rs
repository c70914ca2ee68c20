//! Overlay application module
//!
//! Handles windowing, configuration, and feeding touch input to the overlay.

pub mod config;
mod runner;
mod window;

pub use config::{AppConfig, WindowConfig};
pub use runner::App;
