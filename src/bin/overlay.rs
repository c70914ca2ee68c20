use anyhow::Context;
use tracing_subscriber::EnvFilter;
use winit::event_loop::{ControlFlow, EventLoop};

use touch_overlay::app::App;
use touch_overlay::health;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // `overlay --health` runs the check suite and exits, for CI use
    if std::env::args().any(|arg| arg == "--health") {
        let report = health::run_all_checks();
        health::print_report(&report);
        std::process::exit(report.exit_code());
    }

    let event_loop = EventLoop::new().context("Failed to create event loop")?;
    event_loop.set_control_flow(ControlFlow::Wait);

    let mut app = App::from_env();

    event_loop
        .run_app(&mut app)
        .context("Failed to run event loop")?;

    Ok(())
}
