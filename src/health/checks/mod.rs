//! Built-in health checks for core systems

pub mod build_info;
pub mod config;
pub mod layout;
pub mod router;
pub mod system_info;

pub use build_info::BuildInfoCheck;
pub use config::ConfigCheck;
pub use layout::LayoutCheck;
pub use router::RouterCheck;
pub use system_info::SystemInfoCheck;
