//! Command implementations for the CLI.

mod cities;
mod classify;
mod config;
mod estimate;
mod pm25;

pub use cities::cmd_cities;
pub use classify::cmd_classify;
pub use config::cmd_config;
pub use estimate::cmd_estimate;
pub use pm25::cmd_pm25;
