mod error;
mod loader;
pub mod types;


pub use error::ConfigError;
pub use loader::{
    load_config, load_config_or_default, parse_config, resolve_log_file, validate_config,
};
pub use types::{CollateConfig, DashboardConfig, TailConfig};
