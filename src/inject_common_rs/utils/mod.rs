pub mod config_loader;
pub mod log_config;

pub use config_loader::{ConfigLoader, InjectConfig, InjectionConfig, LogConfig};
pub use log_config::{init_logging, LogLevel};
