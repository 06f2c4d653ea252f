mod auth_config;
mod config;
mod error;
mod log_level;
mod logging_config;
mod retry_config;
mod store_config;

#[cfg(test)]
mod tests;

pub use auth_config::AuthConfig;
pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use retry_config::RetryConfig;
pub use store_config::{StoreBackend, StoreConfig};

const CONFIG_DIR_ENV: &str = "MSG_CONFIG_DIR";
const DEFAULT_CONFIG_DIR: &str = ".messenger";
const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_LOG_COLORED: bool = true;
