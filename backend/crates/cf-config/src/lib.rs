mod backend_config;
mod backfill_config;
mod config;
mod error;
mod log_level;
mod logging_config;

pub use backend_config::BackendConfig;
pub use backfill_config::BackfillConfig;
pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;

pub const CONFIG_DIR_ENV: &str = "CF_CONFIG_DIR";
const DEFAULT_CONFIG_DIR: &str = ".cf";
const CONFIG_FILE_NAME: &str = "config.toml";

/// Local development stack default
const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:54321";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
const MIN_REQUEST_TIMEOUT_SECS: u64 = 1;
const MAX_REQUEST_TIMEOUT_SECS: u64 = 300;
const DEFAULT_STORAGE_BUCKET: &str = "nft-images";

const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_COLORED: bool = true;

const DEFAULT_BACKFILL_ENABLED: bool = true;

#[cfg(test)]
mod tests;
