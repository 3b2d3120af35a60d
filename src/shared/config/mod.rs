mod database_config;

pub use database_config::{load_env, ConfigError, DatabaseConfig};
