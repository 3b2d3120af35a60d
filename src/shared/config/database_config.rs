// src/shared/config/database_config.rs
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),

    #[error("Invalid value for {key}: {value}")]
    Invalid { key: &'static str, value: String },
}

/// Pool settings for the relational store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub connect_timeout: Duration,
    pub acquire_timeout: Duration,
    pub idle_timeout: Duration,
    pub max_lifetime: Duration,
    pub sqlx_logging: bool,
    /// Postgres `search_path` applied to every pooled connection.
    pub schema: Option<String>,
}

impl DatabaseConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            max_connections: 50,
            min_connections: 10,
            connect_timeout: Duration::from_secs(5),
            acquire_timeout: Duration::from_secs(5),
            idle_timeout: Duration::from_secs(300),
            max_lifetime: Duration::from_secs(1800),
            sqlx_logging: false,
            schema: None,
        }
    }

    /// Loads `.env.{RUST_ENV}` (falling back to `.env`) and reads the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        load_env();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let url = lookup("DATABASE_URL")
            .filter(|v| !v.trim().is_empty())
            .ok_or(ConfigError::Missing("DATABASE_URL"))?;

        let mut config = Self::new(url);

        if let Some(v) = parse_var(&lookup, "DB_MAX_CONNECTIONS")? {
            config.max_connections = v;
        }
        if let Some(v) = parse_var(&lookup, "DB_MIN_CONNECTIONS")? {
            config.min_connections = v;
        }
        if let Some(v) = parse_var(&lookup, "DB_CONNECT_TIMEOUT_SECS")? {
            config.connect_timeout = Duration::from_secs(v);
        }
        if let Some(v) = parse_var(&lookup, "DB_ACQUIRE_TIMEOUT_SECS")? {
            config.acquire_timeout = Duration::from_secs(v);
        }
        if let Some(v) = parse_var(&lookup, "DB_IDLE_TIMEOUT_SECS")? {
            config.idle_timeout = Duration::from_secs(v);
        }
        if let Some(v) = parse_var(&lookup, "DB_MAX_LIFETIME_SECS")? {
            config.max_lifetime = Duration::from_secs(v);
        }
        if let Some(v) = parse_var(&lookup, "DB_SQLX_LOGGING")? {
            config.sqlx_logging = v;
        }
        config.schema = lookup("DB_SCHEMA").filter(|v| !v.trim().is_empty());

        if config.min_connections > config.max_connections {
            return Err(ConfigError::Invalid {
                key: "DB_MIN_CONNECTIONS",
                value: config.min_connections.to_string(),
            });
        }

        Ok(config)
    }

    pub fn connect_options(&self) -> ConnectOptions {
        let mut opt = ConnectOptions::new(self.url.clone());
        opt.max_connections(self.max_connections)
            .min_connections(self.min_connections)
            .connect_timeout(self.connect_timeout)
            .acquire_timeout(self.acquire_timeout)
            .idle_timeout(self.idle_timeout)
            .max_lifetime(self.max_lifetime)
            .sqlx_logging(self.sqlx_logging);

        if let Some(schema) = &self.schema {
            opt.set_schema_search_path(schema.clone());
        }

        opt
    }

    pub async fn connect(&self) -> Result<DatabaseConnection, DbErr> {
        Database::connect(self.connect_options()).await
    }
}

/// Try `.env.{environment}` first, then fall back to `.env`.
pub fn load_env() {
    let env = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
    let env_file = format!(".env.{}", env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }
}

fn parse_var<F, T>(lookup: &F, key: &'static str) -> Result<Option<T>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(key) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|_| ConfigError::Invalid { key, value: raw }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_only_url_is_set() {
        let config =
            DatabaseConfig::from_lookup(lookup_from(&[("DATABASE_URL", "postgres://localhost/forum")]))
                .unwrap();

        assert_eq!(config, DatabaseConfig::new("postgres://localhost/forum"));
        assert_eq!(config.max_connections, 50);
        assert_eq!(config.min_connections, 10);
        assert_eq!(config.idle_timeout, Duration::from_secs(300));
        assert!(config.schema.is_none());
    }

    #[test]
    fn test_missing_url() {
        let result = DatabaseConfig::from_lookup(lookup_from(&[]));
        assert_eq!(result, Err(ConfigError::Missing("DATABASE_URL")));

        let blank = DatabaseConfig::from_lookup(lookup_from(&[("DATABASE_URL", "  ")]));
        assert_eq!(blank, Err(ConfigError::Missing("DATABASE_URL")));
    }

    #[test]
    fn test_overrides() {
        let config = DatabaseConfig::from_lookup(lookup_from(&[
            ("DATABASE_URL", "postgres://localhost/forum"),
            ("DB_MAX_CONNECTIONS", "4"),
            ("DB_MIN_CONNECTIONS", "1"),
            ("DB_CONNECT_TIMEOUT_SECS", "2"),
            ("DB_SQLX_LOGGING", "true"),
            ("DB_SCHEMA", "forum_test"),
        ]))
        .unwrap();

        assert_eq!(config.max_connections, 4);
        assert_eq!(config.min_connections, 1);
        assert_eq!(config.connect_timeout, Duration::from_secs(2));
        assert!(config.sqlx_logging);
        assert_eq!(config.schema.as_deref(), Some("forum_test"));
    }

    #[test]
    fn test_invalid_number() {
        let result = DatabaseConfig::from_lookup(lookup_from(&[
            ("DATABASE_URL", "postgres://localhost/forum"),
            ("DB_MAX_CONNECTIONS", "lots"),
        ]));

        assert_eq!(
            result,
            Err(ConfigError::Invalid {
                key: "DB_MAX_CONNECTIONS",
                value: "lots".to_string(),
            })
        );
    }

    #[test]
    fn test_min_above_max_is_rejected() {
        let result = DatabaseConfig::from_lookup(lookup_from(&[
            ("DATABASE_URL", "postgres://localhost/forum"),
            ("DB_MAX_CONNECTIONS", "2"),
        ]));

        assert!(matches!(
            result,
            Err(ConfigError::Invalid {
                key: "DB_MIN_CONNECTIONS",
                ..
            })
        ));
    }

    #[test]
    fn test_connect_options_carry_pool_settings() {
        let mut config = DatabaseConfig::new("postgres://localhost/forum");
        config.max_connections = 3;
        config.min_connections = 0;

        let opt = config.connect_options();

        assert_eq!(opt.get_url(), "postgres://localhost/forum");
        assert_eq!(opt.get_max_connections(), Some(3));
        assert_eq!(opt.get_min_connections(), Some(0));
    }
}
