use sea_orm::{ConnectionTrait, DatabaseBackend, DatabaseConnection, Statement};
use std::sync::Arc;
use uuid::Uuid;

use super::load_test_env;
use crate::shared::config::{ConfigError, DatabaseConfig};

/// Throwaway Postgres schema for a single test.
///
/// `database` is a small pool whose `search_path` points at a freshly created
/// schema, so tests can create and drop `topics` without seeing each other.
pub struct DatabaseFixture {
    pub database: Arc<DatabaseConnection>,
    admin: DatabaseConnection,
    schema: String,
}

impl DatabaseFixture {
    /// Returns `None` when no test database is configured.
    pub async fn connect() -> Option<Self> {
        load_test_env();

        let base = match DatabaseConfig::from_lookup(|key| std::env::var(key).ok()) {
            Ok(config) => config,
            Err(ConfigError::Missing(key)) => {
                eprintln!("skipping database test: {} is not set", key);
                return None;
            }
            Err(e) => panic!("invalid test database config: {e}"),
        };

        let mut admin_config = base.clone();
        admin_config.max_connections = 1;
        admin_config.min_connections = 0;
        admin_config.schema = None;

        let admin = admin_config
            .connect()
            .await
            .expect("Failed to connect to test database");

        let schema = format!("forum_test_{}", Uuid::new_v4().simple());
        admin
            .execute(Statement::from_string(
                DatabaseBackend::Postgres,
                format!(r#"CREATE SCHEMA "{}""#, schema),
            ))
            .await
            .expect("Failed to create test schema");

        let mut scoped_config = base;
        scoped_config.max_connections = 2;
        scoped_config.min_connections = 0;
        scoped_config.schema = Some(schema.clone());

        let database = scoped_config
            .connect()
            .await
            .expect("Failed to connect to test schema");

        Some(Self {
            database: Arc::new(database),
            admin,
            schema,
        })
    }

    pub async fn teardown(self) {
        drop(self.database);

        let result = self
            .admin
            .execute(Statement::from_string(
                DatabaseBackend::Postgres,
                format!(r#"DROP SCHEMA IF EXISTS "{}" CASCADE"#, self.schema),
            ))
            .await;

        if let Err(e) = result {
            eprintln!("failed to drop test schema {}: {}", self.schema, e);
        }
    }
}
