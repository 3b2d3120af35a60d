use async_trait::async_trait;
use sea_orm::sea_query::{Alias, Table};
use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr, EntityTrait, Schema};
use std::sync::Arc;

use crate::shared::db::{SchemaError, StoreFault, TableSchema};

use super::sea_orm_entity::Entity as TopicEntity;

pub const TOPICS_TABLE: &str = "topics";

#[derive(Debug, Clone)]
pub struct TopicSchemaPostgres {
    db: Arc<DatabaseConnection>,
}

impl TopicSchemaPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_db_err(e: DbErr) -> SchemaError {
        let fault = StoreFault::from(&e);
        if fault.is_table_missing() {
            tracing::warn!("Table {} does not exist: {}", TOPICS_TABLE, e);
        } else {
            tracing::error!("Schema operation on {} failed: {}", TOPICS_TABLE, e);
        }
        SchemaError::from(fault)
    }
}

#[async_trait]
impl TableSchema for TopicSchemaPostgres {
    fn table_name(&self) -> &'static str {
        TOPICS_TABLE
    }

    async fn initialize(&self) -> Result<(), SchemaError> {
        let backend = self.db.get_database_backend();

        // id SERIAL PRIMARY KEY, name TEXT NOT NULL UNIQUE, description TEXT
        let mut stmt = Schema::new(backend).create_table_from_entity(TopicEntity);
        stmt.if_not_exists();

        self.db
            .execute(backend.build(&stmt))
            .await
            .map_err(Self::map_db_err)?;

        tracing::info!("Table {} is ready", TOPICS_TABLE);
        Ok(())
    }

    async fn clear_table(&self) -> Result<u64, SchemaError> {
        let result = TopicEntity::delete_many()
            .exec(&*self.db)
            .await
            .map_err(Self::map_db_err)?;

        tracing::debug!(
            "Cleared {} rows from {}",
            result.rows_affected,
            TOPICS_TABLE
        );
        Ok(result.rows_affected)
    }

    async fn drop_table(&self) -> Result<(), SchemaError> {
        let backend = self.db.get_database_backend();
        let stmt = Table::drop()
            .table(Alias::new(TOPICS_TABLE))
            .if_exists()
            .to_owned();

        self.db
            .execute(backend.build(&stmt))
            .await
            .map_err(Self::map_db_err)?;

        tracing::info!("Table {} dropped", TOPICS_TABLE);
        Ok(())
    }
}
