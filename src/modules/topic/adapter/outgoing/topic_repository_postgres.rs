use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, Set};
use std::sync::Arc;

use crate::modules::topic::application::domain::entities::TopicId;
use crate::modules::topic::application::ports::outgoing::{
    CreateTopicData, TopicRepository, TopicRepositoryError,
};
use crate::shared::db::StoreFault;

// SeaORM entity imports
use super::sea_orm_entity::{ActiveModel as TopicActiveModel, Model as TopicModel};

#[derive(Debug, Clone)]
pub struct TopicRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl TopicRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_db_err(e: DbErr) -> TopicRepositoryError {
        let fault = StoreFault::from(&e);
        match &fault {
            StoreFault::TableMissing(_) => tracing::warn!("Insert into topics failed: {}", e),
            StoreFault::UniqueViolation(_) => tracing::debug!("Duplicate topic name: {}", e),
            _ => tracing::error!("Insert into topics failed: {}", e),
        }
        TopicRepositoryError::from(fault)
    }
}

#[async_trait]
impl TopicRepository for TopicRepositoryPostgres {
    async fn create_topic(&self, data: CreateTopicData) -> Result<TopicId, TopicRepositoryError> {
        let active = TopicActiveModel {
            name: Set(data.name),
            description: Set(Some(data.description)),
            ..Default::default()
        };

        let inserted: TopicModel = active.insert(&*self.db).await.map_err(Self::map_db_err)?;

        Ok(TopicId::from(inserted.id))
    }
}
