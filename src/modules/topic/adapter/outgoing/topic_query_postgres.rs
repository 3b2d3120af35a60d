use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder};
use std::sync::Arc;

use crate::modules::topic::application::domain::entities::{Topic, TopicId};
use crate::modules::topic::application::ports::outgoing::{TopicQuery, TopicQueryError};
use crate::shared::db::StoreFault;

// SeaORM entity
use super::sea_orm_entity::{Column as TopicColumn, Entity as TopicEntity, Model as TopicModel};

#[derive(Debug, Clone)]
pub struct TopicQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl TopicQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_db_err(e: DbErr) -> TopicQueryError {
        let fault = StoreFault::from(&e);
        if fault.is_table_missing() {
            tracing::warn!("Topics query against missing table: {}", e);
        } else {
            tracing::error!("Topics query failed: {}", e);
        }
        TopicQueryError::from(fault)
    }
}

#[async_trait]
impl TopicQuery for TopicQueryPostgres {
    async fn get_all(&self) -> Result<Vec<Topic>, TopicQueryError> {
        let models: Vec<TopicModel> = TopicEntity::find()
            .order_by_asc(TopicColumn::Id)
            .all(&*self.db)
            .await
            .map_err(Self::map_db_err)?;

        Ok(models.iter().map(TopicModel::to_domain).collect())
    }

    // Ids <= 0 still hit the store: a dropped table must surface as a fault.
    async fn get_topic_by_id(&self, id: TopicId) -> Result<Option<Topic>, TopicQueryError> {
        let model = TopicEntity::find_by_id(id.value())
            .one(&*self.db)
            .await
            .map_err(Self::map_db_err)?;

        Ok(model.as_ref().map(TopicModel::to_domain))
    }

    async fn get_topic_by_name(&self, name: &str) -> Result<Option<Topic>, TopicQueryError> {
        let model = TopicEntity::find()
            .filter(TopicColumn::Name.eq(name))
            .one(&*self.db)
            .await
            .map_err(Self::map_db_err)?;

        Ok(model.as_ref().map(TopicModel::to_domain))
    }
}
