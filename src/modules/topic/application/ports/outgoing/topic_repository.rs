use async_trait::async_trait;

use crate::modules::topic::application::domain::entities::TopicId;
use crate::shared::db::StoreFault;

// Input DTO for creating a topic. The id is always assigned by the store.
#[derive(Debug, Clone)]
pub struct CreateTopicData {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum TopicRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Topics table does not exist: {0}")]
    TableMissing(String),

    #[error("Topic already exists")]
    TopicAlreadyExists,

    #[error("Constraint violated: {0}")]
    ConstraintViolation(String),
}

impl From<StoreFault> for TopicRepositoryError {
    fn from(fault: StoreFault) -> Self {
        match fault {
            StoreFault::TableMissing(msg) => TopicRepositoryError::TableMissing(msg),
            StoreFault::UniqueViolation(_) => TopicRepositoryError::TopicAlreadyExists,
            StoreFault::ConstraintViolation(msg) => TopicRepositoryError::ConstraintViolation(msg),
            StoreFault::Other(msg) => TopicRepositoryError::DatabaseError(msg),
        }
    }
}

#[async_trait]
pub trait TopicRepository: Send + Sync {
    /// Insert a topic and return the id the store assigned to it.
    async fn create_topic(&self, data: CreateTopicData) -> Result<TopicId, TopicRepositoryError>;
}
