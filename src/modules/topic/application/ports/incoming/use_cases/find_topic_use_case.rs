use async_trait::async_trait;

use crate::topic::application::domain::entities::{Topic, TopicId};

#[derive(Debug, Clone, thiserror::Error)]
pub enum FindTopicError {
    #[error("Topics table does not exist: {0}")]
    TableMissing(String),

    #[error("Failed to fetch topic: {0}")]
    QueryFailed(String),
}

/// Keyed topic lookups. `Ok(None)` means no such topic.
#[async_trait]
pub trait FindTopicUseCase: Send + Sync {
    async fn by_id(&self, id: TopicId) -> Result<Option<Topic>, FindTopicError>;

    async fn by_name(&self, name: &str) -> Result<Option<Topic>, FindTopicError>;
}
