use async_trait::async_trait;

use crate::modules::topic::application::domain::entities::{Topic, TopicId};
use crate::shared::db::StoreFault;

#[derive(Debug, Clone, thiserror::Error)]
pub enum TopicQueryError {
    /// The query could not be answered at all because the table is gone.
    #[error("Topics table does not exist: {0}")]
    TableMissing(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl From<StoreFault> for TopicQueryError {
    fn from(fault: StoreFault) -> Self {
        match fault {
            StoreFault::TableMissing(msg) => TopicQueryError::TableMissing(msg),
            other => TopicQueryError::DatabaseError(other.to_string()),
        }
    }
}

/// Read side of the topics table.
///
/// Keyed lookups answer `Ok(None)` when no row matches. `Err` is reserved for
/// store faults, so a missing topic and a missing table never look alike.
#[async_trait]
pub trait TopicQuery: Send + Sync {
    async fn get_all(&self) -> Result<Vec<Topic>, TopicQueryError>;

    async fn get_topic_by_id(&self, id: TopicId) -> Result<Option<Topic>, TopicQueryError>;

    async fn get_topic_by_name(&self, name: &str) -> Result<Option<Topic>, TopicQueryError>;
}
