use async_trait::async_trait;

use crate::topic::application::{
    domain::entities::{Topic, TopicId},
    ports::incoming::use_cases::{FindTopicError, FindTopicUseCase},
    ports::outgoing::{TopicQuery, TopicQueryError},
};

#[derive(Debug, Clone)]
pub struct FindTopicService<Q>
where
    Q: TopicQuery + Send + Sync,
{
    query: Q,
}

impl<Q> FindTopicService<Q>
where
    Q: TopicQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }

    fn map_err(e: TopicQueryError) -> FindTopicError {
        match e {
            TopicQueryError::TableMissing(msg) => FindTopicError::TableMissing(msg),
            other => FindTopicError::QueryFailed(other.to_string()),
        }
    }
}

#[async_trait]
impl<Q> FindTopicUseCase for FindTopicService<Q>
where
    Q: TopicQuery + Send + Sync,
{
    async fn by_id(&self, id: TopicId) -> Result<Option<Topic>, FindTopicError> {
        self.query.get_topic_by_id(id).await.map_err(Self::map_err)
    }

    async fn by_name(&self, name: &str) -> Result<Option<Topic>, FindTopicError> {
        self.query
            .get_topic_by_name(name)
            .await
            .map_err(Self::map_err)
    }
}
