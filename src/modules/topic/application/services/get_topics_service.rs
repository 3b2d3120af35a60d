use async_trait::async_trait;

use crate::topic::application::{
    domain::entities::Topic,
    ports::incoming::use_cases::{GetTopicsError, GetTopicsUseCase},
    ports::outgoing::{TopicQuery, TopicQueryError},
};

#[derive(Debug, Clone)]
pub struct GetTopicsService<Q>
where
    Q: TopicQuery + Send + Sync,
{
    query: Q,
}

impl<Q> GetTopicsService<Q>
where
    Q: TopicQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetTopicsUseCase for GetTopicsService<Q>
where
    Q: TopicQuery + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<Topic>, GetTopicsError> {
        self.query.get_all().await.map_err(|e| match e {
            TopicQueryError::TableMissing(msg) => GetTopicsError::TableMissing(msg),
            other => GetTopicsError::QueryFailed(other.to_string()),
        })
    }
}
