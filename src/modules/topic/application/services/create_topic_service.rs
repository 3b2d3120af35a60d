use async_trait::async_trait;

use crate::topic::application::domain::entities::Topic;
use crate::topic::application::ports::{
    incoming::use_cases::{CreateTopicCommand, CreateTopicError, CreateTopicUseCase},
    outgoing::{CreateTopicData, TopicRepository, TopicRepositoryError},
};

#[derive(Debug, Clone)]
pub struct CreateTopicService<R>
where
    R: TopicRepository + Send + Sync,
{
    repository: R,
}

impl<R> CreateTopicService<R>
where
    R: TopicRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> CreateTopicUseCase for CreateTopicService<R>
where
    R: TopicRepository + Send + Sync,
{
    async fn execute(&self, command: CreateTopicCommand) -> Result<Topic, CreateTopicError> {
        let data = CreateTopicData {
            name: command.name().to_string(),
            description: command.description().cloned().unwrap_or_default(),
        };

        let id = self
            .repository
            .create_topic(data.clone())
            .await
            .map_err(|e| match e {
                TopicRepositoryError::TopicAlreadyExists => CreateTopicError::TopicAlreadyExists,
                TopicRepositoryError::TableMissing(msg) => CreateTopicError::TableMissing(msg),
                other => CreateTopicError::RepositoryError(other.to_string()),
            })?;

        Ok(Topic {
            id,
            name: data.name,
            description: data.description,
        })
    }
}
