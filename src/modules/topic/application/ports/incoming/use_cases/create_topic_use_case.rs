use async_trait::async_trait;

use crate::topic::application::domain::entities::Topic;

//
// ──────────────────────────────────────────────────────────
// Create Topic Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct CreateTopicCommand {
    name: String,
    description: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum CreateTopicCommandError {
    #[error("Name cannot be empty")]
    EmptyName,
}

impl CreateTopicCommand {
    pub fn new(name: String, description: Option<String>) -> Result<Self, CreateTopicCommandError> {
        let name = name.trim();

        if name.is_empty() {
            return Err(CreateTopicCommandError::EmptyName);
        }

        Ok(Self {
            name: name.to_string(),
            description,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&String> {
        self.description.as_ref()
    }
}

//
// ──────────────────────────────────────────────────────────
// Use Case Error
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateTopicError {
    #[error("Topic already exists")]
    TopicAlreadyExists,

    #[error("Topics table does not exist: {0}")]
    TableMissing(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait CreateTopicUseCase: Send + Sync {
    async fn execute(&self, command: CreateTopicCommand) -> Result<Topic, CreateTopicError>;
}
