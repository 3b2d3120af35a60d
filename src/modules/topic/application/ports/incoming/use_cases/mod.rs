mod create_topic_use_case;
mod find_topic_use_case;
mod get_topics_use_case;

pub use create_topic_use_case::{
    CreateTopicCommand, CreateTopicCommandError, CreateTopicError, CreateTopicUseCase,
};
pub use find_topic_use_case::{FindTopicError, FindTopicUseCase};
pub use get_topics_use_case::{GetTopicsError, GetTopicsUseCase};
