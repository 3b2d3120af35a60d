pub mod sea_orm_entity;
mod topic_query_postgres;
mod topic_repository_postgres;
mod topic_schema_postgres;

pub use topic_query_postgres::TopicQueryPostgres;
pub use topic_repository_postgres::TopicRepositoryPostgres;
pub use topic_schema_postgres::{TopicSchemaPostgres, TOPICS_TABLE};
