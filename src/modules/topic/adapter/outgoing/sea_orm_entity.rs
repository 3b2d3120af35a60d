use crate::modules::topic::application::domain::entities::{Topic, TopicId};
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "topics")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    #[sea_orm(column_type = "Text", unique)]
    pub name: String,

    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
}

impl Model {
    pub fn to_domain(&self) -> Topic {
        Topic {
            id: TopicId::from(self.id),
            name: self.name.clone(),
            description: self.description.clone().unwrap_or_default(),
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
