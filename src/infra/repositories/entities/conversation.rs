//! Conversation database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::{ConversationTurn, SpeakerRole};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "conversations")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub phone: String,
    pub role: String,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub created_at: Option<DateTime>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity
impl From<Model> for ConversationTurn {
    fn from(model: Model) -> Self {
        ConversationTurn {
            id: model.id,
            phone: model.phone,
            role: SpeakerRole::from(model.role.as_str()),
            content: model.content,
            created_at: model.created_at,
        }
    }
}
