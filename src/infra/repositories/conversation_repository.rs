//! Conversation repository - append-only message history per phone number.

use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, QuerySelect, Set,
};

use super::entities::conversation::{self, ActiveModel, Entity as ConversationEntity};
use crate::config::{ROLE_ASSISTANT, ROLE_USER};
use crate::domain::ConversationTurn;
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Conversation repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait ConversationRepository: Send + Sync {
    /// Append one full exchange (caller message + agent reply) for a phone.
    /// Both rows are written in a single statement so a partial turn can
    /// never be persisted.
    async fn append_exchange(
        &self,
        phone: &str,
        user_message: &str,
        assistant_message: &str,
    ) -> AppResult<()>;

    /// Fetch the most recent `limit` turns for a phone, newest first.
    async fn recent_for_phone(&self, phone: &str, limit: u64) -> AppResult<Vec<ConversationTurn>>;
}

/// Concrete implementation of ConversationRepository
pub struct ConversationStore {
    db: DatabaseConnection,
}

impl ConversationStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ConversationRepository for ConversationStore {
    async fn append_exchange(
        &self,
        phone: &str,
        user_message: &str,
        assistant_message: &str,
    ) -> AppResult<()> {
        let rows = [
            ActiveModel {
                phone: Set(phone.to_string()),
                role: Set(ROLE_USER.to_string()),
                content: Set(user_message.to_string()),
                ..Default::default()
            },
            ActiveModel {
                phone: Set(phone.to_string()),
                role: Set(ROLE_ASSISTANT.to_string()),
                content: Set(assistant_message.to_string()),
                ..Default::default()
            },
        ];

        ConversationEntity::insert_many(rows)
            .exec_without_returning(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(())
    }

    async fn recent_for_phone(&self, phone: &str, limit: u64) -> AppResult<Vec<ConversationTurn>> {
        // Rows from one exchange share a statement timestamp; the id
        // tiebreaker keeps them in insertion order.
        let models = ConversationEntity::find()
            .filter(conversation::Column::Phone.eq(phone))
            .order_by_desc(conversation::Column::CreatedAt)
            .order_by_desc(conversation::Column::Id)
            .limit(limit)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(ConversationTurn::from).collect())
    }
}
