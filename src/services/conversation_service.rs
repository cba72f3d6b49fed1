//! Conversation service - Cross-call memory for the voice agent.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::ConversationTurn;
use crate::errors::AppResult;
use crate::infra::ConversationRepository;

/// Conversation service trait for dependency injection.
#[async_trait]
pub trait ConversationService: Send + Sync {
    /// Persist one exchange: the caller's message and the agent's reply.
    async fn record_turn(
        &self,
        phone: &str,
        user_message: &str,
        assistant_message: &str,
    ) -> AppResult<()>;

    /// Load the last `limit` turns for a phone in chronological order
    /// (oldest first), ready to replay as agent context.
    async fn history(&self, phone: &str, limit: u64) -> AppResult<Vec<ConversationTurn>>;
}

/// Concrete implementation of ConversationService using repository.
pub struct ConversationManager {
    repo: Arc<dyn ConversationRepository>,
}

impl ConversationManager {
    /// Create new conversation service instance with repository
    pub fn new(repo: Arc<dyn ConversationRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl ConversationService for ConversationManager {
    async fn record_turn(
        &self,
        phone: &str,
        user_message: &str,
        assistant_message: &str,
    ) -> AppResult<()> {
        self.repo
            .append_exchange(phone, user_message, assistant_message)
            .await
    }

    async fn history(&self, phone: &str, limit: u64) -> AppResult<Vec<ConversationTurn>> {
        // The repository returns newest-first so the LIMIT picks the most
        // recent turns; flip to chronological for the consumer.
        let mut turns = self.repo.recent_for_phone(phone, limit).await?;
        turns.reverse();
        Ok(turns)
    }
}
