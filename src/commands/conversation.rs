//! Conversation command - Transcript history and recording.

use std::sync::Arc;

use crate::cli::args::{ConversationAction, ConversationArgs};
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::infra::{ConversationStore, Database};
use crate::services::{ConversationManager, ConversationService};

/// Execute the conversation command
pub async fn execute(args: ConversationArgs, config: Config) -> AppResult<()> {
    let db = Database::connect(&config)
        .await
        .map_err(|e| AppError::internal(format!("Database connection failed: {}", e)))?;

    let service = ConversationManager::new(Arc::new(ConversationStore::new(db.get_connection())));

    match args.action {
        ConversationAction::History { phone, limit } => {
            let turns = service.history(&phone, limit).await?;
            if turns.is_empty() {
                println!("No conversation history for {}", phone);
            }
            for turn in turns {
                println!("{}: {}", turn.role, turn.content);
            }
        }
        ConversationAction::Record {
            phone,
            user_message,
            assistant_message,
        } => {
            service
                .record_turn(&phone, &user_message, &assistant_message)
                .await?;
            tracing::info!(phone = %phone, "Conversation exchange recorded");
            println!("Recorded exchange for {}", phone);
        }
    }

    Ok(())
}
