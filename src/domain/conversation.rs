//! Conversation turn domain entity.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::config::{ROLE_ASSISTANT, ROLE_USER};

/// Which side of the call produced a message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpeakerRole {
    User,
    Assistant,
}

impl From<&str> for SpeakerRole {
    fn from(s: &str) -> Self {
        match s {
            ROLE_ASSISTANT => SpeakerRole::Assistant,
            _ => SpeakerRole::User,
        }
    }
}

impl std::fmt::Display for SpeakerRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SpeakerRole::User => write!(f, "{}", ROLE_USER),
            SpeakerRole::Assistant => write!(f, "{}", ROLE_ASSISTANT),
        }
    }
}

/// One persisted message of a phone's conversation history.
///
/// Append-only: rows are never updated or deleted. A turn may exist for a
/// phone number with no customer record (calls can precede onboarding).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationTurn {
    pub id: i32,
    pub phone: String,
    pub role: SpeakerRole,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<NaiveDateTime>,
}
