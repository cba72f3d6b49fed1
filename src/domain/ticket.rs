//! Support ticket domain entity and related types.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::config::{
    PRIORITY_HIGH, PRIORITY_LOW, PRIORITY_MEDIUM, TICKET_STATUS_CLOSED, TICKET_STATUS_IN_PROGRESS,
    TICKET_STATUS_OPEN,
};

/// Ticket priority enumeration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TicketPriority {
    Low,
    Medium,
    High,
}

impl From<&str> for TicketPriority {
    fn from(s: &str) -> Self {
        match s {
            PRIORITY_LOW => TicketPriority::Low,
            PRIORITY_HIGH => TicketPriority::High,
            _ => TicketPriority::Medium,
        }
    }
}

impl std::fmt::Display for TicketPriority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TicketPriority::Low => write!(f, "{}", PRIORITY_LOW),
            TicketPriority::Medium => write!(f, "{}", PRIORITY_MEDIUM),
            TicketPriority::High => write!(f, "{}", PRIORITY_HIGH),
        }
    }
}

/// Ticket status enumeration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TicketStatus {
    Open,
    #[serde(rename = "in-progress")]
    InProgress,
    Closed,
}

impl From<&str> for TicketStatus {
    fn from(s: &str) -> Self {
        match s {
            TICKET_STATUS_IN_PROGRESS => TicketStatus::InProgress,
            TICKET_STATUS_CLOSED => TicketStatus::Closed,
            _ => TicketStatus::Open,
        }
    }
}

impl std::fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TicketStatus::Open => write!(f, "{}", TICKET_STATUS_OPEN),
            TicketStatus::InProgress => write!(f, "{}", TICKET_STATUS_IN_PROGRESS),
            TicketStatus::Closed => write!(f, "{}", TICKET_STATUS_CLOSED),
        }
    }
}

/// Support ticket domain entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ticket {
    pub id: i32,
    pub phone: Option<String>,
    pub issue: Option<String>,
    pub priority: TicketPriority,
    pub status: TicketStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<NaiveDateTime>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_from_known_values() {
        assert_eq!(TicketPriority::from("low"), TicketPriority::Low);
        assert_eq!(TicketPriority::from("medium"), TicketPriority::Medium);
        assert_eq!(TicketPriority::from("high"), TicketPriority::High);
    }

    #[test]
    fn test_priority_unknown_value_falls_back_to_medium() {
        assert_eq!(TicketPriority::from("urgent"), TicketPriority::Medium);
    }

    #[test]
    fn test_ticket_status_display_round_trip() {
        for status in [
            TicketStatus::Open,
            TicketStatus::InProgress,
            TicketStatus::Closed,
        ] {
            assert_eq!(TicketStatus::from(status.to_string().as_str()), status);
        }
    }
}
