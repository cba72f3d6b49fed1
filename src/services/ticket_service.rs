//! Ticket service - Support ticket intake and lookup.

use async_trait::async_trait;
use std::sync::Arc;

use crate::config::{is_valid_ticket_priority, VALID_TICKET_PRIORITIES};
use crate::domain::Ticket;
use crate::errors::{AppError, AppResult};
use crate::infra::TicketRepository;

/// Ticket service trait for dependency injection.
#[async_trait]
pub trait TicketService: Send + Sync {
    /// Open a new support ticket. The created record carries the
    /// database-assigned id callers quote as their reference number.
    async fn open_ticket(&self, phone: &str, issue: &str, priority: &str) -> AppResult<Ticket>;

    /// List all tickets for a phone, newest first.
    async fn tickets_for(&self, phone: &str) -> AppResult<Vec<Ticket>>;
}

/// Concrete implementation of TicketService using repository.
pub struct TicketManager {
    repo: Arc<dyn TicketRepository>,
}

impl TicketManager {
    /// Create new ticket service instance with repository
    pub fn new(repo: Arc<dyn TicketRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl TicketService for TicketManager {
    async fn open_ticket(&self, phone: &str, issue: &str, priority: &str) -> AppResult<Ticket> {
        if !is_valid_ticket_priority(priority) {
            return Err(AppError::validation(format!(
                "Invalid ticket priority '{}', expected one of: {}",
                priority,
                VALID_TICKET_PRIORITIES.join(", ")
            )));
        }

        self.repo.create(phone, issue, priority).await
    }

    async fn tickets_for(&self, phone: &str) -> AppResult<Vec<Ticket>> {
        self.repo.list_for_phone(phone).await
    }
}
