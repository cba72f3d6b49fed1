//! Support ticket repository.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};

use super::entities::ticket::{self, ActiveModel, Entity as TicketEntity};
use crate::domain::Ticket;
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Ticket repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait TicketRepository: Send + Sync {
    /// Insert a new ticket, returning the created record (including the
    /// database-assigned id and defaulted status).
    async fn create(&self, phone: &str, issue: &str, priority: &str) -> AppResult<Ticket>;

    /// List all tickets for a phone, newest first.
    async fn list_for_phone(&self, phone: &str) -> AppResult<Vec<Ticket>>;
}

/// Concrete implementation of TicketRepository
pub struct TicketStore {
    db: DatabaseConnection,
}

impl TicketStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TicketRepository for TicketStore {
    async fn create(&self, phone: &str, issue: &str, priority: &str) -> AppResult<Ticket> {
        // status and created_at stay unset so the schema defaults apply
        let active_model = ActiveModel {
            phone: Set(Some(phone.to_string())),
            issue: Set(Some(issue.to_string())),
            priority: Set(Some(priority.to_string())),
            ..Default::default()
        };

        let model = active_model.insert(&self.db).await.map_err(AppError::from)?;
        Ok(Ticket::from(model))
    }

    async fn list_for_phone(&self, phone: &str) -> AppResult<Vec<Ticket>> {
        let models = TicketEntity::find()
            .filter(ticket::Column::Phone.eq(phone))
            .order_by_desc(ticket::Column::CreatedAt)
            .order_by_desc(ticket::Column::Id)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Ticket::from).collect())
    }
}
