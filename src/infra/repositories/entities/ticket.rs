//! Ticket database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::{Ticket, TicketPriority, TicketStatus};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "tickets")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub phone: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub issue: Option<String>,
    pub priority: Option<String>,
    pub status: Option<String>,
    pub created_at: Option<DateTime>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity
impl From<Model> for Ticket {
    fn from(model: Model) -> Self {
        Ticket {
            id: model.id,
            phone: model.phone,
            issue: model.issue,
            priority: model
                .priority
                .as_deref()
                .map(TicketPriority::from)
                .unwrap_or(TicketPriority::Medium),
            status: model
                .status
                .as_deref()
                .map(TicketStatus::from)
                .unwrap_or(TicketStatus::Open),
            created_at: model.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nullable_columns_normalize_to_schema_defaults() {
        let model = Model {
            id: 9,
            phone: Some("+1122334455".to_string()),
            issue: Some("Dropped calls".to_string()),
            priority: None,
            status: None,
            created_at: None,
        };

        let ticket = Ticket::from(model);
        assert_eq!(ticket.priority, TicketPriority::Medium);
        assert_eq!(ticket.status, TicketStatus::Open);
    }

    #[test]
    fn test_stored_values_map_to_typed_domains() {
        let model = Model {
            id: 10,
            phone: Some("+1234567890".to_string()),
            issue: None,
            priority: Some("high".to_string()),
            status: Some("in-progress".to_string()),
            created_at: None,
        };

        let ticket = Ticket::from(model);
        assert_eq!(ticket.priority, TicketPriority::High);
        assert_eq!(ticket.status, TicketStatus::InProgress);
    }
}
