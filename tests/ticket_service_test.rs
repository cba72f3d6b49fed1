//! Ticket service unit tests.

use std::sync::Arc;

use mockall::predicate::eq;

use callcenter_store::domain::{Ticket, TicketPriority, TicketStatus};
use callcenter_store::errors::AppError;
use callcenter_store::infra::repositories::MockTicketRepository;
use callcenter_store::services::{TicketManager, TicketService};

fn sample_ticket(id: i32, priority: TicketPriority) -> Ticket {
    Ticket {
        id,
        phone: Some("+1122334455".to_string()),
        issue: Some("Cannot log in to the portal".to_string()),
        priority,
        status: TicketStatus::Open,
        created_at: None,
    }
}

#[tokio::test]
async fn test_open_ticket_success() {
    let mut repo = MockTicketRepository::new();
    repo.expect_create()
        .with(
            eq("+1122334455"),
            eq("Cannot log in to the portal"),
            eq("high"),
        )
        .returning(|_, _, _| Ok(sample_ticket(7, TicketPriority::High)));

    let service = TicketManager::new(Arc::new(repo));
    let result = service
        .open_ticket("+1122334455", "Cannot log in to the portal", "high")
        .await;

    assert!(result.is_ok());
    let ticket = result.unwrap();
    assert_eq!(ticket.id, 7);
    assert_eq!(ticket.priority, TicketPriority::High);
    assert_eq!(ticket.status, TicketStatus::Open);
}

#[tokio::test]
async fn test_open_ticket_default_priority_accepted() {
    let mut repo = MockTicketRepository::new();
    repo.expect_create()
        .with(eq("+1122334455"), eq("Line keeps dropping"), eq("medium"))
        .returning(|_, _, _| Ok(sample_ticket(8, TicketPriority::Medium)));

    let service = TicketManager::new(Arc::new(repo));
    let result = service
        .open_ticket("+1122334455", "Line keeps dropping", "medium")
        .await;

    assert!(result.is_ok());
    assert_eq!(result.unwrap().priority, TicketPriority::Medium);
}

#[tokio::test]
async fn test_open_ticket_rejects_invalid_priority() {
    // No expectations: an invalid priority must never reach the repository.
    let repo = MockTicketRepository::new();

    let service = TicketManager::new(Arc::new(repo));
    let result = service
        .open_ticket("+1122334455", "Cannot log in to the portal", "urgent")
        .await;

    assert!(matches!(result.unwrap_err(), AppError::Validation(_)));
}

#[tokio::test]
async fn test_list_tickets_success() {
    let mut repo = MockTicketRepository::new();
    repo.expect_list_for_phone()
        .with(eq("+1122334455"))
        .returning(|_| {
            Ok(vec![
                sample_ticket(2, TicketPriority::Medium),
                sample_ticket(1, TicketPriority::Low),
            ])
        });

    let service = TicketManager::new(Arc::new(repo));
    let result = service.tickets_for("+1122334455").await;

    assert!(result.is_ok());
    assert_eq!(result.unwrap().len(), 2);
}

#[tokio::test]
async fn test_list_tickets_empty() {
    let mut repo = MockTicketRepository::new();
    repo.expect_list_for_phone()
        .returning(|_| Ok(vec![]));

    let service = TicketManager::new(Arc::new(repo));
    let result = service.tickets_for("+0000000000").await;

    assert!(result.is_ok());
    assert!(result.unwrap().is_empty());
}
