//! Ticket command - Support ticket intake and listing.

use std::sync::Arc;

use crate::cli::args::{TicketAction, TicketArgs};
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::infra::{Database, TicketStore};
use crate::services::{TicketManager, TicketService};

/// Execute the ticket command
pub async fn execute(args: TicketArgs, config: Config) -> AppResult<()> {
    let db = Database::connect(&config)
        .await
        .map_err(|e| AppError::internal(format!("Database connection failed: {}", e)))?;

    let service = TicketManager::new(Arc::new(TicketStore::new(db.get_connection())));

    match args.action {
        TicketAction::Open {
            phone,
            issue,
            priority,
        } => {
            let ticket = service.open_ticket(&phone, &issue, &priority).await?;
            tracing::info!(ticket_id = ticket.id, priority = %ticket.priority, "Ticket opened");
            println!(
                "Ticket {} created with {} priority for {}",
                ticket.id,
                ticket.priority,
                phone
            );
        }
        TicketAction::List { phone } => {
            let tickets = service.tickets_for(&phone).await?;
            if tickets.is_empty() {
                println!("No tickets for {}", phone);
                return Ok(());
            }
            let json = serde_json::to_string_pretty(&tickets)
                .map_err(|e| AppError::internal(e.to_string()))?;
            println!("{}", json);
        }
    }

    Ok(())
}
